//! Tests for the `tag` command

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_tag_ready_release() -> Result<()> {
  let project = TestProject::ready("1.4.7")?;
  let head = project.head()?;

  let output = run_relprep(&project.path, &["tag"])?;
  assert!(stdout(&output).contains("v1.4.7"));
  assert_eq!(project.tags()?, vec!["v1.4.7".to_string()]);

  let tagged = git(&project.path, &["rev-list", "-n", "1", "v1.4.7"])?;
  assert_eq!(String::from_utf8_lossy(&tagged.stdout).trim(), head);

  let message = git(&project.path, &["tag", "-l", "--format=%(contents:subject)|%(taggername)", "v1.4.7"])?;
  assert_eq!(String::from_utf8_lossy(&message.stdout).trim(), "Release 1.4.7|Release Bot");

  Ok(())
}

#[test]
fn test_tag_twice_is_blocked() -> Result<()> {
  let project = TestProject::ready("1.4.7")?;
  run_relprep(&project.path, &["tag"])?;

  let output = relprep_output(&project.path, &["tag"])?;
  assert_eq!(output.status.code(), Some(3));
  assert!(stderr(&output).contains("v1.4.7 is already tagged"));

  Ok(())
}

#[test]
fn test_tag_blocked_lists_every_reason() -> Result<()> {
  let project = TestProject::ready("1.4.7")?;
  project.write_changelog("# Changelog\n\n## Unreleased\n\n- TODO: describe the changes\n")?;
  std::fs::remove_file(project.path.join("dist/widget-darwin-arm64"))?;

  let output = relprep_output(&project.path, &["tag"])?;
  assert_eq!(output.status.code(), Some(3));

  let err = stderr(&output);
  assert!(err.contains("Release is not ready"));
  assert!(err.contains("configuration has 1 problem(s)"));
  assert!(err.contains("changelog is not complete"));
  assert!(err.contains("working tree has uncommitted changes"));
  assert!(project.tags()?.is_empty());

  Ok(())
}

#[test]
fn test_bump_then_tag() -> Result<()> {
  let project = TestProject::ready("1.4.7")?;
  run_relprep(&project.path, &["tag"])?;

  run_relprep(&project.path, &["bump", "--patch", "--commit"])?;
  run_relprep(&project.path, &["tag"])?;

  let mut tags = project.tags()?;
  tags.sort();
  assert_eq!(tags, vec!["v1.4.7".to_string(), "v1.4.8".to_string()]);

  Ok(())
}
