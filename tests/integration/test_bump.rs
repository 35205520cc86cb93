//! Tests for the `bump` command

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_bump_each_level() -> Result<()> {
  let cases = [("--major", "2.0.0"), ("--minor", "1.5.0"), ("--patch", "1.4.8")];

  for (flag, expected) in cases {
    let project = TestProject::ready("1.4.7")?;
    let output = run_relprep(&project.path, &["bump", flag])?;

    assert!(stdout(&output).contains(&format!("New version is now {}", expected)));
    assert_eq!(project.read_file("release/VERSION")?, expected);
  }

  Ok(())
}

#[test]
fn test_bump_short_flags() -> Result<()> {
  let project = TestProject::ready("0.9.3")?;

  run_relprep(&project.path, &["bump", "-m"])?;
  assert_eq!(project.read_file("release/VERSION")?, "0.10.0");

  run_relprep(&project.path, &["bump", "-M"])?;
  assert_eq!(project.read_file("release/VERSION")?, "1.0.0");

  Ok(())
}

#[test]
fn test_bump_requires_exactly_one_flag() -> Result<()> {
  let project = TestProject::ready("1.4.7")?;

  let none = relprep_output(&project.path, &["bump"])?;
  assert_eq!(none.status.code(), Some(1));
  assert!(stderr(&none).contains("Must specify which version to bump"));

  let two = relprep_output(&project.path, &["bump", "--major", "--patch"])?;
  assert_eq!(two.status.code(), Some(1));
  assert!(stderr(&two).contains("(2 requested)"));

  assert_eq!(project.read_file("release/VERSION")?, "1.4.7");

  Ok(())
}

#[test]
fn test_bump_refuses_invalid_config() -> Result<()> {
  let project = TestProject::ready("1.4.7")?;
  project.write_config(&VALID_CONFIG.replace("Release Bot", "TODO: name"))?;

  let output = relprep_output(&project.path, &["bump", "--patch"])?;
  assert_eq!(output.status.code(), Some(3));

  let err = stderr(&output);
  assert!(err.contains("config: [placeholder] committerName still holds placeholder text"));
  assert!(err.contains("error: Configuration is not valid"));

  assert_eq!(project.read_file("release/VERSION")?, "1.4.7");

  Ok(())
}

#[test]
fn test_bump_refuses_missing_artifact() -> Result<()> {
  let project = TestProject::ready("1.4.7")?;
  std::fs::remove_file(project.path.join("dist/widget-linux-amd64"))?;

  let output = relprep_output(&project.path, &["bump", "--minor"])?;
  assert_eq!(output.status.code(), Some(3));
  assert!(stderr(&output).contains("[file-not-found]"));

  Ok(())
}

#[test]
fn test_bump_malformed_version() -> Result<()> {
  let project = TestProject::ready("1.4")?;

  let output = relprep_output(&project.path, &["bump", "--patch"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("Invalid version string"));
  assert_eq!(project.read_file("release/VERSION")?, "1.4");

  Ok(())
}

#[test]
fn test_bump_leaves_no_temp_files() -> Result<()> {
  let project = TestProject::ready("1.4.7")?;
  run_relprep(&project.path, &["bump", "--patch"])?;

  let mut names: Vec<String> = std::fs::read_dir(project.path.join("release"))?
    .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
    .collect::<std::io::Result<_>>()?;
  names.sort();
  assert_eq!(names, vec!["CHANGELOG.md", "VERSION", "config.json"]);

  Ok(())
}

#[test]
fn test_bump_commit() -> Result<()> {
  let project = TestProject::ready("1.4.7")?;
  let before = project.head()?;

  let output = run_relprep(&project.path, &["bump", "--minor", "--commit"])?;
  let after = project.head()?;
  assert_ne!(before, after);
  assert!(stdout(&output).contains(&after));

  let log = git(&project.path, &["log", "-1", "--format=%s|%an|%ae"])?;
  assert_eq!(
    String::from_utf8_lossy(&log.stdout).trim(),
    "Bump version to 1.5.0|Release Bot|release@example.com"
  );

  // Only the version file is in the commit and the tree is clean afterwards
  let files = git(&project.path, &["show", "--name-only", "--format=", "HEAD"])?;
  assert_eq!(String::from_utf8_lossy(&files.stdout).trim(), "release/VERSION");
  let status = run_relprep(&project.path, &["status"])?;
  assert!(stdout(&status).contains("Uncommitted changes: OK"));

  Ok(())
}
