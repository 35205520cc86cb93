//! Tests for the `status` command

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_status_all_ok() -> Result<()> {
  let project = TestProject::ready("1.4.7")?;
  let head = project.head()?;

  let output = run_relprep(&project.path, &["status"])?;
  let out = stdout(&output);

  assert!(out.contains("Configuration:       OK"));
  assert!(out.contains("Changelog:           OK"));
  assert!(out.contains("Version number:      OK"));
  assert!(out.contains("Uncommitted changes: OK"));
  assert!(out.contains("Active version:      1.4.7"));
  assert!(out.contains(&head));
  assert!(out.contains("Name:                widget"));

  Ok(())
}

#[test]
fn test_status_reports_findings_with_zero_exit() -> Result<()> {
  let project = TestProject::ready("1.4.7")?;
  project.write_config(&VALID_CONFIG.replace(
    r#"["darwin-arm64", "linux-amd64"]"#,
    r#"["darwin-arm64", "linux-amd64", "windows-amd64"]"#,
  ))?;
  project.commit("Add windows target")?;
  project.write_file("README.md", "# widget\n\nchanged\n")?;

  let output = run_relprep(&project.path, &["status", "--verbose"])?;
  let out = stdout(&output);

  assert!(out.contains("Configuration:       NOT OK"));
  assert!(out.contains("Uncommitted changes: NOT OK"));
  assert!(out.contains("[missing-target] file 'bin' has no entry for target 'windows-amd64'"));
  assert!(out.contains("- dist/widget-linux-amd64/linux-amd64"));
  assert!(out.contains("- README.md/-"));
  assert!(out.contains("CHANGELOG.md (concatenate)"));

  Ok(())
}

#[test]
fn test_status_after_tagging_version() -> Result<()> {
  let project = TestProject::ready("1.4.7")?;
  git(&project.path, &["tag", "-a", "v1.4.7", "-m", "Release 1.4.7"])?;

  let output = run_relprep(&project.path, &["status"])?;
  assert!(stdout(&output).contains("Version number:      NOT OK"));

  Ok(())
}

#[test]
fn test_status_json() -> Result<()> {
  let project = TestProject::ready("1.4.7")?;
  project.write_changelog("# Changelog\n")?;

  let output = run_relprep(&project.path, &["status", "--json"])?;
  let out = stdout(&output);

  assert!(out.contains("\"version\": \"1.4.7\""));
  assert!(out.contains("\"configValid\": true"));
  assert!(out.contains("\"complete\": false"));
  assert!(out.contains("has no entries"));
  assert!(out.contains("\"violations\": []"));

  Ok(())
}

#[test]
fn test_status_without_config_fails() -> Result<()> {
  let project = TestProject::new()?;

  let output = relprep_output(&project.path, &["status"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("error: No release configuration found."));

  Ok(())
}

#[test]
fn test_status_outside_git_repository_fails() -> Result<()> {
  let dir = tempfile::TempDir::new()?;
  std::fs::create_dir_all(dir.path().join("release"))?;
  std::fs::write(dir.path().join("release/config.json"), VALID_CONFIG)?;
  std::fs::write(dir.path().join("release/VERSION"), "1.0.0")?;

  let output = relprep_output(dir.path(), &["status"])?;
  assert_eq!(output.status.code(), Some(2));
  assert!(stderr(&output).contains("Git repository not found"));

  Ok(())
}
