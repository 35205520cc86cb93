//! Tests for the `init` command

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_init_writes_sample_files() -> Result<()> {
  let project = TestProject::new()?;

  let output = run_relprep(&project.path, &["init"])?;
  assert!(stdout(&output).contains("release/config.json"));

  assert!(project.file_exists("release/config.json"));
  assert_eq!(project.read_file("release/VERSION")?, "0.0.0");
  assert!(project.read_file("release/CHANGELOG.md")?.contains("TODO"));

  let config = project.read_file("release/config.json")?;
  assert!(config.contains("\"committerEmail\""));
  assert!(config.contains("\"sourceRoot\": \".\""));
  assert!(config.contains("TODO"));

  Ok(())
}

#[test]
fn test_init_refuses_existing_config() -> Result<()> {
  let project = TestProject::new()?;
  project.write_config(VALID_CONFIG)?;

  let output = relprep_output(&project.path, &["init"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("error: Configuration file already exists"));

  // Existing config untouched
  assert_eq!(project.read_file("release/config.json")?, VALID_CONFIG);

  Ok(())
}

#[test]
fn test_init_keeps_existing_version_and_changelog() -> Result<()> {
  let project = TestProject::new()?;
  project.write_version("2.3.4")?;
  project.write_changelog(COMPLETE_CHANGELOG)?;

  run_relprep(&project.path, &["init"])?;

  assert_eq!(project.read_file("release/VERSION")?, "2.3.4");
  assert_eq!(project.read_file("release/CHANGELOG.md")?, COMPLETE_CHANGELOG);

  Ok(())
}

#[test]
fn test_sample_config_fails_validation() -> Result<()> {
  let project = TestProject::new()?;
  run_relprep(&project.path, &["init"])?;

  let output = run_relprep(&project.path, &["status"])?;
  assert!(stdout(&output).contains("Configuration:       NOT OK"));

  Ok(())
}
