//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Valid configuration covering two targets plus a wildcard README
pub const VALID_CONFIG: &str = r#"{
  "sourceRoot": ".",
  "name": "widget",
  "committerEmail": "release@example.com",
  "committerName": "Release Bot",
  "targets": ["darwin-arm64", "linux-amd64"],
  "files": [
    { "id": "bin", "name": "dist/widget-darwin-arm64", "target": "darwin-arm64" },
    { "id": "bin", "name": "dist/widget-linux-amd64", "target": "linux-amd64" },
    { "id": "readme", "name": "README.md", "target": "-" }
  ],
  "templates": [{ "name": "CHANGELOG.md", "action": "concatenate" }]
}
"#;

pub const COMPLETE_CHANGELOG: &str = "# Changelog\n\n## 1.4.7\n\n- Faster startup\n";

/// A project directory backed by a git repository
pub struct TestProject {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestProject {
  /// Create an empty git repository with one commit
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();

    git(&path, &["init", "--initial-branch=main"])?;
    git(&path, &["config", "user.name", "Test User"])?;
    git(&path, &["config", "user.email", "test@example.com"])?;
    git(&path, &["config", "commit.gpgsign", "false"])?;
    git(&path, &["config", "tag.gpgsign", "false"])?;

    std::fs::write(path.join("README.md"), "# widget\n")?;
    git(&path, &["add", "."])?;
    git(&path, &["commit", "-m", "Initial commit"])?;

    Ok(Self { _root: root, path })
  }

  /// A project with a valid config, built artifacts, a complete changelog and
  /// the given version, all committed
  pub fn ready(version: &str) -> Result<Self> {
    let project = Self::new()?;
    project.write_config(VALID_CONFIG)?;
    project.write_version(version)?;
    project.write_changelog(COMPLETE_CHANGELOG)?;
    project.write_artifacts()?;
    project.commit("Prepare release")?;
    Ok(project)
  }

  pub fn write_config(&self, json: &str) -> Result<()> {
    self.write_file("release/config.json", json)
  }

  pub fn write_version(&self, version: &str) -> Result<()> {
    self.write_file("release/VERSION", version)
  }

  pub fn write_changelog(&self, content: &str) -> Result<()> {
    self.write_file("release/CHANGELOG.md", content)
  }

  /// Create the per-target binaries named in `VALID_CONFIG`
  ///
  /// `dist/` is left untracked, which does not count as a dirty tree.
  pub fn write_artifacts(&self) -> Result<()> {
    self.write_file("dist/widget-darwin-arm64", "binary")?;
    self.write_file("dist/widget-linux-amd64", "binary")
  }

  pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
    let full = self.path.join(path);
    if let Some(parent) = full.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(full, content)?;
    Ok(())
  }

  /// Commit `release/` and return the commit SHA
  pub fn commit(&self, message: &str) -> Result<String> {
    git(&self.path, &["add", "release"])?;
    git(&self.path, &["commit", "-m", message])?;
    self.head()
  }

  pub fn head(&self) -> Result<String> {
    let output = git(&self.path, &["rev-parse", "HEAD"])?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  pub fn tags(&self) -> Result<Vec<String>> {
    let output = git(&self.path, &["tag", "--list"])?;
    Ok(
      String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect(),
    )
  }

  pub fn file_exists(&self, path: &str) -> bool {
    self.path.join(path).exists()
  }

  pub fn read_file(&self, path: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(path))?)
  }
}

/// Run git command in a directory
pub fn git(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = Command::new("git")
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run git command")?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    anyhow::bail!("Git command failed: git {}\n{}", args.join(" "), stderr);
  }

  Ok(output)
}

/// Run relprep and return its output regardless of exit status
pub fn relprep_output(cwd: &Path, args: &[&str]) -> Result<Output> {
  Command::new(env!("CARGO_BIN_EXE_relprep"))
    .current_dir(cwd)
    .args(args)
    .env_remove("RUST_LOG")
    .output()
    .context("Failed to run relprep")
}

/// Run relprep, failing if it exits non-zero
pub fn run_relprep(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = relprep_output(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "relprep command failed: relprep {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

pub fn stdout(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
  String::from_utf8_lossy(&output.stderr).into_owned()
}
