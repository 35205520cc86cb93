//! System git backend
//!
//! Shells out to the `git` binary with an isolated environment. Every call is
//! blocking and runs once per invocation.

use super::Vcs;
use crate::core::config::Signature;
use crate::core::error::{CollaboratorError, ReleaseResult};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// Git backend using system git
pub struct SystemGit {
  /// Repository working directory
  repo_path: PathBuf,

  /// Working tree root
  work_tree: PathBuf,
}

impl SystemGit {
  /// Open a git repository
  pub fn open(path: &Path) -> ReleaseResult<Self> {
    let output = Command::new("git")
      .arg("-C")
      .arg(path)
      .args(["rev-parse", "--show-toplevel"])
      .output()
      .map_err(|source| CollaboratorError::Io {
        operation: "git rev-parse".to_string(),
        path: path.to_path_buf(),
        source,
      })?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      if stderr.contains("not a git repository") || stderr.contains("cannot change to") {
        return Err(
          CollaboratorError::RepoNotFound {
            path: path.to_path_buf(),
          }
          .into(),
        );
      }
      return Err(
        CollaboratorError::Git {
          operation: "open".to_string(),
          path: path.to_path_buf(),
          stderr: stderr.trim().to_string(),
        }
        .into(),
      );
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let work_tree = PathBuf::from(stdout.trim());
    debug!("Opened git work tree at {}", work_tree.display());

    Ok(Self {
      repo_path: path.to_path_buf(),
      work_tree,
    })
  }

  /// Working tree root
  pub fn work_tree(&self) -> &Path {
    &self.work_tree
  }

  /// Run git and return stdout, mapping a non-zero exit to `CollaboratorError::Git`
  fn run(&self, operation: &str, cmd: &mut Command) -> ReleaseResult<String> {
    debug!("git {}", operation);
    let output: Output = cmd.output().map_err(|source| CollaboratorError::Io {
      operation: format!("git {}", operation),
      path: self.repo_path.clone(),
      source,
    })?;

    if !output.status.success() {
      return Err(
        CollaboratorError::Git {
          operation: operation.to_string(),
          path: self.repo_path.clone(),
          stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into(),
      );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
  }

  /// Create a safe git command with isolated environment
  ///
  /// - Sets working directory to repo path
  /// - Clears environment variables
  /// - Whitelists only PATH and HOME
  /// - Adds safe configuration overrides
  fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    cmd.arg("-C").arg(&self.repo_path);

    // Isolated environment (don't trust global config)
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    cmd.arg("-c").arg("advice.detachedHead=false");
    cmd.arg("-c").arg("core.quotePath=false"); // Don't escape non-ASCII

    cmd
  }

  /// Git command that records `who` as committer/tagger
  fn git_cmd_as(&self, who: &Signature) -> Command {
    let mut cmd = self.git_cmd();
    cmd.arg("-c").arg(format!("user.name={}", who.name));
    cmd.arg("-c").arg(format!("user.email={}", who.email));
    cmd
  }
}

impl Vcs for SystemGit {
  fn is_dirty(&self) -> ReleaseResult<bool> {
    let stdout = self.run("status", self.git_cmd().args(["status", "--porcelain"]))?;
    Ok(has_tracked_changes(&stdout))
  }

  fn head_commit(&self) -> ReleaseResult<String> {
    let stdout = self.run("rev-parse HEAD", self.git_cmd().args(["rev-parse", "HEAD"]))?;
    Ok(stdout.trim().to_string())
  }

  fn tag_exists(&self, tag: &str) -> ReleaseResult<bool> {
    let stdout = self.run("tag --list", self.git_cmd().args(["tag", "--list", tag]))?;
    Ok(stdout.lines().any(|line| line.trim() == tag))
  }

  fn create_tag(&self, tag: &str, tagger: &Signature, message: &str) -> ReleaseResult<()> {
    self.run(
      "tag",
      self.git_cmd_as(tagger).args(["tag", "--annotate", tag, "--message", message, "HEAD"]),
    )?;
    Ok(())
  }

  fn commit_paths(&self, paths: &[PathBuf], author: &Signature, message: &str) -> ReleaseResult<String> {
    self.run("add", self.git_cmd().arg("add").arg("--").args(paths))?;
    self.run(
      "commit",
      self
        .git_cmd_as(author)
        .args(["commit", "--message", message])
        .arg(format!("--author={}", author))
        .arg("--only")
        .arg("--")
        .args(paths),
    )?;
    self.head_commit()
  }
}

/// Whether `git status --porcelain` output lists anything other than untracked files
fn has_tracked_changes(porcelain: &str) -> bool {
  porcelain
    .lines()
    .filter(|line| !line.trim().is_empty())
    .any(|line| !line.starts_with("??"))
}
