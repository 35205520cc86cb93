//! Version-control capability
//!
//! Release logic talks to git only through the `Vcs` trait. The concrete
//! backend is `SystemGit`, opened by the command layer.

pub mod system_git;

pub use system_git::SystemGit;

use crate::core::config::Signature;
use crate::core::error::ReleaseResult;
use std::path::PathBuf;

/// Operations the release workflow needs from version control
pub trait Vcs {
  /// Whether the work tree has staged or unstaged changes (untracked files excluded)
  fn is_dirty(&self) -> ReleaseResult<bool>;

  /// Full SHA of HEAD
  fn head_commit(&self) -> ReleaseResult<String>;

  /// Whether a tag with this name exists
  fn tag_exists(&self, tag: &str) -> ReleaseResult<bool>;

  /// Create an annotated tag at HEAD
  fn create_tag(&self, tag: &str, tagger: &Signature, message: &str) -> ReleaseResult<()>;

  /// Stage `paths` and commit them; returns the new commit SHA
  fn commit_paths(&self, paths: &[PathBuf], author: &Signature, message: &str) -> ReleaseResult<String>;
}
