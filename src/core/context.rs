//! Release context - a read-only snapshot of everything a release depends on
//!
//! Built fresh for every status query or tag attempt from the loaded config and
//! version plus the version-control and changelog collaborators. Invalid
//! configuration and an incomplete changelog are recorded as data; only a
//! collaborator that cannot answer at all (e.g. not a git repository) makes
//! `build` fail.

use crate::checks::{self, Violation};
use crate::core::config::ReleaseConfig;
use crate::core::error::ReleaseResult;
use crate::core::vcs::Vcs;
use crate::core::version::Version;
use crate::release::{ChangelogCheck, ChangelogStatus};
use std::path::Path;
use tracing::debug;

/// Snapshot of release readiness
#[derive(Debug, Clone)]
pub struct ReleaseContext {
  pub config: ReleaseConfig,

  /// Version-of-record
  pub version: Version,

  /// HEAD commit of the source root
  pub commit_hash: String,

  /// Tracked files have uncommitted changes
  pub dirty: bool,

  /// `v{version}` is already tagged
  pub released: bool,

  pub changelog: ChangelogStatus,

  /// Result of non-strict validation
  pub violations: Vec<Violation>,
}

impl ReleaseContext {
  /// Assemble the snapshot
  pub fn build(
    root: &Path,
    config: ReleaseConfig,
    version: Version,
    vcs: &dyn Vcs,
    changelog: &dyn ChangelogCheck,
  ) -> ReleaseResult<Self> {
    let commit_hash = vcs.head_commit()?;
    let dirty = vcs.is_dirty()?;
    let released = vcs.tag_exists(&version.tag_name())?;

    let violations = checks::validate(&config, root, false);
    let changelog = changelog.check();

    debug!(
      "Context: version={} commit={} dirty={} released={} violations={} changelog_complete={}",
      version,
      commit_hash,
      dirty,
      released,
      violations.len(),
      changelog.complete
    );

    Ok(Self {
      config,
      version,
      commit_hash,
      dirty,
      released,
      changelog,
      violations,
    })
  }

  pub fn config_valid(&self) -> bool {
    self.violations.is_empty()
  }

  /// Tag name for the current version
  pub fn tag_name(&self) -> String {
    self.version.tag_name()
  }

  /// Every reason the current version cannot be tagged yet
  pub fn blockers(&self) -> Vec<String> {
    let mut reasons = Vec::new();

    if !self.config_valid() {
      reasons.push(format!(
        "configuration has {} problem(s)",
        self.violations.len()
      ));
    }
    if !self.changelog.complete {
      reasons.push(format!(
        "changelog is not complete: {}",
        self.changelog.reason.as_deref().unwrap_or("no reason given")
      ));
    }
    if self.dirty {
      reasons.push("working tree has uncommitted changes".to_string());
    }
    if self.released {
      reasons.push(format!("{} is already tagged; bump the version first", self.tag_name()));
    }

    reasons
  }
}
