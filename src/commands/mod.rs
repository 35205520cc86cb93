//! CLI commands for relprep
//!
//! - **init**: Write a sample release configuration
//! - **status**: Report release readiness
//! - **bump**: Increment the version-of-record
//! - **tag**: Tag HEAD with the current version once everything is ready
//!
//! All commands take the project root and re-read state from disk.

pub mod bump;
pub mod init;
pub mod status;
pub mod tag;

pub use bump::run_bump;
pub use init::run_init;
pub use status::run_status;
pub use tag::run_tag;

use crate::core::config::ReleaseConfig;
use crate::core::error::ReleaseResult;
use crate::core::store::ConfigStore;
use crate::core::vcs::SystemGit;
use crate::core::version::Version;
use std::path::Path;

/// Load config and version and open the configured source root
fn open_project(root: &Path) -> ReleaseResult<(ReleaseConfig, Version, SystemGit)> {
  let store = ConfigStore::new(root);
  let config = store.load()?;
  let version = store.load_version()?;
  let vcs = SystemGit::open(&root.join(&config.source_root))?;
  Ok((config, version, vcs))
}
