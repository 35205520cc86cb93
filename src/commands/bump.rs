use std::path::Path;
use tracing::info;

use crate::checks;
use crate::core::error::{ConfigError, ReleaseResult};
use crate::core::store::ConfigStore;
use crate::core::vcs::{SystemGit, Vcs};
use crate::core::version::BumpKind;

/// Run the bump command
///
/// Exactly one of `major`, `minor` or `patch` must be set. The configuration
/// is validated strictly before the version file is touched, so an invalid
/// configuration leaves the version-of-record unchanged.
pub fn run_bump(root: &Path, major: bool, minor: bool, patch: bool, commit: bool) -> ReleaseResult<()> {
  let kind = BumpKind::from_flags(major, minor, patch)?;

  let store = ConfigStore::new(root);
  let config = store.load()?;

  let violations = checks::validate(&config, root, true);
  if !violations.is_empty() {
    return Err(ConfigError::Invalid { violations }.into());
  }

  let current = store.load_version()?;
  let next = current.bump(kind);
  store.save_version(next)?;
  info!("Bumped {} version: {} -> {}", kind, current, next);

  println!("New version is now {}", next);

  if commit {
    let vcs = SystemGit::open(&root.join(&config.source_root))?;
    let hash = vcs.commit_paths(
      &[store.version_path()],
      &config.committer(),
      &format!("Bump version to {}", next),
    )?;
    println!("Committed {} as {}", store.version_path().display(), hash);
  }

  Ok(())
}
