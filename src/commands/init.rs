use std::path::Path;
use tracing::info;

use crate::core::config::CONFIG_PATH;
use crate::core::error::{CollaboratorError, ReleaseResult};
use crate::core::store::ConfigStore;
use crate::core::version::VERSION_PATH;
use crate::release::ChangelogFile;
use crate::release::changelog::CHANGELOG_PATH;

/// Run the init command to write a sample release configuration
///
/// Fails with `ConfigError::AlreadyExists` if a configuration is present.
pub fn run_init(root: &Path) -> ReleaseResult<()> {
  let store = ConfigStore::new(root);
  store.write_sample()?;
  info!("Wrote sample configuration to {}", store.config_path().display());

  let changelog = ChangelogFile::new(root);
  let wrote_changelog = changelog
    .write_stub_if_missing()
    .map_err(|source| CollaboratorError::Io {
      operation: "write changelog stub".to_string(),
      path: root.join(CHANGELOG_PATH),
      source,
    })?;

  println!("Initialized release configuration in {}", root.join("release").display());
  println!("  {}", CONFIG_PATH);
  println!("  {}", VERSION_PATH);
  if wrote_changelog {
    println!("  {}", CHANGELOG_PATH);
  }
  println!();
  println!("Next steps:");
  println!("  1. Replace every TODO value in {}", CONFIG_PATH);
  println!("  2. Describe the pending release in {}", CHANGELOG_PATH);
  println!("  3. Run: relprep status --verbose");

  Ok(())
}
