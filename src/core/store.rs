//! Durable storage for the release configuration and the version-of-record
//!
//! Nothing is cached: each command builds a `ConfigStore` and re-reads state.
//! Writes go through `write_atomic`, so a concurrent or interrupted writer
//! leaves either the old or the new complete file behind, never a partial one.

use crate::core::config::{CONFIG_PATH, ReleaseConfig};
use crate::core::error::{ConfigError, ReleaseResult, VersionError};
use crate::core::version::{VERSION_PATH, Version};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Permission mode for every file this tool writes
pub const FILE_MODE: u32 = 0o644;

/// Access to `release/config.json` and `release/VERSION` under a project root
#[derive(Debug, Clone)]
pub struct ConfigStore {
  root: PathBuf,
}

impl ConfigStore {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn config_path(&self) -> PathBuf {
    self.root.join(CONFIG_PATH)
  }

  pub fn version_path(&self) -> PathBuf {
    self.root.join(VERSION_PATH)
  }

  /// Check if a configuration file exists
  pub fn exists(&self) -> bool {
    self.config_path().exists()
  }

  /// Load the release configuration
  ///
  /// Missing file, malformed JSON and other read failures are distinct
  /// `ConfigError` variants.
  pub fn load(&self) -> Result<ReleaseConfig, ConfigError> {
    let path = self.config_path();
    debug!("Loading configuration from {}", path.display());

    let bytes = fs::read(&path).map_err(|source| match source.kind() {
      io::ErrorKind::NotFound => ConfigError::Missing { path: path.clone() },
      _ => ConfigError::Access {
        path: path.clone(),
        source,
      },
    })?;

    serde_json::from_slice(&bytes).map_err(|e| ConfigError::Malformed {
      path,
      reason: e.to_string(),
    })
  }

  /// Save the release configuration (pretty-printed JSON)
  pub fn save(&self, config: &ReleaseConfig) -> Result<(), ConfigError> {
    let path = self.config_path();
    let mut content = serde_json::to_string_pretty(config).map_err(|e| ConfigError::Malformed {
      path: path.clone(),
      reason: e.to_string(),
    })?;
    content.push('\n');

    debug!("Writing configuration to {}", path.display());
    write_atomic(&path, content.as_bytes()).map_err(|source| ConfigError::Access { path, source })
  }

  /// Load the current version; a missing file is an error, never `0.0.0`
  pub fn load_version(&self) -> Result<Version, VersionError> {
    let path = self.version_path();
    debug!("Loading version from {}", path.display());

    let content = fs::read_to_string(&path).map_err(|source| match source.kind() {
      io::ErrorKind::NotFound => VersionError::Missing { path: path.clone() },
      io::ErrorKind::InvalidData => VersionError::Malformed {
        value: String::new(),
        reason: "version file is not valid UTF-8".to_string(),
      },
      _ => VersionError::Access {
        path: path.clone(),
        source,
      },
    })?;

    content.parse()
  }

  /// Replace the version file with `version` (no trailing newline)
  pub fn save_version(&self, version: Version) -> Result<(), VersionError> {
    let path = self.version_path();
    debug!("Writing version {} to {}", version, path.display());
    write_atomic(&path, version.to_string().as_bytes()).map_err(|source| VersionError::Access { path, source })
  }

  /// Write the sample configuration for a fresh project
  ///
  /// Refuses to touch an existing configuration. The version file is seeded
  /// with `0.0.0` only if it does not exist yet.
  pub fn write_sample(&self) -> ReleaseResult<()> {
    if self.exists() {
      return Err(
        ConfigError::AlreadyExists {
          path: self.config_path(),
        }
        .into(),
      );
    }

    self.save(&ReleaseConfig::sample())?;

    if !self.version_path().exists() {
      self.save_version(Version::new(0, 0, 0))?;
    }

    Ok(())
  }
}

/// A fully written temporary file waiting to replace its destination
pub struct StagedWrite {
  file: NamedTempFile,
  dest: PathBuf,
}

impl StagedWrite {
  /// Atomically move the staged content into place
  pub fn commit(self) -> io::Result<()> {
    self.file.persist(&self.dest).map_err(|e| e.error)?;
    Ok(())
  }

  /// Path of the temporary file (for inspection in tests)
  #[cfg(test)]
  pub fn temp_path(&self) -> &Path {
    self.file.path()
  }
}

/// Write `contents` to a temporary file next to `dest`, flushed and with
/// `FILE_MODE` applied, without touching `dest` yet
pub fn stage_write(dest: &Path, contents: &[u8]) -> io::Result<StagedWrite> {
  let dir = match dest.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };
  fs::create_dir_all(dir)?;

  let mut file = NamedTempFile::new_in(dir)?;
  file.write_all(contents)?;
  file.as_file().sync_all()?;

  #[cfg(unix)]
  {
    use std::os::unix::fs::PermissionsExt;
    file.as_file().set_permissions(fs::Permissions::from_mode(FILE_MODE))?;
  }

  Ok(StagedWrite {
    file,
    dest: dest.to_path_buf(),
  })
}

/// Replace `dest` with `contents` via write-to-temp and rename
pub fn write_atomic(dest: &Path, contents: &[u8]) -> io::Result<()> {
  stage_write(dest, contents)?.commit()
}
