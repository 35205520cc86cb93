//! Version-of-record and the bump lifecycle

use crate::core::error::VersionError;
use std::fmt;
use std::str::FromStr;

/// Location of the version file, relative to the project root
pub const VERSION_PATH: &str = "release/VERSION";

/// Release version stored as plain `major.minor.patch`
///
/// Pre-release and build metadata are rejected: the version file only ever
/// holds the three counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
  pub major: u64,
  pub minor: u64,
  pub patch: u64,
}

impl Version {
  pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
    Self { major, minor, patch }
  }

  /// Apply one bump, resetting every lower-order component
  #[must_use]
  pub fn bump(self, kind: BumpKind) -> Self {
    match kind {
      BumpKind::Major => Self::new(self.major + 1, 0, 0),
      BumpKind::Minor => Self::new(self.major, self.minor + 1, 0),
      BumpKind::Patch => Self::new(self.major, self.minor, self.patch + 1),
    }
  }

  /// Git tag name for this version
  pub fn tag_name(&self) -> String {
    format!("v{}", self)
  }
}

impl fmt::Display for Version {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
  }
}

impl FromStr for Version {
  type Err = VersionError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let value = s.trim();
    let parsed = semver::Version::parse(value).map_err(|e| VersionError::Malformed {
      value: value.to_string(),
      reason: e.to_string(),
    })?;

    if !parsed.pre.is_empty() || !parsed.build.is_empty() {
      return Err(VersionError::Malformed {
        value: value.to_string(),
        reason: "pre-release and build metadata are not supported".to_string(),
      });
    }

    Ok(Self::new(parsed.major, parsed.minor, parsed.patch))
  }
}

/// Version bump level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
  Major,
  Minor,
  Patch,
}

impl BumpKind {
  /// Resolve the `--major/--minor/--patch` flags to exactly one bump
  ///
  /// Zero or several flags is `VersionError::BumpAmbiguous`.
  pub fn from_flags(major: bool, minor: bool, patch: bool) -> Result<Self, VersionError> {
    let requested = [(major, BumpKind::Major), (minor, BumpKind::Minor), (patch, BumpKind::Patch)];
    let mut selected = requested.iter().filter(|(set, _)| *set).map(|(_, kind)| *kind);

    match (selected.next(), selected.next()) {
      (Some(kind), None) => Ok(kind),
      _ => Err(VersionError::BumpAmbiguous {
        requested: requested.iter().filter(|(set, _)| *set).count(),
      }),
    }
  }
}

impl fmt::Display for BumpKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BumpKind::Major => write!(f, "major"),
      BumpKind::Minor => write!(f, "minor"),
      BumpKind::Patch => write!(f, "patch"),
    }
  }
}
