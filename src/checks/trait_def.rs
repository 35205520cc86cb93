//! Check trait and the violation record every check produces
//!
//! A check never fails: everything it finds is returned as `Violation` data so
//! a single run can report every problem in the configuration.

use crate::core::config::ReleaseConfig;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Kind of configuration problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
  /// A field still holds generated placeholder text
  Placeholder,
  /// Committer name or email is empty
  MissingIdentity,
  /// No targets or no files declared
  EmptyCollection,
  /// A declared target has no entry for a file ID
  MissingTarget,
  /// A file ID claims a target that is not declared
  UnknownTarget,
  /// A file ID mixes the wildcard with other entries
  ConflictingWildcard,
  /// A listed file does not exist (or is not a regular file)
  FileNotFound,
  /// A listed file could not be inspected
  FileAccessDenied,
}

impl ViolationKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      ViolationKind::Placeholder => "placeholder",
      ViolationKind::MissingIdentity => "missing-identity",
      ViolationKind::EmptyCollection => "empty-collection",
      ViolationKind::MissingTarget => "missing-target",
      ViolationKind::UnknownTarget => "unknown-target",
      ViolationKind::ConflictingWildcard => "conflicting-wildcard",
      ViolationKind::FileNotFound => "file-not-found",
      ViolationKind::FileAccessDenied => "file-access-denied",
    }
  }
}

impl fmt::Display for ViolationKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A single finding from configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
  pub kind: ViolationKind,
  /// Field path such as `files[2].target`
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub file_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub target: Option<String>,
  /// Human-readable description
  pub message: String,
}

impl Violation {
  fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
    Self {
      kind,
      field: None,
      file_id: None,
      target: None,
      message: message.into(),
    }
  }

  pub fn placeholder(field: impl Into<String>) -> Self {
    let field = field.into();
    Self {
      field: Some(field.clone()),
      ..Self::new(ViolationKind::Placeholder, format!("{} still holds placeholder text", field))
    }
  }

  pub fn missing_identity(field: &str) -> Self {
    Self {
      field: Some(field.to_string()),
      ..Self::new(ViolationKind::MissingIdentity, format!("{} must not be empty", field))
    }
  }

  pub fn empty_collection(field: &str) -> Self {
    Self {
      field: Some(field.to_string()),
      ..Self::new(ViolationKind::EmptyCollection, format!("no {} declared", field))
    }
  }

  pub fn missing_target(file_id: &str, target: &str) -> Self {
    Self {
      file_id: Some(file_id.to_string()),
      target: Some(target.to_string()),
      ..Self::new(
        ViolationKind::MissingTarget,
        format!("file '{}' has no entry for target '{}'", file_id, target),
      )
    }
  }

  pub fn unknown_target(file_id: &str, target: &str) -> Self {
    Self {
      file_id: Some(file_id.to_string()),
      target: Some(target.to_string()),
      ..Self::new(
        ViolationKind::UnknownTarget,
        format!("file '{}' refers to undeclared target '{}'", file_id, target),
      )
    }
  }

  pub fn conflicting_wildcard(file_id: &str, entries: usize) -> Self {
    Self {
      file_id: Some(file_id.to_string()),
      ..Self::new(
        ViolationKind::ConflictingWildcard,
        format!(
          "file '{}' uses the '-' target but has {} entries; a wildcard entry must be the only one",
          file_id, entries
        ),
      )
    }
  }

  pub fn file_not_found(index: usize, file_id: &str, path: &Path, detail: &str) -> Self {
    Self {
      file_id: Some(file_id.to_string()),
      field: Some(format!("files[{}].name", index)),
      ..Self::new(
        ViolationKind::FileNotFound,
        format!("file '{}' at {} {}", file_id, path.display(), detail),
      )
    }
  }

  pub fn file_access_denied(index: usize, file_id: &str, path: &Path, err: &std::io::Error) -> Self {
    Self {
      file_id: Some(file_id.to_string()),
      field: Some(format!("files[{}].name", index)),
      ..Self::new(
        ViolationKind::FileAccessDenied,
        format!("file '{}' at {} could not be inspected: {}", file_id, path.display(), err),
      )
    }
  }
}

impl fmt::Display for Violation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}] {}", self.kind, self.message)
  }
}

/// Context passed to checks
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
  pub config: &'a ReleaseConfig,
  /// Project root; file entries are resolved against it
  pub root: &'a Path,
}

/// Configuration check
///
/// Each check looks at one aspect of the configuration and returns what it
/// found. Checks that depend on another aspect being sound (coverage needs
/// targets and files) return nothing when it is not.
pub trait Check {
  /// Unique name for this check (kebab-case)
  fn name(&self) -> &'static str;

  /// Run the check and return every violation found
  fn run(&self, ctx: &CheckContext<'_>) -> Vec<Violation>;
}
