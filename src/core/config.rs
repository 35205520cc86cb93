//! Release configuration model (release/config.json)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Location of the release configuration, relative to the project root
pub const CONFIG_PATH: &str = "release/config.json";

/// Marker left in every field of the generated sample configuration
pub const PLACEHOLDER_MARKER: &str = "TODO";

/// Target value meaning "this file applies to every target"
pub const WILDCARD_TARGET: &str = "-";

/// Release configuration for a project
///
/// # Invariants
///
/// 1. `targets` and `files` are non-empty
/// 2. `committer_name` and `committer_email` are non-empty
/// 3. No field still holds placeholder text
/// 4. Every file ID either uses the wildcard alone or covers `targets` exactly
///
/// None of these are enforced on load; `checks::validate` reports them.
///
/// # Example
///
/// ```json
/// {
///   "sourceRoot": ".",
///   "name": "widget",
///   "committerEmail": "release@example.com",
///   "committerName": "Release Bot",
///   "targets": ["linux-amd64", "darwin-arm64"],
///   "files": [
///     { "id": "bin", "name": "dist/linux/widget", "target": "linux-amd64" },
///     { "id": "bin", "name": "dist/darwin/widget", "target": "darwin-arm64" },
///     { "id": "readme", "name": "README.md", "target": "-" }
///   ],
///   "templates": [{ "name": "CHANGELOG.md", "action": "concatenate" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseConfig {
  /// Git work tree holding the sources, relative to the project root
  #[serde(default = "default_source_root")]
  pub source_root: String,

  /// Project name used in status output and tag messages
  pub name: String,

  #[serde(default)]
  pub committer_email: String,

  #[serde(default)]
  pub committer_name: String,

  /// Declared build targets (e.g. "linux-amd64")
  #[serde(default)]
  pub targets: Vec<String>,

  /// Artifacts that make up a release
  #[serde(default)]
  pub files: Vec<FileEntry>,

  #[serde(default)]
  pub templates: Vec<TemplateRef>,
}

fn default_source_root() -> String {
  ".".to_string()
}

/// One artifact in a release
///
/// Several entries may share an `id` to describe per-target variants of the
/// same logical file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
  pub id: String,
  /// Path of the built file, relative to the project root
  pub name: String,
  pub target: TargetAssignment,
}

/// Which target a file entry belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TargetAssignment {
  /// Valid for every declared target (`"-"` on disk)
  Any,
  /// Valid for exactly one target
  Target(String),
}

impl TargetAssignment {
  /// The explicit target, or `None` for the wildcard
  pub fn explicit(&self) -> Option<&str> {
    match self {
      TargetAssignment::Any => None,
      TargetAssignment::Target(target) => Some(target.as_str()),
    }
  }

  pub fn as_str(&self) -> &str {
    self.explicit().unwrap_or(WILDCARD_TARGET)
  }
}

impl From<String> for TargetAssignment {
  fn from(value: String) -> Self {
    if value == WILDCARD_TARGET {
      TargetAssignment::Any
    } else {
      TargetAssignment::Target(value)
    }
  }
}

impl From<TargetAssignment> for String {
  fn from(value: TargetAssignment) -> Self {
    match value {
      TargetAssignment::Any => WILDCARD_TARGET.to_string(),
      TargetAssignment::Target(target) => target,
    }
  }
}

impl fmt::Display for TargetAssignment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A text template bundled with the release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRef {
  pub name: String,
  pub action: TemplateAction,
}

/// How a template is folded into the release bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateAction {
  /// Copied as-is
  Include,
  /// Appended to the file of the same name
  Concatenate,
}

impl fmt::Display for TemplateAction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TemplateAction::Include => write!(f, "include"),
      TemplateAction::Concatenate => write!(f, "concatenate"),
    }
  }
}

/// Name and email used for release commits and tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
  pub name: String,
  pub email: String,
}

impl fmt::Display for Signature {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} <{}>", self.name, self.email)
  }
}

impl ReleaseConfig {
  /// Sample configuration written by `relprep init`
  ///
  /// Every value the user must supply holds placeholder text, so a freshly
  /// initialized project never validates.
  pub fn sample() -> Self {
    Self {
      source_root: default_source_root(),
      name: "TODO: set the project name".to_string(),
      committer_email: "TODO: set the email used for release commits and tags".to_string(),
      committer_name: "TODO: set the name used for release commits and tags".to_string(),
      targets: vec!["TODO: set target (linux-amd64, darwin-arm64, windows-amd64...)".to_string()],
      files: vec![FileEntry {
        id: "TODO: set ID for file".to_string(),
        name: "TODO: add your built files here".to_string(),
        target: TargetAssignment::Target("TODO: set target for file, '-' if it applies to every target".to_string()),
      }],
      templates: vec![TemplateRef {
        name: "CHANGELOG.md".to_string(),
        action: TemplateAction::Concatenate,
      }],
    }
  }

  /// Identity for commits and tags created on behalf of this project
  pub fn committer(&self) -> Signature {
    Signature {
      name: self.committer_name.clone(),
      email: self.committer_email.clone(),
    }
  }
}

/// Check whether a value still holds generated placeholder text
pub fn has_placeholders(text: &str) -> bool {
  text.contains(PLACEHOLDER_MARKER)
}
