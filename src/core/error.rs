//! Error types for relprep with contextual messages and exit codes
//!
//! Every fault a command can hit is one `ReleaseError`. Configuration findings
//! from the validator are *not* errors on their own; they only become one
//! (`ConfigError::Invalid`) when a command refuses to continue because of them.

use crate::checks::Violation;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for relprep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, missing files)
  User = 1,
  /// System error (git, I/O)
  System = 2,
  /// Validation failure (config invalid, release preconditions)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for relprep
#[derive(Debug, Error)]
pub enum ReleaseError {
  /// Release configuration errors
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// Version file and bump errors
  #[error(transparent)]
  Version(#[from] VersionError),

  /// Failures of git or the filesystem underneath a command
  #[error(transparent)]
  Collaborator(#[from] CollaboratorError),

  /// Tagging refused because the release is not ready
  #[error("Release is not ready:\n  - {}", .reasons.join("\n  - "))]
  ReleaseBlocked { reasons: Vec<String> },

  /// Untyped I/O errors (current directory lookup and similar)
  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  /// Generic error with message and optional context
  ///
  /// `exit_code` is carried along so a wrapped typed error keeps its category.
  #[error("{message}{}", context_suffix(.context))]
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
    exit_code: ExitCode,
  },
}

fn context_suffix(context: &Option<String>) -> String {
  context.as_ref().map(|c| format!("\n{}", c)).unwrap_or_default()
}

impl ReleaseError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    ReleaseError::Message {
      message: msg.into(),
      context: None,
      help: None,
      exit_code: ExitCode::User,
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      ReleaseError::Message {
        message,
        context,
        help,
        exit_code,
      } => ReleaseError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
        exit_code,
      },
      other => ReleaseError::Message {
        message: ctx_str,
        context: Some(other.to_string()),
        help: other.help_message(),
        exit_code: other.exit_code(),
      },
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      ReleaseError::Config(ConfigError::Invalid { .. }) => ExitCode::Validation,
      ReleaseError::Config(ConfigError::Access { .. }) => ExitCode::System,
      ReleaseError::Config(_) => ExitCode::User,
      ReleaseError::Version(VersionError::Access { .. }) => ExitCode::System,
      ReleaseError::Version(_) => ExitCode::User,
      ReleaseError::Collaborator(_) => ExitCode::System,
      ReleaseError::ReleaseBlocked { .. } => ExitCode::Validation,
      ReleaseError::Io(_) => ExitCode::System,
      ReleaseError::Message { exit_code, .. } => *exit_code,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      ReleaseError::Config(e) => e.help_message(),
      ReleaseError::Version(e) => e.help_message(),
      ReleaseError::Collaborator(e) => e.help_message(),
      ReleaseError::ReleaseBlocked { .. } => Some("Run `relprep status --verbose` to see every finding.".to_string()),
      ReleaseError::Message { help, .. } => help.clone(),
      ReleaseError::Io(_) => None,
    }
  }
}

impl From<String> for ReleaseError {
  fn from(msg: String) -> Self {
    ReleaseError::message(msg)
  }
}

impl From<&str> for ReleaseError {
  fn from(msg: &str) -> Self {
    ReleaseError::message(msg)
  }
}

impl From<serde_json::Error> for ReleaseError {
  fn from(err: serde_json::Error) -> Self {
    ReleaseError::message(format!("JSON error: {}", err))
  }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
  /// release/config.json not found
  #[error("No release configuration found.\nExpected file: {}", .path.display())]
  Missing { path: PathBuf },

  /// File exists but is not the expected JSON shape
  #[error("Configuration file format error in {}: {reason}", .path.display())]
  Malformed { path: PathBuf, reason: String },

  /// File exists but could not be read or written
  #[error("Could not access configuration at {}: {source}", .path.display())]
  Access {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Validation produced violations
  #[error("Configuration is not valid ({})", problem_count(.violations))]
  Invalid { violations: Vec<Violation> },

  /// `init` refuses to overwrite an existing configuration
  #[error("Configuration file already exists: {}", .path.display())]
  AlreadyExists { path: PathBuf },
}

fn problem_count(violations: &[Violation]) -> String {
  match violations.len() {
    1 => "1 problem".to_string(),
    n => format!("{} problems", n),
  }
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::Missing { .. } => Some("Run `relprep init` to create a sample configuration.".to_string()),
      ConfigError::Malformed { .. } => {
        Some("Check release/config.json against the sample written by `relprep init`.".to_string())
      }
      ConfigError::Access { source, .. } if source.kind() == io::ErrorKind::PermissionDenied => {
        Some("Check the file permissions on the release directory.".to_string())
      }
      ConfigError::Invalid { .. } => Some("Fix the problems listed above and run the command again.".to_string()),
      ConfigError::AlreadyExists { .. } => Some("Edit the existing file or remove it before running `relprep init`.".to_string()),
      _ => None,
    }
  }
}

/// Version file and bump errors
#[derive(Debug, Error)]
pub enum VersionError {
  /// release/VERSION not found
  #[error("Version file not found: {}", .path.display())]
  Missing { path: PathBuf },

  /// Version file does not hold a plain major.minor.patch value
  #[error("Invalid version string in version file: {value:?} ({reason})")]
  Malformed { value: String, reason: String },

  /// Version file could not be read or written
  #[error("Could not access version file at {}: {source}", .path.display())]
  Access {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Zero or several of --major/--minor/--patch were given
  #[error("{}", bump_ambiguous_message(.requested))]
  BumpAmbiguous { requested: usize },
}

fn bump_ambiguous_message(requested: &usize) -> String {
  if *requested == 0 {
    "Must specify which version to bump".to_string()
  } else {
    format!("Only one of major, minor or patch can be bumped ({} requested)", requested)
  }
}

impl VersionError {
  fn help_message(&self) -> Option<String> {
    match self {
      VersionError::Missing { .. } => Some("Run `relprep init` or create release/VERSION containing e.g. 0.1.0.".to_string()),
      VersionError::Malformed { .. } => Some("The version file must contain exactly <major>.<minor>.<patch>.".to_string()),
      VersionError::BumpAmbiguous { .. } => Some("Pass exactly one of --major, --minor or --patch.".to_string()),
      VersionError::Access { .. } => None,
    }
  }
}

/// Failures of an external collaborator (git or the filesystem)
#[derive(Debug, Error)]
pub enum CollaboratorError {
  /// Source root is not inside a git work tree
  #[error("Git repository not found at: {}", .path.display())]
  RepoNotFound { path: PathBuf },

  /// A git invocation failed
  #[error("Git operation '{operation}' failed in {}: {stderr}", .path.display())]
  Git {
    operation: String,
    path: PathBuf,
    stderr: String,
  },

  /// A filesystem operation failed
  #[error("Filesystem operation '{operation}' failed for {}: {source}", .path.display())]
  Io {
    operation: String,
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

impl CollaboratorError {
  fn help_message(&self) -> Option<String> {
    match self {
      CollaboratorError::RepoNotFound { path } => Some(format!(
        "Check `sourceRoot` in release/config.json; it must point into a git work tree (resolved to {}).",
        path.display()
      )),
      CollaboratorError::Git { stderr, .. } if stderr.contains("already exists") => {
        Some("The tag already exists. Bump the version before tagging again.".to_string())
      }
      _ => None,
    }
  }
}

/// Result type alias for relprep
pub type ReleaseResult<T> = Result<T, ReleaseError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> ReleaseResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<ReleaseError>,
{
  fn context(self, ctx: impl Into<String>) -> ReleaseResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }
}

/// Print an error to stderr as a prefixed one-line diagnostic plus help text
pub fn print_error(error: &ReleaseError) {
  eprintln!("error: {}", error);

  if let Some(help) = error.help_message() {
    eprintln!("help: {}", help);
  }
}
