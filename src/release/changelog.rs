//! Changelog completeness for the pending release
//!
//! Only the pending section is inspected: `## Unreleased` if present,
//! otherwise the first `##` section (the whole file when it has none). That
//! section must have at least one non-heading line and no `TODO:` line left
//! over from the stub. Older sections are never looked at.

use crate::core::config::PLACEHOLDER_MARKER;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Location of the changelog, relative to the project root
pub const CHANGELOG_PATH: &str = "release/CHANGELOG.md";

/// Outcome of a changelog check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogStatus {
  pub complete: bool,
  /// Why the changelog is not complete
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reason: Option<String>,
}

impl ChangelogStatus {
  pub fn complete() -> Self {
    Self {
      complete: true,
      reason: None,
    }
  }

  pub fn incomplete(reason: impl Into<String>) -> Self {
    Self {
      complete: false,
      reason: Some(reason.into()),
    }
  }
}

/// Changelog capability
pub trait ChangelogCheck {
  /// Is the changelog complete for the pending release?
  fn check(&self) -> ChangelogStatus;
}

/// Markdown changelog on disk
pub struct ChangelogFile {
  path: PathBuf,
}

impl ChangelogFile {
  pub fn new(root: &Path) -> Self {
    Self {
      path: root.join(CHANGELOG_PATH),
    }
  }

  /// Stub written by `relprep init`
  pub fn stub() -> String {
    format!(
      "# Changelog\n\n## Unreleased\n\n{}: describe the changes in this release\n",
      PLACEHOLDER_MARKER
    )
  }

  /// Write the stub unless a changelog already exists
  ///
  /// Returns whether a file was written.
  pub fn write_stub_if_missing(&self) -> io::Result<bool> {
    if self.path.exists() {
      return Ok(false);
    }
    crate::core::store::write_atomic(&self.path, Self::stub().as_bytes())?;
    Ok(true)
  }
}

impl ChangelogCheck for ChangelogFile {
  fn check(&self) -> ChangelogStatus {
    debug!("Checking changelog at {}", self.path.display());

    let content = match fs::read_to_string(&self.path) {
      Ok(content) => content,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        return ChangelogStatus::incomplete(format!("{} not found", self.path.display()));
      }
      Err(e) => return ChangelogStatus::incomplete(format!("could not read {}: {}", self.path.display(), e)),
    };

    let pending = pending_section(&content);

    if pending.iter().any(|line| is_placeholder_line(line)) {
      return ChangelogStatus::incomplete(format!("{} still contains placeholder text", self.path.display()));
    }

    let has_entries = pending
      .iter()
      .map(|line| line.trim())
      .any(|line| !line.is_empty() && !line.starts_with('#'));
    if !has_entries {
      return ChangelogStatus::incomplete(format!("{} has no entries", self.path.display()));
    }

    ChangelogStatus::complete()
  }
}

fn is_section_heading(line: &str) -> bool {
  line.trim_start().starts_with("## ")
}

fn is_unreleased_heading(line: &str) -> bool {
  is_section_heading(line) && line.trim_start()[3..].trim().eq_ignore_ascii_case("unreleased")
}

/// Body lines of the section describing the release being prepared
fn pending_section(content: &str) -> Vec<&str> {
  let lines: Vec<&str> = content.lines().collect();
  let start = lines
    .iter()
    .position(|line| is_unreleased_heading(line))
    .or_else(|| lines.iter().position(|line| is_section_heading(line)));

  match start {
    Some(start) => lines[start + 1..]
      .iter()
      .take_while(|line| !is_section_heading(line))
      .copied()
      .collect(),
    None => lines,
  }
}

/// A `TODO:` line as written by the stub, optionally as a list item
fn is_placeholder_line(line: &str) -> bool {
  line
    .trim_start()
    .trim_start_matches(['-', '*', ' '])
    .starts_with(&format!("{}:", PLACEHOLDER_MARKER))
}
