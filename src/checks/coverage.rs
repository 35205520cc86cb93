//! Target coverage: every file ID must cover the declared targets exactly
//!
//! Entries are grouped by file ID. A group either consists of a single
//! wildcard entry (valid for every target, exempt from coverage) or of
//! explicit per-target entries whose targets must equal the declared set:
//!
//! ```text
//! missing = declared - claimed   -> one MissingTarget per target
//! unknown = claimed - declared   -> one UnknownTarget per target
//! ```
//!
//! Missing targets are reported in declaration order, unknown ones sorted.
//!
//! A group mixing the wildcard with any other entry is a ConflictingWildcard
//! and gets no coverage findings of its own.

use super::trait_def::{Check, CheckContext, Violation};
use crate::core::config::TargetAssignment;
use std::collections::{BTreeMap, BTreeSet};

pub struct CoverageCheck;

#[derive(Default)]
struct FileGroup<'a> {
  entries: usize,
  wildcards: usize,
  claimed: BTreeSet<&'a str>,
}

impl Check for CoverageCheck {
  fn name(&self) -> &'static str {
    "target-coverage"
  }

  fn run(&self, ctx: &CheckContext<'_>) -> Vec<Violation> {
    let config = ctx.config;
    // Reported by the collections check; coverage is meaningless without both
    if config.targets.is_empty() || config.files.is_empty() {
      return Vec::new();
    }

    let declared: BTreeSet<&str> = config.targets.iter().map(String::as_str).collect();

    let mut groups: BTreeMap<&str, FileGroup<'_>> = BTreeMap::new();
    for file in &config.files {
      let group = groups.entry(file.id.as_str()).or_default();
      group.entries += 1;
      match &file.target {
        TargetAssignment::Any => group.wildcards += 1,
        TargetAssignment::Target(target) => {
          group.claimed.insert(target.as_str());
        }
      }
    }

    let mut violations = Vec::new();
    for (id, group) in &groups {
      if group.wildcards > 0 {
        if group.entries > 1 {
          violations.push(Violation::conflicting_wildcard(id, group.entries));
        }
        continue;
      }

      let mut reported = BTreeSet::new();
      for target in config.targets.iter().map(String::as_str) {
        if !group.claimed.contains(target) && reported.insert(target) {
          violations.push(Violation::missing_target(id, target));
        }
      }
      for target in group.claimed.difference(&declared) {
        violations.push(Violation::unknown_target(id, target));
      }
    }

    violations
  }
}
