//! Committer identity and non-empty collection checks

use super::trait_def::{Check, CheckContext, Violation};

/// Committer name and email must both be set
pub struct IdentityCheck;

impl Check for IdentityCheck {
  fn name(&self) -> &'static str {
    "committer-identity"
  }

  fn run(&self, ctx: &CheckContext<'_>) -> Vec<Violation> {
    let mut violations = Vec::new();
    if ctx.config.committer_name.trim().is_empty() {
      violations.push(Violation::missing_identity("committerName"));
    }
    if ctx.config.committer_email.trim().is_empty() {
      violations.push(Violation::missing_identity("committerEmail"));
    }
    violations
  }
}

/// At least one target and one file must be declared
pub struct CollectionsCheck;

impl Check for CollectionsCheck {
  fn name(&self) -> &'static str {
    "collections"
  }

  fn run(&self, ctx: &CheckContext<'_>) -> Vec<Violation> {
    let mut violations = Vec::new();
    if ctx.config.targets.is_empty() {
      violations.push(Violation::empty_collection("targets"));
    }
    if ctx.config.files.is_empty() {
      violations.push(Violation::empty_collection("files"));
    }
    violations
  }
}
