//! Release configuration validation
//!
//! Every check implements the `Check` trait and is registered, in order, in
//! `create_default_validator()`:
//!
//! - **placeholders**: no field still holds generated `TODO` text
//! - **committer-identity**: committer name and email are set
//! - **collections**: at least one target and one file
//! - **target-coverage**: each file ID covers the declared targets exactly
//! - **file-existence**: each listed artifact exists as a regular file
//!
//! Validation never fails; it returns every violation found.
//!
//! # Example
//!
//! ```rust,ignore
//! let violations = checks::validate(&config, &root, false);
//! if violations.is_empty() {
//!   println!("Configuration OK");
//! }
//! ```

mod coverage;
mod files;
mod identity;
mod placeholders;
mod trait_def;

pub use trait_def::{Check, CheckContext, Violation, ViolationKind};

use crate::core::config::ReleaseConfig;
use std::path::Path;
use tracing::debug;

/// Ordered set of configuration checks
pub struct Validator {
  checks: Vec<Box<dyn Check>>,
}

impl Validator {
  pub fn new() -> Self {
    Self { checks: Vec::new() }
  }

  /// Add a check; checks run in registration order
  pub fn add_check(&mut self, check: Box<dyn Check>) {
    self.checks.push(check);
  }

  /// Run every check and collect all violations
  pub fn run_all(&self, ctx: &CheckContext<'_>) -> Vec<Violation> {
    let mut violations = Vec::new();
    for check in &self.checks {
      let found = check.run(ctx);
      debug!("Check '{}' found {} violation(s)", check.name(), found.len());
      violations.extend(found);
    }
    violations
  }
}

impl Default for Validator {
  fn default() -> Self {
    Self::new()
  }
}

/// Create a validator with all built-in checks
pub fn create_default_validator() -> Validator {
  let mut validator = Validator::new();

  validator.add_check(Box::new(placeholders::PlaceholderCheck));
  validator.add_check(Box::new(identity::IdentityCheck));
  validator.add_check(Box::new(identity::CollectionsCheck));
  validator.add_check(Box::new(coverage::CoverageCheck));
  validator.add_check(Box::new(files::FileExistenceCheck));

  validator
}

/// Validate a release configuration
///
/// File entries are resolved against `root`. With `strict`, every violation
/// is also printed to stderr as a one-line diagnostic; the returned list is
/// the same either way.
pub fn validate(config: &ReleaseConfig, root: &Path, strict: bool) -> Vec<Violation> {
  let ctx = CheckContext { config, root };
  let violations = create_default_validator().run_all(&ctx);

  if strict {
    for violation in &violations {
      eprintln!("config: {}", violation);
    }
  }

  violations
}
