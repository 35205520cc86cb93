use serde::Serialize;
use std::path::Path;

use crate::checks::Violation;
use crate::core::context::ReleaseContext;
use crate::core::error::{ReleaseResult, ResultExt};
use crate::release::{ChangelogFile, ChangelogStatus};

use super::open_project;

/// Release readiness report (the `--json` shape)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
  pub name: String,
  pub version: String,
  pub commit_hash: String,
  pub config_valid: bool,
  pub changelog: ChangelogStatus,
  /// False once the current version has been tagged
  pub version_unreleased: bool,
  pub uncommitted_changes: bool,
  pub targets: Vec<String>,
  pub files: Vec<FileLine>,
  pub violations: Vec<Violation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileLine {
  pub id: String,
  pub name: String,
  pub target: String,
}

impl StatusReport {
  pub fn from_context(ctx: &ReleaseContext) -> Self {
    Self {
      name: ctx.config.name.clone(),
      version: ctx.version.to_string(),
      commit_hash: ctx.commit_hash.clone(),
      config_valid: ctx.config_valid(),
      changelog: ctx.changelog.clone(),
      version_unreleased: !ctx.released,
      uncommitted_changes: ctx.dirty,
      targets: ctx.config.targets.clone(),
      files: ctx
        .config
        .files
        .iter()
        .map(|f| FileLine {
          id: f.id.clone(),
          name: f.name.clone(),
          target: f.target.to_string(),
        })
        .collect(),
      violations: ctx.violations.clone(),
    }
  }
}

/// Run the status command
///
/// "NOT OK" findings are reported, not returned as errors; only storage and
/// git failures make this command exit non-zero.
pub fn run_status(root: &Path, verbose: bool, json: bool) -> ReleaseResult<()> {
  let (config, version, vcs) = open_project(root)?;
  let ctx = ReleaseContext::build(root, config, version, &vcs, &ChangelogFile::new(root))?;

  if json {
    let report = StatusReport::from_context(&ctx);
    println!(
      "{}",
      serde_json::to_string_pretty(&report).context("Failed to serialize status report")?
    );
    return Ok(());
  }

  print_status(&ctx, verbose);
  Ok(())
}

fn ok_not_ok(v: bool) -> &'static str {
  if v { "OK" } else { "NOT OK" }
}

fn print_status(ctx: &ReleaseContext, verbose: bool) {
  println!("Configuration:       {}", ok_not_ok(ctx.config_valid()));
  println!("Changelog:           {}", ok_not_ok(ctx.changelog.complete));
  println!("Version number:      {}", ok_not_ok(!ctx.released));
  println!("Uncommitted changes: {}", ok_not_ok(!ctx.dirty));
  println!();
  println!("Active version:      {}", ctx.version);
  println!("Commit hash:         {}", ctx.commit_hash);
  println!("Name:                {}", ctx.config.name);

  if !verbose {
    return;
  }

  println!();
  println!("Configuration:");
  println!("  Targets:");
  for target in &ctx.config.targets {
    println!("  - {}", target);
  }
  println!("  Files:");
  for file in &ctx.config.files {
    println!("  - {}/{}", file.name, file.target);
  }
  if !ctx.config.templates.is_empty() {
    println!("  Templates:");
    for template in &ctx.config.templates {
      println!("  - {} ({})", template.name, template.action);
    }
  }

  if !ctx.violations.is_empty() {
    println!();
    println!("Problems:");
    for violation in &ctx.violations {
      println!("  - {}", violation);
    }
  }

  if let Some(reason) = &ctx.changelog.reason {
    println!();
    println!("Changelog: {}", reason);
  }
  println!();
}
