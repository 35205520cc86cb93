use std::path::Path;
use tracing::info;

use crate::core::context::ReleaseContext;
use crate::core::error::{ReleaseError, ReleaseResult};
use crate::core::vcs::Vcs;
use crate::release::ChangelogFile;

use super::open_project;

/// Run the tag command
///
/// Tags HEAD as `v{version}` once the configuration is valid, the changelog is
/// complete, the tree is clean and the version has not been tagged before.
pub fn run_tag(root: &Path) -> ReleaseResult<()> {
  let (config, version, vcs) = open_project(root)?;
  let ctx = ReleaseContext::build(root, config, version, &vcs, &ChangelogFile::new(root))?;

  let reasons = ctx.blockers();
  if !reasons.is_empty() {
    return Err(ReleaseError::ReleaseBlocked { reasons });
  }

  let tag = ctx.tag_name();
  vcs.create_tag(&tag, &ctx.config.committer(), &format!("Release {}", ctx.version))?;
  info!("Created tag {} at {}", tag, ctx.commit_hash);

  println!("Tagged {} as {} in {}", ctx.commit_hash, tag, vcs.work_tree().display());
  Ok(())
}
