//! Every listed artifact must exist as a regular file

use super::trait_def::{Check, CheckContext, Violation};
use crate::core::config::has_placeholders;
use std::collections::BTreeSet;
use std::fs;
use std::io;

pub struct FileExistenceCheck;

impl Check for FileExistenceCheck {
  fn name(&self) -> &'static str {
    "file-existence"
  }

  fn run(&self, ctx: &CheckContext<'_>) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut seen = BTreeSet::new();

    for (i, file) in ctx.config.files.iter().enumerate() {
      // Already reported by the placeholder scan
      if has_placeholders(&file.name) || !seen.insert(file.name.as_str()) {
        continue;
      }

      let path = ctx.root.join(&file.name);
      match fs::metadata(&path) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => violations.push(Violation::file_not_found(i, &file.id, &path, "is not a regular file")),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
          violations.push(Violation::file_not_found(i, &file.id, &path, "does not exist"))
        }
        Err(e) => violations.push(Violation::file_access_denied(i, &file.id, &path, &e)),
      }
    }

    violations
  }
}
