//! Placeholder scan: unfilled values from the generated sample

use super::trait_def::{Check, CheckContext, Violation};
use crate::core::config::has_placeholders;

pub struct PlaceholderCheck;

impl Check for PlaceholderCheck {
  fn name(&self) -> &'static str {
    "placeholders"
  }

  fn run(&self, ctx: &CheckContext<'_>) -> Vec<Violation> {
    let config = ctx.config;
    let mut fields: Vec<(String, &str)> = vec![
      ("sourceRoot".to_string(), config.source_root.as_str()),
      ("name".to_string(), config.name.as_str()),
      ("committerEmail".to_string(), config.committer_email.as_str()),
      ("committerName".to_string(), config.committer_name.as_str()),
    ];

    for (i, target) in config.targets.iter().enumerate() {
      fields.push((format!("targets[{}]", i), target.as_str()));
    }
    for (i, file) in config.files.iter().enumerate() {
      fields.push((format!("files[{}].id", i), file.id.as_str()));
      fields.push((format!("files[{}].name", i), file.name.as_str()));
      fields.push((format!("files[{}].target", i), file.target.as_str()));
    }
    for (i, template) in config.templates.iter().enumerate() {
      fields.push((format!("templates[{}].name", i), template.name.as_str()));
    }

    fields
      .into_iter()
      .filter(|(_, value)| has_placeholders(value))
      .map(|(field, _)| Violation::placeholder(field))
      .collect()
  }
}
