//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"{
  "plugins": ["template-lint-plugin-denylist"],
  "rules": {
    "denylist": {
      "attributes": [
        { "name": "class", "values": ["^test__"] },
        { "name": "data-testid", "values": [] }
      ]
    }
  }
}
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new(".template-lintrc.json");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created .template-lintrc.json");
    println!("\nNext steps:");
    println!("  1. Edit .template-lintrc.json to list forbidden attribute values");
    println!("  2. Run: template-lint check <template.json>...");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use template_lint_core::{Config, RuleSetting};

    #[test]
    fn default_config_is_valid() {
        let config = Config::parse_json(DEFAULT_CONFIG).unwrap();
        let RuleSetting::Enabled { options, .. } = config.rule_setting("denylist") else {
            panic!("denylist should be enabled");
        };
        let rule_config = template_lint_denylist::parse_config(&options).unwrap();
        // The empty data-testid entry is dropped until values are added.
        assert_eq!(rule_config.attributes.len(), 1);
        assert_eq!(rule_config.attributes[0].values, vec!["^test__"]);
    }
}
