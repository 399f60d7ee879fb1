//! Validate-config command implementation.

use anyhow::Result;
use serde_json::{Map, Value};
use template_lint_core::Linter;

use crate::config_resolver::ConfigSource;

/// Runs the validate-config command.
pub fn run(source: &ConfigSource) -> Result<()> {
    let linter = super::check::build_linter(source.load()?)?;

    tracing::info!(
        "Configuration OK: {} rule(s) enabled",
        linter.rule_count()
    );

    println!("{}", serde_json::to_string_pretty(&normalized(&linter))?);
    Ok(())
}

/// Effective severity and options of every active rule, as the rules see them.
fn normalized(linter: &Linter) -> Value {
    let rules: Map<String, Value> = linter
        .rule_settings()
        .map(|(name, severity, options)| {
            (
                name.to_string(),
                serde_json::json!({ "severity": severity, "options": options }),
            )
        })
        .collect();
    Value::Object(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::check::build_linter;
    use serde_json::json;
    use template_lint_core::Config;

    #[test]
    fn normalizes_denylist_options() {
        let config = Config::parse_json(
            r#"{
                "rules": {
                    "denylist": ["warn", { "attributes": [{ "name": "class", "values": "foo" }] }],
                    "other": false
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            normalized(&build_linter(config).unwrap()),
            json!({
                "denylist": {
                    "severity": "warning",
                    "options": { "attributes": [{ "name": "class", "values": ["foo"] }] }
                }
            })
        );
    }

    #[test]
    fn default_severity_is_reported() {
        let config = Config::parse_json(r#"{ "rules": { "denylist": true } }"#).unwrap();
        assert_eq!(
            normalized(&build_linter(config).unwrap()),
            json!({ "denylist": { "severity": "error", "options": { "attributes": [] } } })
        );
    }

    #[test]
    fn malformed_denylist_is_rejected() {
        let config = Config::parse_json(r#"{ "rules": { "denylist": 42 } }"#).unwrap();
        let Err(err) = build_linter(config) else { panic!("expected build_linter to fail") };
        assert!(format!("{err:#}").contains("The denylist rule accepts"));
    }

    #[test]
    fn unregistered_plugin_is_rejected() {
        let config = Config::parse_json(r#"{ "plugins": ["nope"], "rules": {} }"#).unwrap();
        let Err(err) = build_linter(config) else { panic!("expected build_linter to fail") };
        assert!(format!("{err:#}").contains("Unknown plugin 'nope'"));
    }
}
