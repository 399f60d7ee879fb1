//! Validation and normalization of the `denylist` rule configuration.
//!
//! The user writes the configuration as loose JSON-like data:
//!
//! ```json
//! { "attributes": [{ "name": "class", "values": ["^test__", "bar$"] }] }
//! ```
//!
//! [`parse_config`] turns that into a [`RuleConfig`] or rejects it. Badly
//! shaped attribute entries never abort the run. An entry that is not an
//! object or carries an unexpected key drops the whole list; an entry with
//! a missing or mistyped `name` or `values` is dropped on its own.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use template_lint_core::ConfigurationError;
use tracing::{debug, warn};

/// Rule name as used in lint configuration.
pub const RULE_NAME: &str = "denylist";

/// Pointer included in configuration errors.
pub const DOCS_POINTER: &str =
    "Please refer to https://github.com/shamrt/ember-template-lint-plugin-denylist/ for details";

/// Keys an attribute entry may carry.
const ALLOWED_KEYS: [&str; 2] = ["name", "values"];

/// Validated `denylist` configuration.
///
/// Every rule has a non-empty `name` and at least one non-empty pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Attribute rules, evaluated in order. All of them run on every element.
    pub attributes: Vec<AttributeRule>,
}

/// Forbidden patterns for one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRule {
    /// Attribute to inspect (e.g. `class`).
    pub name: String,
    /// Forbidden patterns; see [`crate::Pattern`] for their syntax.
    pub values: Vec<String>,
}

impl RuleConfig {
    /// Converts back to the raw configuration shape.
    ///
    /// Feeding the result to [`parse_config`] yields an equal config.
    #[must_use]
    pub fn to_raw(&self) -> Value {
        let attributes: Vec<Value> = self
            .attributes
            .iter()
            .map(|rule| json!({ "name": rule.name, "values": rule.values }))
            .collect();
        json!({ "attributes": attributes })
    }
}

/// Validates a raw `denylist` configuration.
///
/// - `true` enables the rule with no restrictions.
/// - An object is accepted; its `attributes` list is kept only if every
///   entry is an object with no keys besides `name` and `values`.
///
/// # Errors
///
/// Returns [`ConfigurationError`] for any other shape (`false`, `null`,
/// strings, numbers, arrays).
pub fn parse_config(raw: &Value) -> Result<RuleConfig, ConfigurationError> {
    match raw {
        Value::Bool(true) => Ok(RuleConfig::default()),
        Value::Object(fields) => Ok(RuleConfig {
            attributes: fields
                .get("attributes")
                .map_or_else(Vec::new, parse_attributes),
        }),
        other => Err(ConfigurationError::new(RULE_NAME, &[DOCS_POINTER], other)),
    }
}

fn parse_attributes(raw: &Value) -> Vec<AttributeRule> {
    let Some(entries) = raw.as_array() else {
        warn!("Ignoring {} attributes: expected a list, got {}", RULE_NAME, raw);
        return Vec::new();
    };

    let mut rules = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match parse_entry(entry) {
            Ok(Some(rule)) => rules.push(rule),
            Ok(None) => debug!("Dropping attribute entry #{} without a usable name or values", index),
            Err(reason) => {
                warn!(
                    "Ignoring all {} attributes: entry #{} {}",
                    RULE_NAME, index, reason
                );
                return Vec::new();
            }
        }
    }
    rules
}

/// `Err` marks a malformed entry, `Ok(None)` an incomplete one.
///
/// Non-string items in `values` are skipped; the entry survives if any
/// usable pattern remains.
fn parse_entry(entry: &Value) -> Result<Option<AttributeRule>, String> {
    let Value::Object(fields) = entry else {
        return Err(format!("is not an object: {entry}"));
    };

    if let Some(key) = fields
        .keys()
        .find(|key| !ALLOWED_KEYS.contains(&key.as_str()))
    {
        return Err(format!("has unexpected key `{key}`"));
    }

    let name = match fields.get("name") {
        Some(Value::String(name)) => name.as_str(),
        Some(other) if !other.is_null() => {
            debug!("Ignoring non-string attribute name {}", other);
            return Ok(None);
        }
        _ => "",
    };

    let values: Vec<String> = match fields.get("values") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(value)) => vec![value.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| {
                let value = item.as_str();
                if value.is_none() {
                    debug!("Ignoring non-string value {} for attribute `{}`", item, name);
                }
                value.map(str::to_owned)
            })
            .collect(),
        Some(other) => {
            debug!("Ignoring values for attribute `{}`: {}", name, other);
            return Ok(None);
        }
    };

    // An empty substring pattern would flag every element.
    let values: Vec<String> = values.into_iter().filter(|v| !v.is_empty()).collect();

    if name.is_empty() || values.is_empty() {
        return Ok(None);
    }

    Ok(Some(AttributeRule {
        name: name.to_string(),
        values,
    }))
}
