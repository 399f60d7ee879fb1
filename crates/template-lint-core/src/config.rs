//! Lint configuration file types.
//!
//! The configuration names the rules to run and carries each rule's raw,
//! loosely-typed options. Validating those options is the job of the rule
//! itself; this module only decides whether a rule is enabled and at which
//! severity.

use crate::types::Severity;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Top-level lint configuration.
///
/// ```json
/// {
///   "plugins": ["template-lint-plugin-denylist"],
///   "rules": {
///     "denylist": { "attributes": [{ "name": "class", "values": ["^test__"] }] }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Plugin names that must be registered with the linter.
    #[serde(default)]
    pub plugins: Vec<String>,

    /// Raw per-rule settings keyed by rule name.
    #[serde(default)]
    pub rules: BTreeMap<String, Value>,
}

impl Config {
    /// Creates a new empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a JSON or TOML file, chosen by extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::parse_toml(&content),
            _ => Self::parse_json(&content),
        }
    }

    /// Parses configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn parse_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Resolves the setting for a rule.
    #[must_use]
    pub fn rule_setting(&self, rule_name: &str) -> RuleSetting {
        self.rules
            .get(rule_name)
            .map_or(RuleSetting::Disabled, RuleSetting::from_raw)
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        !matches!(self.rule_setting(rule_name), RuleSetting::Disabled)
    }
}

/// How a rule is configured.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleSetting {
    /// Absent, `false` or `"off"`: the rule is never instantiated.
    Disabled,
    /// The rule runs with the given options.
    Enabled {
        /// Severity override, if the setting named one.
        severity: Option<Severity>,
        /// Raw options handed to the rule factory.
        options: Value,
    },
}

impl RuleSetting {
    /// Interprets a raw rule setting.
    ///
    /// Accepted forms: `false` / `"off"` (disabled), a severity name
    /// (enabled with options `true`), `[severity, options]`, or any other
    /// value, which is passed to the rule verbatim.
    #[must_use]
    pub fn from_raw(raw: &Value) -> Self {
        match raw {
            Value::Bool(false) => Self::Disabled,
            Value::String(s) if s == "off" => Self::Disabled,
            Value::String(s) => match Severity::from_name(s) {
                Some(severity) => Self::Enabled {
                    severity: Some(severity),
                    options: Value::Bool(true),
                },
                None => Self::enabled(raw),
            },
            Value::Array(items) => match items.as_slice() {
                [Value::String(s), _] if s == "off" => Self::Disabled,
                [Value::String(s), options] => match Severity::from_name(s) {
                    Some(severity) => Self::Enabled {
                        severity: Some(severity),
                        options: options.clone(),
                    },
                    None => Self::enabled(raw),
                },
                _ => Self::enabled(raw),
            },
            _ => Self::enabled(raw),
        }
    }

    fn enabled(raw: &Value) -> Self {
        Self::Enabled {
            severity: None,
            options: raw.clone(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
