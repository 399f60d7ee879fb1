//! Plugin descriptors and rule configuration errors.
//!
//! A plugin is a plain value naming a set of rule factories. The
//! [`crate::Linter`] looks rules up by name and hands each factory the raw
//! configuration the user wrote for it.

use crate::rule::RuleBox;
use serde_json::Value;

/// Builds a rule from its raw user configuration.
pub type RuleFactory = fn(&Value) -> Result<RuleBox, ConfigurationError>;

/// A rule exposed by a plugin.
#[derive(Debug, Clone, Copy)]
pub struct RuleDescriptor {
    /// Rule name as used in configuration (e.g., "denylist").
    pub name: &'static str,
    /// Brief description for `list-rules`.
    pub description: &'static str,
    /// Factory validating the configuration and building the rule.
    pub factory: RuleFactory,
}

/// A named bundle of rules registered with the linter.
#[derive(Debug, Clone, Copy)]
pub struct Plugin {
    /// Plugin package name.
    pub name: &'static str,
    /// Rules provided by the plugin.
    pub rules: &'static [RuleDescriptor],
}

impl Plugin {
    /// Looks up a rule descriptor by name.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&RuleDescriptor> {
        self.rules.iter().find(|r| r.name == name)
    }
}

/// A rule was given a configuration it cannot accept.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ConfigurationError {
    /// Rule whose configuration was rejected.
    pub rule: String,
    /// Full user-facing message.
    pub message: String,
}

impl ConfigurationError {
    /// Builds the standard "accepts one of the following values" error.
    ///
    /// `accepted` lists the accepted forms (or pointers to documentation);
    /// `specified` is the value the user actually wrote.
    #[must_use]
    pub fn new(rule: &str, accepted: &[&str], specified: &Value) -> Self {
        use std::fmt::Write;

        let mut message = format!("The {rule} rule accepts one of the following values.\n");
        for item in accepted {
            let _ = writeln!(message, "  * {item}");
        }
        let _ = write!(message, "\nYou specified `{specified}`");

        Self {
            rule: rule.to_string(),
            message,
        }
    }
}
