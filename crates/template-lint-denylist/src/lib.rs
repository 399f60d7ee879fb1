//! # template-lint-denylist
//!
//! A template lint plugin forbidding configured values in element attributes.
//!
//! ## Configuration
//!
//! ```json
//! {
//!   "rules": {
//!     "denylist": {
//!       "attributes": [
//!         { "name": "class", "values": ["foo", "^test__", "bar$", "^exact$"] },
//!         { "name": "data-testid", "values": "legacy" }
//!       ]
//!     }
//!   }
//! }
//! ```
//!
//! | Value     | Flags an attribute when                  |
//! |-----------|------------------------------------------|
//! | `foo`     | its text contains `foo` anywhere         |
//! | `^test__` | one of its tokens starts with `test__`   |
//! | `bar$`    | one of its tokens ends with `bar`        |
//! | `^exact$` | one of its tokens is exactly `exact`     |
//!
//! Only the static text of an attribute is checked: interpolated parts are
//! skipped, and a value that is a single interpolation never matches.
//!
//! ## Usage
//!
//! ```ignore
//! use template_lint_core::{Config, Linter};
//!
//! let linter = Linter::builder()
//!     .plugin(template_lint_denylist::PLUGIN)
//!     .config(config)
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod matcher;
mod rule;

pub use config::{parse_config, AttributeRule, RuleConfig, DOCS_POINTER, RULE_NAME};
pub use matcher::{extract_text, forbidden_values, matches, Pattern};
pub use rule::DenylistRule;

use template_lint_core::{Plugin, RuleDescriptor};

/// Plugin package name.
pub const NAME: &str = "template-lint-plugin-denylist";

/// Plugin descriptor to register with the linter.
pub const PLUGIN: Plugin = Plugin {
    name: NAME,
    rules: &[RuleDescriptor {
        name: RULE_NAME,
        description: "Forbids configured values in element attributes",
        factory: rule::build,
    }],
};

/// Re-export core types for convenience.
pub use template_lint_core::{ConfigurationError, Rule};
