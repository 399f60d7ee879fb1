//! # template-lint-core
//!
//! Core framework for linting parsed templates.
//!
//! This crate provides the host side of template linting:
//!
//! - the template [`ast`] rules inspect
//! - the [`Rule`] trait, driven by element visits
//! - [`RuleContext`], the diagnostic sink and source-snippet lookup
//! - [`Plugin`] descriptors bundling rule factories
//! - [`Linter`] for walking templates and collecting [`Diagnostic`]s
//!
//! ## Example
//!
//! ```ignore
//! use template_lint_core::{Config, Linter};
//!
//! let linter = Linter::builder()
//!     .plugin(my_plugin::PLUGIN)
//!     .config(Config::from_file(".template-lintrc.json".as_ref())?)
//!     .build()?;
//!
//! let result = linter.lint(&template, &source);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ast;
mod config;
mod context;
mod linter;
mod plugin;
mod rule;
mod types;

pub use ast::{AttrNode, AttrValue, ElementNode, Position, SourceLocation, Template};
pub use config::{Config, ConfigError, RuleSetting};
pub use context::RuleContext;
pub use linter::{LintError, Linter, LinterBuilder};
pub use plugin::{ConfigurationError, Plugin, RuleDescriptor, RuleFactory};
pub use rule::{Rule, RuleBox};
pub use types::{offset_for, Diagnostic, DiagnosticReport, LintResult, Severity};
