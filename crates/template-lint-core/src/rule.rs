//! Rule trait for defining template lint rules.

use crate::ast::ElementNode;
use crate::context::RuleContext;
use crate::types::Severity;
use serde_json::Value;

/// A template lint rule driven by element visits.
///
/// The [`crate::Linter`] walks the template and calls
/// [`Rule::visit_element`] once per element node, nested elements
/// included. Rules report findings through the [`RuleContext`].
///
/// # Example
///
/// ```ignore
/// use template_lint_core::{ElementNode, Rule, RuleContext};
///
/// pub struct NoInlineStyle;
///
/// impl Rule for NoInlineStyle {
///     fn name(&self) -> &'static str { "no-inline-style" }
///
///     fn visit_element(&self, node: &ElementNode, ctx: &mut RuleContext<'_>) {
///         if let Some(attr) = node.find_attribute("style") {
///             let d = ctx.diagnostic(&attr.loc, "Inline styles are not allowed");
///             ctx.report(d.with_source(ctx.source_for(&node.loc)));
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "denylist").
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for diagnostics from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Returns the effective options after validation, in raw form.
    ///
    /// Rules without options keep the default `true`.
    fn options(&self) -> Value {
        Value::Bool(true)
    }

    /// Inspects a single element node.
    fn visit_element(&self, node: &ElementNode, ctx: &mut RuleContext<'_>);
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
