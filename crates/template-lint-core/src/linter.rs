//! Linter orchestrating rule execution over template ASTs.

use crate::ast::{ElementNode, Node, Template};
use crate::config::{Config, RuleSetting};
use crate::context::RuleContext;
use crate::plugin::{ConfigurationError, Plugin};
use crate::rule::{Rule, RuleBox};
use crate::types::{LintResult, Severity};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while setting up the linter.
#[derive(Debug, Error)]
pub enum LintError {
    /// The configuration lists a plugin that is not registered.
    #[error("Unknown plugin '{0}' in configuration")]
    UnknownPlugin(String),

    /// The configuration enables a rule no registered plugin provides.
    #[error("Unknown rule '{0}' in configuration")]
    UnknownRule(String),

    /// A rule rejected its configuration.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

struct ActiveRule {
    rule: RuleBox,
    severity: Severity,
}

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    plugins: Vec<Plugin>,
    rules: Vec<ActiveRule>,
    config: Option<Config>,
}

impl LinterBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a plugin whose rules may be enabled by configuration.
    #[must_use]
    pub fn plugin(mut self, plugin: Plugin) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Adds an already-built rule at its default severity.
    #[must_use]
    pub fn rule<R: Rule + 'static>(self, rule: R) -> Self {
        self.rule_box(Box::new(rule))
    }

    /// Adds an already-built boxed rule at its default severity.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        let severity = rule.default_severity();
        self.rules.push(ActiveRule { rule, severity });
        self
    }

    /// Sets the configuration used to instantiate plugin rules.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the linter, instantiating every enabled plugin rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration lists an unregistered plugin,
    /// enables an unknown rule, or a rule rejects its configuration.
    pub fn build(self) -> Result<Linter, LintError> {
        let config = self.config.unwrap_or_default();
        let mut rules = self.rules;

        if let Some(missing) = config
            .plugins
            .iter()
            .find(|name| !self.plugins.iter().any(|p| p.name == name.as_str()))
        {
            return Err(LintError::UnknownPlugin(missing.clone()));
        }

        for name in config.rules.keys() {
            let Some(descriptor) = self.plugins.iter().find_map(|p| p.rule(name)) else {
                if config.is_rule_enabled(name) {
                    return Err(LintError::UnknownRule(name.clone()));
                }
                continue;
            };

            match config.rule_setting(name) {
                RuleSetting::Disabled => debug!("Skipping disabled rule: {}", name),
                RuleSetting::Enabled { severity, options } => {
                    let rule = (descriptor.factory)(&options)?;
                    let severity = severity.unwrap_or_else(|| rule.default_severity());
                    debug!("Enabled rule {} at {}", name, severity);
                    rules.push(ActiveRule { rule, severity });
                }
            }
        }

        Ok(Linter { rules })
    }
}

/// Walks templates and dispatches element nodes to the active rules.
///
/// Use [`Linter::builder()`] to construct an instance.
pub struct Linter {
    rules: Vec<ActiveRule>,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the number of active rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Names of the active rules, in execution order.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.rule.name()).collect()
    }

    /// Name, severity and effective options of each active rule.
    pub fn rule_settings(&self) -> impl Iterator<Item = (&'static str, Severity, Value)> + '_ {
        self.rules
            .iter()
            .map(|r| (r.rule.name(), r.severity, r.rule.options()))
    }

    /// Lints one template. `source` is the text the template was parsed from.
    #[must_use]
    pub fn lint(&self, template: &Template, source: &str) -> LintResult {
        let mut result = LintResult::new();

        for active in &self.rules {
            let mut ctx = RuleContext::new(active.rule.name(), active.severity, source);
            walk(&template.body, &mut |node| {
                active.rule.visit_element(node, &mut ctx);
            });
            result.diagnostics.extend(ctx.into_diagnostics());
        }

        // Stable: diagnostics at the same position keep rule/pattern order.
        result
            .diagnostics
            .sort_by(|a, b| a.line.cmp(&b.line).then(a.column.cmp(&b.column)));
        result.templates_checked = 1;

        info!(
            "Lint complete: {} diagnostic(s) from {} rule(s)",
            result.diagnostics.len(),
            self.rules.len()
        );

        result
    }
}

/// Visits every element in `nodes` depth-first, in source order.
fn walk(nodes: &[Node], visit: &mut dyn FnMut(&ElementNode)) {
    for node in nodes {
        match node {
            Node::ElementNode(element) => {
                visit(element);
                walk(&element.children, visit);
            }
            Node::BlockStatement(block) => {
                walk(&block.program.body, visit);
                if let Some(inverse) = &block.inverse {
                    walk(&inverse.body, visit);
                }
            }
            Node::TextNode(_) | Node::MustacheStatement(_) | Node::Other => {}
        }
    }
}
