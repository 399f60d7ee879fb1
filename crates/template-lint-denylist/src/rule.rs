//! The `denylist` rule: flags elements whose attributes carry forbidden values.

use crate::config::{parse_config, RuleConfig, RULE_NAME};
use crate::matcher::{extract_text, forbidden_values};
use serde_json::Value;
use template_lint_core::{ConfigurationError, ElementNode, Rule, RuleBox, RuleContext};
use tracing::debug;

/// Flags elements whose attribute values contain forbidden patterns.
///
/// One diagnostic is reported per matching `(pattern, attribute)` pair,
/// spanning the attribute and quoting the enclosing element.
#[derive(Debug, Clone, Default)]
pub struct DenylistRule {
    config: RuleConfig,
}

impl DenylistRule {
    /// Creates the rule from an already validated configuration.
    #[must_use]
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    /// Validates a raw configuration and creates the rule.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the configuration has the wrong shape.
    pub fn from_config(raw: &Value) -> Result<Self, ConfigurationError> {
        parse_config(raw).map(Self::new)
    }

    /// Returns the effective configuration.
    #[must_use]
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }
}

impl Rule for DenylistRule {
    fn name(&self) -> &'static str {
        RULE_NAME
    }

    fn description(&self) -> &'static str {
        "Forbids configured values in element attributes"
    }

    fn options(&self) -> Value {
        self.config.to_raw()
    }

    fn visit_element(&self, node: &ElementNode, ctx: &mut RuleContext<'_>) {
        for attribute_rule in &self.config.attributes {
            let Some(attribute) = node.find_attribute(&attribute_rule.name) else {
                continue;
            };

            let text = extract_text(&attribute.value);
            for value in forbidden_values(&text, &attribute_rule.values) {
                debug!(
                    "<{}> {}: forbidden value '{}'",
                    node.tag, attribute_rule.name, value
                );
                let diagnostic = ctx
                    .diagnostic(
                        &attribute.loc,
                        format!(
                            "The value '{value}' is present in attribute '{}', but is forbidden",
                            attribute_rule.name
                        ),
                    )
                    .with_source(ctx.source_for(&node.loc));
                ctx.report(diagnostic);
            }
        }
    }
}

/// Factory registered in [`crate::PLUGIN`].
pub(crate) fn build(raw: &Value) -> Result<RuleBox, ConfigurationError> {
    Ok(Box::new(DenylistRule::from_config(raw)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use template_lint_core::ast::{ConcatPart, ConcatStatement, MustacheStatement, TextNode};
    use template_lint_core::{AttrNode, AttrValue, Diagnostic, Position, Severity, SourceLocation};

    /// Builds `<div name="value"></div>` with host-accurate spans.
    fn div(name: &str, value: AttrValue, text: &str) -> (ElementNode, String) {
        let source = format!(r#"<div {name}="{text}"></div>"#);
        let attr_end = 5 + name.len() + text.len() + 3;
        let element = ElementNode {
            tag: "div".into(),
            attributes: vec![AttrNode {
                name: name.into(),
                value,
                loc: SourceLocation::new(Position::new(1, 5), Position::new(1, attr_end)),
            }],
            children: vec![],
            loc: SourceLocation::new(Position::new(1, 0), Position::new(1, source.len())),
        };
        (element, source)
    }

    fn check(raw: Value, name: &str, text: &str) -> Vec<Diagnostic> {
        let rule = DenylistRule::from_config(&raw).unwrap();
        let (element, source) = div(name, AttrValue::TextNode(TextNode::new(text)), text);
        let mut ctx = RuleContext::new(rule.name(), Severity::Error, &source);
        rule.visit_element(&element, &mut ctx);
        ctx.into_diagnostics()
    }

    #[test]
    fn reports_substring_match() {
        let diagnostics = check(
            json!({ "attributes": [{ "name": "class", "values": "foo" }] }),
            "class",
            "foo",
        );
        assert_eq!(diagnostics.len(), 1);
        let d = &diagnostics[0];
        assert_eq!(
            d.message,
            "The value 'foo' is present in attribute 'class', but is forbidden"
        );
        assert_eq!((d.line, d.column, d.end_line, d.end_column), (1, 5, 1, 16));
        assert_eq!(d.source, r#"<div class="foo"></div>"#);
        assert!(!d.is_fixable);
    }

    #[test]
    fn no_match_without_substring() {
        let diagnostics = check(
            json!({ "attributes": [{ "name": "class", "values": "foo" }] }),
            "class",
            "bar baz",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn reports_prefix_match() {
        let diagnostics = check(
            json!({ "attributes": [{ "name": "class", "values": "^test__" }] }),
            "class",
            "test__barbaz",
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'^test__'"));
    }

    #[test]
    fn suffix_requires_token_ending() {
        let diagnostics = check(
            json!({ "attributes": [{ "name": "class", "values": "bar$" }] }),
            "class",
            "foobarbaz",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn true_config_reports_nothing() {
        let diagnostics = check(json!(true), "class", "foo");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn reports_each_matching_pattern() {
        let diagnostics = check(
            json!({ "attributes": [{ "name": "class", "values": ["foo", "bar$", "nope"] }] }),
            "class",
            "foobar",
        );
        let messages: Vec<&str> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "The value 'foo' is present in attribute 'class', but is forbidden",
                "The value 'bar$' is present in attribute 'class', but is forbidden",
            ]
        );
    }

    #[test]
    fn other_attributes_are_ignored() {
        let diagnostics = check(
            json!({ "attributes": [{ "name": "id", "values": "foo" }] }),
            "class",
            "foo",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn dynamic_values_never_match() {
        let rule = DenylistRule::from_config(
            &json!({ "attributes": [{ "name": "class", "values": "^" }] }),
        )
        .unwrap();
        let (element, source) = div(
            "class",
            AttrValue::MustacheStatement(MustacheStatement::new("this.foo")),
            "{{this.foo}}",
        );
        let mut ctx = RuleContext::new(rule.name(), Severity::Error, &source);
        rule.visit_element(&element, &mut ctx);
        assert!(ctx.into_diagnostics().is_empty());
    }

    #[test]
    fn composite_values_match_static_fragments() {
        let rule = DenylistRule::from_config(&json!({
            "attributes": [{ "name": "class", "values": ["^test__", "this"] }]
        }))
        .unwrap();
        let value = AttrValue::ConcatStatement(ConcatStatement {
            parts: vec![
                ConcatPart::TextNode(TextNode::new("test__a ")),
                ConcatPart::MustacheStatement(MustacheStatement::new("this.b")),
            ],
            ..Default::default()
        });
        let (element, source) = div("class", value, "test__a {{this.b}}");
        let mut ctx = RuleContext::new(rule.name(), Severity::Error, &source);
        rule.visit_element(&element, &mut ctx);

        let diagnostics = ctx.into_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'^test__'"));
    }

    /// `<div id={{dyn}} class="foo"></div>` with `id` carrying `id_value`.
    fn check_after_unmatchable_id(id_value: AttrValue) -> Vec<Diagnostic> {
        let rule = DenylistRule::from_config(&json!({
            "attributes": [
                { "name": "id", "values": "x" },
                { "name": "class", "values": "foo" },
            ]
        }))
        .unwrap();
        let source = r#"<div id={{dyn}} class="foo"></div>"#;
        let element = ElementNode {
            tag: "div".into(),
            attributes: vec![
                AttrNode {
                    name: "id".into(),
                    value: id_value,
                    loc: SourceLocation::new(Position::new(1, 5), Position::new(1, 15)),
                },
                AttrNode {
                    name: "class".into(),
                    value: AttrValue::TextNode(TextNode::new("foo")),
                    loc: SourceLocation::new(Position::new(1, 16), Position::new(1, 27)),
                },
            ],
            children: vec![],
            loc: SourceLocation::new(Position::new(1, 0), Position::new(1, source.len())),
        };
        let mut ctx = RuleContext::new(rule.name(), Severity::Error, source);
        rule.visit_element(&element, &mut ctx);
        ctx.into_diagnostics()
    }

    #[test]
    fn dynamic_attribute_does_not_stop_later_rules() {
        let diagnostics =
            check_after_unmatchable_id(AttrValue::MustacheStatement(MustacheStatement::new("dyn")));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "The value 'foo' is present in attribute 'class', but is forbidden"
        );
        assert_eq!((diagnostics[0].column, diagnostics[0].end_column), (16, 27));
    }

    #[test]
    fn unknown_attribute_value_does_not_stop_later_rules() {
        let diagnostics = check_after_unmatchable_id(AttrValue::Unknown);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("attribute 'class'"));
    }

    #[test]
    fn options_are_the_normalized_config() {
        let rule = DenylistRule::from_config(&json!({
            "attributes": [{ "name": "class", "values": "foo" }, { "name": "id" }]
        }))
        .unwrap();
        assert_eq!(
            rule.options(),
            json!({ "attributes": [{ "name": "class", "values": ["foo"] }] })
        );
    }

    #[test]
    fn rejects_bad_configuration() {
        let err = DenylistRule::from_config(&json!("oops")).unwrap_err();
        assert_eq!(err.rule, RULE_NAME);
    }
}
