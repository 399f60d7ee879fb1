//! Template AST handed to rules.
//!
//! The node shapes follow the JSON a Glimmer-style template parser emits:
//! every node carries a `type` tag (`ElementNode`, `TextNode`,
//! `MustacheStatement`, ...) and an optional `loc`. Node types this crate
//! does not model deserialize to an inert variant instead of failing.

use serde::{Deserialize, Serialize};

/// A position in template source: 1-indexed line, 0-indexed column.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (0-indexed).
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Source span of a node. `end` is exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Start of the span.
    pub start: Position,
    /// End of the span.
    pub end: Position,
}

impl SourceLocation {
    /// Creates a new span.
    #[must_use]
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// Root of a parsed template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Top-level statements.
    #[serde(default)]
    pub body: Vec<Node>,
}

/// A statement in a template body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// An HTML or component element.
    ElementNode(ElementNode),
    /// A `{{#block}}...{{/block}}` statement.
    BlockStatement(BlockStatement),
    /// Literal text.
    TextNode(TextNode),
    /// A `{{mustache}}` interpolation.
    MustacheStatement(MustacheStatement),
    /// Comments and any node type not modelled here.
    #[serde(other)]
    Other,
}

/// An element such as `<div class="foo"></div>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    /// Tag name.
    pub tag: String,
    /// Attributes in source order.
    #[serde(default)]
    pub attributes: Vec<AttrNode>,
    /// Child statements.
    #[serde(default)]
    pub children: Vec<Node>,
    /// Span of the whole element.
    #[serde(default)]
    pub loc: SourceLocation,
}

impl ElementNode {
    /// Finds the first attribute with the given name.
    #[must_use]
    pub fn find_attribute(&self, name: &str) -> Option<&AttrNode> {
        self.attributes.iter().find(|attr| attr.name == name)
    }
}

/// A single `name=value` attribute on an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttrNode {
    /// Attribute name.
    pub name: String,
    /// Attribute value.
    pub value: AttrValue,
    /// Span covering `name="value"`.
    #[serde(default)]
    pub loc: SourceLocation,
}

/// The three shapes an attribute value can take.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AttrValue {
    /// Static text: `class="foo bar"`.
    TextNode(TextNode),
    /// A single interpolation: `class={{this.classes}}`.
    MustacheStatement(MustacheStatement),
    /// Interleaved text and interpolations: `class="foo {{bar}}"`.
    ConcatStatement(ConcatStatement),
    /// A value shape this crate does not know about.
    #[serde(other)]
    Unknown,
}

/// Literal template text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    /// The text.
    pub chars: String,
    /// Span of the text.
    #[serde(default)]
    pub loc: SourceLocation,
}

impl TextNode {
    /// Creates a text node without location information.
    #[must_use]
    pub fn new(chars: impl Into<String>) -> Self {
        Self {
            chars: chars.into(),
            loc: SourceLocation::default(),
        }
    }
}

/// A path such as `this.classes` or `concat`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathExpression {
    /// Path as written in source.
    #[serde(default)]
    pub original: String,
}

/// A `{{...}}` interpolation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MustacheStatement {
    /// The interpolated path.
    #[serde(default)]
    pub path: PathExpression,
    /// Span of the interpolation.
    #[serde(default)]
    pub loc: SourceLocation,
}

impl MustacheStatement {
    /// Creates a mustache statement for `path` without location information.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: PathExpression {
                original: path.into(),
            },
            loc: SourceLocation::default(),
        }
    }
}

/// A quoted attribute value mixing text and interpolations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConcatStatement {
    /// Parts in source order.
    #[serde(default)]
    pub parts: Vec<ConcatPart>,
    /// Span of the value.
    #[serde(default)]
    pub loc: SourceLocation,
}

/// One part of a [`ConcatStatement`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ConcatPart {
    /// Static fragment.
    TextNode(TextNode),
    /// Dynamic fragment.
    MustacheStatement(MustacheStatement),
    /// A part shape this crate does not know about.
    #[serde(other)]
    Unknown,
}

/// A `{{#path}}...{{else}}...{{/path}}` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockStatement {
    /// Block helper path.
    #[serde(default)]
    pub path: PathExpression,
    /// Main block body.
    #[serde(default)]
    pub program: Block,
    /// `{{else}}` body, if any.
    #[serde(default)]
    pub inverse: Option<Block>,
    /// Span of the whole block.
    #[serde(default)]
    pub loc: SourceLocation,
}

/// Body of a block statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Statements in the block.
    #[serde(default)]
    pub body: Vec<Node>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_glimmer_shaped_json() {
        let json = r#"{
            "type": "Template",
            "body": [
                {
                    "type": "ElementNode",
                    "tag": "div",
                    "selfClosing": false,
                    "attributes": [
                        {
                            "type": "AttrNode",
                            "name": "class",
                            "value": { "type": "TextNode", "chars": "foo bar" },
                            "loc": { "start": { "line": 1, "column": 5 }, "end": { "line": 1, "column": 20 } }
                        },
                        {
                            "type": "AttrNode",
                            "name": "id",
                            "value": {
                                "type": "ConcatStatement",
                                "parts": [
                                    { "type": "TextNode", "chars": "item-" },
                                    { "type": "MustacheStatement", "path": { "type": "PathExpression", "original": "this.id" } }
                                ]
                            }
                        }
                    ],
                    "children": [
                        { "type": "MustacheCommentStatement", "value": "ignored" }
                    ]
                }
            ]
        }"#;

        let template: Template = serde_json::from_str(json).unwrap();
        let Node::ElementNode(element) = &template.body[0] else {
            panic!("expected element, got {:?}", template.body[0]);
        };
        assert_eq!(element.tag, "div");
        assert_eq!(element.children, vec![Node::Other]);

        let class = element.find_attribute("class").unwrap();
        assert_eq!(class.loc.start, Position::new(1, 5));
        assert_eq!(class.value, AttrValue::TextNode(TextNode::new("foo bar")));

        let id = element.find_attribute("id").unwrap();
        let AttrValue::ConcatStatement(concat) = &id.value else {
            panic!("expected concat, got {:?}", id.value);
        };
        assert_eq!(concat.parts.len(), 2);
    }

    #[test]
    fn unknown_value_type_is_inert() {
        let json = r#"{ "name": "class", "value": { "type": "SubExpression", "params": [] } }"#;
        let attr: AttrNode = serde_json::from_str(json).unwrap();
        assert_eq!(attr.value, AttrValue::Unknown);
    }

    #[test]
    fn find_attribute_returns_first_match() {
        let element = ElementNode {
            tag: "div".into(),
            attributes: vec![AttrNode {
                name: "title".into(),
                value: AttrValue::TextNode(TextNode::new("hello")),
                loc: SourceLocation::default(),
            }],
            ..Default::default()
        };
        assert!(element.find_attribute("title").is_some());
        assert!(element.find_attribute("class").is_none());
    }
}
