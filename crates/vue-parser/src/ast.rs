//! AST types for Vue 2 single-file components.
//!
//! This module defines the node types for the three top-level sections of a
//! `.vue` file and for the markup tree of the `<template>` section.

use crate::span::Span;
use smol_str::SmolStr;

/// A complete parsed single-file component.
#[derive(Debug, Clone, Default)]
pub struct VueDocument {
    /// The `<template>` section.
    pub template: Option<TemplateBlock>,
    /// The `<script>` section.
    pub script: Option<ScriptBlock>,
    /// The `<style>` section.
    pub style: Option<StyleBlock>,
    /// The span of the entire document.
    pub span: Span,
}

/// The `<template>` section with its parsed markup tree.
#[derive(Debug, Clone)]
pub struct TemplateBlock {
    /// The span of the entire block including tags.
    pub span: Span,
    /// The span of just the template content.
    pub content_span: Span,
    /// The parsed markup fragment.
    pub fragment: Fragment,
}

/// The `<script>` section. Content is captured raw; the transformer parses
/// it with a JavaScript parser.
#[derive(Debug, Clone)]
pub struct ScriptBlock {
    /// The span of the entire block including tags.
    pub span: Span,
    /// The span of just the script content.
    pub content_span: Span,
    /// The raw content of the script.
    pub content: String,
}

/// The `<style>` section. Content is passed through untouched.
#[derive(Debug, Clone)]
pub struct StyleBlock {
    /// The span of the entire block including tags.
    pub span: Span,
    /// The span of just the style content.
    pub content_span: Span,
    /// The raw content of the style.
    pub content: String,
    /// Whether the block carries the `scoped` attribute.
    pub scoped: bool,
}

/// A markup fragment containing child nodes.
#[derive(Debug, Clone, Default)]
pub struct Fragment {
    /// The child nodes.
    pub nodes: Vec<TemplateNode>,
    /// The span of the fragment.
    pub span: Span,
}

/// A node in the template markup tree.
#[derive(Debug, Clone)]
pub enum TemplateNode {
    /// An HTML element (or component tag; the distinction carries no
    /// transformation-time meaning in this dialect subset).
    Element(Element),
    /// Text content.
    Text(Text),
    /// A comment.
    Comment(Comment),
    /// A `{{ expr }}` interpolation.
    Interpolation(Interpolation),
}

impl TemplateNode {
    /// Returns the span of this node.
    pub fn span(&self) -> Span {
        match self {
            TemplateNode::Element(n) => n.span,
            TemplateNode::Text(n) => n.span,
            TemplateNode::Comment(n) => n.span,
            TemplateNode::Interpolation(n) => n.span,
        }
    }
}

/// An element.
#[derive(Debug, Clone)]
pub struct Element {
    /// The span of the element.
    pub span: Span,
    /// The tag name.
    pub name: SmolStr,
    /// The attributes, in source order.
    pub attributes: Vec<Attribute>,
    /// The child nodes.
    pub children: Vec<TemplateNode>,
    /// Whether this is a self-closing tag.
    pub self_closing: bool,
}

/// Text content.
#[derive(Debug, Clone)]
pub struct Text {
    /// The span of the text.
    pub span: Span,
    /// The text content.
    pub value: String,
    /// Whether this text is only whitespace.
    pub is_whitespace: bool,
}

/// A comment.
#[derive(Debug, Clone)]
pub struct Comment {
    /// The span of the comment.
    pub span: Span,
    /// The comment content (without `<!--` and `-->`).
    pub value: String,
}

/// A `{{ expr }}` interpolation.
#[derive(Debug, Clone)]
pub struct Interpolation {
    /// The span of the interpolation including the mustaches.
    pub span: Span,
    /// The span of just the expression.
    pub expression_span: Span,
    /// The raw expression text, trimmed.
    pub expression: String,
}

/// An attribute on an element.
#[derive(Debug, Clone)]
pub enum Attribute {
    /// A plain attribute `name="value"` or a bare attribute.
    Normal(NormalAttribute),
    /// A `v-*` directive with transformation-time meaning.
    Directive(Directive),
}

impl Attribute {
    /// Returns the span of this attribute.
    pub fn span(&self) -> Span {
        match self {
            Attribute::Normal(a) => a.span,
            Attribute::Directive(a) => a.span,
        }
    }
}

/// A plain attribute.
#[derive(Debug, Clone)]
pub struct NormalAttribute {
    /// The span of the attribute.
    pub span: Span,
    /// The attribute name.
    pub name: SmolStr,
    /// The attribute value.
    pub value: AttributeValue,
}

/// An attribute value.
#[derive(Debug, Clone)]
pub enum AttributeValue {
    /// No value (bare attribute).
    Empty,
    /// A string value.
    Text(TextValue),
}

/// A text value in an attribute.
#[derive(Debug, Clone)]
pub struct TextValue {
    /// The span of the text (inside the quotes).
    pub span: Span,
    /// The text content.
    pub value: String,
}

/// A directive attribute.
#[derive(Debug, Clone)]
pub struct Directive {
    /// The span of the directive.
    pub span: Span,
    /// The directive kind.
    pub kind: DirectiveKind,
    /// The directive argument (after the colon), e.g. `click` in
    /// `v-on:click`. Includes any `.modifier` suffixes verbatim.
    pub argument: Option<SmolStr>,
    /// The quoted expression value, if present.
    pub expression: Option<TextValue>,
}

/// The kind of directive. A closed set; `v-` attributes outside this set
/// parse as normal attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// `v-if`
    If,
    /// `v-on:event`
    On,
    /// `v-bind:prop`
    Bind,
    /// `v-for`
    For,
}

impl DirectiveKind {
    /// Maps a directive attribute name to its kind.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "v-if" => Some(DirectiveKind::If),
            "v-on" => Some(DirectiveKind::On),
            "v-bind" => Some(DirectiveKind::Bind),
            "v-for" => Some(DirectiveKind::For),
            _ => None,
        }
    }

    /// Returns the source attribute name of this directive.
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveKind::If => "v-if",
            DirectiveKind::On => "v-on",
            DirectiveKind::Bind => "v-bind",
            DirectiveKind::For => "v-for",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use text_size::TextSize;

    #[test]
    fn test_directive_kind_from_name() {
        assert_eq!(DirectiveKind::from_name("v-if"), Some(DirectiveKind::If));
        assert_eq!(DirectiveKind::from_name("v-on"), Some(DirectiveKind::On));
        assert_eq!(DirectiveKind::from_name("v-bind"), Some(DirectiveKind::Bind));
        assert_eq!(DirectiveKind::from_name("v-for"), Some(DirectiveKind::For));
        assert_eq!(DirectiveKind::from_name("v-model"), None);
        assert_eq!(DirectiveKind::from_name("class"), None);
    }

    #[test]
    fn test_template_node_span() {
        let text = Text {
            span: Span::new(TextSize::from(5), TextSize::from(10)),
            value: "hello".to_string(),
            is_whitespace: false,
        };
        let node = TemplateNode::Text(text);
        assert_eq!(node.span().start, TextSize::from(5));
        assert_eq!(node.span().end, TextSize::from(10));
    }
}
