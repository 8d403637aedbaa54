//! Markup rewriting.
//!
//! Walks the parsed template tree in document order and rebuilds it as a
//! target-dialect render tree: conditional directives become conditional
//! expressions, event bindings become event attributes, `class` becomes
//! `className`, and interpolated identifiers are resolved into
//! instance-scoped member paths. Each node is visited exactly once; child
//! lists are rebuilt rather than mutated during traversal.

use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::model::ComponentModel;
use crate::resolve::resolve;
use crate::types::{RenderAttribute, RenderAttributeValue, RenderNode};
use smol_str::SmolStr;
use vue_parser::{
    Attribute, AttributeValue, DirectiveKind, Element, Fragment, TemplateNode, TextValue,
};

/// Rewrites the template fragment against the component model, returning
/// the root render expression.
///
/// Extra top-level nodes are dropped with a diagnostic; a template whose
/// only root is suppressed (for example by an unresolvable `v-if`) returns
/// `None`, which renders as the null marker.
pub fn rewrite_template(
    fragment: &Fragment,
    model: &ComponentModel,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<RenderNode> {
    let mut root: Option<RenderNode> = None;

    for node in &fragment.nodes {
        let span = node.span();
        let Some(rendered) = rewrite_node(node, model, diagnostics) else {
            continue;
        };
        if root.is_none() {
            root = Some(rendered);
        } else {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::ExtraRootNode,
                "template has more than one root node; extra nodes are dropped",
                Some(span),
            ));
        }
    }

    root
}

fn rewrite_node(
    node: &TemplateNode,
    model: &ComponentModel,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<RenderNode> {
    match node {
        TemplateNode::Element(element) => rewrite_element(element, model, diagnostics),
        TemplateNode::Text(text) => {
            if text.is_whitespace {
                None
            } else {
                Some(RenderNode::Text(text.value.clone()))
            }
        }
        TemplateNode::Interpolation(interpolation) => {
            let expression = interpolation.expression.as_str();
            if is_bare_identifier(expression) {
                let binding = resolve(expression, model);
                match binding.member_path() {
                    Some(path) => Some(RenderNode::Expression(path)),
                    None => {
                        diagnostics.push(Diagnostic::new(
                            DiagnosticCode::UnresolvedBinding,
                            format!(
                                "`{}` is neither a prop nor a data field; expression left as-is",
                                expression
                            ),
                            Some(interpolation.span),
                        ));
                        Some(RenderNode::Expression(expression.to_string()))
                    }
                }
            } else {
                // Compound expressions pass through untouched.
                Some(RenderNode::Expression(expression.to_string()))
            }
        }
        TemplateNode::Comment(_) => None,
    }
}

fn rewrite_element(
    element: &Element,
    model: &ComponentModel,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<RenderNode> {
    // The conditional directive decides the element's fate before any other
    // attribute is rewritten. The directive itself is always removed; an
    // unresolvable condition suppresses the element rather than rendering
    // it unconditionally.
    let mut condition: Option<String> = None;

    for attr in &element.attributes {
        let Attribute::Directive(directive) = attr else {
            continue;
        };
        if directive.kind != DirectiveKind::If {
            continue;
        }

        let name = directive
            .expression
            .as_ref()
            .map(|value| value.value.trim().to_string())
            .unwrap_or_default();
        let binding = resolve(&name, model);
        match binding.member_path() {
            Some(path) => condition = Some(path),
            None => {
                diagnostics.push(Diagnostic::new(
                    DiagnosticCode::UnresolvedBinding,
                    format!(
                        "`v-if` condition `{}` is neither a prop nor a data field; element dropped",
                        name
                    ),
                    Some(directive.span),
                ));
                return None;
            }
        }
    }

    let mut attributes = Vec::new();
    for attr in &element.attributes {
        match attr {
            Attribute::Normal(normal) => {
                let name = if normal.name == "class" {
                    SmolStr::new("className")
                } else {
                    normal.name.clone()
                };
                let value = match &normal.value {
                    AttributeValue::Empty => RenderAttributeValue::Empty,
                    AttributeValue::Text(text) => {
                        rewrite_attribute_text(text, model, diagnostics)
                    }
                };
                attributes.push(RenderAttribute { name, value });
            }
            Attribute::Directive(directive) => match directive.kind {
                DirectiveKind::If => {}
                DirectiveKind::On => {
                    let handler = directive
                        .expression
                        .as_ref()
                        .map(|value| value.value.trim().to_string())
                        .unwrap_or_default();
                    if !is_bare_identifier(&handler) {
                        diagnostics.push(Diagnostic::new(
                            DiagnosticCode::UnsupportedConstruct,
                            "event binding value must name an instance method; attribute dropped",
                            Some(directive.span),
                        ));
                        continue;
                    }
                    // Only the click event is supported in the target; the
                    // source event name does not select the attribute.
                    if directive.argument.as_deref() != Some("click") {
                        diagnostics.push(Diagnostic::new(
                            DiagnosticCode::IgnoredEventName,
                            format!(
                                "event `{}` is bound as `onClick`; only click is supported",
                                directive.argument.as_deref().unwrap_or("(none)")
                            ),
                            Some(directive.span),
                        ));
                    }
                    attributes.push(RenderAttribute {
                        name: SmolStr::new("onClick"),
                        value: RenderAttributeValue::Expression(format!("this.{}", handler)),
                    });
                }
                DirectiveKind::Bind | DirectiveKind::For => {
                    diagnostics.push(Diagnostic::new(
                        DiagnosticCode::UnsupportedDirective,
                        format!(
                            "`{}` is outside the transformed subset; attribute dropped",
                            directive.kind.as_str()
                        ),
                        Some(directive.span),
                    ));
                }
            },
        }
    }

    let children = element
        .children
        .iter()
        .filter_map(|child| rewrite_node(child, model, diagnostics))
        .collect();

    let rendered = RenderNode::Element {
        name: element.name.clone(),
        attributes,
        children,
    };

    Some(match condition {
        Some(test) => RenderNode::Conditional {
            test,
            consequent: Box::new(rendered),
        },
        None => rendered,
    })
}

/// Rewrites an attribute text value. A mustache-wrapped value is an
/// interpolated expression: a bare identifier resolves to a member path,
/// anything else passes through as an expression. Plain text stays text.
fn rewrite_attribute_text(
    text: &TextValue,
    model: &ComponentModel,
    diagnostics: &mut Vec<Diagnostic>,
) -> RenderAttributeValue {
    let trimmed = text.value.trim();
    let Some(expression) = trimmed
        .strip_prefix("{{")
        .and_then(|rest| rest.strip_suffix("}}"))
        .map(str::trim)
    else {
        return RenderAttributeValue::Text(text.value.clone());
    };

    if is_bare_identifier(expression) {
        match resolve(expression, model).member_path() {
            Some(path) => RenderAttributeValue::Expression(path),
            None => {
                diagnostics.push(Diagnostic::new(
                    DiagnosticCode::UnresolvedBinding,
                    format!(
                        "`{}` is neither a prop nor a data field; expression left as-is",
                        expression
                    ),
                    Some(text.span),
                ));
                RenderAttributeValue::Expression(expression.to_string())
            }
        }
    } else {
        RenderAttributeValue::Expression(expression.to_string())
    }
}

/// Returns true for a plain identifier (the only expression form the
/// resolver classifies).
fn is_bare_identifier(expression: &str) -> bool {
    let mut chars = expression.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
