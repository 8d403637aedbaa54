//! Code emission.
//!
//! Serializes the assembled target tree to JavaScript/JSX source text. A
//! plain tree-to-text printer; all transformation decisions were made by
//! the rewriter and the assembler.

use crate::types::{
    ReactComponent, ReactMethod, RenderAttribute, RenderAttributeValue, RenderNode, StateValue,
};

/// Emits the full module source for an assembled component.
pub fn emit(component: &ReactComponent) -> String {
    let mut out = String::new();

    out.push_str("import { createElement, Component } from 'react';\n\n");
    out.push_str(&format!(
        "export default class {} extends Component {{\n",
        component.name
    ));

    emit_constructor(&mut out, component);

    for method in component.methods.iter().chain(&component.lifecycle) {
        out.push('\n');
        emit_method(&mut out, method);
    }

    out.push('\n');
    emit_render(&mut out, component.render.as_ref());

    out.push_str("}\n");
    out
}

fn emit_constructor(out: &mut String, component: &ReactComponent) {
    out.push_str("  constructor(props) {\n");
    out.push_str("    super(props);\n");

    if let Some(fields) = &component.state {
        out.push_str("    state = {\n");
        for (i, (name, value)) in fields.iter().enumerate() {
            let separator = if i + 1 == fields.len() { "" } else { "," };
            out.push_str(&format!(
                "      {}: {}{}\n",
                name,
                emit_state_value(value),
                separator
            ));
        }
        out.push_str("    };\n");
    }

    out.push_str("  }\n");
}

fn emit_state_value(value: &StateValue) -> String {
    match value {
        StateValue::Bool(b) => b.to_string(),
        StateValue::Str(s) => format!("\"{}\"", escape_string(s)),
    }
}

fn emit_method(out: &mut String, method: &ReactMethod) {
    let body = reindent(&method.body, "    ");
    if body.is_empty() {
        out.push_str(&format!(
            "  {}({}) {{}}\n",
            method.name,
            method.params.join(", ")
        ));
    } else {
        out.push_str(&format!(
            "  {}({}) {{\n{}\n  }}\n",
            method.name,
            method.params.join(", "),
            body
        ));
    }
}

fn emit_render(out: &mut String, render: Option<&RenderNode>) {
    out.push_str("  render() {\n");
    match render {
        Some(node) => {
            out.push_str(&format!("    return {};\n", emit_node_expression(node)));
        }
        None => out.push_str("    return null;\n"),
    }
    out.push_str("  }\n");
}

/// Emits a render node in expression position.
fn emit_node_expression(node: &RenderNode) -> String {
    match node {
        RenderNode::Element {
            name,
            attributes,
            children,
        } => emit_element(name, attributes, children),
        RenderNode::Conditional { test, consequent } => {
            format!("{} ? {} : null", test, emit_node_expression(consequent))
        }
        RenderNode::Expression(expression) => expression.clone(),
        RenderNode::Text(text) => format!("\"{}\"", escape_string(text)),
    }
}

fn emit_element(name: &str, attributes: &[RenderAttribute], children: &[RenderNode]) -> String {
    let mut out = String::new();
    out.push('<');
    out.push_str(name);

    for attribute in attributes {
        out.push(' ');
        emit_attribute(&mut out, attribute);
    }

    if children.is_empty() {
        out.push_str(" />");
        return out;
    }

    out.push('>');
    for child in children {
        emit_child(&mut out, child);
    }
    out.push_str("</");
    out.push_str(name);
    out.push('>');
    out
}

/// Emits a render node in child position, where expressions need braces.
fn emit_child(out: &mut String, node: &RenderNode) {
    match node {
        RenderNode::Element {
            name,
            attributes,
            children,
        } => out.push_str(&emit_element(name, attributes, children)),
        RenderNode::Text(text) => out.push_str(text),
        RenderNode::Expression(expression) => {
            out.push('{');
            out.push_str(expression);
            out.push('}');
        }
        RenderNode::Conditional { test, consequent } => {
            out.push('{');
            out.push_str(test);
            out.push_str(" ? ");
            out.push_str(&emit_node_expression(consequent));
            out.push_str(" : null}");
        }
    }
}

fn emit_attribute(out: &mut String, attribute: &RenderAttribute) {
    match &attribute.value {
        RenderAttributeValue::Empty => out.push_str(&attribute.name),
        RenderAttributeValue::Text(value) => {
            out.push_str(&format!("{}=\"{}\"", attribute.name, value))
        }
        RenderAttributeValue::Expression(expression) => {
            out.push_str(&format!("{}={{{}}}", attribute.name, expression))
        }
    }
}

fn escape_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Strips a body's original indentation and re-indents it to `indent`.
/// Returns an empty string for whitespace-only bodies.
fn reindent(body: &str, indent: &str) -> String {
    let lines: Vec<&str> = body.lines().collect();

    let first = lines.iter().position(|line| !line.trim().is_empty());
    let last = lines.iter().rposition(|line| !line.trim().is_empty());
    let (first, last) = match (first, last) {
        (Some(first), Some(last)) => (first, last),
        _ => return String::new(),
    };

    let lines = &lines[first..=last];
    let common = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{}{}", indent, &line[common..])
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use smol_str::SmolStr;

    fn element(name: &str, attributes: Vec<RenderAttribute>, children: Vec<RenderNode>) -> RenderNode {
        RenderNode::Element {
            name: SmolStr::new(name),
            attributes,
            children,
        }
    }

    #[test]
    fn test_reindent() {
        assert_eq!(reindent("", "    "), "");
        assert_eq!(reindent("\n  \n", "    "), "");
        assert_eq!(
            reindent("\n    console.log(1);\n  ", "    "),
            "    console.log(1);"
        );
        assert_eq!(
            reindent("\n      if (x) {\n        y();\n      }\n  ", "    "),
            "    if (x) {\n      y();\n    }"
        );
    }

    #[test]
    fn test_emit_empty_element() {
        let node = element("br", vec![], vec![]);
        assert_eq!(emit_node_expression(&node), "<br />");
    }

    #[test]
    fn test_emit_element_with_attributes() {
        let node = element(
            "p",
            vec![
                RenderAttribute {
                    name: SmolStr::new("className"),
                    value: RenderAttributeValue::Text("title".to_string()),
                },
                RenderAttribute {
                    name: SmolStr::new("onClick"),
                    value: RenderAttributeValue::Expression("this.handleClick".to_string()),
                },
            ],
            vec![RenderNode::Expression("this.props.title".to_string())],
        );
        assert_eq!(
            emit_node_expression(&node),
            "<p className=\"title\" onClick={this.handleClick}>{this.props.title}</p>"
        );
    }

    #[test]
    fn test_emit_conditional_child() {
        let inner = element(
            "p",
            vec![],
            vec![RenderNode::Expression("this.state.name".to_string())],
        );
        let node = element(
            "div",
            vec![],
            vec![RenderNode::Conditional {
                test: "this.state.show".to_string(),
                consequent: Box::new(inner),
            }],
        );
        assert_eq!(
            emit_node_expression(&node),
            "<div>{this.state.show ? <p>{this.state.name}</p> : null}</div>"
        );
    }

    #[test]
    fn test_emit_conditional_root() {
        let node = RenderNode::Conditional {
            test: "this.state.show".to_string(),
            consequent: Box::new(element("p", vec![], vec![RenderNode::Text("x".to_string())])),
        };
        assert_eq!(
            emit_node_expression(&node),
            "this.state.show ? <p>x</p> : null"
        );
    }

    #[test]
    fn test_emit_component_skeleton() {
        let component = ReactComponent {
            name: "Widget".to_string(),
            state: Some(vec![
                (SmolStr::new("show"), StateValue::Bool(true)),
                (SmolStr::new("name"), StateValue::Str("n".to_string())),
            ]),
            methods: vec![ReactMethod {
                name: "handleClick".to_string(),
                params: vec![],
                body: String::new(),
            }],
            lifecycle: vec![],
            render: None,
        };
        let code = emit(&component);
        assert!(code.starts_with("import { createElement, Component } from 'react';\n"));
        assert!(code.contains("export default class Widget extends Component {"));
        assert!(code.contains("    super(props);\n"));
        assert!(code.contains("    state = {\n      show: true,\n      name: \"n\"\n    };\n"));
        assert!(code.contains("  handleClick() {}\n"));
        assert!(code.contains("  render() {\n    return null;\n  }\n"));
    }
}
