//! Target-dialect tree types and naming helpers.

use crate::model::DataValue;
use smol_str::SmolStr;
use std::path::Path;

/// A node in the rewritten render tree.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    /// An element with rewritten attributes and children.
    Element {
        /// The tag name.
        name: SmolStr,
        /// The rewritten attributes.
        attributes: Vec<RenderAttribute>,
        /// The rewritten children.
        children: Vec<RenderNode>,
    },
    /// Literal text.
    Text(String),
    /// An embedded expression, e.g. `this.state.name`.
    Expression(String),
    /// A conditional: `test ? consequent : null`.
    Conditional {
        /// The condition expression.
        test: String,
        /// The node rendered when the condition holds.
        consequent: Box<RenderNode>,
    },
}

/// A rewritten attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderAttribute {
    /// The attribute name.
    pub name: SmolStr,
    /// The attribute value.
    pub value: RenderAttributeValue,
}

/// A rewritten attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderAttributeValue {
    /// A bare attribute.
    Empty,
    /// A string value.
    Text(String),
    /// An expression value, emitted inside braces.
    Expression(String),
}

/// A re-synthesized state initializer. The supported literal kinds split
/// exactly two ways: booleans stay booleans, everything else becomes a
/// string literal.
#[derive(Debug, Clone, PartialEq)]
pub enum StateValue {
    /// A boolean literal.
    Bool(bool),
    /// A string literal.
    Str(String),
}

impl StateValue {
    /// Re-synthesizes a captured data value, or `None` for unsupported
    /// initializers.
    pub fn from_data_value(value: &DataValue) -> Option<StateValue> {
        match value {
            DataValue::Bool(b) => Some(StateValue::Bool(*b)),
            DataValue::Str(s) => Some(StateValue::Str(s.clone())),
            DataValue::Num(n) => Some(StateValue::Str(format_number(*n))),
            DataValue::Unsupported(_) => None,
        }
    }
}

/// Formats a numeric literal the way it would read in source.
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// A method member of the assembled class.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactMethod {
    /// The method name.
    pub name: String,
    /// Parameter texts, in order.
    pub params: Vec<String>,
    /// The body text between the braces.
    pub body: String,
}

/// The assembled target class.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactComponent {
    /// The class name.
    pub name: String,
    /// State fields for the constructor's bulk assignment. `None` when the
    /// component declared no data fields at all.
    pub state: Option<Vec<(SmolStr, StateValue)>>,
    /// Methods, in model order.
    pub methods: Vec<ReactMethod>,
    /// Lifecycle methods under their mapped names, in model order.
    pub lifecycle: Vec<ReactMethod>,
    /// The render expression.
    pub render: Option<RenderNode>,
}

/// Extracts a component class name from a filename.
///
/// Given a path like `/path/to/counter.vue`, returns `"Counter"`. Returns
/// `"Component"` if no valid name can be extracted.
pub fn component_name_from_path(path: &str) -> String {
    let name = Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Component".to_string());

    sanitize_component_name(&name)
}

/// Sanitizes a component name to a valid PascalCase identifier.
fn sanitize_component_name(name: &str) -> String {
    let name = name.trim_start_matches(|c: char| !c.is_alphabetic());

    if name.is_empty() {
        return "Component".to_string();
    }

    let mut result = String::with_capacity(name.len());
    let mut capitalize_next = true;

    for c in name.chars() {
        if c.is_alphanumeric() || c == '_' {
            if capitalize_next {
                result.push(c.to_ascii_uppercase());
                capitalize_next = false;
            } else {
                result.push(c);
            }
        } else if c == '-' || c == '.' {
            capitalize_next = true;
        }
    }

    if result.is_empty() {
        "Component".to_string()
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_name_from_path() {
        assert_eq!(component_name_from_path("counter.vue"), "Counter");
        assert_eq!(
            component_name_from_path("/path/to/MyComponent.vue"),
            "MyComponent"
        );
        assert_eq!(component_name_from_path("my-widget.vue"), "MyWidget");
        assert_eq!(component_name_from_path(""), "Component");
        assert_eq!(component_name_from_path("123.vue"), "Component");
    }

    #[test]
    fn test_sanitize_component_name() {
        assert_eq!(sanitize_component_name("counter"), "Counter");
        assert_eq!(sanitize_component_name("nav-bar"), "NavBar");
        assert_eq!(sanitize_component_name("---"), "Component");
    }

    #[test]
    fn test_state_value_classification() {
        assert_eq!(
            StateValue::from_data_value(&DataValue::Bool(true)),
            Some(StateValue::Bool(true))
        );
        assert_eq!(
            StateValue::from_data_value(&DataValue::Str("n".to_string())),
            Some(StateValue::Str("n".to_string()))
        );
        // Numbers fall into the string category.
        assert_eq!(
            StateValue::from_data_value(&DataValue::Num(3.0)),
            Some(StateValue::Str("3".to_string()))
        );
        assert_eq!(
            StateValue::from_data_value(&DataValue::Num(1.5)),
            Some(StateValue::Str("1.5".to_string()))
        );
        assert_eq!(
            StateValue::from_data_value(&DataValue::Unsupported("[]".to_string())),
            None
        );
    }
}
