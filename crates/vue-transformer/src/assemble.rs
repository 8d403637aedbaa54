//! Target class assembly.
//!
//! Builds the target class structure from the component model and the
//! rewritten render expression, in fixed member order: constructor, methods,
//! lifecycle methods, render.

use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::model::ComponentModel;
use crate::types::{ReactComponent, ReactMethod, RenderNode, StateValue};

/// Assembles the target class.
///
/// The constructor always calls the superclass constructor with the
/// incoming props; when the model recorded data-field literals, it also
/// receives a single bulk state assignment re-synthesizing every supported
/// literal. Unsupported initializers are skipped with a diagnostic.
pub fn assemble(
    model: &ComponentModel,
    render: Option<RenderNode>,
    name: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> ReactComponent {
    let state = if model.data_literals.is_empty() {
        None
    } else {
        let mut fields = Vec::new();
        for (field, value) in &model.data_literals {
            match StateValue::from_data_value(value) {
                Some(state_value) => fields.push((field.clone(), state_value)),
                None => diagnostics.push(Diagnostic::new(
                    DiagnosticCode::UnsupportedConstruct,
                    format!(
                        "data field `{}` has an unsupported initializer and is omitted from state",
                        field
                    ),
                    None,
                )),
            }
        }
        Some(fields)
    };

    let methods = model
        .methods
        .iter()
        .map(|method| ReactMethod {
            name: method.name.to_string(),
            params: method.params.clone(),
            body: method.body.clone(),
        })
        .collect();

    let lifecycle = model
        .lifecycle
        .iter()
        .map(|hook| ReactMethod {
            name: hook.hook.target_name().to_string(),
            params: Vec::new(),
            body: hook.body.clone(),
        })
        .collect();

    ReactComponent {
        name: name.to_string(),
        state,
        methods,
        lifecycle,
        render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::extract_model;
    use smol_str::SmolStr;

    fn assemble_script(script: &str) -> (ReactComponent, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let model = extract_model(script, 0, &mut diagnostics).expect("model extracts");
        let component = assemble(&model, None, "Widget", &mut diagnostics);
        (component, diagnostics)
    }

    #[test]
    fn state_resynthesizes_literals() {
        let (component, diagnostics) = assemble_script(
            "export default { data() { return { show: true, name: 'n', count: 2 }; } };",
        );
        assert!(diagnostics.is_empty());
        assert_eq!(
            component.state,
            Some(vec![
                (SmolStr::new("show"), StateValue::Bool(true)),
                (SmolStr::new("name"), StateValue::Str("n".to_string())),
                (SmolStr::new("count"), StateValue::Str("2".to_string())),
            ])
        );
    }

    #[test]
    fn no_data_fields_means_no_state_assignment() {
        let (component, _) = assemble_script("export default { props: ['title'] };");
        assert_eq!(component.state, None);
    }

    #[test]
    fn unsupported_initializer_is_skipped_with_diagnostic() {
        let (component, diagnostics) =
            assemble_script("export default { data() { return { ok: true, items: [] }; } };");
        let fields = component.state.unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].0.as_str(), "ok");
        assert!(diagnostics
            .iter()
            .any(|d| d.message.contains("omitted from state")));
    }

    #[test]
    fn lifecycle_members_use_target_names() {
        let (component, _) = assemble_script(
            "export default { created() {}, mounted() {}, beforeUpdated() {}, updated() {}, beforeDestroy() {} };",
        );
        let names: Vec<_> = component.lifecycle.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "componentWillMount",
                "componentDidMount",
                "componentWillUpdate",
                "componentDidUpdate",
                "componentWillUnmount"
            ]
        );
    }

    #[test]
    fn methods_keep_model_order() {
        let (component, _) = assemble_script(
            "export default { methods: { second() {}, first() {} } };",
        );
        let names: Vec<_> = component.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["second", "first"]);
    }
}
