//! Binding resolution.
//!
//! Classifies a markup identifier against the component model. Resolution
//! order is fixed: props first, then data fields, else unresolved. A name
//! declared as both resolves as a prop.

use crate::model::ComponentModel;
use smol_str::SmolStr;

/// The classification of an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingKind {
    /// A reference to a declared prop.
    Prop(SmolStr),
    /// A reference to a declared data field.
    State(SmolStr),
    /// Neither a prop nor a data field.
    Unresolved,
}

impl BindingKind {
    /// Renders the instance-scoped member path for a resolved binding.
    pub fn member_path(&self) -> Option<String> {
        match self {
            BindingKind::Prop(name) => Some(format!("this.props.{}", name)),
            BindingKind::State(name) => Some(format!("this.state.{}", name)),
            BindingKind::Unresolved => None,
        }
    }

    /// Returns true if the binding resolved.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, BindingKind::Unresolved)
    }
}

/// Classifies `name` against the model. Pure lookup, no side effects.
pub fn resolve(name: &str, model: &ComponentModel) -> BindingKind {
    if model.has_prop(name) {
        BindingKind::Prop(SmolStr::new(name))
    } else if model.has_data_field(name) {
        BindingKind::State(SmolStr::new(name))
    } else {
        BindingKind::Unresolved
    }
}

/// State-only resolution, used when rewriting lifecycle hook bodies where
/// props are never referenced from call arguments.
pub fn resolve_state(name: &str, model: &ComponentModel) -> BindingKind {
    if model.has_data_field(name) {
        BindingKind::State(SmolStr::new(name))
    } else {
        BindingKind::Unresolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DataValue, PropDescriptor};

    fn model() -> ComponentModel {
        let mut model = ComponentModel::default();
        model
            .props
            .insert(SmolStr::new("title"), PropDescriptor::default());
        model
            .props
            .insert(SmolStr::new("shared"), PropDescriptor::default());
        model
            .data_fields
            .insert(SmolStr::new("show"), DataValue::Bool(true));
        model
            .data_fields
            .insert(SmolStr::new("shared"), DataValue::Str("x".to_string()));
        model
    }

    #[test]
    fn resolves_props_and_state() {
        let model = model();
        assert_eq!(
            resolve("title", &model),
            BindingKind::Prop(SmolStr::new("title"))
        );
        assert_eq!(
            resolve("show", &model),
            BindingKind::State(SmolStr::new("show"))
        );
        assert_eq!(resolve("missing", &model), BindingKind::Unresolved);
    }

    #[test]
    fn props_win_over_state() {
        // `shared` is declared as both; resolution must return Prop.
        let model = model();
        assert_eq!(
            resolve("shared", &model),
            BindingKind::Prop(SmolStr::new("shared"))
        );
    }

    #[test]
    fn state_only_resolution_skips_props() {
        let model = model();
        assert_eq!(resolve_state("title", &model), BindingKind::Unresolved);
        assert_eq!(
            resolve_state("show", &model),
            BindingKind::State(SmolStr::new("show"))
        );
        // A name in both maps resolves as state here: props are out of scope.
        assert_eq!(
            resolve_state("shared", &model),
            BindingKind::State(SmolStr::new("shared"))
        );
    }

    #[test]
    fn member_paths() {
        assert_eq!(
            BindingKind::Prop(SmolStr::new("title")).member_path(),
            Some("this.props.title".to_string())
        );
        assert_eq!(
            BindingKind::State(SmolStr::new("show")).member_path(),
            Some("this.state.show".to_string())
        );
        assert_eq!(BindingKind::Unresolved.member_path(), None);
    }
}
