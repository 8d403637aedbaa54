//! Vue 2 options-API to React class component transformation.
//!
//! This crate turns a parsed single-file component into an equivalent
//! class-based component in four phases:
//! - Extracting a canonical component model from the script (data fields,
//!   props, methods, lifecycle hooks)
//! - Resolving markup identifiers against that model
//! - Rewriting the template tree into a target-dialect render tree
//! - Assembling and emitting the target class
//!
//! The transform is a deliberately partial, best-effort conversion: the
//! fatal errors are limited to a missing section or an unparseable script,
//! and every other unsupported construct is skipped with a recorded
//! [`Diagnostic`] instead of aborting the run.
//!
//! # Example
//!
//! ```
//! use vue_parser::parse;
//! use vue_transformer::{transform, TransformOptions};
//!
//! let source = r#"
//! <template>
//!     <p v-if="show">{{ name }}</p>
//! </template>
//! <script>
//! export default {
//!     data() {
//!         return { show: true, name: 'n' };
//!     }
//! };
//! </script>
//! "#;
//!
//! let parsed = parse(source);
//! let result = transform(&parsed.document, &TransformOptions::default()).unwrap();
//! assert!(result.code.contains("this.state.show ? <p>{this.state.name}</p> : null"));
//! ```

mod assemble;
mod diagnostic;
mod emit;
mod model;
mod resolve;
mod template;
mod types;

pub use assemble::assemble;
pub use diagnostic::{Diagnostic, DiagnosticCode, Severity};
pub use emit::emit;
pub use model::{
    extract_model, ComponentModel, DataValue, LifecycleHook, LifecycleMethod, MethodDef,
    PropDescriptor, PropType,
};
pub use resolve::{resolve, resolve_state, BindingKind};
pub use template::rewrite_template;
pub use types::{
    component_name_from_path, ReactComponent, ReactMethod, RenderAttribute, RenderAttributeValue,
    RenderNode, StateValue,
};

use thiserror::Error;
use vue_parser::VueDocument;

/// A fatal transformation error. No partial output is produced for these.
#[derive(Debug, Clone, Error)]
pub enum TransformError {
    /// The component has no `<script>` section.
    #[error("component has no script section")]
    MissingScript,

    /// The component has no `<template>` section.
    #[error("component has no template section")]
    MissingTemplate,

    /// The script could not be parsed.
    #[error("failed to parse script: {0}")]
    ScriptParse(String),

    /// The script has no `export default { ... }` component definition.
    #[error("script has no `export default` component definition object")]
    MissingComponentObject,
}

/// Options for transformation.
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// The class name of the generated component.
    pub component_name: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            component_name: "Component".to_string(),
        }
    }
}

/// The result of a transformation.
#[derive(Debug)]
pub struct Transformed {
    /// The generated module source.
    pub code: String,
    /// The assembled target class.
    pub component: ReactComponent,
    /// The extracted component model.
    pub model: ComponentModel,
    /// Diagnostics recorded for every skipped or degraded construct.
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs the full pipeline on a parsed document.
///
/// The phases run in fixed order — extract, rewrite, assemble, emit — and
/// each run owns its model and trees; running the pipeline concurrently on
/// different documents shares nothing.
pub fn transform(
    document: &VueDocument,
    options: &TransformOptions,
) -> Result<Transformed, TransformError> {
    let script = document
        .script
        .as_ref()
        .ok_or(TransformError::MissingScript)?;
    let template = document
        .template
        .as_ref()
        .ok_or(TransformError::MissingTemplate)?;

    let mut diagnostics = Vec::new();

    let file_offset = u32::from(script.content_span.start);
    let model = extract_model(&script.content, file_offset, &mut diagnostics)?;
    let render = rewrite_template(&template.fragment, &model, &mut diagnostics);
    let component = assemble(&model, render, &options.component_name, &mut diagnostics);
    let code = emit(&component);

    Ok(Transformed {
        code,
        component,
        model,
        diagnostics,
    })
}
