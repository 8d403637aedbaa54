//! Component model extraction from the script section.
//!
//! Walks the SWC syntax tree of the component definition object
//! (`export default { ... }`) and produces the canonical [`ComponentModel`]:
//! data fields, props, methods and lifecycle hooks. The model is built once
//! per run and is read-only afterwards.

use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::resolve::{resolve_state, BindingKind};
use crate::TransformError;
use indexmap::IndexMap;
use smol_str::SmolStr;
use std::sync::Arc;
use swc_common::{FileName, SourceMap, Spanned};
use swc_ecma_ast::*;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax};
use swc_ecma_visit::{Visit, VisitWith};
use vue_parser::Span;

/// A captured data-field initializer.
///
/// Only string, number and boolean literals are supported for state
/// re-synthesis. `Unsupported` keeps the raw source text so the field still
/// participates in binding resolution; the assembler skips it with a
/// diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    /// A boolean literal.
    Bool(bool),
    /// A string literal.
    Str(String),
    /// A numeric literal.
    Num(f64),
    /// Any other initializer expression, kept as raw source text.
    Unsupported(String),
}

/// The normalized type tag of a prop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropType {
    /// A single lower-cased type tag, e.g. `string`.
    Tag(SmolStr),
    /// More than one type alternative collapses to `array`. This conflation
    /// is inherited behavior and is preserved exactly.
    Array,
}

/// A prop declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropDescriptor {
    /// The normalized type tag, if one was declared.
    pub prop_type: Option<PropType>,
    /// The literal default value, if one was declared. Non-literal defaults
    /// (factory functions) are dropped.
    pub default_value: Option<DataValue>,
    /// Whether the prop is required.
    pub required: bool,
    /// Whether the declaration carried a validator. The validator body
    /// itself is not carried into the target dialect.
    pub has_validator: bool,
}

/// A method definition, with parameters and body kept as source text.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDef {
    /// The method name.
    pub name: SmolStr,
    /// Parameter texts, in order.
    pub params: Vec<String>,
    /// The body text between the braces, unmodified.
    pub body: String,
}

/// The closed set of recognized lifecycle hooks.
///
/// The source→target mapping is a fixed, total bijection; the exhaustive
/// matches below make that checkable at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleHook {
    /// `created`
    Created,
    /// `mounted`
    Mounted,
    /// `beforeUpdated`
    BeforeUpdated,
    /// `updated`
    Updated,
    /// `beforeDestroy`
    BeforeDestroy,
}

impl LifecycleHook {
    /// All hooks, in lifecycle order.
    pub const ALL: [LifecycleHook; 5] = [
        LifecycleHook::Created,
        LifecycleHook::Mounted,
        LifecycleHook::BeforeUpdated,
        LifecycleHook::Updated,
        LifecycleHook::BeforeDestroy,
    ];

    /// Maps a source hook name to its variant.
    pub fn from_source_name(name: &str) -> Option<Self> {
        match name {
            "created" => Some(LifecycleHook::Created),
            "mounted" => Some(LifecycleHook::Mounted),
            "beforeUpdated" => Some(LifecycleHook::BeforeUpdated),
            "updated" => Some(LifecycleHook::Updated),
            "beforeDestroy" => Some(LifecycleHook::BeforeDestroy),
            _ => None,
        }
    }

    /// Returns the source hook name.
    pub fn source_name(&self) -> &'static str {
        match self {
            LifecycleHook::Created => "created",
            LifecycleHook::Mounted => "mounted",
            LifecycleHook::BeforeUpdated => "beforeUpdated",
            LifecycleHook::Updated => "updated",
            LifecycleHook::BeforeDestroy => "beforeDestroy",
        }
    }

    /// Returns the target-dialect method name.
    pub fn target_name(&self) -> &'static str {
        match self {
            LifecycleHook::Created => "componentWillMount",
            LifecycleHook::Mounted => "componentDidMount",
            LifecycleHook::BeforeUpdated => "componentWillUpdate",
            LifecycleHook::Updated => "componentDidUpdate",
            LifecycleHook::BeforeDestroy => "componentWillUnmount",
        }
    }
}

/// A collected lifecycle hook. The body has already had its call arguments
/// rewritten to state-scoped references.
#[derive(Debug, Clone, PartialEq)]
pub struct LifecycleMethod {
    /// The hook.
    pub hook: LifecycleHook,
    /// The rewritten body text between the braces.
    pub body: String,
}

/// The canonical component model extracted from the script.
#[derive(Debug, Clone, Default)]
pub struct ComponentModel {
    /// Data fields by name. Last declaration for a name wins silently.
    pub data_fields: IndexMap<SmolStr, DataValue>,
    /// The flattened, ordered list of data-field properties as declared,
    /// recorded for constructor re-emission.
    pub data_literals: Vec<(SmolStr, DataValue)>,
    /// Props by name, in declaration order.
    pub props: IndexMap<SmolStr, PropDescriptor>,
    /// Methods, in declaration order.
    pub methods: Vec<MethodDef>,
    /// Lifecycle hooks, in declaration order.
    pub lifecycle: Vec<LifecycleMethod>,
}

impl ComponentModel {
    /// Returns true if `name` is a declared prop.
    pub fn has_prop(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    /// Returns true if `name` is a declared data field.
    pub fn has_data_field(&self, name: &str) -> bool {
        self.data_fields.contains_key(name)
    }
}

/// The script text plus the offsets needed to slice SWC spans out of it and
/// to map them back to positions in the containing file.
struct ScriptSource<'a> {
    text: &'a str,
    /// The SWC source file's start position.
    base: u32,
    /// Byte offset of the script content within the `.vue` file.
    file_offset: u32,
}

impl ScriptSource<'_> {
    fn slice(&self, span: swc_common::Span) -> &str {
        &self.text[(span.lo.0 - self.base) as usize..(span.hi.0 - self.base) as usize]
    }

    fn file_span(&self, span: swc_common::Span) -> Span {
        Span::new(
            span.lo.0 - self.base + self.file_offset,
            span.hi.0 - self.base + self.file_offset,
        )
    }
}

/// Extracts the component model from the raw script text.
///
/// `file_offset` is the byte offset of the script content within the
/// containing file; it is only used to position diagnostics.
pub fn extract_model(
    script: &str,
    file_offset: u32,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<ComponentModel, TransformError> {
    let cm: Arc<SourceMap> = Default::default();
    let fm = cm.new_source_file(
        FileName::Custom("component-script".into()).into(),
        script.to_string(),
    );
    let syntax = Syntax::Es(EsSyntax::default());
    let mut parser = Parser::new(syntax, StringInput::from(&*fm), None);
    let module = match parser.parse_module() {
        Ok(module) => {
            // The parser recovers from some syntax errors; a recovered
            // module is not a trustworthy base for extraction.
            if let Some(error) = parser.take_errors().into_iter().next() {
                return Err(TransformError::ScriptParse(format!("{:?}", error)));
            }
            module
        }
        Err(error) => return Err(TransformError::ScriptParse(format!("{:?}", error))),
    };

    let src = ScriptSource {
        text: script,
        base: fm.start_pos.0,
        file_offset,
    };

    let object = find_component_object(&module).ok_or(TransformError::MissingComponentObject)?;

    let mut model = ComponentModel::default();

    // First pass: data, props and methods. Lifecycle hooks are collected in
    // a second pass so their body rewriting always sees the complete data
    // model, regardless of member order in the source.
    for item in &object.props {
        let PropOrSpread::Prop(prop) = item else {
            continue;
        };
        match &**prop {
            Prop::Method(method) => {
                let Some(name) = member_name(&method.key) else {
                    continue;
                };
                if name == "data" {
                    extract_data_from_function(&method.function, &mut model, &src, diagnostics);
                }
            }
            Prop::KeyValue(kv) => {
                let Some(name) = member_name(&kv.key) else {
                    continue;
                };
                match name.as_str() {
                    "data" => extract_data_from_value(&kv.value, &mut model, &src, diagnostics),
                    "props" => extract_props(&kv.value, &mut model, &src, diagnostics),
                    "methods" => extract_methods(&kv.value, &mut model, &src, diagnostics),
                    _ => {}
                }
            }
            _ => {}
        }
    }

    for item in &object.props {
        let PropOrSpread::Prop(prop) = item else {
            continue;
        };
        if let Prop::Method(method) = &**prop {
            if let Some(name) = member_name(&method.key) {
                if let Some(hook) = LifecycleHook::from_source_name(&name) {
                    let body = rewrite_hook_body(&method.function, &model, &src);
                    model.lifecycle.push(LifecycleMethod { hook, body });
                }
            }
        }
    }

    Ok(model)
}

/// Finds the `export default { ... }` component definition object.
fn find_component_object(module: &Module) -> Option<&ObjectLit> {
    for item in &module.body {
        if let ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultExpr(export)) = item {
            return as_object_lit(&export.expr);
        }
    }
    None
}

fn as_object_lit(expr: &Expr) -> Option<&ObjectLit> {
    match expr {
        Expr::Object(obj) => Some(obj),
        Expr::Paren(paren) => as_object_lit(&paren.expr),
        _ => None,
    }
}

/// Extracts the name of an object member key.
fn member_name(key: &PropName) -> Option<SmolStr> {
    match key {
        PropName::Ident(ident) => Some(SmolStr::new(&ident.sym)),
        PropName::Str(s) => Some(SmolStr::new(s.value.to_string_lossy().as_ref())),
        _ => None,
    }
}

/// `data() { return { ... } }`
fn extract_data_from_function(
    function: &Function,
    model: &mut ComponentModel,
    src: &ScriptSource,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let Some(body) = &function.body else {
        return;
    };
    if let Some(object) = returned_object(&body.stmts) {
        collect_data_fields(object, model, src, diagnostics);
    }
}

/// `data: () => ({ ... })`, `data: () => { return { ... } }` and
/// `data: function() { return { ... } }`
fn extract_data_from_value(
    value: &Expr,
    model: &mut ComponentModel,
    src: &ScriptSource,
    diagnostics: &mut Vec<Diagnostic>,
) {
    match value {
        Expr::Arrow(arrow) => match &*arrow.body {
            BlockStmtOrExpr::BlockStmt(block) => {
                if let Some(object) = returned_object(&block.stmts) {
                    collect_data_fields(object, model, src, diagnostics);
                }
            }
            BlockStmtOrExpr::Expr(expr) => {
                if let Some(object) = as_object_lit(expr) {
                    collect_data_fields(object, model, src, diagnostics);
                }
            }
        },
        Expr::Fn(fn_expr) => {
            extract_data_from_function(&fn_expr.function, model, src, diagnostics);
        }
        other => {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::UnsupportedConstruct,
                "`data` is not a function returning an object literal; member skipped",
                Some(src.file_span(other.span())),
            ));
        }
    }
}

fn returned_object(stmts: &[Stmt]) -> Option<&ObjectLit> {
    for stmt in stmts {
        if let Stmt::Return(ret) = stmt {
            return ret.arg.as_deref().and_then(as_object_lit);
        }
    }
    None
}

fn collect_data_fields(
    object: &ObjectLit,
    model: &mut ComponentModel,
    src: &ScriptSource,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for item in &object.props {
        let prop = match item {
            PropOrSpread::Prop(prop) => prop,
            PropOrSpread::Spread(spread) => {
                diagnostics.push(Diagnostic::new(
                    DiagnosticCode::UnsupportedConstruct,
                    "spread in data object; entry skipped",
                    Some(src.file_span(spread.expr.span())),
                ));
                continue;
            }
        };
        let Prop::KeyValue(kv) = &**prop else {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::UnsupportedConstruct,
                "data fields must be plain key/value properties; entry skipped",
                Some(src.file_span(prop.span())),
            ));
            continue;
        };
        let Some(name) = member_name(&kv.key) else {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::UnsupportedConstruct,
                "computed data field name; entry skipped",
                Some(src.file_span(kv.key.span())),
            ));
            continue;
        };

        let value = match &*kv.value {
            Expr::Lit(Lit::Bool(b)) => DataValue::Bool(b.value),
            Expr::Lit(Lit::Str(s)) => DataValue::Str(s.value.to_string_lossy().into_owned()),
            Expr::Lit(Lit::Num(n)) => DataValue::Num(n.value),
            other => {
                diagnostics.push(Diagnostic::new(
                    DiagnosticCode::UnsupportedConstruct,
                    format!(
                        "data field `{}` has a non-literal initializer; it is omitted from the constructor state",
                        name
                    ),
                    Some(src.file_span(other.span())),
                ));
                DataValue::Unsupported(src.slice(other.span()).to_string())
            }
        };

        model.data_fields.insert(name.clone(), value.clone());
        model.data_literals.push((name, value));
    }
}

fn extract_props(
    value: &Expr,
    model: &mut ComponentModel,
    src: &ScriptSource,
    diagnostics: &mut Vec<Diagnostic>,
) {
    match value {
        // props: ['title', 'likes']
        Expr::Array(array) => {
            for elem in array.elems.iter().flatten() {
                if elem.spread.is_some() {
                    diagnostics.push(Diagnostic::new(
                        DiagnosticCode::UnsupportedConstruct,
                        "spread in props array; entry skipped",
                        Some(src.file_span(elem.expr.span())),
                    ));
                    continue;
                }
                match &*elem.expr {
                    Expr::Lit(Lit::Str(s)) => {
                        model.props.insert(
                            SmolStr::new(s.value.to_string_lossy().as_ref()),
                            PropDescriptor::default(),
                        );
                    }
                    other => {
                        diagnostics.push(Diagnostic::new(
                            DiagnosticCode::UnsupportedConstruct,
                            "prop names in an array declaration must be string literals; entry skipped",
                            Some(src.file_span(other.span())),
                        ));
                    }
                }
            }
        }
        // props: { title: String, ... }
        Expr::Object(object) => {
            for item in &object.props {
                let Some(kv) = key_value(item) else {
                    diagnostics.push(Diagnostic::new(
                        DiagnosticCode::UnsupportedConstruct,
                        "prop declarations must be plain key/value properties; entry skipped",
                        Some(src.file_span(item.span())),
                    ));
                    continue;
                };
                let Some(name) = member_name(&kv.key) else {
                    diagnostics.push(Diagnostic::new(
                        DiagnosticCode::UnsupportedConstruct,
                        "computed prop name; entry skipped",
                        Some(src.file_span(kv.key.span())),
                    ));
                    continue;
                };

                match &*kv.value {
                    Expr::Ident(ident) => {
                        model.props.insert(
                            name,
                            PropDescriptor {
                                prop_type: Some(PropType::Tag(SmolStr::new(
                                    ident.sym.to_lowercase(),
                                ))),
                                ..Default::default()
                            },
                        );
                    }
                    Expr::Array(array) => {
                        model.props.insert(
                            name,
                            PropDescriptor {
                                prop_type: collapse_type_list(array, src, diagnostics),
                                ..Default::default()
                            },
                        );
                    }
                    Expr::Object(descriptor) => {
                        let descriptor = extract_prop_descriptor(descriptor, src, diagnostics);
                        model.props.insert(name, descriptor);
                    }
                    other => {
                        diagnostics.push(Diagnostic::new(
                            DiagnosticCode::UnsupportedConstruct,
                            format!("prop `{}` has an unrecognized declaration; entry skipped", name),
                            Some(src.file_span(other.span())),
                        ));
                    }
                }
            }
        }
        other => {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::UnsupportedConstruct,
                "`props` must be an array of names or an object of descriptors; member skipped",
                Some(src.file_span(other.span())),
            ));
        }
    }
}

fn key_value(item: &PropOrSpread) -> Option<&KeyValueProp> {
    match item {
        PropOrSpread::Prop(prop) => match &**prop {
            Prop::KeyValue(kv) => Some(kv),
            _ => None,
        },
        PropOrSpread::Spread(_) => None,
    }
}

/// Collapses a list of type alternatives.
///
/// More than one alternative becomes `array`; a single alternative becomes
/// that tag; an empty list becomes no type. The >1 case conflates "accepts
/// an array" with "accepts one of several types" and is preserved exactly
/// for compatibility.
fn collapse_type_list(
    array: &ArrayLit,
    src: &ScriptSource,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<PropType> {
    let mut tags = Vec::new();
    for elem in array.elems.iter().flatten() {
        match &*elem.expr {
            Expr::Ident(ident) => tags.push(SmolStr::new(ident.sym.to_lowercase())),
            other => {
                diagnostics.push(Diagnostic::new(
                    DiagnosticCode::UnsupportedConstruct,
                    "type alternatives must be identifiers; alternative skipped",
                    Some(src.file_span(other.span())),
                ));
            }
        }
    }
    match tags.len() {
        0 => None,
        1 => Some(PropType::Tag(tags.remove(0))),
        _ => Some(PropType::Array),
    }
}

fn extract_prop_descriptor(
    object: &ObjectLit,
    src: &ScriptSource,
    diagnostics: &mut Vec<Diagnostic>,
) -> PropDescriptor {
    let mut descriptor = PropDescriptor::default();

    for item in &object.props {
        let Some(kv) = key_value(item) else {
            continue;
        };
        let Some(field) = member_name(&kv.key) else {
            continue;
        };

        match field.as_str() {
            "type" => match &*kv.value {
                Expr::Ident(ident) => {
                    descriptor.prop_type =
                        Some(PropType::Tag(SmolStr::new(ident.sym.to_lowercase())));
                }
                Expr::Array(array) => {
                    descriptor.prop_type = collapse_type_list(array, src, diagnostics);
                }
                other => {
                    diagnostics.push(Diagnostic::new(
                        DiagnosticCode::UnsupportedConstruct,
                        "prop `type` must be an identifier or a list of identifiers",
                        Some(src.file_span(other.span())),
                    ));
                }
            },
            "default" => match &*kv.value {
                Expr::Lit(Lit::Bool(b)) => descriptor.default_value = Some(DataValue::Bool(b.value)),
                Expr::Lit(Lit::Str(s)) => {
                    descriptor.default_value =
                        Some(DataValue::Str(s.value.to_string_lossy().into_owned()))
                }
                Expr::Lit(Lit::Num(n)) => descriptor.default_value = Some(DataValue::Num(n.value)),
                other => {
                    diagnostics.push(Diagnostic::new(
                        DiagnosticCode::UnsupportedConstruct,
                        "non-literal prop default dropped",
                        Some(src.file_span(other.span())),
                    ));
                }
            },
            "required" => match &*kv.value {
                Expr::Lit(Lit::Bool(b)) => descriptor.required = b.value,
                other => {
                    diagnostics.push(Diagnostic::new(
                        DiagnosticCode::UnsupportedConstruct,
                        "prop `required` must be a boolean literal",
                        Some(src.file_span(other.span())),
                    ));
                }
            },
            "validator" => {
                descriptor.has_validator = true;
                diagnostics.push(Diagnostic::new(
                    DiagnosticCode::UnsupportedConstruct,
                    "prop validator is not carried into the target dialect",
                    Some(src.file_span(kv.value.span())),
                ));
            }
            _ => {}
        }
    }

    descriptor
}

fn extract_methods(
    value: &Expr,
    model: &mut ComponentModel,
    src: &ScriptSource,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let Expr::Object(object) = value else {
        diagnostics.push(Diagnostic::new(
            DiagnosticCode::UnsupportedConstruct,
            "`methods` must be an object literal; member skipped",
            Some(src.file_span(value.span())),
        ));
        return;
    };

    for item in &object.props {
        let prop = match item {
            PropOrSpread::Prop(prop) => prop,
            PropOrSpread::Spread(spread) => {
                diagnostics.push(Diagnostic::new(
                    DiagnosticCode::UnsupportedConstruct,
                    "spread in methods object; entry skipped",
                    Some(src.file_span(spread.expr.span())),
                ));
                continue;
            }
        };
        match &**prop {
            Prop::Method(method) => {
                let Some(name) = member_name(&method.key) else {
                    continue;
                };
                model.methods.push(MethodDef {
                    name,
                    params: function_params(&method.function, src),
                    body: block_text(method.function.body.as_ref(), src),
                });
            }
            Prop::KeyValue(kv) => {
                let Some(name) = member_name(&kv.key) else {
                    continue;
                };
                match &*kv.value {
                    Expr::Fn(fn_expr) => {
                        model.methods.push(MethodDef {
                            name,
                            params: function_params(&fn_expr.function, src),
                            body: block_text(fn_expr.function.body.as_ref(), src),
                        });
                    }
                    Expr::Arrow(arrow) => {
                        let params = arrow
                            .params
                            .iter()
                            .map(|pat| src.slice(pat.span()).to_string())
                            .collect();
                        let body = match &*arrow.body {
                            BlockStmtOrExpr::BlockStmt(block) => block_text(Some(block), src),
                            BlockStmtOrExpr::Expr(expr) => {
                                format!("return {};", src.slice(expr.span()))
                            }
                        };
                        model.methods.push(MethodDef { name, params, body });
                    }
                    other => {
                        diagnostics.push(Diagnostic::new(
                            DiagnosticCode::UnsupportedConstruct,
                            format!("method `{}` is not a function; entry skipped", name),
                            Some(src.file_span(other.span())),
                        ));
                    }
                }
            }
            other => {
                diagnostics.push(Diagnostic::new(
                    DiagnosticCode::UnsupportedConstruct,
                    "unsupported member in methods object; entry skipped",
                    Some(src.file_span(other.span())),
                ));
            }
        }
    }
}

fn function_params(function: &Function, src: &ScriptSource) -> Vec<String> {
    function
        .params
        .iter()
        .map(|param| src.slice(param.pat.span()).to_string())
        .collect()
}

/// Returns the text between a block's braces, or an empty string.
fn block_text(block: Option<&BlockStmt>, src: &ScriptSource) -> String {
    let Some(block) = block else {
        return String::new();
    };
    let span = block.span;
    src.text[(span.lo.0 - src.base + 1) as usize..(span.hi.0 - src.base - 1) as usize].to_string()
}

/// Rewrites a lifecycle hook body before collection: every call argument
/// that is a member expression whose property resolves against the data
/// fields becomes a read through the class state container. All other
/// arguments pass through unchanged.
fn rewrite_hook_body(function: &Function, model: &ComponentModel, src: &ScriptSource) -> String {
    let Some(block) = &function.body else {
        return String::new();
    };

    let mut collector = StateArgCollector {
        model,
        replacements: Vec::new(),
    };
    block.visit_with(&mut collector);

    let inner_lo = block.span.lo.0 + 1;
    let inner_hi = block.span.hi.0 - 1;
    let mut text =
        src.text[(inner_lo - src.base) as usize..(inner_hi - src.base) as usize].to_string();

    // Apply in reverse offset order so earlier replacements keep their
    // positions valid.
    collector.replacements.sort_by(|a, b| b.0.cmp(&a.0));
    for (lo, hi, replacement) in collector.replacements {
        let start = (lo - inner_lo) as usize;
        let end = (hi - inner_lo) as usize;
        text.replace_range(start..end, &replacement);
    }

    text
}

/// Collects span replacements for call arguments that read data fields.
struct StateArgCollector<'a> {
    model: &'a ComponentModel,
    replacements: Vec<(u32, u32, String)>,
}

impl Visit for StateArgCollector<'_> {
    fn visit_call_expr(&mut self, call: &CallExpr) {
        call.callee.visit_with(self);
        for arg in &call.args {
            if arg.spread.is_none() {
                if let Expr::Member(member) = &*arg.expr {
                    if let MemberProp::Ident(prop) = &member.prop {
                        if let BindingKind::State(name) = resolve_state(&prop.sym, self.model) {
                            self.replacements.push((
                                member.span.lo.0,
                                member.span.hi.0,
                                format!("this.state.{}", name),
                            ));
                            continue;
                        }
                    }
                }
            }
            arg.visit_with(self);
        }
    }
}
