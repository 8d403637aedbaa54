//! Diagnostic types for recovered transformation anomalies.
//!
//! The transform never aborts on an unsupported or unresolvable construct;
//! it degrades to best-effort output. Every such site records a diagnostic
//! here so callers (and tests) can observe exactly what was skipped.

use vue_parser::Span;

/// A diagnostic recorded during transformation.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The diagnostic code.
    pub code: DiagnosticCode,
    /// The severity level.
    pub severity: Severity,
    /// The diagnostic message.
    pub message: String,
    /// The source location, when one is known.
    pub span: Option<Span>,
}

impl Diagnostic {
    /// Creates a new diagnostic with the code's default severity.
    pub fn new(code: DiagnosticCode, message: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            severity: code.default_severity(),
            code,
            message: message.into(),
            span,
        }
    }
}

/// The severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// A warning that doesn't prevent transformation.
    Warning,
    /// An error that should be fixed.
    Error,
}

/// Diagnostic codes for all recovered anomalies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// `unresolved-binding`: an identifier resolved to neither a prop nor a
    /// data field.
    UnresolvedBinding,
    /// `unsupported-construct`: a script construct outside the recognized
    /// subset was dropped.
    UnsupportedConstruct,
    /// `unsupported-directive`: a directive outside the transformed subset
    /// was removed from the markup.
    UnsupportedDirective,
    /// `ignored-event-name`: an event binding for an event other than
    /// `click` was rewritten to `onClick`.
    IgnoredEventName,
    /// `extra-root-node`: the template had more than one root node.
    ExtraRootNode,
}

impl DiagnosticCode {
    /// Returns the default severity for this diagnostic code.
    pub fn default_severity(&self) -> Severity {
        match self {
            DiagnosticCode::UnresolvedBinding
            | DiagnosticCode::UnsupportedConstruct
            | DiagnosticCode::UnsupportedDirective
            | DiagnosticCode::IgnoredEventName
            | DiagnosticCode::ExtraRootNode => Severity::Warning,
        }
    }

    /// Returns the diagnostic code as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::UnresolvedBinding => "unresolved-binding",
            DiagnosticCode::UnsupportedConstruct => "unsupported-construct",
            DiagnosticCode::UnsupportedDirective => "unsupported-directive",
            DiagnosticCode::IgnoredEventName => "ignored-event-name",
            DiagnosticCode::ExtraRootNode => "extra-root-node",
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_severity() {
        let diag = Diagnostic::new(DiagnosticCode::UnresolvedBinding, "msg", None);
        assert_eq!(diag.severity, Severity::Warning);
    }

    #[test]
    fn test_code_display() {
        assert_eq!(
            DiagnosticCode::UnsupportedDirective.to_string(),
            "unsupported-directive"
        );
    }
}
