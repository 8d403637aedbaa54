//! Diagnostic output formatting.

use crate::cli::OutputFormat;
use serde::Serialize;
use vue_parser::{LineCol, LineIndex, ParseError, Span};
use vue_transformer::{Diagnostic, Severity};

/// A formatted diagnostic for output.
#[derive(Debug, Serialize)]
pub struct FormattedDiagnostic {
    /// The diagnostic type (Error, Warning).
    #[serde(rename = "type")]
    pub diagnostic_type: String,
    /// The file path.
    pub filename: String,
    /// The start position.
    pub start: Position,
    /// The end position.
    pub end: Position,
    /// The message.
    pub message: String,
    /// The diagnostic code.
    pub code: String,
}

/// A position in the source.
#[derive(Debug, Serialize)]
pub struct Position {
    /// 1-indexed line number.
    pub line: u32,
    /// 1-indexed column number.
    pub column: u32,
    /// Byte offset.
    pub offset: u32,
}

/// Formats parse errors and transform diagnostics for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats parser errors.
    pub fn format_parse_errors(&self, errors: &[ParseError], path: &str, source: &str) -> String {
        let line_index = LineIndex::new(source);
        let formatted: Vec<FormattedDiagnostic> = errors
            .iter()
            .map(|error| {
                formatted(
                    path,
                    &line_index,
                    "Error",
                    &error.to_string(),
                    "parse-error",
                    Some(error.span),
                )
            })
            .collect();
        self.render(&formatted)
    }

    /// Formats transform diagnostics.
    pub fn format_diagnostics(
        &self,
        diagnostics: &[Diagnostic],
        path: &str,
        source: &str,
    ) -> String {
        let line_index = LineIndex::new(source);
        let formatted: Vec<FormattedDiagnostic> = diagnostics
            .iter()
            .map(|diagnostic| {
                formatted(
                    path,
                    &line_index,
                    severity_name(diagnostic.severity),
                    &diagnostic.message,
                    diagnostic.code.as_str(),
                    diagnostic.span,
                )
            })
            .collect();
        self.render(&formatted)
    }

    fn render(&self, diagnostics: &[FormattedDiagnostic]) -> String {
        match self.format {
            OutputFormat::Human => {
                let mut out = String::new();
                for diagnostic in diagnostics {
                    out.push_str(&format!(
                        "{}:{}:{}\n{}: {} ({})\n\n",
                        diagnostic.filename,
                        diagnostic.start.line,
                        diagnostic.start.column,
                        diagnostic.diagnostic_type,
                        diagnostic.message,
                        diagnostic.code
                    ));
                }
                out
            }
            OutputFormat::Json => serde_json::to_string_pretty(diagnostics)
                .map(|json| json + "\n")
                .unwrap_or_default(),
        }
    }
}

fn severity_name(severity: Severity) -> &'static str {
    match severity {
        Severity::Warning => "Warning",
        Severity::Error => "Error",
    }
}

fn formatted(
    path: &str,
    line_index: &LineIndex,
    diagnostic_type: &str,
    message: &str,
    code: &str,
    span: Option<Span>,
) -> FormattedDiagnostic {
    let position = |offset| {
        let line_col = line_index.line_col(offset).unwrap_or(LineCol::new(0, 0));
        Position {
            line: line_col.line + 1,
            column: line_col.col + 1,
            offset: u32::from(offset),
        }
    };

    let (start, end) = match span {
        Some(span) => (position(span.start), position(span.end)),
        None => (
            Position {
                line: 1,
                column: 1,
                offset: 0,
            },
            Position {
                line: 1,
                column: 1,
                offset: 0,
            },
        ),
    };

    FormattedDiagnostic {
        diagnostic_type: diagnostic_type.to_string(),
        filename: path.to_string(),
        start,
        end,
        message: message.to_string(),
        code: code.to_string(),
    }
}
