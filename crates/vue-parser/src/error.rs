//! Parse error types.

use crate::span::Span;
use thiserror::Error;

/// An error that occurred during parsing.
#[derive(Debug, Clone, Error)]
#[error("{kind}")]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// The location in the source where the error occurred.
    pub span: Span,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of parse error.
#[derive(Debug, Clone, Error)]
pub enum ParseErrorKind {
    /// An unexpected token was encountered.
    #[error("unexpected token: expected {expected}, found {found}")]
    UnexpectedToken {
        /// What was expected.
        expected: String,
        /// What was found.
        found: String,
    },

    /// An unexpected end of file was encountered.
    #[error("unexpected end of file: expected {expected}")]
    UnexpectedEof {
        /// What was expected.
        expected: String,
    },

    /// An unclosed tag was found.
    #[error("unclosed tag: <{tag_name}>")]
    UnclosedTag {
        /// The name of the unclosed tag.
        tag_name: String,
    },

    /// A mismatched closing tag was found.
    #[error("mismatched closing tag: expected </{expected}>, found </{found}>")]
    MismatchedClosingTag {
        /// The expected tag name.
        expected: String,
        /// The found tag name.
        found: String,
    },

    /// An invalid directive was found.
    #[error("invalid directive: {message}")]
    InvalidDirective {
        /// A description of the problem.
        message: String,
    },

    /// An interpolation without a closing `}}`.
    #[error("unterminated interpolation")]
    UnterminatedInterpolation,

    /// A generic syntax error.
    #[error("{message}")]
    SyntaxError {
        /// A description of the error.
        message: String,
    },
}
