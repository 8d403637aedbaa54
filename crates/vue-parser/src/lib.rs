//! Vue 2 single-file component parser.
//!
//! This crate parses a `.vue` file into its three sections and a markup
//! tree for the template:
//! - Lexer (tokenizer) using `logos`
//! - Recursive descent parser with error recovery
//! - Owned AST types for elements, attributes, directives, text and
//!   `{{ ... }}` interpolations
//!
//! Script and style contents are captured as raw text; consumers parse the
//! script with a JavaScript parser.
//!
//! # Example
//!
//! ```
//! use vue_parser::parse;
//!
//! let source = r#"
//! <template>
//!     <p v-if="show">{{ name }}</p>
//! </template>
//! <script>
//! export default {};
//! </script>
//! "#;
//!
//! let result = parse(source);
//! assert!(result.errors.is_empty());
//! assert!(result.document.template.is_some());
//! assert!(result.document.script.is_some());
//! ```

mod ast;
mod error;
mod lexer;
mod parser;
mod span;

pub use ast::*;
pub use error::{ParseError, ParseErrorKind};
pub use lexer::{Lexer, Token, TokenKind};
pub use span::{ByteOffset, LineCol, LineIndex, Span};

/// Options for parsing single-file components.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Whether to enable tracing for debugging.
    pub trace: bool,
}

/// The result of parsing a single-file component.
#[derive(Debug)]
pub struct ParseResult {
    /// The parsed document.
    pub document: VueDocument,
    /// Any errors encountered during parsing.
    pub errors: Vec<ParseError>,
}

/// Parses a Vue single-file component into an AST.
///
/// Parsing attempts to recover from errors where possible, returning both
/// the document and any errors encountered.
pub fn parse(source: &str) -> ParseResult {
    parse_with_options(source, ParseOptions::default())
}

/// Parses a single-file component with custom options.
pub fn parse_with_options(source: &str, options: ParseOptions) -> ParseResult {
    parser::Parser::new(source, options).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let result = parse("");
        assert!(result.errors.is_empty());
        assert!(result.document.template.is_none());
        assert!(result.document.script.is_none());
    }

    #[test]
    fn test_parse_template_only() {
        let result = parse("<template><div>hi</div></template>");
        assert!(result.errors.is_empty());
        let template = result.document.template.unwrap();
        assert_eq!(template.fragment.nodes.len(), 1);
    }

    #[test]
    fn test_parse_full_component() {
        let source = r#"<template>
  <div>
    <p class="title" v-on:click="handleClick">{{title}}</p>
    <p v-if="show" class="name">{{name}}</p>
  </div>
</template>
<script>
export default {
  props: ['title'],
  data() {
    return { show: true, name: 'n' };
  },
  methods: { handleClick() {} }
};
</script>
<style>
.title { color: red; }
</style>
"#;
        let result = parse(source);
        assert!(result.errors.is_empty(), "{:?}", result.errors);
        let doc = result.document;
        assert!(doc.template.is_some());
        assert!(doc.script.unwrap().content.contains("props: ['title']"));
        assert!(doc.style.unwrap().content.contains("color: red"));
    }
}
