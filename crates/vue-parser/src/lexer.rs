//! Vue template lexer using logos.
//!
//! The lexer tokenizes the markup portions of a single-file component:
//! tags, attributes, directives and `{{ ... }}` interpolations. Script and
//! style contents are never tokenized meaningfully; the parser captures them
//! as raw text slices.

use crate::span::Span;
use logos::Logos;
use text_size::TextSize;

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The span of the token in the source.
    pub span: Span,
}

/// Token kinds for Vue single-file component syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Logos, Default)]
#[logos(skip r"[ \t\r]+")]
pub enum TokenKind {
    // === HTML tokens ===
    /// `<`
    #[token("<", priority = 10)]
    LAngle,

    /// `>`
    #[token(">", priority = 10)]
    RAngle,

    /// `/>`
    #[token("/>", priority = 10)]
    SlashRAngle,

    /// `</`
    #[token("</", priority = 10)]
    LAngleSlash,

    /// `=`
    #[token("=", priority = 10)]
    Eq,

    /// `"`
    #[token("\"", priority = 10)]
    DoubleQuote,

    /// `'`
    #[token("'", priority = 10)]
    SingleQuote,

    // === Interpolation delimiters ===
    /// `{{`
    #[token("{{", priority = 11)]
    LMustache,

    /// `}}`
    #[token("}}", priority = 11)]
    RMustache,

    // === Section keywords ===
    /// `template`
    #[token("template", priority = 5)]
    Template,

    /// `script`
    #[token("script", priority = 5)]
    Script,

    /// `style`
    #[token("style", priority = 5)]
    Style,

    // === General tokens ===
    /// `:` (directive argument separator, e.g. `v-on:click`)
    #[token(":", priority = 10)]
    Colon,

    /// `/`
    #[token("/", priority = 10)]
    Slash,

    /// Newline
    #[token("\n", priority = 10)]
    Newline,

    /// An identifier (tag name, attribute name, directive name).
    /// Hyphens are included so `v-if` and `my-component` lex as one token.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_\-]*", priority = 4)]
    Ident,

    /// A number
    #[regex(r"[0-9]+", priority = 4)]
    Number,

    /// Punctuation that can appear in text content; most text is consumed
    /// by the parser's raw `read_until` scanning rather than token by token.
    #[regex(r"[.!?,;#@$%^&*()\[\]~`|{}+-]+", priority = 1)]
    Text,

    /// End of file
    Eof,

    /// Invalid/unknown token
    #[default]
    Error,
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LAngle => "'<'",
            TokenKind::RAngle => "'>'",
            TokenKind::SlashRAngle => "'/>'",
            TokenKind::LAngleSlash => "'</'",
            TokenKind::Eq => "'='",
            TokenKind::DoubleQuote => "'\"'",
            TokenKind::SingleQuote => "'''",
            TokenKind::LMustache => "'{{'",
            TokenKind::RMustache => "'}}'",
            TokenKind::Template => "'template'",
            TokenKind::Script => "'script'",
            TokenKind::Style => "'style'",
            TokenKind::Colon => "':'",
            TokenKind::Slash => "'/'",
            TokenKind::Newline => "newline",
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::Text => "text",
            TokenKind::Eof => "end of file",
            TokenKind::Error => "invalid token",
        }
    }

    /// Returns true if this token can serve as a tag or attribute name.
    pub fn is_name(&self) -> bool {
        matches!(
            self,
            TokenKind::Ident | TokenKind::Template | TokenKind::Script | TokenKind::Style
        )
    }
}

/// A lexer for Vue single-file component source.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    source: &'src str,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            source,
            finished: false,
        }
    }

    /// Returns the source string being lexed.
    pub fn source(&self) -> &'src str {
        self.source
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.inner.next() {
            Some(Ok(kind)) => {
                let span = self.inner.span();
                Some(Token {
                    kind,
                    span: Span::new(
                        TextSize::from(span.start as u32),
                        TextSize::from(span.end as u32),
                    ),
                })
            }
            Some(Err(())) => {
                let span = self.inner.span();
                Some(Token {
                    kind: TokenKind::Error,
                    span: Span::new(
                        TextSize::from(span.start as u32),
                        TextSize::from(span.end as u32),
                    ),
                })
            }
            None => {
                self.finished = true;
                let end = TextSize::from(self.source.len() as u32);
                Some(Token {
                    kind: TokenKind::Eof,
                    span: Span::new(end, end),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .map(|t| t.kind)
            .filter(|k| *k != TokenKind::Eof)
            .collect()
    }

    #[test]
    fn test_simple_tag() {
        let tokens = tokenize("<div>");
        assert_eq!(
            tokens,
            vec![TokenKind::LAngle, TokenKind::Ident, TokenKind::RAngle]
        );
    }

    #[test]
    fn test_self_closing_tag() {
        let tokens = tokenize("<br/>");
        assert_eq!(
            tokens,
            vec![TokenKind::LAngle, TokenKind::Ident, TokenKind::SlashRAngle]
        );
    }

    #[test]
    fn test_closing_tag() {
        let tokens = tokenize("</div>");
        assert_eq!(
            tokens,
            vec![TokenKind::LAngleSlash, TokenKind::Ident, TokenKind::RAngle]
        );
    }

    #[test]
    fn test_directive_name_is_single_ident() {
        let tokens = tokenize("v-if");
        assert_eq!(tokens, vec![TokenKind::Ident]);
    }

    #[test]
    fn test_directive_with_argument() {
        let tokens = tokenize("v-on:click");
        assert_eq!(
            tokens,
            vec![TokenKind::Ident, TokenKind::Colon, TokenKind::Ident]
        );
    }

    #[test]
    fn test_interpolation() {
        let tokens = tokenize("{{name}}");
        assert_eq!(
            tokens,
            vec![TokenKind::LMustache, TokenKind::Ident, TokenKind::RMustache]
        );
    }

    #[test]
    fn test_single_braces_are_text() {
        let tokens = tokenize("{ }");
        assert_eq!(tokens, vec![TokenKind::Text, TokenKind::Text]);
    }

    #[test]
    fn test_section_keywords() {
        let tokens = tokenize("<template><script><style>");
        assert_eq!(
            tokens,
            vec![
                TokenKind::LAngle,
                TokenKind::Template,
                TokenKind::RAngle,
                TokenKind::LAngle,
                TokenKind::Script,
                TokenKind::RAngle,
                TokenKind::LAngle,
                TokenKind::Style,
                TokenKind::RAngle,
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_lexes_as_ident() {
        // "templates" is longer than the `template` keyword, so the
        // identifier rule wins.
        let tokens = tokenize("templates");
        assert_eq!(tokens, vec![TokenKind::Ident]);
    }

    #[test]
    fn test_quoted_attribute() {
        let tokens = tokenize("class=\"title\"");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Ident,
                TokenKind::Eq,
                TokenKind::DoubleQuote,
                TokenKind::Ident,
                TokenKind::DoubleQuote,
            ]
        );
    }

    #[test]
    fn test_newlines() {
        let tokens = tokenize("<div\n  id=\"a\"\n>");
        assert_eq!(
            tokens,
            vec![
                TokenKind::LAngle,
                TokenKind::Ident,
                TokenKind::Newline,
                TokenKind::Ident,
                TokenKind::Eq,
                TokenKind::DoubleQuote,
                TokenKind::Ident,
                TokenKind::DoubleQuote,
                TokenKind::Newline,
                TokenKind::RAngle,
            ]
        );
    }
}
