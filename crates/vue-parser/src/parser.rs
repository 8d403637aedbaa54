//! Recursive descent parser for Vue 2 single-file components.

use crate::ast::*;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::span::Span;
use crate::{ParseOptions, ParseResult};
use smol_str::SmolStr;
use text_size::TextSize;

/// HTML void elements that are self-closing and should not have closing tags.
const HTML_VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Returns true if the given element name is an HTML void element.
fn is_void_element(name: &str) -> bool {
    HTML_VOID_ELEMENTS.contains(&name.to_lowercase().as_str())
}

/// The single-file component parser.
pub struct Parser<'src> {
    /// The source being parsed.
    source: &'src str,
    /// The token stream.
    tokens: Vec<Token>,
    /// Current position in the token stream.
    pos: usize,
    /// Parse errors collected during parsing.
    errors: Vec<ParseError>,
    /// Parser options.
    #[allow(dead_code)]
    options: ParseOptions,
    /// EOF token for when we're past the end.
    eof_token: Token,
}

impl<'src> Parser<'src> {
    /// Creates a new parser.
    pub fn new(source: &'src str, options: ParseOptions) -> Self {
        let tokens: Vec<Token> = Lexer::new(source).collect();
        let eof_token = Token {
            kind: TokenKind::Eof,
            span: Span::empty(TextSize::from(source.len() as u32)),
        };
        Self {
            source,
            tokens,
            pos: 0,
            errors: Vec::new(),
            options,
            eof_token,
        }
    }

    /// Parses the source into a Vue document.
    pub fn parse(mut self) -> ParseResult {
        let document = self.parse_document();
        ParseResult {
            document,
            errors: self.errors,
        }
    }

    // === Token helpers ===

    /// Returns the current token.
    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof_token)
    }

    /// Returns the current token kind.
    fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Returns the text of the current token.
    fn current_text(&self) -> &str {
        let span = self.current().span;
        &self.source[u32::from(span.start) as usize..u32::from(span.end) as usize]
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Checks if the current token matches the given kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Advances if the current token matches, returns true if matched.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects the current token to be the given kind, reports error if not.
    fn expect(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            self.error(ParseErrorKind::UnexpectedToken {
                expected: kind.name().to_string(),
                found: self.current_kind().name().to_string(),
            });
            false
        }
    }

    /// Reports an error at the current position.
    fn error(&mut self, kind: ParseErrorKind) {
        self.errors.push(ParseError::new(kind, self.current().span));
    }

    /// Skips newline tokens (inline whitespace is skipped by the lexer).
    fn skip_whitespace(&mut self) {
        while self.check(TokenKind::Newline) {
            self.advance();
        }
    }

    /// Returns the end offset of the previously consumed token.
    fn previous_end(&self) -> TextSize {
        self.tokens
            .get(self.pos.saturating_sub(1))
            .map(|t| t.span.end)
            .unwrap_or_else(|| TextSize::from(0))
    }

    /// Checks whether the source at the current token starts with `s`.
    fn check_source(&self, s: &str) -> bool {
        let offset = u32::from(self.current().span.start) as usize;
        self.source[offset..].starts_with(s)
    }

    /// Reads raw text until the nearest of the given delimiters, returning
    /// the text and its span. The delimiters themselves are not consumed.
    fn read_until(&mut self, delimiters: &[&str]) -> (String, Span) {
        let start = self.current().span.start;
        let start_offset = u32::from(start) as usize;

        let remaining = &self.source[start_offset..];
        let end_pos = delimiters
            .iter()
            .filter_map(|d| remaining.find(d))
            .min()
            .unwrap_or(remaining.len());

        let text = remaining[..end_pos].to_string();
        let end = TextSize::from((start_offset + end_pos) as u32);

        // Advance past the tokens we consumed
        while self.current().span.start < end && !self.check(TokenKind::Eof) {
            self.advance();
        }

        (text, Span::new(start, end))
    }

    /// Reads an interpolation expression until `}}`, skipping string
    /// literals so a `}}` inside quotes does not terminate the scan.
    /// Returns `None` (after consuming the rest of the input) when no
    /// closing mustache exists.
    fn read_interpolation_expression(&mut self) -> Option<(String, Span)> {
        let start = self.current().span.start;
        let start_offset = u32::from(start) as usize;
        let bytes = self.source.as_bytes();

        let mut in_string: Option<u8> = None;
        let mut i = start_offset;
        let mut end: Option<usize> = None;

        while i < bytes.len() {
            let c = bytes[i];
            if c == b'\\' {
                i += 2;
                continue;
            }
            match in_string {
                Some(q) => {
                    if c == q {
                        in_string = None;
                    }
                }
                None => {
                    if c == b'"' || c == b'\'' || c == b'`' {
                        in_string = Some(c);
                    } else if c == b'}' && bytes.get(i + 1) == Some(&b'}') {
                        end = Some(i);
                        break;
                    }
                }
            }
            i += 1;
        }

        let end = match end {
            Some(end) => end,
            None => {
                self.error(ParseErrorKind::UnterminatedInterpolation);
                self.pos = self.tokens.len();
                return None;
            }
        };

        let text = self.source[start_offset..end].to_string();
        let end = TextSize::from(end as u32);
        while self.current().span.start < end && !self.check(TokenKind::Eof) {
            self.advance();
        }

        Some((text, Span::new(start, end)))
    }

    // === Document structure ===

    fn parse_document(&mut self) -> VueDocument {
        let mut doc = VueDocument::default();

        while !self.check(TokenKind::Eof) {
            self.skip_whitespace();

            if self.check(TokenKind::Eof) {
                break;
            }

            if self.check(TokenKind::LAngle) {
                match self.peek_tag_name() {
                    "template" => {
                        if let Some(template) = self.parse_template_block() {
                            doc.template = Some(template);
                        }
                        continue;
                    }
                    "script" => {
                        if let Some(script) = self.parse_script_block() {
                            doc.script = Some(script);
                        }
                        continue;
                    }
                    "style" => {
                        if let Some(style) = self.parse_style_block() {
                            doc.style = Some(style);
                        }
                        continue;
                    }
                    _ => {}
                }
            }

            // Content outside the three sections has no meaning in a
            // single-file component; skip it.
            self.advance();
        }

        doc.span = Span::new(TextSize::from(0), TextSize::from(self.source.len() as u32));
        doc
    }

    /// Peeks at the tag name following a `<`.
    fn peek_tag_name(&self) -> &str {
        let mut peek_pos = self.pos + 1;

        while peek_pos < self.tokens.len() {
            let token = &self.tokens[peek_pos];
            if token.kind == TokenKind::Newline {
                peek_pos += 1;
            } else {
                break;
            }
        }

        if let Some(token) = self.tokens.get(peek_pos) {
            if token.kind.is_name() {
                return &self.source
                    [u32::from(token.span.start) as usize..u32::from(token.span.end) as usize];
            }
        }

        ""
    }

    /// Parses the `<template>` section into a markup fragment.
    fn parse_template_block(&mut self) -> Option<TemplateBlock> {
        let start = self.current().span.start;

        if !self.eat(TokenKind::LAngle) {
            return None;
        }
        if !self.current_kind().is_name() {
            return None;
        }
        self.advance();

        self.skip_section_attributes();
        if !self.eat(TokenKind::RAngle) {
            return None;
        }

        let content_start = self.current().span.start;
        let nodes = self.parse_children("template");
        let content_end = self.current().span.start;

        self.parse_closing_tag("template");
        let end = self.previous_end();

        let content_span = Span::new(content_start, content_end);
        Some(TemplateBlock {
            span: Span::new(start, end),
            content_span,
            fragment: Fragment {
                nodes,
                span: content_span,
            },
        })
    }

    /// Parses the `<script>` section, capturing its content raw.
    fn parse_script_block(&mut self) -> Option<ScriptBlock> {
        let start = self.current().span.start;

        if !self.eat(TokenKind::LAngle) {
            return None;
        }
        if !self.current_kind().is_name() {
            return None;
        }
        self.advance();

        self.skip_section_attributes();
        if !self.eat(TokenKind::RAngle) {
            return None;
        }

        let (content, content_span) = self.read_until(&["</script>"]);
        self.consume_section_close();
        let end = self.previous_end();

        Some(ScriptBlock {
            span: Span::new(start, end),
            content_span,
            content,
        })
    }

    /// Parses the `<style>` section, capturing its content raw.
    fn parse_style_block(&mut self) -> Option<StyleBlock> {
        let start = self.current().span.start;

        if !self.eat(TokenKind::LAngle) {
            return None;
        }
        if !self.current_kind().is_name() {
            return None;
        }
        self.advance();

        let scoped = self.skip_section_attributes();
        if !self.eat(TokenKind::RAngle) {
            return None;
        }

        let (content, content_span) = self.read_until(&["</style>"]);
        self.consume_section_close();
        let end = self.previous_end();

        Some(StyleBlock {
            span: Span::new(start, end),
            content_span,
            content,
            scoped,
        })
    }

    /// Skips the attributes of a section tag, returning whether a `scoped`
    /// attribute was present.
    fn skip_section_attributes(&mut self) -> bool {
        let mut scoped = false;

        loop {
            self.skip_whitespace();

            if self.check(TokenKind::RAngle)
                || self.check(TokenKind::SlashRAngle)
                || self.check(TokenKind::Eof)
            {
                break;
            }

            if self.current_kind().is_name() {
                if self.current_text() == "scoped" {
                    scoped = true;
                }
                self.advance();

                if self.eat(TokenKind::Eq) {
                    if self.eat(TokenKind::DoubleQuote) {
                        self.read_until(&["\""]);
                        self.eat(TokenKind::DoubleQuote);
                    } else if self.eat(TokenKind::SingleQuote) {
                        self.read_until(&["'"]);
                        self.eat(TokenKind::SingleQuote);
                    } else {
                        self.advance();
                    }
                }
            } else {
                self.advance();
            }
        }

        scoped
    }

    /// Consumes a `</script>` / `</style>` style closing tag.
    fn consume_section_close(&mut self) {
        if self.eat(TokenKind::LAngleSlash) {
            if self.current_kind().is_name() {
                self.advance();
            }
            self.eat(TokenKind::RAngle);
        }
    }

    // === Markup nodes ===

    /// Parses a single markup node.
    fn parse_template_node(&mut self) -> Option<TemplateNode> {
        match self.current_kind() {
            TokenKind::LAngle => {
                if self.check_source("<!--") {
                    self.parse_comment()
                } else {
                    self.parse_element()
                }
            }
            TokenKind::LMustache => self.parse_interpolation(),
            TokenKind::Eof => None,
            _ => self.parse_text(),
        }
    }

    /// Parses a comment `<!-- ... -->`.
    fn parse_comment(&mut self) -> Option<TemplateNode> {
        let start = self.current().span.start;
        let start_offset = u32::from(start) as usize;

        let (value, end_offset) = match self.source[start_offset..].find("-->") {
            Some(rel) => (
                self.source[start_offset + 4..start_offset + rel.max(4)].to_string(),
                start_offset + rel + 3,
            ),
            None => {
                self.error(ParseErrorKind::UnexpectedEof {
                    expected: "'-->'".to_string(),
                });
                (
                    self.source[start_offset + 4..].to_string(),
                    self.source.len(),
                )
            }
        };

        let end = TextSize::from(end_offset as u32);
        while self.current().span.start < end && !self.check(TokenKind::Eof) {
            self.advance();
        }

        Some(TemplateNode::Comment(Comment {
            span: Span::new(start, end),
            value,
        }))
    }

    /// Parses an `{{ expr }}` interpolation.
    fn parse_interpolation(&mut self) -> Option<TemplateNode> {
        let start = self.current().span.start;

        if !self.eat(TokenKind::LMustache) {
            return None;
        }

        let (raw, expression_span) = self.read_interpolation_expression()?;
        self.eat(TokenKind::RMustache);
        let end = self.previous_end();

        Some(TemplateNode::Interpolation(Interpolation {
            span: Span::new(start, end),
            expression_span,
            expression: raw.trim().to_string(),
        }))
    }

    /// Parses a text run until the next tag or interpolation.
    fn parse_text(&mut self) -> Option<TemplateNode> {
        let (value, span) = self.read_until(&["<", "{{"]);

        if value.is_empty() {
            // The current token sits exactly on a delimiter we could not
            // parse; skip it to make progress.
            self.advance();
            return None;
        }

        let is_whitespace = value.chars().all(|c| c.is_whitespace());
        Some(TemplateNode::Text(Text {
            span,
            value,
            is_whitespace,
        }))
    }

    /// Parses an element.
    fn parse_element(&mut self) -> Option<TemplateNode> {
        let start = self.current().span.start;

        if !self.eat(TokenKind::LAngle) {
            return None;
        }

        if !self.current_kind().is_name() {
            self.error(ParseErrorKind::UnexpectedToken {
                expected: "tag name".to_string(),
                found: self.current_kind().name().to_string(),
            });
            return None;
        }

        let name = SmolStr::new(self.current_text());
        self.advance();

        let attributes = self.parse_attributes();

        let explicit_self_closing = self.eat(TokenKind::SlashRAngle);
        if !explicit_self_closing {
            self.expect(TokenKind::RAngle);
        }
        let self_closing = explicit_self_closing || is_void_element(&name);

        let children = if self_closing {
            Vec::new()
        } else {
            self.parse_children(&name)
        };

        if !self_closing {
            self.parse_closing_tag(&name);
        }

        let end = self.previous_end();

        Some(TemplateNode::Element(Element {
            span: Span::new(start, end),
            name,
            attributes,
            children,
            self_closing,
        }))
    }

    /// Parses element attributes.
    fn parse_attributes(&mut self) -> Vec<Attribute> {
        let mut attributes = Vec::new();

        loop {
            self.skip_whitespace();

            if self.check(TokenKind::RAngle)
                || self.check(TokenKind::SlashRAngle)
                || self.check(TokenKind::Eof)
            {
                break;
            }

            if let Some(attr) = self.parse_attribute() {
                attributes.push(attr);
            } else {
                break;
            }
        }

        attributes
    }

    /// Parses a single attribute, either a `v-*` directive or a plain one.
    fn parse_attribute(&mut self) -> Option<Attribute> {
        let start = self.current().span.start;

        if !self.current_kind().is_name() {
            return None;
        }

        let name = self.current_text().to_string();
        let mut prev_end = self.current().span.end;
        self.advance();

        if let Some(kind) = DirectiveKind::from_name(&name) {
            // Directive argument: `v-on:click`, including `.modifier`
            // suffixes, built from adjacent tokens.
            let mut argument: Option<SmolStr> = None;
            if self.check(TokenKind::Colon) && self.current().span.start == prev_end {
                prev_end = self.current().span.end;
                self.advance();

                let mut arg = String::new();
                while self.current().span.start == prev_end
                    && matches!(
                        self.current_kind(),
                        TokenKind::Ident
                            | TokenKind::Number
                            | TokenKind::Text
                            | TokenKind::Template
                            | TokenKind::Script
                            | TokenKind::Style
                    )
                {
                    arg.push_str(self.current_text());
                    prev_end = self.current().span.end;
                    self.advance();
                }

                if arg.is_empty() {
                    self.error(ParseErrorKind::InvalidDirective {
                        message: format!("`{}:` argument cannot be empty", kind.as_str()),
                    });
                } else {
                    argument = Some(SmolStr::new(arg));
                }
            }

            let expression = if self.eat(TokenKind::Eq) {
                self.parse_quoted_value()
            } else {
                None
            };

            let end = self.previous_end();
            return Some(Attribute::Directive(Directive {
                span: Span::new(start, end),
                kind,
                argument,
                expression,
            }));
        }

        let value = match self.eat(TokenKind::Eq) {
            true => match self.parse_quoted_value() {
                Some(text) => AttributeValue::Text(text),
                None => AttributeValue::Empty,
            },
            false => AttributeValue::Empty,
        };

        let end = self.previous_end();
        Some(Attribute::Normal(NormalAttribute {
            span: Span::new(start, end),
            name: SmolStr::new(&name),
            value,
        }))
    }

    /// Parses a quoted (or bare single-token) attribute value.
    fn parse_quoted_value(&mut self) -> Option<TextValue> {
        if self.eat(TokenKind::DoubleQuote) {
            let (value, span) = self.read_until(&["\""]);
            self.eat(TokenKind::DoubleQuote);
            return Some(TextValue { span, value });
        }
        if self.eat(TokenKind::SingleQuote) {
            let (value, span) = self.read_until(&["'"]);
            self.eat(TokenKind::SingleQuote);
            return Some(TextValue { span, value });
        }
        if self.check(TokenKind::Ident) || self.check(TokenKind::Number) {
            let span = self.current().span;
            let value = self.current_text().to_string();
            self.advance();
            return Some(TextValue { span, value });
        }
        None
    }

    /// Parses child nodes until the parent's closing tag.
    fn parse_children(&mut self, parent_tag: &str) -> Vec<TemplateNode> {
        let mut children = Vec::new();
        let close_tag = format!("</{}", parent_tag);

        while !self.check(TokenKind::Eof) {
            if self.check(TokenKind::LAngleSlash) {
                break;
            }

            let current_offset = u32::from(self.current().span.start) as usize;
            if self.source[current_offset..].starts_with(&close_tag) {
                break;
            }

            if let Some(node) = self.parse_template_node() {
                children.push(node);
            } else if !self.check(TokenKind::Eof) && !self.check(TokenKind::LAngleSlash) {
                self.advance();
            } else {
                break;
            }
        }

        children
    }

    /// Parses a closing tag.
    fn parse_closing_tag(&mut self, expected_name: &str) {
        if !self.eat(TokenKind::LAngleSlash) {
            self.error(ParseErrorKind::UnclosedTag {
                tag_name: expected_name.to_string(),
            });
            return;
        }

        let found_name = if self.current_kind().is_name() {
            let name = self.current_text().to_string();
            self.advance();
            name
        } else {
            String::new()
        };

        if found_name != expected_name {
            self.error(ParseErrorKind::MismatchedClosingTag {
                expected: expected_name.to_string(),
                found: found_name,
            });
        }

        self.eat(TokenKind::RAngle);
    }
}
