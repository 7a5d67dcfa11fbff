//! Parser for the kinds enum of an API header.
//!
//! The header is tokenized first; the parser then looks for the first `enum` whose name (the last identifier before
//! `:` or `{`) matches the configured enum name and reads its enumerators in order.
//!
//! ## Notes
//! - Export macros and underlying types are accepted: `enum CVC4_EXPORT Kind : int32_t { ... };`.
//! - Initializers are recorded as declared values when they are a plain (optionally signed) integer. Any other
//!   initializer expression is skipped and recorded as `None`.
//! - Enumerators are returned as written, duplicates included. Uniqueness is checked when the kind table is built.

use crate::diagnostics::{HeaderError, HeaderErrorKind, Span};
use crate::lexer::{self, Token, TokenKind};
use crate::naming::member_name;
use crate::source::{KindEntry, KindSource};

/// Default name of the kinds enum.
pub const DEFAULT_ENUM_NAME: &str = "Kind";

/// Reads the kinds enum out of header text.
#[derive(Debug, Clone)]
pub struct KindsParser {
    enum_name: String,
}

impl Default for KindsParser {
    fn default() -> Self {
        Self {
            enum_name: DEFAULT_ENUM_NAME.to_string(),
        }
    }
}

impl KindsParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the enum with this name instead of `Kind`.
    pub fn with_enum_name(mut self, name: impl Into<String>) -> Self {
        self.enum_name = name.into();
        self
    }

    pub fn enum_name(&self) -> &str {
        &self.enum_name
    }

    /// Parse `source` (named `source_name` in diagnostics) into the ordered kind source.
    #[tracing::instrument(skip_all, fields(source_name = source_name, source_len = source.len()))]
    pub fn parse(&self, source: &str, source_name: &str) -> Result<KindSource, HeaderError> {
        let error = |kind: HeaderErrorKind, span: Span| HeaderError::new(kind, source, source_name, span);

        let tokens = lexer::lex(source).map_err(|e| error(e.kind, e.span))?;
        let mut cursor = Cursor::new(&tokens);

        let Some(open) = cursor.find_enum_body(&self.enum_name) else {
            return Err(error(HeaderErrorKind::MissingEnum(self.enum_name.clone()), Span::default()));
        };
        let entries = cursor
            .enum_body(open, &self.enum_name)
            .map_err(|(kind, span)| error(kind, span))?;

        tracing::debug!(kinds = entries.len(), "read kinds enum");
        Ok(KindSource::new(source_name, entries))
    }
}

type ParseResult<T> = Result<T, (HeaderErrorKind, Span)>;

struct Cursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Cursor<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> &'t Token {
        // The lexer always terminates the stream with `Eof`.
        let tokens: &'t [Token] = self.tokens;
        let last = tokens.len().saturating_sub(1);
        &tokens[self.pos.min(last)]
    }

    fn advance(&mut self) -> &'t Token {
        let token = self.peek();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Move past the `{` of the named enum and return its span.
    fn find_enum_body(&mut self, enum_name: &str) -> Option<Span> {
        while self.peek().kind != TokenKind::Eof {
            if !self.advance().is_ident("enum") {
                continue;
            }

            let mut name: Option<&str> = None;
            let mut named = true;
            loop {
                let token = self.peek();
                match &token.kind {
                    TokenKind::Ident(ident) if named => {
                        name = Some(ident.as_str());
                        self.advance();
                    }
                    TokenKind::Punct(':') => {
                        // Underlying type follows; the name is settled.
                        named = false;
                        self.advance();
                    }
                    TokenKind::Punct('{') => {
                        self.advance();
                        if name == Some(enum_name) {
                            return Some(token.span);
                        }
                        break;
                    }
                    TokenKind::Ident(_) => {
                        self.advance();
                    }
                    _ => break,
                }
            }
        }
        None
    }

    /// Read enumerators up to the closing `}`.
    fn enum_body(&mut self, open: Span, enum_name: &str) -> ParseResult<Vec<KindEntry>> {
        let mut entries: Vec<KindEntry> = Vec::new();

        loop {
            let token = self.advance();
            let identifier = match &token.kind {
                TokenKind::Punct('}') => return Ok(entries),
                TokenKind::Ident(identifier) => identifier.clone(),
                TokenKind::Eof => return Err((HeaderErrorKind::UnterminatedEnum(enum_name.to_string()), open)),
                other => {
                    return Err((
                        HeaderErrorKind::Unexpected {
                            expected: "kind identifier or `}`".to_string(),
                            found: other.describe(),
                        },
                        token.span,
                    ));
                }
            };

            let declared_value = if self.peek().is_punct('=') {
                self.advance();
                self.initializer(open, enum_name)?
            } else {
                None
            };

            entries.push(KindEntry {
                name: member_name(&identifier),
                identifier,
                declared_value,
                span: token.span,
            });

            let separator = self.peek();
            match &separator.kind {
                TokenKind::Punct(',') => {
                    self.advance();
                }
                TokenKind::Punct('}') => {}
                TokenKind::Eof => return Err((HeaderErrorKind::UnterminatedEnum(enum_name.to_string()), open)),
                other => {
                    return Err((
                        HeaderErrorKind::Unexpected {
                            expected: "`,` or `}`".to_string(),
                            found: other.describe(),
                        },
                        separator.span,
                    ));
                }
            }
        }
    }

    /// Parse an initializer, leaving the cursor on the following `,` or `}`.
    fn initializer(&mut self, open: Span, enum_name: &str) -> ParseResult<Option<i64>> {
        let start = self.pos;
        let mut depth = 0usize;
        loop {
            let token = self.peek();
            match &token.kind {
                TokenKind::Punct(',') | TokenKind::Punct('}') if depth == 0 => break,
                TokenKind::Punct('(') | TokenKind::Punct('[') | TokenKind::Punct('{') => depth += 1,
                TokenKind::Punct(')') | TokenKind::Punct(']') | TokenKind::Punct('}') => {
                    depth = depth.saturating_sub(1)
                }
                TokenKind::Eof => return Err((HeaderErrorKind::UnterminatedEnum(enum_name.to_string()), open)),
                _ => {}
            }
            self.advance();
        }

        let tokens: &'t [Token] = self.tokens;
        let value = match &tokens[start..self.pos] {
            [Token { kind: TokenKind::Int(v), .. }] => *v,
            [sign, Token { kind: TokenKind::Int(v), .. }] if sign.is_punct('-') => v.and_then(i64::checked_neg),
            [sign, Token { kind: TokenKind::Int(v), .. }] if sign.is_punct('+') => *v,
            _ => None,
        };
        Ok(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================
