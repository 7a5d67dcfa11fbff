//! Token types for the kinds header lexer.

use crate::diagnostics::Span;

/// Kind of token produced by the lexer.
///
/// ## Notes
/// - Comments, whitespace and preprocessor lines never become tokens.
/// - Anything the enum parser does not care about (operators, string literals, ...) is kept only so the parser can
///   report what it found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Ident(String),
    /// Integer literal with its value, when it fits an `i64`.
    Int(Option<i64>),
    /// String or character literal (contents are not kept).
    Literal,
    Punct(char),
    Eof,
}

impl TokenKind {
    /// Short description for "expected X, found Y" diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Ident(name) => format!("`{name}`"),
            TokenKind::Int(Some(value)) => format!("`{value}`"),
            TokenKind::Int(None) => "integer literal".to_string(),
            TokenKind::Literal => "literal".to_string(),
            TokenKind::Punct(c) => format!("`{c}`"),
            TokenKind::Eof => "end of file".to_string(),
        }
    }
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn is_ident(&self, name: &str) -> bool {
        matches!(&self.kind, TokenKind::Ident(s) if s == name)
    }

    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct(c)
    }
}
