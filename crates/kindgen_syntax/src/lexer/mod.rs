//! Lexer for the kinds header.
//!
//! Handles just enough C++ to find and read the kinds enum:
//! - Identifiers and integer literals (decimal, octal, hex, with `u`/`l` suffixes)
//! - Line comments, block comments and doc comments (skipped)
//! - Preprocessor lines, including `\` continuations (skipped)
//! - Conditional groups (`#if`/`#ifdef`/`#ifndef`/`#elif`/`#else`/`#endif`): tokens in inactive branches are dropped.
//!   Only integer conditions (`#if 0`, `#if 1`) are evaluated; any other condition is taken as true.
//! - String and character literals (skipped as a single token so braces inside them are ignored)
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::diagnostics::{HeaderErrorKind, Span};
use kindgen_core::ident::{is_ident_continue, is_ident_start};

/// First problem found while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub kind: HeaderErrorKind,
    pub span: Span,
}

/// One open `#if` group.
#[derive(Debug, Clone, Copy)]
struct Conditional {
    /// Whether the enclosing region is active
    parent_active: bool,
    /// Whether some branch of this group has already been taken
    taken: bool,
    /// Whether the current branch is active
    active: bool,
    /// The opening directive
    span: Span,
}

/// Lexer for kinds header text.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    /// Only whitespace seen since the last newline (a `#` here starts a directive)
    at_line_start: bool,
    conditionals: Vec<Conditional>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            at_line_start: true,
            conditionals: Vec::new(),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire header. The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }

        if let Some(open) = self.conditionals.last() {
            return Err(LexError {
                kind: HeaderErrorKind::UnterminatedConditional,
                span: open.span,
            });
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(self.current_pos, self.current_pos),
        ));
        Ok(self.tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn is_active(&self) -> bool {
        self.conditionals.last().is_none_or(|c| c.active)
    }

    /// Record a token, unless it sits in an inactive conditional branch.
    fn add_token(&mut self, kind: TokenKind, start: usize) {
        if self.is_active() {
            self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Result<(), LexError> {
        let start = self.current_pos;
        let Some(c) = self.advance() else {
            return Ok(());
        };

        match c {
            '\n' => {
                self.at_line_start = true;
                return Ok(());
            }
            c if c.is_whitespace() => return Ok(()),
            '#' if self.at_line_start => {
                self.scan_directive(start)?;
                return Ok(());
            }
            '/' if self.peek() == Some('/') => {
                self.skip_line();
                return Ok(());
            }
            '/' if self.peek() == Some('*') => {
                self.skip_block_comment(start)?;
                return Ok(());
            }
            '"' | '\'' => self.scan_literal(start, c)?,
            c if is_ident_start(c) => self.scan_identifier(start),
            c if c.is_ascii_digit() => self.scan_number(start),
            other => self.add_token(TokenKind::Punct(other), start),
        }

        self.at_line_start = false;
        Ok(())
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Read a preprocessor directive, following `\` line continuations, and apply it if it is a conditional.
    fn scan_directive(&mut self, start: usize) -> Result<(), LexError> {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
            if c == '\\' && self.peek() == Some('\n') {
                self.advance();
                text.push(' ');
            } else {
                text.push(c);
            }
        }

        let text = text.trim_start();
        let name_len = text.find(|c: char| !c.is_ascii_alphabetic()).unwrap_or(text.len());
        let (name, rest) = text.split_at(name_len);
        self.apply_directive(name, rest, Span::new(start, self.current_pos))
    }

    fn apply_directive(&mut self, name: &str, condition: &str, span: Span) -> Result<(), LexError> {
        let unbalanced = || LexError {
            kind: HeaderErrorKind::UnbalancedConditional(name.to_string()),
            span,
        };

        match name {
            "if" | "ifdef" | "ifndef" => {
                let holds = name != "if" || evaluate_condition(condition);
                let parent_active = self.is_active();
                self.conditionals.push(Conditional {
                    parent_active,
                    taken: holds,
                    active: parent_active && holds,
                    span,
                });
            }
            "elif" | "elifdef" | "elifndef" => {
                let holds = name != "elif" || evaluate_condition(condition);
                let group = self.conditionals.last_mut().ok_or_else(unbalanced)?;
                group.active = group.parent_active && !group.taken && holds;
                group.taken |= holds;
            }
            "else" => {
                let group = self.conditionals.last_mut().ok_or_else(unbalanced)?;
                group.active = group.parent_active && !group.taken;
                group.taken = true;
            }
            "endif" => {
                self.conditionals.pop().ok_or_else(unbalanced)?;
            }
            _ => {}
        }
        Ok(())
    }

    fn skip_block_comment(&mut self, start: usize) -> Result<(), LexError> {
        self.advance(); // '*'
        while let Some(c) = self.advance() {
            if c == '*' && self.peek() == Some('/') {
                self.advance();
                return Ok(());
            }
        }
        Err(LexError {
            kind: HeaderErrorKind::UnterminatedComment,
            span: Span::new(start, (start + 2).min(self.source.len())),
        })
    }

    fn scan_literal(&mut self, start: usize, quote: char) -> Result<(), LexError> {
        while let Some(c) = self.advance() {
            match c {
                '\\' => {
                    self.advance();
                }
                '\n' => break,
                c if c == quote => {
                    self.add_token(TokenKind::Literal, start);
                    return Ok(());
                }
                _ => {}
            }
        }
        if !self.is_active() {
            // Inactive branches often hold prose such as `don't`.
            return Ok(());
        }
        Err(LexError {
            kind: HeaderErrorKind::UnterminatedLiteral,
            span: Span::new(start, start + quote.len_utf8()),
        })
    }

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }
        let spelling = &self.source[start..self.current_pos];
        self.add_token(TokenKind::Ident(spelling.to_string()), start);
    }

    fn scan_number(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            // `'` is the C++14 digit separator.
            if c.is_ascii_alphanumeric() || (c == '\'' && self.peek_next().is_some_and(|n| n.is_ascii_hexdigit())) {
                self.advance();
            } else {
                break;
            }
        }
        let spelling = &self.source[start..self.current_pos];
        self.add_token(TokenKind::Int(parse_int(spelling)), start);
    }
}

/// Evaluate an `#if`/`#elif` condition. Integer literals are evaluated; anything else is taken as true.
fn evaluate_condition(condition: &str) -> bool {
    let condition = match condition.find("//").into_iter().chain(condition.find("/*")).min() {
        Some(comment) => &condition[..comment],
        None => condition,
    };
    match condition.trim() {
        "false" => false,
        "true" => true,
        other => parse_int(other).is_none_or(|value| value != 0),
    }
}

/// Parse a C++ integer literal spelling, ignoring `u`/`l` suffixes and digit separators.
fn parse_int(spelling: &str) -> Option<i64> {
    let cleaned: String = spelling.chars().filter(|c| *c != '\'').collect();
    let digits = cleaned.trim_end_matches(['u', 'U', 'l', 'L']);

    if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()
    } else if let Some(bin) = digits.strip_prefix("0b").or_else(|| digits.strip_prefix("0B")) {
        i64::from_str_radix(bin, 2).ok()
    } else if digits.len() > 1 && digits.starts_with('0') {
        i64::from_str_radix(&digits[1..], 8).ok()
    } else {
        digits.parse().ok()
    }
}

/// Convenience function to lex a header string.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
