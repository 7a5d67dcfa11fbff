//! Diagnostics for kinds header parsing.
//!
//! Every error carries the header text and a byte span so `miette` can render the offending line.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Byte range in the header text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::from((span.start, span.len()))
    }
}

/// What went wrong while reading the header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderErrorKind {
    #[error("no `enum {0}` declaration found")]
    MissingEnum(String),

    #[error("`enum {0}` body is not terminated")]
    UnterminatedEnum(String),

    #[error("block comment is not terminated")]
    UnterminatedComment,

    #[error("string or character literal is not terminated")]
    UnterminatedLiteral,

    #[error("`#if` block is not terminated")]
    UnterminatedConditional,

    #[error("`#{0}` without a matching `#if`")]
    UnbalancedConditional(String),

    #[error("expected {expected}, found {found}")]
    Unexpected { expected: String, found: String },
}

/// A header parse failure with source context.
#[derive(Debug, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic(code(kindgen::header))]
pub struct HeaderError {
    pub kind: HeaderErrorKind,
    #[source_code]
    src: NamedSource<String>,
    #[label("here")]
    span: SourceSpan,
    #[help]
    help: Option<String>,
}

impl HeaderError {
    pub fn new(kind: HeaderErrorKind, source: &str, source_name: &str, span: Span) -> Self {
        let help = match &kind {
            HeaderErrorKind::MissingEnum(name) => Some(format!(
                "the header must declare the kinds as `enum {name} {{ ... }};`"
            )),
            HeaderErrorKind::UnterminatedConditional => Some("add the matching `#endif`".to_string()),
            _ => None,
        };
        Self {
            kind,
            src: NamedSource::new(source_name, source.to_string()),
            span: span.into(),
            help,
        }
    }

    /// Byte offset of the labelled location.
    pub fn offset(&self) -> usize {
        self.span.offset()
    }
}
