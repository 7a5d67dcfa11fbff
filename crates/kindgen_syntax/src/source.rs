//! The ordered kind source read from a header.

use kindgen_core::{KindDecl, MalformedInputKind};

use crate::diagnostics::Span;

/// One enumerator of the kinds enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindEntry {
    /// Identifier as spelled in the header (e.g. `NULL_EXPR`).
    pub identifier: String,
    /// Enum member name for generated bindings (e.g. `NullExpr`).
    pub name: String,
    /// Explicit `= value` initializer, if the header gives one. Never used as the code.
    pub declared_value: Option<i64>,
    /// Location of the identifier in the header.
    pub span: Span,
}

/// Kinds in declaration order. Order is load-bearing: it determines the codes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KindSource {
    source_name: String,
    entries: Vec<KindEntry>,
}

impl KindSource {
    pub fn new(source_name: impl Into<String>, entries: Vec<KindEntry>) -> Self {
        Self {
            source_name: source_name.into(),
            entries,
        }
    }

    /// Name of the header the kinds were read from, as given to the parser.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn entries(&self) -> &[KindEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KindEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifier → member name pairs, in order, ready for code assignment.
    pub fn decls(&self) -> impl Iterator<Item = KindDecl> + '_ {
        self.entries
            .iter()
            .map(|entry| KindDecl::new(entry.identifier.clone(), entry.name.clone()))
    }

    /// Header location of the enumerator a table error is about.
    ///
    /// Duplicates point at the later declaration. Code overflow concerns the whole enum and has no location.
    pub fn locate(&self, error: &MalformedInputKind) -> Option<Span> {
        let by_identifier = |identifier: &str| {
            self.entries
                .iter()
                .find(|entry| entry.identifier == identifier)
                .map(|entry| entry.span)
        };
        match error {
            MalformedInputKind::InvalidIdentifier { identifier }
            | MalformedInputKind::InvalidName { identifier, .. }
            | MalformedInputKind::ReservedName { identifier, .. } => by_identifier(identifier),
            MalformedInputKind::DuplicateIdentifier { second, .. } => self.entries.get(*second).map(|entry| entry.span),
            MalformedInputKind::DuplicateName { second, .. } => by_identifier(second),
            MalformedInputKind::CodeOverflow { .. } => None,
        }
    }
}
