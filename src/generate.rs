//! Header → kind table → Rust source, in one pass.
//!
//! [`Generator`] wires the kind source (`kindgen_syntax`), code assignment (`kindgen_core`) and the emitter
//! ([`crate::backend`]). It performs no IO: callers hand it header text and decide what to do with the result.

use kindgen_core::{KindTable, MalformedInputKind};
use kindgen_syntax::{HeaderError, KindSource, KindsParser};
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::backend::{EmitConfig, EmitError, EnumEmitter};

/// Any failure that aborts generation. Nothing is written when one of these occurs.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Header(#[from] HeaderError),

    #[error("malformed kinds: {kind}")]
    #[diagnostic(
        code(kindgen::malformed_kind),
        help("fix the kinds enum in the header; every kind needs a unique, valid identifier")
    )]
    Malformed {
        kind: MalformedInputKind,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
    },

    #[error("code generation failed: {0}")]
    #[diagnostic(code(kindgen::emit))]
    Emit(#[from] EmitError),
}

/// Result of a successful generation run.
#[derive(Debug, Clone)]
pub struct Generated {
    pub table: KindTable,
    pub code: String,
}

/// Reads a kinds header and renders the Rust enumeration.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    parser: KindsParser,
    emitter: EnumEmitter,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parser(mut self, parser: KindsParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_config(mut self, config: EmitConfig) -> Self {
        self.emitter = EnumEmitter::new(config);
        self
    }

    /// Generate the enumeration for `header` (named `source_name` in diagnostics and in the file header).
    #[tracing::instrument(skip_all, fields(source_name = source_name))]
    pub fn generate(&self, header: &str, source_name: &str) -> Result<Generated, GenerateError> {
        let source = self.parser.parse(header, source_name)?;
        let table = KindTable::build(source.decls(), self.emitter.config().start_code).map_err(|kind| {
            GenerateError::Malformed {
                span: source.locate(&kind).map(SourceSpan::from),
                src: NamedSource::new(source_name, header.to_string()),
                kind,
            }
        })?;
        tracing::debug!(kinds = table.len(), bounds = ?table.bounds(), "assigned kind codes");

        warn_on_declared_values(&source, &table);

        let code = self.emitter.emit(&table, source_name)?;
        Ok(Generated { table, code })
    }
}

/// Generate with default settings.
pub fn generate(header: &str, source_name: &str) -> Result<Generated, GenerateError> {
    Generator::new().generate(header, source_name)
}

/// Log header initializers that disagree with the position-derived code.
///
/// Codes are never taken from the header, so a mismatch means the C++ enum and the generated bindings disagree.
fn warn_on_declared_values(source: &KindSource, table: &KindTable) {
    for (entry, record) in source.iter().zip(table.iter()) {
        if let Some(declared) = entry.declared_value {
            if declared != i64::from(record.code) {
                tracing::warn!(
                    kind = %entry.identifier,
                    declared,
                    assigned = record.code,
                    "header initializer disagrees with the assigned code"
                );
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_concrete_scenario() {
        let generated = generate("enum Kind { AND, OR, NOT };", "logic.h").unwrap();
        assert_eq!(generated.table.code_of("AND"), Some(-2));
        assert_eq!(generated.table.code_of("OR"), Some(-1));
        assert_eq!(generated.table.code_of("NOT"), Some(0));
        assert!(generated.code.contains("And = -2,"));
    }

    #[test]
    fn test_generate_rejects_duplicate_kinds_as_malformed() {
        let err = generate("enum Kind { AND, AND };", "dup.h").unwrap_err();
        match err {
            GenerateError::Malformed { kind, span, .. } => {
                assert_eq!(
                    kind,
                    MalformedInputKind::DuplicateIdentifier {
                        identifier: "AND".to_string(),
                        first: 0,
                        second: 1,
                    }
                );
                assert_eq!(span, Some(SourceSpan::from((17, 3))));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_generate_rejects_colliding_member_names() {
        let err = generate("enum Kind { A_B, A__B };", "dup.h").unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Malformed {
                kind: MalformedInputKind::DuplicateName { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_generate_rejects_keyword_member_names() {
        let err = generate("enum Kind { SELF };", "kw.h").unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Malformed {
                kind: MalformedInputKind::ReservedName { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_if_zero_kinds_get_no_code() {
        let header = "enum Kind {\n  INTERNAL_KIND = -2,\n  UNDEFINED_KIND = -1,\n  NULL_EXPR,\n#if 0\n  BUILTIN,\n#endif\n  AND,\n};";
        let generated = generate(header, "kinds.h").unwrap();
        assert_eq!(generated.table.code_of("BUILTIN"), None);
        assert_eq!(generated.table.code_of("AND"), Some(1));
    }

    #[test]
    fn test_custom_start_code() {
        let generated = Generator::new()
            .with_config(EmitConfig::new().with_start_code(0))
            .generate("enum Kind { AND, OR };", "k.h")
            .unwrap();
        assert_eq!(generated.table.bounds(), Some((0, 1)));
    }

    #[test]
    fn test_custom_header_enum() {
        let generated = Generator::new()
            .with_parser(KindsParser::new().with_enum_name("SortKind"))
            .with_config(EmitConfig::new().with_enum_name("SortKind").with_error_name("OutOfRangeSortKind"))
            .generate("enum SortKind { BOOLEAN_SORT };", "sorts.h")
            .unwrap();
        assert!(generated.code.contains("pub enum SortKind"));
        assert!(generated.code.contains("BooleanSort = -2,"));
    }
}
