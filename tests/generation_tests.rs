//! End-to-end tests: fixture headers through the whole generator.
//!
//! Run with: `cargo test --test generation_tests`
//! Review snapshot changes: `cargo insta review`

use std::fs;

use kindgen::{EmitConfig, GenerateError, Generator, KindsParser, MalformedInputKind};

/// Load a header from the fixture crate
fn load_header(name: &str) -> String {
    let path = format!("crates/kindgen_fixture/kinds/{}", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read fixture header: {}", path))
}

fn generate(name: &str) -> kindgen::Generated {
    kindgen::generate(&load_header(name), name).expect("generation failed")
}

#[test]
fn test_logic_header() {
    let generated = generate("logic_kinds.h");
    assert_eq!(generated.table.bounds(), Some((-2, 0)));

    let code = &generated.code;
    assert!(code.starts_with("// Generated by kindgen v"));
    assert!(code.lines().next().unwrap().ends_with("from logic_kinds.h. Do not edit."));
    assert!(code.contains("And = -2,"));
    assert!(code.contains("Or = -1,"));
    assert!(code.contains("Not = 0,"));
}

#[test]
fn test_api_header_codes() {
    let generated = generate("api_kinds.h");
    let table = &generated.table;

    assert_eq!(table.len(), 31);
    assert_eq!(table.code_of("INTERNAL_KIND"), Some(-2));
    assert_eq!(table.code_of("UNDEFINED_KIND"), Some(-1));
    assert_eq!(table.code_of("NULL_EXPR"), Some(0));
    assert_eq!(table.code_of("LAST_KIND"), Some(28));
    assert_eq!(table.code_of("SKOLEM"), None);

    assert!(generated.code.contains("LastKind = 28,"));
    assert!(generated.code.contains("pub const LAST_CODE: i32 = 28;"));
}

#[test]
fn test_api_header_output_is_valid_rust() {
    let generated = generate("api_kinds.h");
    let file: syn::File = syn::parse_str(&generated.code).expect("generated code does not parse");

    let kind = file
        .items
        .iter()
        .find_map(|item| match item {
            syn::Item::Enum(e) if e.ident == "Kind" => Some(e),
            _ => None,
        })
        .expect("no Kind enum in output");
    assert_eq!(kind.variants.len(), 31);
    assert!(kind.variants.iter().all(|v| v.discriminant.is_some()));
}

#[test]
fn test_empty_header() {
    let generated = generate("empty_kinds.h");
    assert!(generated.table.is_empty());
    assert_eq!(generated.table.bounds(), None);
    assert!(generated.code.contains("pub const ALL: [Self; 0] = [];"));
}

#[test]
fn test_generation_is_reproducible() {
    let header = load_header("api_kinds.h");
    let first = kindgen::generate(&header, "api_kinds.h").unwrap();
    let second = kindgen::generate(&header, "api_kinds.h").unwrap();
    assert_eq!(first.code, second.code);
}

#[test]
fn test_sort_kind_enum() {
    let header = "enum CVC4_EXPORT SortKind : int32_t { INTERNAL_SORT_KIND = -2, BOOLEAN_SORT, INTEGER_SORT };";
    let generated = Generator::new()
        .with_parser(KindsParser::new().with_enum_name("SortKind"))
        .with_config(
            EmitConfig::new()
                .with_enum_name("SortKind")
                .with_error_name("OutOfRangeSortKind"),
        )
        .generate(header, "sorts.h")
        .unwrap();
    assert!(generated.code.contains("pub struct OutOfRangeSortKind"));
    assert!(generated.code.contains("IntegerSort = 0,"));
}

// ============================================================================
// Error messages
// ============================================================================

#[test]
fn test_duplicate_kind_error() {
    let err = kindgen::generate("enum Kind { AND, OR, AND };", "dup.h").unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Malformed {
            kind: MalformedInputKind::DuplicateIdentifier { first: 0, second: 2, .. },
            ..
        }
    ));
    insta::assert_snapshot!(err.to_string(), @"malformed kinds: duplicate kind identifier `AND` at positions 0 and 2");
}

#[test]
fn test_member_name_collision_error() {
    let err = kindgen::generate("enum Kind { BV_ADD, BV__ADD };", "dup.h").unwrap_err();
    match &err {
        GenerateError::Malformed {
            kind: MalformedInputKind::DuplicateName { name, .. },
            ..
        } => assert_eq!(name, "BvAdd"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_enum_error() {
    let err = kindgen::generate("namespace api { int x; }", "none.h").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"no `enum Kind` declaration found");
}

#[test]
fn test_if_zero_kinds_keep_cpp_codes() {
    let generated = generate("api_kinds.h");
    assert_eq!(generated.table.code_of("SKOLEM_FUN"), None);
    assert_eq!(generated.table.code_of("SEP_NIL"), None);
    assert_eq!(generated.table.code_of("CONSTANT"), Some(5));
    assert_eq!(generated.table.code_of("VARIABLE"), Some(6));
    assert!(!generated.code.contains("SkolemFun"));
}

#[test]
fn test_diagnostic_names_source() {
    let err = kindgen::generate("enum Kind { AND, AND };", "include/dup.h").unwrap_err();
    let rendered = format!("{:?}", miette::Report::new(err));
    assert!(rendered.contains("dup.h"), "{rendered}");
}
