//! Property-based tests for the kindgen pipeline
//!
//! These tests use proptest to verify invariants across many randomly
//! generated headers.

use proptest::prelude::*;

/// Distinct kind identifiers. Letters only, so member names cannot collide after case conversion.
fn kind_identifiers() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[A-Z]{2,10}", 0..40)
        .prop_map(|set| set.into_iter().filter(|id| id != "SELF").collect())
}

fn header_for(identifiers: &[String]) -> String {
    let mut header = String::from("namespace api {\nenum CVC4_EXPORT Kind : int32_t\n{\n");
    for identifier in identifiers {
        header.push_str("  /* kind */\n  ");
        header.push_str(identifier);
        header.push_str(",\n");
    }
    header.push_str("};\n}\n");
    header
}

proptest! {
    /// Property: the k-th kind (from 0) gets code start + k
    #[test]
    fn codes_follow_position(identifiers in kind_identifiers(), start in -1000i32..1000) {
        let generated = kindgen::Generator::new()
            .with_config(kindgen::EmitConfig::new().with_start_code(start))
            .generate(&header_for(&identifiers), "prop.h")
            .unwrap();

        prop_assert_eq!(generated.table.len(), identifiers.len());
        for (k, identifier) in identifiers.iter().enumerate() {
            prop_assert_eq!(generated.table.code_of(identifier), Some(start + k as i32));
        }
    }

    /// Property: generation is a pure function of the header
    #[test]
    fn generation_is_deterministic(identifiers in kind_identifiers()) {
        let header = header_for(&identifiers);
        let first = kindgen::generate(&header, "prop.h").unwrap();
        let second = kindgen::generate(&header, "prop.h").unwrap();
        prop_assert_eq!(first.code, second.code);
    }

    /// Property: every generated file parses as Rust, with one variant per kind
    #[test]
    fn output_parses(identifiers in kind_identifiers()) {
        let generated = kindgen::generate(&header_for(&identifiers), "prop.h").unwrap();
        let file: syn::File = syn::parse_str(&generated.code).unwrap();
        let variants = file.items.iter().find_map(|item| match item {
            syn::Item::Enum(e) => Some(e.variants.len()),
            _ => None,
        });
        prop_assert_eq!(variants, Some(identifiers.len()));
    }

    /// Property: the lookup table only accepts codes inside the assigned range
    #[test]
    fn lookup_respects_bounds(identifiers in kind_identifiers(), value in -100i32..100) {
        let generated = kindgen::generate(&header_for(&identifiers), "prop.h").unwrap();
        let table = &generated.table;
        let inside = !identifiers.is_empty() && value >= table.start() && value <= table.last_code();
        prop_assert_eq!(table.lookup(value).is_ok(), inside);
    }
}
