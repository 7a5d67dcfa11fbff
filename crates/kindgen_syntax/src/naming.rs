//! Member names for kind identifiers.

use heck::ToUpperCamelCase;

/// Enum member name for a header identifier: `BITVECTOR_ADD` → `BitvectorAdd`.
///
/// ## Examples
/// ```rust
/// use kindgen_syntax::naming::member_name;
///
/// assert_eq!(member_name("AND"), "And");
/// assert_eq!(member_name("APPLY_UF"), "ApplyUf");
/// assert_eq!(member_name("INTERNAL_KIND"), "InternalKind");
/// ```
pub fn member_name(identifier: &str) -> String {
    identifier.to_upper_camel_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_names() {
        assert_eq!(member_name("NULL_EXPR"), "NullExpr");
        assert_eq!(member_name("BITVECTOR_ULTBV"), "BitvectorUltbv");
        assert_eq!(member_name("FLOATINGPOINT_TO_FP_IEEE_BITVECTOR"), "FloatingpointToFpIeeeBitvector");
        assert_eq!(member_name("LAST_KIND"), "LastKind");
    }

    #[test]
    fn test_distinct_identifiers_can_collide() {
        // Collisions are caught when the kind table is built.
        assert_eq!(member_name("A_B"), member_name("A__B"));
    }
}
