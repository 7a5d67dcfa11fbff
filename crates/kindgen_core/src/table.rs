//! Kind tables: ordered kinds with position-derived codes.
//!
//! ## Notes
//!
//! - [`KindTable::assign`] is the pure code assignment step. It does not deduplicate or validate names.
//! - [`KindTable::build`] validates first and is what the generator uses; [`KindTable::validate`] lets an emitter
//!   re-check a table that was assembled through [`KindTable::assign`].

use std::collections::HashMap;

use crate::errors::{MalformedInputKind, OutOfRangeKind};
use crate::ident;

/// One kind as delivered by the kind source, before a code is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KindDecl {
    /// Symbolic identifier as spelled in the source header (e.g. `BITVECTOR_ADD`).
    pub identifier: String,
    /// Enum member name used verbatim by the emitter (e.g. `BitvectorAdd`).
    pub name: String,
}

impl KindDecl {
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
        }
    }
}

/// A kind with its assigned code. Identity is the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KindRecord {
    pub identifier: String,
    pub name: String,
    pub code: i32,
}

/// Ordered kind records whose codes form the contiguous range `[start, start + len - 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindTable {
    start: i32,
    records: Vec<KindRecord>,
}

impl KindTable {
    /// Assign `start + k` to the k-th declaration.
    ///
    /// ## Errors
    ///
    /// Returns [`MalformedInputKind::CodeOverflow`] when `start + len - 1` does not fit in an `i32`. For an empty
    /// input this is `start - 1`, the upper bound reported by lookups against an empty table.
    pub fn assign<I>(decls: I, start: i32) -> Result<Self, MalformedInputKind>
    where
        I: IntoIterator<Item = KindDecl>,
    {
        let decls: Vec<KindDecl> = decls.into_iter().collect();
        let len = decls.len();
        let overflow = || MalformedInputKind::CodeOverflow { start, len };

        let last = i64::from(start) + len as i64 - 1;
        if i32::try_from(last).is_err() {
            return Err(overflow());
        }

        let records = decls
            .into_iter()
            .enumerate()
            .map(|(position, decl)| KindRecord {
                identifier: decl.identifier,
                name: decl.name,
                code: start + position as i32,
            })
            .collect();

        Ok(Self { start, records })
    }

    /// Validate the declarations and assign codes.
    pub fn build<I>(decls: I, start: i32) -> Result<Self, MalformedInputKind>
    where
        I: IntoIterator<Item = KindDecl>,
    {
        let table = Self::assign(decls, start)?;
        table.validate()?;
        Ok(table)
    }

    /// Check identifier syntax and uniqueness of both identifiers and member names.
    ///
    /// Reports the first problem in table order.
    pub fn validate(&self) -> Result<(), MalformedInputKind> {
        let mut identifiers: HashMap<&str, usize> = HashMap::with_capacity(self.records.len());
        let mut names: HashMap<&str, &str> = HashMap::with_capacity(self.records.len());

        for (position, record) in self.records.iter().enumerate() {
            if !ident::is_identifier(&record.identifier) {
                return Err(MalformedInputKind::InvalidIdentifier {
                    identifier: record.identifier.clone(),
                });
            }
            if !ident::is_rust_member_name(&record.name) {
                return Err(MalformedInputKind::InvalidName {
                    identifier: record.identifier.clone(),
                    name: record.name.clone(),
                });
            }
            if ident::is_keyword(&record.name) {
                return Err(MalformedInputKind::ReservedName {
                    identifier: record.identifier.clone(),
                    name: record.name.clone(),
                });
            }
            if let Some(first) = identifiers.insert(&record.identifier, position) {
                return Err(MalformedInputKind::DuplicateIdentifier {
                    identifier: record.identifier.clone(),
                    first,
                    second: position,
                });
            }
            if let Some(first) = names.insert(&record.name, &record.identifier) {
                return Err(MalformedInputKind::DuplicateName {
                    name: record.name.clone(),
                    first: first.to_string(),
                    second: record.identifier.clone(),
                });
            }
        }

        Ok(())
    }

    /// Code of the first kind (also the lower bound of an empty table).
    pub fn start(&self) -> i32 {
        self.start
    }

    /// Code of the last kind, or `start - 1` for an empty table.
    pub fn last_code(&self) -> i32 {
        // `assign` guarantees this fits.
        self.start + (self.records.len() as i32 - 1)
    }

    /// Inclusive `(low, high)` code range, or `None` when the table is empty.
    pub fn bounds(&self) -> Option<(i32, i32)> {
        if self.records.is_empty() {
            None
        } else {
            Some((self.start, self.last_code()))
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[KindRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KindRecord> {
        self.records.iter()
    }

    /// Code assigned to `identifier`, if the table has it.
    pub fn code_of(&self, identifier: &str) -> Option<i32> {
        self.records
            .iter()
            .find(|record| record.identifier == identifier)
            .map(|record| record.code)
    }

    /// Resolve a code to its record.
    ///
    /// This is the reference behavior of the generated `from_code`: O(1) indexing on the contiguous range, and an
    /// [`OutOfRangeKind`] carrying the offending value and both bounds otherwise.
    pub fn lookup(&self, value: i32) -> Result<&KindRecord, OutOfRangeKind> {
        let out_of_range = OutOfRangeKind {
            value,
            low: self.start,
            high: self.last_code(),
        };
        if value < self.start || value > self.last_code() {
            return Err(out_of_range);
        }
        let index = (i64::from(value) - i64::from(self.start)) as usize;
        self.records.get(index).ok_or(out_of_range)
    }
}

impl<'a> IntoIterator for &'a KindTable {
    type Item = &'a KindRecord;
    type IntoIter = std::slice::Iter<'a, KindRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_START_CODE;

    fn decls(ids: &[&str]) -> Vec<KindDecl> {
        ids.iter()
            .map(|id| KindDecl::new(*id, format!("K{}", id.to_ascii_lowercase())))
            .collect()
    }

    #[test]
    fn test_assign_codes_by_position() {
        let table = KindTable::assign(decls(&["AND", "OR", "NOT"]), DEFAULT_START_CODE).unwrap();
        let codes: Vec<(&str, i32)> = table.iter().map(|r| (r.identifier.as_str(), r.code)).collect();
        assert_eq!(codes, vec![("AND", -2), ("OR", -1), ("NOT", 0)]);
        assert_eq!(table.bounds(), Some((-2, 0)));
    }

    #[test]
    fn test_empty_table() {
        let table = KindTable::build(Vec::new(), DEFAULT_START_CODE).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.bounds(), None);
        assert_eq!(table.last_code(), -3);

        let err = table.lookup(-2).unwrap_err();
        assert!(err.is_empty_range());
        assert_eq!(err.to_string(), "Kind value -2 is invalid: the Kind range is empty");
    }

    #[test]
    fn test_lookup_boundaries() {
        let table = KindTable::build(decls(&["AND", "OR", "NOT"]), DEFAULT_START_CODE).unwrap();
        assert_eq!(table.lookup(-2).unwrap().identifier, "AND");
        assert_eq!(table.lookup(0).unwrap().identifier, "NOT");
        assert_eq!(
            table.lookup(1).unwrap_err(),
            OutOfRangeKind {
                value: 1,
                low: -2,
                high: 0
            }
        );
        assert_eq!(
            table.lookup(-3).unwrap_err().to_string(),
            "Kind value -3 is outside the valid range [-2,0]"
        );
    }

    #[test]
    fn test_lookup_extreme_values() {
        let table = KindTable::build(decls(&["AND"]), DEFAULT_START_CODE).unwrap();
        assert!(table.lookup(i32::MIN).is_err());
        assert!(table.lookup(i32::MAX).is_err());
    }

    #[test]
    fn test_assign_does_not_deduplicate() {
        let table = KindTable::assign(decls(&["AND", "AND"]), 0).unwrap();
        assert_eq!(table.len(), 2);
        assert!(matches!(
            table.validate(),
            Err(MalformedInputKind::DuplicateIdentifier { first: 0, second: 1, .. })
        ));
    }

    #[test]
    fn test_build_rejects_duplicate_identifier() {
        let err = KindTable::build(decls(&["AND", "AND"]), DEFAULT_START_CODE).unwrap_err();
        assert_eq!(
            err,
            MalformedInputKind::DuplicateIdentifier {
                identifier: "AND".to_string(),
                first: 0,
                second: 1,
            }
        );
    }

    #[test]
    fn test_build_rejects_duplicate_member_name() {
        let input = vec![KindDecl::new("A_B", "AB"), KindDecl::new("AB", "AB")];
        let err = KindTable::build(input, DEFAULT_START_CODE).unwrap_err();
        assert!(matches!(err, MalformedInputKind::DuplicateName { ref name, .. } if name == "AB"));
    }

    #[test]
    fn test_build_rejects_bad_names() {
        let err = KindTable::build(vec![KindDecl::new("1ST", "First")], 0).unwrap_err();
        assert!(matches!(err, MalformedInputKind::InvalidIdentifier { .. }));

        let err = KindTable::build(vec![KindDecl::new("FIRST", "First-Kind")], 0).unwrap_err();
        assert!(matches!(err, MalformedInputKind::InvalidName { .. }));

        let err = KindTable::build(vec![KindDecl::new("SELF", "Self")], 0).unwrap_err();
        assert!(matches!(err, MalformedInputKind::ReservedName { .. }));
    }

    #[test]
    fn test_assign_overflow() {
        let err = KindTable::assign(decls(&["A", "B"]), i32::MAX).unwrap_err();
        assert_eq!(err, MalformedInputKind::CodeOverflow { start: i32::MAX, len: 2 });

        assert!(KindTable::assign(decls(&["A"]), i32::MAX).is_ok());
        assert!(KindTable::assign(Vec::new(), i32::MIN).is_err());
    }

    #[test]
    fn test_code_of() {
        let table = KindTable::build(decls(&["AND", "OR"]), 10).unwrap();
        assert_eq!(table.code_of("OR"), Some(11));
        assert_eq!(table.code_of("XOR"), None);
    }
}
