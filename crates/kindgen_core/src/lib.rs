//! Provide the kind table and stable code assignment shared by every kindgen emitter.
//!
//! A kind table maps an ordered list of symbolic kind names to contiguous integer codes. The k-th kind (0-indexed)
//! always receives `start + k`, so every generated binding agrees on the code of every kind as long as it is fed the
//! same ordered input.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no emitter-specific types.
//! - Codes are derived from position only. Values declared in the source header are never used as codes.
//!
//! ## Examples
//! ```rust
//! use kindgen_core::{KindDecl, KindTable, DEFAULT_START_CODE};
//!
//! let decls = ["AND", "OR", "NOT"].map(|id| KindDecl::new(id, id.to_ascii_lowercase()));
//! let table = KindTable::assign(decls, DEFAULT_START_CODE).unwrap();
//! assert_eq!(table.code_of("NOT"), Some(0));
//! assert_eq!(table.bounds(), Some((-2, 0)));
//! ```

pub mod errors;
pub mod ident;
pub mod table;

pub use errors::{MalformedInputKind, OutOfRangeKind};
pub use table::{KindDecl, KindRecord, KindTable};

/// Code of the first declared kind.
///
/// Two codes below the first real kind are reserved by convention, which puts the first declared kind at `-2`.
pub const DEFAULT_START_CODE: i32 = -2;
