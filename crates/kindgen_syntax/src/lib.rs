//! Kinds header frontend: tokenizer, enum parser, and the ordered kind source it produces.
//!
//! The API header declares every kind as an enumerator of a C++ `enum ... Kind { ... };`. This crate reads that
//! block and yields the kinds in declaration order, each paired with the member name the emitters use.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not assign codes. Codes come from `kindgen_core`.
//! - Only the first enum named `Kind` (configurable) is read. Everything else in the header is skipped.
//!
//! ## Examples
//! ```rust
//! use kindgen_syntax::parser::KindsParser;
//!
//! let header = "enum CVC4_EXPORT Kind : int32_t { AND = -2, OR, NOT };";
//! let source = KindsParser::new().parse(header, "kinds.h").unwrap();
//! let names: Vec<&str> = source.iter().map(|k| k.name.as_str()).collect();
//! assert_eq!(names, ["And", "Or", "Not"]);
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod naming;
pub mod parser;
pub mod source;

pub use diagnostics::{HeaderError, HeaderErrorKind};
pub use parser::KindsParser;
pub use source::{KindEntry, KindSource};
