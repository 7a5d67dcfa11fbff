#![forbid(unsafe_code)]
//! kindgen: generate the Rust binding of an API kind enumeration
//!
//! Reads the kinds `enum` of a C++ API header, assigns every kind a stable integer code by position, and emits a Rust
//! enum whose members are pinned to those codes, together with a bounds-checked `from_code` lookup.
//!
//! The pipeline is split across the workspace:
//!
//! - `kindgen_syntax` reads the header into an ordered kind source.
//! - `kindgen_core` assigns codes and validates the resulting table.
//! - [`backend`] renders the table as Rust source.
//! - [`generate`] wires the three together; [`output`] writes the result atomically.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Build scripts**: a build script that cannot generate its bindings panics with the rendered diagnostic; that is
//!   how cargo reports build script failures.

pub mod backend;
pub mod cli;
pub mod generate;
pub mod output;
pub mod version;

pub use backend::{EmitConfig, EmitError, EnumEmitter};
pub use generate::{GenerateError, Generated, Generator, generate};
pub use kindgen_core::{KindDecl, KindRecord, KindTable, MalformedInputKind, OutOfRangeKind};
pub use kindgen_syntax::{HeaderError, KindSource, KindsParser};
pub use output::{Freshness, WriteError, check_output, write_atomic};
