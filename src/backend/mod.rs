//! Kindgen backend: Rust emission of kind enumerations.
//!
//! The pipeline is:
//! 1. [`kindgen_core::KindTable`] (codes already assigned) → [`EnumEmitter`] → token stream
//! 2. Token stream → `syn` syntax tree → `prettyplease` formatted source text
//!
//! ## Module Organization
//!
//! - `config.rs` - Type names and start code ([`EmitConfig`])
//! - `emitter.rs` - Enumeration, lookup error, and conversion emission
//! - `errors.rs` - Rendering errors ([`EmitError`])
//!
//! Emission is codegen-only: it does not read or write files.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod config;
pub mod emitter;
pub mod errors;

pub use config::EmitConfig;
pub use emitter::EnumEmitter;
pub use errors::EmitError;
