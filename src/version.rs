//! Kindgen version information.
//!
//! This module exposes the generator version as a single constant so the CLI and the generated file header agree
//! on the same value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The kindgen version string (for example, `0.1.0`).
pub const KINDGEN_VERSION: &str = env!("CARGO_PKG_VERSION");
