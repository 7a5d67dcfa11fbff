//! Define error types for kind enumeration emission.
//!
//! These errors represent *rendering* failures (as opposed to header parsing).
//!
//! ## Notes
//!
//! - A table that reaches the emitter without going through validation is re-checked here, so two members can never
//!   share a name in generated code.

use kindgen_core::MalformedInputKind;
use thiserror::Error;

/// Error during enumeration emission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    #[error(transparent)]
    Malformed(#[from] MalformedInputKind),

    #[error("`{0}` cannot be used as a generated type name")]
    InvalidTypeName(String),

    #[error("the enumeration and its error type are both named `{0}`")]
    TypeNameClash(String),

    #[error("syn parse error: {0}")]
    SynParse(String),
}
