//! Errors raised while building a kind table or looking a code up in it.
//!
//! These messages are user-facing. The generated lookup error uses the exact same wording as
//! [`OutOfRangeKind`], so keep the two in sync.

use std::fmt;

use thiserror::Error;

/// The kind source yielded input that cannot become a kind table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInputKind {
    #[error("kind identifier `{identifier}` is not a valid identifier")]
    InvalidIdentifier { identifier: String },

    #[error("kind `{identifier}` has display name `{name}`, which is not a valid Rust identifier")]
    InvalidName { identifier: String, name: String },

    #[error("kind `{identifier}` has display name `{name}`, which is a reserved Rust keyword")]
    ReservedName { identifier: String, name: String },

    #[error("duplicate kind identifier `{identifier}` at positions {first} and {second}")]
    DuplicateIdentifier {
        identifier: String,
        first: usize,
        second: usize,
    },

    #[error("kinds `{first}` and `{second}` both map to the enum member name `{name}`")]
    DuplicateName {
        name: String,
        first: String,
        second: String,
    },

    #[error("{len} kinds starting at code {start} do not fit in a 32-bit code range")]
    CodeOverflow { start: i32, len: usize },
}

/// A code lookup fell outside the contiguous range of assigned codes.
///
/// `low..=high` is the inclusive valid range. An empty table reports `high == low - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRangeKind {
    pub value: i32,
    pub low: i32,
    pub high: i32,
}

impl OutOfRangeKind {
    /// Whether the table this lookup ran against had no kinds at all.
    pub fn is_empty_range(&self) -> bool {
        self.low > self.high
    }
}

impl fmt::Display for OutOfRangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&out_of_range_message("Kind", self.value, self.low, self.high))
    }
}

impl std::error::Error for OutOfRangeKind {}

/// Render the out-of-range message for an enumeration called `type_name`.
///
/// ## Examples
/// ```rust
/// use kindgen_core::errors::out_of_range_message;
///
/// assert_eq!(
///     out_of_range_message("Kind", 1, -2, 0),
///     "Kind value 1 is outside the valid range [-2,0]"
/// );
/// assert_eq!(
///     out_of_range_message("Kind", 5, -2, -3),
///     "Kind value 5 is invalid: the Kind range is empty"
/// );
/// ```
pub fn out_of_range_message(type_name: &str, value: i32, low: i32, high: i32) -> String {
    if low > high {
        format!("{type_name} value {value} is invalid: the {type_name} range is empty")
    } else {
        format!("{type_name} value {value} is outside the valid range [{low},{high}]")
    }
}
