//! Emission configuration for generated kind enumerations

use kindgen_core::{DEFAULT_START_CODE, ident};

use super::EmitError;

/// Default name of the generated enumeration.
pub const DEFAULT_ENUM_NAME: &str = "Kind";
/// Default name of the generated lookup error.
pub const DEFAULT_ERROR_NAME: &str = "OutOfRangeKind";

/// Emission configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Name of the generated enumeration type
    pub enum_name: String,
    /// Name of the error type returned by `from_code`
    pub error_name: String,
    /// Code of the first kind
    pub start_code: i32,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            enum_name: DEFAULT_ENUM_NAME.to_string(),
            error_name: DEFAULT_ERROR_NAME.to_string(),
            start_code: DEFAULT_START_CODE,
        }
    }
}

impl EmitConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the enumeration type name
    pub fn with_enum_name(mut self, name: impl Into<String>) -> Self {
        self.enum_name = name.into();
        self
    }

    /// Set the lookup error type name
    pub fn with_error_name(mut self, name: impl Into<String>) -> Self {
        self.error_name = name.into();
        self
    }

    /// Set the code of the first kind
    pub fn with_start_code(mut self, start: i32) -> Self {
        self.start_code = start;
        self
    }

    /// Check that both type names can be emitted and do not clash.
    pub fn validate(&self) -> Result<(), EmitError> {
        for name in [&self.enum_name, &self.error_name] {
            if !ident::is_rust_member_name(name) || ident::is_keyword(name) {
                return Err(EmitError::InvalidTypeName(name.clone()));
            }
        }
        if self.enum_name == self.error_name {
            return Err(EmitError::TypeNameClash(self.enum_name.clone()));
        }
        Ok(())
    }
}
