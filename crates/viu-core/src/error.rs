//! # Error Types
//!
//! Defines the error types used throughout the VIU shared library. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Document errors carry the rejected (already redacted) input shape,
//!   never the raw document number.
//! - Parse errors for enumerations name the unknown value so API error
//!   responses can surface it directly.

use thiserror::Error;

/// Top-level error type for the VIU shared library.
#[derive(Error, Debug)]
pub enum ViuError {
    /// A document number (CPF, CNPJ, CEP) failed structural validation.
    #[error("invalid {kind}: input of {digit_count} digit(s) failed validation")]
    InvalidDocument {
        /// Which document type was being validated ("CPF", "CNPJ", "CEP").
        kind: &'static str,
        /// How many digits remained after stripping punctuation.
        digit_count: usize,
    },

    /// An enumeration value was not recognized.
    #[error("unknown {enum_name} value: {value:?}")]
    UnknownEnumValue {
        /// Name of the enumeration being parsed.
        enum_name: &'static str,
        /// The unrecognized input.
        value: String,
    },

    /// An identifier string was not a valid UUID.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(#[from] uuid::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
