//! Error types for color parsing.

use thiserror::Error;

/// Errors produced when a color value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The value contains characters that are not hex digits.
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),

    /// The value has the wrong number of hex digits.
    #[error("invalid hex color '{value}': expected 3 or 6 digits, got {len}")]
    InvalidHexLength { value: String, len: usize },
}

/// Result type for color operations.
pub type Result<T> = std::result::Result<T, ColorError>;
