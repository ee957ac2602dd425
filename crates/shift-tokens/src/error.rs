//! Error types for token loading and generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading token files or generating CSS from them.
///
/// All of these are fatal: the generator builds the document in memory and
/// never writes partial output.
#[derive(Debug, Error)]
pub enum TokenError {
    /// A token file could not be read.
    #[error("failed to read token file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token file is not valid JSON or does not match the expected shape.
    #[error("failed to parse token file '{name}': {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// A numeric token value could not be parsed.
    #[error("token '{token}' has non-numeric value '{value}'")]
    NotANumber { token: String, value: String },

    /// A numeric token value is outside its valid range.
    #[error("token '{token}' value {value} is outside {min}..={max}")]
    OutOfRange {
        token: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Lightness must strictly decrease from one step to the next.
    #[error(
        "lightness must decrease along the scale: step {step} ({lightness}) is not darker than step {previous_step} ({previous})"
    )]
    NonMonotonicLightness {
        previous_step: String,
        previous: f64,
        step: String,
        lightness: f64,
    },
}

/// Result type for token operations.
pub type Result<T> = std::result::Result<T, TokenError>;
