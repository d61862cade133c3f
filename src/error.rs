//! Error types for Carteiro.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Carteiro operations.
pub type Result<T> = std::result::Result<T, CarteiroError>;

/// Errors that can occur in Carteiro.
#[derive(Debug, Error)]
pub enum CarteiroError {
    /// Text that should have been an integer was not.
    #[error("Invalid integer {input:?}")]
    ParseInt {
        input: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Text that should have been a number was not.
    #[error("Invalid number {input:?}")]
    ParseFloat {
        input: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CarteiroError {
    /// Create a ParseInt error.
    pub fn parse_int(input: impl Into<String>, source: std::num::ParseIntError) -> Self {
        Self::ParseInt {
            input: input.into(),
            source,
        }
    }

    /// Create a ParseFloat error.
    pub fn parse_float(input: impl Into<String>, source: std::num::ParseFloatError) -> Self {
        Self::ParseFloat {
            input: input.into(),
            source,
        }
    }
}
