//! Error types for ime-color

use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ime_core::Error),

    /// Channel value outside the 256-bin histogram range
    #[error("channel value {value} outside histogram range 0..=255")]
    ValueOutOfRange { value: u32 },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
