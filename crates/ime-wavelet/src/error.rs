//! Error types for ime-wavelet

use thiserror::Error;

/// Errors that can occur during wavelet operations
#[derive(Debug, Error)]
pub enum WaveletError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ime_core::Error),

    /// Plane data does not match its dimensions
    #[error("plane data length {actual} does not match {width}x{height}")]
    DataLength {
        width: usize,
        height: usize,
        actual: usize,
    },

    /// Transform input is not a square power-of-two plane
    #[error("expected a square power-of-two plane, got {width}x{height}")]
    NotPowerOfTwo { width: usize, height: usize },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for wavelet operations
pub type WaveletResult<T> = Result<T, WaveletError>;
