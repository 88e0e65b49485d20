//! Error types for ime-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context to report the violation without
//! exposing the internal pixel layout.

use thiserror::Error;

/// IME core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Pixel access outside the image grid
    #[error("index out of bounds: ({row}, {col}) outside {height}x{width} image")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// Image dimension mismatch, reported as (width, height)
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Raster sample above the declared maximum
    #[error("invalid sample {value} at ({row}, {col}): exceeds max {max}")]
    InvalidSample {
        row: usize,
        col: usize,
        value: u32,
        max: u32,
    },

    /// Raster sample count does not cover the declared grid
    #[error("sample count mismatch: expected {expected}, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },
}

/// Result type alias for IME core operations
pub type Result<T> = std::result::Result<T, Error>;
