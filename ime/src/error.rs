//! Error type spanning every IME crate

use thiserror::Error;

/// Any error reported by an IME operation
#[derive(Debug, Error)]
pub enum ImeError {
    #[error(transparent)]
    Core(#[from] ime_core::Error),

    #[error(transparent)]
    Filter(#[from] ime_filter::FilterError),

    #[error(transparent)]
    Color(#[from] ime_color::ColorError),

    #[error(transparent)]
    Wavelet(#[from] ime_wavelet::WaveletError),
}

/// Result type for umbrella operations
pub type ImeResult<T> = Result<T, ImeError>;
