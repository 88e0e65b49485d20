//! ime-wavelet - Haar wavelet compression for IME
//!
//! - [`Plane`]: real-valued channel grid
//! - [`transform`] / [`invert`]: 2D Haar transform over a zero-padded
//!   square power-of-two plane
//! - [`threshold`] / [`apply_threshold`]: quantile thresholding
//! - [`compress`] / [`HaarCompressor`]: the whole pipeline on an image

pub mod compress;
mod error;
pub mod haar;
pub mod plane;

pub use compress::{
    COMPRESSED_MAX, HaarCompressor, apply_threshold, channel_planes, compress, threshold,
};
pub use error::{WaveletError, WaveletResult};
pub use haar::{forward_1d, invert, inverse_1d, padded_size, transform};
pub use plane::{Plane, planes_to_image};
