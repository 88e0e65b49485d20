//! ime-filter - Image filtering operations
//!
//! This crate provides spatial filtering:
//!
//! - Convolution with arbitrary odd-sized square kernels
//! - Gaussian blur (3x3)
//! - Sharpening (5x5)
//!
//! Every [`Kernel`] is also an [`ime_core::ImageTransform`].

pub mod convolve;
mod error;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

pub use convolve::{blur, convolve, sharpen};
