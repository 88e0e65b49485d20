//! IME Core - Basic data structures for image manipulation
//!
//! This crate provides the fundamental types used throughout the IME
//! image manipulation and enhancement engine:
//!
//! - [`Pixel`] - An RGB sample clamped into `[0, max]`
//! - [`Image`] - A bounds-checked, row-major grid of pixels
//! - [`ImageTransform`] - The capability shared by every whole-image operation
//! - [`map_pixels`] / [`linear_color_transform`] - The pixel-transform engine
//! - [`split_preview`] - The split-view compositor
//!
//! Every operation is a pure function over images and scalar parameters:
//! inputs are never mutated and each call returns a freshly built image.

pub mod error;
pub mod image;
pub mod pixel;
pub mod split;
pub mod transform;

pub use error::{Error, Result};
pub use image::{Channel, Image};
pub use pixel::{LUMA_WEIGHTS, Pixel, round_half_up};
pub use split::{split_point, split_preview, split_preview_with, validate_percentage};
pub use transform::{
    ColorMatrix, IDENTITY_MATRIX, ImageTransform, LinearColorTransform, PixelMap,
    linear_color_transform, map_pixels, transform_pixel,
};
