//! Image - The main raster container
//!
//! An [`Image`] is a row-major grid of [`Pixel`]s with a fixed width,
//! height and a single declared channel maximum.
//!
//! # Addressing
//!
//! Pixels are addressed as `(row, col)` with `row` in `0..height` and
//! `col` in `0..width`. Every checked accessor reports
//! [`Error::IndexOutOfBounds`] outside that range.
//!
//! # Ownership model
//!
//! Transforms never mutate their input: each one builds a fresh `Image`.
//! The only in-place writers are [`Image::set_pixel`] and
//! [`Image::replace_portion`].

mod access;
mod clip;
pub mod graphics;
mod orient;
mod rgb;

pub use rgb::Channel;

use crate::Pixel;
use crate::error::{Error, Result};

/// A width x height grid of RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    max: u32,
    pixels: Vec<Pixel>,
}

impl Image {
    /// Create a black image.
    ///
    /// Zero-sized images are allowed; they hold no pixels.
    pub fn new(width: usize, height: usize, max: u32) -> Self {
        Self {
            width,
            height,
            max,
            pixels: vec![Pixel::black(max); width * height],
        }
    }

    /// Build an image by evaluating `f(row, col)` for every position.
    pub fn from_fn<F>(width: usize, height: usize, max: u32, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Pixel,
    {
        let mut pixels = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Self {
            width,
            height,
            max,
            pixels,
        }
    }

    /// Build an image from row-major `(red, green, blue)` samples.
    ///
    /// This is the construction primitive used by raster decoders.
    ///
    /// # Errors
    ///
    /// - [`Error::SampleCountMismatch`] if `samples.len() != width * height`
    /// - [`Error::InvalidSample`] if any channel exceeds `max`
    pub fn from_samples(
        width: usize,
        height: usize,
        max: u32,
        samples: &[(u32, u32, u32)],
    ) -> Result<Self> {
        let expected = width * height;
        if samples.len() != expected {
            return Err(Error::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }

        let mut pixels = Vec::with_capacity(expected);
        for (index, &(r, g, b)) in samples.iter().enumerate() {
            if let Some(&value) = [r, g, b].iter().find(|&&v| v > max) {
                return Err(Error::InvalidSample {
                    row: index / width,
                    col: index % width,
                    value,
                    max,
                });
            }
            pixels.push(Pixel::new(r as i64, g as i64, b as i64, max));
        }

        Ok(Self {
            width,
            height,
            max,
            pixels,
        })
    }

    /// Row-major `(red, green, blue)` samples, the inverse of
    /// [`Image::from_samples`].
    pub fn to_samples(&self) -> Vec<(u32, u32, u32)> {
        self.pixels
            .iter()
            .map(|p| (p.red(), p.green(), p.blue()))
            .collect()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The declared channel maximum.
    #[inline]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// True when the image holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// One row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    pub fn row(&self, row: usize) -> &[Pixel] {
        let start = row * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Check that two images share the same dimensions.
    pub fn check_same_size(&self, other: &Image) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(())
    }
}
