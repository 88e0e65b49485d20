//! Pixel access functions
//!
//! Bounds-checked getters and setters addressed by `(row, col)`.

use super::Image;
use crate::Pixel;
use crate::error::{Error, Result};

impl Image {
    #[inline]
    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.height || col >= self.width {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(row * self.width + col)
    }

    /// Get the pixel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside `[0, height) x [0, width)`.
    pub fn get_pixel(&self, row: usize, col: usize) -> Result<Pixel> {
        let offset = self.offset(row, col)?;
        Ok(self.pixels[offset])
    }

    /// Get the pixel at `(row, col)` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the pixel buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, row: usize, col: usize) -> Pixel {
        self.pixels[row * self.width + col]
    }

    /// Overwrite the pixel at `(row, col)`.
    ///
    /// The pixel keeps its own `max`; it is stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside `[0, height) x [0, width)`.
    pub fn set_pixel(&mut self, row: usize, col: usize, pixel: Pixel) -> Result<()> {
        let offset = self.offset(row, col)?;
        self.pixels[offset] = pixel;
        Ok(())
    }

    /// Signed lookup used by neighbourhood operations.
    ///
    /// Returns `None` when `(row, col)` falls outside the image.
    #[inline]
    pub fn get_pixel_signed(&self, row: isize, col: isize) -> Option<Pixel> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.pixels[row * self.width + col])
    }
}
