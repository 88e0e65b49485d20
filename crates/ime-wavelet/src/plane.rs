//! Plane - Real-valued single-channel grid
//!
//! `Plane` holds one `f64` per cell and carries the wavelet coefficients of
//! one color channel between the forward transform, thresholding and the
//! inverse transform.
//!
//! # Memory Layout
//!
//! Row-major with no padding: the cell at `(row, col)` is at index
//! `row * width + col`.

use crate::{WaveletError, WaveletResult};
use ime_core::{Image, Pixel};

/// Real-valued 2D grid
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Plane {
    /// Create a zero-filled plane.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Wrap row-major `data`.
    ///
    /// # Errors
    ///
    /// Returns [`WaveletError::DataLength`] unless `data.len() == width * height`.
    pub fn from_data(width: usize, height: usize, data: Vec<f64>) -> WaveletResult<Self> {
        if data.len() != width * height {
            return Err(WaveletError::DataLength {
                width,
                height,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a plane from nested rows of equal length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> WaveletResult<Self> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let data: Vec<f64> = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Self::from_data(width, rows.len(), data)
    }

    /// Red (0), green (1) or blue (2) values of `image` as a plane.
    pub fn from_channel(image: &Image, channel: usize) -> Self {
        let data = image
            .pixels()
            .iter()
            .map(|p| p.channels()[channel] as f64)
            .collect();
        Self {
            width: image.width(),
            height: image.height(),
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Value at `(row, col)`, or `None` outside the plane.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.height && col < self.width {
            Some(self.data[row * self.width + col])
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.width + col]
    }

    #[inline]
    pub(crate) fn set_at(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.width + col] = value;
    }

    /// Copy into a `size x size` plane, zero-filling on the right and bottom.
    /// Cells beyond `size` are dropped.
    pub fn padded(&self, size: usize) -> Plane {
        self.resized(size, size)
    }

    /// Top-left `width x height` region, zero-filled where it exceeds the
    /// source.
    pub fn cropped(&self, width: usize, height: usize) -> Plane {
        self.resized(width, height)
    }

    fn resized(&self, width: usize, height: usize) -> Plane {
        let mut out = Plane::new(width, height);
        for row in 0..height.min(self.height) {
            for col in 0..width.min(self.width) {
                out.set_at(row, col, self.at(row, col));
            }
        }
        out
    }

    /// Largest absolute difference to `other`, or `None` if the
    /// dimensions differ.
    pub fn max_abs_diff(&self, other: &Plane) -> Option<f64> {
        if self.width != other.width || self.height != other.height {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max),
        )
    }
}

/// Reassemble three planes into an image with declared max `max`.
///
/// Each value is rounded half-up and negatives become 0; values above `max`
/// are clamped by [`Pixel`].
pub fn planes_to_image(planes: &[Plane; 3], max: u32) -> WaveletResult<Image> {
    let [red, green, blue] = planes;
    for plane in [green, blue] {
        if (plane.width, plane.height) != (red.width, red.height) {
            return Err(ime_core::Error::DimensionMismatch {
                expected: (red.width, red.height),
                actual: (plane.width, plane.height),
            }
            .into());
        }
    }

    let channel = |plane: &Plane, row, col| ime_core::round_half_up(plane.at(row, col)).max(0);
    Ok(Image::from_fn(red.width, red.height, max, |row, col| {
        Pixel::new(
            channel(red, row, col),
            channel(green, row, col),
            channel(blue, row, col),
            max,
        )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_checks_length() {
        assert!(Plane::from_data(2, 2, vec![0.0; 4]).is_ok());
        assert!(matches!(
            Plane::from_data(2, 2, vec![0.0; 3]),
            Err(WaveletError::DataLength { actual: 3, .. })
        ));
    }

    #[test]
    fn test_pad_and_crop() {
        let p = Plane::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let padded = p.padded(4);
        assert_eq!((padded.width(), padded.height()), (4, 4));
        assert_eq!(padded.get(1, 2), Some(6.0));
        assert_eq!(padded.get(1, 3), Some(0.0));
        assert_eq!(padded.get(3, 0), Some(0.0));
        assert_eq!(padded.cropped(3, 2), p);
    }

    #[test]
    fn test_from_channel() {
        let img = Image::from_samples(2, 1, 255, &[(1, 2, 3), (4, 5, 6)]).unwrap();
        let green = Plane::from_channel(&img, 1);
        assert_eq!(green.data(), &[2.0, 5.0]);
    }

    #[test]
    fn test_planes_to_image_rounds_and_floors_at_zero() {
        let r = Plane::from_data(2, 1, vec![2.5, -3.0]).unwrap();
        let g = Plane::from_data(2, 1, vec![0.49, 300.0]).unwrap();
        let b = Plane::from_data(2, 1, vec![10.0, 11.5]).unwrap();
        let img = planes_to_image(&[r, g, b], 255).unwrap();
        assert_eq!(img.get_pixel(0, 0).unwrap().channels(), [3, 0, 10]);
        assert_eq!(img.get_pixel(0, 1).unwrap().channels(), [0, 255, 12]);
    }

    #[test]
    fn test_planes_to_image_size_mismatch() {
        let a = Plane::new(2, 2);
        let b = Plane::new(1, 2);
        assert!(planes_to_image(&[a.clone(), b, a], 255).is_err());
    }
}
