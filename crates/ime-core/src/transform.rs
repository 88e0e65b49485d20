//! Pixel-transform engine
//!
//! Two whole-image transform forms live here:
//!
//! - **Per-pixel map** ([`map_pixels`], [`PixelMap`]): apply a
//!   `Pixel -> Pixel` function everywhere.
//! - **Linear color transform** ([`linear_color_transform`],
//!   [`LinearColorTransform`]): multiply every `(R, G, B)` by a 3x3 matrix.
//!
//! Both keep the source dimensions and declared max and allocate a new image.
//!
//! # The `ImageTransform` capability
//!
//! [`ImageTransform`] is the seam shared by every stateless whole-image
//! operation in the workspace (per-pixel maps and color matrices here,
//! convolution kernels in `ime-filter`, wavelet compression in
//! `ime-wavelet`). Each implementor picks its own error type, which must be
//! able to absorb a core [`Error`].

use crate::error::Error;
use crate::{Image, Pixel, round_half_up};

/// A stateless whole-image operation.
pub trait ImageTransform {
    /// Error reported by [`ImageTransform::apply`].
    type Error: From<Error>;

    /// Produce a new image from `image`.
    fn apply(&self, image: &Image) -> Result<Image, Self::Error>;
}

/// Apply `f` to every pixel, producing an image of identical dimensions and
/// declared max.
pub fn map_pixels<F>(image: &Image, mut f: F) -> Image
where
    F: FnMut(Pixel) -> Pixel,
{
    Image::from_fn(image.width(), image.height(), image.max(), |row, col| {
        f(image.get_pixel_unchecked(row, col))
    })
}

/// A per-pixel function packaged as an [`ImageTransform`].
#[derive(Debug, Clone, Copy)]
pub struct PixelMap<F>(pub F);

impl<F> ImageTransform for PixelMap<F>
where
    F: Fn(Pixel) -> Pixel,
{
    type Error = Error;

    fn apply(&self, image: &Image) -> Result<Image, Error> {
        Ok(map_pixels(image, &self.0))
    }
}

/// Row-major 3x3 matrix mapping `(R, G, B)` to `(R', G', B')`.
pub type ColorMatrix = [[f64; 3]; 3];

/// Identity color matrix.
pub const IDENTITY_MATRIX: ColorMatrix = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Multiply one pixel by `matrix`, rounding half-up and clamping into
/// `[0, max]`.
pub fn transform_pixel(pixel: Pixel, matrix: &ColorMatrix) -> Pixel {
    let [r, g, b] = pixel.channels().map(|c| c as f64);
    let out = matrix.map(|row| round_half_up(row[0] * r + row[1] * g + row[2] * b));
    Pixel::from_channels(out, pixel.max())
}

/// Apply a 3x3 linear color transform to every pixel.
pub fn linear_color_transform(image: &Image, matrix: &ColorMatrix) -> Image {
    map_pixels(image, |p| transform_pixel(p, matrix))
}

/// A color matrix packaged as an [`ImageTransform`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearColorTransform {
    pub matrix: ColorMatrix,
}

impl LinearColorTransform {
    pub fn new(matrix: ColorMatrix) -> Self {
        Self { matrix }
    }
}

impl ImageTransform for LinearColorTransform {
    type Error = Error;

    fn apply(&self, image: &Image) -> Result<Image, Error> {
        Ok(linear_color_transform(image, &self.matrix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Image {
        Image::from_samples(2, 2, 255, &[(10, 20, 30), (40, 50, 60), (0, 0, 0), (255, 255, 255)])
            .unwrap()
    }

    #[test]
    fn test_map_pixels_keeps_shape() {
        let img = sample();
        let out = map_pixels(&img, |p| p.brighten(1));
        assert_eq!(out.dimensions(), img.dimensions());
        assert_eq!(out.max(), img.max());
        assert_eq!(out.get_pixel(0, 0).unwrap().channels(), [11, 21, 31]);
    }

    #[test]
    fn test_pixel_map_transform() {
        let img = sample();
        let invert = PixelMap(|p: Pixel| {
            Pixel::new(
                255 - p.red() as i64,
                255 - p.green() as i64,
                255 - p.blue() as i64,
                p.max(),
            )
        });
        let out = invert.apply(&img).unwrap();
        assert_eq!(out.get_pixel(1, 1).unwrap().channels(), [0, 0, 0]);
    }

    #[test]
    fn test_identity_matrix() {
        let img = sample();
        assert_eq!(linear_color_transform(&img, &IDENTITY_MATRIX), img);
    }

    #[test]
    fn test_matrix_rounds_and_clamps() {
        let swap_and_scale = [[0.0, 0.0, 1.0], [0.5, 0.0, 0.0], [2.0, 2.0, 2.0]];
        let p = transform_pixel(Pixel::new(5, 7, 9, 255), &swap_and_scale);
        // R' = 9, G' = 2.5 -> 3, B' = 42
        assert_eq!(p.channels(), [9, 3, 42]);

        let p = transform_pixel(Pixel::new(100, 100, 100, 255), &swap_and_scale);
        assert_eq!(p.blue(), 255);

        let negate = [[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert_eq!(transform_pixel(Pixel::new(5, 7, 9, 255), &negate).red(), 0);
    }
}
