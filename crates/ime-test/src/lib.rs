//! ime-test - Regression test framework for IME
//!
//! Provides the [`RegParams`] check recorder used by every `*_reg.rs`
//! integration test, plus synthetic fixture images so that no test needs
//! to touch the filesystem.
//!
//! # Usage
//!
//! ```ignore
//! use ime_test::{RegParams, gradient_image};
//!
//! let mut rp = RegParams::new("flip");
//! let img = gradient_image(16, 8);
//! rp.compare_images(&img, &img.flip_horizontal().flip_horizontal());
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use ime_core::{Image, Pixel};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The 2x2 reference image used throughout the wavelet tests:
///
/// ```text
/// (243, 244, 255)  (90, 76, 44)
/// (33, 205, 104)   (12, 35, 56)
/// ```
pub fn sample_2x2() -> TestResult<Image> {
    Image::from_samples(
        2,
        2,
        255,
        &[(243, 244, 255), (90, 76, 44), (33, 205, 104), (12, 35, 56)],
    )
    .map_err(|source| TestError::Fixture {
        name: "sample_2x2",
        source,
    })
}

/// Smooth 8-bit gradient: red grows with the column, green with the row,
/// blue with their sum.
pub fn gradient_image(width: usize, height: usize) -> Image {
    let wspan = width.saturating_sub(1).max(1) as f64;
    let hspan = height.saturating_sub(1).max(1) as f64;
    Image::from_fn(width, height, 255, |row, col| {
        let r = (255.0 * col as f64 / wspan).round() as i64;
        let g = (255.0 * row as f64 / hspan).round() as i64;
        let b = (r + g) / 2;
        Pixel::new(r, g, b, 255)
    })
}

/// Black and white checkerboard with square cells of `cell` pixels.
pub fn checkerboard(width: usize, height: usize, cell: usize) -> Image {
    let cell = cell.max(1);
    Image::from_fn(width, height, 255, |row, col| {
        if (row / cell + col / cell) % 2 == 0 {
            Pixel::gray(255, 255)
        } else {
            Pixel::black(255)
        }
    })
}

/// Image filled with a single color.
pub fn solid_image(width: usize, height: usize, rgb: (u32, u32, u32), max: u32) -> Image {
    let pixel = Pixel::new(rgb.0 as i64, rgb.1 as i64, rgb.2 as i64, max);
    Image::from_fn(width, height, max, |_, _| pixel)
}

/// Reproducible pseudo-random image with channels drawn from `[0, max]`.
pub fn random_image(seed: u64, width: usize, height: usize, max: u32) -> Image {
    let mut rng = StdRng::seed_from_u64(seed);
    Image::from_fn(width, height, max, |_, _| {
        Pixel::new(
            rng.random_range(0..=max) as i64,
            rng.random_range(0..=max) as i64,
            rng.random_range(0..=max) as i64,
            max,
        )
    })
}

/// Reproducible grid of real values in `[-range, range]`, row-major.
pub fn random_values(seed: u64, count: usize, range: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| rng.random_range(-range..=range))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_2x2() {
        let img = sample_2x2().unwrap();
        assert_eq!(img.get_pixel(1, 0).unwrap().channels(), [33, 205, 104]);
    }

    #[test]
    fn test_gradient_corners() {
        let img = gradient_image(5, 3);
        assert_eq!(img.get_pixel(0, 0).unwrap().channels(), [0, 0, 0]);
        assert_eq!(img.get_pixel(2, 4).unwrap().channels(), [255, 255, 255]);
    }

    #[test]
    fn test_random_image_is_reproducible() {
        assert_eq!(random_image(7, 4, 4, 255), random_image(7, 4, 4, 255));
    }
}
