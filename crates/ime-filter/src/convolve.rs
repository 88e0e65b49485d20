//! Convolution operations
//!
//! Implements per-channel image convolution with square kernels.
//!
//! # Border handling
//!
//! Kernel taps that fall outside the image are skipped entirely: they are
//! not zero-padded, replicated or wrapped, and the remaining weights are
//! not renormalized. Near the border each output is therefore a weighted
//! sum of fewer taps than in the interior.

use crate::{FilterResult, Kernel};
use ime_core::{Image, ImageTransform, Pixel, round_half_up};

/// Convolve every channel of `image` with `kernel`.
///
/// Each result is rounded half-up and clamped into `[0, max]`; the output
/// keeps the source dimensions and declared max.
pub fn convolve(image: &Image, kernel: &Kernel) -> Image {
    let size = kernel.size();
    let half = kernel.half() as isize;
    log::trace!(
        "convolve: {}x{} image with {size}x{size} kernel",
        image.width(),
        image.height()
    );

    Image::from_fn(image.width(), image.height(), image.max(), |row, col| {
        let mut sum = [0.0f64; 3];

        for m in 0..size {
            let src_row = row as isize + m as isize - half;
            for n in 0..size {
                let src_col = col as isize + n as isize - half;
                let Some(pixel) = image.get_pixel_signed(src_row, src_col) else {
                    continue;
                };
                let weight = kernel.get(m, n).unwrap_or(0.0);
                for (acc, value) in sum.iter_mut().zip(pixel.channels()) {
                    *acc += weight * value as f64;
                }
            }
        }

        Pixel::from_channels(sum.map(round_half_up), image.max())
    })
}

/// Gaussian blur with the 3x3 kernel from [`Kernel::gaussian_blur_3x3`].
pub fn blur(image: &Image) -> Image {
    convolve(image, &Kernel::gaussian_blur_3x3())
}

/// Sharpen with the 5x5 kernel from [`Kernel::sharpen_5x5`].
pub fn sharpen(image: &Image) -> Image {
    convolve(image, &Kernel::sharpen_5x5())
}

impl ImageTransform for Kernel {
    type Error = crate::FilterError;

    fn apply(&self, image: &Image) -> FilterResult<Image> {
        Ok(convolve(image, self))
    }
}
