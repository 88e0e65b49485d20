//! Haar wavelet compression
//!
//! 1. Split the image into red, green and blue [`Plane`]s.
//! 2. Transform each plane (zero-padded to a square power of two).
//! 3. Pick the quantile threshold over the distinct absolute coefficient
//!    values of all three planes and zero every coefficient at or below it.
//! 4. Invert, crop to the source size and reassemble with max 255.

use crate::haar::{invert, transform};
use crate::plane::{Plane, planes_to_image};
use crate::{WaveletError, WaveletResult};
use ime_core::{Image, ImageTransform, round_half_up};

/// Declared max of every compressed image.
pub const COMPRESSED_MAX: u32 = 255;

fn validate_percentage(percentage: f64) -> WaveletResult<()> {
    if !(0.0..=100.0).contains(&percentage) {
        return Err(WaveletError::InvalidParameters(format!(
            "compression percentage must be in [0, 100], got {percentage}"
        )));
    }
    Ok(())
}

/// Red, green and blue planes of `image`.
pub fn channel_planes(image: &Image) -> [Plane; 3] {
    std::array::from_fn(|c| Plane::from_channel(image, c))
}

/// Magnitude threshold for discarding `percentage` percent of the distinct
/// absolute values across `planes`.
///
/// The distinct magnitudes are sorted ascending and the one at index
/// `max(0, round(N * percentage / 100) - 1)` is returned, so even 0% yields
/// the smallest magnitude. `None` when the planes hold no values at all.
///
/// # Errors
///
/// Returns [`WaveletError::InvalidParameters`] if `percentage` is outside
/// `[0, 100]`.
pub fn threshold(planes: &[Plane], percentage: f64) -> WaveletResult<Option<f64>> {
    validate_percentage(percentage)?;

    let mut magnitudes: Vec<f64> = planes
        .iter()
        .flat_map(|p| p.data().iter().map(|v| v.abs()))
        .collect();
    magnitudes.sort_by(f64::total_cmp);
    magnitudes.dedup();

    if magnitudes.is_empty() {
        return Ok(None);
    }
    let n = magnitudes.len();
    let index = (round_half_up(n as f64 * (percentage / 100.0)) - 1).max(0) as usize;
    Ok(magnitudes.get(index.min(n - 1)).copied())
}

/// Zero every value whose magnitude is at most `threshold`.
pub fn apply_threshold(planes: &mut [Plane], threshold: f64) {
    for plane in planes {
        for v in plane.data_mut() {
            if v.abs() <= threshold {
                *v = 0.0;
            }
        }
    }
}

/// Compress `image` by discarding `percentage` percent of its distinct Haar
/// coefficient magnitudes.
///
/// The output has the source dimensions and a declared max of 255.
///
/// # Errors
///
/// Returns [`WaveletError::InvalidParameters`] if `percentage` is outside
/// `[0, 100]`.
pub fn compress(image: &Image, percentage: f64) -> WaveletResult<Image> {
    validate_percentage(percentage)?;
    let (width, height) = image.dimensions();

    let mut coeffs = channel_planes(image).map(|p| transform(&p));
    let cut = threshold(&coeffs, percentage)?;
    log::debug!(
        "compress: {}x{} padded to {}, {}% -> threshold {:?}",
        width,
        height,
        coeffs[0].width(),
        percentage,
        cut
    );
    if let Some(cut) = cut {
        apply_threshold(&mut coeffs, cut);
    }

    let [r, g, b] = coeffs;
    let restored = [
        invert(&r)?.cropped(width, height),
        invert(&g)?.cropped(width, height),
        invert(&b)?.cropped(width, height),
    ];
    planes_to_image(&restored, COMPRESSED_MAX)
}

/// Wavelet compression packaged as an [`ImageTransform`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HaarCompressor {
    pub percentage: f64,
}

impl HaarCompressor {
    pub fn new(percentage: f64) -> Self {
        Self { percentage }
    }
}

impl ImageTransform for HaarCompressor {
    type Error = WaveletError;

    fn apply(&self, image: &Image) -> WaveletResult<Image> {
        compress(image, self.percentage)
    }
}
