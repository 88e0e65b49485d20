//! Level adjustment
//!
//! A quadratic tone curve through `(black, 0)`, `(mid, 128)` and
//! `(white, 255)`, applied independently to each channel.

use crate::{ColorError, ColorResult};
use ime_core::{Image, Pixel, round_half_up};

/// Declared max of every level-adjusted image.
pub const LEVELS_MAX: u32 = 255;

/// Coefficients of `y = a*x^2 + b*x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelCurve {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LevelCurve {
    /// Solve the curve for the given black, mid and white points.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidParameters`] unless every point lies in
    /// `[0, 255]` and `black <= mid <= white`.
    pub fn new(black: i64, mid: i64, white: i64) -> ColorResult<Self> {
        for (name, value) in [("black", black), ("mid", mid), ("white", white)] {
            if !(0..=255).contains(&value) {
                return Err(ColorError::InvalidParameters(format!(
                    "{name} point must be in [0, 255], got {value}"
                )));
            }
        }
        if black > mid || mid > white {
            return Err(ColorError::InvalidParameters(format!(
                "level points must satisfy black <= mid <= white, got {black}, {mid}, {white}"
            )));
        }

        let (bl, m, w) = (black, mid, white);
        let denom = bl * bl * (m - w) - bl * (m * m - w * w) + w * m * m - m * w * w;
        let a = -bl * (128 - 255) + 128 * w - 255 * m;
        let b = bl * bl * (128 - 255) + 255 * m * m - 128 * w * w;
        let c = bl * bl * (255 * m - 128 * w) - bl * (255 * m * m - 128 * w * w);

        // Coinciding points leave denom at zero; the curve then evaluates to
        // NaN or an infinity, which saturates when mapped.
        let denom = denom as f64;
        let curve = Self {
            a: a as f64 / denom,
            b: b as f64 / denom,
            c: c as f64 / denom,
        };
        log::debug!(
            "levels({black}, {mid}, {white}): a = {}, b = {}, c = {}",
            curve.a,
            curve.b,
            curve.c
        );
        Ok(curve)
    }

    /// Raw curve value at `x`.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    /// Curve value at `value`, rounded half-up and clamped into `[0, 255]`.
    pub fn map(&self, value: u32) -> u32 {
        round_half_up(self.eval(value as f64)).clamp(0, LEVELS_MAX as i64) as u32
    }
}

/// Apply the level curve for `(black, mid, white)` to every channel.
///
/// The output max is 255 regardless of the source max.
pub fn adjust_levels(image: &Image, black: i64, mid: i64, white: i64) -> ColorResult<Image> {
    let curve = LevelCurve::new(black, mid, white)?;
    Ok(Image::from_fn(image.width(), image.height(), LEVELS_MAX, |row, col| {
        let [r, g, b] = image.get_pixel_unchecked(row, col).channels();
        Pixel::new(
            curve.map(r) as i64,
            curve.map(g) as i64,
            curve.map(b) as i64,
            LEVELS_MAX,
        )
    }))
}
