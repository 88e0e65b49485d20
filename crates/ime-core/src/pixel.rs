//! RGB pixel value type
//!
//! A [`Pixel`] holds three channels and the maximum value they may take.
//! Channels are clamped into `[0, max]` whenever a pixel is built, so every
//! arithmetic operation that produces a pixel goes through the same clamp.
//!
//! # Equality
//!
//! Two pixels are equal when their red, green and blue channels match.
//! The `max` bound takes no part in equality, and `Hash` follows the same
//! rule so that equal pixels always hash equally.

use std::hash::{Hash, Hasher};

/// ITU-R BT.709 luma weights for red, green and blue.
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Round to the nearest integer, with halves rounded toward positive infinity.
///
/// NaN maps to 0 and infinities saturate to the `i64` range, so the result
/// can always be fed into [`Pixel::new`].
#[inline]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// An RGB sample with its own channel bound.
#[derive(Debug, Clone, Copy)]
pub struct Pixel {
    red: u32,
    green: u32,
    blue: u32,
    max: u32,
}

impl Pixel {
    /// Create a pixel, clamping each channel into `[0, max]`.
    pub fn new(red: i64, green: i64, blue: i64, max: u32) -> Self {
        Self {
            red: clamp_channel(red, max),
            green: clamp_channel(green, max),
            blue: clamp_channel(blue, max),
            max,
        }
    }

    /// Create a pixel from a `[red, green, blue]` array.
    pub fn from_channels(channels: [i64; 3], max: u32) -> Self {
        Self::new(channels[0], channels[1], channels[2], max)
    }

    /// A black pixel with the given bound.
    pub fn black(max: u32) -> Self {
        Self::new(0, 0, 0, max)
    }

    /// A pixel with all three channels set to `level`.
    pub fn gray(level: i64, max: u32) -> Self {
        Self::new(level, level, level, max)
    }

    #[inline]
    pub fn red(&self) -> u32 {
        self.red
    }

    #[inline]
    pub fn green(&self) -> u32 {
        self.green
    }

    #[inline]
    pub fn blue(&self) -> u32 {
        self.blue
    }

    /// The upper bound for this pixel's channels.
    #[inline]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Channels as `[red, green, blue]`.
    #[inline]
    pub fn channels(&self) -> [u32; 3] {
        [self.red, self.green, self.blue]
    }

    /// Weighted brightness, `round(0.2126 R + 0.7152 G + 0.0722 B)`.
    pub fn luma(&self) -> u32 {
        let weighted: f64 = self
            .channels()
            .iter()
            .zip(LUMA_WEIGHTS)
            .map(|(&c, w)| w * c as f64)
            .sum();
        round_half_up(weighted) as u32
    }

    /// Unweighted channel mean, truncated toward zero.
    pub fn intensity(&self) -> u32 {
        let sum = u64::from(self.red) + u64::from(self.green) + u64::from(self.blue);
        (sum / 3) as u32
    }

    /// Largest of the three channels.
    pub fn value(&self) -> u32 {
        self.red.max(self.green).max(self.blue)
    }

    /// Add `delta` to every channel, clamping the result into `[0, max]`.
    pub fn brighten(&self, delta: i64) -> Self {
        Self::new(
            i64::from(self.red).saturating_add(delta),
            i64::from(self.green).saturating_add(delta),
            i64::from(self.blue).saturating_add(delta),
            self.max,
        )
    }
}

impl PartialEq for Pixel {
    fn eq(&self, other: &Self) -> bool {
        self.channels() == other.channels()
    }
}

impl Eq for Pixel {}

impl Hash for Pixel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.channels().hash(state);
    }
}

#[inline]
fn clamp_channel(value: i64, max: u32) -> u32 {
    value.clamp(0, max as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_clamps_channels() {
        let p = Pixel::new(-20, 300, 128, 255);
        assert_eq!(p.channels(), [0, 255, 128]);
        assert_eq!(p.max(), 255);
    }

    #[test]
    fn test_clamp_respects_small_max() {
        let p = Pixel::new(10, 20, 30, 15);
        assert_eq!(p.channels(), [10, 15, 15]);
    }

    #[test]
    fn test_luma_rounds() {
        // 0.2126*100 + 0.7152*50 + 0.0722*200 = 21.26 + 35.76 + 14.44 = 71.46
        assert_eq!(Pixel::new(100, 50, 200, 255).luma(), 71);
        assert_eq!(Pixel::new(255, 255, 255, 255).luma(), 255);
    }

    #[test]
    fn test_intensity_truncates() {
        // (10 + 10 + 11) / 3 = 10.33 -> 10, (2 + 2 + 1) / 3 = 1.67 -> 1
        assert_eq!(Pixel::new(10, 10, 11, 255).intensity(), 10);
        assert_eq!(Pixel::new(2, 2, 1, 255).intensity(), 1);
    }

    #[test]
    fn test_intensity_full_range() {
        let p = Pixel::new(u32::MAX as i64, u32::MAX as i64, u32::MAX as i64, u32::MAX);
        assert_eq!(p.intensity(), u32::MAX);
    }

    #[test]
    fn test_value_is_channel_max() {
        assert_eq!(Pixel::new(12, 240, 7, 255).value(), 240);
    }

    #[test]
    fn test_brighten_clamps_both_ends() {
        let p = Pixel::new(250, 100, 3, 255);
        assert_eq!(p.brighten(10).channels(), [255, 110, 13]);
        assert_eq!(p.brighten(-10).channels(), [240, 90, 0]);
    }

    #[test]
    fn test_brighten_extreme_delta() {
        let p = Pixel::new(250, 100, 3, 255);
        assert_eq!(p.brighten(i64::MAX).channels(), [255, 255, 255]);
        assert_eq!(p.brighten(i64::MIN).channels(), [0, 0, 0]);
    }

    #[test]
    fn test_equality_ignores_max() {
        let a = Pixel::new(1, 2, 3, 255);
        let b = Pixel::new(1, 2, 3, 1023);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(f64::NAN), 0);
        assert_eq!(round_half_up(f64::INFINITY), i64::MAX);
    }
}
