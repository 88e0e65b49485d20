//! Per-channel histograms
//!
//! Builds a 3x256 table of value counts (red, green, blue) from an image.

use crate::frequency::FrequencyTable;
use crate::{ColorError, ColorResult};
use ime_core::Image;

/// Number of bins per channel.
pub const HISTOGRAM_BINS: usize = 256;

/// Number of color channels covered by a [`Histogram`].
pub const CHANNELS: usize = 3;

/// RGB channel histograms
///
/// `bins[c][v]` is the number of pixels whose channel `c` (0 = red,
/// 1 = green, 2 = blue) equals `v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    bins: [[usize; HISTOGRAM_BINS]; CHANNELS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            bins: [[0; HISTOGRAM_BINS]; CHANNELS],
        }
    }
}

impl Histogram {
    /// Wrap an existing table.
    pub fn from_bins(bins: [[usize; HISTOGRAM_BINS]; CHANNELS]) -> Self {
        Self { bins }
    }

    /// Counts for channel `channel` (0 = red, 1 = green, 2 = blue).
    ///
    /// # Panics
    ///
    /// Panics if `channel >= 3`.
    pub fn channel(&self, channel: usize) -> &[usize; HISTOGRAM_BINS] {
        &self.bins[channel]
    }

    pub fn red(&self) -> &[usize; HISTOGRAM_BINS] {
        &self.bins[0]
    }

    pub fn green(&self) -> &[usize; HISTOGRAM_BINS] {
        &self.bins[1]
    }

    pub fn blue(&self) -> &[usize; HISTOGRAM_BINS] {
        &self.bins[2]
    }

    /// The full table.
    pub fn bins(&self) -> &[[usize; HISTOGRAM_BINS]; CHANNELS] {
        &self.bins
    }

    /// Largest count over all channels and bins.
    pub fn max_count(&self) -> usize {
        self.bins.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Index of the highest bin of `channel`, scanning `0..=255`; the lowest
    /// index wins ties.
    pub fn modal_index(&self, channel: usize) -> usize {
        let bins = &self.bins[channel];
        let mut best = 0;
        for (i, &count) in bins.iter().enumerate().skip(1) {
            if count > bins[best] {
                best = i;
            }
        }
        best
    }
}

/// Count the red, green and blue values of every pixel.
///
/// # Errors
///
/// Returns [`ColorError::ValueOutOfRange`] if any channel value exceeds 255.
pub fn histogram(image: &Image) -> ColorResult<Histogram> {
    let mut hist = Histogram::default();

    for (c, bins) in hist.bins.iter_mut().enumerate() {
        let table = FrequencyTable::from_values(image.pixels().iter().map(|p| p.channels()[c]));
        if let Some(value) = table.max_value().filter(|&v| v as usize >= HISTOGRAM_BINS) {
            return Err(ColorError::ValueOutOfRange { value });
        }
        for (value, count) in table.iter() {
            bins[value as usize] = count;
        }
    }

    Ok(hist)
}
