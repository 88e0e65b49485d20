//! Histogram-peak color correction
//!
//! Aligns the modal value of each channel on the common average peak:
//!
//! 1. Build the RGB [`Histogram`].
//! 2. Take each channel's modal index and their floored mean, the average
//!    peak.
//! 3. Shift every channel by `average_peak - modal_index`, recording the
//!    shift in an [`OffsetMap`] only for targets strictly inside `(0, 256)`.
//! 4. Rebuild each pixel through the maps. Values without an entry become 0,
//!    they are not clamped.
//!
//! The analysis step ([`offset_maps`]) returns its result explicitly so the
//! reconstruction step needs no shared state.

use crate::ColorResult;
use crate::histogram::{CHANNELS, HISTOGRAM_BINS, Histogram, histogram};
use ime_core::{Image, Pixel};

/// Declared max of every color-corrected image.
pub const CORRECTED_MAX: u32 = 255;

/// Per-channel mapping from an original bin to its shifted bin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetMap {
    offset: i64,
    targets: [Option<u8>; HISTOGRAM_BINS],
}

impl OffsetMap {
    /// Map every bin `i` to `i + offset` when the result lies in `1..=255`.
    pub fn with_offset(offset: i64) -> Self {
        let mut targets = [None; HISTOGRAM_BINS];
        for (i, target) in targets.iter_mut().enumerate() {
            let shifted = i as i64 + offset;
            if shifted > 0 && shifted < HISTOGRAM_BINS as i64 {
                *target = Some(shifted as u8);
            }
        }
        Self { offset, targets }
    }

    /// Shift applied by this map.
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Shifted bin for `value`, or `None` if it was not recorded.
    pub fn get(&self, value: u32) -> Option<u32> {
        self.targets
            .get(value as usize)
            .copied()
            .flatten()
            .map(u32::from)
    }

    /// Corrected value for `value`: its shifted bin, or 0 when unmapped.
    pub fn apply(&self, value: u32) -> u32 {
        self.get(value).unwrap_or(0)
    }

    /// Recorded `(original, shifted)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.targets
            .iter()
            .enumerate()
            .filter_map(|(i, t)| t.map(|t| (i as u32, u32::from(t))))
    }

    /// Number of recorded bins.
    pub fn len(&self) -> usize {
        self.targets.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything produced by a color correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCorrection {
    /// Corrected image, max 255
    pub image: Image,
    /// Histogram of the input image
    pub histogram: Histogram,
    /// Input histogram with each bin moved through the offset maps
    pub corrected_histogram: Histogram,
    /// Red, green and blue offset maps
    pub offsets: [OffsetMap; CHANNELS],
    /// Modal index of each channel
    pub peaks: [usize; CHANNELS],
    /// Floored mean of `peaks`
    pub average_peak: usize,
}

/// Derive the per-channel offset maps and the corrected histogram from
/// `hist`.
pub fn offset_maps(hist: &Histogram) -> ([OffsetMap; CHANNELS], Histogram) {
    let peaks: [usize; CHANNELS] = std::array::from_fn(|c| hist.modal_index(c));
    let average_peak = average_peak(&peaks);

    let offsets: [OffsetMap; CHANNELS] =
        std::array::from_fn(|c| OffsetMap::with_offset(average_peak as i64 - peaks[c] as i64));

    let mut corrected = [[0usize; HISTOGRAM_BINS]; CHANNELS];
    for (c, map) in offsets.iter().enumerate() {
        for (from, to) in map.iter() {
            corrected[c][to as usize] = hist.channel(c)[from as usize];
        }
    }

    (offsets, Histogram::from_bins(corrected))
}

fn average_peak(peaks: &[usize; CHANNELS]) -> usize {
    peaks.iter().sum::<usize>() / CHANNELS
}

/// Color-correct `image` by aligning its channel histogram peaks.
///
/// # Errors
///
/// Returns [`crate::ColorError::ValueOutOfRange`] if a channel value
/// exceeds 255.
pub fn color_correct(image: &Image) -> ColorResult<Image> {
    Ok(color_correct_with_details(image)?.image)
}

/// [`color_correct`] that also returns the histograms and offset maps.
pub fn color_correct_with_details(image: &Image) -> ColorResult<ColorCorrection> {
    let hist = histogram(image)?;
    let peaks: [usize; CHANNELS] = std::array::from_fn(|c| hist.modal_index(c));
    let average_peak = average_peak(&peaks);
    let (offsets, corrected_histogram) = offset_maps(&hist);

    log::debug!(
        "color_correct: peaks {:?}, average peak {}, offsets [{}, {}, {}]",
        peaks,
        average_peak,
        offsets[0].offset(),
        offsets[1].offset(),
        offsets[2].offset()
    );

    let corrected = Image::from_fn(image.width(), image.height(), CORRECTED_MAX, |row, col| {
        let [r, g, b] = image.get_pixel_unchecked(row, col).channels();
        Pixel::new(
            offsets[0].apply(r) as i64,
            offsets[1].apply(g) as i64,
            offsets[2].apply(b) as i64,
            CORRECTED_MAX,
        )
    });

    Ok(ColorCorrection {
        image: corrected,
        histogram: hist,
        corrected_histogram,
        offsets,
        peaks,
        average_peak,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_map_bounds() {
        let map = OffsetMap::with_offset(-10);
        assert_eq!(map.get(10), None);
        assert_eq!(map.get(11), Some(1));
        assert_eq!(map.get(255), Some(245));
        assert_eq!(map.len(), 245);

        let map = OffsetMap::with_offset(5);
        assert_eq!(map.get(0), Some(5));
        assert_eq!(map.get(250), Some(255));
        assert_eq!(map.get(251), None);
        assert_eq!(map.apply(251), 0);
    }

    #[test]
    fn test_zero_offset_drops_zero() {
        let map = OffsetMap::with_offset(0);
        assert_eq!(map.apply(0), 0);
        assert_eq!(map.apply(1), 1);
        assert_eq!(map.apply(255), 255);
    }

    #[test]
    fn test_aligns_peaks() {
        // Peaks: red 100, green 40, blue 70 -> average 70
        let img = Image::from_samples(2, 1, 255, &[(100, 40, 70), (100, 40, 70)]).unwrap();
        let result = color_correct_with_details(&img).unwrap();
        assert_eq!(result.peaks, [100, 40, 70]);
        assert_eq!(result.average_peak, 70);
        assert_eq!(result.offsets[0].offset(), -30);
        assert_eq!(result.offsets[1].offset(), 30);
        assert_eq!(result.offsets[2].offset(), 0);
        assert_eq!(result.image.get_pixel(0, 0).unwrap().channels(), [70, 70, 70]);
        assert_eq!(result.corrected_histogram.red()[70], 2);
        assert_eq!(result.corrected_histogram.red()[100], 0);
    }

    #[test]
    fn test_values_shifted_out_of_range_become_zero() {
        // Red peak 200, green peak 20, blue peak 20 -> average 80, red offset -120
        let img = Image::from_samples(
            3,
            1,
            255,
            &[(200, 20, 20), (200, 20, 20), (50, 30, 30)],
        )
        .unwrap();
        let out = color_correct(&img).unwrap();
        // 50 - 120 < 0: dropped to 0 rather than clamped
        assert_eq!(out.get_pixel(0, 2).unwrap().red(), 0);
        assert_eq!(out.get_pixel(0, 0).unwrap().red(), 80);
        assert_eq!(out.get_pixel(0, 0).unwrap().green(), 80);
    }

    #[test]
    fn test_output_max_is_255() {
        // Peaks: red 10, green 20, blue 30 -> average 20
        let img = Image::from_fn(2, 2, 511, |row, col| {
            if (row, col) == (1, 1) {
                Pixel::new(250, 20, 5, 511)
            } else {
                Pixel::new(10, 20, 30, 511)
            }
        });
        let out = color_correct(&img).unwrap();
        assert_eq!(out.max(), CORRECTED_MAX);
        assert_eq!(out.get_pixel(0, 0).unwrap().channels(), [20, 20, 20]);
        // Red 250 -> 260 and blue 5 -> -5 fall outside (0, 256)
        assert_eq!(out.get_pixel(1, 1).unwrap().channels(), [0, 20, 0]);
    }

    #[test]
    fn test_input_unchanged() {
        let img = Image::from_samples(2, 1, 255, &[(1, 2, 3), (4, 5, 6)]).unwrap();
        let copy = img.clone();
        let _ = color_correct(&img).unwrap();
        assert_eq!(img, copy);
    }
}
