//! ime-color - Color analysis and correction for IME
//!
//! This crate provides:
//!
//! - Frequency tables with deterministic peak selection ([`FrequencyTable`])
//! - RGB histograms ([`histogram`], [`Histogram`])
//! - Histogram-peak color correction ([`color_correct`])
//! - Quadratic level adjustment ([`adjust_levels`], [`LevelCurve`])
//! - Sepia tone ([`sepia`])
//! - Histogram line plots ([`plot_histogram`])
//!
//! Color correction, level adjustment and plots always produce images with
//! a declared max of 255; sepia keeps the source max.

pub mod correct;
mod error;
pub mod frequency;
pub mod histogram;
pub mod levels;
pub mod plot;
pub mod sepia;

pub use correct::{
    CORRECTED_MAX, ColorCorrection, OffsetMap, color_correct, color_correct_with_details,
    offset_maps,
};
pub use error::{ColorError, ColorResult};
pub use frequency::{FrequencyTable, Peak};
pub use histogram::{CHANNELS, HISTOGRAM_BINS, Histogram, histogram};
pub use levels::{LEVELS_MAX, LevelCurve, adjust_levels};
pub use plot::{HistogramPlotOptions, PLOT_MAX, plot_histogram};
pub use sepia::{SEPIA, sepia};
