//! Whole-image operations as values
//!
//! [`Operation`] names every stateless image operation so callers can pick
//! one at runtime, run it on a whole image or drive the split-view
//! compositor with it.

use crate::{ImeError, ImeResult};
use ime_color::{adjust_levels, color_correct, sepia};
use ime_core::{Channel, Image, ImageTransform, split_preview_with};
use ime_filter::{blur, sharpen};
use ime_wavelet::compress;
use std::fmt;

/// A whole-image operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    /// Isolate a channel or derive a grayscale view
    Component(Channel),
    FlipHorizontal,
    FlipVertical,
    /// Add a signed delta to every channel
    Brighten(i64),
    Blur,
    Sharpen,
    Sepia,
    ColorCorrect,
    Levels { black: i64, mid: i64, white: i64 },
    /// Haar compression by percentage
    Compress(f64),
}

impl Operation {
    /// Short lowercase name, as used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Component(Channel::Red) => "red-component",
            Operation::Component(Channel::Green) => "green-component",
            Operation::Component(Channel::Blue) => "blue-component",
            Operation::Component(Channel::Value) => "value-component",
            Operation::Component(Channel::Intensity) => "intensity-component",
            Operation::Component(Channel::Luma) => "luma-component",
            Operation::FlipHorizontal => "horizontal-flip",
            Operation::FlipVertical => "vertical-flip",
            Operation::Brighten(_) => "brighten",
            Operation::Blur => "blur",
            Operation::Sharpen => "sharpen",
            Operation::Sepia => "sepia",
            Operation::ColorCorrect => "color-correct",
            Operation::Levels { .. } => "levels-adjust",
            Operation::Compress(_) => "compress",
        }
    }

    /// Whether the output always has a declared max of 255.
    pub fn normalizes_max(&self) -> bool {
        matches!(
            self,
            Operation::ColorCorrect | Operation::Levels { .. } | Operation::Compress(_)
        )
    }

    /// Apply this operation to the left `percentage` of `image` only.
    pub fn preview(&self, image: &Image, percentage: f64) -> ImeResult<Image> {
        split_preview_with(image, percentage, self)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Brighten(delta) => write!(f, "brighten {delta}"),
            Operation::Levels { black, mid, white } => {
                write!(f, "levels-adjust {black} {mid} {white}")
            }
            Operation::Compress(p) => write!(f, "compress {p}"),
            other => f.write_str(other.name()),
        }
    }
}

impl ImageTransform for Operation {
    type Error = ImeError;

    fn apply(&self, image: &Image) -> ImeResult<Image> {
        log::debug!(
            "{}: {}x{} max {}",
            self,
            image.width(),
            image.height(),
            image.max()
        );
        let out = match *self {
            Operation::Component(channel) => image.extract_channel(channel),
            Operation::FlipHorizontal => image.flip_horizontal(),
            Operation::FlipVertical => image.flip_vertical(),
            Operation::Brighten(delta) => image.brighten(delta),
            Operation::Blur => blur(image),
            Operation::Sharpen => sharpen(image),
            Operation::Sepia => sepia(image),
            Operation::ColorCorrect => color_correct(image)?,
            Operation::Levels { black, mid, white } => adjust_levels(image, black, mid, white)?,
            Operation::Compress(percentage) => compress(image, percentage)?,
        };
        Ok(out)
    }
}
