//! RGB component operations
//!
//! Component isolation, grayscale derivations, channel split/combine and
//! brightness adjustment. All of these are per-pixel maps and keep the
//! source image's declared max.

use super::Image;
use crate::Pixel;
use crate::error::Result;
use crate::transform::map_pixels;

/// Selector for single-channel views of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Keep red, zero green and blue
    Red,
    /// Keep green, zero red and blue
    Green,
    /// Keep blue, zero red and green
    Blue,
    /// Replicate `max(R, G, B)` into every channel
    Value,
    /// Replicate `floor((R + G + B) / 3)` into every channel
    Intensity,
    /// Replicate the BT.709 luma into every channel
    Luma,
}

impl Channel {
    /// Apply this selector to one pixel.
    pub fn isolate(self, p: Pixel) -> Pixel {
        let max = p.max();
        match self {
            Channel::Red => Pixel::new(p.red() as i64, 0, 0, max),
            Channel::Green => Pixel::new(0, p.green() as i64, 0, max),
            Channel::Blue => Pixel::new(0, 0, p.blue() as i64, max),
            Channel::Value => Pixel::gray(p.value() as i64, max),
            Channel::Intensity => Pixel::gray(p.intensity() as i64, max),
            Channel::Luma => Pixel::gray(p.luma() as i64, max),
        }
    }
}

impl Image {
    /// Produce the single-channel view selected by `channel`.
    pub fn extract_channel(&self, channel: Channel) -> Image {
        map_pixels(self, |p| channel.isolate(p))
    }

    /// Split into red, green and blue component images.
    pub fn split_rgb(&self) -> (Image, Image, Image) {
        (
            self.extract_channel(Channel::Red),
            self.extract_channel(Channel::Green),
            self.extract_channel(Channel::Blue),
        )
    }

    /// Combine the red channel of `red`, the green channel of `green` and the
    /// blue channel of `blue` into one image.
    ///
    /// The result takes its declared max from `red`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DimensionMismatch`] unless all three images
    /// share the same dimensions.
    pub fn combine_rgb(red: &Image, green: &Image, blue: &Image) -> Result<Image> {
        red.check_same_size(green)?;
        red.check_same_size(blue)?;

        let max = red.max();
        Ok(Image::from_fn(red.width(), red.height(), max, |row, col| {
            Pixel::new(
                red.get_pixel_unchecked(row, col).red() as i64,
                green.get_pixel_unchecked(row, col).green() as i64,
                blue.get_pixel_unchecked(row, col).blue() as i64,
                max,
            )
        }))
    }

    /// Add `delta` to every channel of every pixel, clamping into `[0, max]`.
    pub fn brighten(&self, delta: i64) -> Image {
        map_pixels(self, |p| p.brighten(delta))
    }
}
