//! Histogram line plots
//!
//! Renders a [`Histogram`] as three polylines (red, then green, then blue)
//! over a light-gray reference grid on a white background.

use crate::histogram::{CHANNELS, HISTOGRAM_BINS, Histogram};
use ime_core::{Image, Pixel};

/// Declared max of every plot image.
pub const PLOT_MAX: u32 = 255;

const GRID_COLOR: (i64, i64, i64) = (192, 192, 192);
const CHANNEL_COLORS: [(i64, i64, i64); CHANNELS] = [(255, 0, 0), (0, 255, 0), (0, 0, 255)];

/// Options for histogram plots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramPlotOptions {
    /// Plot width in pixels
    pub width: usize,
    /// Plot height in pixels
    pub height: usize,
    /// Distance between grid lines; 0 disables the grid
    pub grid_spacing: usize,
}

impl Default for HistogramPlotOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            grid_spacing: 10,
        }
    }
}

fn rgb(color: (i64, i64, i64)) -> Pixel {
    Pixel::new(color.0, color.1, color.2, PLOT_MAX)
}

/// Render `hist` as a line plot.
///
/// Bin `i` sits at `x = floor(i * width / 256)`; a count `n` sits at
/// `y = height - floor(n * height / max_count)`, where `max_count` spans all
/// three channels. Points outside the image are clipped. An all-zero
/// histogram yields the grid alone.
pub fn plot_histogram(hist: &Histogram, options: &HistogramPlotOptions) -> Image {
    let (width, height) = (options.width, options.height);
    let mut plot = Image::new(width, height, PLOT_MAX);
    plot.fill(Pixel::gray(255, PLOT_MAX));

    if options.grid_spacing > 0 {
        let grid = rgb(GRID_COLOR);
        let (w, h) = (width as i64, height as i64);
        for x in (0..=width).step_by(options.grid_spacing) {
            plot.draw_line((x as i64, 0), (x as i64, h), grid);
        }
        for y in (0..=height).step_by(options.grid_spacing) {
            plot.draw_line((0, y as i64), (w, y as i64), grid);
        }
    }

    let max_count = hist.max_count();
    if max_count == 0 {
        return plot;
    }

    let scale_x = width as f64 / HISTOGRAM_BINS as f64;
    let scale_y = height as f64 / max_count as f64;
    let point = |i: usize, count: usize| {
        let x = (i as f64 * scale_x) as i64;
        let y = height as i64 - (count as f64 * scale_y) as i64;
        (x, y)
    };

    for (c, color) in CHANNEL_COLORS.iter().enumerate() {
        let line = rgb(*color);
        let bins = hist.channel(c);
        for i in 1..HISTOGRAM_BINS {
            plot.draw_line(point(i - 1, bins[i - 1]), point(i, bins[i]), line);
        }
    }

    plot
}
