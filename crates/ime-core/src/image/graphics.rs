//! Simple rendering onto images
//!
//! Line rasterization and solid fills, used for diagnostic plots.
//! Points outside the image are clipped silently.

use super::Image;
use crate::Pixel;

/// Iterator over the points of a line segment, both endpoints included.
///
/// Symmetric integer Bresenham with 8-connectivity: one error term covers
/// both axes, so every octant takes the same path.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i64,
    y: i64,
    end: (i64, i64),
    step: (i64, i64),
    delta: (i64, i64),
    err: i64,
    done: bool,
}

impl LinePoints {
    pub fn new(from: (i64, i64), to: (i64, i64)) -> Self {
        let dx = (to.0 - from.0).abs();
        let dy = -(to.1 - from.1).abs();
        Self {
            x: from.0,
            y: from.1,
            end: to,
            step: ((to.0 - from.0).signum(), (to.1 - from.1).signum()),
            delta: (dx, dy),
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for LinePoints {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let point = (self.x, self.y);
        if point == self.end {
            self.done = true;
            return Some(point);
        }

        let (dx, dy) = self.delta;
        let e2 = 2 * self.err;
        if e2 >= dy {
            self.err += dy;
            self.x += self.step.0;
        }
        if e2 <= dx {
            self.err += dx;
            self.y += self.step.1;
        }
        Some(point)
    }
}

impl Image {
    /// Set every pixel to `pixel`.
    pub fn fill(&mut self, pixel: Pixel) {
        self.pixels.fill(pixel);
    }

    /// Set a pixel at `(x, y)` = `(col, row)` if it lies inside the image.
    pub fn plot(&mut self, x: i64, y: i64, pixel: Pixel) {
        if x < 0 || y < 0 {
            return;
        }
        let (col, row) = (x as usize, y as usize);
        if col < self.width && row < self.height {
            self.pixels[row * self.width + col] = pixel;
        }
    }

    /// Draw a one-pixel line between two `(x, y)` points.
    pub fn draw_line(&mut self, from: (i64, i64), to: (i64, i64), pixel: Pixel) {
        for (x, y) in LinePoints::new(from, to) {
            self.plot(x, y, pixel);
        }
    }
}
