//! Rectangular region operations
//!
//! Extracting sub-regions, writing a region back into a host image, and
//! joining two images side by side.

use super::Image;
use crate::error::{Error, Result};

impl Image {
    /// Extract a `height x width` region whose top-left corner is `(row, col)`.
    ///
    /// Empty regions are allowed and produce a zero-sized image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the region extends past the
    /// image; the reported position is the first cell outside it.
    pub fn sub_image(&self, row: usize, col: usize, height: usize, width: usize) -> Result<Image> {
        let row_end = row + height;
        let col_end = col + width;
        if row_end > self.height || col_end > self.width {
            return Err(Error::IndexOutOfBounds {
                row: row_end.saturating_sub(1).max(row),
                col: col_end.saturating_sub(1).max(col),
                height: self.height,
                width: self.width,
            });
        }

        Ok(Image::from_fn(width, height, self.max, |i, j| {
            self.get_pixel_unchecked(row + i, col + j)
        }))
    }

    /// Extract the region covering rows `row_start..=row_end` and columns
    /// `col_start..=col_end`.
    ///
    /// The result has dimensions `(col_end - col_start + 1) x
    /// (row_end - row_start + 1)`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] if a start exceeds its end
    /// - [`Error::IndexOutOfBounds`] if an end lies outside the image
    pub fn get_portion(
        &self,
        row_start: usize,
        row_end: usize,
        col_start: usize,
        col_end: usize,
    ) -> Result<Image> {
        if row_start > row_end || col_start > col_end {
            return Err(Error::InvalidParameter(format!(
                "portion rows {row_start}..={row_end}, cols {col_start}..={col_end} are reversed"
            )));
        }
        self.sub_image(
            row_start,
            col_start,
            row_end - row_start + 1,
            col_end - col_start + 1,
        )
    }

    /// Overwrite the region starting at `(row_start, col_start)` with
    /// `portion`, pixel by pixel, without resizing this image.
    ///
    /// Bounds are checked before any pixel is written, so a failed call
    /// leaves the image untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `portion` does not fit.
    pub fn replace_portion(&mut self, row_start: usize, col_start: usize, portion: &Image) -> Result<()> {
        if portion.is_empty() {
            return Ok(());
        }
        let last_row = row_start + portion.height - 1;
        let last_col = col_start + portion.width - 1;
        if last_row >= self.height || last_col >= self.width {
            return Err(Error::IndexOutOfBounds {
                row: last_row,
                col: last_col,
                height: self.height,
                width: self.width,
            });
        }

        for i in 0..portion.height {
            let dst = (row_start + i) * self.width + col_start;
            self.pixels[dst..dst + portion.width].copy_from_slice(portion.row(i));
        }
        Ok(())
    }

    /// Build a new image with `left` in the first columns and `right` after it.
    ///
    /// The result carries the declared `max` given by the caller; pixels are
    /// copied as they are.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the heights differ.
    pub fn join_columns(left: &Image, right: &Image, max: u32) -> Result<Image> {
        if left.height != right.height {
            return Err(Error::DimensionMismatch {
                expected: (right.width, left.height),
                actual: right.dimensions(),
            });
        }

        let width = left.width + right.width;
        let mut pixels = Vec::with_capacity(width * left.height);
        for row in 0..left.height {
            pixels.extend_from_slice(left.row(row));
            pixels.extend_from_slice(right.row(row));
        }

        Ok(Image {
            width,
            height: left.height,
            max,
            pixels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pixel;

    fn numbered(width: usize, height: usize) -> Image {
        Image::from_fn(width, height, 255, |r, c| {
            Pixel::new((r * 10 + c) as i64, 0, 0, 255)
        })
    }

    #[test]
    fn test_get_portion_inclusive() {
        let img = numbered(5, 4);
        let portion = img.get_portion(1, 2, 2, 4).unwrap();
        assert_eq!(portion.dimensions(), (3, 2));
        assert_eq!(portion.get_pixel(0, 0).unwrap().red(), 12);
        assert_eq!(portion.get_pixel(1, 2).unwrap().red(), 24);
    }

    #[test]
    fn test_get_portion_single_pixel() {
        let img = numbered(3, 3);
        let portion = img.get_portion(2, 2, 0, 0).unwrap();
        assert_eq!(portion.dimensions(), (1, 1));
        assert_eq!(portion.get_pixel(0, 0).unwrap().red(), 20);
    }

    #[test]
    fn test_get_portion_out_of_bounds() {
        let img = numbered(3, 3);
        assert!(matches!(
            img.get_portion(0, 3, 0, 1),
            Err(Error::IndexOutOfBounds { .. })
        ));
        assert!(matches!(
            img.get_portion(2, 1, 0, 1),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_sub_image_empty() {
        let img = numbered(3, 2);
        let empty = img.sub_image(0, 0, 2, 0).unwrap();
        assert_eq!(empty.dimensions(), (0, 2));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_replace_portion() {
        let mut img = Image::new(4, 3, 255);
        let patch = Image::from_fn(2, 2, 255, |_, _| Pixel::gray(200, 255));
        img.replace_portion(1, 2, &patch).unwrap();
        assert_eq!(img.get_pixel(1, 2).unwrap().red(), 200);
        assert_eq!(img.get_pixel(2, 3).unwrap().red(), 200);
        assert_eq!(img.get_pixel(0, 2).unwrap().red(), 0);
        assert_eq!(img.get_pixel(1, 1).unwrap().red(), 0);
        assert_eq!(img.dimensions(), (4, 3));
    }

    #[test]
    fn test_replace_portion_past_bounds_fails_cleanly() {
        let mut img = Image::new(3, 3, 255);
        let before = img.clone();
        let patch = Image::from_fn(2, 2, 255, |_, _| Pixel::gray(9, 255));
        assert!(matches!(
            img.replace_portion(2, 2, &patch),
            Err(Error::IndexOutOfBounds { .. })
        ));
        assert_eq!(img, before);
    }

    #[test]
    fn test_join_columns() {
        let img = numbered(5, 2);
        let left = img.sub_image(0, 0, 2, 2).unwrap();
        let right = img.sub_image(0, 2, 2, 3).unwrap();
        let joined = Image::join_columns(&left, &right, img.max()).unwrap();
        assert_eq!(joined, img);
    }

    #[test]
    fn test_join_columns_height_mismatch() {
        let a = Image::new(2, 2, 255);
        let b = Image::new(2, 3, 255);
        assert!(Image::join_columns(&a, &b, 255).is_err());
    }
}
