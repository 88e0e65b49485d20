//! Mirror operations

use super::Image;

impl Image {
    /// Mirror left-right: column `j` of the result is column `width - 1 - j`
    /// of the source.
    pub fn flip_horizontal(&self) -> Image {
        let w = self.width();
        Image::from_fn(w, self.height(), self.max(), |row, col| {
            self.get_pixel_unchecked(row, w - 1 - col)
        })
    }

    /// Mirror top-bottom: row `i` of the result is row `height - 1 - i` of
    /// the source.
    pub fn flip_vertical(&self) -> Image {
        let h = self.height();
        Image::from_fn(self.width(), h, self.max(), |row, col| {
            self.get_pixel_unchecked(h - 1 - row, col)
        })
    }
}
