//! Sepia tone

use ime_core::{ColorMatrix, Image, linear_color_transform};

/// Sepia color matrix.
pub const SEPIA: ColorMatrix = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Apply the [`SEPIA`] matrix; the source max is kept.
pub fn sepia(image: &Image) -> Image {
    linear_color_transform(image, &SEPIA)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ime_core::Pixel;

    #[test]
    fn test_sepia_values() {
        let img = Image::from_samples(2, 1, 255, &[(100, 50, 20), (255, 255, 255)]).unwrap();
        let out = sepia(&img);
        // 39.3 + 38.45 + 3.78 = 81.53, 34.9 + 34.3 + 3.36 = 72.56, 27.2 + 26.7 + 2.62 = 56.52
        assert_eq!(out.get_pixel(0, 0).unwrap().channels(), [82, 73, 57]);
        assert_eq!(out.get_pixel(0, 1).unwrap().channels(), [255, 255, 239]);
        assert_eq!(out.get_pixel(0, 1).unwrap(), Pixel::new(255, 255, 239, 255));
    }
}
