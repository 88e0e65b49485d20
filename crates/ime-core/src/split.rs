//! Split-view compositor
//!
//! Applies an operation to a left vertical slice of an image and leaves the
//! remaining columns untouched, for side-by-side before/after previews.
//!
//! The result is composed from two fresh pieces (the processed left slice
//! and a copy of the untouched right slice); the input image is never
//! modified.

use crate::error::{Error, Result};
use crate::transform::ImageTransform;
use crate::{Image, round_half_up};

/// Reject percentages outside `[0, 100]`.
pub fn validate_percentage(percentage: f64) -> Result<()> {
    if !(0.0..=100.0).contains(&percentage) {
        return Err(Error::InvalidParameter(format!(
            "percentage must be in [0, 100], got {percentage}"
        )));
    }
    Ok(())
}

/// Column at which a `width`-wide image is split for `percentage`.
///
/// `round(width * percentage / 100)`, halves rounded up.
pub fn split_point(width: usize, percentage: f64) -> Result<usize> {
    validate_percentage(percentage)?;
    let point = round_half_up(percentage / 100.0 * width as f64);
    Ok((point.max(0) as usize).min(width))
}

/// Apply `op` to the left `percentage` of `image` and recompose.
///
/// With `percentage == 0` the operation sees an empty slice and the output
/// equals the input; with `percentage == 100` the whole image is processed.
/// The output keeps the source image's declared max.
///
/// # Errors
///
/// - [`Error::InvalidParameter`] if `percentage` is outside `[0, 100]`
/// - [`Error::DimensionMismatch`] if `op` changes the slice dimensions
/// - any error reported by `op`
pub fn split_preview<F, E>(image: &Image, percentage: f64, op: F) -> std::result::Result<Image, E>
where
    F: FnOnce(&Image) -> std::result::Result<Image, E>,
    E: From<Error>,
{
    let split = split_point(image.width(), percentage)?;
    let height = image.height();
    log::debug!(
        "split_preview: {}x{} at column {} ({}%)",
        image.width(),
        height,
        split,
        percentage
    );

    let left = image.sub_image(0, 0, height, split)?;
    let right = image.sub_image(0, split, height, image.width() - split)?;

    let processed = op(&left)?;
    left.check_same_size(&processed)?;

    Ok(Image::join_columns(&processed, &right, image.max())?)
}

/// [`split_preview`] driven by an [`ImageTransform`].
pub fn split_preview_with<T>(image: &Image, percentage: f64, transform: &T) -> std::result::Result<Image, T::Error>
where
    T: ImageTransform + ?Sized,
{
    split_preview(image, percentage, |left| transform.apply(left))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::PixelMap;
    use crate::{Channel, Pixel};

    fn gradient() -> Image {
        Image::from_fn(10, 3, 255, |r, c| {
            Pixel::new((c * 20) as i64, (r * 40) as i64, 7, 255)
        })
    }

    #[test]
    fn test_split_point_rounding() {
        assert_eq!(split_point(10, 0.0).unwrap(), 0);
        assert_eq!(split_point(10, 25.0).unwrap(), 3);
        assert_eq!(split_point(10, 24.0).unwrap(), 2);
        assert_eq!(split_point(10, 100.0).unwrap(), 10);
        assert!(split_point(10, -0.1).is_err());
        assert!(split_point(10, 100.5).is_err());
    }

    #[test]
    fn test_split_zero_is_identity() {
        let img = gradient();
        let out =
            split_preview(&img, 0.0, |part| Ok::<_, Error>(part.extract_channel(Channel::Red)))
                .unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_split_full_matches_whole_image() {
        let img = gradient();
        let out = split_preview(&img, 100.0, |part| Ok::<_, Error>(part.brighten(30))).unwrap();
        assert_eq!(out, img.brighten(30));
    }

    #[test]
    fn test_split_half_processes_left_only() {
        let img = gradient();
        let op = PixelMap(|p: Pixel| Pixel::black(p.max()));
        let out = split_preview_with(&img, 50.0, &op).unwrap();
        for row in 0..3 {
            for col in 0..5 {
                assert_eq!(out.get_pixel(row, col).unwrap(), Pixel::black(255));
            }
            for col in 5..10 {
                assert_eq!(out.get_pixel(row, col).unwrap(), img.get_pixel(row, col).unwrap());
            }
        }
    }

    #[test]
    fn test_split_rejects_resizing_operation() {
        let img = gradient();
        let result = split_preview(&img, 50.0, |_| Ok::<_, Error>(Image::new(1, 1, 255)));
        assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
    }
}
