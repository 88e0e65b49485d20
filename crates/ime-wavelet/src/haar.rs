//! Haar wavelet transform
//!
//! The 1D step pairs adjacent values `(a, b)` into `(a + b) / sqrt(2)` and
//! `(a - b) / sqrt(2)`, writing all averages first and all differences
//! after them. The 2D transform applies that step to every row and then
//! every column of the top-left `size x size` block for
//! `size = S, S/2, ..., 2`. The inverse walks the sizes back up, columns
//! before rows, and undoes each step exactly.

use crate::plane::Plane;
use crate::{WaveletError, WaveletResult};
use std::f64::consts::SQRT_2;

/// Forward 1D Haar step. Sequences shorter than 2 are returned unchanged.
pub fn forward_1d(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n < 2 {
        return values.to_vec();
    }
    let half = n / 2;
    let mut out = vec![0.0; n];
    for i in 0..half {
        let (a, b) = (values[2 * i], values[2 * i + 1]);
        out[i] = (a + b) / SQRT_2;
        out[half + i] = (a - b) / SQRT_2;
    }
    out
}

/// Inverse of [`forward_1d`].
pub fn inverse_1d(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n < 2 {
        return values.to_vec();
    }
    let half = n / 2;
    let mut out = vec![0.0; n];
    for i in 0..half {
        let (avg, diff) = (values[i], values[half + i]);
        out[2 * i] = (avg + diff) / SQRT_2;
        out[2 * i + 1] = (avg - diff) / SQRT_2;
    }
    out
}

/// Side of the square power-of-two plane that holds a `width x height`
/// grid.
pub fn padded_size(width: usize, height: usize) -> usize {
    width.max(height).next_power_of_two()
}

fn transform_rows(plane: &mut Plane, size: usize, step: fn(&[f64]) -> Vec<f64>) {
    for row in 0..size {
        let values: Vec<f64> = (0..size).map(|col| plane.at(row, col)).collect();
        for (col, v) in step(&values).into_iter().enumerate() {
            plane.set_at(row, col, v);
        }
    }
}

fn transform_cols(plane: &mut Plane, size: usize, step: fn(&[f64]) -> Vec<f64>) {
    for col in 0..size {
        let values: Vec<f64> = (0..size).map(|row| plane.at(row, col)).collect();
        for (row, v) in step(&values).into_iter().enumerate() {
            plane.set_at(row, col, v);
        }
    }
}

/// Zero-pad `plane` to its [`padded_size`] and apply the forward 2D
/// transform.
pub fn transform(plane: &Plane) -> Plane {
    let size = padded_size(plane.width(), plane.height());
    let mut coeffs = plane.padded(size);

    let mut block = size;
    while block > 1 {
        transform_rows(&mut coeffs, block, forward_1d);
        transform_cols(&mut coeffs, block, forward_1d);
        block /= 2;
    }
    coeffs
}

/// Inverse 2D transform of a square power-of-two coefficient plane.
///
/// # Errors
///
/// Returns [`WaveletError::NotPowerOfTwo`] if `coeffs` is not square or its
/// side is not a power of two.
pub fn invert(coeffs: &Plane) -> WaveletResult<Plane> {
    let (width, height) = (coeffs.width(), coeffs.height());
    if width != height || !width.is_power_of_two() {
        return Err(WaveletError::NotPowerOfTwo { width, height });
    }

    let mut plane = coeffs.clone();
    let mut block = 2;
    while block <= width {
        transform_cols(&mut plane, block, inverse_1d);
        transform_rows(&mut plane, block, inverse_1d);
        block *= 2;
    }
    Ok(plane)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_1d_layout() {
        let out = forward_1d(&[4.0, 2.0, 6.0, 6.0]);
        let expected = [6.0 / SQRT_2, 12.0 / SQRT_2, 2.0 / SQRT_2, 0.0];
        for (a, b) in out.iter().zip(expected) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_1d_single_value_unchanged() {
        assert_eq!(forward_1d(&[7.5]), vec![7.5]);
        assert_eq!(inverse_1d(&[7.5]), vec![7.5]);
        assert!(forward_1d(&[]).is_empty());
    }

    #[test]
    fn test_1d_round_trip() {
        let values = [3.0, -1.5, 8.25, 0.0, 12.0, 5.0, -7.0, 2.0];
        let back = inverse_1d(&forward_1d(&values));
        for (a, b) in back.iter().zip(values) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_padded_size() {
        assert_eq!(padded_size(2, 2), 2);
        assert_eq!(padded_size(5, 3), 8);
        assert_eq!(padded_size(1, 1), 1);
        assert_eq!(padded_size(0, 0), 1);
        assert_eq!(padded_size(16, 9), 16);
    }

    #[test]
    fn test_2x2_red_channel() {
        let red = Plane::from_rows(&[[243.0, 90.0], [33.0, 12.0]]).unwrap();
        let coeffs = transform(&red);
        let expected = [189.0, 87.0, 144.0, 66.0];
        for (a, b) in coeffs.data().iter().zip(expected) {
            assert!((a - b).abs() < 0.01, "{a} vs {b}");
        }
    }

    #[test]
    fn test_transform_pads() {
        let p = Plane::from_rows(&[[1.0, 2.0, 3.0]]).unwrap();
        let coeffs = transform(&p);
        assert_eq!((coeffs.width(), coeffs.height()), (4, 4));
        // Energy is preserved by the orthonormal transform
        let energy: f64 = coeffs.data().iter().map(|v| v * v).sum();
        assert!((energy - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_invert_rejects_non_square() {
        assert!(matches!(
            invert(&Plane::new(4, 2)),
            Err(WaveletError::NotPowerOfTwo { width: 4, height: 2 })
        ));
        assert!(invert(&Plane::new(3, 3)).is_err());
        assert!(invert(&Plane::new(1, 1)).is_ok());
    }

    #[test]
    fn test_2d_round_trip() {
        let p = Plane::from_rows(&[
            [1.0, 5.0, -2.0, 4.0],
            [0.5, 9.0, 3.0, 3.0],
            [8.0, -6.0, 2.5, 1.0],
            [7.0, 7.0, 0.0, 11.0],
        ])
        .unwrap();
        let back = invert(&transform(&p)).unwrap();
        assert!(p.max_abs_diff(&back).unwrap() < 1e-9);
    }
}
