//! Convolution kernels
//!
//! A [`Kernel`] is a square, odd-sized weight matrix whose center cell
//! sits over the output pixel.

use crate::{FilterError, FilterResult};

/// A square convolution kernel of odd size.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Side length (always odd)
    size: usize,
    /// Kernel weights (row-major order)
    data: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `size` is even or zero, or
    /// if `data` does not hold `size * size` weights.
    pub fn from_slice(size: usize, data: &[f64]) -> FilterResult<Self> {
        if size % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel size must be odd, got {size}"
            )));
        }
        if data.len() != size * size {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} weights for a {size}x{size} kernel, got {}",
                size * size,
                data.len()
            )));
        }
        Ok(Self {
            size,
            data: data.to_vec(),
        })
    }

    /// Create a kernel from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] unless the rows form an odd
    /// square.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> FilterResult<Self> {
        let size = rows.len();
        if let Some(bad) = rows.iter().find(|r| r.as_ref().len() != size) {
            return Err(FilterError::InvalidKernel(format!(
                "kernel must be square: {} rows but a row of {}",
                size,
                bad.as_ref().len()
            )));
        }
        let data: Vec<f64> = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Self::from_slice(size, &data)
    }

    /// Identity kernel: 1 at the center, 0 elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `size` is even or zero.
    pub fn identity(size: usize) -> FilterResult<Self> {
        let mut data = vec![0.0; size * size];
        if size % 2 == 1 {
            data[size * size / 2] = 1.0;
        }
        Self::from_slice(size, &data)
    }

    /// 3x3 Gaussian blur:
    ///
    /// ```text
    /// 1/16 1/8 1/16
    /// 1/8  1/4 1/8
    /// 1/16 1/8 1/16
    /// ```
    pub fn gaussian_blur_3x3() -> Self {
        let (c, e, m) = (1.0 / 16.0, 1.0 / 8.0, 1.0 / 4.0);
        Self {
            size: 3,
            data: vec![c, e, c, e, m, e, c, e, c],
        }
    }

    /// 5x5 sharpening kernel: a `-1/8` halo ring, a `1/4` inner ring and
    /// `1` at the center.
    pub fn sharpen_5x5() -> Self {
        let size: usize = 5;
        let data = (0..size * size)
            .map(|i| {
                let (row, col) = (i / size, i % size);
                let ring = row.abs_diff(2).max(col.abs_diff(2));
                match ring {
                    0 => 1.0,
                    1 => 0.25,
                    _ => -0.125,
                }
            })
            .collect();
        Self { size, data }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Offset from the top-left cell to the center, `size / 2`.
    #[inline]
    pub fn half(&self) -> usize {
        self.size / 2
    }

    /// Row-major weights.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Weight at `(row, col)`, or `None` outside the kernel.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.size && col < self.size {
            Some(self.data[row * self.size + col])
        } else {
            None
        }
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_even_size() {
        assert!(matches!(
            Kernel::from_slice(2, &[0.25; 4]),
            Err(FilterError::InvalidKernel(_))
        ));
        assert!(Kernel::identity(0).is_err());
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(Kernel::from_slice(3, &[1.0; 8]).is_err());
    }

    #[test]
    fn test_from_rows_requires_square() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0]];
        assert!(Kernel::from_rows(&rows).is_err());

        let rows = [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]];
        assert_eq!(Kernel::from_rows(&rows).unwrap(), Kernel::identity(3).unwrap());
    }

    #[test]
    fn test_presets_sum_to_one() {
        assert!((Kernel::gaussian_blur_3x3().sum() - 1.0).abs() < 1e-12);
        // 16 * (-1/8) + 8 * (1/4) + 1 = -2 + 2 + 1
        assert!((Kernel::sharpen_5x5().sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sharpen_layout() {
        let k = Kernel::sharpen_5x5();
        assert_eq!(k.get(0, 0), Some(-0.125));
        assert_eq!(k.get(1, 2), Some(0.25));
        assert_eq!(k.get(2, 2), Some(1.0));
        assert_eq!(k.get(4, 3), Some(-0.125));
        assert_eq!(k.get(5, 0), None);
    }
}
