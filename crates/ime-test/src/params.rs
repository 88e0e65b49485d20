//! Regression test parameters and comparisons

use crate::error::TestError;
use ime_core::Image;

/// Regression test parameters
///
/// Tracks the state of one regression test: its name, the index of the
/// current check and every failure recorded so far. Checks never panic;
/// call [`RegParams::cleanup`] at the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "convolve")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters.
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    fn record(&mut self, failure: TestError) {
        eprintln!("Failure in {}_reg: {}", self.test_name, failure);
        self.failures.push(failure);
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        // NaN never compares within delta
        if diff <= delta {
            return true;
        }
        self.record(TestError::ValueMismatch {
            index: self.index,
            expected,
            actual,
            delta,
        });
        false
    }

    /// Compare two images for exact equality of size, declared max and
    /// every pixel's channels.
    pub fn compare_images(&mut self, expected: &Image, actual: &Image) -> bool {
        self.compare_images_within(expected, actual, 0)
    }

    /// Compare two images allowing each channel to differ by at most `delta`.
    ///
    /// Dimensions and declared max must still match exactly.
    pub fn compare_images_within(&mut self, expected: &Image, actual: &Image, delta: u32) -> bool {
        self.index += 1;

        if expected.dimensions() != actual.dimensions() || expected.max() != actual.max() {
            eprintln!(
                "  image {}: {}x{} max {} vs {}x{} max {}",
                self.index,
                expected.width(),
                expected.height(),
                expected.max(),
                actual.width(),
                actual.height(),
                actual.max()
            );
            self.record(TestError::ImageMismatch { index: self.index });
            return false;
        }

        let mismatch = expected
            .pixels()
            .iter()
            .zip(actual.pixels())
            .position(|(e, a)| {
                e.channels()
                    .iter()
                    .zip(a.channels())
                    .any(|(&x, y)| x.abs_diff(y) > delta)
            });

        match mismatch {
            None => true,
            Some(offset) => {
                eprintln!(
                    "  image {}: pixel mismatch at ({}, {})",
                    self.index,
                    offset / expected.width(),
                    offset % expected.width()
                );
                self.record(TestError::ImageMismatch { index: self.index });
                false
            }
        }
    }

    /// Record a boolean property check.
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        if !condition {
            eprintln!("  check failed: {}", what);
        }
        self.compare_values(1.0, if condition { 1.0 } else { 0.0 }, 0.0)
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        let success = self.failures.is_empty();
        if success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Get list of failures
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ime_core::Pixel;

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_images_within() {
        let a = Image::from_fn(2, 2, 255, |_, _| Pixel::gray(100, 255));
        let b = Image::from_fn(2, 2, 255, |_, _| Pixel::gray(101, 255));
        let mut rp = RegParams::new("test");
        assert!(rp.compare_images_within(&a, &b, 1));
        assert!(!rp.compare_images(&a, &b));
        assert_eq!(rp.index(), 2);
    }
}
