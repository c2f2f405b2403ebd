//! Regression test parameters and operations

use digitocr_core::Bitmap24;

/// Regression test parameters
///
/// Tracks the test name, the index of the current comparison, and every
/// failure, so one run reports all mismatches instead of the first.
pub struct RegParams {
    /// Name of the test (e.g., "recog")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if they differ by at most `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Compare two byte strings for equality
    pub fn compare_strings(&mut self, expected: &[u8], actual: &[u8]) -> bool {
        self.index += 1;

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 expected = {:?}, actual = {:?}",
                self.test_name,
                self.index,
                String::from_utf8_lossy(expected),
                String::from_utf8_lossy(actual)
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Compare two bitmaps pixel by pixel
    pub fn compare_bitmaps(&mut self, bm1: &Bitmap24, bm2: &Bitmap24) -> bool {
        self.index += 1;

        if bm1.geometry() != bm2.geometry() {
            let msg = format!(
                "Failure in {}_reg: bitmap comparison for index {} - size {} vs {}",
                self.test_name,
                self.index,
                bm1.geometry(),
                bm2.geometry()
            );
            return self.fail(msg);
        }

        for y in 0..bm1.height() as i64 {
            for x in 0..bm1.width() as i64 {
                if bm1.get_pixel(x, y).ok() != bm2.get_pixel(x, y).ok() {
                    let msg = format!(
                        "Failure in {}_reg: bitmap comparison for index {} - pixel mismatch at ({}, {})",
                        self.test_name, self.index, x, y
                    );
                    return self.fail(msg);
                }
            }
        }

        true
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all comparisons passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digitocr_core::{Bgr, CAPTCHA_GEOMETRY, ImageGeometry};

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_strings() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_strings(b"01234", b"01234"));
        assert!(!rp.compare_strings(b"01234", b"01284"));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_bitmaps() {
        let mut rp = RegParams::new("test");
        let a = Bitmap24::new_filled(CAPTCHA_GEOMETRY, Bgr::WHITE).unwrap();
        let mut b = a.clone();
        assert!(rp.compare_bitmaps(&a, &b));
        b.set_pixel(3, 4, Bgr::BLACK).unwrap();
        assert!(!rp.compare_bitmaps(&a, &b));
        let c = Bitmap24::new_filled(ImageGeometry::new(50, 27), Bgr::WHITE).unwrap();
        assert!(!rp.compare_bitmaps(&a, &c));
        assert_eq!(rp.failures().len(), 2);
    }
}
