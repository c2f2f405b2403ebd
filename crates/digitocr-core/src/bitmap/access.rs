//! Pixel access functions
//!
//! Getting and setting individual pixels of a [`Bitmap24`]. Coordinates are
//! top-down; the bottom-up storage order is handled here and nowhere else.

use super::{Bgr, Bitmap24};
use crate::error::{Error, Result};

impl Bitmap24 {
    /// Byte offset of pixel `(x, y)`, or an error if it lies outside.
    #[inline]
    fn pixel_index(&self, x: i64, y: i64) -> Result<usize> {
        if !self.geometry.contains(x, y) {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.geometry.width,
                height: self.geometry.height,
            });
        }
        let flipped_row = (self.geometry.height as i64 - 1 - y) as usize;
        Ok(self.data_offset + flipped_row * self.stride + x as usize * 3)
    }

    /// Get the pixel at `(x, y)`.
    ///
    /// Signed coordinates are accepted because sample positions are computed
    /// from an offset that may be negative.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinate is outside the image.
    pub fn get_pixel(&self, x: i64, y: i64) -> Result<Bgr> {
        let i = self.pixel_index(x, y)?;
        Ok(Bgr::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinate is outside the image.
    pub fn set_pixel(&mut self, x: i64, y: i64, px: Bgr) -> Result<()> {
        let i = self.pixel_index(x, y)?;
        self.data[i..i + 3].copy_from_slice(&[px.b, px.g, px.r]);
        Ok(())
    }

    /// True if the pixel at `(x, y)` averages strictly below `threshold`.
    pub fn is_dark(&self, x: i64, y: i64, threshold: u8) -> Result<bool> {
        Ok(self.get_pixel(x, y)?.is_darker_than(threshold))
    }
}
