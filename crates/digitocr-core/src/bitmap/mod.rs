//! Bitmap24 - 24-bit pixel container
//!
//! `Bitmap24` owns the raw bytes of an uncompressed 24-bit image and knows
//! where its pixel rows start. Rows are stored bottom-up and padded to a
//! 4-byte boundary, exactly as they appear in a BMP file, so a decoded file
//! can be wrapped without copying or re-packing pixels.
//!
//! # Pixel layout
//!
//! - Each pixel is three bytes in (blue, green, red) order
//! - Row `y` (top-down) lives at `data_offset + (height - 1 - y) * stride`
//! - `stride = (width * 3 + 3) & !3`

mod access;

use crate::error::{Error, Result};

/// Geometry of the captcha images this workspace reads.
pub const CAPTCHA_GEOMETRY: ImageGeometry = ImageGeometry {
    width: 100,
    height: 27,
};

/// One pixel as stored in a 24-bit bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bgr {
    pub b: u8,
    pub g: u8,
    pub r: u8,
}

impl Bgr {
    /// Pure white.
    pub const WHITE: Bgr = Bgr::gray(255);
    /// Pure black.
    pub const BLACK: Bgr = Bgr::gray(0);

    /// Create a pixel from its stored (blue, green, red) order.
    pub const fn new(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r }
    }

    /// Create a neutral gray pixel.
    pub const fn gray(v: u8) -> Self {
        Self { b: v, g: v, r: v }
    }

    /// Sum of the three channels.
    #[inline]
    pub fn channel_sum(self) -> u16 {
        self.b as u16 + self.g as u16 + self.r as u16
    }

    /// True when the channel average is strictly below `threshold`.
    ///
    /// `(b + g + r) / 3 < threshold` is evaluated as
    /// `b + g + r < 3 * threshold` so no rounding is involved.
    #[inline]
    pub fn is_darker_than(self, threshold: u8) -> bool {
        self.channel_sum() < 3 * threshold as u16
    }
}

/// Image width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageGeometry {
    pub width: u32,
    pub height: u32,
}

impl ImageGeometry {
    /// Create a geometry.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Row length in bytes including padding to a 4-byte boundary.
    #[inline]
    pub const fn stride(self) -> usize {
        (self.width as usize * 3 + 3) & !3
    }

    /// Total bytes of padded pixel rows.
    #[inline]
    pub const fn pixel_data_len(self) -> usize {
        self.stride() * self.height as usize
    }

    /// Check whether `(x, y)` lies inside the image.
    #[inline]
    pub fn contains(self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }
}

impl std::fmt::Display for ImageGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// 24-bit bottom-up bitmap with bounds-checked pixel access.
///
/// The stride is computed once at construction; lookups are pure
/// offset arithmetic over the owned buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap24 {
    geometry: ImageGeometry,
    stride: usize,
    data_offset: usize,
    data: Vec<u8>,
}

impl Bitmap24 {
    /// Wrap a raw buffer whose pixel rows start at `data_offset`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero width or height and
    /// [`Error::BufferTooShort`] if the buffer does not cover every row.
    pub fn from_raw(geometry: ImageGeometry, data_offset: usize, data: Vec<u8>) -> Result<Self> {
        if geometry.width == 0 || geometry.height == 0 {
            return Err(Error::InvalidDimension {
                width: geometry.width,
                height: geometry.height,
            });
        }
        let needed = data_offset + geometry.pixel_data_len();
        if data.len() < needed {
            return Err(Error::BufferTooShort {
                needed,
                len: data.len(),
            });
        }
        Ok(Self {
            geometry,
            stride: geometry.stride(),
            data_offset,
            data,
        })
    }

    /// Create a bitmap with every pixel set to `fill`.
    pub fn new_filled(geometry: ImageGeometry, fill: Bgr) -> Result<Self> {
        let mut data = vec![0u8; geometry.pixel_data_len()];
        let stride = geometry.stride();
        for row in data.chunks_exact_mut(stride) {
            for px in row[..geometry.width as usize * 3].chunks_exact_mut(3) {
                px.copy_from_slice(&[fill.b, fill.g, fill.r]);
            }
        }
        Self::from_raw(geometry, 0, data)
    }

    /// Image geometry.
    pub fn geometry(&self) -> ImageGeometry {
        self.geometry
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.geometry.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.geometry.height
    }

    /// Row length in bytes, padding included.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Padded pixel rows in stored (bottom-up) order.
    pub fn pixel_data(&self) -> &[u8] {
        &self.data[self.data_offset..self.data_offset + self.geometry.pixel_data_len()]
    }
}
