//! BMP image format support
//!
//! Reads and writes uncompressed, palette-free 24-bit Windows Bitmap files
//! of the single captcha geometry.
//!
//! Only the fields the captcha reader depends on are inspected: the `BM`
//! signature and the signed width/height at byte offsets 18 and 22. Pixel
//! rows are taken from the fixed offset [`PIXEL_DATA_OFFSET`].

use crate::encoding::decode_base64;
use crate::{IoError, IoResult};
use digitocr_core::{Bitmap24, CAPTCHA_GEOMETRY, Error as CoreError};

/// BMP file header size
const BMP_FILE_HEADER_SIZE: usize = 14;

/// BMP info header size (BITMAPINFOHEADER)
const BMP_INFO_HEADER_SIZE: u32 = 40;

/// Offset of pixel data in a 24-bit BMP without a color palette
pub const PIXEL_DATA_OFFSET: usize = BMP_FILE_HEADER_SIZE + BMP_INFO_HEADER_SIZE as usize;

/// Byte offset of the signed width field
const WIDTH_OFFSET: usize = 18;

/// Byte offset of the signed height field
const HEIGHT_OFFSET: usize = 22;

fn read_i32_le(data: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Read a captcha BMP from raw bytes.
///
/// Takes ownership of the buffer; the returned bitmap reads pixels from it
/// in place.
///
/// # Errors
///
/// - [`IoError::InvalidFormat`] if the buffer is shorter than the header,
///   lacks the `BM` signature, or is too short for the declared rows
/// - [`IoError::UnexpectedGeometry`] if the declared size is not 100x27
pub fn read_bmp(data: Vec<u8>) -> IoResult<Bitmap24> {
    if data.len() < PIXEL_DATA_OFFSET {
        return Err(IoError::InvalidFormat(format!(
            "{} bytes is shorter than the {}-byte header",
            data.len(),
            PIXEL_DATA_OFFSET
        )));
    }
    if &data[0..2] != b"BM" {
        return Err(IoError::InvalidFormat("missing BM signature".to_string()));
    }

    let width = read_i32_le(&data, WIDTH_OFFSET);
    let height = read_i32_le(&data, HEIGHT_OFFSET);
    if width != CAPTCHA_GEOMETRY.width as i32 || height != CAPTCHA_GEOMETRY.height as i32 {
        return Err(IoError::UnexpectedGeometry {
            expected: CAPTCHA_GEOMETRY,
            actual_width: width,
            actual_height: height,
        });
    }

    tracing::debug!(
        len = data.len(),
        width,
        height,
        stride = CAPTCHA_GEOMETRY.stride(),
        "decoded BMP header"
    );

    Bitmap24::from_raw(CAPTCHA_GEOMETRY, PIXEL_DATA_OFFSET, data).map_err(|e| match e {
        CoreError::BufferTooShort { needed, len } => IoError::InvalidFormat(format!(
            "pixel data truncated: need {} bytes, got {}",
            needed, len
        )),
        other => IoError::Core(other),
    })
}

/// Decode Base64 text and read the captcha BMP it contains.
///
/// # Errors
///
/// [`IoError::InvalidEncoding`] for bad Base64, otherwise as [`read_bmp`].
pub fn read_bmp_base64(text: &str) -> IoResult<Bitmap24> {
    read_bmp(decode_base64(text)?)
}

/// Write a bitmap as a 24-bit bottom-up BMP file.
pub fn write_bmp(bitmap: &Bitmap24) -> Vec<u8> {
    let pixel_data = bitmap.pixel_data();
    let file_size = PIXEL_DATA_OFFSET + pixel_data.len();
    let mut out = Vec::with_capacity(file_size);

    // File header
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // Reserved
    out.extend_from_slice(&(PIXEL_DATA_OFFSET as u32).to_le_bytes());

    // Info header
    out.extend_from_slice(&BMP_INFO_HEADER_SIZE.to_le_bytes());
    out.extend_from_slice(&(bitmap.width() as i32).to_le_bytes());
    out.extend_from_slice(&(bitmap.height() as i32).to_le_bytes()); // Bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // Planes
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // Compression
    out.extend_from_slice(&(pixel_data.len() as u32).to_le_bytes());
    out.extend_from_slice(&0i32.to_le_bytes()); // X pixels per meter
    out.extend_from_slice(&0i32.to_le_bytes()); // Y pixels per meter
    out.extend_from_slice(&0u32.to_le_bytes()); // Colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // Important colors

    out.extend_from_slice(pixel_data);
    out
}
