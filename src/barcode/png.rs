//! Minimal PNG writer for 8-bit RGB rasters

use crate::exceptions::{LabelError, Result};
use flate2::Crc;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use std::io::Write;

/// PNG file signature
pub const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

const COLOR_TYPE_RGB: u8 = 2;
const BIT_DEPTH: u8 = 8;
const FILTER_NONE: u8 = 0;

fn write_chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(data);

    let mut crc = Crc::new();
    crc.update(kind);
    crc.update(data);
    out.extend_from_slice(&crc.sum().to_be_bytes());
}

/// Encode a row-major RGB buffer (`width * height * 3` bytes) as PNG
pub fn encode_rgb(width: u32, height: u32, pixels: &[u8]) -> Result<Vec<u8>> {
    let row_len = width as usize * 3;
    if width == 0 || height == 0 || pixels.len() != row_len * height as usize {
        return Err(LabelError::Encoding(format!(
            "Pixel buffer of {} bytes does not match {}x{} RGB",
            pixels.len(),
            width,
            height
        )));
    }

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[BIT_DEPTH, COLOR_TYPE_RGB, 0, 0, 0]);

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    for row in pixels.chunks_exact(row_len) {
        encoder.write_all(&[FILTER_NONE])?;
        encoder.write_all(row)?;
    }
    let idat = encoder
        .finish()
        .map_err(|e| LabelError::Encoding(format!("Deflate failed: {e}")))?;

    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + idat.len() + 64);
    out.extend_from_slice(PNG_SIGNATURE);
    write_chunk(&mut out, b"IHDR", &ihdr);
    write_chunk(&mut out, b"IDAT", &idat);
    write_chunk(&mut out, b"IEND", &[]);

    log::trace!(
        "🖼️ PNG encoded: {}x{} raw={} compressed={}",
        width,
        height,
        pixels.len(),
        out.len()
    );
    Ok(out)
}

/// Read the dimensions from a PNG header, if it is one
pub fn dimensions(png: &[u8]) -> Option<(u32, u32)> {
    if png.len() < 24 || &png[..8] != PNG_SIGNATURE || &png[12..16] != b"IHDR" {
        return None;
    }
    let width = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
    let height = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
    Some((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::ZlibDecoder;
    use std::io::Read;

    fn chunk_types(png: &[u8]) -> Vec<String> {
        let mut types = Vec::new();
        let mut pos = PNG_SIGNATURE.len();
        while pos + 8 <= png.len() {
            let len = u32::from_be_bytes([png[pos], png[pos + 1], png[pos + 2], png[pos + 3]])
                as usize;
            types.push(String::from_utf8_lossy(&png[pos + 4..pos + 8]).to_string());
            pos += 12 + len;
        }
        types
    }

    #[test]
    fn test_encode_structure() {
        let pixels = vec![0xFF; 4 * 2 * 3];
        let png = encode_rgb(4, 2, &pixels).unwrap();

        assert!(png.starts_with(PNG_SIGNATURE));
        assert_eq!(dimensions(&png), Some((4, 2)));
        assert_eq!(chunk_types(&png), vec!["IHDR", "IDAT", "IEND"]);
    }

    #[test]
    fn test_ihdr_crc() {
        let png = encode_rgb(1, 1, &[0, 0, 0]).unwrap();
        // IHDR chunk: length(4) type(4) data(13) crc(4) after the signature
        let start = PNG_SIGNATURE.len();
        let mut crc = Crc::new();
        crc.update(&png[start + 4..start + 8 + 13]);
        let stored = u32::from_be_bytes([
            png[start + 21],
            png[start + 22],
            png[start + 23],
            png[start + 24],
        ]);
        assert_eq!(crc.sum(), stored);
    }

    #[test]
    fn test_idat_inflates_to_filtered_rows() {
        let pixels: Vec<u8> = (0..2 * 2 * 3).map(|i| i as u8).collect();
        let png = encode_rgb(2, 2, &pixels).unwrap();

        // IDAT follows the 25-byte IHDR chunk
        let idat_start = PNG_SIGNATURE.len() + 25;
        let len = u32::from_be_bytes([
            png[idat_start],
            png[idat_start + 1],
            png[idat_start + 2],
            png[idat_start + 3],
        ]) as usize;
        let data = &png[idat_start + 8..idat_start + 8 + len];

        let mut raw = Vec::new();
        ZlibDecoder::new(data).read_to_end(&mut raw).unwrap();
        assert_eq!(raw.len(), 2 * (1 + 6));
        assert_eq!(raw[0], FILTER_NONE);
        assert_eq!(&raw[1..7], &pixels[0..6]);
        assert_eq!(raw[7], FILTER_NONE);
        assert_eq!(&raw[8..14], &pixels[6..12]);
    }

    #[test]
    fn test_rejects_mismatched_buffer() {
        assert!(encode_rgb(2, 2, &[0; 5]).is_err());
        assert!(encode_rgb(0, 1, &[]).is_err());
    }

    #[test]
    fn test_dimensions_rejects_non_png() {
        assert_eq!(dimensions(b"GIF89a"), None);
        assert_eq!(dimensions(&[0u8; 40]), None);
    }
}
