//! PNG image format support
//!
//! Decoding expands every PNG layout to 8-bit RGBA before converting
//! into the HSLA raster; encoding always produces 8-bit RGBA. The
//! conversion itself lives in `hslakit_core::color`.

use crate::{IoError, IoResult};
use hslakit_core::{Raster, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image into an HSLA raster.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(
        Transformations::EXPAND | Transformations::ALPHA | Transformations::STRIP_16,
    );
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut raster = Raster::new(width, height);

    // With EXPAND | ALPHA | STRIP_16 the decoder emits 8-bit samples with
    // an alpha channel: either grayscale+alpha or RGBA.
    match (output_info.color_type, output_info.bit_depth) {
        (ColorType::GrayscaleAlpha, BitDepth::Eight) => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let i = row_start + 2 * x as usize;
                    let (v, a) = (data[i], data[i + 1]);
                    if let Some(px) = raster.pixel_mut(x, y) {
                        *px = color::rgba_to_hsla(v, v, v, a);
                    }
                }
            }
        }
        (ColorType::Rgba, BitDepth::Eight) => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let i = row_start + 4 * x as usize;
                    if let Some(px) = raster.pixel_mut(x, y) {
                        *px = color::rgba_to_hsla(data[i], data[i + 1], data[i + 2], data[i + 3]);
                    }
                }
            }
        }
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedFormat(format!(
                "unexpected decoder output: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    }

    Ok(raster)
}

/// Write an HSLA raster as an 8-bit RGBA PNG.
///
/// Zero-sized rasters cannot be encoded; PNG requires at least one pixel
/// and the encoder rejects them with an [`IoError::EncodeError`].
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let width = raster.width();
    let height = raster.height();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for y in 0..height {
        for x in 0..width {
            if let Some(px) = raster.pixel(x, y) {
                let (r, g, b, a) = color::hsla_to_rgba(*px);
                data.extend_from_slice(&[r, g, b, a]);
            }
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hslakit_core::Hsla;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip_rgba() {
        let mut raster = Raster::new(5, 5);
        *raster.pixel_mut(0, 0).unwrap() = color::rgba_to_hsla(255, 0, 0, 255);
        *raster.pixel_mut(1, 1).unwrap() = color::rgba_to_hsla(0, 255, 0, 255);
        *raster.pixel_mut(2, 2).unwrap() = color::rgba_to_hsla(0, 0, 255, 128);

        let mut buffer = Vec::new();
        write_png(&raster, &mut buffer).unwrap();

        let decoded = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded.width(), 5);
        assert_eq!(decoded.height(), 5);

        for y in 0..5 {
            for x in 0..5 {
                let want = color::hsla_to_rgba(*raster.pixel(x, y).unwrap());
                let got = color::hsla_to_rgba(*decoded.pixel(x, y).unwrap());
                assert_eq!(got, want, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_png_roundtrip_preserves_gray() {
        let mut raster = Raster::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                *raster.pixel_mut(x, y).unwrap() =
                    Hsla::new(0.0, 0.0, (x + y) as f64 / 8.0, 1.0);
            }
        }

        let mut buffer = Vec::new();
        write_png(&raster, &mut buffer).unwrap();
        let decoded = read_png(Cursor::new(buffer)).unwrap();

        for y in 0..3 {
            for x in 0..3 {
                let px = decoded.pixel(x, y).unwrap();
                assert_eq!(px.s, 0.0, "gray pixel ({x}, {y}) regained saturation");
            }
        }
    }

    #[test]
    fn test_write_png_rejects_empty_raster() {
        let raster = Raster::new(0, 0);
        let mut buffer = Vec::new();
        let err = write_png(&raster, &mut buffer).unwrap_err();
        assert!(matches!(err, IoError::EncodeError(_)));
    }
}
