//! `.spr` binary codec.
//!
//! Layout, all little-endian:
//!
//! | offset                | type           | field                      |
//! |-----------------------|----------------|----------------------------|
//! | 0                     | `i32`          | width                      |
//! | 4                     | `i32`          | height                     |
//! | 8                     | `u16 * w * h`  | colours, row-major         |
//! | 8 + 2wh               | `u16 * w * h`  | glyphs (UTF-16 units)      |
//!
//! Colours are stored in the low byte of each `u16`. A glyph unit that is not a
//! Unicode scalar value (a lone surrogate) decodes as U+FFFD.

use std::io::{self, Read, Write};

use crate::error::Result;
use crate::sprite::Sprite;
use crate::types::Colour;

const HEADER_LEN: usize = 8;

fn invalid_data(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

/// Read exactly `len` bytes, reporting a short read as `UnexpectedEof` instead of
/// trusting the header for an up-front allocation.
fn read_body<R: Read>(reader: R, len: usize) -> io::Result<Vec<u8>> {
    let mut body = Vec::new();
    reader.take(len as u64).read_to_end(&mut body)?;
    if body.len() != len {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("sprite body truncated: expected {len} bytes, got {}", body.len()),
        ));
    }
    Ok(body)
}

pub(crate) fn decode<R: Read>(mut reader: R) -> Result<Sprite> {
    let mut header = [0u8; HEADER_LEN];
    reader.read_exact(&mut header)?;
    let width = i32::from_le_bytes([header[0], header[1], header[2], header[3]]);
    let height = i32::from_le_bytes([header[4], header[5], header[6], header[7]]);

    if width <= 0 || height <= 0 {
        return Err(invalid_data(format!("invalid sprite size {width}x{height}")).into());
    }
    let cells = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| invalid_data(format!("sprite size {width}x{height} overflows")))?;
    let body_len = cells
        .checked_mul(4)
        .ok_or_else(|| invalid_data(format!("sprite size {width}x{height} overflows")))?;

    let body = read_body(reader, body_len)?;
    let (colour_bytes, glyph_bytes) = body.split_at(cells * 2);

    let colours = colour_bytes
        .chunks_exact(2)
        .map(|b| Colour(u16::from_le_bytes([b[0], b[1]]) as u8))
        .collect();
    let glyphs = glyph_bytes
        .chunks_exact(2)
        .map(|b| {
            let unit = u16::from_le_bytes([b[0], b[1]]);
            char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .collect();

    Ok(Sprite::from_parts(width, height, glyphs, colours))
}

pub(crate) fn encode<W: Write>(sprite: &Sprite, mut writer: W) -> Result<()> {
    writer.write_all(&sprite.width().to_le_bytes())?;
    writer.write_all(&sprite.height().to_le_bytes())?;
    for colour in sprite.colours() {
        writer.write_all(&u16::from(colour.bits()).to_le_bytes())?;
    }
    for &ch in sprite.glyphs() {
        // Sprite glyphs are narrowed to the BMP on write.
        let unit = u16::try_from(u32::from(ch)).unwrap_or(0xFFFD);
        writer.write_all(&unit.to_le_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample() -> Sprite {
        let mut s = Sprite::new(2, 1).unwrap();
        s.set_glyph(0, 0, 'A');
        s.set_colour(0, 0, Colour(0x0F));
        s.set_glyph(1, 0, '\u{2588}');
        s.set_colour(1, 0, Colour(0x1E));
        s
    }

    fn io_kind(err: Error) -> io::ErrorKind {
        match err {
            Error::Io(e) => e.kind(),
            other => panic!("expected an I/O error, got {other:?}"),
        }
    }

    #[test]
    fn test_encodes_header_then_colours_then_glyphs() {
        let mut out = Vec::new();
        encode(&sample(), &mut out).unwrap();
        assert_eq!(
            out,
            vec![
                2, 0, 0, 0, // width
                1, 0, 0, 0, // height
                0x0F, 0, 0x1E, 0, // colours
                0x41, 0, 0x88, 0x25, // glyphs
            ]
        );
    }

    #[test]
    fn test_decodes_what_it_encodes() {
        let mut out = Vec::new();
        encode(&sample(), &mut out).unwrap();
        assert_eq!(decode(out.as_slice()).unwrap(), sample());
    }

    #[test]
    fn test_high_colour_byte_is_dropped() {
        let bytes = [1, 0, 0, 0, 1, 0, 0, 0, 0x34, 0x12, b'x', 0];
        let s = decode(bytes.as_slice()).unwrap();
        assert_eq!(s.colour(0, 0), Colour(0x34));
        assert_eq!(s.glyph(0, 0), 'x');
    }

    #[test]
    fn test_lone_surrogate_becomes_replacement_char() {
        let bytes = [1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0x00, 0xD8];
        let s = decode(bytes.as_slice()).unwrap();
        assert_eq!(s.glyph(0, 0), char::REPLACEMENT_CHARACTER);
    }

    #[test]
    fn test_non_positive_size_is_invalid_data() {
        let zero = [0, 0, 0, 0, 1, 0, 0, 0];
        assert_eq!(io_kind(decode(zero.as_slice()).unwrap_err()), io::ErrorKind::InvalidData);

        let negative = [1, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF];
        assert_eq!(
            io_kind(decode(negative.as_slice()).unwrap_err()),
            io::ErrorKind::InvalidData
        );
    }

    #[test]
    fn test_truncated_input_is_unexpected_eof() {
        let header_only = [2, 0, 0, 0, 2, 0, 0, 0];
        assert_eq!(
            io_kind(decode(header_only.as_slice()).unwrap_err()),
            io::ErrorKind::UnexpectedEof
        );

        let short_header = [2, 0, 0];
        assert_eq!(
            io_kind(decode(short_header.as_slice()).unwrap_err()),
            io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn test_huge_header_does_not_preallocate() {
        // Claims 65535 x 65535 cells but carries no body.
        let bytes = [0xFF, 0xFF, 0, 0, 0xFF, 0xFF, 0, 0];
        assert_eq!(
            io_kind(decode(bytes.as_slice()).unwrap_err()),
            io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn test_astral_glyph_is_written_as_replacement_char() {
        let mut s = Sprite::new(1, 1).unwrap();
        s.set_glyph(0, 0, '\u{1F600}');
        let mut out = Vec::new();
        encode(&s, &mut out).unwrap();
        assert_eq!(&out[8..], &[0, 0, 0xFD, 0xFF]);
        assert_eq!(decode(out.as_slice()).unwrap(), s);
    }
}
