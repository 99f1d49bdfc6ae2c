//! Binary Netpbm output.
//!
//! Writes a canvas as `P6` (RGB) or `P5` (grayscale):
//!
//! ```text
//! P6\n<width> <height>\n255\n<width*height*channels raw bytes>
//! ```
//!
//! Rows are written top row first with no padding. [`read_ppm`] parses the
//! same subset back, which is all the tests and tools need.

use std::io::{self, BufRead, Write};

use crate::basics::MAX_VAL;
use crate::config::PixelKind;
use crate::rendering_buffer::RenderingBuffer;

/// Write `rbuf` as a binary PPM/PGM image.
///
/// Short writes surface as `io::ErrorKind::WriteZero` through `write_all`.
pub fn write_ppm<W: Write>(mut out: W, rbuf: &RenderingBuffer) -> io::Result<()> {
    let kind = PixelKind::from_bpp(rbuf.bpp()).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("no Netpbm format for {} bytes per pixel", rbuf.bpp()),
        )
    })?;
    write!(
        out,
        "{}\n{} {}\n{}\n",
        kind.magic(),
        rbuf.width(),
        rbuf.height(),
        MAX_VAL
    )?;
    out.write_all(rbuf.as_bytes())?;
    out.flush()
}

/// Read a binary PPM/PGM image written by [`write_ppm`].
///
/// Accepts `P6` and `P5` with a maximum value of 255 and no comments.
pub fn read_ppm<R: BufRead>(mut input: R) -> io::Result<RenderingBuffer> {
    let magic = header_token(&mut input)?;
    let kind = match magic.as_str() {
        "P6" => PixelKind::Rgb,
        "P5" => PixelKind::Gray,
        _ => return Err(invalid(format!("unsupported magic {:?}", magic))),
    };
    let width = header_number(&mut input)?;
    let height = header_number(&mut input)?;
    let max_val = header_number(&mut input)?;
    if width == 0 || height == 0 {
        return Err(invalid(format!("invalid dimensions {}x{}", width, height)));
    }
    if max_val != MAX_VAL {
        return Err(invalid(format!("unsupported maximum value {}", max_val)));
    }

    let mut rbuf = RenderingBuffer::new(width, height, kind.channels());
    input.read_exact(rbuf.as_bytes_mut())?;
    Ok(rbuf)
}

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

/// Next whitespace-delimited header token; consumes the single delimiter
/// that ends it.
fn header_token<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut token = String::new();
    let mut byte = [0u8; 1];
    loop {
        input.read_exact(&mut byte)?;
        let b = byte[0];
        if b.is_ascii_whitespace() {
            if token.is_empty() {
                continue;
            }
            return Ok(token);
        }
        token.push(b as char);
    }
}

fn header_number<R: BufRead>(input: &mut R) -> io::Result<u32> {
    let token = header_token(input)?;
    token
        .parse()
        .map_err(|_| invalid(format!("invalid header number {:?}", token)))
}
