//! RGB pixel format.
//!
//! Provides the `PixelFormat` trait and the `PixfmtRgb24` writer for 3-byte
//! RGB pixels. Writes are plain copies: the canvas stores opaque colors and
//! a later write replaces an earlier one.

use crate::color::Rgb8;
use crate::rendering_buffer::RenderingBuffer;

// ============================================================================
// PixelFormat trait
// ============================================================================

/// Trait for pixel formats that write colors into a rendering buffer.
///
/// This is the layer between the rasterizer and raw bytes. Coordinates are
/// column and storage row (row 0 at the top). Implementations never reject a
/// coordinate; they defer to [`RenderingBuffer::wrap_offset`].
pub trait PixelFormat {
    type ColorType;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Overwrite the pixel at (x, y) with color `c`.
    fn copy_pixel(&mut self, x: i128, y: i128, c: &Self::ColorType);

    /// Get the pixel color at (x, y).
    fn pixel(&self, x: i128, y: i128) -> Self::ColorType;

    /// Overwrite every pixel with color `c`.
    fn clear(&mut self, c: &Self::ColorType);
}

// ============================================================================
// PixfmtRgb24
// ============================================================================

/// Bytes per pixel for RGB24.
const BPP: usize = 3;

/// Pixel format for RGB24 (3 bytes per pixel).
/// Component order: R=0, G=1, B=2.
pub struct PixfmtRgb24<'a> {
    rbuf: &'a mut RenderingBuffer,
}

impl<'a> PixfmtRgb24<'a> {
    /// # Panics
    /// If the buffer is not 3 bytes per pixel.
    pub fn new(rbuf: &'a mut RenderingBuffer) -> Self {
        assert_eq!(rbuf.bpp(), BPP, "RGB24 needs a 3-byte-per-pixel buffer");
        Self { rbuf }
    }
}

impl<'a> PixelFormat for PixfmtRgb24<'a> {
    type ColorType = Rgb8;

    fn width(&self) -> u32 {
        self.rbuf.width()
    }

    fn height(&self) -> u32 {
        self.rbuf.height()
    }

    #[inline]
    fn copy_pixel(&mut self, x: i128, y: i128, c: &Rgb8) {
        let p = self.rbuf.pixel_mut(x, y);
        p[0] = c.r;
        p[1] = c.g;
        p[2] = c.b;
    }

    fn pixel(&self, x: i128, y: i128) -> Rgb8 {
        let p = self.rbuf.pixel(x, y);
        Rgb8::new(p[0], p[1], p[2])
    }

    fn clear(&mut self, c: &Rgb8) {
        for px in self.rbuf.as_bytes_mut().chunks_exact_mut(BPP) {
            px[0] = c.r;
            px[1] = c.g;
            px[2] = c.b;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
