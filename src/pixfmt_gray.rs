//! Grayscale pixel format.
//!
//! 8-bit grayscale pixels (1 byte per pixel), the single-channel variant of
//! the canvas. Written out as PPM `P5`.

use crate::color::Gray8;
use crate::pixfmt_rgb::PixelFormat;
use crate::rendering_buffer::RenderingBuffer;

/// Bytes per pixel for Gray8.
const BPP: usize = 1;

/// Pixel format for Gray8 (1 byte per pixel).
pub struct PixfmtGray8<'a> {
    rbuf: &'a mut RenderingBuffer,
}

impl<'a> PixfmtGray8<'a> {
    /// # Panics
    /// If the buffer is not 1 byte per pixel.
    pub fn new(rbuf: &'a mut RenderingBuffer) -> Self {
        assert_eq!(rbuf.bpp(), BPP, "Gray8 needs a 1-byte-per-pixel buffer");
        Self { rbuf }
    }
}

impl<'a> PixelFormat for PixfmtGray8<'a> {
    type ColorType = Gray8;

    fn width(&self) -> u32 {
        self.rbuf.width()
    }

    fn height(&self) -> u32 {
        self.rbuf.height()
    }

    #[inline]
    fn copy_pixel(&mut self, x: i128, y: i128, c: &Gray8) {
        self.rbuf.pixel_mut(x, y)[0] = c.v;
    }

    fn pixel(&self, x: i128, y: i128) -> Gray8 {
        Gray8::new(self.rbuf.pixel(x, y)[0])
    }

    fn clear(&mut self, c: &Gray8) {
        self.rbuf.clear(c.v);
    }
}

// ============================================================================
// Tests
// ============================================================================
