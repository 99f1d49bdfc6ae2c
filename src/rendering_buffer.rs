//! Rendering buffer: row-oriented storage for the canvas.
//!
//! The buffer owns `width * height * bpp` bytes laid out row-major, top row
//! first, with no row padding. This is exactly the pixel payload of a binary
//! PPM file, so the image writer can emit it without conversion.
//!
//! Out-of-range pixel coordinates never fail: [`RenderingBuffer::wrap_offset`]
//! maps them back onto the canvas modulo its dimensions. That is the only
//! place the out-of-bounds policy is decided.

// ============================================================================
// RenderingBuffer
// ============================================================================

/// Owned pixel storage with a fixed size and bytes-per-pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderingBuffer {
    buf: Vec<u8>,
    width: u32,
    height: u32,
    bpp: usize,
}

impl RenderingBuffer {
    /// Allocate a zeroed buffer.
    ///
    /// # Panics
    /// If any dimension or `bpp` is zero.
    pub fn new(width: u32, height: u32, bpp: usize) -> Self {
        Self::new_filled(width, height, bpp, 0)
    }

    /// Allocate a buffer with every byte set to `value`.
    pub fn new_filled(width: u32, height: u32, bpp: usize, value: u8) -> Self {
        assert!(
            width > 0 && height > 0 && bpp > 0,
            "empty rendering buffer ({}x{}x{})",
            width,
            height,
            bpp
        );
        Self {
            buf: vec![value; width as usize * height as usize * bpp],
            width,
            height,
            bpp,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per pixel.
    pub fn bpp(&self) -> usize {
        self.bpp
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * self.bpp
    }

    /// Byte offset of the pixel at column `x`, storage row `y`, with both
    /// coordinates wrapped onto the canvas.
    ///
    /// Uses the Euclidean remainder, so `-1` lands on the last column/row.
    /// Coordinates are `i128` so the flipped row of any `i64` device Y fits.
    #[inline]
    pub fn wrap_offset(&self, x: i128, y: i128) -> usize {
        let col = x.rem_euclid(self.width as i128) as usize;
        let row = y.rem_euclid(self.height as i128) as usize;
        row * self.stride() + col * self.bpp
    }

    /// Mutable bytes of one pixel (wrapped coordinates).
    #[inline]
    pub fn pixel_mut(&mut self, x: i128, y: i128) -> &mut [u8] {
        let off = self.wrap_offset(x, y);
        &mut self.buf[off..off + self.bpp]
    }

    /// Bytes of one pixel (wrapped coordinates).
    #[inline]
    pub fn pixel(&self, x: i128, y: i128) -> &[u8] {
        let off = self.wrap_offset(x, y);
        &self.buf[off..off + self.bpp]
    }

    /// Fill every byte in the buffer with `value`.
    pub fn clear(&mut self, value: u8) {
        self.buf.fill(value);
    }

    /// The whole buffer, row-major, top row first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }
}

// ============================================================================
// Tests
// ============================================================================
