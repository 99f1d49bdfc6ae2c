//! Color types.
//!
//! Provides the two channel layouts a canvas can hold:
//! - `Rgb8`: three u8 channels, written as PPM `P6`
//! - `Gray8`: one u8 channel, written as PGM `P5`
//!
//! Colors are opaque; there is no alpha and no blending. The `PixelColor`
//! trait lets the interpreter and the pixel formats stay generic over the
//! layout.

use crate::pixfmt_gray::PixfmtGray8;
use crate::pixfmt_rgb::{PixelFormat, PixfmtRgb24};
use crate::rendering_buffer::RenderingBuffer;

// ============================================================================
// PixelColor trait
// ============================================================================

/// A color value stored in a canvas of matching channel count.
pub trait PixelColor: Copy + Default + PartialEq + std::fmt::Debug {
    /// Bytes per pixel.
    const CHANNELS: usize;

    /// Default background (255 in every channel).
    const WHITE: Self;

    /// Default draw color (0 in every channel).
    const BLACK: Self;

    /// Pixel format that writes this color into a buffer.
    type Pixfmt<'a>: PixelFormat<ColorType = Self>;

    /// Build a color from exactly `CHANNELS` values.
    ///
    /// # Panics
    /// If `ch.len() != Self::CHANNELS`.
    fn from_channels(ch: &[u8]) -> Self;

    /// Attach the pixel format to a rendering buffer.
    fn pixfmt(rbuf: &mut RenderingBuffer) -> Self::Pixfmt<'_>;
}

// ============================================================================
// Rgb8
// ============================================================================

/// RGB color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Rgb8 {
    fn default() -> Self {
        Self::BLACK
    }
}

impl PixelColor for Rgb8 {
    const CHANNELS: usize = 3;
    const WHITE: Self = Self::new(255, 255, 255);
    const BLACK: Self = Self::new(0, 0, 0);

    type Pixfmt<'a> = PixfmtRgb24<'a>;

    fn from_channels(ch: &[u8]) -> Self {
        assert_eq!(ch.len(), Self::CHANNELS, "RGB color needs 3 channels");
        Self::new(ch[0], ch[1], ch[2])
    }

    fn pixfmt(rbuf: &mut RenderingBuffer) -> PixfmtRgb24<'_> {
        PixfmtRgb24::new(rbuf)
    }
}

// ============================================================================
// Gray8
// ============================================================================

/// Grayscale color with a single u8 value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gray8 {
    pub v: u8,
}

impl Gray8 {
    pub const fn new(v: u8) -> Self {
        Self { v }
    }
}

impl Default for Gray8 {
    fn default() -> Self {
        Self::BLACK
    }
}

impl PixelColor for Gray8 {
    const CHANNELS: usize = 1;
    const WHITE: Self = Self::new(255);
    const BLACK: Self = Self::new(0);

    type Pixfmt<'a> = PixfmtGray8<'a>;

    fn from_channels(ch: &[u8]) -> Self {
        assert_eq!(ch.len(), Self::CHANNELS, "gray color needs 1 channel");
        Self::new(ch[0])
    }

    fn pixfmt(rbuf: &mut RenderingBuffer) -> PixfmtGray8<'_> {
        PixfmtGray8::new(rbuf)
    }
}

// ============================================================================
// Tests
// ============================================================================
