//! Render configuration.

use crate::basics::{MAX_LINE_LEN, MAX_SIZE};

/// Channel layout of the canvas and of the written image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelKind {
    /// Three channels, PPM `P6`.
    #[default]
    Rgb,
    /// One channel, PGM `P5`.
    Gray,
}

impl PixelKind {
    pub fn channels(self) -> usize {
        match self {
            PixelKind::Rgb => 3,
            PixelKind::Gray => 1,
        }
    }

    /// Magic number on the first header line of the output image.
    pub fn magic(self) -> &'static str {
        match self {
            PixelKind::Rgb => "P6",
            PixelKind::Gray => "P5",
        }
    }

    /// Pixel kind for a canvas with `bpp` bytes per pixel.
    pub fn from_bpp(bpp: usize) -> Option<Self> {
        match bpp {
            3 => Some(PixelKind::Rgb),
            1 => Some(PixelKind::Gray),
            _ => None,
        }
    }
}

/// Settings for one render session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub pixel_kind: PixelKind,
    /// Largest accepted width or height.
    pub max_size: u32,
    /// Longest accepted input line, terminator excluded.
    pub max_line_len: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pixel_kind: PixelKind::Rgb,
            max_size: MAX_SIZE,
            max_line_len: MAX_LINE_LEN,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pixel_kind(mut self, kind: PixelKind) -> Self {
        self.pixel_kind = kind;
        self
    }

    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_max_line_len(mut self, max_line_len: usize) -> Self {
        self.max_line_len = max_line_len;
        self
    }

    pub fn channels(&self) -> usize {
        self.pixel_kind.channels()
    }
}
