//! Basic line primitives renderer.
//!
//! Draws aliased, single-pixel-wide lines directly into a pixel format using
//! [`LineMidpointInterpolator`]. Coordinates are device coordinates with Y
//! pointing up; the interpolator flips them into storage rows.

use crate::line_interpolator::LineMidpointInterpolator;
use crate::pixfmt_rgb::PixelFormat;

/// Draw the segment `(x0, y0)`–`(x1, y1)` with color `c`.
///
/// Writes exactly `max(|x1-x0|, |y1-y0|) + 1` pixels, wrapping any that fall
/// outside the canvas. Returns the number of pixels written.
pub fn draw_line<PF: PixelFormat>(
    ren: &mut PF,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    c: &PF::ColorType,
) -> u128 {
    let li = LineMidpointInterpolator::new(x0, y0, x1, y1, ren.height());
    let len = li.len();
    for (x, row) in li {
        ren.copy_pixel(x, row, c);
    }
    len
}

// ============================================================================
// RendererPrimitives
// ============================================================================

/// Line renderer holding a current line color.
pub struct RendererPrimitives<'a, PF: PixelFormat> {
    ren: &'a mut PF,
    line_color: PF::ColorType,
}

impl<'a, PF: PixelFormat> RendererPrimitives<'a, PF>
where
    PF::ColorType: Default + Clone,
{
    pub fn new(ren: &'a mut PF) -> Self {
        Self {
            ren,
            line_color: PF::ColorType::default(),
        }
    }

    pub fn set_line_color(&mut self, c: PF::ColorType) {
        self.line_color = c;
    }

    pub fn line_color(&self) -> &PF::ColorType {
        &self.line_color
    }

    /// Draw a line from (x1,y1) to (x2,y2), both endpoints included.
    pub fn line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        let lc = self.line_color.clone();
        let n = draw_line(&mut *self.ren, x1, y1, x2, y2, &lc);
        log::trace!("line ({}, {}) -> ({}, {}): {} pixels", x1, y1, x2, y2, n);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Gray8, PixelColor, Rgb8};
    use crate::pixfmt_gray::PixfmtGray8;
    use crate::pixfmt_rgb::PixfmtRgb24;
    use crate::rendering_buffer::RenderingBuffer;

    /// Records every write instead of storing pixels.
    struct RecordingPixfmt {
        height: u32,
        writes: Vec<(i128, i128)>,
    }

    impl PixelFormat for RecordingPixfmt {
        type ColorType = u8;

        fn width(&self) -> u32 {
            u32::MAX
        }
        fn height(&self) -> u32 {
            self.height
        }
        fn copy_pixel(&mut self, x: i128, y: i128, _c: &u8) {
            self.writes.push((x, y));
        }
        fn pixel(&self, _x: i128, _y: i128) -> u8 {
            0
        }
        fn clear(&mut self, _c: &u8) {}
    }

    fn rgb_canvas(w: u32, h: u32) -> RenderingBuffer {
        RenderingBuffer::new_filled(w, h, 3, 255)
    }

    #[test]
    fn test_draw_line_write_count() {
        let mut rec = RecordingPixfmt {
            height: 100,
            writes: Vec::new(),
        };
        for &(x1, y1) in &[(9, 3), (3, 9), (-9, 3), (-3, -9), (0, 0), (12, -12)] {
            rec.writes.clear();
            let n = draw_line(&mut rec, 0, 0, x1, y1, &1);
            let expected = x1.abs().max(y1.abs()) as u128 + 1;
            assert_eq!(n, expected);
            assert_eq!(rec.writes.len() as u128, expected);
        }
    }

    #[test]
    fn test_draw_line_diagonal() {
        let mut rb = rgb_canvas(4, 4);
        let mut pf = PixfmtRgb24::new(&mut rb);
        draw_line(&mut pf, 0, 0, 3, 3, &Rgb8::BLACK);
        for y in 0..4i128 {
            for x in 0..4i128 {
                let expected = if x + y == 3 { Rgb8::BLACK } else { Rgb8::WHITE };
                assert_eq!(pf.pixel(x, y), expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_draw_line_endpoints_colored() {
        let mut rb = rgb_canvas(20, 20);
        let mut pf = PixfmtRgb24::new(&mut rb);
        let red = Rgb8::new(255, 0, 0);
        draw_line(&mut pf, 2, 17, 15, 4, &red);
        assert_eq!(pf.pixel(2, 20 - 17 - 1), red);
        assert_eq!(pf.pixel(15, 20 - 4 - 1), red);
    }

    #[test]
    fn test_draw_line_wraps_out_of_bounds() {
        let mut rb = RenderingBuffer::new(4, 4, 1);
        let mut pf = PixfmtGray8::new(&mut rb);
        // columns 2..=5 wrap to 2, 3, 0, 1 on model row 0 (storage row 3)
        draw_line(&mut pf, 2, 0, 5, 0, &Gray8::new(9));
        for x in 0..4 {
            assert_eq!(pf.pixel(x, 3).v, 9);
        }
        // negative model Y wraps to the top rows
        draw_line(&mut pf, 0, -1, 0, -1, &Gray8::new(5));
        assert_eq!(pf.pixel(0, 0).v, 5);
    }

    #[test]
    fn test_line_uses_line_color() {
        let mut rb = rgb_canvas(10, 10);
        let mut pf = PixfmtRgb24::new(&mut rb);
        let mut prim = RendererPrimitives::new(&mut pf);
        assert_eq!(*prim.line_color(), Rgb8::BLACK);
        prim.set_line_color(Rgb8::new(0, 0, 255));
        prim.line(1, 1, 8, 1);
        assert_eq!(pf.pixel(1, 8), Rgb8::new(0, 0, 255));
        assert_eq!(pf.pixel(8, 8), Rgb8::new(0, 0, 255));
        assert_eq!(pf.pixel(9, 8), Rgb8::WHITE);
    }

    #[test]
    fn test_connected_lines_rewrite_corner() {
        let mut rec = RecordingPixfmt {
            height: 10,
            writes: Vec::new(),
        };
        let mut prim = RendererPrimitives::new(&mut rec);
        prim.line(0, 0, 2, 0);
        prim.line(2, 0, 2, 2);
        let writes = &rec.writes;
        // the shared corner is written by both segments
        assert_eq!(writes.len(), 6);
        assert_eq!(writes[2], (2, 9));
        assert_eq!(writes[3], (2, 9));
        assert_eq!(writes[5], (2, 7));
    }
}
