//! Midpoint line interpolation.
//!
//! Integer-only incremental (Bresenham-style) stepping between two device
//! points. The interpolator yields every pixel of the segment, both
//! endpoints included, as `(column, storage_row)` pairs. It converts the
//! Y-up device coordinate into a top-down storage row itself, so callers can
//! write the result straight into a rendering buffer.

// ============================================================================
// LineMidpointInterpolator
// ============================================================================

/// Midpoint line interpolator covering all eight octants.
///
/// The driving axis is X when `dy <= dx` and Y otherwise. Each step moves one
/// unit along the driving axis and, when the decision variable is positive,
/// one unit along the other axis. Ties (`d == 0`) do not move the minor axis.
///
/// Arithmetic is `i128` so that any pair of `i64` endpoints (including the
/// saturated results of a degenerate transform) is stepped without overflow.
#[derive(Debug, Clone)]
pub struct LineMidpointInterpolator {
    x: i128,
    row: i128,
    step_x: i128,
    step_row: i128,
    d: i128,
    delta_e: i128,
    delta_ne: i128,
    steep: bool,
    len: u128,
    remaining: u128,
}

impl LineMidpointInterpolator {
    /// Interpolator from `(x0, y0)` to `(x1, y1)` on a canvas `height` rows
    /// tall (used only to flip Y into storage rows).
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64, height: u32) -> Self {
        let (x0, y0, x1, y1) = (x0 as i128, y0 as i128, x1 as i128, y1 as i128);
        let step_x = if x1 < x0 { -1 } else { 1 };
        let step_y = if y1 < y0 { -1 } else { 1 };

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let row = height as i128 - y0 - 1;

        let steep = dy > dx;
        let (major, minor) = if steep { (dy, dx) } else { (dx, dy) };
        let len = major as u128 + 1;

        Self {
            x: x0,
            row,
            step_x,
            step_row: -step_y,
            d: 2 * minor - major,
            delta_e: 2 * minor,
            delta_ne: 2 * (minor - major),
            steep,
            len,
            remaining: len,
        }
    }

    /// Total number of pixels in the segment: `max(dx, dy) + 1`.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u128 {
        self.len
    }

    /// Advance one step along the driving axis.
    #[inline]
    fn step(&mut self) {
        if self.steep {
            self.row += self.step_row;
            if self.d > 0 {
                self.x += self.step_x;
                self.d += self.delta_ne;
            } else {
                self.d += self.delta_e;
            }
        } else {
            self.x += self.step_x;
            if self.d > 0 {
                self.row += self.step_row;
                self.d += self.delta_ne;
            } else {
                self.d += self.delta_e;
            }
        }
    }
}

impl Iterator for LineMidpointInterpolator {
    /// `(column, storage_row)`, unwrapped.
    type Item = (i128, i128);

    fn next(&mut self) -> Option<(i128, i128)> {
        if self.remaining == 0 {
            return None;
        }
        let current = (self.x, self.row);
        self.remaining -= 1;
        if self.remaining > 0 {
            self.step();
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
