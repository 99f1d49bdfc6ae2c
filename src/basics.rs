//! Foundation types, constants, and coordinate conversion.
//!
//! Limits of the EA979V3 input format, the point types shared by the
//! geometry and transform modules, and the float-to-device conversion used
//! after the perspective divide.

// ============================================================================
// Format limits
// ============================================================================

/// Magic string expected on the first line of every input.
pub const MAGIC: &str = "EA979V3";

/// Largest accepted canvas width or height.
pub const MAX_SIZE: u32 = 1024;

/// Longest accepted input line, terminator excluded.
pub const MAX_LINE_LEN: usize = 10240 - 1;

/// Maximum channel value written into the image header.
pub const MAX_VAL: u32 = 255;

/// Number of entries in a 3×3 transform matrix.
pub const TRANSFORM_N: usize = 9;

// ============================================================================
// Numeric helpers
// ============================================================================

/// Truncate a device coordinate toward zero.
///
/// Saturates instead of wrapping: `+inf` maps to `i64::MAX`, `-inf` to
/// `i64::MIN` and NaN to 0. A zero homogeneous coordinate therefore produces
/// an extreme but valid integer rather than a panic.
#[inline]
pub fn itrunc(v: f64) -> i64 {
    v as i64
}

/// Check whether two values are within `epsilon` of each other.
#[inline]
pub fn is_equal_eps(v1: f64, v2: f64, epsilon: f64) -> bool {
    (v1 - v2).abs() <= epsilon
}

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Integer point, used for both model coordinates (as read from commands)
/// and device coordinates (after the transform).
pub type PointI = PointBase<i64>;

// ============================================================================
// Tests
// ============================================================================
