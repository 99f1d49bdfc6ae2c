//! Perspective 2D transformations.
//!
//! Full 3×3 projective matrix mapping model coordinates to device
//! coordinates through homogeneous coordinates and a perspective divide.
//! This is the transform state of a render session: it is replaced by the
//! `M` command and post-multiplied by the `m` command.

use crate::basics::{is_equal_eps, itrunc, PointI, TRANSFORM_N};

/// Epsilon for matrix comparisons.
pub const PERSPECTIVE_EPSILON: f64 = 1e-14;

// ============================================================================
// TransPerspective
// ============================================================================

/// Perspective 2D transformation (3×3 projective matrix).
///
/// Points are column vectors, `(x', y', w') = M · (x, y, 1)`:
///
/// ```text
/// | sx  shx  tx |
/// | shy  sy  ty |
/// | w0   w1  w2 |
/// ```
///
/// Transform: `m = 1/(x*w0 + y*w1 + w2)`, then
/// `x' = m*(x*sx + y*shx + tx)`, `y' = m*(x*shy + y*sy + ty)`.
///
/// Row-major arrays (as read from the input format) list the matrix in
/// the order `sx shx tx shy sy ty w0 w1 w2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransPerspective {
    pub sx: f64,
    pub shx: f64,
    pub tx: f64,
    pub shy: f64,
    pub sy: f64,
    pub ty: f64,
    pub w0: f64,
    pub w1: f64,
    pub w2: f64,
}

impl TransPerspective {
    /// Identity matrix.
    pub fn new() -> Self {
        Self {
            sx: 1.0,
            shx: 0.0,
            tx: 0.0,
            shy: 0.0,
            sy: 1.0,
            ty: 0.0,
            w0: 0.0,
            w1: 0.0,
            w2: 1.0,
        }
    }

    /// Matrix from 9 values in row-major order.
    pub fn new_from_row_major(m: &[f64; TRANSFORM_N]) -> Self {
        let mut t = Self::new();
        t.load_from(m);
        t
    }

    /// Translation matrix.
    pub fn new_translation(x: f64, y: f64) -> Self {
        Self::new_from_row_major(&[1.0, 0.0, x, 0.0, 1.0, y, 0.0, 0.0, 1.0])
    }

    /// Non-uniform scaling matrix.
    pub fn new_scaling(x: f64, y: f64) -> Self {
        Self::new_from_row_major(&[x, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, 1.0])
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Reset to identity matrix.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::new();
        self
    }

    /// Post-multiply: `self = self · b`.
    ///
    /// `b` is applied to points first, then the previous `self`.
    pub fn multiply(&mut self, b: &TransPerspective) -> &mut Self {
        let a = *self;
        self.sx = a.sx * b.sx + a.shx * b.shy + a.tx * b.w0;
        self.shx = a.sx * b.shx + a.shx * b.sy + a.tx * b.w1;
        self.tx = a.sx * b.tx + a.shx * b.ty + a.tx * b.w2;
        self.shy = a.shy * b.sx + a.sy * b.shy + a.ty * b.w0;
        self.sy = a.shy * b.shx + a.sy * b.sy + a.ty * b.w1;
        self.ty = a.shy * b.tx + a.sy * b.ty + a.ty * b.w2;
        self.w0 = a.w0 * b.sx + a.w1 * b.shy + a.w2 * b.w0;
        self.w1 = a.w0 * b.shx + a.w1 * b.sy + a.w2 * b.w1;
        self.w2 = a.w0 * b.tx + a.w1 * b.ty + a.w2 * b.w2;
        self
    }

    // -----------------------------------------------------------------------
    // Transformations
    // -----------------------------------------------------------------------

    /// Direct transformation of x and y with perspective divide.
    ///
    /// A zero homogeneous coordinate yields infinities or NaN; no check is
    /// made.
    pub fn transform(&self, x: &mut f64, y: &mut f64) {
        let tx = *x;
        let ty = *y;
        let m = 1.0 / (tx * self.w0 + ty * self.w1 + self.w2);
        *x = m * (tx * self.sx + ty * self.shx + self.tx);
        *y = m * (tx * self.shy + ty * self.sy + self.ty);
    }

    /// Transform an integer model point into an integer device point,
    /// truncating toward zero (saturating on overflow, NaN becomes 0).
    pub fn transform_point(&self, p: PointI) -> PointI {
        let mut x = p.x as f64;
        let mut y = p.y as f64;
        self.transform(&mut x, &mut y);
        PointI::new(itrunc(x), itrunc(y))
    }

    // -----------------------------------------------------------------------
    // Load/Store
    // -----------------------------------------------------------------------

    /// Store matrix to a row-major array of 9 doubles.
    pub fn store_to(&self, m: &mut [f64; TRANSFORM_N]) {
        *m = [
            self.sx, self.shx, self.tx, self.shy, self.sy, self.ty, self.w0, self.w1, self.w2,
        ];
    }

    /// Load matrix from a row-major array of 9 doubles.
    pub fn load_from(&mut self, m: &[f64; TRANSFORM_N]) -> &mut Self {
        self.sx = m[0];
        self.shx = m[1];
        self.tx = m[2];
        self.shy = m[3];
        self.sy = m[4];
        self.ty = m[5];
        self.w0 = m[6];
        self.w1 = m[7];
        self.w2 = m[8];
        self
    }

    // -----------------------------------------------------------------------
    // Auxiliary queries
    // -----------------------------------------------------------------------

    /// Determinant of the 3×3 matrix.
    pub fn determinant(&self) -> f64 {
        self.sx * (self.sy * self.w2 - self.ty * self.w1)
            - self.shx * (self.shy * self.w2 - self.ty * self.w0)
            + self.tx * (self.shy * self.w1 - self.sy * self.w0)
    }

    /// Check if matrix is identity.
    pub fn is_identity(&self) -> bool {
        self.is_equal_eps(&Self::new(), PERSPECTIVE_EPSILON)
    }

    /// Check equality with custom epsilon.
    pub fn is_equal_eps(&self, m: &TransPerspective, epsilon: f64) -> bool {
        let mut a = [0.0; TRANSFORM_N];
        let mut b = [0.0; TRANSFORM_N];
        self.store_to(&mut a);
        m.store_to(&mut b);
        a.iter()
            .zip(b.iter())
            .all(|(&u, &v)| is_equal_eps(u, v, epsilon))
    }
}

impl Default for TransPerspective {
    fn default() -> Self {
        Self::new()
    }
}

/// `a * b` is the matrix product `a · b` (apply `b` first).
impl std::ops::Mul for TransPerspective {
    type Output = TransPerspective;

    fn mul(self, rhs: TransPerspective) -> TransPerspective {
        let mut t = self;
        t.multiply(&rhs);
        t
    }
}

impl std::ops::MulAssign for TransPerspective {
    fn mul_assign(&mut self, rhs: TransPerspective) {
        self.multiply(&rhs);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(t: &TransPerspective, x: f64, y: f64) -> (f64, f64) {
        let (mut x, mut y) = (x, y);
        t.transform(&mut x, &mut y);
        (x, y)
    }

    #[test]
    fn test_identity() {
        let t = TransPerspective::new();
        assert!(t.is_identity());
        assert_eq!(t.determinant(), 1.0);
        let (x, y) = apply(&t, 5.0, 10.0);
        assert!((x - 5.0).abs() < 1e-10);
        assert!((y - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_identity_transform_point() {
        let t = TransPerspective::default();
        for &(x, y) in &[(0, 0), (3, -7), (-1023, 1023), (3_000_000_000, -(1 << 53))] {
            assert_eq!(t.transform_point(PointI::new(x, y)), PointI::new(x, y));
        }
    }

    #[test]
    fn test_compose_identity_unchanged() {
        let m = [2.0, 0.5, 3.0, -1.0, 4.0, 7.0, 0.1, 0.2, 1.5];
        let mut t = TransPerspective::new_from_row_major(&m);
        t.multiply(&TransPerspective::new());
        let mut out = [0.0; 9];
        t.store_to(&mut out);
        assert_eq!(out, m);
    }

    #[test]
    fn test_row_major_layout() {
        let t = TransPerspective::new_from_row_major(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 0.0, 0.0, 1.0]);
        // x' = 1x + 2y + 3, y' = 4x + 5y + 6
        let (x, y) = apply(&t, 1.0, 1.0);
        assert_eq!((x, y), (6.0, 15.0));
    }

    #[test]
    fn test_translation() {
        let t = TransPerspective::new_translation(10.0, 20.0);
        assert_eq!(t.transform_point(PointI::new(1, 2)), PointI::new(11, 22));
    }

    #[test]
    fn test_scaling() {
        let t = TransPerspective::new_scaling(2.0, 3.0);
        assert_eq!(t.transform_point(PointI::new(5, 10)), PointI::new(10, 30));
    }

    #[test]
    fn test_multiply_order() {
        // current = translate, new = scale: scale applies first
        let mut t = TransPerspective::new_translation(10.0, 0.0);
        t.multiply(&TransPerspective::new_scaling(2.0, 2.0));
        assert_eq!(t.transform_point(PointI::new(1, 1)), PointI::new(12, 2));

        let mut u = TransPerspective::new_scaling(2.0, 2.0);
        u.multiply(&TransPerspective::new_translation(10.0, 0.0));
        assert_eq!(u.transform_point(PointI::new(1, 1)), PointI::new(22, 2));
    }

    #[test]
    fn test_operator_mul() {
        let a = TransPerspective::new_translation(1.0, 2.0);
        let b = TransPerspective::new_scaling(3.0, 3.0);
        let c = a * b;
        let mut d = a;
        d *= b;
        assert!(c.is_equal_eps(&d, PERSPECTIVE_EPSILON));
        assert_eq!(c.transform_point(PointI::new(1, 1)), PointI::new(4, 5));
    }

    #[test]
    fn test_perspective_divide() {
        // w' = x + 1
        let t = TransPerspective::new_from_row_major(&[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
        let (x, y) = apply(&t, 3.0, 8.0);
        assert_eq!((x, y), (0.75, 2.0));
        assert_eq!(t.transform_point(PointI::new(3, 8)), PointI::new(0, 2));
    }

    #[test]
    fn test_large_result_not_clamped_to_i32() {
        let t = TransPerspective::new_translation(2_147_483_646.0, 0.0);
        assert_eq!(t.transform_point(PointI::new(3, 0)), PointI::new(2_147_483_649, 0));
        let t = TransPerspective::new_scaling(-4.0, 1.0);
        assert_eq!(
            t.transform_point(PointI::new(1_000_000_000, 1)),
            PointI::new(-4_000_000_000, 1)
        );
    }

    #[test]
    fn test_truncates_toward_zero() {
        let t = TransPerspective::new_scaling(0.5, 0.5);
        assert_eq!(t.transform_point(PointI::new(3, -3)), PointI::new(1, -1));
    }

    #[test]
    fn test_degenerate_divide_does_not_panic() {
        let t = TransPerspective::new_from_row_major(&[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
        let p = t.transform_point(PointI::new(5, -5));
        assert_eq!(p, PointI::new(i64::MAX, i64::MIN));
        let q = t.transform_point(PointI::new(0, 0));
        assert_eq!(q, PointI::new(0, 0));
    }

    #[test]
    fn test_singular_matrix_allowed() {
        let t = TransPerspective::new_from_row_major(&[0.0; 9]);
        assert_eq!(t.determinant(), 0.0);
        assert_eq!(t.transform_point(PointI::new(1, 1)), PointI::new(0, 0));
    }

    #[test]
    fn test_store_load() {
        let m = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let mut t = TransPerspective::new();
        t.load_from(&m);
        let mut out = [0.0; 9];
        t.store_to(&mut out);
        assert_eq!(out, m);
        t.reset();
        assert!(t.is_identity());
    }

    #[test]
    fn test_determinant() {
        let t = TransPerspective::new_scaling(2.0, 3.0);
        assert!((t.determinant() - 6.0).abs() < 1e-10);
        let u = TransPerspective::new_from_row_major(&[2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 1.0]);
        // 2*(3-2) - 0 + 1*(1-3) = 0
        assert!(u.determinant().abs() < 1e-10);
    }
}
