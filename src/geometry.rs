//! Geometry builder.
//!
//! Expands the drawable shapes (line, open polyline, closed polygon outline)
//! into ordered point pairs, transforms every endpoint from model to device
//! coordinates, and hands each segment to the line renderer.

use crate::basics::PointI;
use crate::pixfmt_rgb::PixelFormat;
use crate::renderer_primitives::RendererPrimitives;
use crate::trans_perspective::TransPerspective;

// ============================================================================
// Shape
// ============================================================================

/// A drawable primitive in model coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A single segment.
    Line(PointI, PointI),
    /// `N` points, `N - 1` segments, open.
    Polyline(Vec<PointI>),
    /// `N` points, `N` segments, the last one closing back to the start.
    Polygon(Vec<PointI>),
}

impl Shape {
    /// The segments this shape rasterizes, in drawing order.
    pub fn segments(&self) -> Vec<(PointI, PointI)> {
        match self {
            Shape::Line(p0, p1) => vec![(*p0, *p1)],
            Shape::Polyline(points) => segments(points, false).collect(),
            Shape::Polygon(points) => segments(points, true).collect(),
        }
    }
}

/// Consecutive point pairs `p[i] → p[i+1]`, plus `p[n-1] → p[0]` when
/// `closed`. A single closed point yields one degenerate pair `p0 → p0`.
pub fn segments(points: &[PointI], closed: bool) -> impl Iterator<Item = (PointI, PointI)> + '_ {
    let open = points.windows(2).map(|w| (w[0], w[1]));
    let closing = match (closed, points.first(), points.last()) {
        (true, Some(&first), Some(&last)) => Some((last, first)),
        _ => None,
    };
    open.chain(closing)
}

// ============================================================================
// ShapeRenderer
// ============================================================================

/// Draws shapes through a transform into a pixel format.
///
/// Every endpoint is transformed with the matrix given at construction, i.e.
/// the transform in effect when the drawing command runs.
pub struct ShapeRenderer<'a, PF: PixelFormat> {
    prim: RendererPrimitives<'a, PF>,
    trans: TransPerspective,
}

impl<'a, PF: PixelFormat> ShapeRenderer<'a, PF>
where
    PF::ColorType: Default + Clone,
{
    pub fn new(ren: &'a mut PF, trans: TransPerspective, color: PF::ColorType) -> Self {
        let mut prim = RendererPrimitives::new(ren);
        prim.set_line_color(color);
        Self { prim, trans }
    }

    pub fn transform(&self) -> &TransPerspective {
        &self.trans
    }

    /// Transform both endpoints and draw one segment.
    pub fn line(&mut self, p0: PointI, p1: PointI) {
        let d0 = self.trans.transform_point(p0);
        let d1 = self.trans.transform_point(p1);
        self.prim.line(d0.x, d0.y, d1.x, d1.y);
    }

    /// Draw `points.len() - 1` connected segments.
    pub fn polyline(&mut self, points: &[PointI]) {
        for (p0, p1) in segments(points, false) {
            self.line(p0, p1);
        }
    }

    /// Draw the outline of a closed polygon.
    pub fn polygon(&mut self, points: &[PointI]) {
        for (p0, p1) in segments(points, true) {
            self.line(p0, p1);
        }
    }

    pub fn draw(&mut self, shape: &Shape) {
        match shape {
            Shape::Line(p0, p1) => self.line(*p0, *p1),
            Shape::Polyline(points) => self.polyline(points),
            Shape::Polygon(points) => self.polygon(points),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
