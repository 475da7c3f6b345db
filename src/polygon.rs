//! Convex polygons and exact unit-square clipping.
//!
//! Stroke pieces are small convex polygons. Pixel coverage is the area left
//! after clipping such a polygon against the pixel's unit square, which is
//! done as four successive half-plane passes (top, right, bottom, left) in
//! the Sutherland–Hodgman style.

use crate::basics::{PointD, RectD};

// ============================================================================
// Polygon
// ============================================================================

/// An ordered list of corners. Stroke polygons are convex and wound
/// clockwise on a y-down raster (positive [`Polygon::signed_area`]).
///
/// The bounding rectangle is computed once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    corners: Vec<PointD>,
    bounds: RectD,
}

impl Polygon {
    pub fn new(corners: Vec<PointD>) -> Self {
        let bounds = calc_bounds(&corners);
        Self { corners, bounds }
    }

    pub fn corners(&self) -> &[PointD] {
        &self.corners
    }

    pub fn len(&self) -> usize {
        self.corners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    /// Axis-aligned bounds (min/max over all corners).
    ///
    /// An empty polygon has inverted (invalid) bounds.
    pub fn bounds(&self) -> RectD {
        self.bounds
    }

    /// Shoelace sum halved. Positive for clockwise winding on a y-down
    /// raster.
    pub fn signed_area(&self) -> f64 {
        let n = self.corners.len();
        if n < 3 {
            return 0.0;
        }
        let mut total = 0.0;
        let mut prev = self.corners[n - 1];
        for &c in &self.corners {
            total += prev.x * c.y - c.x * prev.y;
            prev = c;
        }
        0.5 * total
    }

    /// Enclosed area, always non-negative.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Clip against an axis-aligned rectangle.
    ///
    /// The result is the intersection of this (convex) polygon with `rect`;
    /// it may have fewer than three corners when they do not overlap.
    pub fn clip(&self, rect: &RectD) -> Polygon {
        let mut corners = clip_edge(&self.corners, Edge::Top(rect.y1));
        corners = clip_edge(&corners, Edge::Right(rect.x2));
        corners = clip_edge(&corners, Edge::Bottom(rect.y2));
        corners = clip_edge(&corners, Edge::Left(rect.x1));
        Polygon::new(corners)
    }

    /// Exact fraction of the unit pixel centered on `(x, y)` covered by this
    /// polygon.
    #[inline]
    pub fn coverage(&self, x: i64, y: i64) -> f64 {
        self.clip(&RectD::pixel(x, y)).area()
    }
}

fn calc_bounds(corners: &[PointD]) -> RectD {
    let mut r = RectD::new(
        f64::INFINITY,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NEG_INFINITY,
    );
    for c in corners {
        r.x1 = r.x1.min(c.x);
        r.y1 = r.y1.min(c.y);
        r.x2 = r.x2.max(c.x);
        r.y2 = r.y2.max(c.y);
    }
    r
}

// ============================================================================
// Half-plane clipping
// ============================================================================

/// One side of the clip rectangle. The kept half-plane is the open interior
/// side of the boundary.
#[derive(Debug, Clone, Copy)]
enum Edge {
    Top(f64),
    Right(f64),
    Bottom(f64),
    Left(f64),
}

impl Edge {
    #[inline]
    fn inside(self, p: PointD) -> bool {
        match self {
            Edge::Top(y) => p.y > y,
            Edge::Right(x) => p.x < x,
            Edge::Bottom(y) => p.y < y,
            Edge::Left(x) => p.x > x,
        }
    }

    /// Point where segment `a → b` crosses the boundary. Only called when
    /// exactly one end is inside, so the denominator is non-zero.
    #[inline]
    fn intersect(self, a: PointD, b: PointD) -> PointD {
        match self {
            Edge::Top(y) | Edge::Bottom(y) => {
                let t = (y - a.y) / (b.y - a.y);
                PointD::new(a.x + t * (b.x - a.x), y)
            }
            Edge::Right(x) | Edge::Left(x) => {
                let t = (x - a.x) / (b.x - a.x);
                PointD::new(x, a.y + t * (b.y - a.y))
            }
        }
    }
}

fn clip_edge(corners: &[PointD], edge: Edge) -> Vec<PointD> {
    let mut result = Vec::with_capacity(corners.len() + 2);
    let Some(&last) = corners.last() else {
        return result;
    };

    let mut prev = last;
    let mut prev_inside = edge.inside(prev);
    for &point in corners {
        let inside = edge.inside(point);
        if inside != prev_inside {
            result.push(edge.intersect(prev, point));
        }
        if inside {
            result.push(point);
        }
        prev = point;
        prev_inside = inside;
    }
    result
}

// ============================================================================
// Tests
// ============================================================================
