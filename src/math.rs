//! Geometric math utilities.
//!
//! Vectors, infinite lines, and the distance helpers used by path
//! simplification and stroke construction.

use core::ops::{Add, Mul, Neg, Sub};

use crate::basics::PointD;

// ============================================================================
// Constants
// ============================================================================

/// Coinciding points maximal distance (epsilon).
pub const VERTEX_DIST_EPSILON: f64 = 1e-14;

/// Below this magnitude the cross product of two unit vectors is treated as
/// zero, i.e. the vectors are parallel.
///
/// Pixel-space paths have integer coordinates bounded by a few hundred, so the
/// smallest non-zero normalized cross product is many orders of magnitude
/// above this.
pub const COLINEAR_EPSILON: f64 = 1e-9;

// ============================================================================
// Distance calculations
// ============================================================================

/// Squared Euclidean distance between two points.
#[inline]
pub fn calc_sq_distance(a: PointD, b: PointD) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

/// Compute the parameter `u` for the projection of `p` onto the segment
/// `a → b`. Returns 0 if the segment is degenerate.
#[inline]
pub fn calc_segment_point_u(a: PointD, b: PointD, p: PointD) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;

    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }

    ((p.x - a.x) * dx + (p.y - a.y) * dy) / (dx * dx + dy * dy)
}

/// Squared distance from `p` to the closest point on segment `a → b`.
///
/// Projections falling before `a` or after `b` are clamped to the segment
/// ends, so a degenerate segment measures the distance to `a`.
#[inline]
pub fn calc_segment_point_sq_distance(a: PointD, b: PointD, p: PointD) -> f64 {
    let u = calc_segment_point_u(a, b, p);
    if u <= 0.0 {
        calc_sq_distance(p, a)
    } else if u >= 1.0 {
        calc_sq_distance(p, b)
    } else {
        calc_sq_distance(p, PointD::new(a.x + u * (b.x - a.x), a.y + u * (b.y - a.y)))
    }
}

// ============================================================================
// Vector
// ============================================================================

/// A 2D direction/displacement.
///
/// `length` and `cross` are pure functions of the components; nothing is
/// cached on the value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement from `from` to `to`.
    #[inline]
    pub fn between(from: PointD, to: PointD) -> Self {
        Self::new(to.x - from.x, to.y - from.y)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector with the same direction, or `None` for a zero-length
    /// vector.
    #[inline]
    pub fn normalize(self) -> Option<Vector> {
        let len = self.length();
        if len < VERTEX_DIST_EPSILON {
            return None;
        }
        Some(Vector::new(self.x / len, self.y / len))
    }

    #[inline]
    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (determinant). Positive when `other` is rotated
    /// clockwise from `self` as seen on a y-down raster.
    #[inline]
    pub fn cross(self, other: Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// The vector rotated a quarter turn: `(y, -x)`.
    ///
    /// In y-down pixel space this points to the left of the direction of
    /// travel.
    #[inline]
    pub fn orthogonal(self) -> Vector {
        Vector::new(self.y, -self.x)
    }

    /// Translate `p` by this vector.
    #[inline]
    pub fn offset(self, p: PointD) -> PointD {
        PointD::new(p.x + self.x, p.y + self.y)
    }
}

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

// ============================================================================
// Line
// ============================================================================

/// An unbounded line through two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub p1: PointD,
    pub p2: PointD,
}

impl Line {
    pub fn new(p1: PointD, p2: PointD) -> Self {
        Self { p1, p2 }
    }

    /// Orthogonal projection of `p` onto the line.
    ///
    /// A degenerate line (`p1 == p2`) projects everything onto `p1`.
    pub fn project(&self, p: PointD) -> PointD {
        let dir = Vector::between(self.p1, self.p2);
        let denom = dir.dot(dir);
        if denom == 0.0 {
            return self.p1;
        }
        let t = dir.dot(Vector::between(self.p1, p)) / denom;
        (dir * t).offset(self.p1)
    }

    /// Point reflection of `p` across the line.
    pub fn mirror(&self, p: PointD) -> PointD {
        let q = self.project(p);
        PointD::new(2.0 * q.x - p.x, 2.0 * q.y - p.y)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> PointD {
        PointD::new(x, y)
    }

    #[test]
    fn test_sq_distance() {
        assert!((calc_sq_distance(pt(0.0, 0.0), pt(3.0, 4.0)) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_distance_interior() {
        let d = calc_segment_point_sq_distance(pt(0.0, 0.0), pt(10.0, 0.0), pt(5.0, 2.0));
        assert!((d - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_distance_clamped_to_ends() {
        let d = calc_segment_point_sq_distance(pt(0.0, 0.0), pt(10.0, 0.0), pt(13.0, 4.0));
        assert!((d - 25.0).abs() < 1e-12);
        let d = calc_segment_point_sq_distance(pt(0.0, 0.0), pt(10.0, 0.0), pt(-1.0, 0.0));
        assert!((d - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_distance_degenerate() {
        let d = calc_segment_point_sq_distance(pt(1.0, 1.0), pt(1.0, 1.0), pt(4.0, 5.0));
        assert!((d - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_vector_length_and_normalize() {
        let v = Vector::new(3.0, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-12);
        let n = v.normalize().unwrap();
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!((n.x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_zero_vector_does_not_normalize() {
        assert!(Vector::new(0.0, 0.0).normalize().is_none());
    }

    #[test]
    fn test_cross_sign() {
        let east = Vector::new(1.0, 0.0);
        let south = Vector::new(0.0, 1.0);
        assert!(east.cross(south) > 0.0);
        assert!(south.cross(east) < 0.0);
        assert_eq!(east.cross(east * 3.0), 0.0);
    }

    #[test]
    fn test_orthogonal_points_left_in_screen_space() {
        // Heading east on a y-down raster, "left" is towards smaller y.
        let o = Vector::new(1.0, 0.0).orthogonal();
        assert_eq!(o, Vector::new(0.0, -1.0));
        assert_eq!(o.dot(Vector::new(1.0, 0.0)), 0.0);
    }

    #[test]
    fn test_line_project() {
        let l = Line::new(pt(0.0, 0.0), pt(10.0, 10.0));
        let p = l.project(pt(10.0, 0.0));
        assert!((p.x - 5.0).abs() < 1e-12);
        assert!((p.y - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_line_mirror() {
        let l = Line::new(pt(10.0, 0.0), pt(0.0, 0.0));
        let m = l.mirror(pt(9.0, 1.0));
        assert!((m.x - 9.0).abs() < 1e-12);
        assert!((m.y + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mirror_is_involution() {
        let l = Line::new(pt(1.0, 2.0), pt(4.0, -3.0));
        let p = pt(7.5, 0.25);
        let back = l.mirror(l.mirror(p));
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }
}
