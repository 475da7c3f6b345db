//! Stroke construction.
//!
//! Turns a pixel-space polyline into convex polygons whose union is the
//! stroked line: one body quad per segment plus a bevel wedge at every
//! turning vertex. Every polygon is wound clockwise on a y-down raster and
//! neighbouring pieces share edges exactly, so summing their pixel coverage
//! neither leaves gaps nor counts any area twice.
//!
//! ```text
//!  ---------------o1  e1
//!                 |    \
//!  ---------------i     e2
//!                 |      |
//!                 |  o2  |
//! ```
//!
//! At a turn the two inner offset lines meet at the inside corner `i`. Its
//! reflections across each segment's centerline (`o1`, `o2`) close the body
//! quads; the wedge `i, o1, e1, e2, o2` fills the corner, where `e1`/`e2`
//! are the outer offsets of each segment at the vertex.

use crate::basics::PointD;
use crate::error::{HeatmapError, Result};
use crate::math::{Line, Vector, COLINEAR_EPSILON};
use crate::polygon::Polygon;

// ============================================================================
// StrokeBuilder
// ============================================================================

/// Builds stroke polygons for a fixed line width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeBuilder {
    width: f64,
}

/// Left/right corners carried from one vertex to the next, relative to the
/// direction of travel.
#[derive(Debug, Clone, Copy)]
struct Corners {
    left: PointD,
    right: PointD,
}

impl StrokeBuilder {
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Stroke `path`.
    ///
    /// Consecutive duplicate points are ignored. Fails with
    /// [`HeatmapError::Geometry`] if fewer than two distinct points remain.
    pub fn build(&self, path: &[PointD]) -> Result<Vec<Polygon>> {
        let mut points = path.to_vec();
        points.dedup();
        if points.len() < 2 {
            return Err(HeatmapError::Geometry {
                points: points.len(),
            });
        }

        let half = self.width * 0.5;
        let last = points.len() - 1;
        let mut polygons = Vec::with_capacity(points.len() * 2);
        let mut prev: Option<Corners> = None;

        for i in 0..=last {
            let cur = points[i];
            // v1 points back along the incoming segment, v2 forward along the
            // outgoing one. The missing one at either end is synthesized so
            // the end vertices count as straight.
            let v1 = if i == 0 {
                Vector::between(cur, points[1])
            } else {
                Vector::between(cur, points[i - 1])
            };
            let v2 = if i == last {
                Vector::between(points[i - 1], cur)
            } else {
                Vector::between(cur, points[i + 1])
            };

            let (Some(n1), Some(n2)) = (v1.normalize(), v2.normalize()) else {
                continue;
            };

            let det = n1.cross(n2);
            if det.abs() < COLINEAR_EPSILON {
                // Straight through, or a full reversal at an interior vertex.
                let reversal = i > 0 && i < last && n1.dot(n2) > 0.0;
                let along = if reversal { -n1 } else { n2 };
                let offset = along.orthogonal() * half;
                let here = Corners {
                    left: offset.offset(cur),
                    right: (-offset).offset(cur),
                };
                if let Some(p) = prev {
                    polygons.push(clockwise(vec![p.right, p.left, here.left, here.right]));
                }
                prev = Some(if reversal {
                    Corners {
                        left: here.right,
                        right: here.left,
                    }
                } else {
                    here
                });
                continue;
            }

            let Some(bisector) = (n1 + n2).normalize() else {
                continue;
            };
            let cos_t = n1.dot(bisector);
            let sin_t = (1.0 - cos_t * cos_t).max(0.0).sqrt();

            // A sharp turn pushes the inner corner far out; never past the
            // nearer neighbour.
            let d = v1.length().min(v2.length()).min(half / sin_t);
            let inside = (bisector * d).offset(cur);

            let outside1 = Line::new(cur, n1.offset(cur)).mirror(inside);
            let outside2 = Line::new(cur, n2.offset(cur)).mirror(inside);
            let outer1 = outer_offset(cur, n1, inside, half);
            let outer2 = outer_offset(cur, n2, inside, half);

            if det < 0.0 {
                // Outgoing segment turns to the right of the incoming one.
                if let Some(p) = prev {
                    polygons.push(clockwise(vec![p.right, p.left, outside1, inside]));
                    polygons.push(clockwise(vec![inside, outside1, outer1, outer2, outside2]));
                }
                prev = Some(Corners {
                    left: outside2,
                    right: inside,
                });
            } else {
                if let Some(p) = prev {
                    polygons.push(clockwise(vec![p.right, p.left, inside, outside1]));
                    polygons.push(clockwise(vec![inside, outside2, outer2, outer1, outside1]));
                }
                prev = Some(Corners {
                    left: inside,
                    right: outside2,
                });
            }
        }

        Ok(polygons)
    }
}

/// Polygon over `corners`, reversed if they wind counter-clockwise. Two
/// sharp turns in a row can carry a segment's start corners past its end
/// corners, which mirrors the body quad.
fn clockwise(corners: Vec<PointD>) -> Polygon {
    let poly = Polygon::new(corners);
    if poly.signed_area() >= 0.0 {
        return poly;
    }
    let mut corners = poly.corners().to_vec();
    corners.reverse();
    Polygon::new(corners)
}

/// Offset of `cur` by `half` along the normal of direction `dir`, on the
/// side away from `inside`.
fn outer_offset(cur: PointD, dir: Vector, inside: PointD, half: f64) -> PointD {
    let normal = dir.orthogonal();
    let normal = if normal.dot(Vector::between(cur, inside)) > 0.0 {
        -normal
    } else {
        normal
    };
    (normal * half).offset(cur)
}

/// Stroke `path` with the given `width`. See [`StrokeBuilder::build`].
pub fn stroke_polygons(path: &[PointD], width: f64) -> Result<Vec<Polygon>> {
    StrokeBuilder::new(width).build(path)
}

// ============================================================================
// Tests
// ============================================================================
