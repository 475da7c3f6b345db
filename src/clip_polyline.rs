//! Polyline clipping against a geographic bounding box.
//!
//! Cohen-Sutherland outcodes with point moving, applied segment by segment
//! in lon/lat space. A track that leaves the box and comes back is split
//! into one piece per visit.

use crate::tile::BoundingBox;

// ============================================================================
// Clipping flags (Cohen-Sutherland outcodes)
// ============================================================================

pub const CLIPPING_FLAGS_EAST: u32 = 1;
pub const CLIPPING_FLAGS_NORTH: u32 = 2;
pub const CLIPPING_FLAGS_WEST: u32 = 4;
pub const CLIPPING_FLAGS_SOUTH: u32 = 8;
pub const CLIPPING_FLAGS_X_CLIPPED: u32 = CLIPPING_FLAGS_WEST | CLIPPING_FLAGS_EAST;
pub const CLIPPING_FLAGS_Y_CLIPPED: u32 = CLIPPING_FLAGS_SOUTH | CLIPPING_FLAGS_NORTH;

/// Outcode of `[lon, lat]` against `bbox`.
///
/// ```text
///        |        |
///  0110  |  0010  | 0011
///        |        |
/// -------+--------+-------- north
///        |        |
///  0100  |  0000  | 0001
///        |        |
/// -------+--------+-------- south
///        |        |
///  1100  |  1000  | 1001
///        |        |
///      west     east
/// ```
#[inline]
pub fn clipping_flags([lon, lat]: [f64; 2], bbox: &BoundingBox) -> u32 {
    (lon > bbox.east) as u32
        | (((lat > bbox.north) as u32) << 1)
        | (((lon < bbox.west) as u32) << 2)
        | (((lat < bbox.south) as u32) << 3)
}

/// Slide `p`, an end of segment `a → b` with outcode `flags`, along the
/// segment onto the box edge. Returns `None` if the segment misses the box.
fn clip_move_point(
    a: [f64; 2],
    b: [f64; 2],
    bbox: &BoundingBox,
    mut p: [f64; 2],
    flags: u32,
) -> Option<[f64; 2]> {
    let [x1, y1] = a;
    let [x2, y2] = b;

    if flags & CLIPPING_FLAGS_X_CLIPPED != 0 {
        if x1 == x2 {
            return None;
        }
        let bound = if flags & CLIPPING_FLAGS_WEST != 0 {
            bbox.west
        } else {
            bbox.east
        };
        p = [bound, (bound - x1) * (y2 - y1) / (x2 - x1) + y1];
    }

    let flags = clipping_flags(p, bbox) & CLIPPING_FLAGS_Y_CLIPPED;
    if flags != 0 {
        if y1 == y2 {
            return None;
        }
        let bound = if flags & CLIPPING_FLAGS_SOUTH != 0 {
            bbox.south
        } else {
            bbox.north
        };
        p = [(bound - y1) * (x2 - x1) / (y2 - y1) + x1, bound];
    }

    // Passing beside a corner moves the point onto an edge's extension.
    (clipping_flags(p, bbox) == 0).then_some(p)
}

/// Visible part of segment `a → b`, or `None` if none of it (or only a
/// single point) lies inside `bbox`.
pub fn clip_segment(a: [f64; 2], b: [f64; 2], bbox: &BoundingBox) -> Option<([f64; 2], [f64; 2])> {
    let f1 = clipping_flags(a, bbox);
    let f2 = clipping_flags(b, bbox);

    if f1 | f2 == 0 {
        return Some((a, b));
    }
    if f1 & CLIPPING_FLAGS_X_CLIPPED != 0
        && f1 & CLIPPING_FLAGS_X_CLIPPED == f2 & CLIPPING_FLAGS_X_CLIPPED
    {
        return None;
    }
    if f1 & CLIPPING_FLAGS_Y_CLIPPED != 0
        && f1 & CLIPPING_FLAGS_Y_CLIPPED == f2 & CLIPPING_FLAGS_Y_CLIPPED
    {
        return None;
    }

    let p = if f1 != 0 {
        clip_move_point(a, b, bbox, a, f1)?
    } else {
        a
    };
    let q = if f2 != 0 {
        clip_move_point(a, b, bbox, b, f2)?
    } else {
        b
    };
    (p != q).then_some((p, q))
}

/// Clip `path` to `bbox`, returning every visible piece with at least two
/// points, in travel order.
pub fn clip_polyline(path: &[[f64; 2]], bbox: &BoundingBox) -> Vec<Vec<[f64; 2]>> {
    let mut pieces = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();

    fn flush(current: &mut Vec<[f64; 2]>, pieces: &mut Vec<Vec<[f64; 2]>>) {
        if current.len() >= 2 {
            pieces.push(std::mem::take(current));
        } else {
            current.clear();
        }
    }

    for w in path.windows(2) {
        let (a, b) = (w[0], w[1]);
        match clip_segment(a, b, bbox) {
            Some((p, q)) => {
                if current.last() != Some(&p) {
                    flush(&mut current, &mut pieces);
                    current.push(p);
                }
                current.push(q);
                if q != b {
                    // Left the box.
                    flush(&mut current, &mut pieces);
                }
            }
            None => flush(&mut current, &mut pieces),
        }
    }
    flush(&mut current, &mut pieces);
    pieces
}

// ============================================================================
// Tests
// ============================================================================
