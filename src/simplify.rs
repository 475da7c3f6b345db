//! Path simplification.
//!
//! Ramer–Douglas–Peucker reduction of a pixel-space path. Retention is
//! tracked with one flag per input point, and subranges still to be examined
//! are kept on an explicit stack so very long tracks cannot exhaust the call
//! stack.

use crate::basics::PointD;
use crate::math::calc_segment_point_sq_distance;

/// Squared distance, in pixels², a point must exceed from its chord to be
/// retained.
pub const SIMPLIFY_SQ_TOLERANCE: f64 = 1.0;

/// Drop consecutive exact duplicates, keeping the first of each run.
pub fn dedup_consecutive(points: &mut Vec<PointD>) {
    points.dedup();
}

/// Simplify `points` with [`SIMPLIFY_SQ_TOLERANCE`].
///
/// The input is expected to be free of consecutive duplicates. Endpoints are
/// always kept, order is preserved, and only original points are returned.
pub fn simplify_path(points: &[PointD]) -> Vec<PointD> {
    simplify_dp(points, SIMPLIFY_SQ_TOLERANCE)
}

/// Ramer–Douglas–Peucker with an explicit squared tolerance.
///
/// For each subrange `[first, last]` the interior point farthest from the
/// segment `first → last` is retained when its squared distance exceeds
/// `sq_tolerance`, and both halves are examined in turn. Otherwise every
/// interior point of the subrange is dropped.
pub fn simplify_dp(points: &[PointD], sq_tolerance: f64) -> Vec<PointD> {
    let len = points.len();
    if len <= 2 {
        return points.to_vec();
    }

    let mut markers = vec![false; len];
    markers[0] = true;
    markers[len - 1] = true;

    let mut ranges = vec![(0usize, len - 1)];
    while let Some((first, last)) = ranges.pop() {
        let mut max_sq_dist = 0.0;
        let mut index = first;

        for i in first + 1..last {
            let sq_dist = calc_segment_point_sq_distance(points[first], points[last], points[i]);
            if sq_dist > max_sq_dist {
                index = i;
                max_sq_dist = sq_dist;
            }
        }

        if max_sq_dist > sq_tolerance {
            markers[index] = true;
            ranges.push((index, last));
            ranges.push((first, index));
        }
    }

    points
        .iter()
        .zip(markers)
        .filter_map(|(&p, keep)| keep.then_some(p))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
