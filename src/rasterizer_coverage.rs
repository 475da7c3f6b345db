//! Exact-area coverage rasterizer.
//!
//! Each stroke polygon is scanned over its integer bounding box. A pixel's
//! coverage is the area of the polygon clipped to the unit square centered
//! on the pixel, so antialiasing is analytic rather than sampled.
//!
//! Scans run along the longer side of the bounding box. Because every stroke
//! piece is convex, a scan line crosses its boundary at most twice: once a
//! fully covered pixel is found, the scan probes back from the far end for
//! another one, and everything strictly between the two is filled with 1.0
//! without clipping.

use crate::basics::PointD;
use crate::coverage_grid::CoverageGrid;
use crate::error::Result;
use crate::math_stroke::StrokeBuilder;
use crate::polygon::Polygon;

/// Accumulate the coverage of one convex polygon into `grid`.
pub fn rasterize_polygon(polygon: &Polygon, grid: &mut CoverageGrid) {
    let b = polygon.bounds();
    if !b.is_valid() {
        return;
    }

    let (x1, x2) = (b.x1.floor() as i64, b.x2.ceil() as i64);
    let (y1, y2) = (b.y1.floor() as i64, b.y2.ceil() as i64);

    // Tall pieces are scanned column by column, wide ones row by row.
    let steep = b.height() > b.width();
    let (major, minor) = if steep {
        ((x1, x2), (y1, y2))
    } else {
        ((y1, y2), (x1, x2))
    };
    let pixel = |m: i64, n: i64| if steep { (m, n) } else { (n, m) };

    for m in major.0..=major.1 {
        scan_line(polygon, grid, minor, |n| pixel(m, n));
    }
}

fn scan_line<F>(polygon: &Polygon, grid: &mut CoverageGrid, (lo, hi): (i64, i64), pixel: F)
where
    F: Fn(i64) -> (i64, i64),
{
    let mut put = |n: i64, area: f64| {
        let (x, y) = pixel(n);
        if area > 0.0 {
            grid.accumulate(x, y, area);
        }
    };
    let coverage = |n: i64| {
        let (x, y) = pixel(n);
        polygon.coverage(x, y)
    };

    for n1 in lo..=hi {
        let area = coverage(n1);
        put(n1, area);
        if area == 1.0 {
            for n2 in (n1 + 1..=hi).rev() {
                let area = coverage(n2);
                put(n2, area);
                if area == 1.0 {
                    for n in n1 + 1..n2 {
                        put(n, 1.0);
                    }
                    break;
                }
            }
            return;
        }
    }
}

/// Stroke `path` with `line_width` and accumulate it into `grid`.
///
/// An empty path draws nothing; a single point deposits a full pixel at its
/// (rounded) position.
pub fn rasterize_path(path: &[PointD], line_width: f64, grid: &mut CoverageGrid) -> Result<()> {
    match path {
        [] => Ok(()),
        [p] => {
            grid.accumulate(p.x.round() as i64, p.y.round() as i64, 1.0);
            Ok(())
        }
        _ => {
            for polygon in StrokeBuilder::new(line_width).build(path)? {
                rasterize_polygon(&polygon, grid);
            }
            Ok(())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn path(pts: &[(f64, f64)]) -> Vec<PointD> {
        pts.iter().map(|&(x, y)| PointD::new(x, y)).collect()
    }

    /// Reference: clip every pixel, no fill shortcut.
    fn brute_force(polygon: &Polygon, grid: &mut CoverageGrid) {
        let b = polygon.bounds();
        for y in b.y1.floor() as i64..=b.y2.ceil() as i64 {
            for x in b.x1.floor() as i64..=b.x2.ceil() as i64 {
                grid.accumulate(x, y, polygon.coverage(x, y));
            }
        }
    }

    #[test]
    fn test_horizontal_stroke_conserves_area() {
        let mut g = CoverageGrid::new(40, 40).unwrap();
        rasterize_path(&path(&[(10.0, 20.0), (20.0, 20.0)]), 2.0, &mut g).unwrap();
        assert!((g.sum() - 10.0 * 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_vertical_stroke_conserves_area() {
        let mut g = CoverageGrid::new(40, 40).unwrap();
        rasterize_path(&path(&[(10.0, 5.0), (10.0, 35.0)]), 4.0, &mut g).unwrap();
        assert!((g.sum() - 30.0 * 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_horizontal_stroke_pixels() {
        let mut g = CoverageGrid::new(40, 40).unwrap();
        rasterize_path(&path(&[(10.0, 20.0), (20.0, 20.0)]), 2.0, &mut g).unwrap();
        // Rows 19 and 21 are half covered, row 20 fully; columns 10 and 20
        // are half covered by the butt ends.
        assert_eq!(g.get(15, 20), Some(1.0));
        assert_eq!(g.get(15, 19), Some(0.5));
        assert_eq!(g.get(15, 21), Some(0.5));
        assert_eq!(g.get(10, 20), Some(0.5));
        assert_eq!(g.get(15, 22), Some(0.0));
        assert_eq!(g.get(9, 20), Some(0.0));
    }

    #[test]
    fn test_fill_shortcut_matches_brute_force() {
        let polys = StrokeBuilder::new(6.0)
            .build(&path(&[(3.0, 4.0), (30.0, 11.0), (18.0, 33.0), (37.0, 36.0)]))
            .unwrap();
        let mut fast = CoverageGrid::new(48, 48).unwrap();
        let mut slow = CoverageGrid::new(48, 48).unwrap();
        for p in &polys {
            rasterize_polygon(p, &mut fast);
            brute_force(p, &mut slow);
        }
        for (a, b) in fast.cells().iter().zip(slow.cells()) {
            assert!((a - b).abs() < 1e-5);
        }
    }

    #[test]
    fn test_overlapping_strokes_add_up() {
        let mut g = CoverageGrid::new(40, 40).unwrap();
        let p = path(&[(5.0, 10.0), (30.0, 10.0)]);
        rasterize_path(&p, 2.0, &mut g).unwrap();
        rasterize_path(&p, 2.0, &mut g).unwrap();
        assert_eq!(g.get(15, 10), Some(2.0));
    }

    #[test]
    fn test_turn_has_no_gap_or_double_count() {
        let mut g = CoverageGrid::new(40, 40).unwrap();
        rasterize_path(&path(&[(5.0, 5.0), (20.0, 5.0), (20.0, 25.0)]), 2.0, &mut g).unwrap();
        // Two overlapping 15x2 and 20x2 rectangles plus the bevel triangle.
        assert!((g.sum() - (30.0 + 40.0 - 1.0 + 0.5)).abs() < 1e-3);
        for &c in g.cells() {
            assert!(c <= 1.0 + 1e-5);
        }
        // The corner pixel is fully covered.
        assert!((g.get(20, 5).unwrap() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_single_point_and_empty() {
        let mut g = CoverageGrid::new(8, 8).unwrap();
        rasterize_path(&[], 2.0, &mut g).unwrap();
        assert_eq!(g.sum(), 0.0);
        rasterize_path(&path(&[(3.0, 4.0)]), 2.0, &mut g).unwrap();
        assert_eq!(g.get(3, 4), Some(1.0));
        assert_eq!(g.sum(), 1.0);
    }

    #[test]
    fn test_spill_outside_grid_is_dropped() {
        let mut g = CoverageGrid::new(10, 10).unwrap();
        rasterize_path(&path(&[(-3.0, 5.0), (12.0, 5.0)]), 4.0, &mut g).unwrap();
        // Only the part over pixels 0..=9, i.e. x in -0.5..9.5, lands.
        assert!((g.sum() - 10.0 * 4.0).abs() < 1e-3);
    }
}
