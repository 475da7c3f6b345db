//! Foundation types and constants.
//!
//! Points, rectangles, and the handful of numeric constants every stage of
//! the tile pipeline shares.

// ============================================================================
// Tile constants
// ============================================================================

/// Width and height of a rendered tile, in pixels.
pub const TILE_SIZE: usize = 256;

/// Number of bytes per RGBA pixel.
pub const PIXEL_BYTES: usize = 4;

// ============================================================================
// Mathematical constants
// ============================================================================

pub const PI: f64 = std::f64::consts::PI;

/// Convert degrees to radians.
#[inline]
pub fn deg2rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad2deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

// ============================================================================
// Point
// ============================================================================

/// A 2D point, either in pixel space or in geographic space (x = lon, y = lat)
/// depending on context.
///
/// Equality is exact; consecutive samples are deduplicated with `==`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

pub type PointD = PointBase<f64>;

// ============================================================================
// Rect
// ============================================================================

/// An axis-aligned rectangle defined by its min corner `(x1, y1)` and max
/// corner `(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Returns `true` if the rectangle is valid (non-empty).
    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Returns `true` if the point (x, y) is inside the rectangle, borders
    /// included.
    pub fn hit_test(&self, x: T, y: T) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

impl Rect<f64> {
    /// Unit square centered on the integer pixel coordinate `(x, y)`.
    #[inline]
    pub fn pixel(x: i64, y: i64) -> Self {
        let (cx, cy) = (x as f64, y as f64);
        Self::new(cx - 0.5, cy - 0.5, cx + 0.5, cy + 0.5)
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }
}

/// Rectangle with `f64` coordinates.
pub type RectD = Rect<f64>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deg_rad_roundtrip() {
        assert!((deg2rad(180.0) - PI).abs() < 1e-12);
        assert!((rad2deg(PI / 2.0) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_equality_is_exact() {
        assert_eq!(PointD::new(1.0, 2.0), PointD::new(1.0, 2.0));
        assert_ne!(PointD::new(1.0, 2.0), PointD::new(1.0, 2.0 + 1e-12));
    }

    #[test]
    fn test_rect_is_valid() {
        assert!(RectD::new(0.0, -5.0, 10.0, 5.0).is_valid());
        assert!(RectD::new(1.0, 1.0, 1.0, 1.0).is_valid());
        assert!(!RectD::new(10.0, 5.0, 0.0, -5.0).is_valid());
    }

    #[test]
    fn test_rect_hit_test_includes_border() {
        let r = RectD::new(0.0, 0.0, 1.0, 1.0);
        assert!(r.hit_test(0.0, 1.0));
        assert!(!r.hit_test(1.0001, 0.5));
    }

    #[test]
    fn test_pixel_square_is_centered() {
        let r = RectD::pixel(3, -2);
        assert_eq!(r, RectD::new(2.5, -2.5, 3.5, -1.5));
        assert_eq!(r.width(), 1.0);
        assert_eq!(r.height(), 1.0);
    }
}
