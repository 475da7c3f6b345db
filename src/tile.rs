//! XYZ tile addressing and geographic bounding boxes.

use crate::basics::TILE_SIZE;
use crate::error::{HeatmapError, Result};

/// Deepest zoom level accepted. `2^30` tiles per axis still fits `u32`.
pub const MAX_ZOOM: u8 = 30;

// ============================================================================
// TileCoord
// ============================================================================

/// Validated `(x, y, z)` address of one 256×256 tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    x: u32,
    y: u32,
    z: u8,
}

impl TileCoord {
    /// Validate a tile address.
    ///
    /// Fails with [`HeatmapError::Validation`] when any component is
    /// negative, `z` exceeds [`MAX_ZOOM`], or `x`/`y` lie outside the
    /// `2^z × 2^z` pyramid level.
    pub fn new(x: i64, y: i64, z: i64) -> Result<Self> {
        if x < 0 || y < 0 || z < 0 {
            return Err(HeatmapError::Validation(format!(
                "x, y and z must be non-negative, got ({x}, {y}, {z})"
            )));
        }
        if z > MAX_ZOOM as i64 {
            return Err(HeatmapError::Validation(format!(
                "zoom {z} exceeds the maximum of {MAX_ZOOM}"
            )));
        }
        let n = 1i64 << z;
        if x >= n || y >= n {
            return Err(HeatmapError::Validation(format!(
                "tile ({x}, {y}) does not exist at zoom {z}, which has {n}x{n} tiles"
            )));
        }
        Ok(Self {
            x: x as u32,
            y: y as u32,
            z: z as u8,
        })
    }

    /// Validate a tile address given as floating point numbers, as it arrives
    /// from JavaScript. Non-integral and non-finite components are rejected.
    pub fn from_f64(x: f64, y: f64, z: f64) -> Result<Self> {
        for v in [x, y, z] {
            if !v.is_finite() || v.fract() != 0.0 {
                return Err(HeatmapError::Validation(format!(
                    "x, y and z must be integers, got ({x}, {y}, {z})"
                )));
            }
        }
        // Out-of-range magnitudes saturate and are rejected by `new`.
        Self::new(x as i64, y as i64, z as i64)
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn z(&self) -> u8 {
        self.z
    }

    /// Top-left corner of the tile on the global pixel plane of its zoom.
    pub fn pixel_origin(&self) -> (f64, f64) {
        (
            self.x as f64 * TILE_SIZE as f64,
            self.y as f64 * TILE_SIZE as f64,
        )
    }
}

impl std::fmt::Display for TileCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

// ============================================================================
// BoundingBox
// ============================================================================

/// Geographic rectangle in degrees, `[west, south, east, north]` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Inclusive point-in-box test.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.west && lon <= self.east && lat >= self.south && lat <= self.north
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([west, south, east, north]: [f64; 4]) -> Self {
        Self::new(west, south, east, north)
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(b: BoundingBox) -> Self {
        b.to_array()
    }
}
