//! Spherical Web Mercator transformation.
//!
//! Maps longitude/latitude in degrees onto the global pixel plane of a zoom
//! level, `256·2^zoom` pixels square with the origin at the north-west
//! corner and y growing southwards, and back.

use crate::basics::{deg2rad, rad2deg, PointD, PI, TILE_SIZE};
use crate::error::{HeatmapError, Result};
use crate::tile::{BoundingBox, TileCoord};

/// Latitude at which the Mercator square ends.
pub const MAX_LATITUDE: f64 = 85.0511287798;

/// Forward and inverse Web Mercator for a single zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransMercator {
    scale: f64,
}

impl TransMercator {
    pub fn new(zoom: u8) -> Self {
        Self {
            scale: TILE_SIZE as f64 * 2f64.powi(zoom as i32),
        }
    }

    /// Side length of the world in pixels.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Geographic to pixel plane.
    ///
    /// Latitudes beyond ±[`MAX_LATITUDE`] (or NaN) have no finite image and
    /// fail with [`HeatmapError::Projection`].
    pub fn project(&self, lon: f64, lat: f64) -> Result<PointD> {
        if !(lat.abs() <= MAX_LATITUDE) {
            return Err(HeatmapError::Projection { lat });
        }
        let sin = deg2rad(lat).sin();
        let x = self.scale * (lon / 360.0 + 0.5);
        let y = self.scale * (0.5 - 0.25 / PI * ((1.0 + sin) / (1.0 - sin)).ln());
        Ok(PointD::new(x, y))
    }

    /// Pixel plane to `(lon, lat)`. Total; points north or south of the
    /// world square map to latitudes beyond [`MAX_LATITUDE`].
    pub fn unproject(&self, x: f64, y: f64) -> (f64, f64) {
        let nx = x / self.scale;
        let ny = y / self.scale;
        let lon = 360.0 * nx - 180.0;
        let lat = rad2deg((PI * (1.0 - 2.0 * ny)).sinh().atan());
        (lon, lat)
    }
}

/// Project `(lon, lat)` onto the pixel plane of `zoom`.
pub fn project(lon: f64, lat: f64, zoom: u8) -> Result<PointD> {
    TransMercator::new(zoom).project(lon, lat)
}

/// Inverse of [`project`].
pub fn unproject(x: f64, y: f64, zoom: u8) -> (f64, f64) {
    TransMercator::new(zoom).unproject(x, y)
}

/// Geographic box covering `tile` grown by `padding` pixels on every side.
///
/// North and south are clamped to ±[`MAX_LATITUDE`], so every corner of the
/// box can be projected again.
pub fn tile_bounds(tile: TileCoord, padding: usize) -> BoundingBox {
    let m = TransMercator::new(tile.z());
    let (ox, oy) = tile.pixel_origin();
    let pad = padding as f64;
    let size = TILE_SIZE as f64;

    let (west, north) = m.unproject(ox - pad, oy - pad);
    let (east, south) = m.unproject(ox + size + pad, oy + size + pad);
    BoundingBox::new(
        west,
        south.max(-MAX_LATITUDE),
        east,
        north.min(MAX_LATITUDE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin() {
        let p = project(0.0, 0.0, 0).unwrap();
        assert!((p.x - 128.0).abs() < 1e-10);
        assert!((p.y - 128.0).abs() < 1e-10);

        let p = project(-180.0, 0.0, 3).unwrap();
        assert!(p.x.abs() < 1e-10);
        assert!((p.y - 1024.0).abs() < 1e-10);
    }

    #[test]
    fn test_north_is_up() {
        let a = project(10.0, 50.0, 10).unwrap();
        let b = project(10.0, 51.0, 10).unwrap();
        assert!(b.y < a.y);
    }

    #[test]
    fn test_latitude_limit() {
        let p = project(0.0, MAX_LATITUDE, 0).unwrap();
        assert!(p.y.abs() < 1e-6);
        let p = project(0.0, -MAX_LATITUDE, 0).unwrap();
        assert!((p.y - 256.0).abs() < 1e-6);

        assert!(matches!(
            project(0.0, 85.06, 0),
            Err(HeatmapError::Projection { .. })
        ));
        assert!(project(0.0, -90.0, 4).is_err());
        assert!(project(0.0, f64::NAN, 4).is_err());
    }

    #[test]
    fn test_unproject_inverts_project() {
        for &(lon, lat) in &[(13.4, 52.5), (-122.4, 37.8), (151.2, -33.9), (0.0, 0.0)] {
            let p = project(lon, lat, 12).unwrap();
            let (lon2, lat2) = unproject(p.x, p.y, 12);
            assert!((lon - lon2).abs() < 1e-9);
            assert!((lat - lat2).abs() < 1e-9);
        }
    }

    #[test]
    fn test_tile_bounds_roundtrip() {
        let tiles = [
            (3, 5, 4),
            (2, 1, 2),
            (8802, 5373, 14),
            (0, 6, 3),
            // Top and bottom rows touch the latitude limit.
            (0, 0, 0),
            (5, 0, 4),
            (3, 15, 4),
        ];
        for &(x, y, z) in &tiles {
            let tile = TileCoord::new(x, y, z).unwrap();
            let b = tile_bounds(tile, 0);
            let nw = project(b.west, b.north, tile.z()).unwrap();
            let se = project(b.east, b.south, tile.z()).unwrap();
            let (ox, oy) = tile.pixel_origin();
            assert!((nw.x - ox).abs() < 1e-6);
            assert!((nw.y - oy).abs() < 1e-6);
            assert!((se.x - (ox + 256.0)).abs() < 1e-6);
            assert!((se.y - (oy + 256.0)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_tile_bounds_padding_grows_box() {
        let tile = TileCoord::new(3, 5, 4).unwrap();
        let tight = tile_bounds(tile, 0);
        let padded = tile_bounds(tile, 2);
        assert!(padded.west < tight.west && padded.east > tight.east);
        assert!(padded.south < tight.south && padded.north > tight.north);
        // 2 px at zoom 4 is 2 / 4096 of the full 360 degrees.
        assert!((tight.west - padded.west - 360.0 * 2.0 / 4096.0).abs() < 1e-9);
    }

    #[test]
    fn test_whole_world_tile() {
        let b = tile_bounds(TileCoord::new(0, 0, 0).unwrap(), 0);
        assert!((b.west + 180.0).abs() < 1e-10);
        assert!((b.east - 180.0).abs() < 1e-10);
        assert_eq!(b.north, MAX_LATITUDE);
        assert_eq!(b.south, -MAX_LATITUDE);
        assert!(project(b.west, b.north, 0).is_ok());
        assert!(project(b.east, b.south, 0).is_ok());
    }

    #[test]
    fn test_padded_polar_tile_stays_projectable() {
        let tile = TileCoord::new(5, 0, 4).unwrap();
        let b = tile_bounds(tile, 3);
        assert_eq!(b.north, MAX_LATITUDE);
        assert!(project(b.west, b.north, tile.z()).is_ok());

        let tile = TileCoord::new(3, 15, 4).unwrap();
        let b = tile_bounds(tile, 3);
        assert_eq!(b.south, -MAX_LATITUDE);
        assert!(project(b.east, b.south, tile.z()).is_ok());
    }
}
