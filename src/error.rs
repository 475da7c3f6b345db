//! Error type shared by every stage of the tile pipeline.
//!
//! All errors abort the whole tile render; there is no partial output.

use thiserror::Error;

/// Boxed error returned by a [`PathSource`](crate::path_source::PathSource)
/// implementation.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced while rendering a heatmap tile.
#[derive(Debug, Error)]
pub enum HeatmapError {
    /// Tile coordinates are negative, non-integral or out of range.
    #[error("invalid tile coordinates: {0}")]
    Validation(String),

    /// Rendering options failed validation.
    #[error("invalid rendering options: {0}")]
    Config(String),

    /// A path has too few points to be stroked.
    #[error("path must contain at least two points, got {points}")]
    Geometry { points: usize },

    /// Latitude outside the Web Mercator domain.
    #[error("latitude must be between -{max} and {max}, got {lat}", max = crate::trans_mercator::MAX_LATITUDE)]
    Projection { lat: f64 },

    /// A projected point falls outside the padded working raster, i.e. the
    /// path source returned data beyond the requested bounding box.
    #[error("point ({x}, {y}) out of bounds of the {size}x{size} working raster")]
    Bounds { x: f64, y: f64, size: usize },

    /// The path source failed to provide paths.
    #[error("path source failed: {0}")]
    Source(#[source] SourceError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HeatmapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = HeatmapError::Geometry { points: 1 };
        assert_eq!(e.to_string(), "path must contain at least two points, got 1");

        let e = HeatmapError::Projection { lat: 89.0 };
        assert_eq!(
            e.to_string(),
            "latitude must be between -85.0511287798 and 85.0511287798, got 89"
        );

        let e = HeatmapError::Bounds {
            x: -1.0,
            y: 4.0,
            size: 258,
        };
        assert_eq!(
            e.to_string(),
            "point (-1, 4) out of bounds of the 258x258 working raster"
        );
    }

    #[test]
    fn test_source_keeps_cause() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
        let e = HeatmapError::Source(Box::new(io));
        assert_eq!(e.to_string(), "path source failed: connection reset");
        assert!(e.source().is_some());
    }
}
