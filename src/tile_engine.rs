//! Tile rendering pipeline.
//!
//! For one tile: fetch the paths inside the padded tile box, project them
//! to tile-local pixels, simplify, stroke and accumulate their coverage,
//! then color the visible 256×256 window of the grid.
//!
//! Every call is independent; nothing is cached between tiles.

use log::{debug, trace};

use crate::basics::{PointD, TILE_SIZE};
use crate::coverage_grid::CoverageGrid;
use crate::error::{HeatmapError, Result};
use crate::gradient::ColorRamp;
use crate::options::RenderingOptions;
use crate::path_source::{GeoPath, PathSource};
use crate::rasterizer_coverage::rasterize_path;
use crate::rendering_buffer::RenderingBuffer;
use crate::simplify::{dedup_consecutive, simplify_path};
use crate::tile::TileCoord;
use crate::trans_mercator::{tile_bounds, TransMercator};

// ============================================================================
// TileEngine
// ============================================================================

/// Renders heatmap tiles from a [`PathSource`].
#[derive(Debug, Clone)]
pub struct TileEngine<S> {
    source: S,
}

impl<S: PathSource> TileEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Render tile `(x, y, z)`.
    ///
    /// Coordinates are validated before anything else, then the options
    /// (defaults when `None`); the source is only queried once both pass.
    pub fn render_tile(
        &self,
        x: i64,
        y: i64,
        z: i64,
        options: Option<&RenderingOptions>,
        filter: Option<&S::Filter>,
    ) -> Result<RenderingBuffer> {
        let tile = TileCoord::new(x, y, z)?;
        self.render(tile, options, filter)
    }

    /// Render an already validated tile address.
    pub fn render(
        &self,
        tile: TileCoord,
        options: Option<&RenderingOptions>,
        filter: Option<&S::Filter>,
    ) -> Result<RenderingBuffer> {
        let defaults;
        let options = match options {
            Some(o) => o,
            None => {
                defaults = RenderingOptions::default();
                &defaults
            }
        };
        options.validate()?;

        let bbox = tile_bounds(tile, options.padding());
        let paths = self
            .source
            .paths_in_bounds(&bbox, filter)
            .map_err(|e| HeatmapError::Source(e.into()))?;
        render_paths(&paths, tile, options)
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Rasterize `paths` (`[lon, lat]` degrees) onto `tile`.
///
/// Paths must lie within [`tile_bounds`] of the tile padded by
/// `options.padding()`; a position projecting outside the padded raster
/// fails with [`HeatmapError::Bounds`]. Empty paths are skipped and
/// single-position paths fail with [`HeatmapError::Geometry`].
pub fn render_paths(
    paths: &[GeoPath],
    tile: TileCoord,
    options: &RenderingOptions,
) -> Result<RenderingBuffer> {
    options.validate()?;
    let padding = options.padding();
    debug!(
        "rendering tile {} from {} paths, padding {}",
        tile,
        paths.len(),
        padding
    );

    let mut grid = CoverageGrid::padded(TILE_SIZE, padding)?;
    let projector = TileProjector::new(tile, padding);

    for path in paths {
        if path.is_empty() {
            continue;
        }
        if path.len() == 1 {
            return Err(HeatmapError::Geometry { points: 1 });
        }

        let mut points = path
            .iter()
            .map(|&[lon, lat]| projector.project(lon, lat))
            .collect::<Result<Vec<_>>>()?;
        dedup_consecutive(&mut points);
        let simplified = simplify_path(&points);
        trace!(
            "path: {} positions, {} after dedup, {} after simplification",
            path.len(),
            points.len(),
            simplified.len()
        );

        rasterize_path(&simplified, options.line_width, &mut grid)?;
    }

    Ok(colorize(&grid, padding, options))
}

/// Color the visible window of `grid`. Untouched cells stay transparent.
fn colorize(grid: &CoverageGrid, padding: usize, options: &RenderingOptions) -> RenderingBuffer {
    let ramp = ColorRamp::from_options(options);
    let size = TILE_SIZE as u32;
    let mut buf = RenderingBuffer::new(size, size);

    for y in 0..TILE_SIZE {
        let row = &grid.row(y + padding)[padding..padding + TILE_SIZE];
        for (x, &value) in row.iter().enumerate() {
            if value > 0.0 {
                buf.copy_pixel(x as u32, y as u32, ramp.color(value as f64));
            }
        }
    }
    buf
}

/// Geographic to tile-local integer pixel coordinates, with the padding
/// margin at the top left.
struct TileProjector {
    mercator: TransMercator,
    dx: f64,
    dy: f64,
    limit: f64,
    size: usize,
}

impl TileProjector {
    fn new(tile: TileCoord, padding: usize) -> Self {
        let (ox, oy) = tile.pixel_origin();
        let size = TILE_SIZE + 2 * padding;
        Self {
            mercator: TransMercator::new(tile.z()),
            dx: padding as f64 - ox,
            dy: padding as f64 - oy,
            limit: size as f64,
            size,
        }
    }

    fn project(&self, lon: f64, lat: f64) -> Result<PointD> {
        let p = self.mercator.project(lon, lat)?;
        let x = p.x.round() + self.dx;
        let y = p.y.round() + self.dy;
        // NaN fails both comparisons.
        if !(x >= 0.0 && x <= self.limit && y >= 0.0 && y <= self.limit) {
            return Err(HeatmapError::Bounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(PointD::new(x, y))
    }
}
