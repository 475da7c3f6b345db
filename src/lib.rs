//! # heatmap-tiles
//!
//! Renders GPS tracks into 256×256 antialiased XYZ raster tiles showing how
//! often each route was travelled, for slippy-map viewers.
//!
//! Coverage is computed analytically: every stroke is decomposed into convex
//! pieces and each pixel receives the exact area of the pieces overlapping
//! it, so overlapping tracks add up without seams or double counting at
//! joins.
//!
//! ## Architecture
//!
//! A tile is rendered by a five-stage pipeline:
//!
//! 1. **Path Source**: returns the `[lon, lat]` paths inside the padded tile box
//! 2. **Projection**: Web Mercator to tile-local integer pixels
//! 3. **Simplification**: Ramer–Douglas–Peucker with a one pixel tolerance
//! 4. **Stroking & Coverage**: convex stroke pieces accumulated into a float grid
//! 5. **Coloring**: accumulated counts mapped through a gradient to RGBA
//!
//! ```no_run
//! use heatmap_tiles::{MemorySource, TileEngine, Track};
//! use std::time::SystemTime;
//!
//! let source = MemorySource::new(vec![Track::new(
//!     vec![[13.40, 52.52], [13.41, 52.53]],
//!     SystemTime::now(),
//!     "Run",
//! )]);
//! let engine = TileEngine::new(source);
//! let tile = engine.render_tile(8802, 5373, 14, None, None)?;
//! assert_eq!(tile.as_bytes().len(), 256 * 256 * 4);
//! # Ok::<(), heatmap_tiles::HeatmapError>(())
//! ```

// Foundation types & math
pub mod basics;
pub mod error;
pub mod math;
pub mod polygon;

// Geometry pipeline
pub mod coverage_grid;
pub mod math_stroke;
pub mod rasterizer_coverage;
pub mod simplify;

// Projection & tiles
pub mod clip_polyline;
pub mod tile;
pub mod trans_mercator;

// Color
pub mod color;
pub mod gradient;
pub mod options;
pub mod rendering_buffer;

// Orchestration
pub mod path_source;
pub mod tile_engine;

pub use color::Rgba8;
pub use error::{HeatmapError, Result, SourceError};
pub use gradient::color_for;
pub use options::RenderingOptions;
pub use path_source::{GeoPath, MemorySource, PathSource, Track, TrackFilter};
pub use rendering_buffer::RenderingBuffer;
pub use tile::{BoundingBox, TileCoord};
pub use tile_engine::{render_paths, TileEngine};
pub use trans_mercator::{project, tile_bounds, unproject};
