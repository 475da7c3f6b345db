//! Coverage accumulation buffer.
//!
//! A row-major grid of `f32` cells, one per pixel of the padded working
//! raster. Strokes add their fractional coverage; overlapping strokes sum, so
//! a cell holds the number of times a route passed over that pixel.

use crate::error::{HeatmapError, Result};

/// Padded float raster that stroke coverage is accumulated into.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageGrid {
    width: usize,
    height: usize,
    cells: Vec<f32>,
}

impl CoverageGrid {
    /// Zeroed grid of `width * height` cells.
    ///
    /// Fails with [`HeatmapError::Config`] if the cell count overflows.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .ok_or_else(|| HeatmapError::Config(format!("{width}x{height} grid is too large")))?;
        Ok(Self {
            width,
            height,
            cells: vec![0.0; len],
        })
    }

    /// Square grid for a `tile_size` tile with `padding` extra pixels on every
    /// side.
    pub fn padded(tile_size: usize, padding: usize) -> Result<Self> {
        let side = padding
            .checked_mul(2)
            .and_then(|p| p.checked_add(tile_size))
            .ok_or_else(|| HeatmapError::Config(format!("padding {padding} is too large")))?;
        Self::new(side, side)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Accumulated coverage at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Option<f32> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Add `value` to the cell at `(x, y)`. Coordinates outside the grid are
    /// ignored; strokes may spill past the padding.
    #[inline]
    pub fn accumulate(&mut self, x: i64, y: i64, value: f64) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] += value as f32;
        }
    }

    /// Row `y` of the grid.
    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn cells(&self) -> &[f32] {
        &self.cells
    }

    /// Total coverage over the whole grid.
    pub fn sum(&self) -> f64 {
        self.cells.iter().map(|&c| c as f64).sum()
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}
