//! Rendering options.
//!
//! Every field has a default; with the `serde` feature a partial object such
//! as `{"lineWidth": 3}` deserializes with the remaining fields defaulted.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::basics::TILE_SIZE;
use crate::color::Rgba8;
use crate::error::{HeatmapError, Result};

/// Visit count that saturates the gradient.
pub const DEFAULT_VALUE_FOR_MAX_COLOR: f64 = 25.0;

/// Stroke width in pixels.
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;

/// Widest accepted stroke. Its padding equals a whole tile on every side.
pub const MAX_LINE_WIDTH: f64 = 2.0 * TILE_SIZE as f64;

/// Purple to pale yellow, growing more opaque with the count.
pub const DEFAULT_GRADIENT: [Rgba8; 6] = [
    Rgba8::from_rgb_hex(0x4B0082, 130),
    Rgba8::from_rgb_hex(0xB22222, 155),
    Rgba8::from_rgb_hex(0xFF0000, 180),
    Rgba8::from_rgb_hex(0xFF4500, 205),
    Rgba8::from_rgb_hex(0xFF6900, 230),
    Rgba8::from_rgb_hex(0xFFFFE0, 255),
];

/// How paths are stroked and how the accumulated counts are colored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct RenderingOptions {
    /// Accumulated coverage mapped to the last gradient stop.
    pub value_for_max_color: f64,
    /// Stroke width in pixels.
    pub line_width: f64,
    /// Evenly spaced gradient stops, from zero coverage to
    /// `value_for_max_color`.
    pub gradient_colors: Vec<Rgba8>,
}

impl Default for RenderingOptions {
    fn default() -> Self {
        Self {
            value_for_max_color: DEFAULT_VALUE_FOR_MAX_COLOR,
            line_width: DEFAULT_LINE_WIDTH,
            gradient_colors: DEFAULT_GRADIENT.to_vec(),
        }
    }
}

impl RenderingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value_for_max_color(mut self, value: f64) -> Self {
        self.value_for_max_color = value;
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_gradient_colors(mut self, colors: Vec<Rgba8>) -> Self {
        self.gradient_colors = colors;
        self
    }

    /// Check the options before any work is done with them.
    pub fn validate(&self) -> Result<()> {
        if !(self.value_for_max_color.is_finite() && self.value_for_max_color > 0.0) {
            return Err(HeatmapError::Config(format!(
                "valueForMaxColor must be a positive number, got {}",
                self.value_for_max_color
            )));
        }
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(HeatmapError::Config(format!(
                "lineWidth must be a positive number, got {}",
                self.line_width
            )));
        }
        if self.line_width > MAX_LINE_WIDTH {
            return Err(HeatmapError::Config(format!(
                "lineWidth must be at most {}, got {}",
                MAX_LINE_WIDTH, self.line_width
            )));
        }
        if self.gradient_colors.len() < 2 {
            return Err(HeatmapError::Config(format!(
                "gradientColors needs at least 2 stops, got {}",
                self.gradient_colors.len()
            )));
        }
        Ok(())
    }

    /// Pixels added around the tile so strokes centered just outside it still
    /// reach in: `ceil(line_width / 2)`.
    pub fn padding(&self) -> usize {
        (self.line_width / 2.0).ceil().max(0.0) as usize
    }
}
