//! Count to color mapping.
//!
//! Gradient stops are spread evenly over `[0, value_for_max_color]`; values
//! past the top saturate at the last stop.

use crate::color::Rgba8;
use crate::options::RenderingOptions;

/// Piecewise linear color ramp over evenly spaced stops.
#[derive(Debug, Clone, Copy)]
pub struct ColorRamp<'a> {
    stops: &'a [Rgba8],
    value_for_max_color: f64,
}

impl<'a> ColorRamp<'a> {
    pub fn new(stops: &'a [Rgba8], value_for_max_color: f64) -> Self {
        Self {
            stops,
            value_for_max_color,
        }
    }

    pub fn from_options(options: &'a RenderingOptions) -> Self {
        Self::new(&options.gradient_colors, options.value_for_max_color)
    }

    /// Color for an accumulated coverage `value`.
    ///
    /// Zero, negative and NaN values map to the first stop. An empty ramp
    /// yields [`Rgba8::TRANSPARENT`].
    pub fn color(&self, value: f64) -> Rgba8 {
        let Some((first, _)) = self.stops.split_first() else {
            return Rgba8::TRANSPARENT;
        };
        if !(value > 0.0) {
            return *first;
        }

        let last = self.stops.len() - 1;
        let ratio = (value / self.value_for_max_color).min(1.0) * last as f64;
        let lo = (ratio.floor() as usize).min(last);
        let hi = (ratio.ceil() as usize).min(last);
        self.stops[lo].gradient(&self.stops[hi], ratio - lo as f64)
    }
}

/// Color for `value` under `options`.
pub fn color_for(value: f64, options: &RenderingOptions) -> Rgba8 {
    ColorRamp::from_options(options).color(value)
}
