//! Owned RGBA8 bitmap.
//!
//! Row-major, top row first, four bytes per pixel in R, G, B, A order with
//! straight alpha. This is the layout expected by `ImageData` in browsers and
//! by PNG encoders.

use crate::basics::PIXEL_BYTES;
use crate::color::Rgba8;

/// Rendered tile bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderingBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RenderingBuffer {
    /// Fully transparent bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * PIXEL_BYTES],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * PIXEL_BYTES
    }

    /// Color at `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        let i = self.offset(x, y)?;
        let p = &self.data[i..i + PIXEL_BYTES];
        Some(Rgba8::new(p[0], p[1], p[2], p[3]))
    }

    /// Overwrite the pixel at `(x, y)`; ignored outside the bitmap.
    pub fn copy_pixel(&mut self, x: u32, y: u32, c: Rgba8) {
        if let Some(i) = self.offset(x, y) {
            self.data[i..i + PIXEL_BYTES].copy_from_slice(&c.to_array());
        }
    }

    /// Raw bytes of row `y`.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride();
        &self.data[start..start + self.stride()]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.stride() + x as usize * PIXEL_BYTES)
    }
}
