//! 8-bit RGBA color.
//!
//! Channels are straight (non-premultiplied). With the `serde` feature a
//! color serializes as a `[r, g, b, a]` array.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGBA color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "[u8; 4]", into = "[u8; 4]")
)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// All four channels zero.
    pub const TRANSPARENT: Rgba8 = Rgba8::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Color from a `0xRRGGBB` literal plus alpha.
    pub const fn from_rgb_hex(rgb: u32, a: u8) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
            a,
        }
    }

    /// Channel-wise linear interpolation toward `c` by `k` in `[0, 1]`,
    /// rounded to the nearest integer.
    pub fn gradient(&self, c: &Rgba8, k: f64) -> Rgba8 {
        Rgba8 {
            r: Self::lerp(self.r, c.r, k),
            g: Self::lerp(self.g, c.g, k),
            b: Self::lerp(self.b, c.b, k),
            a: Self::lerp(self.a, c.a, k),
        }
    }

    #[inline]
    fn lerp(p: u8, q: u8, k: f64) -> u8 {
        let v = p as f64 + (q as f64 - p as f64) * k;
        v.round().clamp(0.0, 255.0) as u8
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(c: Rgba8) -> Self {
        c.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_hex() {
        let c = Rgba8::from_rgb_hex(0x4B0082, 130);
        assert_eq!(c, Rgba8::new(0x4B, 0x00, 0x82, 130));
    }

    #[test]
    fn test_gradient_endpoints() {
        let a = Rgba8::new(0, 100, 200, 10);
        let b = Rgba8::new(255, 50, 0, 250);
        assert_eq!(a.gradient(&b, 0.0), a);
        assert_eq!(a.gradient(&b, 1.0), b);
    }

    #[test]
    fn test_gradient_rounds() {
        let a = Rgba8::new(0, 0, 0, 0);
        let b = Rgba8::new(255, 3, 1, 100);
        // 127.5 rounds up, 1.5 rounds up, 0.5 rounds up, 50 exact.
        assert_eq!(a.gradient(&b, 0.5), Rgba8::new(128, 2, 1, 50));
    }

    #[test]
    fn test_array_conversion() {
        let c: Rgba8 = [1, 2, 3, 4].into();
        assert_eq!(c, Rgba8::new(1, 2, 3, 4));
        let a: [u8; 4] = c.into();
        assert_eq!(a, [1, 2, 3, 4]);
        assert_eq!(Rgba8::TRANSPARENT.to_array(), [0, 0, 0, 0]);
    }
}
