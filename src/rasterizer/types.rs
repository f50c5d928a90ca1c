//! Core types for the rasterizer

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};
use std::sync::OnceLock;

/// Linear float RGBA color, channels nominally in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);

    /// Opaque color
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        const INV: f32 = 1.0 / 255.0;
        Self {
            r: r as f32 * INV,
            g: g as f32 * INV,
            b: b as f32 * INV,
            a: a as f32 * INV,
        }
    }

    /// Every channel clamped to [0, 1]. NaN clamps to 0.
    pub fn clamped(self) -> Self {
        fn c(v: f32) -> f32 {
            if v.is_nan() {
                0.0
            } else {
                v.clamp(0.0, 1.0)
            }
        }
        Self {
            r: c(self.r),
            g: c(self.g),
            b: c(self.b),
            a: c(self.a),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Channel-wise modulation
impl Mul for Color {
    type Output = Color;
    fn mul(self, o: Color) -> Color {
        Color::with_alpha(self.r * o.r, self.g * o.g, self.b * o.b, self.a * o.a)
    }
}

/// Scales all four channels
impl Mul<f32> for Color {
    type Output = Color;
    fn mul(self, s: f32) -> Color {
        Color::with_alpha(self.r * s, self.g * s, self.b * s, self.a * s)
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, o: Color) -> Color {
        Color::with_alpha(self.r + o.r, self.g + o.g, self.b + o.b, self.a + o.a)
    }
}

/// One stored framebuffer pixel (RGBA8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Pixel::new(0, 0, 0, 255)
    }
}

/// Number of entries in the quantization table
pub const QUANTIZE_STEPS: usize = 4096;

/// Float channel -> byte lookup table.
///
/// Entry `i` holds `round(i / 4095 * 255)`, so the table is monotonic and
/// maps 0.0 -> 0 and 1.0 -> 255 exactly. Built once and shared by every
/// framebuffer through [`QuantizeTable::shared`].
pub struct QuantizeTable {
    table: Box<[u8; QUANTIZE_STEPS]>,
}

impl QuantizeTable {
    pub fn new() -> Self {
        let mut table = Box::new([0u8; QUANTIZE_STEPS]);
        let max = (QUANTIZE_STEPS - 1) as f32;
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = ((i as f32 / max) * 255.0).round() as u8;
        }
        Self { table }
    }

    /// Process-wide table, built on first use
    pub fn shared() -> &'static QuantizeTable {
        static TABLE: OnceLock<QuantizeTable> = OnceLock::new();
        TABLE.get_or_init(QuantizeTable::new)
    }

    /// Quantize one channel (clamped to [0, 1] first)
    pub fn channel(&self, v: f32) -> u8 {
        let v = if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        let idx = (v * (QUANTIZE_STEPS - 1) as f32 + 0.5) as usize;
        self.table[idx.min(QUANTIZE_STEPS - 1)]
    }

    pub fn pixel(&self, color: Color) -> Pixel {
        Pixel {
            r: self.channel(color.r),
            g: self.channel(color.g),
            b: self.channel(color.b),
            a: self.channel(color.a),
        }
    }
}

impl Default for QuantizeTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_endpoints_exact() {
        let q = QuantizeTable::shared();
        assert_eq!(q.channel(0.0), 0);
        assert_eq!(q.channel(1.0), 255);
    }

    #[test]
    fn test_quantize_clamps_out_of_range() {
        let q = QuantizeTable::shared();
        assert_eq!(q.channel(-3.0), 0);
        assert_eq!(q.channel(7.5), 255);
        assert_eq!(q.channel(f32::NAN), 0);
        assert_eq!(q.channel(f32::INFINITY), 255);
    }

    #[test]
    fn test_quantize_matches_rounding_on_byte_values() {
        let q = QuantizeTable::shared();
        for k in 0..=255u32 {
            let v = k as f32 / 255.0;
            assert_eq!(q.channel(v) as u32, (v * 255.0).round() as u32, "k = {}", k);
        }
    }

    #[test]
    fn test_quantize_is_monotonic() {
        let q = QuantizeTable::new();
        let mut last = 0u8;
        for i in 0..=10_000 {
            let b = q.channel(i as f32 / 10_000.0);
            assert!(b >= last);
            last = b;
        }
    }

    #[test]
    fn test_shared_table_is_single_instance() {
        let a = QuantizeTable::shared() as *const QuantizeTable;
        let b = QuantizeTable::shared() as *const QuantizeTable;
        assert_eq!(a, b);
    }

    #[test]
    fn test_color_clamped() {
        let c = Color::with_alpha(-1.0, 0.5, 2.0, f32::NAN).clamped();
        assert_eq!(c, Color::with_alpha(0.0, 0.5, 1.0, 0.0));
    }

    #[test]
    fn test_color_from_bytes() {
        let c = Color::from_bytes(255, 0, 51, 255);
        assert!((c.r - 1.0).abs() < 1e-6);
        assert!((c.b - 0.2).abs() < 1e-6);
        assert_eq!(QuantizeTable::shared().pixel(c), Pixel::new(255, 0, 51, 255));
    }
}
