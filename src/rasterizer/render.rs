//! Framebuffer for software rendering
//!
//! Row-major RGBA8, 4 bytes per pixel, no padding, top row first. This byte
//! layout is exactly what gets uploaded as a texture.

use super::draw::{clip_line_to_guard, LinePoints};
use super::math::Vec2;
use super::types::{Color, Pixel, QuantizeTable};
use std::path::Path;

/// Error type for framebuffer export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("framebuffer is empty ({0}x{1})")]
    EmptyFramebuffer(usize, usize),
}

pub struct Framebuffer {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
    quantize: &'static QuantizeTable,
    /// One full row of the last clear color, reused by `clear`
    clear_row: Vec<u8>,
    clear_pixel: Option<Pixel>,
}

impl Framebuffer {
    /// Create a framebuffer using the process-wide quantization table
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_table(width, height, QuantizeTable::shared())
    }

    pub fn with_table(width: i32, height: i32, quantize: &'static QuantizeTable) -> Self {
        let mut fb = Self {
            pixels: Vec::new(),
            width: 0,
            height: 0,
            quantize,
            clear_row: Vec::new(),
            clear_pixel: None,
        };
        fb.resize(width, height);
        fb
    }

    /// Reallocate to `width x height`. Negative sizes clamp to zero.
    /// Storage is zeroed and the cached clear row is dropped.
    pub fn resize(&mut self, width: i32, height: i32) {
        let width = width.max(0) as usize;
        let height = height.max(0) as usize;
        if width == self.width && height == self.height && self.pixels.len() == width * height * 4 {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels = vec![0; width * height * 4];
        self.clear_row.clear();
        self.clear_pixel = None;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Read-only RGBA8 view, `width * height * 4` bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn quantize_table(&self) -> &'static QuantizeTable {
        self.quantize
    }

    /// Fill every pixel with `color`.
    ///
    /// The color is quantized once into a cached reference row which is
    /// then copied over every row. Clearing twice with the same color skips
    /// rebuilding that row.
    pub fn clear(&mut self, color: Color) {
        if self.pixels.is_empty() {
            return;
        }
        let pixel = self.quantize.pixel(color);
        let row_bytes = self.width * 4;

        if self.clear_pixel != Some(pixel) || self.clear_row.len() != row_bytes {
            let bytes = pixel.to_bytes();
            self.clear_row.clear();
            self.clear_row.reserve(row_bytes);
            for _ in 0..self.width {
                self.clear_row.extend_from_slice(&bytes);
            }
            self.clear_pixel = Some(pixel);
        }

        for row in self.pixels.chunks_exact_mut(row_bytes) {
            row.copy_from_slice(&self.clear_row);
        }
    }

    /// Quantize and store one pixel. Out-of-bounds writes are dropped.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        let pixel = self.quantize.pixel(color);
        self.put_pixel_raw(x, y, pixel);
    }

    /// Store an already-quantized pixel. Out-of-bounds writes are dropped.
    pub fn put_pixel_raw(&mut self, x: i32, y: i32, pixel: Pixel) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&pixel.to_bytes());
    }

    /// Draw a filled disk: every offset in `[-r, r]²` with `dx² + dy² <= r²`
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        if radius < 0 || self.pixels.is_empty() {
            return;
        }
        let pixel = self.quantize.pixel(color);
        let (cx, cy, radius) = (cx as i64, cy as i64, radius as i64);
        let r_sq = radius * radius;
        for y in (cy - radius).max(0)..=(cy + radius).min(self.height as i64 - 1) {
            for x in (cx - radius).max(0)..=(cx + radius).min(self.width as i64 - 1) {
                let dx = x - cx;
                let dy = y - cy;
                if dx * dx + dy * dy <= r_sq {
                    self.put_pixel_raw(x as i32, y as i32, pixel);
                }
            }
        }
    }

    /// Draw a line from (x0, y0) to (x1, y1) using Bresenham's algorithm
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        if self.pixels.is_empty() {
            return;
        }
        let Some((x0, y0, x1, y1)) = clip_line_to_guard(x0, y0, x1, y1, self.width, self.height)
        else {
            return;
        };
        let pixel = self.quantize.pixel(color);
        for (x, y) in LinePoints::new(x0, y0, x1, y1) {
            self.put_pixel_raw(x, y, pixel);
        }
    }

    /// Line between two float points, truncated to pixel coordinates
    pub fn draw_line_f(&mut self, a: Vec2, b: Vec2, color: Color) {
        self.draw_line(a.x as i32, a.y as i32, b.x as i32, b.y as i32, color);
    }

    /// Read back one pixel
    pub fn pixel(&self, x: i32, y: i32) -> Option<Pixel> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let p = &self.pixels[idx..idx + 4];
        Some(Pixel::new(p[0], p[1], p[2], p[3]))
    }

    /// Write the current contents to a PNG file
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        if self.pixels.is_empty() {
            return Err(ExportError::EmptyFramebuffer(self.width, self.height));
        }
        image::save_buffer(
            path.as_ref(),
            &self.pixels,
            self.width as u32,
            self.height as u32,
            image::ColorType::Rgba8,
        )?;
        Ok(())
    }
}
