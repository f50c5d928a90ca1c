//! Filled circle from a cached list of disk offsets

use super::{set_color, set_float, Control, ControlValue, Scene};
use crate::input::FrameContext;
use crate::rasterizer::{Color, Framebuffer, Vec2};
use tracing::info;

const RADIUS_EPSILON: f32 = 1e-8;

pub struct CircleScene {
    time: f32,
    pub radius: f32,
    /// Radius the cache was built for
    cached_radius: f32,
    offsets: Vec<Vec2>,
    pub color: Color,
}

/// Integer-step offsets `(x, y)` in `[-r, r]²` with `x² + y² <= r²`
fn disk_offsets(radius: f32) -> Vec<Vec2> {
    let mut out = Vec::new();
    if radius < 0.0 {
        return out;
    }
    let r2 = radius * radius;
    let steps = (2.0 * radius).floor() as i32;
    for i in 0..=steps {
        let x = -radius + i as f32;
        for j in 0..=steps {
            let y = -radius + j as f32;
            if x * x + y * y <= r2 {
                out.push(Vec2::new(x, y));
            }
        }
    }
    out
}

impl CircleScene {
    pub fn new() -> Self {
        Self {
            time: 0.0,
            radius: 50.0,
            cached_radius: 0.0,
            offsets: Vec::new(),
            color: Color::RED,
        }
    }

    /// Number of cached disk pixels
    pub fn cached_len(&self) -> usize {
        self.offsets.len()
    }
}

impl Default for CircleScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for CircleScene {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn reset(&mut self) {
        self.time = 0.0;
    }

    fn update(&mut self, ctx: &FrameContext) {
        self.time += ctx.dt;
        if (self.cached_radius - self.radius).abs() >= RADIUS_EPSILON {
            info!("Circle radius changed: {} -> {}", self.cached_radius, self.radius);
            self.offsets = disk_offsets(self.radius);
            self.cached_radius = self.radius;
        }
    }

    fn render(&mut self, fb: &mut Framebuffer) {
        if fb.is_empty() {
            return;
        }
        let center = Vec2::new(fb.width() as f32 * 0.5, fb.height() as f32 * 0.5);
        let pixel = fb.quantize_table().pixel(self.color);
        for &v in &self.offsets {
            let p = center + v;
            fb.put_pixel_raw(p.x as i32, p.y as i32, pixel);
        }
    }

    fn describe_controls(&self) -> Vec<Control> {
        vec![
            Control::float("Radius", self.radius, 0.0, 255.0),
            Control::color("Color", self.color),
        ]
    }

    fn set_control(&mut self, name: &str, value: ControlValue) -> bool {
        match name {
            "Radius" => set_float(&mut self.radius, value),
            "Color" => set_color(&mut self.color, value),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputState;

    fn tick(scene: &mut CircleScene) {
        let input = InputState::new();
        scene.update(&FrameContext::new(0.016, &input, false));
    }

    #[test]
    fn test_disk_offsets() {
        assert_eq!(disk_offsets(0.0), vec![Vec2::ZERO]);
        // Plus shape
        assert_eq!(disk_offsets(1.0).len(), 5);
        assert!(disk_offsets(-1.0).is_empty());
    }

    #[test]
    fn test_cache_rebuilt_only_on_change() {
        let mut scene = CircleScene::new();
        assert_eq!(scene.cached_len(), 0);
        tick(&mut scene);
        let full = scene.cached_len();
        assert!(full > 0);

        scene.offsets.clear();
        tick(&mut scene);
        // Same radius: cache left alone
        assert_eq!(scene.cached_len(), 0);

        scene.radius = 2.0;
        tick(&mut scene);
        assert_eq!(scene.cached_len(), 13);
    }

    #[test]
    fn test_zero_radius_after_nonzero() {
        let mut scene = CircleScene::new();
        tick(&mut scene);
        scene.radius = 0.0;
        tick(&mut scene);
        assert_eq!(scene.cached_len(), 1);
    }

    #[test]
    fn test_renders_centered_disk() {
        let mut scene = CircleScene::new();
        scene.radius = 3.0;
        tick(&mut scene);
        let mut fb = Framebuffer::new(20, 20);
        scene.render(&mut fb);
        let center = fb.pixel(10, 10).unwrap();
        assert_eq!((center.r, center.g, center.b), (255, 0, 0));
        assert_eq!(fb.pixel(10, 13).map(|p| p.r), Some(255));
        assert_eq!(fb.pixel(10, 14).map(|p| p.r), Some(0));
    }
}
