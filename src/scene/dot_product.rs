//! Dot product demo: a fixed vector `a`, a rotating vector `b`, and the
//! projection of `b` onto `a`

use super::{Control, ControlValue, Scene};
use crate::input::FrameContext;
use crate::rasterizer::{Color, Framebuffer, Vec2};

const A_ANGLE: f32 = 0.35;
/// Radians per second for `b`
const B_SPEED: f32 = 0.7;

pub struct DotProductScene {
    time: f32,
}

/// Projection of `b` onto `a`; zero when `a` is degenerate
pub fn project_onto(b: Vec2, a: Vec2) -> Vec2 {
    let a_len2 = a.dot(a);
    if a_len2 > 0.0 {
        a * (a.dot(b) / a_len2)
    } else {
        Vec2::ZERO
    }
}

impl DotProductScene {
    pub fn new() -> Self {
        Self { time: 0.0 }
    }

    /// `(a, b, proj)` relative to the centre for a given arm length
    pub fn vectors(&self, radius: f32) -> (Vec2, Vec2, Vec2) {
        let b_angle = self.time * B_SPEED;
        let a = Vec2::new(A_ANGLE.cos(), A_ANGLE.sin()) * radius;
        let b = Vec2::new(b_angle.cos(), b_angle.sin()) * radius;
        (a, b, project_onto(b, a))
    }
}

impl Default for DotProductScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for DotProductScene {
    fn name(&self) -> &'static str {
        "DotProduct"
    }

    fn reset(&mut self) {
        self.time = 0.0;
    }

    fn update(&mut self, ctx: &FrameContext) {
        self.time += ctx.dt;
    }

    fn render(&mut self, fb: &mut Framebuffer) {
        if fb.is_empty() {
            return;
        }
        let w = fb.width() as i32;
        let h = fb.height() as i32;
        let radius = 0.35 * w.min(h) as f32;
        let center = Vec2::new(w as f32 * 0.5, h as f32 * 0.5);
        let (a, b, proj) = self.vectors(radius);

        let (cx, cy) = (center.x as i32, center.y as i32);
        let axis = Color::from_bytes(80, 90, 110, 255);
        fb.draw_line(0, cy, w - 1, cy, axis);
        fb.draw_line(cx, 0, cx, h - 1, axis);

        let arms = [
            (a, Color::from_bytes(255, 180, 80, 255)),
            (b, Color::from_bytes(80, 200, 190, 255)),
            (proj, Color::from_bytes(220, 220, 220, 255)),
        ];
        for (v, color) in arms {
            let tip = center + v;
            fb.draw_line(cx, cy, tip.x as i32, tip.y as i32, color);
        }
    }

    fn describe_controls(&self) -> Vec<Control> {
        Vec::new()
    }

    fn set_control(&mut self, _name: &str, _value: ControlValue) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_projection_onto_axis() {
        let p = project_onto(Vec2::new(3.0, 4.0), Vec2::new(2.0, 0.0));
        assert!((p.x - 3.0).abs() < EPS);
        assert!(p.y.abs() < EPS);
    }

    #[test]
    fn test_projection_onto_zero_vector() {
        assert_eq!(project_onto(Vec2::new(1.0, 1.0), Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_perpendicular_projection_vanishes() {
        let mut scene = DotProductScene::new();
        // b perpendicular to a
        scene.time = (A_ANGLE + std::f32::consts::FRAC_PI_2) / B_SPEED;
        let (_, _, proj) = scene.vectors(100.0);
        assert!(proj.length() < 1e-3);
    }

    #[test]
    fn test_axes_are_drawn() {
        let mut scene = DotProductScene::new();
        let mut fb = Framebuffer::new(100, 80);
        scene.render(&mut fb);
        let axis = fb.pixel(0, 40).unwrap();
        assert_eq!((axis.r, axis.g, axis.b), (80, 90, 110));
        assert!(fb.pixel(50, 0).is_some_and(|p| p.r == 80));
    }
}
