//! Pulsing parametric heart curve

use super::{set_bool, set_color, set_float, Control, ControlValue, Scene};
use crate::input::FrameContext;
use crate::rasterizer::{radians, Color, Framebuffer, Vec2};
use std::f32::consts::TAU;
use tracing::info;

/// Parameter step between curve samples
const CURVE_STEP: f32 = 0.0001;
/// Pulse phase advance in degrees per second
const PULSE_DEG_PER_SEC: f32 = 60.0;

/// Samples of `x = 16 sin³t, y = 13 cos t - 5 cos 2t - 2 cos 3t - cos 4t`
/// for `t` in `[0, 2π)`
pub fn heart_curve(step: f32) -> Vec<Vec2> {
    if step <= 0.0 {
        return Vec::new();
    }
    let count = (TAU / step).ceil() as usize;
    (0..count)
        .map(|i| {
            let t = i as f32 * step;
            let s = t.sin();
            Vec2::new(
                16.0 * s * s * s,
                13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos(),
            )
        })
        .collect()
}

pub struct HeartScene {
    points: Vec<Vec2>,
    time: f32,
    /// Screen position; `None` until the first render picks the centre
    position: Option<Vec2>,
    pub base_scale: f32,
    pub amplitude: f32,
    pub rotate: bool,
    pub color: Color,
    phase_deg: f32,
}

impl HeartScene {
    pub fn new() -> Self {
        Self {
            points: heart_curve(CURVE_STEP),
            time: 0.0,
            position: None,
            base_scale: 5.0,
            amplitude: 5.0,
            rotate: false,
            color: Color::WHITE,
            phase_deg: 0.0,
        }
    }

    /// Current pulse angle in degrees, wrapped to one turn
    pub fn phase_deg(&self) -> f32 {
        (PULSE_DEG_PER_SEC * self.time) % 360.0
    }

    /// Base scale plus `amplitude * (sin(phase) + 1) / 2`
    pub fn current_scale(&self) -> f32 {
        let range = (radians(self.phase_deg()).sin() + 1.0) * 0.5;
        self.amplitude * range + self.base_scale
    }

    pub fn position(&self) -> Option<Vec2> {
        self.position
    }
}

impl Default for HeartScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for HeartScene {
    fn name(&self) -> &'static str {
        "Heart"
    }

    fn on_enter(&mut self) {
        self.position = None;
    }

    fn reset(&mut self) {
        self.time = 0.0;
    }

    fn update(&mut self, ctx: &FrameContext) {
        self.time += ctx.dt;
    }

    fn render(&mut self, fb: &mut Framebuffer) {
        let position = match self.position {
            Some(p) => p,
            None => {
                let (w, h) = (fb.width(), fb.height());
                info!("Heart centred for {}x{}", w, h);
                let p = Vec2::new(w as f32 * 0.5, h as f32 * 0.5);
                self.position = Some(p);
                p
            }
        };
        if fb.is_empty() {
            return;
        }

        self.phase_deg = self.phase_deg();
        let scale = self.current_scale();
        let (s, c) = radians(self.phase_deg).sin_cos();
        let table = fb.quantize_table();
        let pixel = table.pixel(self.color);

        for &v in &self.points {
            let v = if self.rotate {
                Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
            } else {
                v
            };
            let p = v * scale + position;
            fb.put_pixel_raw(p.x as i32, p.y as i32, pixel);
        }
    }

    fn describe_controls(&self) -> Vec<Control> {
        let position = self.position.unwrap_or(Vec2::ZERO);
        vec![
            Control::readout("Degree", self.phase_deg),
            Control::drag("Position X", position.x),
            Control::drag("Position Y", position.y),
            Control::drag("Scale", self.base_scale),
            Control::drag("Amplitude", self.amplitude),
            Control::toggle("Is Active Rotation", self.rotate),
            Control::color("Color", self.color),
        ]
    }

    fn set_control(&mut self, name: &str, value: ControlValue) -> bool {
        match name {
            "Position X" | "Position Y" => {
                let Some(v) = value.as_float() else {
                    return false;
                };
                let mut p = self.position.unwrap_or(Vec2::ZERO);
                if name == "Position X" {
                    p.x = v;
                } else {
                    p.y = v;
                }
                self.position = Some(p);
                true
            }
            "Scale" => set_float(&mut self.base_scale, value),
            "Amplitude" => set_float(&mut self.amplitude, value),
            "Is Active Rotation" => set_bool(&mut self.rotate, value),
            "Color" => set_color(&mut self.color, value),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputState;

    #[test]
    fn test_curve_shape() {
        let pts = heart_curve(0.01);
        assert_eq!(pts.len(), 629);
        // t = 0: x = 0, y = 13 - 5 - 2 - 1
        assert!(pts[0].x.abs() < 1e-6);
        assert!((pts[0].y - 5.0).abs() < 1e-5);
        let max_x = pts.iter().map(|p| p.x).fold(f32::MIN, f32::max);
        assert!((max_x - 16.0).abs() < 1e-2);
    }

    #[test]
    fn test_invalid_step_is_empty() {
        assert!(heart_curve(0.0).is_empty());
    }

    #[test]
    fn test_pulse_scale_range() {
        let input = InputState::new();
        let mut scene = HeartScene::new();
        // sin(0) = 0: halfway
        assert!((scene.current_scale() - 7.5).abs() < 1e-4);
        // 1.5 s -> 90 degrees: peak
        scene.update(&FrameContext::new(1.5, &input, false));
        assert!((scene.current_scale() - 10.0).abs() < 1e-4);
        // 4.5 s -> 270 degrees: trough
        scene.update(&FrameContext::new(3.0, &input, false));
        assert!((scene.current_scale() - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_position_from_first_render() {
        let mut scene = HeartScene::new();
        scene.on_enter();
        let mut fb = Framebuffer::new(320, 200);
        scene.render(&mut fb);
        assert_eq!(scene.position(), Some(Vec2::new(160.0, 100.0)));

        // Later resizes keep the chosen position
        fb.resize(640, 480);
        scene.render(&mut fb);
        assert_eq!(scene.position(), Some(Vec2::new(160.0, 100.0)));

        scene.on_enter();
        assert_eq!(scene.position(), None);
    }

    #[test]
    fn test_renders_curve_pixels() {
        let mut scene = HeartScene::new();
        let mut fb = Framebuffer::new(320, 240);
        scene.render(&mut fb);
        // Top of the heart at t = 0: (160, 120 + 5 * 7.5)
        assert_eq!(fb.pixel(160, 157).map(|p| p.r), Some(255));
    }
}
