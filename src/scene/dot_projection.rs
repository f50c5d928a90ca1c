//! Shortest distance from a point to a line via the dot product

use super::{set_bool, set_float, Control, ControlValue, Scene};
use crate::input::FrameContext;
use crate::rasterizer::{radians, Color, Framebuffer, Vec2};

/// Closest point on the line through `a` along unit `dir` to `point`.
/// Returns `(projected point, t)`; with `clamp_len` the parameter is clamped
/// to `[0, clamp_len]` (segment instead of infinite line).
pub fn closest_point_on_line(point: Vec2, a: Vec2, dir: Vec2, clamp_len: Option<f32>) -> (Vec2, f32) {
    let t = (point - a).dot(dir);
    let t = match clamp_len {
        Some(len) => t.clamp(0.0, len.max(0.0)),
        None => t,
    };
    (a + dir * t, t)
}

pub struct DotProjectionScene {
    time: f32,
    current_degree: f32,
    pub rotate_speed: f32,
    pub distance: f32,
    pub line_angle_deg: f32,
    pub line_length: f32,
    pub point_angle_deg: f32,
    pub animate_point: bool,
    pub clamp_segment: bool,
    last_distance: f32,
    last_proj_t: f32,
}

impl DotProjectionScene {
    pub fn new() -> Self {
        Self {
            time: 0.0,
            current_degree: 0.0,
            rotate_speed: 45.0,
            distance: 220.0,
            line_angle_deg: -15.0,
            line_length: 420.0,
            point_angle_deg: 50.0,
            animate_point: true,
            clamp_segment: true,
            last_distance: 0.0,
            last_proj_t: 0.0,
        }
    }

    /// Distance from the point to its projection, as of the last render
    pub fn last_distance(&self) -> f32 {
        self.last_distance
    }

    /// Projection parameter along the line, as of the last render
    pub fn last_proj_t(&self) -> f32 {
        self.last_proj_t
    }
}

impl Default for DotProjectionScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for DotProjectionScene {
    fn name(&self) -> &'static str {
        "DotProjection"
    }

    fn reset(&mut self) {
        self.time = 0.0;
    }

    fn update(&mut self, ctx: &FrameContext) {
        self.time += ctx.dt;
        if self.animate_point {
            self.current_degree += self.rotate_speed * ctx.dt;
            if self.current_degree.abs() >= 360.0 {
                self.current_degree %= 360.0;
            }
        } else {
            self.current_degree = self.point_angle_deg;
        }
    }

    fn render(&mut self, fb: &mut Framebuffer) {
        if fb.is_empty() {
            return;
        }
        let w = fb.width() as f32;
        let h = fb.height() as f32;
        let center = Vec2::new(w * 0.5, h * 0.5);

        let line_rad = radians(self.line_angle_deg);
        let dir = Vec2::new(line_rad.cos(), line_rad.sin()).normalize();
        let half_len = self.line_length * 0.5;
        let line_a = center - dir * half_len;
        let line_b = center + dir * half_len;

        let point_rad = radians(self.current_degree);
        let point = center + Vec2::new(point_rad.cos(), point_rad.sin()) * self.distance;

        let clamp = self.clamp_segment.then_some(self.line_length);
        let (proj, t) = closest_point_on_line(point, line_a, dir, clamp);
        self.last_proj_t = t;
        self.last_distance = (point - proj).length();

        let axis = Color::from_bytes(60, 70, 90, 255);
        let line_color = Color::from_bytes(230, 230, 230, 255);
        let point_color = Color::from_bytes(255, 120, 90, 255);
        let proj_color = Color::from_bytes(255, 210, 90, 255);
        let dist_color = Color::from_bytes(80, 220, 170, 255);

        fb.draw_line_f(Vec2::new(0.0, center.y), Vec2::new(w - 1.0, center.y), axis);
        fb.draw_line_f(Vec2::new(center.x, 0.0), Vec2::new(center.x, h - 1.0), axis);
        fb.draw_line_f(line_a, line_b, line_color);
        fb.draw_line_f(point, proj, dist_color);

        let marker = |fb: &mut Framebuffer, p: Vec2, r: i32, c: Color| {
            fb.draw_circle(p.x as i32, p.y as i32, r, c);
        };
        marker(fb, line_a, 4, line_color);
        marker(fb, line_b, 4, line_color);
        marker(fb, point, 5, point_color);
        marker(fb, proj, 4, proj_color);
    }

    fn describe_controls(&self) -> Vec<Control> {
        vec![
            Control::readout("Distance", self.last_distance),
            Control::readout("Projection t", self.last_proj_t),
            Control::toggle("Animate Point", self.animate_point),
            Control::toggle("Clamp to Segment", self.clamp_segment),
            Control::float("Line Angle (deg)", self.line_angle_deg, -180.0, 180.0),
            Control::float("Line Length", self.line_length, 50.0, 900.0),
            Control::float("Point Distance", self.distance, 10.0, 600.0),
            Control::float("Point Angle (deg)", self.point_angle_deg, -180.0, 180.0),
            Control::float("Rotate Speed (deg/s)", self.rotate_speed, -360.0, 360.0),
        ]
    }

    fn set_control(&mut self, name: &str, value: ControlValue) -> bool {
        match name {
            "Animate Point" => set_bool(&mut self.animate_point, value),
            "Clamp to Segment" => set_bool(&mut self.clamp_segment, value),
            "Line Angle (deg)" => set_float(&mut self.line_angle_deg, value),
            "Line Length" => set_float(&mut self.line_length, value),
            "Point Distance" => set_float(&mut self.distance, value),
            "Point Angle (deg)" => set_float(&mut self.point_angle_deg, value),
            "Rotate Speed (deg/s)" => set_float(&mut self.rotate_speed, value),
            _ => false,
        }
    }
}
