//! Lambert-lit sphere with a light orbiting in front of it

use super::{set_color, set_float, Control, ControlValue, Scene};
use crate::input::FrameContext;
use crate::rasterizer::{draw_lit_sphere, Color, Framebuffer, SphereShading, Vec2, Vec3};

/// Sphere radius as a fraction of the shorter framebuffer side
const RADIUS_SCALE: f32 = 0.3;

pub struct SphereScene {
    time: f32,
    pub sphere_color: Color,
    pub light_color: Color,
    pub ambient_color: Color,
    pub diffuse_color: Color,
    pub ambient_intensity: f32,
    pub diffuse_intensity: f32,
    /// Orbit radius as a fraction of the shorter framebuffer side
    pub light_orbit_scale: f32,
    /// Light height in front of the screen, in sphere radii
    pub light_height_scale: f32,
    /// Radians per second
    pub light_speed: f32,
}

impl SphereScene {
    pub fn new() -> Self {
        Self {
            time: 0.0,
            sphere_color: Color::WHITE,
            light_color: Color::new(1.0, 0.9, 0.6),
            ambient_color: Color::WHITE,
            diffuse_color: Color::WHITE,
            ambient_intensity: 0.15,
            diffuse_intensity: 0.9,
            light_orbit_scale: 0.32,
            light_height_scale: 1.2,
            light_speed: 0.6,
        }
    }

    /// Shading inputs for a `width x height` target at the current time
    pub fn shading(&self, width: usize, height: usize) -> SphereShading {
        let min_side = width.min(height) as f32;
        let center = Vec2::new(width as f32 * 0.5, height as f32 * 0.5);
        let radius = RADIUS_SCALE * min_side;
        let angle = self.time * self.light_speed;
        let orbit = self.light_orbit_scale * min_side;

        SphereShading {
            center,
            radius,
            light_pos: Vec3::new(
                center.x + angle.cos() * orbit,
                center.y + angle.sin() * orbit,
                self.light_height_scale * radius,
            ),
            base_color: self.sphere_color,
            ambient_color: self.ambient_color,
            ambient_intensity: self.ambient_intensity,
            diffuse_color: self.diffuse_color * self.light_color,
            diffuse_intensity: self.diffuse_intensity,
        }
    }
}

impl Default for SphereScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for SphereScene {
    fn name(&self) -> &'static str {
        "Sphere"
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
        let shading = self.shading(fb.width(), fb.height());
        draw_lit_sphere(fb, &shading);
    }

    fn describe_controls(&self) -> Vec<Control> {
        vec![
            Control::color("Sphere Color", self.sphere_color),
            Control::color("Light Color", self.light_color),
            Control::color("Ambient Color", self.ambient_color),
            Control::color("Diffuse Color", self.diffuse_color),
            Control::float("Ambient Intensity", self.ambient_intensity, 0.0, 1.0),
            Control::float("Diffuse Intensity", self.diffuse_intensity, 0.0, 2.0),
            Control::float("Light Orbit", self.light_orbit_scale, 0.0, 1.0),
            Control::float("Light Height", self.light_height_scale, 0.0, 4.0),
            Control::float("Light Speed", self.light_speed, -4.0, 4.0),
        ]
    }

    fn set_control(&mut self, name: &str, value: ControlValue) -> bool {
        match name {
            "Sphere Color" => set_color(&mut self.sphere_color, value),
            "Light Color" => set_color(&mut self.light_color, value),
            "Ambient Color" => set_color(&mut self.ambient_color, value),
            "Diffuse Color" => set_color(&mut self.diffuse_color, value),
            "Ambient Intensity" => set_float(&mut self.ambient_intensity, value),
            "Diffuse Intensity" => set_float(&mut self.diffuse_intensity, value),
            "Light Orbit" => set_float(&mut self.light_orbit_scale, value),
            "Light Height" => set_float(&mut self.light_height_scale, value),
            "Light Speed" => set_float(&mut self.light_speed, value),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputState;

    #[test]
    fn test_light_orbits_center() {
        let input = InputState::new();
        let mut scene = SphereScene::new();
        let s0 = scene.shading(200, 100);
        assert_eq!(s0.center, Vec2::new(100.0, 50.0));
        assert!((s0.radius - 30.0).abs() < 1e-4);
        assert!((s0.light_pos.x - 132.0).abs() < 1e-3);
        assert!((s0.light_pos.z - 36.0).abs() < 1e-3);

        scene.update(&FrameContext::new(1.0, &input, false));
        let s1 = scene.shading(200, 100);
        let d0 = Vec2::new(s0.light_pos.x, s0.light_pos.y) - s0.center;
        let d1 = Vec2::new(s1.light_pos.x, s1.light_pos.y) - s1.center;
        assert!((d0.length() - d1.length()).abs() < 1e-3);
        assert_ne!(d0, d1);
    }

    #[test]
    fn test_lit_side_is_brighter() {
        let mut scene = SphereScene::new();
        let mut fb = Framebuffer::new(200, 200);
        scene.render(&mut fb);
        // Light starts on the +X side
        let lit = fb.pixel(150, 100).unwrap();
        let dark = fb.pixel(50, 100).unwrap();
        assert!(lit.r > dark.r);
        // Outside the sphere stays untouched
        assert_eq!(fb.pixel(2, 2).map(|p| p.r), Some(0));
    }
}
