//! Affine transform demo: a solid box pushed through optional scale,
//! rotate and translate 3x3 matrices

use super::{set_bool, Control, ControlValue, Scene};
use crate::input::FrameContext;
use crate::rasterizer::{radians, Color, Framebuffer, Mat3, Vec3};

const BOX_SIZE: usize = 100;

pub struct AffineScene {
    /// Homogeneous points (x, y, 1), one per box pixel
    points: Vec<Vec3>,
    scale_mat: Mat3,
    rotate_mat: Mat3,
    translate_mat: Mat3,
    pub scale: bool,
    pub rotate: bool,
    pub translate: bool,
    time: f32,
}

impl AffineScene {
    pub fn new() -> Self {
        let mut points = Vec::with_capacity(BOX_SIZE * BOX_SIZE);
        for y in 0..BOX_SIZE {
            for x in 0..BOX_SIZE {
                points.push(Vec3::new(x as f32, y as f32, 1.0));
            }
        }

        Self {
            points,
            scale_mat: Mat3::scale_2d(2.0, 2.0),
            rotate_mat: Mat3::rotation_2d(radians(45.0)),
            translate_mat: Mat3::translation_2d(100.0, 100.0),
            scale: false,
            rotate: false,
            translate: false,
            time: 0.0,
        }
    }

    /// Enabled matrices composed right to left: S first, then R, then T
    pub fn transform(&self) -> Mat3 {
        let mut m = Mat3::IDENTITY;
        if self.scale {
            m = self.scale_mat * m;
        }
        if self.rotate {
            m = self.rotate_mat * m;
        }
        if self.translate {
            m = self.translate_mat * m;
        }
        m
    }
}

impl Default for AffineScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for AffineScene {
    fn name(&self) -> &'static str {
        "Affine"
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
        let cx = fb.width() as f32 * 0.5;
        let cy = fb.height() as f32 * 0.5;
        let m = self.transform();
        for &p in &self.points {
            let pos = m * p;
            fb.put_pixel((pos.x + cx) as i32, (pos.y + cy) as i32, Color::WHITE);
        }
    }

    fn describe_controls(&self) -> Vec<Control> {
        vec![
            Control::toggle("Scale", self.scale),
            Control::toggle("Rotate", self.rotate),
            Control::toggle("Translation", self.translate),
        ]
    }

    fn set_control(&mut self, name: &str, value: ControlValue) -> bool {
        match name {
            "Scale" => set_bool(&mut self.scale, value),
            "Rotate" => set_bool(&mut self.rotate, value),
            "Translation" => set_bool(&mut self.translate, value),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_no_flags_is_identity() {
        let scene = AffineScene::new();
        assert_eq!(scene.transform(), Mat3::IDENTITY);
    }

    #[test]
    fn test_composition_scales_before_translating() {
        let mut scene = AffineScene::new();
        scene.scale = true;
        scene.translate = true;
        let p = scene.transform() * Vec3::new(10.0, 5.0, 1.0);
        assert!((p.x - 120.0).abs() < EPS);
        assert!((p.y - 110.0).abs() < EPS);
    }

    #[test]
    fn test_rotation_keeps_distance() {
        let mut scene = AffineScene::new();
        scene.rotate = true;
        let p = scene.transform() * Vec3::new(30.0, 40.0, 1.0);
        assert!((p.xy().length() - 50.0).abs() < 1e-3);
        assert!((p.z - 1.0).abs() < EPS);
    }

    #[test]
    fn test_identity_box_lands_right_of_center() {
        let mut scene = AffineScene::new();
        let mut fb = Framebuffer::new(300, 300);
        scene.render(&mut fb);
        assert_eq!(fb.pixel(150, 150).map(|p| p.r), Some(255));
        assert_eq!(fb.pixel(249, 249).map(|p| p.r), Some(255));
        assert_eq!(fb.pixel(149, 150).map(|p| p.r), Some(0));
        assert_eq!(fb.pixel(250, 150).map(|p| p.r), Some(0));
    }

    #[test]
    fn test_toggle_controls() {
        let mut scene = AffineScene::new();
        assert!(scene.set_control("Rotate", ControlValue::Bool(true)));
        assert!(scene.rotate);
        assert!(!scene.set_control("Rotate", ControlValue::Float(1.0)));
    }
}
