//! 2x2 matrix demo: the same box under scale, rotation and two shears,
//! one per screen quadrant

use super::{set_float, Control, ControlValue, Scene};
use crate::input::FrameContext;
use crate::rasterizer::{radians, Color, Framebuffer, Mat2, Vec2};

const BOX_SIZE: usize = 100;

const DEFAULT_SCALE: f32 = 2.0;
const DEFAULT_ROTATION_DEG: f32 = 45.0;
const DEFAULT_SHEAR: f32 = 2.0;

pub struct Matrix2DScene {
    points: Vec<Vec2>,
    /// Quadrant origins, rebuilt when the framebuffer size changes
    anchors: [Vec2; 4],
    box_offset: Vec2,
    last_size: Option<(usize, usize)>,
    pub scale: f32,
    pub rotation_deg: f32,
    pub shear_x: f32,
    pub shear_y: f32,
    time: f32,
}

impl Matrix2DScene {
    pub fn new() -> Self {
        let mut points = Vec::with_capacity(BOX_SIZE * BOX_SIZE);
        for y in 0..BOX_SIZE {
            for x in 0..BOX_SIZE {
                points.push(Vec2::new(x as f32, y as f32));
            }
        }
        Self {
            points,
            anchors: [Vec2::ZERO; 4],
            box_offset: Vec2::ZERO,
            last_size: None,
            scale: DEFAULT_SCALE,
            rotation_deg: DEFAULT_ROTATION_DEG,
            shear_x: DEFAULT_SHEAR,
            shear_y: DEFAULT_SHEAR,
            time: 0.0,
        }
    }

    /// Back to scale 2, 45° and shear 2/2
    pub fn restore_defaults(&mut self) {
        self.scale = DEFAULT_SCALE;
        self.rotation_deg = DEFAULT_ROTATION_DEG;
        self.shear_x = DEFAULT_SHEAR;
        self.shear_y = DEFAULT_SHEAR;
    }

    /// Top-left, top-right, bottom-left, bottom-right
    pub fn matrices(&self) -> [Mat2; 4] {
        [
            Mat2::scale(self.scale),
            Mat2::rotation(radians(self.rotation_deg)),
            Mat2::shear_x(self.shear_x),
            Mat2::shear_y(self.shear_y),
        ]
    }

    fn update_layout(&mut self, width: usize, height: usize) {
        if self.last_size == Some((width, height)) {
            return;
        }
        let cx = width as f32 * 0.5;
        let cy = height as f32 * 0.5;
        self.anchors = [
            Vec2::new(0.0, 0.0),
            Vec2::new(cx, 0.0),
            Vec2::new(0.0, cy),
            Vec2::new(cx, cy),
        ];
        self.box_offset = Vec2::new(width as f32 * 0.25, height as f32 * 0.25);
        self.last_size = Some((width, height));
    }
}

impl Default for Matrix2DScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for Matrix2DScene {
    fn name(&self) -> &'static str {
        "Matrix2D"
    }

    /// Also puts the sliders back to their defaults
    fn reset(&mut self) {
        self.time = 0.0;
        self.restore_defaults();
    }

    fn update(&mut self, ctx: &FrameContext) {
        self.time += ctx.dt;
    }

    fn render(&mut self, fb: &mut Framebuffer) {
        if fb.is_empty() {
            return;
        }
        self.update_layout(fb.width(), fb.height());

        let half = Vec2::splat(BOX_SIZE as f32 * 0.5);
        for (anchor, m) in self.anchors.iter().zip(self.matrices()) {
            let start = *anchor + self.box_offset;
            for &p in &self.points {
                let pos = m * (p - half) + start;
                fb.put_pixel(pos.x as i32, pos.y as i32, Color::WHITE);
            }
        }
    }

    fn describe_controls(&self) -> Vec<Control> {
        vec![
            Control::float("Scale", self.scale, 0.25, 6.0),
            Control::float("Rotation (deg)", self.rotation_deg, -180.0, 180.0),
            Control::float("Shear X", self.shear_x, -4.0, 4.0),
            Control::float("Shear Y", self.shear_y, -4.0, 4.0),
        ]
    }

    fn set_control(&mut self, name: &str, value: ControlValue) -> bool {
        match name {
            "Scale" => set_float(&mut self.scale, value),
            "Rotation (deg)" => set_float(&mut self.rotation_deg, value),
            "Shear X" => set_float(&mut self.shear_x, value),
            "Shear Y" => set_float(&mut self.shear_y, value),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_defaults() {
        let mut scene = Matrix2DScene::new();
        scene.scale = 0.5;
        scene.shear_y = -3.0;
        scene.restore_defaults();
        assert_eq!(scene.scale, 2.0);
        assert_eq!(scene.rotation_deg, 45.0);
        assert_eq!(scene.shear_x, 2.0);
        assert_eq!(scene.shear_y, 2.0);
    }

    #[test]
    fn test_shear_matrices() {
        let scene = Matrix2DScene::new();
        let [_, _, sx, sy] = scene.matrices();
        assert_eq!(sx * Vec2::new(1.0, 1.0), Vec2::new(3.0, 1.0));
        assert_eq!(sy * Vec2::new(1.0, 1.0), Vec2::new(1.0, 3.0));
    }

    #[test]
    fn test_scaled_box_centered_in_first_quadrant() {
        let mut scene = Matrix2DScene::new();
        let mut fb = Framebuffer::new(800, 600);
        scene.render(&mut fb);
        // Quadrant centre (200, 150); scale 2 lights every other pixel
        assert_eq!(fb.pixel(200, 150).map(|p| p.g), Some(255));
        assert_eq!(fb.pixel(100, 50).map(|p| p.g), Some(255));
        assert_eq!(fb.pixel(90, 40).map(|p| p.g), Some(0));
    }

    #[test]
    fn test_layout_follows_resize() {
        let mut scene = Matrix2DScene::new();
        let mut fb = Framebuffer::new(400, 400);
        scene.render(&mut fb);
        assert_eq!(scene.anchors[3], Vec2::new(200.0, 200.0));
        fb.resize(800, 200);
        scene.render(&mut fb);
        assert_eq!(scene.anchors[3], Vec2::new(400.0, 100.0));
        assert_eq!(scene.box_offset, Vec2::new(200.0, 50.0));
    }
}
