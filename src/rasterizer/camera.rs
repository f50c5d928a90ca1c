//! Camera for 3D wireframe rendering
//!
//! A yaw/pitch camera, a single-point perspective projection with only a
//! near-plane test, and a first-person fly controller.

use super::math::{rotate_yaw_pitch_roll, Vec2, Vec3};
use crate::input::{buttons, keys, FrameContext};

/// Pitch is clamped to this many radians either side of level
pub const PITCH_LIMIT: f32 = 1.5;

/// Camera state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        )
    }

    /// Horizontal right vector (ignores pitch)
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    pub fn rotate(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw += d_yaw;
        self.pitch = (self.pitch + d_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// World point into view space (+Z forward)
    pub fn world_to_view(&self, world: Vec3) -> Vec3 {
        rotate_yaw_pitch_roll(world - self.position, -self.yaw, -self.pitch, 0.0)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

/// Perspective parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub near_plane: f32,
}

impl Projection {
    pub fn new(fov_y: f32, near_plane: f32) -> Self {
        Self { fov_y, near_plane }
    }

    /// Project `world` for a `width x height` viewport. `None` when the
    /// point is at or behind the near plane.
    pub fn project(&self, camera: &Camera, world: Vec3, width: usize, height: usize) -> Option<Vec2> {
        let aspect = width as f32 / height as f32;
        project_point(
            world,
            camera.position,
            camera.yaw,
            camera.pitch,
            self.fov_y,
            aspect,
            self.near_plane,
            width,
            height,
        )
    }
}

/// World point -> screen pixel coordinates.
///
/// View transform is the inverse yaw/pitch rotation about the camera
/// position, followed by the perspective divide and an NDC -> pixel map with
/// Y flipped. No far plane and no side clipping.
#[allow(clippy::too_many_arguments)]
pub fn project_point(
    world: Vec3,
    cam_pos: Vec3,
    yaw: f32,
    pitch: f32,
    fov_y: f32,
    aspect: f32,
    near_plane: f32,
    width: usize,
    height: usize,
) -> Option<Vec2> {
    let view = rotate_yaw_pitch_roll(world - cam_pos, -yaw, -pitch, 0.0);
    if view.z <= near_plane {
        return None;
    }

    let f = 1.0 / (fov_y * 0.5).tan();
    let x_ndc = (view.x * f / aspect) / view.z;
    let y_ndc = (view.y * f) / view.z;

    Some(Vec2::new(
        (x_ndc * 0.5 + 0.5) * width as f32,
        (1.0 - (y_ndc * 0.5 + 0.5)) * height as f32,
    ))
}

/// First-person movement and mouse-look driven by the input snapshot
#[derive(Debug, Clone)]
pub struct FlyController {
    /// World units per second
    pub move_speed: f32,
    /// Radians per pixel of cursor motion
    pub look_sensitivity: f32,
    last_mouse: Option<(f32, f32)>,
}

impl FlyController {
    pub fn new(move_speed: f32, look_sensitivity: f32) -> Self {
        Self {
            move_speed,
            look_sensitivity,
            last_mouse: None,
        }
    }

    /// Forget the previous cursor position (next drag starts fresh)
    pub fn release(&mut self) {
        self.last_mouse = None;
    }

    pub fn update(&mut self, camera: &mut Camera, ctx: &FrameContext) {
        let input = ctx.input;

        if input.is_mouse_down(buttons::RIGHT) && ctx.viewport_hovered {
            let (mx, my) = (input.mouse_x, input.mouse_y);
            if let Some((lx, ly)) = self.last_mouse {
                let dx = mx - lx;
                let dy = my - ly;
                camera.rotate(dx * self.look_sensitivity, -dy * self.look_sensitivity);
            }
            self.last_mouse = Some((mx, my));
        } else {
            self.last_mouse = None;
        }

        let mut speed = self.move_speed;
        if input.is_key_down(keys::LEFT_SHIFT) || input.is_key_down(keys::RIGHT_SHIFT) {
            speed *= 2.0;
        }

        let forward = camera.forward();
        let right = camera.right();
        let up = Vec3::UP;

        let mut movement = Vec3::ZERO;
        if input.is_key_down(keys::W) {
            movement += forward;
        }
        if input.is_key_down(keys::S) {
            movement -= forward;
        }
        if input.is_key_down(keys::D) {
            movement += right;
        }
        if input.is_key_down(keys::A) {
            movement -= right;
        }
        if input.is_key_down(keys::E) {
            movement += up;
        }
        if input.is_key_down(keys::Q) {
            movement -= up;
        }

        if movement.length() > 0.0 {
            camera.position += movement.normalize() * (speed * ctx.dt);
        }
    }
}

impl Default for FlyController {
    fn default() -> Self {
        Self::new(3.0, 0.0025)
    }
}
