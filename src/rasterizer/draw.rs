//! Drawing utilities
//!
//! The Bresenham walk behind `Framebuffer::draw_line` plus the analytic
//! sphere shader. Everything writes through `put_pixel`, so anything falling
//! outside the viewport is silently dropped.

use super::math::{Vec2, Vec3};
use super::render::Framebuffer;
use super::types::Color;

/// Endpoints further than this outside the framebuffer get clipped first
pub const LINE_GUARD_BAND: i64 = 1 << 14;

/// Integer Bresenham walk from `(x0, y0)` to `(x1, y1)`, both ends inclusive.
///
/// Uses the classic error term `err = dx - dy` with the `e2 > -dy` /
/// `e2 < dx` steps so output is stable pixel-for-pixel. The error terms are
/// kept in i64 so any pair of i32 endpoints is valid.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i32,
    y: i32,
    x1: i32,
    y1: i32,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl LinePoints {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let dx = (x1 as i64 - x0 as i64).abs();
        let dy = (y1 as i64 - y0 as i64).abs();
        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for LinePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.done {
            return None;
        }
        let point = (self.x, self.y);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(point);
        }
        // x and y only move toward x1/y1, so the steps never leave i32
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(point)
    }
}

/// Clip a segment to the framebuffer grown by [`LINE_GUARD_BAND`] on every
/// side (Liang-Barsky).
///
/// Segments already inside the band come back unchanged, so their pixels are
/// exactly the unclipped walk. Returns `None` when nothing is left.
pub fn clip_line_to_guard(
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    width: usize,
    height: usize,
) -> Option<(i32, i32, i32, i32)> {
    let min_x = -LINE_GUARD_BAND;
    let min_y = -LINE_GUARD_BAND;
    let max_x = width as i64 + LINE_GUARD_BAND;
    let max_y = height as i64 + LINE_GUARD_BAND;
    let inside = |x: i32, y: i32| {
        let (x, y) = (x as i64, y as i64);
        x >= min_x && x <= max_x && y >= min_y && y <= max_y
    };
    if inside(x0, y0) && inside(x1, y1) {
        return Some((x0, y0, x1, y1));
    }

    let (fx0, fy0) = (x0 as f64, y0 as f64);
    let dx = x1 as f64 - fx0;
    let dy = y1 as f64 - fy0;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    let edges = [
        (-dx, fx0 - min_x as f64),
        (dx, max_x as f64 - fx0),
        (-dy, fy0 - min_y as f64),
        (dy, max_y as f64 - fy0),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > t1 {
                return None;
            }
            t0 = t0.max(t);
        } else {
            if t < t0 {
                return None;
            }
            t1 = t1.min(t);
        }
    }

    let at = |t: f64| {
        (
            (fx0 + dx * t).round().clamp(min_x as f64, max_x as f64) as i32,
            (fy0 + dy * t).round().clamp(min_y as f64, max_y as f64) as i32,
        )
    };
    let (cx0, cy0) = at(t0);
    let (cx1, cy1) = at(t1);
    Some((cx0, cy0, cx1, cy1))
}

/// Lighting inputs for [`draw_lit_sphere`]
#[derive(Debug, Clone, Copy)]
pub struct SphereShading {
    /// Screen-space center (the sphere center sits at z = 0)
    pub center: Vec2,
    pub radius: f32,
    pub light_pos: Vec3,
    pub base_color: Color,
    pub ambient_color: Color,
    pub ambient_intensity: f32,
    pub diffuse_color: Color,
    pub diffuse_intensity: f32,
}

/// Color of one covered pixel at offset `(dx, dy)` from the center, or
/// `None` when the offset lies outside the disk.
///
/// The normal comes from the flat disk offset assuming a perfect hemisphere
/// facing +Z: `nz = sqrt(max(0, 1 - nx² - ny²))`.
pub fn shade_sphere_pixel(s: &SphereShading, dx: f32, dy: f32) -> Option<Color> {
    if s.radius <= 0.0 {
        return None;
    }
    let nx = dx / s.radius;
    let ny = dy / s.radius;
    let d2 = nx * nx + ny * ny;
    if d2 > 1.0 {
        return None;
    }
    let nz = (1.0 - d2).max(0.0).sqrt();
    let normal = Vec3::new(nx, ny, nz);

    let world = Vec3::new(s.center.x, s.center.y, 0.0) + normal * s.radius;
    let light_dir = (s.light_pos - world).normalize();
    let n_dot_l = normal.dot(light_dir).max(0.0);

    let ambient = s.ambient_color * s.ambient_intensity;
    let diffuse = s.diffuse_color * (s.diffuse_intensity * n_dot_l);
    let lit = s.base_color * (ambient + diffuse);
    Some(Color::with_alpha(lit.r, lit.g, lit.b, 1.0).clamped())
}

/// Per-pixel analytic Lambert sphere (ambient + diffuse), no depth test
pub fn draw_lit_sphere(fb: &mut Framebuffer, shading: &SphereShading) {
    if fb.is_empty() || shading.radius.is_nan() || shading.radius <= 0.0 {
        return;
    }
    let r = shading.radius.ceil() as i64;
    let cx = shading.center.x as i64;
    let cy = shading.center.y as i64;
    let (w, h) = (fb.width() as i64, fb.height() as i64);
    for y in cy.saturating_sub(r).max(0)..=cy.saturating_add(r).min(h - 1) {
        for x in cx.saturating_sub(r).max(0)..=cx.saturating_add(r).min(w - 1) {
            let (dx, dy) = ((x - cx) as f32, (y - cy) as f32);
            if let Some(color) = shade_sphere_pixel(shading, dx, dy) {
                fb.put_pixel(x as i32, y as i32, color);
            }
        }
    }
}
