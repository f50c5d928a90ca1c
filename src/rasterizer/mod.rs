//! CPU software rasterizer
//!
//! Features:
//! - Resizable RGBA8 framebuffer with table-driven color quantization
//! - Vector/matrix library (column-major)
//! - Bresenham lines, filled disks, analytic Lambert spheres
//! - Yaw/pitch camera with near-plane culled perspective projection

mod camera;
mod draw;
mod math;
mod render;
mod types;

pub use camera::*;
pub use draw::*;
pub use math::*;
pub use render::*;
pub use types::*;
