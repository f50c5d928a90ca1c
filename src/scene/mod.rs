//! Scenes - self-contained update/render demos
//!
//! Each scene owns its state, advances it in `update`, and paints into the
//! framebuffer in `render`. Tweakable parameters are exposed as a flat list
//! of named controls that a UI (or a config preset) can read and write.

mod affine;
mod circle;
mod dot_product;
mod dot_projection;
mod heart;
mod manager;
mod matrix2d;
mod sphere;
mod wireframe;

pub use affine::AffineScene;
pub use circle::CircleScene;
pub use dot_product::DotProductScene;
pub use dot_projection::DotProjectionScene;
pub use heart::HeartScene;
pub use manager::SceneManager;
pub use matrix2d::Matrix2DScene;
pub use sphere::SphereScene;
pub use wireframe::WireframeScene;

use crate::input::FrameContext;
use crate::rasterizer::{Color, Framebuffer, Vec3};
use serde::{Deserialize, Serialize};

/// Value carried by a scene control
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ControlValue {
    Float(f32),
    Bool(bool),
    Color(Color),
    Vec3(Vec3),
}

impl ControlValue {
    pub fn as_float(self) -> Option<f32> {
        match self {
            ControlValue::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(self) -> Option<bool> {
        match self {
            ControlValue::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_color(self) -> Option<Color> {
        match self {
            ControlValue::Color(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vec3(self) -> Option<Vec3> {
        match self {
            ControlValue::Vec3(v) => Some(v),
            _ => None,
        }
    }
}

/// One named scene parameter, as shown to a UI
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub name: &'static str,
    pub value: ControlValue,
    /// Slider range the UI should enforce
    pub range: Option<(f32, f32)>,
    /// Readouts (statistics) that `set_control` will not accept
    pub read_only: bool,
}

impl Control {
    pub fn float(name: &'static str, value: f32, min: f32, max: f32) -> Self {
        Self {
            name,
            value: ControlValue::Float(value),
            range: Some((min, max)),
            read_only: false,
        }
    }

    /// Unbounded drag value
    pub fn drag(name: &'static str, value: f32) -> Self {
        Self {
            name,
            value: ControlValue::Float(value),
            range: None,
            read_only: false,
        }
    }

    pub fn toggle(name: &'static str, value: bool) -> Self {
        Self {
            name,
            value: ControlValue::Bool(value),
            range: None,
            read_only: false,
        }
    }

    pub fn color(name: &'static str, value: Color) -> Self {
        Self {
            name,
            value: ControlValue::Color(value),
            range: None,
            read_only: false,
        }
    }

    pub fn vec3(name: &'static str, value: Vec3) -> Self {
        Self {
            name,
            value: ControlValue::Vec3(value),
            range: None,
            read_only: false,
        }
    }

    pub fn readout(name: &'static str, value: f32) -> Self {
        Self {
            name,
            value: ControlValue::Float(value),
            range: None,
            read_only: true,
        }
    }

    /// One-line text form for overlays and logs
    pub fn label(&self) -> String {
        let value = match self.value {
            ControlValue::Float(v) => format!("{:.2}", v),
            ControlValue::Bool(v) => if v { "on" } else { "off" }.to_string(),
            ControlValue::Color(c) => format!("rgb({:.2}, {:.2}, {:.2})", c.r, c.g, c.b),
            ControlValue::Vec3(v) => format!("({:.2}, {:.2}, {:.2})", v.x, v.y, v.z),
        };
        if self.read_only {
            format!("{} = {}", self.name, value)
        } else {
            format!("{}: {}", self.name, value)
        }
    }
}

/// A demo that can be driven frame by frame
pub trait Scene {
    fn name(&self) -> &'static str;

    /// Called when the scene becomes active
    fn on_enter(&mut self) {}

    /// Called when another scene takes over
    fn on_exit(&mut self) {}

    /// Restart animation time
    fn reset(&mut self);

    fn update(&mut self, ctx: &FrameContext);

    fn render(&mut self, fb: &mut Framebuffer);

    /// Current parameters, in display order
    fn describe_controls(&self) -> Vec<Control>;

    /// Write one parameter. Returns `false` for unknown names, read-only
    /// controls, or a value of the wrong kind.
    fn set_control(&mut self, name: &str, value: ControlValue) -> bool;
}

/// Registry entry: a scene name and how to build it
#[derive(Clone, Copy)]
pub struct SceneEntry {
    pub name: &'static str,
    pub create: fn() -> Box<dyn Scene>,
}

/// Name -> constructor table for the built-in scenes
pub struct SceneRegistry {
    entries: Vec<SceneEntry>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// All scenes shipped with the sandbox
    pub fn builtin() -> Self {
        let mut reg = Self::new();
        reg.register("Affine", || Box::new(AffineScene::new()) as Box<dyn Scene>);
        reg.register("Matrix2D", || Box::new(Matrix2DScene::new()) as Box<dyn Scene>);
        reg.register("DotProduct", || Box::new(DotProductScene::new()) as Box<dyn Scene>);
        reg.register("DotProjection", || Box::new(DotProjectionScene::new()) as Box<dyn Scene>);
        reg.register("Heart", || Box::new(HeartScene::new()) as Box<dyn Scene>);
        reg.register("Circle", || Box::new(CircleScene::new()) as Box<dyn Scene>);
        reg.register("Sphere", || Box::new(SphereScene::new()) as Box<dyn Scene>);
        reg.register("Wireframe3D", || Box::new(WireframeScene::new()) as Box<dyn Scene>);
        reg
    }

    /// Later registrations with the same name replace earlier ones
    pub fn register(&mut self, name: &'static str, create: fn() -> Box<dyn Scene>) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            entry.create = create;
        } else {
            self.entries.push(SceneEntry { name, create });
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    /// Case-insensitive lookup
    pub fn create(&self, name: &str) -> Option<Box<dyn Scene>> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .map(|e| (e.create)())
    }

    pub fn entries(&self) -> &[SceneEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Shared `set_control` plumbing: writes `value` into `slot` when the kinds match
pub(crate) fn set_float(slot: &mut f32, value: ControlValue) -> bool {
    match value.as_float() {
        Some(v) => {
            *slot = v;
            true
        }
        None => false,
    }
}

pub(crate) fn set_bool(slot: &mut bool, value: ControlValue) -> bool {
    match value.as_bool() {
        Some(v) => {
            *slot = v;
            true
        }
        None => false,
    }
}

pub(crate) fn set_color(slot: &mut Color, value: ControlValue) -> bool {
    match value.as_color() {
        Some(v) => {
            *slot = v;
            true
        }
        None => false,
    }
}

pub(crate) fn set_vec3(slot: &mut Vec3, value: ControlValue) -> bool {
    match value.as_vec3() {
        Some(v) => {
            *slot = v;
            true
        }
        None => false,
    }
}
