//! 3D wireframe scene: a fly camera looking at a spinning cube and an
//! orbiting pyramid
//!
//! Node 0 is always the camera marker; it mirrors the live [`Camera`]
//! (rotation.x = pitch, rotation.y = yaw) so presets and inspectors see one
//! consistent node list.

use super::{set_bool, set_float, set_vec3, Control, ControlValue, Scene};
use crate::input::FrameContext;
use crate::rasterizer::{
    radians, rotate_yaw_pitch_roll, Camera, Color, FlyController, Framebuffer,
    Projection, Vec2, Vec3,
};

const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, -4.0);

const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
];

const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

const PYRAMID_VERTICES: [Vec3; 5] = [
    Vec3::new(-0.6, -0.5, -0.6),
    Vec3::new(0.6, -0.5, -0.6),
    Vec3::new(0.6, -0.5, 0.6),
    Vec3::new(-0.6, -0.5, 0.6),
    Vec3::new(0.0, 0.6, 0.0),
];

const PYRAMID_EDGES: [(usize, usize); 8] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (0, 4),
    (1, 4),
    (2, 4),
    (3, 4),
];

/// What a node draws as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    Cube,
    Pyramid,
    /// Not drawn; stands in for the viewpoint
    Camera,
}

impl NodeShape {
    /// Model-space vertices and edge index pairs
    pub fn mesh(self) -> (&'static [Vec3], &'static [(usize, usize)]) {
        match self {
            NodeShape::Cube => (&CUBE_VERTICES, &CUBE_EDGES),
            NodeShape::Pyramid => (&PYRAMID_VERTICES, &PYRAMID_EDGES),
            NodeShape::Camera => (&[], &[]),
        }
    }
}

/// One object in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: &'static str,
    pub shape: NodeShape,
    pub position: Vec3,
    /// Pitch (x), yaw (y), roll (z) in radians
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl SceneNode {
    pub fn new(name: &'static str, shape: NodeShape, position: Vec3) -> Self {
        Self {
            name,
            shape,
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::splat(1.0),
        }
    }

    /// Model point -> world: scale, then yaw/pitch/roll, then translate
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        let scaled = local * self.scale;
        rotate_yaw_pitch_roll(scaled, self.rotation.y, self.rotation.x, self.rotation.z)
            + self.position
    }
}

pub struct WireframeScene {
    nodes: Vec<SceneNode>,
    camera: Camera,
    controller: FlyController,
    time: f32,
    pub animate: bool,
    /// Radians per second around Y
    pub spin_speed: f32,
    pub orbit_speed: f32,
    pub orbit_radius: f32,
    pub fov_degrees: f32,
    pub near_plane: f32,
    pub edge_color: Color,
}

impl WireframeScene {
    pub fn new() -> Self {
        let nodes = vec![
            SceneNode::new("Camera", NodeShape::Camera, CAMERA_START),
            SceneNode::new("Cube", NodeShape::Cube, Vec3::new(0.0, 0.5, 0.0)),
            SceneNode::new("Pyramid", NodeShape::Pyramid, Vec3::new(0.0, 0.4, 0.0)),
        ];
        Self {
            nodes,
            camera: Camera::new(CAMERA_START),
            controller: FlyController::new(3.0, 0.0025),
            time: 0.0,
            animate: true,
            spin_speed: 0.6,
            orbit_speed: 0.5,
            orbit_radius: 2.0,
            fov_degrees: 60.0,
            near_plane: 0.1,
            edge_color: Color::from_bytes(120, 200, 190, 255),
        }
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn projection(&self) -> Projection {
        Projection::new(radians(self.fov_degrees), self.near_plane)
    }

    fn sync_camera_node(&mut self) {
        if let Some(node) = self.nodes.first_mut() {
            node.position = self.camera.position;
            node.rotation = Vec3::new(self.camera.pitch, self.camera.yaw, 0.0);
        }
    }

    fn animate_nodes(&mut self, dt: f32) {
        let t = self.time * self.orbit_speed;
        for node in self.nodes.iter_mut().skip(1) {
            node.rotation.y += self.spin_speed * dt;
            if node.shape == NodeShape::Pyramid {
                node.position.x = t.cos() * self.orbit_radius;
                node.position.z = t.sin() * self.orbit_radius;
            }
        }
    }

    fn node_mut(&mut self, name: &str) -> Option<&mut SceneNode> {
        self.nodes.iter_mut().find(|n| n.name == name)
    }

    fn node_value(&self, name: &str, f: impl Fn(&SceneNode) -> Vec3) -> Vec3 {
        self.nodes
            .iter()
            .find(|n| n.name == name)
            .map(f)
            .unwrap_or(Vec3::ZERO)
    }
}

impl Default for WireframeScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for WireframeScene {
    fn name(&self) -> &'static str {
        "Wireframe3D"
    }

    fn on_exit(&mut self) {
        self.controller.release();
    }

    /// Camera back to the start pose; object animation state is kept
    fn reset(&mut self) {
        self.camera = Camera::new(CAMERA_START);
        self.controller.release();
        self.time = 0.0;
        self.sync_camera_node();
    }

    fn update(&mut self, ctx: &FrameContext) {
        self.time += ctx.dt;
        self.controller.update(&mut self.camera, ctx);
        self.sync_camera_node();
        if self.animate {
            self.animate_nodes(ctx.dt);
        }
    }

    fn render(&mut self, fb: &mut Framebuffer) {
        if fb.is_empty() {
            return;
        }
        let (w, h) = (fb.width(), fb.height());
        let projection = self.projection();
        let mut projected: Vec<Option<Vec2>> = Vec::with_capacity(8);

        for node in &self.nodes {
            let (vertices, edges) = node.shape.mesh();
            if edges.is_empty() {
                continue;
            }
            projected.clear();
            projected.extend(
                vertices
                    .iter()
                    .map(|&v| projection.project(&self.camera, node.to_world(v), w, h)),
            );
            for &(a, b) in edges {
                // Edges crossing the near plane are dropped, not clipped
                if let (Some(pa), Some(pb)) = (projected[a], projected[b]) {
                    fb.draw_line_f(pa, pb, self.edge_color);
                }
            }
        }
    }

    fn describe_controls(&self) -> Vec<Control> {
        vec![
            Control::toggle("Animate", self.animate),
            Control::float("Spin", self.spin_speed, 0.0, 5.0),
            Control::float("Orbit Speed", self.orbit_speed, -5.0, 5.0),
            Control::float("Orbit Radius", self.orbit_radius, 0.0, 10.0),
            Control::float("FOV", self.fov_degrees, 30.0, 120.0),
            Control::float("Near", self.near_plane, 0.01, 1.0),
            Control::drag("Move Speed", self.controller.move_speed),
            Control::vec3("Camera Position", self.camera.position),
            Control::vec3("Cube Position", self.node_value("Cube", |n| n.position)),
            Control::vec3("Cube Scale", self.node_value("Cube", |n| n.scale)),
            Control::vec3("Pyramid Scale", self.node_value("Pyramid", |n| n.scale)),
        ]
    }

    fn set_control(&mut self, name: &str, value: ControlValue) -> bool {
        match name {
            "Animate" => set_bool(&mut self.animate, value),
            "Spin" => set_float(&mut self.spin_speed, value),
            "Orbit Speed" => set_float(&mut self.orbit_speed, value),
            "Orbit Radius" => set_float(&mut self.orbit_radius, value),
            "FOV" => set_float(&mut self.fov_degrees, value),
            "Near" => set_float(&mut self.near_plane, value),
            "Move Speed" => set_float(&mut self.controller.move_speed, value),
            "Camera Position" => {
                let ok = set_vec3(&mut self.camera.position, value);
                self.sync_camera_node();
                ok
            }
            "Cube Position" => self
                .node_mut("Cube")
                .is_some_and(|n| set_vec3(&mut n.position, value)),
            "Cube Scale" => self
                .node_mut("Cube")
                .is_some_and(|n| set_vec3(&mut n.scale, value)),
            "Pyramid Scale" => self
                .node_mut("Pyramid")
                .is_some_and(|n| set_vec3(&mut n.scale, value)),
            _ => false,
        }
    }
}
