use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::math::Rgb;

/// Index of a node inside its [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Local transform: translation, XYZ Euler rotation (radians), scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Parametric shape, tessellated by the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    /// Axis along local y
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shading {
    /// Ambient + diffuse + specular from the scene lights
    Phong,
    /// Flat color, ignores lights
    Basic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Rgb,
    pub emissive: Rgb,
    pub opacity: f32,
    pub shading: Shading,
}

impl Material {
    pub fn phong(color: Rgb) -> Self {
        Self {
            color,
            emissive: [0.0; 3],
            opacity: 1.0,
            shading: Shading::Phong,
        }
    }

    pub fn basic(color: Rgb) -> Self {
        Self {
            shading: Shading::Basic,
            ..Self::phong(color)
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_emissive(mut self, emissive: Rgb) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mesh {
    pub geometry: Geometry,
    pub material: Material,
}

/// Scene graph node; groups are nodes without a mesh
#[derive(Debug, Clone)]
pub struct Node {
    pub name: &'static str,
    pub transform: Transform,
    pub mesh: Option<Mesh>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn group(name: &'static str, transform: Transform) -> Self {
        Self {
            name,
            transform,
            mesh: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn mesh(name: &'static str, transform: Transform, mesh: Mesh) -> Self {
        Self {
            mesh: Some(mesh),
            ..Self::group(name, transform)
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Uniform light on every surface
    Ambient,
    /// Omnidirectional, fading to zero at `range`
    Point { position: Vec3, range: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: Rgb,
    pub intensity: f32,
}

impl Light {
    pub fn ambient(color: Rgb, intensity: f32) -> Self {
        Self {
            kind: LightKind::Ambient,
            color,
            intensity,
        }
    }

    pub fn point(color: Rgb, intensity: f32, range: f32, position: Vec3) -> Self {
        Self {
            kind: LightKind::Point { position, range },
            color,
            intensity,
        }
    }
}

/// One mesh with its resolved world matrix
#[derive(Debug, Clone, Copy)]
pub struct DrawItem<'a> {
    pub node: NodeId,
    pub world: Mat4,
    pub mesh: &'a Mesh,
}

/// Retained scene graph - arena of nodes plus the light list
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    lights: Vec<Light>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a node to the scene root
    pub fn add(&mut self, node: Node) -> NodeId {
        let id = self.push(node, None);
        self.roots.push(id);
        id
    }

    /// Attach a node below `parent`
    pub fn add_child(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = self.push(node, Some(parent));
        self.nodes[parent.0].children.push(id);
        id
    }

    fn push(&mut self, mut node: Node, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = parent;
        self.nodes.push(node);
        id
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn transform_mut(&mut self, id: NodeId) -> &mut Transform {
        &mut self.nodes[id.0].transform
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Compose local transforms from the root down to `id`
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let node = self.node(id);
        let local = node.transform.matrix();
        match node.parent {
            Some(parent) => self.world_matrix(parent) * local,
            None => local,
        }
    }

    /// Depth-first list of every mesh with its world matrix
    pub fn draw_list(&self) -> Vec<DrawItem<'_>> {
        let mut items = Vec::new();
        for &root in &self.roots {
            self.collect(root, Mat4::IDENTITY, &mut items);
        }
        items
    }

    fn collect<'a>(&'a self, id: NodeId, parent_world: Mat4, items: &mut Vec<DrawItem<'a>>) {
        let node = &self.nodes[id.0];
        let world = parent_world * node.transform.matrix();
        if let Some(mesh) = &node.mesh {
            items.push(DrawItem {
                node: id,
                world,
                mesh,
            });
        }
        for &child in &node.children {
            self.collect(child, world, items);
        }
    }
}
