pub mod animation;
pub mod camera;
pub mod decor;
pub mod geometry;
pub mod graph;
pub mod particles;

pub use animation::{animate_decor, orb_scale, tool_rotation, vehicle_pose};
pub use camera::PerspectiveCamera;
pub use decor::{build_decor, DecorHandles};
pub use geometry::{tessellate, MeshData};
pub use graph::{
    DrawItem, Geometry, Light, LightKind, Material, Mesh, Node, NodeId, Scene, Shading, Transform,
};
pub use particles::{ParticleField, PARTICLE_COUNT, PARTICLE_SPREAD};
