//! The fixed decorative set: vehicle, tool, orb and their lights.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use super::graph::{Geometry, Light, Material, Mesh, Node, NodeId, Scene, Transform};
use crate::math::rgb_from_hex;

pub const VEHICLE_ORIGIN: Vec3 = Vec3::new(-3.0, 0.0, -2.0);
pub const TOOL_ORIGIN: Vec3 = Vec3::new(3.0, 1.0, -1.0);
pub const ORB_ORIGIN: Vec3 = Vec3::new(0.0, 0.0, -3.0);
pub const SILHOUETTE_SCALE: f32 = 0.3;

const WHEEL_OFFSETS: [Vec3; 4] = [
    Vec3::new(-0.8, -0.6, 1.2),
    Vec3::new(0.8, -0.6, 1.2),
    Vec3::new(-0.8, -0.6, -1.2),
    Vec3::new(0.8, -0.6, -1.2),
];

/// Handles to the animated roots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecorHandles {
    pub vehicle: NodeId,
    pub tool: NodeId,
    pub orb: NodeId,
}

/// Populate `scene` with the silhouettes, the orb and three lights
pub fn build_decor(scene: &mut Scene) -> DecorHandles {
    let vehicle = build_vehicle(scene);

    let tool = scene.add(Node::mesh(
        "tool",
        Transform::at(TOOL_ORIGIN).with_uniform_scale(SILHOUETTE_SCALE),
        Mesh {
            geometry: Geometry::Box {
                width: 0.2,
                height: 2.0,
                depth: 0.2,
            },
            material: Material::phong(rgb_from_hex(0xef4444)).with_opacity(0.9),
        },
    ));

    let orb = scene.add(Node::mesh(
        "orb",
        Transform::at(ORB_ORIGIN),
        Mesh {
            geometry: Geometry::Sphere {
                radius: 0.5,
                width_segments: 32,
                height_segments: 32,
            },
            material: Material::phong(rgb_from_hex(0x8b5cf6))
                .with_emissive(rgb_from_hex(0x4c1d95))
                .with_opacity(0.7),
        },
    ));

    scene.add_light(Light::ambient(rgb_from_hex(0x404040), 0.3));
    scene.add_light(Light::point(
        rgb_from_hex(0x8b5cf6),
        1.0,
        100.0,
        Vec3::new(10.0, 10.0, 10.0),
    ));
    scene.add_light(Light::point(
        rgb_from_hex(0x6366f1),
        0.5,
        100.0,
        Vec3::new(-10.0, -10.0, -10.0),
    ));

    DecorHandles { vehicle, tool, orb }
}

fn build_vehicle(scene: &mut Scene) -> NodeId {
    let vehicle = scene.add(Node::group(
        "vehicle",
        Transform::at(VEHICLE_ORIGIN).with_uniform_scale(SILHOUETTE_SCALE),
    ));

    scene.add_child(
        vehicle,
        Node::mesh(
            "vehicle.body",
            Transform::IDENTITY,
            Mesh {
                geometry: Geometry::Box {
                    width: 2.0,
                    height: 0.8,
                    depth: 4.0,
                },
                material: Material::phong(rgb_from_hex(0x6366f1)).with_opacity(0.8),
            },
        ),
    );

    scene.add_child(
        vehicle,
        Node::mesh(
            "vehicle.cabin",
            Transform::at(Vec3::new(0.0, 0.7, 0.0)),
            Mesh {
                geometry: Geometry::Box {
                    width: 1.5,
                    height: 0.6,
                    depth: 2.0,
                },
                material: Material::phong(rgb_from_hex(0x4f46e5)).with_opacity(0.8),
            },
        ),
    );

    let wheel = Mesh {
        geometry: Geometry::Cylinder {
            radius_top: 0.3,
            radius_bottom: 0.3,
            height: 0.2,
            radial_segments: 16,
        },
        material: Material::phong(rgb_from_hex(0x1f2937)),
    };
    for offset in WHEEL_OFFSETS {
        scene.add_child(
            vehicle,
            Node::mesh(
                "vehicle.wheel",
                Transform::at(offset).with_rotation(Vec3::new(0.0, 0.0, FRAC_PI_2)),
                wheel,
            ),
        );
    }

    vehicle
}
