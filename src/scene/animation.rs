//! Procedural motion curves. Every pose is a pure function of elapsed
//! seconds so frames can be reproduced from `t` alone.

use glam::Vec3;

use super::decor::{DecorHandles, ORB_ORIGIN, TOOL_ORIGIN, VEHICLE_ORIGIN};
use super::graph::Scene;
use crate::math::wrapped_product;

/// Vehicle sway (y rotation) and bob (y offset)
pub fn vehicle_pose(t: f64) -> (f32, f32) {
    ((t.sin() * 0.2) as f32, ((t * 2.0).sin() * 0.1) as f32)
}

/// Tool tumble about x and z, wrapped to one turn
pub fn tool_rotation(t: f64) -> Vec3 {
    Vec3::new(wrapped_product(t, 0.5), 0.0, wrapped_product(t, 0.3))
}

/// Orb pulse, always within [0.9, 1.1]
pub fn orb_scale(t: f64) -> f32 {
    (1.0 + (t * 3.0).sin() * 0.1) as f32
}

/// Overwrite the decorative transforms for time `t`
pub fn animate_decor(scene: &mut Scene, handles: &DecorHandles, t: f64) {
    let (sway, bob) = vehicle_pose(t);
    let vehicle = scene.transform_mut(handles.vehicle);
    vehicle.rotation.y = sway;
    vehicle.position.y = VEHICLE_ORIGIN.y + bob;

    let tool = scene.transform_mut(handles.tool);
    tool.position = TOOL_ORIGIN;
    tool.rotation = tool_rotation(t);

    let orb = scene.transform_mut(handles.orb);
    orb.position = ORB_ORIGIN;
    orb.scale = Vec3::splat(orb_scale(t));
}
