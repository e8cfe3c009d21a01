use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::graph::Geometry;

/// CPU-side triangle mesh with per-vertex normals, counter-clockwise
/// winding seen from outside
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push_vertex(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        index
    }
}

pub fn tessellate(geometry: &Geometry) -> MeshData {
    match *geometry {
        Geometry::Box {
            width,
            height,
            depth,
        } => box_mesh(Vec3::new(width, height, depth) * 0.5),
        Geometry::Cylinder {
            radius_top,
            radius_bottom,
            height,
            radial_segments,
        } => cylinder_mesh(radius_top, radius_bottom, height, radial_segments.max(3)),
        Geometry::Sphere {
            radius,
            width_segments,
            height_segments,
        } => sphere_mesh(radius, width_segments.max(3), height_segments.max(2)),
    }
}

fn box_mesh(half: Vec3) -> MeshData {
    // (normal, u, v) with u × v = normal
    const FACES: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];

    let mut mesh = MeshData::default();
    for (normal, u, v) in FACES {
        let center = normal * half;
        let u = u * half;
        let v = v * half;

        let base = mesh.push_vertex(center - u - v, normal);
        mesh.push_vertex(center + u - v, normal);
        mesh.push_vertex(center + u + v, normal);
        mesh.push_vertex(center - u + v, normal);

        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

fn cylinder_mesh(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let half_height = height * 0.5;
    let slope = (radius_bottom - radius_top) / height;

    // Side wall: a top ring and a bottom ring sharing the seam twice
    let ring = |mesh: &mut MeshData, radius: f32, y: f32| -> u32 {
        let start = mesh.positions.len() as u32;
        for x in 0..=segments {
            let theta = x as f32 / segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            mesh.push_vertex(
                Vec3::new(radius * sin, y, radius * cos),
                Vec3::new(sin, slope, cos).normalize(),
            );
        }
        start
    };
    let top = ring(&mut mesh, radius_top, half_height);
    let bottom = ring(&mut mesh, radius_bottom, -half_height);

    for x in 0..segments {
        let a = top + x;
        let b = bottom + x;
        let c = bottom + x + 1;
        let d = top + x + 1;
        mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }

    cap(&mut mesh, radius_top, half_height, segments, true);
    cap(&mut mesh, radius_bottom, -half_height, segments, false);
    mesh
}

fn cap(mesh: &mut MeshData, radius: f32, y: f32, segments: u32, top: bool) {
    if radius <= 0.0 {
        return;
    }

    let normal = if top { Vec3::Y } else { Vec3::NEG_Y };
    let center = mesh.push_vertex(Vec3::new(0.0, y, 0.0), normal);
    let start = mesh.positions.len() as u32;
    for x in 0..=segments {
        let theta = x as f32 / segments as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        mesh.push_vertex(Vec3::new(radius * sin, y, radius * cos), normal);
    }

    for x in 0..segments {
        let i = start + x;
        if top {
            mesh.indices.extend_from_slice(&[i, i + 1, center]);
        } else {
            mesh.indices.extend_from_slice(&[i + 1, i, center]);
        }
    }
}

fn sphere_mesh(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let row = width_segments + 1;

    for iy in 0..=height_segments {
        let theta = iy as f32 / height_segments as f32 * PI;
        for ix in 0..=width_segments {
            let phi = ix as f32 / width_segments as f32 * TAU;
            let normal = Vec3::new(
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            );
            mesh.push_vertex(normal * radius, normal);
        }
    }

    // Skip the zero-area triangles that would collapse onto the poles
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;

            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}
