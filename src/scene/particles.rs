use glam::Vec3;
use rand::Rng;

use super::graph::{Geometry, Material, Mesh, Node, NodeId, Scene, Transform};
use crate::math::{hsl_to_rgb, wrap_angle};

pub const PARTICLE_COUNT: usize = 50;
/// Side of the centered spawn cube
pub const PARTICLE_SPREAD: f32 = 20.0;
pub const PARTICLE_RADIUS: f32 = 0.02;
pub const PARTICLE_BOB: f32 = 0.01;
pub const PARTICLE_SPIN: f32 = 0.01;

const PARTICLE_SATURATION: f32 = 0.7;
const PARTICLE_LIGHTNESS: f32 = 0.5;
const PARTICLE_OPACITY: f32 = 0.6;

/// Bobbing, spinning cloud of small spheres grouped under one root
#[derive(Debug, Clone)]
pub struct ParticleField {
    group: NodeId,
    particles: Vec<NodeId>,
}

impl ParticleField {
    /// Scatter the particles in the spawn cube and attach them to `scene`
    pub fn spawn<R: Rng + ?Sized>(scene: &mut Scene, rng: &mut R) -> Self {
        let group = scene.add(Node::group("particles", Transform::IDENTITY));

        let particles = (0..PARTICLE_COUNT)
            .map(|_| {
                let position = Vec3::new(
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                );
                let color = hsl_to_rgb(rng.gen::<f32>(), PARTICLE_SATURATION, PARTICLE_LIGHTNESS);

                scene.add_child(
                    group,
                    Node::mesh(
                        "particle",
                        Transform::at(position),
                        Mesh {
                            geometry: Geometry::Sphere {
                                radius: PARTICLE_RADIUS,
                                width_segments: 8,
                                height_segments: 8,
                            },
                            material: Material::basic(color).with_opacity(PARTICLE_OPACITY),
                        },
                    ),
                )
            })
            .collect();

        Self { group, particles }
    }

    pub fn group(&self) -> NodeId {
        self.group
    }

    pub fn particles(&self) -> &[NodeId] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// One frame of motion: phase-staggered bob plus a constant spin
    pub fn advance(&self, scene: &mut Scene, t: f64) {
        for (i, &id) in self.particles.iter().enumerate() {
            let transform = scene.transform_mut(id);
            transform.position.y += ((t + i as f64).sin() as f32) * PARTICLE_BOB;
            transform.rotation.x = wrap_angle((transform.rotation.x + PARTICLE_SPIN) as f64);
            transform.rotation.y = wrap_angle((transform.rotation.y + PARTICLE_SPIN) as f64);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawns_fifty_inside_cube() {
        let mut scene = Scene::new();
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::spawn(&mut scene, &mut rng);

        assert_eq!(field.len(), PARTICLE_COUNT);
        assert_eq!(scene.node(field.group()).children().len(), PARTICLE_COUNT);

        let half = PARTICLE_SPREAD / 2.0;
        for &id in field.particles() {
            let p = scene.node(id).transform.position;
            assert!(p.abs().max_element() <= half);

            let mesh = scene.node(id).mesh.expect("particle mesh");
            assert_eq!(mesh.material.opacity, PARTICLE_OPACITY);
        }
    }

    #[test]
    fn same_seed_same_field() {
        let positions = |seed| {
            let mut scene = Scene::new();
            let field = ParticleField::spawn(&mut scene, &mut StdRng::seed_from_u64(seed));
            field
                .particles()
                .iter()
                .map(|&id| scene.node(id).transform.position)
                .collect::<Vec<_>>()
        };
        assert_eq!(positions(11), positions(11));
        assert_ne!(positions(11), positions(12));
    }

    #[test]
    fn advance_bobs_by_phase_and_spins() {
        let mut scene = Scene::new();
        let field = ParticleField::spawn(&mut scene, &mut StdRng::seed_from_u64(3));
        let before: Vec<Vec3> = field
            .particles()
            .iter()
            .map(|&id| scene.node(id).transform.position)
            .collect();

        field.advance(&mut scene, 0.5);

        for (i, &id) in field.particles().iter().enumerate() {
            let transform = scene.node(id).transform;
            let expected = ((0.5 + i as f64).sin() as f32) * PARTICLE_BOB;
            assert!((transform.position.y - before[i].y - expected).abs() < 1e-6);
            assert_eq!(transform.position.x, before[i].x);
            assert!((transform.rotation.x - PARTICLE_SPIN).abs() < 1e-7);
            assert!((transform.rotation.y - PARTICLE_SPIN).abs() < 1e-7);
        }
    }
}
