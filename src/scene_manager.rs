use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::core::WindowDimensions;
use crate::renderer::SceneRenderer;
use crate::scene::camera::{DEFAULT_FAR, DEFAULT_FOV_DEGREES, DEFAULT_NEAR};
use crate::scene::{animate_decor, build_decor, DecorHandles, ParticleField, PerspectiveCamera, Scene};

/// Seconds between initialization and the particle field appearing
pub const PARTICLE_SPAWN_DELAY: f64 = 1.0;
/// Camera distance from the origin along +z
pub const CAMERA_DEPTH: f32 = 5.0;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("decorative scene disabled by configuration")]
    Disabled,
    #[error("renderer unavailable: {0}")]
    RendererUnavailable(String),
    #[error("drawable area is {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
}

/// Everything that exists once the scene is running
pub struct SceneContext<R> {
    scene: Scene,
    camera: PerspectiveCamera,
    decor: DecorHandles,
    renderer: R,
    particles: Option<ParticleField>,
    /// Clock time at which the particle field appears; cleared once spawned
    spawn_at: Option<f64>,
    rng: StdRng,
}

/// Owns the decorative background: scene graph, camera and renderer
///
/// The manager has two phases, uninitialized and running. Every operation
/// other than [`SceneManager::initialize`] is a no-op while uninitialized,
/// which is also where it stays if initialization fails.
pub struct SceneManager<R: SceneRenderer> {
    context: Option<SceneContext<R>>,
    seed: Option<u64>,
}

impl<R: SceneRenderer> SceneManager<R> {
    pub fn new() -> Self {
        Self {
            context: None,
            seed: None,
        }
    }

    /// Fix the particle field's random source
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Build the scene and start animating from clock time `now`
    ///
    /// Failures are logged and swallowed; returns whether the scene runs.
    pub fn initialize<F>(&mut self, now: f64, viewport: WindowDimensions, make_renderer: F) -> bool
    where
        F: FnOnce(WindowDimensions) -> Result<R, SceneError>,
    {
        if self.context.is_some() {
            log::warn!("Decorative scene already initialized");
            return true;
        }

        match self.build(now, viewport, make_renderer) {
            Ok(context) => {
                log::info!(
                    "Decorative scene ready: {} nodes, {} lights",
                    context.scene.node_count(),
                    context.scene.lights().len()
                );
                self.context = Some(context);
                true
            }
            Err(e) => {
                log::warn!("Decorative scene failed to initialize: {}", e);
                false
            }
        }
    }

    fn build<F>(&self, now: f64, viewport: WindowDimensions, make_renderer: F) -> Result<SceneContext<R>, SceneError>
    where
        F: FnOnce(WindowDimensions) -> Result<R, SceneError>,
    {
        if !viewport.is_drawable() {
            return Err(SceneError::EmptyViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let renderer = make_renderer(viewport)?;

        let mut camera = PerspectiveCamera::new(DEFAULT_FOV_DEGREES, viewport.aspect(), DEFAULT_NEAR, DEFAULT_FAR);
        camera.position = Vec3::new(0.0, 0.0, CAMERA_DEPTH);
        camera.look_at(Vec3::ZERO);

        let mut scene = Scene::new();
        let decor = build_decor(&mut scene);

        let spawn_at = now + PARTICLE_SPAWN_DELAY;
        log::debug!("Particle field scheduled at t={:.3}s", spawn_at);

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(SceneContext {
            scene,
            camera,
            decor,
            renderer,
            particles: None,
            spawn_at: Some(spawn_at),
            rng,
        })
    }

    pub fn is_running(&self) -> bool {
        self.context.is_some()
    }

    /// One animation frame at clock time `t`, rendered once into `target`
    ///
    /// Returns false (and draws nothing) while uninitialized.
    pub fn step(&mut self, t: f64, target: R::Target<'_>) -> bool {
        let Some(context) = self.context.as_mut() else {
            return false;
        };

        // A field spawned this frame is drawn where it was placed
        if let Some(field) = &context.particles {
            field.advance(&mut context.scene, t);
        }

        if context.spawn_at.is_some_and(|deadline| t >= deadline) {
            context.spawn_at = None;
            let field = ParticleField::spawn(&mut context.scene, &mut context.rng);
            log::debug!("Particle field spawned at t={:.3}s: {} particles", t, field.len());
            context.particles = Some(field);
        }

        animate_decor(&mut context.scene, &context.decor, t);

        if let Err(e) = context.renderer.render(&context.scene, &context.camera, target) {
            log::warn!("Scene render skipped: {}", e);
        }
        true
    }

    /// Track a new drawable size; zero extents are ignored
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        let Some(context) = self.context.as_mut() else {
            return;
        };
        if width == 0 || height == 0 {
            return;
        }

        context.camera.set_viewport(width, height);
        context.renderer.resize(width, height);
    }

    /// Parallax: ease the camera toward the normalized pointer position
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) {
        if let Some(context) = self.context.as_mut() {
            context.camera.follow_pointer(x, y, Vec3::ZERO);
        }
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.context.as_ref().map(|c| &c.scene)
    }

    pub fn camera(&self) -> Option<&PerspectiveCamera> {
        self.context.as_ref().map(|c| &c.camera)
    }

    pub fn decor(&self) -> Option<&DecorHandles> {
        self.context.as_ref().map(|c| &c.decor)
    }

    pub fn particle_field(&self) -> Option<&ParticleField> {
        self.context.as_ref().and_then(|c| c.particles.as_ref())
    }

    pub fn renderer(&self) -> Option<&R> {
        self.context.as_ref().map(|c| &c.renderer)
    }
}

impl<R: SceneRenderer> Default for SceneManager<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RenderError;

    #[derive(Default)]
    struct CountingRenderer {
        renders: usize,
    }

    impl SceneRenderer for CountingRenderer {
        type Target<'a> = ();

        fn resize(&mut self, _width: u32, _height: u32) {}

        fn render(&mut self, _scene: &Scene, _camera: &PerspectiveCamera, _target: Self::Target<'_>) -> Result<(), RenderError> {
            self.renders += 1;
            Ok(())
        }
    }

    fn running() -> SceneManager<CountingRenderer> {
        let mut manager = SceneManager::new().with_seed(Some(1));
        assert!(manager.initialize(0.0, WindowDimensions::new(800, 600), |_| Ok(CountingRenderer::default())));
        manager
    }

    #[test]
    fn camera_starts_at_depth_looking_at_origin() {
        let manager = running();
        let camera = manager.camera().expect("camera");
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, CAMERA_DEPTH));
        assert_eq!(camera.target, Vec3::ZERO);
        assert_eq!(camera.aspect(), 800.0 / 600.0);
    }

    #[test]
    fn second_initialize_keeps_existing_scene() {
        let mut manager = running();
        manager.step(0.5, ());

        let called = std::cell::Cell::new(false);
        assert!(manager.initialize(0.5, WindowDimensions::new(800, 600), |_| {
            called.set(true);
            Ok(CountingRenderer::default())
        }));
        assert!(!called.get());
        assert_eq!(manager.renderer().map(|r| r.renders), Some(1));
    }

    #[test]
    fn empty_viewport_fails_gracefully() {
        let mut manager: SceneManager<CountingRenderer> = SceneManager::new();
        assert!(!manager.initialize(0.0, WindowDimensions::new(0, 0), |_| Ok(CountingRenderer::default())));
        assert!(!manager.is_running());
    }

    #[test]
    fn spawn_follows_clock_time_not_frame_deltas() {
        let mut manager = running();
        manager.step(0.9, ());
        manager.step(0.2, ());
        manager.step(0.25, ());
        assert!(manager.particle_field().is_none());

        manager.step(1.0, ());
        assert!(manager.particle_field().is_some());
    }

    #[test]
    fn spawn_deadline_is_relative_to_initialize() {
        let mut manager = SceneManager::new().with_seed(Some(1));
        assert!(manager.initialize(10.0, WindowDimensions::new(800, 600), |_| Ok(CountingRenderer::default())));

        manager.step(10.999_999_9, ());
        assert!(manager.particle_field().is_none());
        manager.step(11.0, ());
        assert!(manager.particle_field().is_some());
    }
}
