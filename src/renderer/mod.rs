pub mod mesh_renderer;
pub mod vertex;

pub use mesh_renderer::{FrameTarget, MeshRenderer, MSAA_SAMPLES};
pub use vertex::Vertex;

use thiserror::Error;

use crate::scene::{PerspectiveCamera, Scene};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("surface unavailable: {0}")]
    Surface(#[from] wgpu::SurfaceError),
    #[error("render target is {width}x{height}")]
    EmptyTarget { width: u32, height: u32 },
}

/// Draws a [`Scene`] from a camera into a backend-specific target
pub trait SceneRenderer {
    /// Per-frame destination, e.g. an encoder and a texture view
    type Target<'a>;

    /// Match the drawable extent in physical pixels
    fn resize(&mut self, width: u32, height: u32);

    /// Render the whole scene exactly once
    fn render(
        &mut self,
        scene: &Scene,
        camera: &PerspectiveCamera,
        target: Self::Target<'_>,
    ) -> Result<(), RenderError>;
}
