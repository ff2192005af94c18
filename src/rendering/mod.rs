pub mod headless;
pub mod mesh;
pub mod renderer;
pub mod texture;

use crate::camera::Camera;
use crate::scene_graph::Scene;

/// Collaborator that turns the current scene into one presented frame.
///
/// The scene's world matrices are up to date when this is called.
pub trait FrameRenderer {
    type Error;

    fn render_frame(&mut self, scene: &Scene, camera: &Camera) -> Result<(), Self::Error>;
}
