use std::convert::Infallible;

use crate::camera::Camera;
use crate::rendering::mesh::SceneMesh;
use crate::rendering::FrameRenderer;
use crate::scene_graph::Scene;

/// Renderer for runs without a window. Tessellates every frame and logs a
/// summary every `log_every` frames.
pub struct LogRenderer {
    frames: u64,
    log_every: u64,
}

impl LogRenderer {
    pub fn new(log_every: u64) -> Self {
        Self {
            frames: 0,
            log_every: log_every.max(1),
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FrameRenderer for LogRenderer {
    type Error = Infallible;

    fn render_frame(&mut self, scene: &Scene, camera: &Camera) -> Result<(), Infallible> {
        let mesh = SceneMesh::from_scene(scene);
        self.frames += 1;

        if self.frames % self.log_every == 0 {
            log::info!(
                "Frame {}: {} line vertices, {} triangle vertices, camera at {}",
                self.frames,
                mesh.lines.len(),
                mesh.triangles.len(),
                camera.eye
            );
        }

        Ok(())
    }
}
