use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::AnimationConfig;
use crate::context::SceneContext;
use crate::pivot::PivotRig;
use crate::rendering::FrameRenderer;
use crate::scene_graph::Scene;

/// Cancellation token for a running animation loop. Clones share the flag.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Drives the pivots once per rendered frame until stopped.
pub struct AnimationLoop {
    config: AnimationConfig,
    scale_speed: f32,
    ticks: u64,
    stop: StopHandle,
}

impl AnimationLoop {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            scale_speed: config.scale_speed,
            config,
            ticks: 0,
            stop: StopHandle::default(),
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.stop.is_stopped()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Current signed scale step.
    pub fn scale_speed(&self) -> f32 {
        self.scale_speed
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Applies one tick of rotation and scale oscillation to the pivots.
    pub fn advance(&mut self, rig: &mut PivotRig, scene: &mut Scene) {
        if self.config.rotate_data {
            rig.rotate_data(scene, self.config.data_rotation_speed);
        }

        if self.config.rotate_model {
            rig.rotate_model(scene, self.config.model_rotation_speed);
        }

        if self.config.oscillate_scale {
            // Bounds are checked against the scale before this tick's step
            let scale = rig.data_state().scale;
            if scale >= self.config.scale_max || scale <= self.config.scale_min {
                self.scale_speed = -self.scale_speed;
            }
            rig.scale_data(scene, self.scale_speed);
        }

        self.ticks += 1;
    }

    /// Runs one frame: pending resize, pivot update, world matrices, then the renderer.
    pub fn tick<R: FrameRenderer>(
        &mut self,
        context: &mut SceneContext,
        renderer: &mut R,
    ) -> Result<(), R::Error> {
        context.apply_pending_resize();

        self.advance(&mut context.rig, &mut context.scene);
        context.scene.late_update();

        renderer.render_frame(&context.scene, &context.camera)
    }

    /// Ticks until the stop handle fires or `max_ticks` frames have been run.
    /// Returns the number of frames run by this call.
    pub fn run<R: FrameRenderer>(
        &mut self,
        context: &mut SceneContext,
        renderer: &mut R,
        max_ticks: Option<u64>,
    ) -> Result<u64, R::Error> {
        let mut frames = 0;

        while self.is_running() && max_ticks.map_or(true, |max| frames < max) {
            self.tick(context, renderer)?;
            frames += 1;
        }

        log::info!(
            "Animation loop finished after {frames} frames ({} total)",
            self.ticks
        );

        Ok(frames)
    }
}
