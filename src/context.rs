use glam::UVec2;
use rand::Rng;

use crate::camera::Camera;
use crate::config::PlotConfig;
use crate::error::SceneError;
use crate::pivot::PivotRig;
use crate::plot::{build_axes, build_points, build_random_points};
use crate::scene_graph::{ObjectId, Scene};

/// Everything a running plot owns: the scene graph, the camera, the pivots,
/// and a viewport change waiting for the next tick.
pub struct SceneContext {
    pub scene: Scene,
    pub camera: Camera,
    pub rig: PivotRig,
    pub axes: ObjectId,
    pub data: ObjectId,
    pending_resize: Option<UVec2>,
}

impl SceneContext {
    /// Validates `config` and builds the axes, the point clouds and the pivots.
    pub fn build(config: &PlotConfig, rng: &mut impl Rng) -> Result<Self, SceneError> {
        config.validate()?;
        let range = config.range()?;
        let point_count = config.point_count()?;

        let mut scene = Scene::new();

        let axes = build_axes(&mut scene, &config.axes);

        let data = scene.add_group("Data geometries");
        let random_points = build_random_points(
            &mut scene,
            rng,
            point_count,
            &range,
            config.point_color,
            config.point_radius,
        );
        scene.add_child(data, random_points);

        if !config.fixed_points.is_empty() {
            let fixed_points = build_points(
                &mut scene,
                config.fixed_points.iter().copied(),
                &range,
                config.point_color,
                config.point_radius,
            );
            scene.add_child(data, fixed_points);
        }

        let rig = PivotRig::attach(
            &mut scene,
            &[axes],
            &[data],
            range.recenter_offset(),
            config.coupled_rotation,
        );

        log::info!(
            "Scene built: {} points in [{}, {}], arrowheads: {}, coupled rotation: {}",
            scene.count_primitives(data),
            range.min(),
            range.max(),
            config.axes.arrowheads,
            config.coupled_rotation
        );

        Ok(Self {
            scene,
            camera: Camera::default(),
            rig,
            axes,
            data,
            pending_resize: None,
        })
    }

    /// Records a viewport change. Only the latest one is applied, before the next tick.
    pub fn queue_resize(&mut self, size: UVec2) {
        self.pending_resize = Some(size);
    }

    pub fn pending_resize(&self) -> Option<UVec2> {
        self.pending_resize
    }

    pub fn apply_pending_resize(&mut self) {
        if let Some(size) = self.pending_resize.take() {
            log::debug!("Applying viewport resize to {}x{}", size.x, size.y);
            self.camera.set_viewport(size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_build_default_scene() {
        let mut rng = StdRng::seed_from_u64(0);
        let context = SceneContext::build(&PlotConfig::default(), &mut rng).unwrap();

        assert_eq!(context.scene.count_primitives(context.axes), 6);
        assert_eq!(context.scene.count_primitives(context.data), 15);
        assert_eq!(
            context.scene.child_ids(context.rig.data_pivot()),
            &[context.data]
        );
        assert_eq!(
            context.scene.child_ids(context.rig.model_pivot()),
            &[context.axes]
        );
    }

    #[test]
    fn test_fixed_points_join_the_data_group() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = PlotConfig {
            point_count: 2,
            fixed_points: vec![Vec3::ONE, Vec3::splat(9.0)],
            ..Default::default()
        };
        let context = SceneContext::build(&config, &mut rng).unwrap();

        assert_eq!(context.scene.child_ids(context.data).len(), 2);
        assert_eq!(context.scene.count_primitives(context.data), 4);
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = PlotConfig {
            point_count: -1,
            ..Default::default()
        };
        assert!(matches!(
            SceneContext::build(&config, &mut rng),
            Err(SceneError::InvalidCount(-1))
        ));
    }

    #[test]
    fn test_latest_queued_resize_wins() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut context = SceneContext::build(&PlotConfig::default(), &mut rng).unwrap();

        context.queue_resize(UVec2::new(100, 100));
        context.queue_resize(UVec2::new(300, 100));
        context.apply_pending_resize();

        assert_eq!(context.camera.aspect, 3.0);
        assert_eq!(context.pending_resize(), None);
    }
}
