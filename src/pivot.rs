use std::f32::consts::TAU;

use glam::{Quat, Vec3};

use crate::scene_graph::{ObjectId, Scene};

/// Scale every pivot starts at.
pub const INITIAL_SCALE: f32 = 1.0;

/// Rotation about +Y (radians, kept in [0, TAU)) and uniform scale of a pivot node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotState {
    pub rotation: f32,
    pub scale: f32,
}

impl Default for PivotState {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            scale: INITIAL_SCALE,
        }
    }
}

/// Two sibling pivots at the scene root. The model pivot carries the axes and
/// the data pivot carries the plotted points.
///
/// With `coupled_rotation`, every model rotation is also added to the data
/// pivot, so data spins with the model while the axes never follow the data.
#[derive(Debug)]
pub struct PivotRig {
    model_pivot: ObjectId,
    data_pivot: ObjectId,
    model: PivotState,
    data: PivotState,
    coupled_rotation: bool,
}

impl PivotRig {
    /// Re-parents `model_nodes` and `data_nodes` under fresh pivots and shifts
    /// each of those groups by `recenter_offset`. The pivots stay at the origin.
    pub fn attach(
        scene: &mut Scene,
        model_nodes: &[ObjectId],
        data_nodes: &[ObjectId],
        recenter_offset: Vec3,
        coupled_rotation: bool,
    ) -> Self {
        let model_pivot = scene.add_group("Model pivot");
        let data_pivot = scene.add_group("Data pivot");

        for (pivot, nodes) in [(model_pivot, model_nodes), (data_pivot, data_nodes)] {
            for &node in nodes {
                scene.add_child(pivot, node);
                scene.set_object_translation(node, recenter_offset);
            }
        }

        log::debug!(
            "Attached {} model and {} data groups (offset {recenter_offset}, coupled: {coupled_rotation})",
            model_nodes.len(),
            data_nodes.len(),
        );

        Self {
            model_pivot,
            data_pivot,
            model: PivotState::default(),
            data: PivotState::default(),
            coupled_rotation,
        }
    }

    pub fn model_pivot(&self) -> ObjectId {
        self.model_pivot
    }

    pub fn data_pivot(&self) -> ObjectId {
        self.data_pivot
    }

    pub fn model_state(&self) -> PivotState {
        self.model
    }

    pub fn data_state(&self) -> PivotState {
        self.data
    }

    pub fn coupled_rotation(&self) -> bool {
        self.coupled_rotation
    }

    pub fn rotate_model(&mut self, scene: &mut Scene, delta: f32) {
        self.model.rotation = wrap_angle(self.model.rotation + delta);
        Self::apply(scene, self.model_pivot, self.model);

        if self.coupled_rotation {
            self.rotate_data(scene, delta);
        }
    }

    pub fn rotate_data(&mut self, scene: &mut Scene, delta: f32) {
        self.data.rotation = wrap_angle(self.data.rotation + delta);
        Self::apply(scene, self.data_pivot, self.data);
    }

    pub fn scale_data(&mut self, scene: &mut Scene, delta: f32) {
        self.data.scale += delta;
        Self::apply(scene, self.data_pivot, self.data);
    }

    fn apply(scene: &mut Scene, pivot: ObjectId, state: PivotState) {
        scene.set_object_rotation(pivot, Quat::from_rotation_y(state.rotation));
        scene.set_object_scale(pivot, state.scale);
    }
}

// Keeps the accumulated angle small so per-tick steps stay representable in f32
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
