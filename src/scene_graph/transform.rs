use glam::{Mat4, Quat, Vec3};
use std::cell::Cell;

/// Local translation/rotation/uniform scale of a node plus its cached matrices.
///
/// Matrices are recomputed lazily. Setters only flag them dirty; the scene
/// pushes fresh world matrices down the hierarchy once per frame.
#[derive(Debug, Clone)]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
    scale: f32,

    local_matrix: Cell<Mat4>,
    world_matrix: Cell<Mat4>,
    local_dirty: Cell<bool>,
    world_dirty: Cell<bool>,
}

impl Transform {
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
            scale: 1.0,
            local_matrix: Cell::new(Mat4::IDENTITY),
            world_matrix: Cell::new(Mat4::IDENTITY),
            local_dirty: Cell::new(true),
            world_dirty: Cell::new(true),
        }
    }

    pub fn local_matrix(&self) -> Mat4 {
        if self.local_dirty.get() {
            self.local_matrix
                .set(Mat4::from_scale_rotation_translation(
                    Vec3::splat(self.scale),
                    self.rotation,
                    self.translation,
                ));
            self.local_dirty.set(false);
            self.world_dirty.set(true);
        }

        self.local_matrix.get()
    }

    /// Last world matrix pushed by the scene. Stale until the next `late_update`.
    pub fn world_matrix(&self) -> Mat4 {
        self.world_matrix.get()
    }

    pub fn set_world_matrix(&self, world_matrix: Mat4) {
        self.world_matrix.set(world_matrix);
        self.world_dirty.set(false);
    }

    fn invalidate_local(&self) {
        self.local_dirty.set(true);
        self.world_dirty.set(true);
    }

    pub fn invalidate_world(&self) {
        self.world_dirty.set(true);
    }

    pub fn is_world_dirty(&self) -> bool {
        self.world_dirty.get()
    }

    pub fn set_translation(&mut self, translation: Vec3) {
        self.translation = translation;
        self.invalidate_local();
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
        self.invalidate_local();
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
        self.invalidate_local();
    }

    pub fn set_transform(&mut self, translation: Vec3, rotation: Quat, scale: f32) {
        self.translation = translation;
        self.rotation = rotation;
        self.scale = scale;
        self.invalidate_local();
    }

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_translation(Vec3::ZERO)
    }
}
