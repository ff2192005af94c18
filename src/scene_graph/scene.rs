use glam::{Mat4, Quat, Vec3};
use id_arena::Arena;

use crate::scene_graph::object3d::{Object3D, ObjectId};
use crate::scene_graph::primitive::Primitive;
use crate::scene_graph::transform::Transform;

pub struct Scene {
    pub objects: Arena<Object3D>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Arena::new(),
        }
    }

    pub fn add_object(&mut self, object: Object3D) -> ObjectId {
        self.objects.alloc(object)
    }

    pub fn add_group(&mut self, name: impl Into<String>) -> ObjectId {
        self.add_object(Object3D::group(name))
    }

    /// Appends `child` to `parent`, detaching it from its previous parent first.
    pub fn add_child(&mut self, parent_id: ObjectId, child_id: ObjectId) {
        self.set_object_parent(child_id, Some(parent_id));
    }

    pub fn get_object(&self, id: ObjectId) -> Option<&Object3D> {
        self.objects.get(id)
    }

    pub fn get_object_mut(&mut self, id: ObjectId) -> Option<&mut Object3D> {
        self.objects.get_mut(id)
    }

    pub fn child_ids(&self, id: ObjectId) -> &[ObjectId] {
        self.objects
            .get(id)
            .map(|object| object.child_ids.as_slice())
            .unwrap_or(&[])
    }

    pub fn root_ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects
            .iter()
            .filter(|(_, object)| object.parent_id.is_none())
            .map(|(id, _)| id)
    }

    /// Number of primitives at or below `id`.
    pub fn count_primitives(&self, id: ObjectId) -> usize {
        let Some(object) = self.objects.get(id) else {
            return 0;
        };

        let own = usize::from(object.primitive.is_some());
        own + object
            .child_ids
            .iter()
            .map(|&child_id| self.count_primitives(child_id))
            .sum::<usize>()
    }

    /// Every primitive with the world matrix computed by the last `late_update`.
    pub fn drawables(&self) -> impl Iterator<Item = (Mat4, &Primitive)> + '_ {
        self.objects.iter().filter_map(|(_, object)| {
            object
                .primitive
                .as_ref()
                .map(|primitive| (object.transform.world_matrix(), primitive))
        })
    }

    fn update_transforms(&self) {
        for root_id in self.root_ids() {
            self.update_object_transform_recursive(root_id, Mat4::IDENTITY);
        }
    }

    fn update_object_transform_recursive(&self, object_id: ObjectId, parent_world_matrix: Mat4) {
        if let Some(object) = self.objects.get(object_id) {
            if object.transform.is_world_dirty() {
                let local_matrix = object.transform.local_matrix();
                object
                    .transform
                    .set_world_matrix(parent_world_matrix * local_matrix);
            }

            let world_matrix = object.transform.world_matrix();
            for &child_id in &object.child_ids {
                self.update_object_transform_recursive(child_id, world_matrix);
            }
        }
    }

    pub fn invalidate_object_hierarchy(&self, object_id: ObjectId) {
        if let Some(object) = self.objects.get(object_id) {
            object.transform.invalidate_world();

            for &child_id in &object.child_ids {
                self.invalidate_object_hierarchy(child_id);
            }
        }
    }

    pub fn set_object_parent(&mut self, child_id: ObjectId, new_parent_id: Option<ObjectId>) {
        if let Some(old_parent_id) = self.objects.get(child_id).and_then(|c| c.parent_id) {
            if let Some(old_parent) = self.objects.get_mut(old_parent_id) {
                old_parent.child_ids.retain(|&id| id != child_id);
            }
        }

        if let Some(child) = self.objects.get_mut(child_id) {
            child.parent_id = new_parent_id;

            if let Some(new_parent_id) = new_parent_id {
                if let Some(new_parent) = self.objects.get_mut(new_parent_id) {
                    new_parent.child_ids.push(child_id);
                }
            }
        }

        self.invalidate_object_hierarchy(child_id);
    }

    pub fn set_object_translation(&mut self, object_id: ObjectId, translation: Vec3) {
        if let Some(object) = self.objects.get_mut(object_id) {
            object.transform.set_translation(translation);
        }
        self.invalidate_object_hierarchy(object_id);
    }

    pub fn set_object_rotation(&mut self, object_id: ObjectId, rotation: Quat) {
        if let Some(object) = self.objects.get_mut(object_id) {
            object.transform.set_rotation(rotation);
        }
        self.invalidate_object_hierarchy(object_id);
    }

    pub fn set_object_scale(&mut self, object_id: ObjectId, scale: f32) {
        if let Some(object) = self.objects.get_mut(object_id) {
            object.transform.set_scale(scale);
        }
        self.invalidate_object_hierarchy(object_id);
    }

    pub fn get_object_transform(&self, object_id: ObjectId) -> Option<&Transform> {
        self.objects.get(object_id).map(|object| &object.transform)
    }

    /// World-space position of a node, as of the last `late_update`.
    pub fn world_position(&self, object_id: ObjectId) -> Option<Vec3> {
        self.get_object_transform(object_id)
            .map(|transform| transform.world_matrix().transform_point3(Vec3::ZERO))
    }

    pub fn late_update(&mut self) {
        self.update_transforms();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorRgb;

    fn sphere(name: &str) -> Object3D {
        Object3D::with_primitive(
            name,
            Primitive::Sphere {
                radius: 1.0,
                color: ColorRgb::BLACK,
            },
        )
    }

    #[test]
    fn test_reparenting_moves_child_between_groups() {
        let mut scene = Scene::new();
        let first = scene.add_group("first");
        let second = scene.add_group("second");
        let child = scene.add_object(sphere("child"));

        scene.add_child(first, child);
        assert_eq!(scene.child_ids(first), &[child]);

        scene.add_child(second, child);
        assert!(scene.child_ids(first).is_empty());
        assert_eq!(scene.child_ids(second), &[child]);
        assert_eq!(scene.get_object(child).unwrap().parent_id, Some(second));
    }

    #[test]
    fn test_world_matrix_propagates_through_hierarchy() {
        let mut scene = Scene::new();
        let root = scene.add_group("root");
        let child = scene.add_object(sphere("child").at(Vec3::new(1.0, 0.0, 0.0)));
        scene.add_child(root, child);

        scene.set_object_translation(root, Vec3::new(0.0, 2.0, 0.0));
        scene.set_object_scale(root, 3.0);
        scene.late_update();

        let position = scene.world_position(child).unwrap();
        assert!((position - Vec3::new(3.0, 2.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_parent_change_after_update_refreshes_children() {
        let mut scene = Scene::new();
        let root = scene.add_group("root");
        let child = scene.add_object(sphere("child").at(Vec3::X));
        scene.add_child(root, child);
        scene.late_update();

        scene.set_object_rotation(root, Quat::from_rotation_y(std::f32::consts::PI));
        scene.late_update();

        let position = scene.world_position(child).unwrap();
        assert!((position - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_count_primitives_and_roots() {
        let mut scene = Scene::new();
        let root = scene.add_group("root");
        let inner = scene.add_group("inner");
        scene.add_child(root, inner);
        for name in ["a", "b"] {
            let id = scene.add_object(sphere(name));
            scene.add_child(inner, id);
        }

        assert_eq!(scene.count_primitives(root), 2);
        assert_eq!(scene.root_ids().collect::<Vec<_>>(), vec![root]);
        assert_eq!(scene.drawables().count(), 2);
    }
}
