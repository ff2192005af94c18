use glam::Vec3;
use id_arena::Id;

use crate::scene_graph::primitive::Primitive;
use crate::scene_graph::scene::Scene;
use crate::scene_graph::transform::Transform;

pub type ObjectId = Id<Object3D>;

/// A node of the scene graph. Nodes without a primitive act as groups.
#[derive(Debug, Clone)]
pub struct Object3D {
    pub name: String,
    pub transform: Transform,
    pub primitive: Option<Primitive>,
    pub parent_id: Option<ObjectId>,
    pub child_ids: Vec<ObjectId>,
}

impl Object3D {
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_primitive(name: impl Into<String>, primitive: Primitive) -> Self {
        Self {
            name: name.into(),
            primitive: Some(primitive),
            ..Default::default()
        }
    }

    pub fn at(mut self, translation: Vec3) -> Self {
        self.transform.set_translation(translation);
        self
    }

    pub fn children<'a, 'b>(&'a self, scene: &'b Scene) -> impl Iterator<Item = &'b Object3D> + 'b
    where
        'a: 'b,
    {
        self.child_ids
            .iter()
            .filter_map(move |id| scene.get_object(*id))
    }
}

impl Default for Object3D {
    fn default() -> Self {
        Self {
            name: String::new(),
            transform: Transform::from_translation(Vec3::ZERO),
            primitive: None,
            parent_id: None,
            child_ids: Vec::new(),
        }
    }
}
