pub mod object3d;
pub mod primitive;
pub mod scene;
pub mod transform;

pub use object3d::{Object3D, ObjectId};
pub use primitive::Primitive;
pub use scene::Scene;
pub use transform::Transform;
