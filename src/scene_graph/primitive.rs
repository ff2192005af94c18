use glam::Vec3;

use crate::color::ColorRgb;

/// Drawable payload of a scene node, expressed in the node's local space.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        start: Vec3,
        end: Vec3,
        color: ColorRgb,
    },
    Sphere {
        radius: f32,
        color: ColorRgb,
    },
    /// Cone centered on the local origin, apex pointing along local +Y.
    Cone {
        radius: f32,
        height: f32,
        color: ColorRgb,
    },
}

impl Primitive {
    pub fn color(&self) -> ColorRgb {
        match self {
            Primitive::Line { color, .. }
            | Primitive::Sphere { color, .. }
            | Primitive::Cone { color, .. } => *color,
        }
    }
}
