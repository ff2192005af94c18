use std::f32::consts::{PI, TAU};
use std::mem::offset_of;

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::color::ColorRgb;
use crate::scene_graph::{Primitive, Scene};

pub const SPHERE_SEGMENTS: usize = 16;
pub const SPHERE_RINGS: usize = 12;
pub const CONE_SEGMENTS: usize = 16;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub color: Vec3,
}

impl Vertex {
    fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }
}

pub const VERTEX_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &[
        wgpu::VertexAttribute {
            offset: offset_of!(Vertex, position) as wgpu::BufferAddress,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: offset_of!(Vertex, color) as wgpu::BufferAddress,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32x3,
        },
    ],
};

/// World-space geometry of a whole scene, rebuilt every frame.
#[derive(Debug, Default)]
pub struct SceneMesh {
    /// Pairs of vertices, one pair per segment.
    pub lines: Vec<Vertex>,
    /// Unindexed triangles.
    pub triangles: Vec<Vertex>,
}

impl SceneMesh {
    pub fn from_scene(scene: &Scene) -> Self {
        let mut mesh = SceneMesh::default();

        for (world_matrix, primitive) in scene.drawables() {
            mesh.push_primitive(&world_matrix, primitive);
        }

        mesh
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.triangles.is_empty()
    }

    fn push_primitive(&mut self, matrix: &Mat4, primitive: &Primitive) {
        let color = linear_color(primitive.color());

        match *primitive {
            Primitive::Line { start, end, .. } => {
                self.lines.extend([
                    Vertex::new(matrix.transform_point3(start), color),
                    Vertex::new(matrix.transform_point3(end), color),
                ]);
            }
            Primitive::Sphere { radius, .. } => self.push_sphere(matrix, radius, color),
            Primitive::Cone { radius, height, .. } => {
                self.push_cone(matrix, radius, height, color)
            }
        }
    }

    fn push_triangle(&mut self, matrix: &Mat4, corners: [Vec3; 3], color: Vec3) {
        self.triangles.extend(
            corners.map(|corner| Vertex::new(matrix.transform_point3(corner), color)),
        );
    }

    fn push_sphere(&mut self, matrix: &Mat4, radius: f32, color: Vec3) {
        let point = |ring: usize, segment: usize| {
            let theta = PI * ring as f32 / SPHERE_RINGS as f32;
            let phi = TAU * segment as f32 / SPHERE_SEGMENTS as f32;
            Vec3::new(
                theta.sin() * phi.cos(),
                theta.cos(),
                theta.sin() * phi.sin(),
            ) * radius
        };

        for ring in 0..SPHERE_RINGS {
            for segment in 0..SPHERE_SEGMENTS {
                let a = point(ring, segment);
                let b = point(ring + 1, segment);
                let c = point(ring + 1, segment + 1);
                let d = point(ring, segment + 1);

                self.push_triangle(matrix, [a, b, c], color);
                self.push_triangle(matrix, [a, c, d], color);
            }
        }
    }

    fn push_cone(&mut self, matrix: &Mat4, radius: f32, height: f32, color: Vec3) {
        let apex = Vec3::Y * height * 0.5;
        let base_center = -apex;
        let rim = |segment: usize| {
            let phi = TAU * segment as f32 / CONE_SEGMENTS as f32;
            base_center + Vec3::new(phi.cos(), 0.0, phi.sin()) * radius
        };

        for segment in 0..CONE_SEGMENTS {
            let current = rim(segment);
            let next = rim(segment + 1);

            self.push_triangle(matrix, [apex, current, next], color);
            self.push_triangle(matrix, [base_center, next, current], color);
        }
    }
}

fn linear_color(color: ColorRgb) -> Vec3 {
    Vec3::from_array(color.to_linear())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene_graph::Object3D;

    fn scene_with(primitive: Primitive, translation: Vec3) -> Scene {
        let mut scene = Scene::new();
        scene.add_object(Object3D::with_primitive("test", primitive).at(translation));
        scene.late_update();
        scene
    }

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
    }

    #[test]
    fn test_line_is_transformed_into_world_space() {
        let scene = scene_with(
            Primitive::Line {
                start: Vec3::ZERO,
                end: Vec3::X,
                color: ColorRgb::GREEN,
            },
            Vec3::new(0.0, 0.0, -5.0),
        );

        let mesh = SceneMesh::from_scene(&scene);
        assert!(mesh.triangles.is_empty());
        assert_eq!(mesh.lines.len(), 2);
        assert_eq!(mesh.lines[0].position, Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(mesh.lines[1].position, Vec3::new(1.0, 0.0, -5.0));
        assert!((mesh.lines[0].color - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_sphere_vertices_lie_on_its_surface() {
        let center = Vec3::new(2.0, 3.0, 4.0);
        let scene = scene_with(
            Primitive::Sphere {
                radius: 0.5,
                color: ColorRgb::BLACK,
            },
            center,
        );

        let mesh = SceneMesh::from_scene(&scene);
        assert_eq!(mesh.triangles.len(), SPHERE_RINGS * SPHERE_SEGMENTS * 6);
        for vertex in &mesh.triangles {
            assert!(((vertex.position - center).length() - 0.5).abs() < 1e-4);
        }
    }

    #[test]
    fn test_cone_spans_its_height() {
        let scene = scene_with(
            Primitive::Cone {
                radius: 0.2,
                height: 0.6,
                color: ColorRgb::RED,
            },
            Vec3::ZERO,
        );

        let mesh = SceneMesh::from_scene(&scene);
        assert_eq!(mesh.triangles.len(), CONE_SEGMENTS * 6);

        let (lowest, highest) = mesh
            .triangles
            .iter()
            .fold((f32::MAX, f32::MIN), |(low, high), vertex| {
                (low.min(vertex.position.y), high.max(vertex.position.y))
            });
        assert!((lowest + 0.3).abs() < 1e-5);
        assert!((highest - 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_empty_scene_gives_empty_mesh() {
        assert!(SceneMesh::from_scene(&Scene::new()).is_empty());
    }
}
