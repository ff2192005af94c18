use glam::{Quat, Vec3};
use rand::Rng;

use crate::color::{map_coordinate_to_color, ColorRgb};
use crate::config::AxesConfig;
use crate::math::Range;
use crate::scene_graph::{Object3D, ObjectId, Primitive, Scene};

/// Axis directions paired with their fixed colors: x green, y blue, z red.
pub const AXES: [(&str, Vec3, ColorRgb); 3] = [
    ("x", Vec3::X, ColorRgb::GREEN),
    ("y", Vec3::Y, ColorRgb::BLUE),
    ("z", Vec3::Z, ColorRgb::RED),
];

/// Builds the three axis lines, plus one arrowhead cone per axis when enabled.
///
/// Lines come first in the returned group, cones after them.
pub fn build_axes(scene: &mut Scene, config: &AxesConfig) -> ObjectId {
    let group = scene.add_group("Axes");

    for (name, direction, color) in AXES {
        let line = scene.add_object(Object3D::with_primitive(
            format!("{name} axis"),
            Primitive::Line {
                start: Vec3::ZERO,
                end: direction * config.length,
                color,
            },
        ));
        scene.add_child(group, line);
    }

    if config.arrowheads {
        for (name, direction, color) in AXES {
            let mut cone = Object3D::with_primitive(
                format!("{name} arrowhead"),
                Primitive::Cone {
                    radius: config.arrow_radius,
                    height: config.arrow_height,
                    color,
                },
            );
            // Base of the cone sits on the end of the line
            cone.transform.set_transform(
                direction * (config.length + config.arrow_height * 0.5),
                Quat::from_rotation_arc(Vec3::Y, direction),
                1.0,
            );
            let cone = scene.add_object(cone);
            scene.add_child(group, cone);
        }
    }

    log::debug!(
        "Built axes of length {} ({} children)",
        config.length,
        scene.child_ids(group).len()
    );

    group
}

pub fn plot_point(scene: &mut Scene, position: Vec3, radius: f32, color: ColorRgb) -> ObjectId {
    scene.add_object(
        Object3D::with_primitive("Point", Primitive::Sphere { radius, color }).at(position),
    )
}

/// Plots spheres at the given positions. Without a fixed `color` each sphere is
/// colored from its own coordinates within `range`.
pub fn build_points(
    scene: &mut Scene,
    positions: impl IntoIterator<Item = Vec3>,
    range: &Range,
    color: Option<ColorRgb>,
    radius: f32,
) -> ObjectId {
    let group = scene.add_group("Points");

    for position in positions {
        let color = color.unwrap_or_else(|| map_coordinate_to_color(position, range));
        let point = plot_point(scene, position, radius, color);
        scene.add_child(group, point);
    }

    group
}

/// Plots `count` spheres with every coordinate drawn uniformly from `range`.
pub fn build_random_points(
    scene: &mut Scene,
    rng: &mut impl Rng,
    count: usize,
    range: &Range,
    color: Option<ColorRgb>,
    radius: f32,
) -> ObjectId {
    let positions: Vec<Vec3> = (0..count)
        .map(|_| {
            Vec3::new(
                random_coordinate(rng, range),
                random_coordinate(rng, range),
                random_coordinate(rng, range),
            )
        })
        .collect();

    let group = build_points(scene, positions, range, color, radius);
    if let Some(object) = scene.get_object_mut(group) {
        object.name = "Random points".to_string();
    }

    log::debug!("Plotted {count} random points in [{}, {}]", range.min(), range.max());

    group
}

fn random_coordinate(rng: &mut impl Rng, range: &Range) -> f32 {
    range.min() + rng.gen::<f32>() * range.span()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn plot_range() -> Range {
        Range::new(0.0, 10.0).unwrap()
    }

    #[test]
    fn test_axes_with_arrowheads_have_six_children() {
        let mut scene = Scene::new();
        let axes = build_axes(
            &mut scene,
            &AxesConfig {
                length: 10.0,
                arrowheads: true,
                ..Default::default()
            },
        );

        let children = scene.child_ids(axes);
        assert_eq!(children.len(), 6);

        let cones = children
            .iter()
            .filter(|&&id| {
                matches!(
                    scene.get_object(id).unwrap().primitive,
                    Some(Primitive::Cone { .. })
                )
            })
            .count();
        assert_eq!(cones, 3);
    }

    #[test]
    fn test_axes_without_arrowheads_are_three_colored_lines() {
        let mut scene = Scene::new();
        let axes = build_axes(
            &mut scene,
            &AxesConfig {
                length: 6.0,
                arrowheads: false,
                ..Default::default()
            },
        );

        let lines: Vec<_> = scene
            .get_object(axes)
            .unwrap()
            .children(&scene)
            .map(|child| child.primitive.clone().unwrap())
            .collect();

        assert_eq!(
            lines,
            vec![
                Primitive::Line {
                    start: Vec3::ZERO,
                    end: Vec3::new(6.0, 0.0, 0.0),
                    color: ColorRgb::GREEN,
                },
                Primitive::Line {
                    start: Vec3::ZERO,
                    end: Vec3::new(0.0, 6.0, 0.0),
                    color: ColorRgb::BLUE,
                },
                Primitive::Line {
                    start: Vec3::ZERO,
                    end: Vec3::new(0.0, 0.0, 6.0),
                    color: ColorRgb::RED,
                },
            ]
        );
    }

    #[test]
    fn test_arrowheads_point_along_their_axis() {
        let mut scene = Scene::new();
        let config = AxesConfig::default();
        let axes = build_axes(&mut scene, &config);
        scene.late_update();

        for (index, (_, direction, _)) in AXES.iter().enumerate() {
            let cone = scene.child_ids(axes)[3 + index];
            let matrix = scene.get_object_transform(cone).unwrap().world_matrix();
            let apex = matrix.transform_point3(Vec3::Y * config.arrow_height * 0.5);
            let expected = *direction * (config.length + config.arrow_height);
            assert!((apex - expected).length() < 1e-4);
        }
    }

    #[test]
    fn test_zero_points_gives_empty_group() {
        let mut scene = Scene::new();
        let mut rng = StdRng::seed_from_u64(7);
        let group = build_random_points(&mut scene, &mut rng, 0, &plot_range(), None, 0.3);
        assert!(scene.child_ids(group).is_empty());
    }

    #[test]
    fn test_random_points_stay_within_range() {
        let mut scene = Scene::new();
        let mut rng = StdRng::seed_from_u64(42);
        let range = Range::new(-3.0, 4.0).unwrap();
        let group = build_random_points(&mut scene, &mut rng, 50, &range, None, 0.2);

        let children = scene.child_ids(group).to_vec();
        assert_eq!(children.len(), 50);

        for id in children {
            let object = scene.get_object(id).unwrap();
            assert!(range.contains_point(object.transform.translation()));
            assert!(matches!(
                object.primitive,
                Some(Primitive::Sphere { radius, .. }) if radius == 0.2
            ));
        }
    }

    #[test]
    fn test_points_without_color_use_coordinate_mapping() {
        let mut scene = Scene::new();
        let mut rng = StdRng::seed_from_u64(1);
        let range = plot_range();
        let group = build_random_points(&mut scene, &mut rng, 10, &range, None, 0.3);

        for child in scene.get_object(group).unwrap().children(&scene) {
            let expected = map_coordinate_to_color(child.transform.translation(), &range);
            assert_eq!(child.primitive.as_ref().unwrap().color(), expected);
        }
    }

    #[test]
    fn test_fixed_color_applies_to_every_point() {
        let mut scene = Scene::new();
        let positions = [Vec3::ZERO, Vec3::splat(5.0), Vec3::splat(10.0)];
        let color = ColorRgb::from_hex(0x336699);
        let group = build_points(&mut scene, positions, &plot_range(), Some(color), 0.3);

        let colors: Vec<_> = scene
            .get_object(group)
            .unwrap()
            .children(&scene)
            .map(|child| child.primitive.as_ref().unwrap().color())
            .collect();
        assert_eq!(colors, vec![color; 3]);
    }

    #[test]
    fn test_degenerate_range_places_points_on_the_bound() {
        let mut scene = Scene::new();
        let mut rng = StdRng::seed_from_u64(3);
        let range = Range::new(2.0, 2.0).unwrap();
        let group = build_random_points(&mut scene, &mut rng, 4, &range, None, 0.3);

        for child in scene.get_object(group).unwrap().children(&scene) {
            assert_eq!(child.transform.translation(), Vec3::splat(2.0));
            assert_eq!(child.primitive.as_ref().unwrap().color(), ColorRgb::BLACK);
        }
    }
}
