use approx::assert_abs_diff_eq;
use bevy::prelude::*;
use bevy::render::mesh::{PrimitiveTopology, VertexAttributeValues};

use crate::config::*;
use crate::error::{AppError, MeshError};
use crate::systems::mesh::paths::{self, mesh_gen::*};
use crate::systems::mesh::shape::build_shape_mesh;
use crate::systems::mesh::{RenderStyle, ShapeKind, ShapeParams};

fn index_count(mesh: &Mesh) -> usize {
    mesh.indices().map(|i| i.len()).unwrap_or(0)
}

fn positions(mesh: &Mesh) -> Vec<Vec3> {
    mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        .and_then(|a| a.as_float3())
        .expect("mesh has positions")
        .iter()
        .map(|&p| Vec3::from_array(p))
        .collect()
}

fn normals(mesh: &Mesh) -> Vec<Vec3> {
    mesh.attribute(Mesh::ATTRIBUTE_NORMAL)
        .and_then(|a| a.as_float3())
        .expect("mesh has normals")
        .iter()
        .map(|&n| Vec3::from_array(n))
        .collect()
}

fn straight_line(t: f32) -> Vec3 {
    Vec3::new(0.0, 0.0, 4.0 * t)
}

// tubes

#[test]
fn open_tube_has_one_ring_per_sample() {
    let mesh = tube_mesh(straight_line, 10, 0.5, 8, false);

    assert_eq!(mesh.primitive_topology(), PrimitiveTopology::TriangleList);
    assert_eq!(mesh.count_vertices(), 11 * 8);
    assert_eq!(index_count(&mesh), 10 * 8 * 6);
}

#[test]
fn closed_tube_stitches_the_seam() {
    let circle = |t: f32| Vec3::new((t * std::f32::consts::TAU).cos(), (t * std::f32::consts::TAU).sin(), 0.0);
    let mesh = tube_mesh(circle, 32, 0.1, 6, true);

    assert_eq!(mesh.count_vertices(), 32 * 6);
    assert_eq!(index_count(&mesh), 32 * 6 * 6);

    // every index points at an existing vertex
    let vertex_count = mesh.count_vertices();
    assert!(mesh.indices().unwrap().iter().all(|i| i < vertex_count));
}

#[test]
fn straight_tube_keeps_its_radius() {
    let mesh = tube_mesh(straight_line, 20, 0.5, 8, false);

    for p in positions(&mesh) {
        assert_abs_diff_eq!(p.truncate().length(), 0.5, epsilon = 1e-5);
        assert!((0.0..=4.0 + 1e-5).contains(&p.z));
    }
    // normals point away from the axis
    for n in normals(&mesh) {
        assert_abs_diff_eq!(n.z, 0.0, epsilon = 1e-5);
    }
}

#[test]
fn tube_normals_are_unit_and_colors_in_range() {
    let mesh = build_shape_mesh(
        &ShapeParams { kind: ShapeKind::Lissajous, ..default() },
        0,
    )
    .unwrap();

    for n in normals(&mesh) {
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-4);
    }

    let Some(VertexAttributeValues::Float32x4(colors)) = mesh.attribute(Mesh::ATTRIBUTE_COLOR) else {
        panic!("tube mesh has no rgba colors");
    };
    assert_eq!(colors.len(), mesh.count_vertices());
    for c in colors {
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)), "color {:?}", c);
        assert_eq!(c[3], 1.0);
    }
}

// splines

#[test]
fn spline_needs_two_finite_points() {
    let one = [paths::Vec3::new(1.0, 2.0, 3.0)];
    assert_eq!(catmull_rom(&one).err(), Some(MeshError::TooFewPoints { got: 1 }));
    assert_eq!(catmull_rom(&[]).err(), Some(MeshError::TooFewPoints { got: 0 }));

    let broken = [
        paths::Vec3::ZERO,
        paths::Vec3::new(1.0, 0.0, 0.0),
        paths::Vec3::new(f64::NAN, 0.0, 0.0),
    ];
    assert_eq!(catmull_rom(&broken).err(), Some(MeshError::NonFinitePoint { index: 2 }));
}

#[test]
fn spline_runs_from_first_to_last_point() {
    let points = [
        paths::Vec3::new(0.0, 0.0, 0.0),
        paths::Vec3::new(1.0, 1.0, 0.0),
        paths::Vec3::new(2.0, 0.0, 1.0),
        paths::Vec3::new(3.0, -1.0, 0.0),
    ];
    let curve = catmull_rom(&points).unwrap();

    assert_abs_diff_eq!(curve_position(&curve, 0.0).distance(Vec3::ZERO), 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(
        curve_position(&curve, 1.0).distance(Vec3::new(3.0, -1.0, 0.0)),
        0.0,
        epsilon = 1e-5
    );
}

// lines and points

#[test]
fn line_mesh_is_a_strip_of_samples() {
    let mesh = line_mesh(straight_line, 50);

    assert_eq!(mesh.primitive_topology(), PrimitiveTopology::LineStrip);
    assert_eq!(mesh.count_vertices(), 51);
    let positions = positions(&mesh);
    assert_eq!(positions[0], Vec3::ZERO);
    assert_abs_diff_eq!(positions[50].z, 4.0, epsilon = 1e-6);
}

#[test]
fn point_cloud_has_an_octahedron_per_point() {
    let points = [
        paths::Vec3::new(0.0, 0.0, 0.0),
        paths::Vec3::new(5.0, 0.0, 0.0),
        paths::Vec3::new(0.0, -2.0, 1.0),
    ];
    let mesh = point_cloud_mesh(&points, 0.2);

    assert_eq!(mesh.count_vertices(), 18);
    assert_eq!(index_count(&mesh), 3 * 24);

    // corners sit half the size away from their point
    let positions = positions(&mesh);
    for (i, point) in points.iter().enumerate() {
        let center: Vec3 = (*point).into();
        for corner in &positions[i * 6..(i + 1) * 6] {
            assert_abs_diff_eq!(corner.distance(center), 0.1, epsilon = 1e-6);
        }
    }
}

#[test]
fn empty_point_cloud_is_an_empty_mesh() {
    let mesh = point_cloud_mesh(&[], POINT_SIZE);
    assert_eq!(mesh.count_vertices(), 0);
    assert_eq!(index_count(&mesh), 0);
}

// whole shapes

#[test]
fn every_shape_and_style_builds() {
    for kind in ShapeKind::ALL {
        for style in RenderStyle::ALL {
            let params = ShapeParams { kind, style, ..default() };
            let mesh = build_shape_mesh(&params, 17);
            assert!(mesh.is_ok(), "{} / {}: {:?}", kind.label(), style.label(), mesh.err());
        }
    }
}

#[test]
fn lissajous_is_a_closed_tube() {
    let mesh = build_shape_mesh(&ShapeParams { kind: ShapeKind::Lissajous, ..default() }, 0).unwrap();
    assert_eq!(mesh.count_vertices(), LISSAJOUS_SEGMENTS * TUBE_RADIAL_SEGMENTS);
}

#[test]
fn path_tube_follows_the_configured_resolution() {
    let params = ShapeParams { kind: ShapeKind::SpherePath, style: RenderStyle::Tube, ..default() };
    let mesh = build_shape_mesh(&params, 3).unwrap();
    assert_eq!(mesh.count_vertices(), (PATH_TUBE_SEGMENTS + 1) * TUBE_RADIAL_SEGMENTS);
}

#[test]
fn unreachable_surface_cannot_be_drawn_as_a_tube() {
    let mut params = ShapeParams { kind: ShapeKind::MetaballPoints, style: RenderStyle::Tube, ..default() };
    params.metaball_points.show_traces = false;
    params.metaball_points.threshold = 1e9;

    match build_shape_mesh(&params, 1) {
        Err(AppError::Mesh(MeshError::TooFewPoints { got: 0 })) => {}
        other => panic!("expected a too few points error, got {:?}", other.map(|m| m.count_vertices())),
    }

    // the same empty result is fine as a point cloud
    params.style = RenderStyle::Points;
    assert_eq!(build_shape_mesh(&params, 1).unwrap().count_vertices(), 0);
}

#[test]
fn invalid_parameters_surface_as_path_errors() {
    let mut params = ShapeParams { kind: ShapeKind::SpherePath, ..default() };
    params.sphere.dt = 0.0;
    assert!(matches!(build_shape_mesh(&params, 1), Err(AppError::Path(_))));
}

#[test]
fn same_seed_builds_the_same_mesh() {
    let params = ShapeParams { kind: ShapeKind::MetaballPath, style: RenderStyle::Line, ..default() };
    let a = positions(&build_shape_mesh(&params, 5).unwrap());
    let b = positions(&build_shape_mesh(&params, 5).unwrap());
    let c = positions(&build_shape_mesh(&params, 6).unwrap());

    assert_eq!(a, b);
    assert_ne!(a, c);
}
