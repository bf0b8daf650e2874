// turns point sequences into renderable meshes
// generators hand over f64 points, everything here is f32 bevy math

use std::f32::consts::TAU;

use bevy::math::cubic_splines::{CubicCardinalSpline, CubicCurve, CubicGenerator};
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use crate::error::MeshError;
use super::vector;

impl From<vector::Vec3> for Vec3 {
    fn from(v: vector::Vec3) -> Self {
        let [x, y, z] = v.to_array();
        Vec3::new(x as f32, y as f32, z as f32)
    }
}

// below this a tangent change counts as no rotation
const FRAME_EPSILON: f32 = 1e-6;

/// Catmull-Rom spline through every point, in order.
/// # Returns `MeshError` for fewer than 2 points or any non-finite point
pub fn catmull_rom(points: &[vector::Vec3]) -> Result<CubicCurve<Vec3>, MeshError> {
    if points.len() < 2 {
        return Err(MeshError::TooFewPoints { got: points.len() });
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(MeshError::NonFinitePoint { index });
    }

    let control_points: Vec<Vec3> = points.iter().map(|&p| p.into()).collect();
    CubicCardinalSpline::new_catmull_rom(control_points)
        .to_curve()
        .map_err(|_| MeshError::TooFewPoints { got: points.len() })
}

/// Position on the spline with `t` normalized to [0, 1] over the whole curve.
pub fn curve_position(curve: &CubicCurve<Vec3>, t: f32) -> Vec3 {
    let segment_count = curve.segments().len() as f32;
    curve.position(t.clamp(0.0, 1.0) * segment_count)
}

fn new_mesh(topology: PrimitiveTopology) -> Mesh {
    Mesh::new(
        topology,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    )
}

// normal mapped straight into rgb, same look as a normal material
fn normal_color(normal: Vec3) -> [f32; 4] {
    let c = normal * 0.5 + Vec3::splat(0.5);
    [c.x, c.y, c.z, 1.0]
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    tangent: Vec3,
    normal: Vec3,
    binormal: Vec3,
}

// any unit vector perpendicular to the tangent, built from the least aligned axis
fn initial_normal(tangent: Vec3) -> Vec3 {
    let abs = tangent.abs();
    let axis = if abs.x <= abs.y && abs.x <= abs.z {
        Vec3::X
    } else if abs.y <= abs.z {
        Vec3::Y
    } else {
        Vec3::Z
    };
    tangent.cross(axis).cross(tangent).normalize_or_zero()
}

// rotation minimizing frames via parallel transport
// closed curves get the seam twist spread evenly over all frames
fn transport_frames(samples: &[Vec3], closed: bool) -> Vec<Frame> {
    let count = samples.len();
    let tangents: Vec<Vec3> = (0..count)
        .map(|i| {
            let (prev, next) = if closed {
                // first and last sample coincide on a closed curve, skip the duplicate
                let prev = if i == 0 { count - 2 } else { i - 1 };
                let next = if i == count - 1 { 1 } else { i + 1 };
                (prev, next)
            } else {
                (i.saturating_sub(1), (i + 1).min(count - 1))
            };
            (samples[next] - samples[prev]).normalize_or(Vec3::Z)
        })
        .collect();

    let mut frames = Vec::with_capacity(count);
    let first_normal = initial_normal(tangents[0]);
    frames.push(Frame {
        tangent: tangents[0],
        normal: first_normal,
        binormal: tangents[0].cross(first_normal),
    });

    for i in 1..count {
        let prev = frames[i - 1];
        let tangent = tangents[i];
        let axis = prev.tangent.cross(tangent);

        let normal = if axis.length() > FRAME_EPSILON {
            let angle = prev.tangent.dot(tangent).clamp(-1.0, 1.0).acos();
            Quat::from_axis_angle(axis.normalize(), angle) * prev.normal
        } else {
            prev.normal
        };

        frames.push(Frame {
            tangent,
            normal,
            binormal: tangent.cross(normal),
        });
    }

    if closed && count > 1 {
        let first = frames[0].normal;
        let last = frames[count - 1].normal;
        let mut theta = first.dot(last).clamp(-1.0, 1.0).acos() / (count - 1) as f32;
        if frames[0].tangent.dot(first.cross(last)) > 0.0 {
            theta = -theta;
        }

        for (i, frame) in frames.iter_mut().enumerate().skip(1) {
            frame.normal = Quat::from_axis_angle(frame.tangent, theta * i as f32) * frame.normal;
            frame.binormal = frame.tangent.cross(frame.normal);
        }
    }

    frames
}

/// Tube around a parametric curve, `sample` maps [0, 1] onto the curve.
///
/// Open tubes get `segments + 1` rings, closed tubes `segments` rings with the last
/// ring stitched back to the first. Vertex colors encode the surface normal.
pub fn tube_mesh(
    sample: impl Fn(f32) -> Vec3,
    segments: usize,
    radius: f32,
    radial_segments: usize,
    closed: bool,
) -> Mesh {
    let segments = segments.max(1);
    let radial_segments = radial_segments.max(3);

    let samples: Vec<Vec3> = (0..=segments)
        .map(|i| sample(i as f32 / segments as f32))
        .collect();
    let frames = transport_frames(&samples, closed);

    let ring_count = if closed { segments } else { segments + 1 };
    let mut positions = Vec::with_capacity(ring_count * radial_segments);
    let mut normals = Vec::with_capacity(ring_count * radial_segments);
    let mut colors = Vec::with_capacity(ring_count * radial_segments);
    let mut uvs = Vec::with_capacity(ring_count * radial_segments);

    for ring in 0..ring_count {
        let center = samples[ring];
        let frame = frames[ring];

        for j in 0..radial_segments {
            let angle = j as f32 / radial_segments as f32 * TAU;
            let dir = frame.normal * angle.cos() + frame.binormal * angle.sin();

            positions.push((center + dir * radius).to_array());
            normals.push(dir.to_array());
            colors.push(normal_color(dir));
            uvs.push([ring as f32 / segments as f32, j as f32 / radial_segments as f32]);
        }
    }

    // quads between neighbouring rings, wound so faces point outwards
    let edge_count = if closed { ring_count } else { ring_count - 1 };
    let mut indices: Vec<u32> = Vec::with_capacity(edge_count * radial_segments * 6);
    for ring in 0..edge_count {
        let next_ring = (ring + 1) % ring_count;
        for j in 0..radial_segments {
            let next_j = (j + 1) % radial_segments;

            let i0 = (ring * radial_segments + j) as u32;
            let i1 = (ring * radial_segments + next_j) as u32;
            let i2 = (next_ring * radial_segments + next_j) as u32;
            let i3 = (next_ring * radial_segments + j) as u32;

            indices.extend([i0, i1, i3]);
            indices.extend([i1, i2, i3]);
        }
    }

    let mut mesh = new_mesh(PrimitiveTopology::TriangleList);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));

    mesh
}

/// Polyline through `samples + 1` evenly spaced curve parameters.
pub fn line_mesh(sample: impl Fn(f32) -> Vec3, samples: usize) -> Mesh {
    let samples = samples.max(1);
    let positions: Vec<[f32; 3]> = (0..=samples)
        .map(|i| sample(i as f32 / samples as f32).to_array())
        .collect();

    let mut mesh = new_mesh(PrimitiveTopology::LineStrip);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh
}

// octahedron corners, one per axis direction
const OCTAHEDRON: [Vec3; 6] = [
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::Z,
    Vec3::NEG_Z,
];

// counter-clockwise seen from outside
const OCTAHEDRON_FACES: [[u32; 3]; 8] = [
    [0, 2, 4],
    [2, 1, 4],
    [1, 3, 4],
    [3, 0, 4],
    [2, 0, 5],
    [1, 2, 5],
    [3, 1, 5],
    [0, 3, 5],
];

/// One small octahedron of width `size` per point. An empty input gives an empty mesh.
pub fn point_cloud_mesh(points: &[vector::Vec3], size: f32) -> Mesh {
    let half = size * 0.5;
    let mut positions = Vec::with_capacity(points.len() * OCTAHEDRON.len());
    let mut normals = Vec::with_capacity(points.len() * OCTAHEDRON.len());
    let mut indices = Vec::with_capacity(points.len() * OCTAHEDRON_FACES.len() * 3);

    for (i, &point) in points.iter().enumerate() {
        let center: Vec3 = point.into();
        let base = (i * OCTAHEDRON.len()) as u32;

        for corner in OCTAHEDRON {
            positions.push((center + corner * half).to_array());
            normals.push(corner.to_array());
        }
        for face in OCTAHEDRON_FACES {
            indices.extend(face.map(|v| base + v));
        }
    }

    let mut mesh = new_mesh(PrimitiveTopology::TriangleList);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_indices(Indices::U32(indices));

    mesh
}
