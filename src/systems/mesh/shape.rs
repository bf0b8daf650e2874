use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::*;
use crate::error::Result;
use crate::systems::animation::{AnimationSettings, FrameClock};
use super::paths::{self, lissajous::lissajous_point, mesh_gen};
use super::*;

/// Generates the points for the current shape and turns them into a mesh.
/// Every call builds a fresh rng from `seed`, so the same seed gives the same mesh.
pub fn build_shape_mesh(params: &ShapeParams, seed: u64) -> Result<Mesh> {
    let mut rng = StdRng::seed_from_u64(seed);

    let points = match params.kind {
        ShapeKind::Lissajous => {
            return Ok(mesh_gen::tube_mesh(
                |t| lissajous_point(t as f64).into(),
                LISSAJOUS_SEGMENTS,
                LISSAJOUS_TUBE_RADIUS,
                TUBE_RADIAL_SEGMENTS,
                true,
            ));
        }
        ShapeKind::SpherePath => paths::generate_sphere_path(&params.sphere, &mut rng)?,
        ShapeKind::MetaballPath => paths::generate_metaball_path(&params.metaball_path, &mut rng)?,
        ShapeKind::MetaballPoints => paths::generate_metaball_points(&params.metaball_points, &mut rng)?,
    };

    let mesh = match params.style {
        RenderStyle::Points => {
            if points.is_empty() {
                warn!("{} produced no points, nothing to draw", params.kind.label());
            }
            mesh_gen::point_cloud_mesh(&points, POINT_SIZE)
        }
        RenderStyle::Tube => {
            let curve = mesh_gen::catmull_rom(&points)?;
            mesh_gen::tube_mesh(
                |t| mesh_gen::curve_position(&curve, t),
                PATH_TUBE_SEGMENTS,
                PATH_TUBE_RADIUS,
                TUBE_RADIAL_SEGMENTS,
                false,
            )
        }
        RenderStyle::Line => {
            let curve = mesh_gen::catmull_rom(&points)?;
            mesh_gen::line_mesh(|t| mesh_gen::curve_position(&curve, t), LINE_SAMPLES)
        }
    };

    Ok(mesh)
}

fn shape_material(params: &ShapeParams) -> StandardMaterial {
    let tube = params.kind == ShapeKind::Lissajous || params.style == RenderStyle::Tube;
    if tube {
        // vertex colors carry the normals, keep them unshaded
        StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        }
    } else {
        StandardMaterial {
            base_color: Color::srgb_u8(0x00, 0xee, 0xee),
            unlit: true,
            ..default()
        }
    }
}

pub fn handle_regeneration(
    mut commands: Commands,
    mut events: EventReader<RegenerateEvent>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut seed: ResMut<Seed>,
    params: Res<ShapeParams>,
    query: Query<(Entity, &ShapeMesh, &Mesh3d, &MeshMaterial3d<StandardMaterial>, &Transform)>,
) {
    // several requests in one frame collapse into the last one
    let Some(event) = events.read().last() else {
        return;
    };

    // build before tearing down, a failed build keeps the old shape and seed
    let mesh = match build_shape_mesh(&params, event.seed) {
        Ok(mesh) => mesh,
        Err(e) => {
            error!("Shape generation failed for {}: {}", params.kind.label(), e);
            return;
        }
    };
    seed.0 = event.seed;

    // carry the current rotation over so a paused animation stays put
    let mut transform = Transform::default();
    for (entity, old, mesh3d, material, old_transform) in query.iter() {
        debug!("Replacing {} (seed {})", old.kind.label(), old.seed);
        transform = *old_transform;
        meshes.remove(&mesh3d.0);
        materials.remove(&material.0);
        commands.entity(entity).try_despawn();
    }

    commands.spawn((
        ShapeMesh {
            kind: params.kind,
            seed: event.seed,
        },
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(shape_material(&params))),
        transform,
        Visibility::Visible,
    ));

    info!("Generated {} (seed {})", params.kind.label(), event.seed);
}

// one full turn around y per animation loop
pub fn rotate_shape(
    clock: Res<FrameClock>,
    settings: Res<AnimationSettings>,
    mut query: Query<&mut Transform, With<ShapeMesh>>,
) {
    if !settings.animate {
        return;
    }

    for mut transform in query.iter_mut() {
        transform.rotation = Quat::from_rotation_y(std::f32::consts::TAU * clock.progress());
    }
}
