use bevy::prelude::*;
use bevy::math::bounding::Aabb2d;
use bevy::log::LogPlugin;
use bevy::window::WindowPlugin;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy_egui::EguiPlugin;
use bevy_rts_camera::*;

pub mod config;
pub mod error;
pub mod systems;

#[cfg(test)]
pub mod test;

// import modules here
use systems::animation::AnimationPlugin;
use systems::capture::CapturePlugin;
use systems::mesh::ShapeGenerationPlugin;

use crate::config::*;
use crate::systems::ui::UIPlugin;

fn main() -> bevy::app::AppExit {
    App::new()
        .add_plugins(DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Boid Paths".to_string(),
                    mode: bevy::window::WindowMode::Windowed,
                    resolution: bevy::window::WindowResolution::new(1920.0, 1080.0),
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: "wgpu=error,naga=warn,boid_paths=debug".to_string(),
                ..default()
            }))
        .add_plugins(EguiPlugin::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(RtsCameraPlugin)

        // my custom plugins
        .add_plugins(AnimationPlugin)
        .add_plugins(ShapeGenerationPlugin)
        .add_plugins(CapturePlugin)
        .add_plugins(UIPlugin)

        .insert_resource(ClearColor(Color::BLACK)) // world color
        .add_systems(Startup, start)
        .add_systems(Update, handle_exit)
        .run()
}

// application entry point here
fn start(
    mut commands: Commands
) {
    // spawn camera, orbits the origin where the shape sits
    commands.spawn((
        RtsCamera {
            bounds: Aabb2d::new(
                Vec2::ZERO,
                Vec2::new(5.0, 5.0),
            ),
            min_angle: 0.3,
            height_max: CAMERA_DISTANCE,
            ..default()
        },
        RtsCameraControls {
            key_up: KeyCode::KeyW,
            key_down: KeyCode::KeyS,
            key_left: KeyCode::KeyA,
            key_right: KeyCode::KeyD,
            key_rotate_left: KeyCode::F24,  // no keyboard rotation, MMB only
            key_rotate_right: KeyCode::F23,
            pan_speed: 4.0,
            zoom_sensitivity: 0.15,
            edge_pan_width: 0.0,
            ..default()
        },
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
    ));

    info!("Space - toggle animation, R - new seed, Esc - exit");
}

// application exit
fn handle_exit(
    keys: Res<ButtonInput<KeyCode>>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
