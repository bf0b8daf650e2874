use std::path::PathBuf;
use std::time::Duration;

use approx::assert_abs_diff_eq;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use bevy::render::view::screenshot::Screenshot;

use crate::config::{FRAMERATE, FRAMES};
use crate::systems::animation::{advance_frame, AnimationSettings, FrameClock};
use crate::systems::capture::{
    CapturePlugin, CaptureSession, CaptureSettings, CaptureState, CaptureStep, StartCaptureEvent,
};
use crate::systems::mesh::shape::rotate_shape;
use crate::systems::mesh::{ShapeKind, ShapeMesh};
use crate::systems::ui::{CaptureIndicator, Resolution};

#[test]
fn clock_wraps_after_one_loop() {
    let mut clock = FrameClock::new(FRAMES, FRAMERATE);
    assert_eq!(clock.progress(), 0.0);

    for _ in 0..30 {
        clock.advance_wrapping();
    }
    assert_abs_diff_eq!(clock.progress(), 0.5);

    for _ in 0..30 {
        clock.advance_wrapping();
    }
    assert_eq!(clock.frame, 0);
}

#[test]
fn clock_never_divides_by_zero_frames() {
    let mut clock = FrameClock::new(0, FRAMERATE);
    clock.advance_wrapping();
    assert_eq!(clock.frame, 0);
    assert!(clock.progress().is_finite());
}

fn clock_world(animate: bool, capture: Option<CaptureSession>) -> World {
    let mut world = World::new();
    world.insert_resource(FrameClock::new(FRAMES, FRAMERATE));
    world.insert_resource(AnimationSettings { animate });
    world.insert_resource(CaptureState { session: capture });

    let mut time = Time::<()>::default();
    // 2.5 preview frames at 20 fps
    time.advance_by(Duration::from_millis(125));
    world.insert_resource(time);
    world
}

#[test]
fn preview_advances_at_the_framerate() {
    let mut world = clock_world(true, None);
    world.run_system_once(advance_frame).unwrap();
    assert_eq!(world.resource::<FrameClock>().frame, 2);
}

#[test]
fn paused_or_capturing_clock_stands_still() {
    let mut paused = clock_world(false, None);
    paused.run_system_once(advance_frame).unwrap();
    assert_eq!(paused.resource::<FrameClock>().frame, 0);

    let mut capturing = clock_world(true, Some(CaptureSession::new("out", FRAMES)));
    capturing.run_system_once(advance_frame).unwrap();
    assert_eq!(capturing.resource::<FrameClock>().frame, 0);
}

#[test]
fn capture_shoots_every_frame_once() {
    let session = CaptureSession::new("captures/capture_1", FRAMES);
    let mut clock = FrameClock::new(FRAMES, FRAMERATE);

    let mut shots = Vec::new();
    loop {
        match session.step(&mut clock) {
            CaptureStep::Shoot(path) => shots.push(path),
            CaptureStep::Finished => break,
        }
    }

    assert_eq!(shots.len(), FRAMES as usize);
    assert_eq!(shots[0], PathBuf::from("captures/capture_1/frame_00000.png"));
    assert_eq!(shots[59], PathBuf::from("captures/capture_1/frame_00059.png"));
    // finished stays finished
    assert_eq!(session.step(&mut clock), CaptureStep::Finished);
}

#[test]
fn first_captured_frame_is_posed_for_frame_zero() {
    let root = std::env::temp_dir().join(format!("boid_paths_capture_{}", std::process::id()));

    let mut app = App::new();
    app.add_plugins(CapturePlugin)
        .insert_resource(CaptureSettings { root: root.clone() })
        .insert_resource(FrameClock::new(FRAMES, FRAMERATE))
        .insert_resource(AnimationSettings::default())
        .add_systems(Update, rotate_shape);

    // preview is mid-loop when the capture starts
    app.world_mut().resource_mut::<FrameClock>().frame = 17;
    let shape = app
        .world_mut()
        .spawn((ShapeMesh { kind: ShapeKind::Lissajous, seed: 0 }, Transform::default()))
        .id();
    app.world_mut().send_event(StartCaptureEvent);

    app.update();

    let world = app.world_mut();
    assert!(world.resource::<CaptureState>().is_active());
    // shot 0 was taken and the clock moved on to frame 1
    assert_eq!(world.resource::<FrameClock>().frame, 1);
    assert_eq!(world.query::<&Screenshot>().iter(world).count(), 1);
    let rotation = world.get::<Transform>(shape).unwrap().rotation;
    assert!(rotation.abs_diff_eq(Quat::IDENTITY, 1e-6), "rotation {:?}", rotation);

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn capture_state_tracks_the_session() {
    let mut state = CaptureState::default();
    assert!(!state.is_active());
    state.session = Some(CaptureSession::new("x", 3));
    assert!(state.is_active());
}

#[test]
fn resolution_presets() {
    assert_eq!(Resolution::default(), Resolution::Fullscreen);
    assert_eq!(Resolution::Fullscreen.size(), None);
    assert_eq!(Resolution::R600x600.size(), Some((600.0, 600.0)));
    assert_eq!(Resolution::R768x423.size(), Some((768.0, 423.0)));

    for preset in Resolution::ALL.into_iter().skip(1) {
        let (w, h) = preset.size().unwrap();
        assert_eq!(preset.label(), format!("{}x{}", w, h));
    }
}

#[test]
fn capture_indicator_fades_out() {
    let mut indicator = CaptureIndicator::default();
    assert_eq!(indicator.alpha(), 0.0);

    indicator.show("Saved".to_string());
    assert_eq!(indicator.alpha(), 1.0);

    indicator.tick(indicator.duration / 2.0);
    assert_abs_diff_eq!(indicator.alpha(), 0.5, epsilon = 1e-6);

    indicator.tick(indicator.duration);
    assert_eq!(indicator.timer, 0.0);
    assert_eq!(indicator.alpha(), 0.0);
}
