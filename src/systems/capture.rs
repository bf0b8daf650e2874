// captures one animation loop as a numbered png sequence
// by taking a screenshot of the primary window every frame

use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};
use std::path::{Path, PathBuf};

use crate::config::{CAPTURE_ROOT, FRAMES};
use crate::systems::animation::{AnimationSettings, FrameClock};

pub struct CapturePlugin;

impl Plugin for CapturePlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(CaptureState::default())
            .insert_resource(CaptureSettings::default())
            .add_event::<StartCaptureEvent>()
            .add_event::<CaptureFinishedEvent>()
            .add_systems(
                Update,
                (
                    // the clock reset has to land before the shape is posed for frame 0
                    handle_start_capture.before(crate::systems::mesh::shape::rotate_shape),
                    // after the rotation so the screenshot matches the frame number
                    capture_frames.after(crate::systems::mesh::shape::rotate_shape),
                ),
            );
    }
}

// capture event
#[derive(Event)]
pub struct StartCaptureEvent;

#[derive(Event)]
pub struct CaptureFinishedEvent {
    pub dir: PathBuf,
    pub frames: u32,
}

#[derive(Debug, Clone)]
pub struct CaptureSession {
    pub dir: PathBuf,
    pub frames: u32,
}

#[derive(Debug, PartialEq)]
pub enum CaptureStep {
    Shoot(PathBuf),
    Finished,
}

impl CaptureSession {
    pub fn new(dir: impl Into<PathBuf>, frames: u32) -> Self {
        Self { dir: dir.into(), frames }
    }

    pub fn frame_path(&self, frame: u32) -> PathBuf {
        self.dir.join(format!("frame_{:05}.png", frame))
    }

    /// Next action for the current clock frame, advances the clock when a frame is shot.
    pub fn step(&self, clock: &mut FrameClock) -> CaptureStep {
        if clock.frame >= self.frames {
            return CaptureStep::Finished;
        }
        let path = self.frame_path(clock.frame);
        clock.frame += 1;
        CaptureStep::Shoot(path)
    }
}

// where capture directories are created
#[derive(Resource)]
pub struct CaptureSettings {
    pub root: PathBuf,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self { root: PathBuf::from(CAPTURE_ROOT) }
    }
}

#[derive(Resource, Default)]
pub struct CaptureState {
    pub session: Option<CaptureSession>,
}

impl CaptureState {
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }
}

// one directory per capture, named after the start time
pub fn create_capture_dir(root: &Path) -> std::io::Result<PathBuf> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let dir = root.join(format!("capture_{}", timestamp));
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn handle_start_capture(
    mut events: EventReader<StartCaptureEvent>,
    settings: Res<CaptureSettings>,
    mut state: ResMut<CaptureState>,
    mut clock: ResMut<FrameClock>,
) {
    if events.read().last().is_none() || state.is_active() {
        return;
    }

    match create_capture_dir(&settings.root) {
        Ok(dir) => {
            info!("Start capture: {} frames to {}", FRAMES, dir.display());
            clock.reset();
            state.session = Some(CaptureSession::new(dir, FRAMES));
        }
        Err(e) => {
            error!("Capture failed, cannot create output directory: {}", e);
        }
    }
}

pub fn capture_frames(
    mut commands: Commands,
    mut state: ResMut<CaptureState>,
    mut clock: ResMut<FrameClock>,
    settings: Res<AnimationSettings>,
    mut finished_events: EventWriter<CaptureFinishedEvent>,
) {
    // a paused animation pauses the capture as well
    if !settings.animate {
        return;
    }
    let Some(session) = state.session.as_ref() else {
        return;
    };

    match session.step(&mut clock) {
        CaptureStep::Shoot(path) => {
            commands
                .spawn(Screenshot::primary_window())
                .observe(save_to_disk(path));
        }
        CaptureStep::Finished => {
            info!("Capture done: {} frames in {}", session.frames, session.dir.display());
            finished_events.write(CaptureFinishedEvent {
                dir: session.dir.clone(),
                frames: session.frames,
            });
            state.session = None;
            clock.reset();
        }
    }
}
