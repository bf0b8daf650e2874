// frame counter for the animation loop
// preview ticks at a fixed framerate, capture ticks once per rendered frame (see capture.rs)

use bevy::prelude::*;

use crate::config::{FRAMERATE, FRAMES};
use crate::systems::capture::CaptureState;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(FrameClock::new(FRAMES, FRAMERATE))
            .insert_resource(AnimationSettings::default())
            .add_systems(
                Update,
                (toggle_animation, advance_frame)
                    .chain()
                    .before(crate::systems::mesh::shape::rotate_shape),
            );
    }
}

#[derive(Resource)]
pub struct AnimationSettings {
    pub animate: bool,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self { animate: true }
    }
}

#[derive(Resource)]
pub struct FrameClock {
    pub frame: u32,
    pub frames: u32,
    pub timer: Timer,
}

impl FrameClock {
    pub fn new(frames: u32, framerate: f32) -> Self {
        Self {
            frame: 0,
            frames: frames.max(1),
            timer: Timer::from_seconds(1.0 / framerate, TimerMode::Repeating),
        }
    }

    /// Position in the loop, 0 at the first frame and 1 after the last.
    pub fn progress(&self) -> f32 {
        self.frame as f32 / self.frames as f32
    }

    // preview loops forever
    pub fn advance_wrapping(&mut self) {
        self.frame = (self.frame + 1) % self.frames;
    }

    pub fn reset(&mut self) {
        self.frame = 0;
        self.timer.reset();
    }
}

fn toggle_animation(
    keys: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<AnimationSettings>,
) {
    if keys.just_pressed(KeyCode::Space) {
        settings.animate = !settings.animate;
        info!("Animation {}", if settings.animate { "resumed" } else { "paused" });
    }
}

pub fn advance_frame(
    time: Res<Time>,
    settings: Res<AnimationSettings>,
    capture: Res<CaptureState>,
    mut clock: ResMut<FrameClock>,
) {
    // capture drives the clock itself
    if !settings.animate || capture.is_active() {
        return;
    }

    clock.timer.tick(time.delta());
    for _ in 0..clock.timer.times_finished_this_tick() {
        clock.advance_wrapping();
    }
}
