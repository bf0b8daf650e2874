// output resolution presets for the primary window
// bevy keeps the camera aspect in sync with the window on its own

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

#[derive(Resource, Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Resolution {
    #[default]
    Fullscreen,
    R600x600,
    R800x600,
    R640x360,
    R720x405,
    R768x423,
}

impl Resolution {
    pub const ALL: [Resolution; 6] = [
        Resolution::Fullscreen,
        Resolution::R600x600,
        Resolution::R800x600,
        Resolution::R640x360,
        Resolution::R720x405,
        Resolution::R768x423,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Resolution::Fullscreen => "Fullscreen",
            Resolution::R600x600 => "600x600",
            Resolution::R800x600 => "800x600",
            Resolution::R640x360 => "640x360",
            Resolution::R720x405 => "720x405",
            Resolution::R768x423 => "768x423",
        }
    }

    /// Fixed window size, `None` means follow the screen.
    pub fn size(self) -> Option<(f32, f32)> {
        match self {
            Resolution::Fullscreen => None,
            Resolution::R600x600 => Some((600.0, 600.0)),
            Resolution::R800x600 => Some((800.0, 600.0)),
            Resolution::R640x360 => Some((640.0, 360.0)),
            Resolution::R720x405 => Some((720.0, 405.0)),
            Resolution::R768x423 => Some((768.0, 423.0)),
        }
    }
}

pub fn apply_resolution(
    resolution: Res<Resolution>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !resolution.is_changed() {
        return;
    }

    for mut window in windows.iter_mut() {
        match resolution.size() {
            Some((width, height)) => {
                window.set_maximized(false);
                window.resolution.set(width, height);
            }
            None => window.set_maximized(true),
        }
    }
    info!("Resolution set to {}", resolution.label());
}
