use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use crate::systems::capture::CaptureFinishedEvent;

// short-lived toast shown after a capture finished
#[derive(Resource)]
pub struct CaptureIndicator {
    pub message: String,
    pub timer: f32,
    pub duration: f32,
}

impl Default for CaptureIndicator {
    fn default() -> Self {
        Self {
            message: String::new(),
            timer: 0.0,
            duration: 4.0,
        }
    }
}

impl CaptureIndicator {
    pub fn show(&mut self, message: String) {
        self.message = message;
        self.timer = self.duration;
    }

    pub fn tick(&mut self, delta: f32) {
        if self.timer > 0.0 {
            self.timer = (self.timer - delta).max(0.0);
        }
    }

    // fade over the whole lifetime
    pub fn alpha(&self) -> f32 {
        (self.timer / self.duration).clamp(0.0, 1.0)
    }
}

pub fn update_capture_indicator(
    mut indicator: ResMut<CaptureIndicator>,
    mut events: EventReader<CaptureFinishedEvent>,
    time: Res<Time>,
) {
    for event in events.read() {
        indicator.show(format!("Saved {} frames to {}", event.frames, event.dir.display()));
    }

    indicator.tick(time.delta_secs());
}

pub fn render_capture_indicator(
    indicator: Res<CaptureIndicator>,
    mut contexts: EguiContexts,
) {
    if indicator.timer <= 0.0 {
        return;
    }

    if let Ok(ctx) = contexts.ctx_mut() {
        let alpha = indicator.alpha();
        let bg_color = egui::Color32::from_rgb(50, 91, 34);

        egui::Area::new(egui::Id::new("capture_indicator"))
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 60.0))
            .show(ctx, |ui| {
                let frame = egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(
                        bg_color.r(), bg_color.g(), bg_color.b(),
                        (200.0 * alpha) as u8
                    ))
                    .stroke(egui::Stroke::new(
                        1.5,
                        egui::Color32::from_rgba_unmultiplied(255, 255, 255, (180.0 * alpha) as u8)
                    ))
                    .inner_margin(egui::Margin::symmetric(12, 6))
                    .corner_radius(egui::CornerRadius::same(6));

                frame.show(ui, |ui| {
                    ui.label(egui::RichText::new(&indicator.message)
                        .size(14.0)
                        .color(egui::Color32::from_rgba_unmultiplied(255, 255, 255, (255.0 * alpha) as u8))
                        .strong());
                });
            });
    }
}
