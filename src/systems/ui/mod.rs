use bevy::prelude::*;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin}; // fps
use bevy_egui::{egui, EguiContexts, EguiPlugin, EguiPrimaryContextPass};
use crate::systems::animation::AnimationSettings;
use crate::systems::capture::{CaptureState, StartCaptureEvent};
use crate::systems::mesh::{RegenerateEvent, RenderStyle, Seed, ShapeKind, ShapeParams};

pub mod indicator;
pub mod resolution;

// re-export the main items that other modules need
pub use indicator::{CaptureIndicator, update_capture_indicator, render_capture_indicator};
pub use resolution::{Resolution, apply_resolution};

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        assert!(app.is_plugin_added::<EguiPlugin>());
        app
            .insert_resource(CaptureIndicator::default())
            .insert_resource(Resolution::default())
            .add_systems(Update, (key_input, update_capture_indicator, apply_resolution))
            .add_systems(EguiPrimaryContextPass, (ui_main, fps, render_capture_indicator)); // UI rendering here
    }
}

fn key_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut regen_events: EventWriter<RegenerateEvent>,
) {
    if keyboard_input.just_pressed(KeyCode::KeyR) {
        regen_events.write(RegenerateEvent { seed: rand::random() });
    }
}

fn ui_main(
    mut contexts: EguiContexts,
    current_seed: Res<Seed>,
    mut params: ResMut<ShapeParams>,
    mut settings: ResMut<AnimationSettings>,
    mut resolution: ResMut<Resolution>,
    capture: Res<CaptureState>,
    mut regen_events: EventWriter<RegenerateEvent>,
    mut capture_events: EventWriter<StartCaptureEvent>,
) {
    // keep the panel out of the captured frames
    if capture.is_active() {
        return;
    }

    if let Ok(ctx) = contexts.ctx_mut() {
        egui::SidePanel::left("config_panel")
            .default_width(250.0)
            .min_width(250.0)
            .max_width(400.0)
            .resizable(true)
            .show(ctx, |ui| {
                let mut regenerate = false;

                // camera
                ui.label("Camera: ");
                ui.label("WASD - Move");
                ui.label("Scroll - Zoom");
                ui.label("MMB - Rotate");

                ui.separator();

                egui::CollapsingHeader::new("Shape")
                    .default_open(true)
                    .show(ui, |ui| {
                    let mut kind = params.kind;
                    egui::ComboBox::from_label("Shape")
                        .selected_text(kind.label())
                        .show_ui(ui, |ui| {
                            for option in ShapeKind::ALL {
                                ui.selectable_value(&mut kind, option, option.label());
                            }
                        });
                    if kind != params.kind {
                        params.select_kind(kind);
                        regenerate = true;
                    }

                    // lissajous is always a closed tube
                    let styled = params.kind != ShapeKind::Lissajous;
                    ui.add_enabled_ui(styled, |ui| {
                        let mut style = params.style;
                        egui::ComboBox::from_label("Render")
                            .selected_text(style.label())
                            .show_ui(ui, |ui| {
                                for option in RenderStyle::ALL {
                                    ui.selectable_value(&mut style, option, option.label());
                                }
                            });
                        if style != params.style {
                            params.style = style;
                            regenerate = true;
                        }
                    });

                    ui.checkbox(&mut settings.animate, "Animate")
                        .on_hover_text("Rotate the shape, SPACE to toggle");
                });

                // generator parameters, only for the active shape
                let kind = params.kind;
                match kind {
                    ShapeKind::Lissajous => {}
                    ShapeKind::SpherePath => {
                        egui::CollapsingHeader::new("Sphere Path")
                            .default_open(true)
                            .show(ui, |ui| {
                            let p = &mut params.sphere;
                            regenerate |= ui.add(egui::Slider::new(&mut p.n, 10..=5000)
                                .text("Points"))
                                .changed();
                            regenerate |= ui.add(egui::Slider::new(&mut p.radius, 0.5..=4.0)
                                .text("Radius"))
                                .changed();
                            regenerate |= ui.add(egui::Slider::new(&mut p.dt, 0.01..=0.5)
                                .text("Step"))
                                .changed();
                            regenerate |= ui.add(egui::Slider::new(&mut p.w, 0.0..=2.0)
                                .text("Spring"))
                                .on_hover_text("How hard the walker is pulled back onto the sphere.")
                                .changed();
                            regenerate |= ui.add(egui::Slider::new(&mut p.noise, 0.0..=2.0)
                                .text("Noise"))
                                .changed();
                        });
                    }
                    ShapeKind::MetaballPath => {
                        egui::CollapsingHeader::new("Metaball Path")
                            .default_open(true)
                            .show(ui, |ui| {
                            let p = &mut params.metaball_path;
                            regenerate |= ui.add(egui::Slider::new(&mut p.n, 10..=5000)
                                .text("Points"))
                                .changed();
                            regenerate |= ui.add(egui::Slider::new(&mut p.m, 1..=24)
                                .text("Centroids"))
                                .changed();
                            regenerate |= ui.add(egui::Slider::new(&mut p.radius, 0.5..=4.0)
                                .text("Radius"))
                                .changed();
                            regenerate |= ui.add(egui::Slider::new(&mut p.dt, 0.01..=0.5)
                                .text("Step"))
                                .changed();
                            regenerate |= ui.add(egui::Slider::new(&mut p.noise, 0.0..=2.0)
                                .text("Noise"))
                                .changed();
                            regenerate |= ui.add(egui::Slider::new(&mut p.threshold, 1.0..=30.0)
                                .text("Threshold"))
                                .on_hover_text("Field value of the surface the walker follows.")
                                .changed();
                            regenerate |= ui.add(egui::Slider::new(&mut p.factor, 0.0..=1.0)
                                .text("Correction"))
                                .on_hover_text("Pull towards the surface, also damps the sideways motion.")
                                .changed();
                        });
                    }
                    ShapeKind::MetaballPoints => {
                        egui::CollapsingHeader::new("Metaball Points")
                            .default_open(true)
                            .show(ui, |ui| {
                            let p = &mut params.metaball_points;
                            regenerate |= ui.add(egui::Slider::new(&mut p.n, 1..=1000)
                                .text("Trials"))
                                .changed();
                            regenerate |= ui.add(egui::Slider::new(&mut p.m, 1..=24)
                                .text("Centroids"))
                                .changed();
                            regenerate |= ui.add(egui::Slider::new(&mut p.radius, 0.5..=4.0)
                                .text("Radius"))
                                .changed();
                            regenerate |= ui.add(egui::Slider::new(&mut p.threshold, 1.0..=30.0)
                                .text("Threshold"))
                                .changed();
                            regenerate |= ui.add(egui::Slider::new(&mut p.dt, 0.01..=0.2)
                                .text("Step"))
                                .changed();
                            regenerate |= ui.checkbox(&mut p.show_traces, "Show Traces")
                                .on_hover_text("Keep every step of every trial, not just the surface hits.")
                                .changed();
                        });
                    }
                }

                // seed
                egui::CollapsingHeader::new("Seed")
                    .default_open(true)
                    .show(ui, |ui| {
                    ui.label(format!("Current: {}", current_seed.0));

                    if ui.button("Regenerate")
                        .on_hover_text("New random seed, R")
                        .clicked() {
                        let new_seed = rand::random();
                        regen_events.write(RegenerateEvent { seed: new_seed });
                    }
                });

                ui.separator();

                egui::CollapsingHeader::new("Capture")
                    .default_open(true)
                    .show(ui, |ui| {
                    if ui.button("Capture Animation")
                        .on_hover_text("Save one full loop as png frames, hides this panel while recording")
                        .clicked() {
                        capture_events.write(StartCaptureEvent);
                    }

                    let mut selected = *resolution;
                    egui::ComboBox::from_label("Resolution")
                        .selected_text(selected.label())
                        .show_ui(ui, |ui| {
                            for option in Resolution::ALL {
                                ui.selectable_value(&mut selected, option, option.label());
                            }
                        });
                    // only touch the resource on a real change, apply_resolution watches it
                    if selected != *resolution {
                        *resolution = selected;
                    }
                });

                ui.separator();
                ui.label("ESC - Exit");

                // rebuild with the same seed on any parameter change
                if regenerate {
                    regen_events.write(RegenerateEvent { seed: current_seed.0 });
                }
            });
    }
}

fn fps(
    mut contexts: EguiContexts,
    diagnostics: Res<DiagnosticsStore>,
    capture: Res<CaptureState>,
) {
    if capture.is_active() {
        return;
    }

    if let Ok(ctx) = contexts.ctx_mut() {
        egui::Area::new(egui::Id::new("fps_counter"))
            .anchor(egui::Align2::RIGHT_TOP, egui::Vec2::new(-10.0, 10.0))
            .show(ctx, |ui| {
                ui.with_layout(egui::Layout::top_down(egui::Align::RIGHT), |ui| {
                    if let Some(fps_diagnostic) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
                        if let Some(fps) = fps_diagnostic.smoothed() {
                            ui.label(egui::RichText::new(format!("{:.0}", fps))
                                .size(26.0)
                                .color(egui::Color32::WHITE));
                        }
                    }
                });
            });
    }
}
