use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::palette::presets::PalettePreset;
use crate::core::params::julia_constant::FINE_TUNE_LEVELS;
use crate::input::gui::state::ExplorerState;
use std::time::Duration;

/// Which panels are open. Pure presentation state, owned by the UI.
pub struct PanelVisibility {
    pub show_ui: bool,
    pub show_info: bool,
    pub show_config: bool,
    pub show_animation: bool,
    pub show_palette: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            show_ui: true,
            show_info: false,
            show_config: false,
            show_animation: false,
            show_palette: false,
        }
    }
}

/// Read-only per-frame stats shown in the info panel.
pub struct FrameStats {
    pub fps: f32,
    pub render_duration: Option<Duration>,
    pub error: Option<String>,
}

pub fn draw_ui(
    ctx: &egui::Context,
    state: &mut ExplorerState,
    panels: &mut PanelVisibility,
    stats: &FrameStats,
    aspect_ratio: f64,
) {
    if !panels.show_ui {
        return;
    }

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("Fractal", |ui| {
                for &kind in FractalKinds::ALL {
                    if ui
                        .selectable_label(state.fractal == kind, kind.display_name())
                        .clicked()
                    {
                        state.select_fractal(kind, aspect_ratio);
                        ui.close_menu();
                    }
                }
            });
            ui.menu_button("View", |ui| {
                ui.checkbox(&mut panels.show_info, "Information");
                ui.checkbox(&mut panels.show_config, "Configuration");
                ui.checkbox(&mut panels.show_animation, "Animation");
                ui.checkbox(&mut panels.show_palette, "Palette selection");
            });
        });
    });

    if panels.show_info {
        draw_info_panel(ctx, state, panels, stats);
    }
    if panels.show_config {
        draw_config_panel(ctx, state, panels, aspect_ratio);
    }
    if panels.show_animation {
        draw_animation_panel(ctx, state, panels);
    }
    if panels.show_palette {
        draw_palette_panel(ctx, state, panels);
    }
}

fn draw_info_panel(
    ctx: &egui::Context,
    state: &ExplorerState,
    panels: &mut PanelVisibility,
    stats: &FrameStats,
) {
    egui::Window::new("Information")
        .open(&mut panels.show_info)
        .auto_sized()
        .show(ctx, |ui| {
            ui.label(format!("FPS = {}", stats.fps.round() as i32));
            ui.label(format!("Iteration count = {}", state.max_iteration_count));
            if let Some(duration) = stats.render_duration {
                ui.label(format!("Last render: {} ms", duration.as_millis()));
            }

            if state.fractal == FractalKinds::Julia {
                ui.separator();
                let c = state.julia_c();
                ui.label(format!("c = {:.6} + {:.6}i", c.real, c.imag));
            }

            if let Some(error) = &stats.error {
                ui.separator();
                ui.colored_label(egui::Color32::LIGHT_RED, error);
            }
        });
}

fn draw_config_panel(
    ctx: &egui::Context,
    state: &mut ExplorerState,
    panels: &mut PanelVisibility,
    aspect_ratio: f64,
) {
    egui::Window::new("Configuration")
        .open(&mut panels.show_config)
        .auto_sized()
        .show(ctx, |ui| {
            ui.add(
                egui::Slider::new(&mut state.max_iteration_count, 10..=1000)
                    .text("Max iter count"),
            );
            ui.add(
                egui::Slider::new(&mut state.colour_exponent, 0.2..=1.0).text("Colour exponent"),
            );
            ui.add(egui::Slider::new(&mut state.colour_cycles, 1.0..=4.0).text("Colour cycles"));

            if ui.button("Reset zoom").clicked() {
                state.reset_zoom(aspect_ratio);
            }

            if state.fractal == FractalKinds::Julia {
                ui.separator();
                ui.label("Julia fine tuning");

                if ui.button("Reset level").clicked() {
                    state.julia_constant.reset_from_level();
                }

                let mut level = state.julia_constant.level();
                ui.add(
                    egui::Slider::new(&mut level, 0..=FINE_TUNE_LEVELS - 1)
                        .text("Fine tuning level"),
                );
                state.julia_constant.set_level(level);

                let offset = state.julia_constant.offset_mut();
                ui.add(egui::Slider::new(&mut offset[0], -1.0..=1.0).text("Real part"));
                ui.add(egui::Slider::new(&mut offset[1], -1.0..=1.0).text("Imag part"));
            }
        });
}

fn draw_animation_panel(
    ctx: &egui::Context,
    state: &mut ExplorerState,
    panels: &mut PanelVisibility,
) {
    egui::Window::new("Animation")
        .open(&mut panels.show_animation)
        .auto_sized()
        .show(ctx, |ui| {
            let mut animate_zoom = state.animation.zoom.is_enabled();
            if ui.checkbox(&mut animate_zoom, "Animate zoom").changed() {
                state.animation.zoom.set_enabled(animate_zoom);
            }
            ui.add(egui::Slider::new(&mut state.animation.zoom.speed, 1.0..=10.0).text("Zoom speed"));

            ui.checkbox(&mut state.animation.animate_palette, "Animate colour");

            if state.fractal == FractalKinds::Julia {
                ui.separator();

                let mut animate_c = state.animation.orbit.is_enabled();
                if ui.checkbox(&mut animate_c, "Animate c").changed() {
                    state.animation.orbit.set_enabled(animate_c);
                }
                ui.add(egui::Slider::new(&mut state.animation.orbit.scale, 1.0..=10.0).text("c scale"));
                ui.add(
                    egui::Slider::new(&mut state.animation.orbit.speed_x, 0.0..=1.0)
                        .text("c speed X"),
                );
                ui.add(
                    egui::Slider::new(&mut state.animation.orbit.speed_y, 0.0..=1.0)
                        .text("c speed Y"),
                );
            }
        });
}

fn draw_palette_panel(
    ctx: &egui::Context,
    state: &mut ExplorerState,
    panels: &mut PanelVisibility,
) {
    egui::Window::new("Palette config")
        .open(&mut panels.show_palette)
        .auto_sized()
        .show(ctx, |ui| {
            ui.label("Predefined");
            ui.horizontal(|ui| {
                for &preset in PalettePreset::ALL {
                    if ui.button(preset.display_name()).clicked() {
                        preset.apply(&mut state.palette);
                    }
                }
            });

            ui.separator();
            ui.label("Manual");

            vec3_slider(ui, "Base", &mut state.palette.base, 0.0, 1.0);
            vec3_slider(ui, "Amplitude", &mut state.palette.amplitude, 0.0, 1.0);

            ui.horizontal(|ui| {
                ui.label("Frequency");
                for channel in &mut state.palette.frequency {
                    ui.add(egui::DragValue::new(channel).clamp_range(0..=4));
                }
            });

            vec3_slider(ui, "Phase", &mut state.palette.phase, 0.0, 1.0);

            ui.add(
                egui::Slider::new(&mut state.palette.global_phase, 0.0..=1.0)
                    .text("Global phase"),
            );
        });
}

fn vec3_slider(ui: &mut egui::Ui, label: &str, values: &mut [f32; 3], min: f32, max: f32) {
    ui.horizontal(|ui| {
        ui.label(label);
        for value in values {
            ui.add(
                egui::DragValue::new(value)
                    .clamp_range(min..=max)
                    .speed(0.01)
                    .fixed_decimals(2),
            );
        }
    });
}
