//! Settings panel UI rendering
//!
//! Edits the carousel's spacing and timing. Slide width follows the panel
//! width and is not edited here.

use eframe::egui;
use egui::RichText;
use rcarousel::CarouselConfig;
use crate::app::AppState;

/// Renders the settings side panel.
///
/// Returns true when any setting changed this frame.
pub fn render_settings_panel(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut changed = false;
    let settings = &mut state.settings;

    ui.heading("Carousel");
    ui.separator();

    egui::Grid::new("carousel_settings_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Slide gap");
            changed |= ui
                .add(egui::DragValue::new(&mut settings.item_gap).range(0.0..=64.0).suffix(" px"))
                .changed();
            ui.end_row();

            ui.label("Auto-advance");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut settings.auto_rotate_ms)
                        .range(CarouselConfig::MIN_AUTO_ROTATE_MS..=60_000)
                        .speed(50)
                        .suffix(" ms"),
                )
                .changed();
            ui.end_row();

            ui.label("Resume after drag");
            changed |= ui
                .add(egui::DragValue::new(&mut settings.resume_cooldown_ms).range(0..=10_000).speed(10).suffix(" ms"))
                .on_hover_text("Pause after a swipe before auto-advance resumes")
                .changed();
            ui.end_row();

            ui.label("Wrap settle");
            changed |= ui
                .add(egui::DragValue::new(&mut settings.jump_settle_ms).range(0..=1_000).suffix(" ms"))
                .on_hover_text("Time the strip ignores scroll events after wrapping around")
                .changed();
            ui.end_row();

            ui.label("Snap animation");
            changed |= ui
                .add(egui::DragValue::new(&mut settings.snap_animation_ms).range(0..=2_000).speed(10).suffix(" ms"))
                .changed();
            ui.end_row();
        });

    ui.add_space(8.0);

    if ui.button("Reset defaults").clicked() {
        let item_width = settings.item_width;
        *settings = CarouselConfig::default().with_item_width(item_width);
        changed = true;
    }

    ui.add_space(8.0);
    ui.label(RichText::new("Changes apply immediately and are saved.").small().weak());

    changed
}
