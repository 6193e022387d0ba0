//! Details panel UI rendering
//!
//! Shows the most recently tapped banner: its fields, link and tap count.

use eframe::egui;
use egui::{RichText, ScrollArea};
use rcarousel::{hex_to_color32, ThemeColors};
use crate::app::AppState;

/// Renders the details panel for the selected banner
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `theme_colors` - Color palette for the current theme
pub fn render_details_panel(ui: &mut egui::Ui, state: &AppState, theme_colors: &ThemeColors) {
    let Some(banner) = state.selection.selected() else {
        ui.colored_label(theme_colors.text_dim, "Tap a banner to see its details.");
        return;
    };

    ui.horizontal(|ui| {
        let (swatch, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
        ui.painter().rect_filled(swatch, 2.0, hex_to_color32(&banner.color));
        ui.label(RichText::new(format!("Details for banner: {}", banner.id)).strong());
    });
    ui.separator();

    ScrollArea::vertical()
        .id_salt("details_scroll_area")
        .max_height(ui.available_height())
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("banner_details_grid")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Title:");
                    ui.label(banner.title.as_str());
                    ui.end_row();

                    ui.label("Sponsor:");
                    ui.label(banner.sponsor.as_str());
                    ui.end_row();

                    if let Some(subtitle) = &banner.subtitle {
                        ui.label("Offer:");
                        ui.label(subtitle.as_str());
                        ui.end_row();
                    }

                    if let Some(link) = &banner.link_url {
                        ui.label("Link:");
                        ui.hyperlink_to(link.as_str(), link);
                        ui.end_row();
                    }

                    if let Some(expires_at) = &banner.expires_at {
                        ui.label("Expires:");
                        ui.colored_label(theme_colors.warning, expires_at.as_str());
                        ui.end_row();
                    }

                    ui.label("Taps:");
                    ui.label(format!(
                        "{} (session total {})",
                        state.selection.tap_count(&banner.id),
                        state.selection.total_taps()
                    ));
                    ui.end_row();
                });

            ui.add_space(10.0);

            ui.label(RichText::new("Raw:").strong());
            match serde_json::to_string(banner) {
                Ok(json) => {
                    ui.colored_label(theme_colors.accent, RichText::new(json).monospace());
                }
                Err(e) => {
                    ui.colored_label(theme_colors.error, e.to_string());
                }
            }
        });
}
