//! Header panel UI rendering
//!
//! Handles the top bar with feed controls, the settings toggle and the
//! theme selector.

use eframe::egui;
use std::path::PathBuf;
use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a feed file
    OpenFileRequested(PathBuf),
    /// User clicked "Virtual Feed"
    OpenVirtualFeedRequested,
    /// User clicked "Reload"
    ReloadRequested,
}

/// Renders the application header.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
/// * `is_loading` - Whether a background load is running
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState, is_loading: bool) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.add_enabled_ui(!is_loading, |ui| {
            if ui.button("📁 Open Feed").clicked() {
                let mut dialog = rfd::FileDialog::new()
                    .add_filter("All Feed Files", &["json", "br"])
                    .add_filter("JSON Feeds", &["json"])
                    .add_filter("Compressed Feeds", &["br"]);

                if let Ok(cwd) = std::env::current_dir() {
                    dialog = dialog.set_directory(cwd);
                }

                if let Some(path) = dialog.pick_file() {
                    interaction = Some(HeaderInteraction::OpenFileRequested(path));
                }
            }

            if ui.button("🔮 Virtual Feed").clicked() {
                interaction = Some(HeaderInteraction::OpenVirtualFeedRequested);
            }

            let can_reload = state.feed.origin().is_some_and(|origin| origin.is_reloadable());
            if ui.add_enabled(can_reload, egui::Button::new("⟳ Reload")).clicked() {
                interaction = Some(HeaderInteraction::ReloadRequested);
            }
        });

        ui.separator();

        ui.toggle_value(&mut state.show_settings, "⚙ Settings");

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        let color = state.theme.current_theme().colors.error;
        ui.colored_label(color, err.as_str());
    }

    interaction
}
