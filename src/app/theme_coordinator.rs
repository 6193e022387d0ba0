//! Theme persistence and application.

use rcarousel::ThemeManager;

use crate::app::AppState;

const THEME_KEY: &str = "theme_preference";

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the theme preference, defaulting to the built-in default theme.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> String {
        storage
            .and_then(|storage| storage.get_string(THEME_KEY))
            .unwrap_or_else(|| rcarousel::theme::DEFAULT_THEME.to_string())
    }

    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme_name: &str) {
        storage.set_string(THEME_KEY, theme_name.to_string());
        storage.flush();
    }

    /// Applies the current theme to the egui context. Called every frame.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let theme = state.theme.current_theme();
        let mut visuals = if ThemeManager::is_light(theme) {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };
        state.theme.theme_manager().apply_theme(theme, &mut visuals);
        ctx.set_visuals(visuals);
    }
}
