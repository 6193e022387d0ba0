//! Theme support for the banner viewer.
//!
//! Built-in themes (Light, Dark, Dracula) cover the chrome around the
//! carousel: panels, text, pagination dots and the slide frame. Slide
//! backgrounds come from the banner feed itself.
//!
//! # Examples
//!
//! ```
//! use rcarousel::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! println!("Active dot: {:?}", dracula.colors.dot_active);
//! ```

use egui::Color32;
use std::collections::HashMap;

use crate::feed::parse_hex_color;

pub const DEFAULT_THEME: &str = "Dark";

/// Color palette for one theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub panel_background: Color32,
    pub extreme_background: Color32,

    pub text: Color32,
    pub text_dim: Color32,
    /// Text drawn on top of banner slides
    pub slide_text: Color32,

    pub selection: Color32,
    pub hover: Color32,
    pub slide_border: Color32,

    pub dot_active: Color32,
    pub dot_inactive: Color32,

    pub accent: Color32,
    pub error: Color32,
    pub warning: Color32,
}

/// A named theme.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Registry of the built-in themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    pub fn new() -> Self {
        let themes = [light_theme(), dark_theme(), dracula_theme()]
            .into_iter()
            .map(|theme| (theme.name.clone(), theme))
            .collect();
        Self { themes }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Looks up `name`, falling back to the default theme.
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        self.themes
            .get(name)
            .or_else(|| self.themes.get(DEFAULT_THEME))
            .expect("default theme is always registered")
    }

    /// Theme names, sorted.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's colors to egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;
        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.accent;
        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }

    /// Whether the theme should start from egui's light visuals.
    pub fn is_light(theme: &Theme) -> bool {
        theme.name == "Light"
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light chrome with egui default colors".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),
            text: Color32::from_rgb(20, 20, 20),
            text_dim: Color32::from_rgb(120, 120, 120),
            slide_text: Color32::WHITE,
            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            slide_border: Color32::from_rgb(160, 160, 160),
            dot_active: Color32::from_rgb(40, 100, 200),
            dot_inactive: Color32::from_rgb(190, 190, 190),
            accent: Color32::from_rgb(0, 140, 170),
            error: Color32::from_rgb(200, 40, 40),
            warning: Color32::from_rgb(230, 120, 20),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark chrome with egui default colors".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),
            text: Color32::from_rgb(235, 235, 235),
            text_dim: Color32::from_rgb(160, 160, 160),
            slide_text: Color32::WHITE,
            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            slide_border: Color32::from_rgb(100, 100, 100),
            dot_active: Color32::from_rgb(90, 170, 255),
            dot_inactive: Color32::from_rgb(90, 90, 90),
            accent: Color32::from_rgb(26, 188, 156),
            error: Color32::from_rgb(231, 76, 60),
            warning: Color32::from_rgb(230, 126, 34),
        },
    }
}

fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Dracula palette".to_string(),
        colors: ThemeColors {
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),
            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            slide_text: hex_to_color32("#f8f8f2"),
            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#343746"),
            slide_border: hex_to_color32("#6272a4"),
            dot_active: hex_to_color32("#bd93f9"),
            dot_inactive: hex_to_color32("#44475a"),
            accent: hex_to_color32("#8be9fd"),
            error: hex_to_color32("#ff5555"),
            warning: hex_to_color32("#ffb86c"),
        },
    }
}

/// Converts `#RRGGBB` to a color, black if malformed.
pub fn hex_to_color32(hex: &str) -> Color32 {
    parse_hex_color(hex)
        .map(|[r, g, b]| Color32::from_rgb(r, g, b))
        .unwrap_or(Color32::BLACK)
}

/// Scales brightness (1.0 = unchanged).
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let scale = |c: u8| (c as f32 * factor).clamp(0.0, 255.0) as u8;
    Color32::from_rgb(scale(color.r()), scale(color.g()), scale(color.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes_listed() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Dracula", "Light"]);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let manager = ThemeManager::new();
        assert_eq!(manager.theme_or_default("Solarized").name, DEFAULT_THEME);
    }

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#ff5555"), Color32::from_rgb(255, 85, 85));
        assert_eq!(hex_to_color32("nope"), Color32::BLACK);
    }

    #[test]
    fn test_adjust_brightness_saturates() {
        let c = adjust_brightness(Color32::from_rgb(200, 100, 0), 2.0);
        assert_eq!(c, Color32::from_rgb(255, 200, 0));
    }
}
