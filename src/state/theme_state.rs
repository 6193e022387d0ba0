//! Theme selection state.

use rcarousel::{Theme, ThemeManager};

/// State related to visual theme.
pub struct ThemeState {
    theme_manager: ThemeManager,
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::with_theme(rcarousel::theme::DEFAULT_THEME.to_string())
    }
}

impl ThemeState {
    pub fn with_theme(theme_name: String) -> Self {
        Self {
            theme_manager: ThemeManager::new(),
            current_theme_name: theme_name,
        }
    }

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// The active theme, falling back to the default for unknown names.
    pub fn current_theme(&self) -> &Theme {
        self.theme_manager.theme_or_default(&self.current_theme_name)
    }

    pub fn set_theme(&mut self, theme_name: String) {
        self.current_theme_name = theme_name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back() {
        let mut state = ThemeState::with_theme("Solarized".to_string());
        assert_eq!(state.current_theme().name, rcarousel::theme::DEFAULT_THEME);

        state.set_theme("Dracula".to_string());
        assert_eq!(state.current_theme().name, "Dracula");
        assert_eq!(state.current_theme_name(), "Dracula");
    }
}
