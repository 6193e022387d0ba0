//! Centralized application state for the banner viewer.
//!
//! Composes focused state components, each keeping its own invariants:
//! the feed, the mounted carousel, the selection and the theme.

use rcarousel::CarouselConfig;

use crate::state::{CarouselState, FeedState, SelectionState, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Loaded feed and its origin
    pub feed: FeedState,

    /// Mounted carousel and strip viewport
    pub carousel: CarouselState,

    /// Tapped banner and tap counts
    pub selection: SelectionState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// User-editable carousel timing and spacing
    pub settings: CarouselConfig,

    /// Whether the settings side panel is open
    pub show_settings: bool,

    /// Seed for the next virtual feed
    pub virtual_seed: u64,

    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Set when the feed changed and should be written to the cache
    pub feed_dirty: bool,

    /// Set when settings changed and should be persisted
    pub settings_dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(rcarousel::theme::DEFAULT_THEME.to_string(), CarouselConfig::default())
    }
}

impl AppState {
    /// Creates application state from persisted preferences.
    pub fn new(theme_name: String, settings: CarouselConfig) -> Self {
        Self {
            feed: FeedState::new(),
            carousel: CarouselState::new(),
            selection: SelectionState::new(),
            theme: ThemeState::with_theme(theme_name),
            settings,
            show_settings: false,
            virtual_seed: 42,
            error_message: None,
            feed_dirty: false,
            settings_dirty: false,
        }
    }

    /// Clears feed-related state before a new feed is loaded.
    pub fn reset_feed_state(&mut self) {
        self.carousel.unmount();
        self.feed.clear();
        self.selection.clear();
        self.error_message = None;
    }
}
