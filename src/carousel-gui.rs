//! Banner Carousel Viewer GUI Application
//!
//! An interactive viewer for sponsored-banner feeds, built on egui. The
//! viewer features:
//! - A circular, auto-advancing banner strip with drag and fling
//! - Pagination dots and tap-to-select with a details panel
//! - Asynchronous feed loading (plain or brotli-compressed JSON)
//! - A persistent feed cache so the last feed shows on startup
//! - Editable carousel timing and multiple themes, saved between runs

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `cache/` - Persistent feed cache
//! - `io/` - Background feed loading
//! - `utils/` - Formatting helpers
//! - `ui/` - UI panel rendering, interaction, and input handling
//! - `state/` - Feed, carousel, strip and selection state

use eframe::egui;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod utils;
mod cache;
mod io;
mod app;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use cache::{unix_now, TtlCache};
use io::AsyncLoader;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the viewer.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_title("Banner Carousel Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Banner Carousel Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(CarouselViewerApp::new(cc, initial_file)))),
    )
}

/// The main viewer application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles feed loading and carousel interaction
/// - `ThemeCoordinator` handles theme persistence and application
/// - `SettingsCoordinator` persists the carousel configuration
/// - `PanelManager` handles UI panel layout and rendering
struct CarouselViewerApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous feed loader
    loader: AsyncLoader,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
    /// Cache for the last shown feed
    feed_cache: TtlCache,
}

impl CarouselViewerApp {
    /// Creates the viewer with theme and settings loaded from persistent storage.
    ///
    /// Without a file argument, the last cached feed is restored.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let settings = SettingsCoordinator::load_carousel_config(cc.storage);
        let feed_cache = TtlCache::for_feed();

        let mut state = AppState::new(theme_name, settings);
        if initial_file.is_none() {
            if let Some(feed) = cc.storage.and_then(|storage| feed_cache.get_feed(storage, unix_now())) {
                ApplicationCoordinator::restore_cached_feed(&mut state, feed);
            }
        }

        Self {
            state,
            loader: AsyncLoader::new(),
            pending_file_load: initial_file,
            feed_cache,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::OpenVirtualFeedRequested => {
                ApplicationCoordinator::open_virtual_feed(&mut self.state, &self.loader);
            }
            PanelInteraction::ReloadRequested => {
                ApplicationCoordinator::reload_feed(&mut self.state, &self.loader);
            }
            PanelInteraction::BannerPressed(render_index) => {
                ApplicationCoordinator::handle_banner_pressed(&mut self.state, render_index);
            }
            PanelInteraction::DotPressed(index) => {
                ApplicationCoordinator::handle_dot_pressed(&mut self.state, index);
            }
            PanelInteraction::SettingsChanged => {
                ApplicationCoordinator::apply_settings(&mut self.state);
            }
        }
    }

    /// Writes dirty settings and the feed cache.
    fn persist(&mut self, storage: &mut dyn eframe::Storage) {
        if self.state.settings_dirty {
            SettingsCoordinator::save_carousel_config(storage, &self.state.settings);
            self.state.settings_dirty = false;
        }
        if self.state.feed_dirty {
            match self.state.feed.feed() {
                Some(feed) => self.feed_cache.put(storage, feed, unix_now()),
                None => self.feed_cache.invalidate(storage),
            }
            self.state.feed_dirty = false;
        }
    }
}

impl eframe::App for CarouselViewerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_carousel_config(storage, &self.state.settings);
        self.persist(storage);
    }

    /// Main update loop.
    ///
    /// 1. Check for async loading completion
    /// 2. Apply theme
    /// 3. Fire due carousel timers
    /// 4. Load initial file if specified via command line
    /// 5. Render all panels and handle their interactions
    /// 6. Persist what changed
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        ApplicationCoordinator::tick_carousel(&mut self.state);

        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            self.handle_panel_interaction(interaction, ctx);
        }

        // Persist during the frame for crash resilience
        if let Some(storage) = frame.storage_mut() {
            storage.set_string("theme_preference", self.state.theme.current_theme_name().to_string());
            self.persist(storage);
        }
    }
}
