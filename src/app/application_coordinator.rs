//! Application-level coordination and workflow management.
//!
//! Handles feed loading, mounting the carousel over a feed, and routing
//! panel interactions into the carousel and selection state.

use std::path::PathBuf;

use rcarousel::{BannerFeed, PollOutcome};
use tracing::{info, warn};

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use crate::state::FeedOrigin;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Starts loading a feed file in the background.
    ///
    /// The previous carousel is unmounted immediately so the loading
    /// indicator shows.
    pub fn open_file(state: &mut AppState, loader: &mut AsyncLoader, path: PathBuf, ctx: &egui::Context) {
        state.reset_feed_state();
        loader.start_file_load(path, ctx);
    }

    /// Applies a finished background load. Returns true if one completed.
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { feed, path } => {
                Self::install_feed(state, feed, FeedOrigin::File(path));
                true
            }
            LoadResult::Error(error_msg) => {
                warn!("feed load failed: {}", error_msg);
                state.error_message = Some(format!("Error loading feed: {}", error_msg));
                state.feed.clear();
                true
            }
            LoadResult::None => false,
        }
    }

    /// Generates a virtual feed; each call uses the next seed.
    pub fn open_virtual_feed(state: &mut AppState, loader: &AsyncLoader) {
        let seed = state.virtual_seed;
        match loader.load_virtual_feed(seed) {
            Ok(feed) => {
                state.reset_feed_state();
                Self::install_feed(state, feed, FeedOrigin::Virtual { seed });
                state.virtual_seed = seed.wrapping_add(1);
            }
            Err(e) => {
                state.error_message = Some(format!("Error generating virtual feed: {:#}", e));
            }
        }
    }

    /// Shows a feed restored from the persistent cache.
    pub fn restore_cached_feed(state: &mut AppState, feed: BannerFeed) {
        info!(banners = feed.len(), "restoring cached feed");
        Self::install_feed(state, feed, FeedOrigin::Cache);
        state.feed_dirty = false;
    }

    /// Re-reads the current feed and refreshes the mounted carousel in place.
    ///
    /// The carousel goes back to the first banner; selection is kept.
    pub fn reload_feed(state: &mut AppState, loader: &AsyncLoader) {
        let reloaded = match state.feed.origin().cloned() {
            Some(FeedOrigin::File(path)) => loader.load_file_now(&path).map(|feed| (feed, FeedOrigin::File(path))),
            Some(FeedOrigin::Virtual { seed }) => {
                loader.load_virtual_feed(seed).map(|feed| (feed, FeedOrigin::Virtual { seed }))
            }
            Some(FeedOrigin::Cache) | None => return,
        };

        match reloaded {
            Ok((feed, origin)) => {
                if !state.carousel.refresh(feed.banners.clone()) {
                    state.carousel.mount(
                        feed.banners.clone(),
                        &state.settings,
                        state.selection.select_handler(),
                    );
                }
                state.feed.load_feed(feed, origin);
                state.error_message = None;
                state.feed_dirty = true;
            }
            Err(e) => {
                state.error_message = Some(format!("Error reloading feed: {:#}", e));
            }
        }
    }

    /// Fires carousel timers. Called once per frame.
    ///
    /// Settings held back during a drag are applied first.
    pub fn tick_carousel(state: &mut AppState) -> PollOutcome {
        state.carousel.apply_pending_settings();
        state
            .carousel
            .carousel_mut()
            .map(|carousel| carousel.poll())
            .unwrap_or_default()
    }

    /// A slide was tapped at `render_index`.
    pub fn handle_banner_pressed(state: &mut AppState, render_index: usize) {
        if let Some(carousel) = state.carousel.carousel_mut() {
            carousel.on_item_pressed(render_index);
        }
        if let Some(banner) = state.selection.take_pressed() {
            info!(id = %banner.id, "banner selected");
        }
    }

    /// A pagination dot was clicked.
    pub fn handle_dot_pressed(state: &mut AppState, index: usize) {
        if let Some(carousel) = state.carousel.carousel_mut() {
            carousel.go_to(index, true);
        }
    }

    /// Pushes edited settings into the carousel and marks them for saving.
    pub fn apply_settings(state: &mut AppState) {
        state.settings = state.settings.clone().validated_or_default();
        state.carousel.apply_settings(&state.settings);
        state.settings_dirty = true;
    }

    fn install_feed(state: &mut AppState, feed: BannerFeed, origin: FeedOrigin) {
        info!(origin = %origin.describe(), banners = feed.len(), "installing feed");
        state.selection.clear();
        state
            .carousel
            .mount(feed.banners.clone(), &state.settings, state.selection.select_handler());
        state.feed.load_feed(feed, origin);
        state.error_message = None;
        state.feed_dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_virtual_feed_mounts_carousel() {
        let mut state = AppState::default();
        let loader = AsyncLoader::new();

        ApplicationCoordinator::open_virtual_feed(&mut state, &loader);

        assert!(state.carousel.is_mounted());
        assert_eq!(state.virtual_seed, 43);
        assert!(state.feed_dirty);
        assert!(matches!(state.feed.origin(), Some(FeedOrigin::Virtual { seed: 42 })));
    }

    #[test]
    fn test_banner_press_selects() {
        let mut state = AppState::default();
        let loader = AsyncLoader::new();
        ApplicationCoordinator::open_virtual_feed(&mut state, &loader);
        let first_id = state.feed.feed().map(|f| f.banners[0].id.clone());

        // Render index 1 is the first real banner.
        ApplicationCoordinator::handle_banner_pressed(&mut state, 1);

        assert_eq!(state.selection.selected().map(|b| b.id.clone()), first_id);
        assert_eq!(state.selection.total_taps(), 1);
    }

    #[test]
    fn test_reload_refreshes_to_first() {
        let mut state = AppState::default();
        let loader = AsyncLoader::new();
        ApplicationCoordinator::open_virtual_feed(&mut state, &loader);
        ApplicationCoordinator::handle_dot_pressed(&mut state, 2);
        assert_eq!(state.carousel.carousel().map(|c| c.current_index()), Some(2));

        ApplicationCoordinator::reload_feed(&mut state, &loader);

        assert_eq!(state.carousel.carousel().map(|c| c.current_index()), Some(0));
    }

    #[test]
    fn test_tick_applies_settings_held_during_drag() {
        let mut state = AppState::default();
        let loader = AsyncLoader::new();
        ApplicationCoordinator::open_virtual_feed(&mut state, &loader);

        state.carousel.carousel_mut().unwrap().on_drag_start();
        state.settings.auto_rotate_ms = 2_000;
        ApplicationCoordinator::apply_settings(&mut state);
        ApplicationCoordinator::tick_carousel(&mut state);
        assert!(state.carousel.has_pending_settings());

        let offset = state.carousel.viewport().borrow().offset();
        state.carousel.carousel_mut().unwrap().on_momentum_scroll_end(offset);
        ApplicationCoordinator::tick_carousel(&mut state);

        assert!(!state.carousel.has_pending_settings());
        assert_eq!(state.carousel.carousel().map(|c| c.config().auto_rotate_ms), Some(2_000));
    }

    #[test]
    fn test_restore_cached_feed_not_dirty() {
        let mut state = AppState::default();
        let feed = AsyncLoader::new().load_virtual_feed(1).unwrap();

        ApplicationCoordinator::restore_cached_feed(&mut state, feed);

        assert!(!state.feed_dirty);
        assert_eq!(state.feed.origin(), Some(&FeedOrigin::Cache));
    }
}
