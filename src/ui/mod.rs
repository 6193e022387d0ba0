//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the banner viewer:
//! - Header panel (feed controls, settings toggle, theme selector)
//! - Carousel panel (banner strip with pagination dots)
//! - Details panel (tapped banner details)
//! - Settings panel (carousel timing and spacing)
//! - Status bar (feed and carousel status)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (strip drag and tap)

pub mod header;
pub mod carousel_panel;
pub mod details_panel;
pub mod settings_panel;
pub mod status_bar;
pub mod panel_manager;
pub mod input;
