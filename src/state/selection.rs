//! Banner selection state.
//!
//! The carousel reports taps through a callback; this state owns the
//! mailbox that callback writes into and the per-banner tap counts.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use rcarousel::{Banner, SelectHandler};

/// State related to banner activation.
///
/// Responsibilities:
/// - Holding the most recently tapped banner
/// - Counting taps per banner id for the details panel
#[derive(Debug, Default)]
pub struct SelectionState {
    /// Written by the carousel's selection callback
    pressed: Rc<RefCell<Option<Banner>>>,
    /// Currently selected banner
    selected: Option<Banner>,
    /// Taps per banner id since the feed was loaded
    tap_counts: HashMap<String, u32>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the callback to hand to the carousel.
    pub fn select_handler(&self) -> SelectHandler<Banner> {
        let pressed = Rc::clone(&self.pressed);
        Box::new(move |banner: &Banner| {
            *pressed.borrow_mut() = Some(banner.clone());
        })
    }

    /// Moves a banner reported by the callback into the selection.
    ///
    /// Returns the newly selected banner, if there was one.
    pub fn take_pressed(&mut self) -> Option<&Banner> {
        let banner = self.pressed.borrow_mut().take()?;
        *self.tap_counts.entry(banner.id.clone()).or_insert(0) += 1;
        self.selected = Some(banner);
        self.selected.as_ref()
    }

    // ===== Queries =====

    pub fn selected(&self) -> Option<&Banner> {
        self.selected.as_ref()
    }

    pub fn tap_count(&self, banner_id: &str) -> u32 {
        self.tap_counts.get(banner_id).copied().unwrap_or(0)
    }

    pub fn total_taps(&self) -> u32 {
        self.tap_counts.values().sum()
    }

    // ===== Mutations =====

    /// Clears selection and counts (e.g. when a new feed loads).
    pub fn clear(&mut self) {
        self.pressed.borrow_mut().take();
        self.selected = None;
        self.tap_counts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_feeds_selection() {
        let mut selection = SelectionState::new();
        let mut handler = selection.select_handler();

        handler(&Banner::new("a", "Title", "Sponsor"));
        handler(&Banner::new("b", "Other", "Sponsor"));

        assert_eq!(selection.take_pressed().map(|b| b.id.as_str()), Some("b"));
        assert!(selection.take_pressed().is_none());
        assert_eq!(selection.tap_count("b"), 1);
        assert_eq!(selection.tap_count("a"), 0);
    }

    #[test]
    fn test_clear_resets_counts() {
        let mut selection = SelectionState::new();
        let mut handler = selection.select_handler();
        handler(&Banner::new("a", "Title", "Sponsor"));
        selection.take_pressed();

        selection.clear();

        assert!(selection.selected().is_none());
        assert_eq!(selection.total_taps(), 0);
    }
}
