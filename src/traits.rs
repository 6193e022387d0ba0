//! Collaborator traits consumed by the carousel.
//!
//! The carousel is host-surface-agnostic: it only knows how to ask a
//! viewport to scroll, and how to identify the items it rotates through.

/// An item that can be shown in a carousel slide.
///
/// Only identity matters to the carousel; rendering is up to the host.
pub trait DisplayItem {
    /// Returns a key that is stable for the lifetime of the item.
    fn key(&self) -> &str;
}

/// A horizontally scrollable rendering surface.
///
/// The carousel holds viewports by weak reference and issues commands only;
/// it never owns the viewport's lifecycle.
pub trait ScrollViewport {
    /// Scrolls to a horizontal offset in pixels.
    ///
    /// `animated == false` must reposition instantaneously (used to hide the
    /// seam between a cloned slide and its real counterpart).
    fn scroll_to(&mut self, offset: f32, animated: bool);

    /// Returns false once the surface has been torn down.
    ///
    /// Commands issued to a dead viewport are skipped.
    fn is_alive(&self) -> bool {
        true
    }
}

impl DisplayItem for String {
    fn key(&self) -> &str {
        self
    }
}

impl DisplayItem for &'static str {
    fn key(&self) -> &str {
        self
    }
}
