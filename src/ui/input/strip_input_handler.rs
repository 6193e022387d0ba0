//! Pointer input for the banner strip.
//!
//! Translates egui drag and click responses into strip viewport movement
//! and carousel events:
//! - Drag start pauses auto-advance (`on_drag_start`)
//! - Drag moves the strip under the pointer
//! - Release starts the snap animation; its end is reported separately
//! - Click on a slide resolves to a render index

use std::cell::RefCell;
use std::time::Instant;

use eframe::egui;

use crate::state::{BannerCarousel, StripViewport};

/// Result of strip input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripInputResult {
    /// No interaction occurred
    None,
    /// A drag started or is in progress
    Dragging,
    /// The pointer was released after a drag
    Released,
    /// A slide was clicked (render index)
    Pressed(usize),
}

/// Handles pointer input on the strip.
///
/// The viewport borrow is released before any carousel call, because the
/// carousel itself borrows the viewport to issue scroll commands.
pub fn handle_strip_input(
    ctx: &egui::Context,
    strip_rect: egui::Rect,
    response: &egui::Response,
    carousel: &mut BannerCarousel,
    viewport: &RefCell<StripViewport>,
    now: Instant,
) -> StripInputResult {
    let config = carousel.config();
    let stride = config.item_stride();
    let item_width = config.item_width;
    let render_len = carousel.render_sequence().len();
    let max_offset = render_len.saturating_sub(1) as f32 * stride;

    if response.drag_started() {
        viewport.borrow_mut().begin_drag();
        carousel.on_drag_start();
    }

    if response.dragged() {
        viewport.borrow_mut().drag_by(response.drag_delta().x, max_offset);
        return StripInputResult::Dragging;
    }

    if response.drag_stopped() {
        let velocity_x = ctx.input(|i| i.pointer.velocity().x);
        viewport.borrow_mut().release(velocity_x, stride, render_len, now);
        return StripInputResult::Released;
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let offset = viewport.borrow().offset();
            if let Some(index) = slide_at(pos.x - strip_rect.left() + offset, stride, item_width, render_len) {
                return StripInputResult::Pressed(index);
            }
        }
    }

    StripInputResult::None
}

/// Render index of the slide under strip-space `x`, excluding the gaps.
fn slide_at(x: f32, stride: f32, item_width: f32, render_len: usize) -> Option<usize> {
    if x < 0.0 || stride <= 0.0 {
        return None;
    }
    let index = (x / stride).floor() as usize;
    let within = x - index as f32 * stride;
    (index < render_len && within <= item_width).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_at() {
        assert_eq!(slide_at(50.0, 110.0, 100.0, 5), Some(0));
        assert_eq!(slide_at(105.0, 110.0, 100.0, 5), None);
        assert_eq!(slide_at(230.0, 110.0, 100.0, 5), Some(2));
        assert_eq!(slide_at(600.0, 110.0, 100.0, 5), None);
        assert_eq!(slide_at(-1.0, 110.0, 100.0, 5), None);
    }
}
