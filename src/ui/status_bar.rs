//! Status bar UI rendering
//!
//! Handles the bottom status bar: memory, feed origin and carousel phase.

use std::time::Instant;

use eframe::egui;
use egui::RichText;
use rcarousel::Phase;
use crate::app::AppState;
use crate::utils::{format_duration, format_memory_mb, format_page, get_current_memory_mb};

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "Auto",
        Phase::Dragging => "Dragging",
        Phase::ProgrammaticJump => "Wrapping",
        Phase::CoolingDown => "Resuming",
    }
}

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());

        let (Some(feed), Some(origin)) = (state.feed.feed(), state.feed.origin()) else {
            ui.label(RichText::new("| No feed loaded").strong());
            return;
        };

        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(format!(
            "{} | Version: {} | Banners: {}",
            origin.describe(),
            feed.version,
            feed.len()
        )).strong());

        if let Some(carousel) = state.carousel.carousel() {
            ui.label(RichText::new("|").strong());

            let mut text = format!(
                "Page: {} | {}",
                format_page(carousel.current_index(), carousel.page_count()),
                phase_label(carousel.phase())
            );
            if let Some(deadline) = carousel.next_deadline() {
                let remaining = deadline.saturating_duration_since(Instant::now());
                text.push_str(&format!(" in {}", format_duration(remaining)));
            } else if !carousel.is_circular() {
                text.push_str(" (single banner)");
            }
            ui.label(RichText::new(text).strong());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_label() {
        assert_eq!(phase_label(Phase::Idle), "Auto");
        assert_eq!(phase_label(Phase::ProgrammaticJump), "Wrapping");
    }
}
