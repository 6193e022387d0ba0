//! Carousel panel UI rendering
//!
//! Paints the banner strip and its pagination dots, feeds pointer input to
//! the strip, and reports snap completion to the carousel as the end of a
//! momentum scroll.

use std::time::Instant;

use eframe::egui;
use egui::{Align2, FontId, Rect, Sense, Stroke, StrokeKind};
use rcarousel::{adjust_brightness, hex_to_color32, ThemeColors};

use crate::app::AppState;
use crate::ui::input::{handle_strip_input, StripInputResult};
use crate::utils::format_page;

const STRIP_HEIGHT: f32 = 180.0;
const SLIDE_ROUNDING: f32 = 8.0;
const SLIDE_PADDING: f32 = 16.0;
const DOT_SPACING: f32 = 16.0;
const DOT_RADIUS: f32 = 4.0;
const HOVER_BRIGHTNESS: f32 = 1.15;

/// Result of user interaction with the carousel panel
pub enum CarouselPanelInteraction {
    /// A slide was tapped (render index)
    BannerPressed(usize),
    /// A pagination dot was clicked (logical index)
    DotPressed(usize),
}

/// Renders the carousel strip, or a placeholder when nothing is mounted.
pub fn render_carousel_panel(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    state: &mut AppState,
    is_loading: bool,
    colors: &ThemeColors,
) -> Option<CarouselPanelInteraction> {
    if is_loading {
        ui.centered_and_justified(|ui| {
            ui.spinner();
        });
        return None;
    }

    if !state.carousel.is_mounted() {
        ui.centered_and_justified(|ui| {
            ui.label("No feed loaded. Open a feed file or generate a virtual feed.");
        });
        return None;
    }

    // Slides fill the panel width; re-align the carousel when it changes.
    let width = ui.available_width().max(1.0);
    if state.carousel.set_measured_width(width) {
        state.carousel.apply_settings(&state.settings);
    }

    let now = Instant::now();
    let viewport = state.carousel.viewport().clone();
    let Some(carousel) = state.carousel.carousel_mut() else {
        return None;
    };

    if carousel.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("This feed has no banners.");
        });
        return None;
    }

    let (strip_rect, response) = ui.allocate_exact_size(egui::vec2(width, STRIP_HEIGHT), Sense::click_and_drag());

    let mut interaction = None;
    if let StripInputResult::Pressed(render_index) =
        handle_strip_input(ctx, strip_rect, &response, carousel, &viewport, now)
    {
        interaction = Some(CarouselPanelInteraction::BannerPressed(render_index));
    }

    let settled = viewport.borrow_mut().advance(now);
    if let Some(offset) = settled {
        carousel.on_momentum_scroll_end(offset);
    }

    let (offset, animating) = {
        let viewport = viewport.borrow();
        (viewport.offset(), viewport.is_animating() || viewport.is_dragging())
    };

    let config = carousel.config();
    let stride = config.item_stride();
    let item_width = config.item_width;

    let hover_pos = if animating { None } else { response.hover_pos() };

    let painter = ui.painter_at(strip_rect);
    painter.rect_filled(strip_rect, SLIDE_ROUNDING, colors.extreme_background);

    for (render_index, banner) in carousel.render_sequence().iter().enumerate() {
        let left = strip_rect.left() + render_index as f32 * stride - offset;
        if left > strip_rect.right() || left + item_width < strip_rect.left() {
            continue;
        }

        let slide = Rect::from_min_size(egui::pos2(left, strip_rect.top()), egui::vec2(item_width, STRIP_HEIGHT));
        let mut fill = hex_to_color32(&banner.color);
        if hover_pos.is_some_and(|pos| slide.contains(pos)) {
            fill = adjust_brightness(fill, HOVER_BRIGHTNESS);
        }
        painter.rect_filled(slide, SLIDE_ROUNDING, fill);
        painter.rect_stroke(slide, SLIDE_ROUNDING, Stroke::new(1.0, colors.slide_border), StrokeKind::Inside);

        let text_left = slide.left() + SLIDE_PADDING;
        painter.text(
            egui::pos2(text_left, slide.top() + SLIDE_PADDING),
            Align2::LEFT_TOP,
            &banner.sponsor,
            FontId::proportional(13.0),
            colors.slide_text.gamma_multiply(0.8),
        );
        painter.text(
            egui::pos2(text_left, slide.center().y),
            Align2::LEFT_CENTER,
            &banner.title,
            FontId::proportional(24.0),
            colors.slide_text,
        );
        if let Some(subtitle) = &banner.subtitle {
            painter.text(
                egui::pos2(text_left, slide.bottom() - SLIDE_PADDING),
                Align2::LEFT_BOTTOM,
                subtitle,
                FontId::proportional(14.0),
                colors.slide_text,
            );
        }
    }

    if response.hovered() && !animating {
        ctx.set_cursor_icon(egui::CursorIcon::Grab);
    }

    // Pagination dots
    let page_count = carousel.page_count();
    let current = carousel.current_index();
    if page_count > 1 {
        let (dots_rect, _) = ui.allocate_exact_size(egui::vec2(width, DOT_SPACING + 4.0), Sense::hover());
        let first_x = dots_rect.center().x - (page_count - 1) as f32 * DOT_SPACING / 2.0;
        for index in 0..page_count {
            let center = egui::pos2(first_x + index as f32 * DOT_SPACING, dots_rect.center().y);
            let hit = Rect::from_center_size(center, egui::vec2(DOT_SPACING, DOT_SPACING));
            let dot = ui.interact(hit, ui.id().with(("carousel_dot", index)), Sense::click());

            let color = if index == current { colors.dot_active } else { colors.dot_inactive };
            let radius = if dot.hovered() { DOT_RADIUS + 1.0 } else { DOT_RADIUS };
            ui.painter().circle_filled(center, radius, color);

            if dot.clicked() {
                interaction = Some(CarouselPanelInteraction::DotPressed(index));
            }
        }
    }

    ui.vertical_centered(|ui| {
        ui.colored_label(colors.text_dim, format_page(current, page_count));
    });

    // Keep frames coming while the strip moves, otherwise wake for the next timer.
    if animating {
        ctx.request_repaint();
    } else if let Some(deadline) = carousel.next_deadline() {
        ctx.request_repaint_after(deadline.saturating_duration_since(now));
    }

    interaction
}
