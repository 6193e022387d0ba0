//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, settings, carousel, details, status)
//! and collects their interactions for the application coordinator.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::ui::{carousel_panel, details_panel, header, settings_panel, status_bar};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a feed file
    OpenFileRequested(std::path::PathBuf),
    /// User requested a generated feed
    OpenVirtualFeedRequested,
    /// User requested to re-read the current feed
    ReloadRequested,
    /// A slide was tapped (render index)
    BannerPressed(usize),
    /// A pagination dot was clicked (logical index)
    DotPressed(usize),
    /// A setting was edited
    SettingsChanged,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from the eframe::App::update() implementation. At most one
    /// interaction is reported per frame; later panels win.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;
        let is_loading = loader.is_loading();

        let theme_colors = state.theme.current_theme().colors.clone();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state, is_loading) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => PanelInteraction::OpenFileRequested(path),
                    header::HeaderInteraction::OpenVirtualFeedRequested => PanelInteraction::OpenVirtualFeedRequested,
                    header::HeaderInteraction::ReloadRequested => PanelInteraction::ReloadRequested,
                });
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        if state.show_settings {
            egui::SidePanel::right("settings_panel")
                .default_width(260.0)
                .resizable(true)
                .show(ctx, |ui| {
                    if settings_panel::render_settings_panel(ui, state) {
                        interaction = Some(PanelInteraction::SettingsChanged);
                    }
                });
        }

        egui::TopBottomPanel::bottom("details_panel")
            .default_height(ctx.content_rect().height() * 0.35)
            .resizable(true)
            .show(ctx, |ui| {
                egui::Frame::default().inner_margin(4.0).show(ui, |ui| {
                    details_panel::render_details_panel(ui, state, &theme_colors);
                });
            });

        let carousel_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(12))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(carousel_frame)
            .show(ctx, |ui| {
                ui.heading("Sponsored");
                ui.separator();

                if let Some(panel_interaction) =
                    carousel_panel::render_carousel_panel(ui, ctx, state, is_loading, &theme_colors)
                {
                    interaction = Some(match panel_interaction {
                        carousel_panel::CarouselPanelInteraction::BannerPressed(render_index) => {
                            PanelInteraction::BannerPressed(render_index)
                        }
                        carousel_panel::CarouselPanelInteraction::DotPressed(index) => {
                            PanelInteraction::DotPressed(index)
                        }
                    });
                }
            });

        interaction
    }
}
