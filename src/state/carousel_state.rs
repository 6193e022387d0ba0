//! Ownership of the mounted banner carousel.
//!
//! The carousel holds the strip viewport by weak reference; this state owns
//! the strong handle, so unmounting the strip can never leave the carousel
//! scrolling a surface that is gone.

use std::cell::RefCell;
use std::rc::Rc;

use rcarousel::{Banner, CarouselConfig, Phase, RotatingCarousel, SelectHandler, SystemClock};

use crate::state::StripViewport;

/// The carousel type hosted by the viewer.
pub type BannerCarousel = RotatingCarousel<Banner, StripViewport, SystemClock>;

/// Mounted carousel plus the strip it drives.
pub struct CarouselState {
    viewport: Rc<RefCell<StripViewport>>,
    carousel: Option<BannerCarousel>,
    /// Slide width last measured from the layout
    measured_width: Option<f32>,
    /// Settings held back until the strip is released and has settled
    pending_config: Option<CarouselConfig>,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselState {
    pub fn new() -> Self {
        Self {
            viewport: Rc::new(RefCell::new(StripViewport::new())),
            carousel: None,
            measured_width: None,
            pending_config: None,
        }
    }

    // ===== Queries =====

    pub fn carousel(&self) -> Option<&BannerCarousel> {
        self.carousel.as_ref()
    }

    pub fn carousel_mut(&mut self) -> Option<&mut BannerCarousel> {
        self.carousel.as_mut()
    }

    pub fn viewport(&self) -> &Rc<RefCell<StripViewport>> {
        &self.viewport
    }

    pub fn is_mounted(&self) -> bool {
        self.carousel.is_some()
    }

    pub fn has_pending_settings(&self) -> bool {
        self.pending_config.is_some()
    }

    /// Effective configuration: user settings with the measured slide width.
    pub fn effective_config(&self, settings: &CarouselConfig) -> CarouselConfig {
        match self.measured_width {
            Some(width) => settings.clone().with_item_width(width),
            None => settings.clone(),
        }
    }

    // ===== Mutations =====

    /// Mounts a fresh carousel over `banners`, disposing any previous one.
    pub fn mount(&mut self, banners: Vec<Banner>, settings: &CarouselConfig, on_select: SelectHandler<Banner>) {
        self.unmount();
        let config = self.effective_config(settings);
        {
            let mut viewport = self.viewport.borrow_mut();
            viewport.mount();
            viewport.set_animation(config.snap_animation());
        }
        let mut carousel = RotatingCarousel::new(banners, config, Rc::downgrade(&self.viewport), SystemClock);
        carousel.set_on_select(Some(on_select));
        self.carousel = Some(carousel);
    }

    /// Replaces the banners of the mounted carousel in place.
    ///
    /// Returns false if nothing is mounted.
    pub fn refresh(&mut self, banners: Vec<Banner>) -> bool {
        match self.carousel.as_mut() {
            Some(carousel) => {
                carousel.refresh(banners);
                true
            }
            None => false,
        }
    }

    /// Disposes the carousel and tears down the strip.
    pub fn unmount(&mut self) {
        self.pending_config = None;
        if let Some(mut carousel) = self.carousel.take() {
            carousel.dispose();
        }
        self.viewport.borrow_mut().unmount();
    }

    /// Applies new user settings to the mounted carousel.
    ///
    /// While a drag or its snap is in progress the strip belongs to the
    /// pointer, and re-aligning it would swallow the end of the snap. The
    /// settings are held until [`Self::apply_pending_settings`] finds the
    /// drag settled.
    pub fn apply_settings(&mut self, settings: &CarouselConfig) {
        let config = self.effective_config(settings);
        match self.carousel.as_mut() {
            Some(carousel) if carousel.phase() == Phase::Dragging => {
                self.pending_config = Some(config);
            }
            Some(carousel) => {
                self.pending_config = None;
                self.viewport.borrow_mut().set_animation(config.snap_animation());
                carousel.set_config(config);
            }
            None => {
                self.viewport.borrow_mut().set_animation(config.snap_animation());
            }
        }
    }

    /// Applies settings held back during a drag once it has settled.
    ///
    /// Returns true if settings were applied. Called once per frame.
    pub fn apply_pending_settings(&mut self) -> bool {
        let Some(carousel) = self.carousel.as_mut() else {
            self.pending_config = None;
            return false;
        };
        if carousel.phase() == Phase::Dragging {
            return false;
        }
        let Some(config) = self.pending_config.take() else {
            return false;
        };
        self.viewport.borrow_mut().set_animation(config.snap_animation());
        carousel.set_config(config);
        true
    }

    /// Records the slide width measured from the layout.
    ///
    /// Returns true when it changed enough to warrant re-applying settings.
    pub fn set_measured_width(&mut self, width: f32) -> bool {
        let changed = self
            .measured_width
            .map_or(true, |previous| (previous - width).abs() > 0.5);
        if changed {
            self.measured_width = Some(width);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn banners(n: usize) -> Vec<Banner> {
        (0..n)
            .map(|i| Banner::new(format!("b{i}"), format!("Banner {i}"), "Sponsor"))
            .collect()
    }

    #[test]
    fn test_mount_places_strip_on_first_banner() {
        let mut state = CarouselState::new();
        let settings = CarouselConfig::default();
        state.set_measured_width(300.0);

        state.mount(banners(3), &settings, Box::new(|_| {}));

        let stride = 300.0 + settings.item_gap;
        assert_eq!(state.viewport().borrow().offset(), stride);
        assert_eq!(state.carousel().map(|c| c.render_sequence().len()), Some(5));
    }

    #[test]
    fn test_unmount_disposes() {
        let mut state = CarouselState::new();
        state.mount(banners(2), &CarouselConfig::default(), Box::new(|_| {}));

        state.unmount();

        assert!(!state.is_mounted());
        assert!(!rcarousel::ScrollViewport::is_alive(&*state.viewport().borrow()));
    }

    #[test]
    fn test_resize_during_snap_still_settles() {
        let t0 = Instant::now();
        let mut state = CarouselState::new();
        let settings = CarouselConfig {
            item_gap: 0.0,
            ..Default::default()
        };
        state.set_measured_width(300.0);
        state.mount(banners(3), &settings, Box::new(|_| {}));

        // Swipe one slide forward and release.
        state.viewport().borrow_mut().begin_drag();
        state.carousel_mut().unwrap().on_drag_start();
        state.viewport().borrow_mut().drag_by(-280.0, 1200.0);
        state.viewport().borrow_mut().release(0.0, 300.0, 5, t0);

        // The window is resized while the snap is still running.
        assert!(state.set_measured_width(400.0));
        state.apply_settings(&settings);
        assert!(state.has_pending_settings());
        assert!(!state.apply_pending_settings());
        assert_eq!(state.carousel().map(|c| c.config().item_width), Some(300.0));

        let settled = state.viewport().borrow_mut().advance(t0 + Duration::from_secs(2));
        assert_eq!(settled, Some(600.0));
        assert!(state.carousel_mut().unwrap().on_momentum_scroll_end(600.0));

        let carousel = state.carousel().unwrap();
        assert_eq!(carousel.phase(), Phase::CoolingDown);
        assert_eq!(carousel.current_index(), 1);

        // Held settings land once the drag has settled, on the same banner.
        assert!(state.apply_pending_settings());
        assert!(!state.has_pending_settings());
        assert_eq!(state.carousel().map(|c| c.config().item_width), Some(400.0));
        assert_eq!(state.viewport().borrow().offset(), 800.0);
        assert_eq!(state.carousel().map(|c| c.current_index()), Some(1));
    }

    #[test]
    fn test_settings_apply_immediately_when_idle() {
        let mut state = CarouselState::new();
        let settings = CarouselConfig {
            item_gap: 0.0,
            ..Default::default()
        };
        state.set_measured_width(300.0);
        state.mount(banners(3), &settings, Box::new(|_| {}));

        state.set_measured_width(400.0);
        state.apply_settings(&settings);

        assert!(!state.has_pending_settings());
        assert_eq!(state.viewport().borrow().offset(), 400.0);
    }

    #[test]
    fn test_measured_width_hysteresis() {
        let mut state = CarouselState::new();
        assert!(state.set_measured_width(300.0));
        assert!(!state.set_measured_width(300.2));
        assert!(state.set_measured_width(310.0));
    }
}
