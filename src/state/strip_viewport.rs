//! Scroll state of the banner strip.
//!
//! `StripViewport` is the rendering surface the carousel commands. It keeps
//! the horizontal offset, follows the pointer during a drag, and on release
//! animates to the nearest slide. When that snap animation comes to rest it
//! reports the final offset, which the host forwards to the carousel as the
//! momentum-scroll-end event.

use std::time::{Duration, Instant};

use rcarousel::circular;
use rcarousel::ScrollViewport;

/// Seconds of pointer velocity projected forward when choosing a snap target.
const FLING_PROJECTION_SECS: f32 = 0.15;

/// Eased interpolation between two offsets.
#[derive(Debug, Clone, Copy)]
struct ScrollTween {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
}

impl ScrollTween {
    fn new(from: f32, to: f32, start: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration: duration.max(Duration::from_millis(1)),
        }
    }

    fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }

    fn sample(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        let t = (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * smoothstep(t)
    }
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Horizontal scroll state of the banner strip.
#[derive(Debug, Clone)]
pub struct StripViewport {
    offset: f32,
    tween: Option<ScrollTween>,
    /// True while the snap animation after a release is running
    settling: bool,
    dragging: bool,
    alive: bool,
    animation: Duration,
}

impl Default for StripViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl StripViewport {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            tween: None,
            settling: false,
            dragging: false,
            alive: true,
            animation: Duration::from_millis(rcarousel::config::DEFAULT_SNAP_ANIMATION_MS),
        }
    }

    // ===== Queries =====

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// True while an animation is running and frames should keep coming.
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    // ===== Lifecycle =====

    /// Marks the surface as mounted again and resets it.
    pub fn mount(&mut self) {
        self.offset = 0.0;
        self.tween = None;
        self.settling = false;
        self.dragging = false;
        self.alive = true;
    }

    /// Marks the surface as gone; later scroll commands are ignored.
    pub fn unmount(&mut self) {
        self.alive = false;
        self.tween = None;
        self.settling = false;
        self.dragging = false;
    }

    pub fn set_animation(&mut self, animation: Duration) {
        self.animation = animation;
    }

    // ===== Pointer interaction =====

    /// Pointer went down on the strip. Interrupts any running animation.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
        self.settling = false;
        self.tween = None;
    }

    /// Pointer moved by `delta_x` pixels (positive = rightwards).
    pub fn drag_by(&mut self, delta_x: f32, max_offset: f32) {
        if !self.dragging {
            return;
        }
        self.offset = (self.offset - delta_x).clamp(0.0, max_offset.max(0.0));
    }

    /// Pointer released with horizontal velocity `velocity_x` (px/s).
    ///
    /// Starts the snap animation towards the slide the fling projects to.
    pub fn release(&mut self, velocity_x: f32, stride: f32, render_len: usize, now: Instant) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        let projected = self.offset - velocity_x * FLING_PROJECTION_SECS;
        let target_index = circular::nearest_render_index(projected, stride, render_len);
        let target = circular::offset_of(target_index, stride);
        self.tween = Some(ScrollTween::new(self.offset, target, now, self.animation));
        self.settling = true;
    }

    /// Advances animations to `now`.
    ///
    /// Returns the resting offset exactly once when a post-release snap
    /// completes, so the host can report the end of the momentum scroll.
    pub fn advance(&mut self, now: Instant) -> Option<f32> {
        let tween = self.tween?;
        self.offset = tween.sample(now);
        if !tween.is_done(now) {
            return None;
        }
        self.offset = tween.to;
        self.tween = None;
        if std::mem::take(&mut self.settling) {
            Some(self.offset)
        } else {
            None
        }
    }
}

impl ScrollViewport for StripViewport {
    fn scroll_to(&mut self, offset: f32, animated: bool) {
        if self.dragging {
            // The pointer owns the strip while dragging.
            return;
        }
        if animated {
            self.tween = Some(ScrollTween::new(self.offset, offset, Instant::now(), self.animation));
        } else {
            self.offset = offset;
            self.tween = None;
        }
        self.settling = false;
    }

    fn is_alive(&self) -> bool {
        self.alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_scroll_sets_offset() {
        let mut view = StripViewport::new();
        view.scroll_to(320.0, false);
        assert_eq!(view.offset(), 320.0);
        assert!(!view.is_animating());
    }

    #[test]
    fn test_release_snaps_and_reports_once() {
        let t0 = Instant::now();
        let mut view = StripViewport::new();
        view.set_animation(Duration::from_millis(100));

        view.begin_drag();
        view.drag_by(-140.0, 1000.0);
        assert_eq!(view.offset(), 140.0);
        view.release(0.0, 100.0, 5, t0);

        assert_eq!(view.advance(t0 + Duration::from_millis(50)), None);
        assert_eq!(view.advance(t0 + Duration::from_millis(100)), Some(100.0));
        assert_eq!(view.advance(t0 + Duration::from_millis(200)), None);
    }

    #[test]
    fn test_fling_projects_to_next_slide() {
        let t0 = Instant::now();
        let mut view = StripViewport::new();
        view.scroll_to(100.0, false);

        view.begin_drag();
        view.drag_by(-30.0, 1000.0);
        // Fast leftward fling: content moves left, offset grows.
        view.release(-500.0, 100.0, 5, t0);

        assert_eq!(view.advance(t0 + Duration::from_secs(1)), Some(200.0));
    }

    #[test]
    fn test_drag_clamped_to_strip() {
        let mut view = StripViewport::new();
        view.begin_drag();
        view.drag_by(50.0, 400.0);
        assert_eq!(view.offset(), 0.0);
        view.drag_by(-900.0, 400.0);
        assert_eq!(view.offset(), 400.0);
    }

    #[test]
    fn test_programmatic_animation_does_not_report_settle() {
        let t0 = Instant::now();
        let mut view = StripViewport::new();
        view.scroll_to(200.0, true);
        assert!(view.is_animating());
        assert_eq!(view.advance(t0 + Duration::from_secs(5)), None);
        assert_eq!(view.offset(), 200.0);
    }

    #[test]
    fn test_unmounted_reports_dead() {
        let mut view = StripViewport::new();
        view.unmount();
        assert!(!view.is_alive());
        view.mount();
        assert!(view.is_alive());
    }
}
