//! Circular auto-rotating carousel.
//!
//! `RotatingCarousel` owns the item list, the active index, and the
//! arbitration between user drags and the auto-advance timer. It fakes an
//! infinite strip by cloning the boundary items (see [`crate::circular`]) and
//! silently jumping from a clone to its real counterpart once a drag settles
//! on it.
//!
//! The carousel never blocks and never runs code on its own: the host feeds
//! it drag and scroll-end events, and calls [`RotatingCarousel::poll`] once
//! per frame so that due timers fire.

use std::cell::RefCell;
use std::fmt;
use std::rc::Weak;
use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::circular::{self, build_render_sequence, logical_index_of, render_index_of};
use crate::clock::{Clock, SystemClock};
use crate::config::CarouselConfig;
use crate::timer::Timer;
use crate::traits::{DisplayItem, ScrollViewport};

/// Who currently controls the scroll position.
///
/// `is_user_dragging` is "anything but `Idle`"; `is_programmatic_jump` is
/// exactly `ProgrammaticJump`. A seam jump only happens at the end of a
/// user drag, so it always carries a pending cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Auto-advance owns the carousel
    Idle,
    /// A user drag (or its momentum) is in progress
    Dragging,
    /// An instantaneous seam repositioning has been issued but not yet applied
    ProgrammaticJump,
    /// The drag has settled; auto-advance resumes when the cooldown elapses
    CoolingDown,
}

/// Timers that fired during a [`RotatingCarousel::poll`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollOutcome {
    /// The auto-advance timer moved to the next item
    pub ticked: bool,
    /// A seam jump finished settling
    pub jump_settled: bool,
    /// The post-drag cooldown elapsed and auto-advance resumed
    pub resumed: bool,
}

impl PollOutcome {
    pub fn any(&self) -> bool {
        self.ticked || self.jump_settled || self.resumed
    }
}

/// Callback invoked when a slide is activated (tapped).
pub type SelectHandler<T> = Box<dyn FnMut(&T)>;

/// A horizontally snapping carousel that appears to scroll forever.
pub struct RotatingCarousel<T, V: ?Sized, C = SystemClock> {
    items: Vec<T>,
    render_sequence: Vec<T>,
    current_index: usize,
    phase: Phase,
    config: CarouselConfig,
    viewport: Weak<RefCell<V>>,
    clock: C,
    auto_rotate: Timer,
    cooldown: Timer,
    jump_settle: Timer,
    on_select: Option<SelectHandler<T>>,
    disposed: bool,
}

impl<T, V, C> RotatingCarousel<T, V, C>
where
    T: DisplayItem + Clone,
    V: ScrollViewport + ?Sized,
    C: Clock,
{
    /// Creates a carousel over `items` and places the viewport on the first
    /// real item.
    ///
    /// When there are at least two items the placement is an instantaneous
    /// scroll to one stride (the cloned last item occupies position 0) and
    /// the auto-advance timer is armed. An invalid `config` is replaced by
    /// the defaults.
    pub fn new(items: Vec<T>, config: CarouselConfig, viewport: Weak<RefCell<V>>, clock: C) -> Self {
        let config = config.validated_or_default();
        let mut carousel = Self {
            render_sequence: build_render_sequence(&items),
            items,
            current_index: 0,
            phase: Phase::Idle,
            auto_rotate: Timer::repeating(config.auto_rotate_interval()),
            cooldown: Timer::once(config.resume_cooldown()),
            jump_settle: Timer::once(config.jump_settle()),
            config,
            viewport,
            clock,
            on_select: None,
            disposed: false,
        };
        carousel.place_on_first_item();
        carousel.arm_auto_rotate();
        debug!(
            items = carousel.items.len(),
            circular = carousel.is_circular(),
            "carousel initialized"
        );
        carousel
    }

    /// Installs the handler notified by [`Self::on_item_pressed`].
    pub fn with_on_select(mut self, handler: impl FnMut(&T) + 'static) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }

    /// Replaces the selection handler.
    pub fn set_on_select(&mut self, handler: Option<SelectHandler<T>>) {
        self.on_select = handler;
    }

    // ===== Queries =====

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The padded sequence the viewport renders.
    pub fn render_sequence(&self) -> &[T] {
        &self.render_sequence
    }

    /// Logical index of the active item. Always 0 when there are no items.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_item(&self) -> Option<&T> {
        self.items.get(self.current_index)
    }

    /// Number of pagination dots.
    pub fn page_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_circular(&self) -> bool {
        self.items.len() > 1
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_user_dragging(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn is_programmatic_jump(&self) -> bool {
        self.phase == Phase::ProgrammaticJump
    }

    /// True while the auto-advance timer is armed.
    pub fn is_auto_rotating(&self) -> bool {
        self.auto_rotate.is_armed()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Earliest instant at which [`Self::poll`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        [&self.auto_rotate, &self.cooldown, &self.jump_settle]
            .into_iter()
            .filter_map(Timer::deadline)
            .min()
    }

    // ===== Events =====

    /// The user put a finger (or pointer) on the strip.
    ///
    /// Pauses auto-advance and supersedes any cooldown left over from a
    /// previous drag, so a stale cooldown cannot resume the timer underneath
    /// this drag.
    pub fn on_drag_start(&mut self) {
        if self.disposed {
            return;
        }
        self.auto_rotate.cancel();
        if self.cooldown.cancel() {
            trace!("pending cooldown superseded by new drag");
        }
        self.jump_settle.cancel();
        self.set_phase(Phase::Dragging);
    }

    /// The strip came to rest at `offset_x` after a drag or fling.
    ///
    /// Returns false when the event was ignored (during a seam jump, or when
    /// there is nothing to show).
    pub fn on_momentum_scroll_end(&mut self, offset_x: f32) -> bool {
        if self.disposed || self.items.is_empty() {
            return false;
        }
        if self.phase == Phase::ProgrammaticJump {
            trace!(offset_x, "scroll end during seam jump ignored");
            return false;
        }

        let len = self.items.len();
        // A non-finite offset carries no position; keep the active slide.
        let render_index = if offset_x.is_finite() {
            circular::nearest_render_index(offset_x, self.config.item_stride(), self.render_sequence.len())
        } else {
            render_index_of(self.current_index, len)
        };
        let user_driven = self.phase != Phase::Idle;

        if !self.is_circular() {
            self.current_index = render_index.min(len - 1);
        } else if render_index == 0 {
            // Settled on the clone of the last item in front.
            self.jump(len, len - 1);
        } else if render_index == len + 1 {
            // Settled on the clone of the first item at the back.
            self.jump(1, 0);
        } else {
            self.current_index = render_index - 1;
        }

        if user_driven {
            self.cooldown.start(self.clock.now());
            if self.phase != Phase::ProgrammaticJump {
                self.set_phase(Phase::CoolingDown);
            }
        }
        debug!(offset_x, render_index, current = self.current_index, "scroll settled");
        true
    }

    /// Advances to the next item with an animated scroll.
    ///
    /// Skipped (not deferred) unless the carousel is idle. Returns whether
    /// the carousel advanced.
    pub fn tick(&mut self) -> bool {
        if self.disposed || self.phase != Phase::Idle || !self.is_circular() {
            return false;
        }
        let len = self.items.len();
        self.current_index = (self.current_index + 1) % len;
        self.scroll_to_render_index(render_index_of(self.current_index, len), true);
        trace!(current = self.current_index, "auto-advanced");
        true
    }

    /// Fires whatever timers are due. Call once per frame.
    pub fn poll(&mut self) -> PollOutcome {
        let mut outcome = PollOutcome::default();
        if self.disposed {
            return outcome;
        }
        let now = self.clock.now();

        if self.phase == Phase::ProgrammaticJump && self.jump_settle.poll(now) {
            outcome.jump_settled = true;
            if self.cooldown.is_armed() {
                self.set_phase(Phase::CoolingDown);
            } else {
                self.resume_auto_rotate();
            }
        }

        if self.phase == Phase::CoolingDown && self.cooldown.poll(now) {
            outcome.resumed = true;
            self.resume_auto_rotate();
        }

        if self.phase == Phase::Idle && self.auto_rotate.poll(now) {
            outcome.ticked = self.tick();
        }

        outcome
    }

    /// Jumps to a logical index (e.g. from a pagination dot).
    ///
    /// Ignored unless idle. Restarts the auto-advance period so the user gets
    /// a full interval on the chosen item.
    pub fn go_to(&mut self, index: usize, animated: bool) -> bool {
        if self.disposed || self.phase != Phase::Idle || index >= self.items.len() {
            return false;
        }
        self.current_index = index;
        self.scroll_to_render_index(render_index_of(index, self.items.len()), animated);
        self.arm_auto_rotate();
        true
    }

    /// A slide was tapped. Clones resolve to their real item.
    ///
    /// Pure pass-through: the carousel state does not change.
    pub fn on_item_pressed(&mut self, render_index: usize) -> Option<&T> {
        let logical = logical_index_of(render_index, self.items.len())?;
        let item = self.items.get(logical)?;
        if let Some(handler) = self.on_select.as_mut() {
            handler(item);
        }
        Some(item)
    }

    /// Replaces the items, resetting to the first one.
    pub fn refresh(&mut self, items: Vec<T>) {
        if self.disposed {
            warn!("refresh on a disposed carousel ignored");
            return;
        }
        self.cancel_timers();
        self.render_sequence = build_render_sequence(&items);
        self.items = items;
        self.current_index = 0;
        self.phase = Phase::Idle;
        self.place_on_first_item();
        self.arm_auto_rotate();
        debug!(items = self.items.len(), "carousel refreshed");
    }

    /// Applies new geometry and timing.
    ///
    /// The viewport is re-aligned to the active slide without animation, and
    /// an idle carousel restarts its auto-advance period.
    pub fn set_config(&mut self, config: CarouselConfig) {
        let config = config.validated_or_default();
        let stride_changed = config.item_stride() != self.config.item_stride();
        self.auto_rotate.set_period(config.auto_rotate_interval());
        self.cooldown.set_period(config.resume_cooldown());
        self.jump_settle.set_period(config.jump_settle());
        self.config = config;

        if self.disposed {
            return;
        }
        if stride_changed && !self.items.is_empty() {
            let render_index = render_index_of(self.current_index, self.items.len());
            self.scroll_to_render_index(render_index, false);
        }
        if self.phase == Phase::Idle {
            self.arm_auto_rotate();
        }
    }

    /// Cancels every timer. Safe to call more than once.
    ///
    /// Returns true only for the call that actually tore the carousel down.
    pub fn dispose(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        self.cancel_timers();
        self.phase = Phase::Idle;
        self.disposed = true;
        debug!("carousel disposed");
        true
    }

    // ===== Internals =====

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            trace!(from = ?self.phase, to = ?phase, "phase change");
            self.phase = phase;
        }
    }

    fn jump(&mut self, render_index: usize, logical: usize) {
        self.set_phase(Phase::ProgrammaticJump);
        self.auto_rotate.cancel();
        self.scroll_to_render_index(render_index, false);
        self.current_index = logical;
        self.jump_settle.start(self.clock.now());
        debug!(render_index, logical, "seam jump");
    }

    fn resume_auto_rotate(&mut self) {
        self.set_phase(Phase::Idle);
        self.arm_auto_rotate();
    }

    fn arm_auto_rotate(&mut self) {
        if self.is_circular() && !self.disposed {
            self.auto_rotate.start(self.clock.now());
        } else {
            self.auto_rotate.cancel();
        }
    }

    fn cancel_timers(&mut self) {
        self.auto_rotate.cancel();
        self.cooldown.cancel();
        self.jump_settle.cancel();
    }

    fn place_on_first_item(&mut self) {
        if self.is_circular() {
            self.scroll_to_render_index(render_index_of(0, self.items.len()), false);
        }
    }

    fn scroll_to_render_index(&self, render_index: usize, animated: bool) {
        let Some(viewport) = self.viewport.upgrade() else {
            trace!(render_index, "viewport gone, scroll skipped");
            return;
        };
        let Ok(mut viewport) = viewport.try_borrow_mut() else {
            warn!(render_index, "viewport busy, scroll skipped");
            return;
        };
        if !viewport.is_alive() {
            trace!(render_index, "viewport torn down, scroll skipped");
            return;
        }
        let offset = circular::offset_of(render_index, self.config.item_stride());
        viewport.scroll_to(offset, animated);
    }
}

impl<T, V: ?Sized, C> Drop for RotatingCarousel<T, V, C> {
    fn drop(&mut self) {
        // Timers are plain data; disarming them is enough to guarantee
        // nothing fires after the carousel is gone.
        self.auto_rotate.cancel();
        self.cooldown.cancel();
        self.jump_settle.cancel();
        self.disposed = true;
    }
}

impl<T, V: ?Sized, C> fmt::Debug for RotatingCarousel<T, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotatingCarousel")
            .field("items", &self.items.len())
            .field("current_index", &self.current_index)
            .field("phase", &self.phase)
            .field("auto_rotate", &self.auto_rotate)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}
