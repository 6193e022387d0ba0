//! State management modules for the banner viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Feed state (loaded feed and where it came from)
//! - Carousel state (mounted carousel and its strip)
//! - Strip viewport (scroll offset, drag, snap animation)
//! - Selection state (tapped banner, tap counts)
//! - Theme state (theme manager, current theme)

mod feed_state;
mod carousel_state;
mod strip_viewport;
mod selection;
mod theme_state;

pub use feed_state::{FeedOrigin, FeedState};
pub use carousel_state::{BannerCarousel, CarouselState};
pub use strip_viewport::StripViewport;
pub use selection::SelectionState;
pub use theme_state::ThemeState;
