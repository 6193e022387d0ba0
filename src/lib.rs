pub mod traits;
pub mod circular;
pub mod clock;
pub mod timer;
pub mod config;
pub mod carousel;
pub mod feed;
pub mod feed_writer;
pub mod virtual_feed;
pub mod theme;

// Export collaborator traits
pub use traits::{DisplayItem, ScrollViewport};

// Export the carousel core
pub use carousel::{Phase, PollOutcome, RotatingCarousel, SelectHandler};
pub use clock::{Clock, ManualClock, SystemClock};
pub use timer::{Timer, TimerMode};
pub use config::{CarouselConfig, ConfigError};

// Export feed model and I/O
pub use feed::{parse_feed, read_feed, Banner, BannerFeed, FeedError, FeedReader, FeedSource};
pub use feed_writer::FeedWriter;
pub use virtual_feed::VirtualFeedSource;

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, adjust_brightness};
