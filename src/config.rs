//! Carousel geometry and timing configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ITEM_WIDTH: f32 = 320.0;
pub const DEFAULT_ITEM_GAP: f32 = 12.0;
pub const DEFAULT_AUTO_ROTATE_MS: u64 = 5000;
pub const DEFAULT_RESUME_COOLDOWN_MS: u64 = 1000;
pub const DEFAULT_JUMP_SETTLE_MS: u64 = 50;
pub const DEFAULT_SNAP_ANIMATION_MS: u64 = 300;

/// Rejected configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("item width must be positive and finite, got {0}")]
    InvalidItemWidth(f32),
    #[error("item gap must be non-negative and finite, got {0}")]
    InvalidItemGap(f32),
    #[error("auto-rotate interval must be at least {min} ms, got {got} ms")]
    AutoRotateTooShort { min: u64, got: u64 },
}

/// Geometry and timing of a carousel.
///
/// Durations are stored in milliseconds so the struct persists as plain JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Width of one slide in pixels
    pub item_width: f32,
    /// Gap between adjacent slides in pixels
    pub item_gap: f32,
    /// Period of the auto-advance timer
    pub auto_rotate_ms: u64,
    /// Delay after a drag settles before auto-advance resumes
    pub resume_cooldown_ms: u64,
    /// Delay before a seam jump is considered applied
    pub jump_settle_ms: u64,
    /// Duration of animated scrolls (host hint)
    pub snap_animation_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_width: DEFAULT_ITEM_WIDTH,
            item_gap: DEFAULT_ITEM_GAP,
            auto_rotate_ms: DEFAULT_AUTO_ROTATE_MS,
            resume_cooldown_ms: DEFAULT_RESUME_COOLDOWN_MS,
            jump_settle_ms: DEFAULT_JUMP_SETTLE_MS,
            snap_animation_ms: DEFAULT_SNAP_ANIMATION_MS,
        }
    }
}

impl CarouselConfig {
    /// Shortest accepted auto-rotate period.
    pub const MIN_AUTO_ROTATE_MS: u64 = 100;

    /// Distance between the leading edges of two adjacent slides.
    pub fn item_stride(&self) -> f32 {
        self.item_width + self.item_gap
    }

    pub fn auto_rotate_interval(&self) -> Duration {
        Duration::from_millis(self.auto_rotate_ms)
    }

    pub fn resume_cooldown(&self) -> Duration {
        Duration::from_millis(self.resume_cooldown_ms)
    }

    pub fn jump_settle(&self) -> Duration {
        Duration::from_millis(self.jump_settle_ms)
    }

    pub fn snap_animation(&self) -> Duration {
        Duration::from_millis(self.snap_animation_ms)
    }

    /// Returns a copy with a different slide width (e.g. after the host
    /// measured its viewport).
    pub fn with_item_width(mut self, item_width: f32) -> Self {
        self.item_width = item_width;
        self
    }

    /// Checks that the geometry can be divided by and the timer period is sane.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.item_width.is_finite() || self.item_width <= 0.0 {
            return Err(ConfigError::InvalidItemWidth(self.item_width));
        }
        if !self.item_gap.is_finite() || self.item_gap < 0.0 {
            return Err(ConfigError::InvalidItemGap(self.item_gap));
        }
        if self.auto_rotate_ms < Self::MIN_AUTO_ROTATE_MS {
            return Err(ConfigError::AutoRotateTooShort {
                min: Self::MIN_AUTO_ROTATE_MS,
                got: self.auto_rotate_ms,
            });
        }
        Ok(())
    }

    /// Returns this config if valid, otherwise the defaults.
    pub fn validated_or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                tracing::warn!("invalid carousel config ({e}), falling back to defaults");
                Self::default()
            }
        }
    }
}
