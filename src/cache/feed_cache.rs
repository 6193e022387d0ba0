//! Time-to-live cache over eframe's key-value storage.
//!
//! Values are stored as JSON next to the UNIX time they were written. A read
//! past the TTL behaves like a miss, so a stale feed is never shown.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rcarousel::BannerFeed;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const FEED_CACHE_KEY: &str = "cached_feed";
pub const DEFAULT_FEED_TTL: Duration = Duration::from_secs(6 * 60 * 60);

#[derive(Serialize, Deserialize)]
struct Entry<T> {
    stored_at: u64,
    value: T,
}

/// A single TTL-guarded slot in persistent storage.
#[derive(Debug, Clone)]
pub struct TtlCache {
    key: String,
    ttl: Duration,
}

impl TtlCache {
    pub fn new(key: impl Into<String>, ttl: Duration) -> Self {
        Self { key: key.into(), ttl }
    }

    /// The cache used for the last loaded banner feed.
    pub fn for_feed() -> Self {
        Self::new(FEED_CACHE_KEY, DEFAULT_FEED_TTL)
    }

    /// Reads the value if present, decodable, and younger than the TTL.
    pub fn get<T: DeserializeOwned>(&self, storage: &dyn eframe::Storage, now_secs: u64) -> Option<T> {
        let json = storage.get_string(&self.key).filter(|json| !json.is_empty())?;
        let entry: Entry<T> = match serde_json::from_str(&json) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(key = %self.key, "discarding undecodable cache entry: {e}");
                return None;
            }
        };
        let age = now_secs.saturating_sub(entry.stored_at);
        if age > self.ttl.as_secs() {
            tracing::debug!(key = %self.key, age, "cache entry expired");
            return None;
        }
        Some(entry.value)
    }

    /// Writes the value stamped with `now_secs`.
    pub fn put<T: Serialize>(&self, storage: &mut dyn eframe::Storage, value: &T, now_secs: u64) {
        let entry = Entry {
            stored_at: now_secs,
            value,
        };
        match serde_json::to_string(&entry) {
            Ok(json) => {
                storage.set_string(&self.key, json);
                storage.flush();
            }
            Err(e) => tracing::warn!(key = %self.key, "failed to encode cache entry: {e}"),
        }
    }

    /// Drops the stored value.
    pub fn invalidate(&self, storage: &mut dyn eframe::Storage) {
        storage.set_string(&self.key, String::new());
        storage.flush();
    }

    /// Convenience for the feed slot.
    pub fn get_feed(&self, storage: &dyn eframe::Storage, now_secs: u64) -> Option<BannerFeed> {
        self.get::<BannerFeed>(storage, now_secs)
            .filter(|feed| feed.validate().is_ok())
    }
}

/// Current UNIX time in seconds (0 if the clock is before the epoch).
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
