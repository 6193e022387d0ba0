//! Loaded feed state.

use std::path::PathBuf;

use rcarousel::BannerFeed;

/// Where the current feed came from.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedOrigin {
    File(PathBuf),
    Virtual { seed: u64 },
    Cache,
}

impl FeedOrigin {
    pub fn describe(&self) -> String {
        match self {
            FeedOrigin::File(path) => path.display().to_string(),
            FeedOrigin::Virtual { seed } => format!("Virtual feed (seed {})", seed),
            FeedOrigin::Cache => "Cached feed".to_string(),
        }
    }

    /// Cached feeds have no source to re-read.
    pub fn is_reloadable(&self) -> bool {
        !matches!(self, FeedOrigin::Cache)
    }
}

/// State related to the loaded banner feed.
#[derive(Debug, Default)]
pub struct FeedState {
    feed: Option<BannerFeed>,
    origin: Option<FeedOrigin>,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_feed(&mut self, feed: BannerFeed, origin: FeedOrigin) {
        self.feed = Some(feed);
        self.origin = Some(origin);
    }

    pub fn clear(&mut self) {
        self.feed = None;
        self.origin = None;
    }

    pub fn feed(&self) -> Option<&BannerFeed> {
        self.feed.as_ref()
    }

    pub fn origin(&self) -> Option<&FeedOrigin> {
        self.origin.as_ref()
    }

    /// Path to reload from, if the feed came from a file.
    pub fn file_path(&self) -> Option<&PathBuf> {
        match &self.origin {
            Some(FeedOrigin::File(path)) => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_and_clear() {
        let mut state = FeedState::new();
        let path = PathBuf::from("ads.json");
        state.load_feed(BannerFeed::new("test", Vec::new()), FeedOrigin::File(path.clone()));

        assert!(state.feed().is_some());
        assert_eq!(state.file_path(), Some(&path));

        state.clear();
        assert!(state.feed().is_none());
        assert!(state.origin().is_none());
    }

    #[test]
    fn test_origin_reloadable() {
        assert!(FeedOrigin::File(PathBuf::from("a.json")).is_reloadable());
        assert!(FeedOrigin::Virtual { seed: 1 }.is_reloadable());
        assert!(!FeedOrigin::Cache.is_reloadable());
        assert_eq!(FeedOrigin::Virtual { seed: 7 }.describe(), "Virtual feed (seed 7)");
    }
}
