//! Deterministic demo feeds.
//!
//! Generates plausible banner feeds from a seed so the viewer can be tried
//! without a feed file, and so tests get stable data.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::feed::{Banner, BannerFeed, FeedSource};

const DEFAULT_SEED: u64 = 42;
const DEFAULT_MIN_BANNERS: usize = 3;
const DEFAULT_MAX_BANNERS: usize = 8;

const SPONSORS: &[&str] = &[
    "Outer Banks Outfitters",
    "Hatteras Charter Co.",
    "Cape Fear Bait & Tackle",
    "Pamlico Sound Marine",
    "Crystal Coast Kayaks",
    "Topsail Pier Shop",
    "Wrightsville Rod Works",
];

const OFFERS: &[(&str, &str)] = &[
    ("Spring Flounder Special", "20% off gigs and lights"),
    ("Live Bait In Stock", "Shrimp, mullet and menhaden daily"),
    ("Half-Day Inshore Trips", "Red drum and speckled trout"),
    ("Gulf Stream Charters", "Mahi, wahoo and tuna runs"),
    ("Kayak Rentals", "Launch from the sound side"),
    ("Reel Repair Clinic", "Saturday mornings, free inspection"),
    ("Pier Passes", "Season passes now available"),
    ("Tackle Trade-In", "Bring old rods, get store credit"),
];

const PALETTE: &[&str] = &[
    "#1ABC9C", "#2980B9", "#8E44AD", "#E67E22", "#C0392B", "#16A085", "#2C3E50", "#D35400",
];

/// URL path segment per sponsor, parallel to `SPONSORS`.
static SPONSOR_SLUGS: Lazy<Vec<String>> = Lazy::new(|| SPONSORS.iter().map(|name| slugify(name)).collect());

/// Lowercases and collapses every run of non-alphanumerics into one `-`.
fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Generates seeded banner feeds.
#[derive(Debug, Clone)]
pub struct VirtualFeedSource {
    seed: u64,
    min_banners: usize,
    max_banners: usize,
}

impl VirtualFeedSource {
    pub fn new() -> Self {
        Self {
            seed: DEFAULT_SEED,
            min_banners: DEFAULT_MIN_BANNERS,
            max_banners: DEFAULT_MAX_BANNERS,
        }
    }

    /// Generator producing between `min` and `max` banners (inclusive).
    pub fn with_config(seed: u64, min: usize, max: usize) -> Self {
        Self {
            seed,
            min_banners: min.min(max),
            max_banners: max.max(min),
        }
    }

    /// Generator producing exactly `count` banners.
    pub fn with_count(seed: u64, count: usize) -> Self {
        Self::with_config(seed, count, count)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generate(&self) -> BannerFeed {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let count = rng.gen_range(self.min_banners..=self.max_banners);

        let banners = (0..count)
            .map(|i| {
                let (title, subtitle) = OFFERS[rng.gen_range(0..OFFERS.len())];
                let sponsor_index = rng.gen_range(0..SPONSORS.len());
                let sponsor = SPONSORS[sponsor_index];
                let color = PALETTE.choose(&mut rng).copied().unwrap_or("#2C3E50");
                let days = rng.gen_range(1..=60);

                let mut banner = Banner::new(format!("ad-{:04}", i + 1), title, sponsor);
                banner.subtitle = Some(subtitle.to_string());
                banner.color = color.to_string();
                banner.link_url = Some(format!("https://example.com/ads/{}", SPONSOR_SLUGS[sponsor_index]));
                banner.expires_at = Some(format!("2026-{:02}-{:02}T00:00:00Z", 1 + days / 28, 1 + days % 28));
                banner
            })
            .collect();

        BannerFeed::new(format!("virtual (seed {})", self.seed), banners)
    }
}

impl Default for VirtualFeedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedSource for VirtualFeedSource {
    fn load(&self, _location: &str) -> anyhow::Result<BannerFeed> {
        Ok(self.generate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_feed() {
        let a = VirtualFeedSource::with_config(7, 3, 8).generate();
        let b = VirtualFeedSource::with_config(7, 3, 8).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_count_respected_and_valid() {
        let feed = VirtualFeedSource::with_count(1, 5).generate();
        assert_eq!(feed.len(), 5);
        assert!(feed.validate().is_ok());
        assert_eq!(feed.banners[0].id, "ad-0001");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Cape Fear Bait & Tackle"), "cape-fear-bait-tackle");
        assert_eq!(slugify("Hatteras Charter Co."), "hatteras-charter-co");
        assert_eq!(SPONSOR_SLUGS.len(), SPONSORS.len());
    }

    #[test]
    fn test_links_use_sponsor_slug() {
        let feed = VirtualFeedSource::with_count(3, 6).generate();
        for banner in &feed.banners {
            let expected = format!("https://example.com/ads/{}", slugify(&banner.sponsor));
            assert_eq!(banner.link_url.as_deref(), Some(expected.as_str()));
        }
    }

    #[test]
    fn test_default_range() {
        let feed = VirtualFeedSource::new().load("").unwrap();
        assert!((DEFAULT_MIN_BANNERS..=DEFAULT_MAX_BANNERS).contains(&feed.len()));
    }

    #[test]
    fn test_swapped_bounds_are_normalized() {
        let feed = VirtualFeedSource::with_config(3, 4, 2).generate();
        assert!((2..=4).contains(&feed.len()));
    }
}
