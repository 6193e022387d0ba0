//! Banner feed model and reader.
//!
//! A feed is a single JSON document listing the banners to rotate through,
//! in display order. Files ending in `.br` are Brotli-compressed.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use brotli::Decompressor;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::traits::DisplayItem;

pub const FEED_VERSION: &str = "1.0";

/// Structural problems in an otherwise well-formed JSON feed.
#[derive(Debug, Error, PartialEq)]
pub enum FeedError {
    #[error("banner at position {0} has an empty id")]
    EmptyId(usize),
    #[error("duplicate banner id '{0}'")]
    DuplicateId(String),
    #[error("banner '{id}' has invalid color '{color}' (expected #RRGGBB)")]
    InvalidColor { id: String, color: String },
}

/// One advertisement slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub id: String,
    pub title: String,
    pub sponsor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    /// Background color as `#RRGGBB`
    #[serde(default = "default_color")]
    pub color: String,
    /// RFC 3339 timestamp, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

fn default_color() -> String {
    "#2C3E50".to_string()
}

impl Banner {
    pub fn new(id: impl Into<String>, title: impl Into<String>, sponsor: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            sponsor: sponsor.into(),
            subtitle: None,
            link_url: None,
            color: default_color(),
            expires_at: None,
        }
    }

    /// Parses `color` into RGB components.
    pub fn rgb(&self) -> Option<[u8; 3]> {
        parse_hex_color(&self.color)
    }
}

impl DisplayItem for Banner {
    fn key(&self) -> &str {
        &self.id
    }
}

/// A complete banner feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerFeed {
    pub version: String,
    #[serde(default)]
    pub generated_by: String,
    pub banners: Vec<Banner>,
}

impl BannerFeed {
    pub fn new(generated_by: impl Into<String>, banners: Vec<Banner>) -> Self {
        Self {
            version: FEED_VERSION.to_string(),
            generated_by: generated_by.into(),
            banners,
        }
    }

    /// Checks ids are present and unique and colors parse.
    pub fn validate(&self) -> Result<(), FeedError> {
        let mut seen = HashSet::with_capacity(self.banners.len());
        for (position, banner) in self.banners.iter().enumerate() {
            if banner.id.trim().is_empty() {
                return Err(FeedError::EmptyId(position));
            }
            if !seen.insert(banner.id.as_str()) {
                return Err(FeedError::DuplicateId(banner.id.clone()));
            }
            if banner.rgb().is_none() {
                return Err(FeedError::InvalidColor {
                    id: banner.id.clone(),
                    color: banner.color.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.banners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }
}

/// Parses `#RRGGBB` (leading `#` optional).
pub fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Trait for anything that can produce a banner feed.
pub trait FeedSource {
    /// Loads a feed. `location` is source-specific (a path for files).
    fn load(&self, location: &str) -> Result<BannerFeed>;
}

/// Reads feeds from JSON files, decompressing `*.br` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedReader;

impl FeedReader {
    pub fn new() -> Self {
        Self
    }
}

impl FeedSource for FeedReader {
    fn load(&self, location: &str) -> Result<BannerFeed> {
        read_feed(location)
    }
}

/// Reads and validates a feed file.
pub fn read_feed(path: impl AsRef<Path>) -> Result<BannerFeed> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open feed file: {}", path.display()))?;

    let mut reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "br") {
        Box::new(Decompressor::new(file, 4096))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .with_context(|| format!("Failed to read feed file: {}", path.display()))?;

    let feed = parse_feed(&text).with_context(|| format!("Invalid feed: {}", path.display()))?;
    info!(path = %path.display(), banners = feed.len(), "feed loaded");
    Ok(feed)
}

/// Parses and validates a feed document.
pub fn parse_feed(json: &str) -> Result<BannerFeed> {
    let feed: BannerFeed = serde_json::from_str(json).context("Failed to parse feed JSON")?;
    feed.validate()?;
    Ok(feed)
}
