//! Asynchronous feed loading.
//!
//! Feed files are read on a background thread so the carousel keeps
//! animating while a large or compressed feed is decoded.

use eframe::egui;
use rcarousel::{BannerFeed, FeedReader, FeedSource, VirtualFeedSource};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread;

/// Result of a completed feed loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        feed: BannerFeed,
        path: PathBuf,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation finished since the last check
    None,
}

/// Manages background loading of feed files.
pub struct AsyncLoader {
    /// Set while a background load is running
    in_progress: Arc<AtomicBool>,
    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<anyhow::Result<BannerFeed>>>,
    /// Path of the file currently being loaded
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            in_progress: Arc::new(AtomicBool::new(false)),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }

    /// Starts loading a feed file in the background.
    ///
    /// Call `check_completion()` once per frame to collect the result. A new
    /// load supersedes one still in flight; its result is dropped.
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);
        self.pending_load_path = Some(path.clone());
        // Fresh flag per load so a superseded thread cannot clear it.
        self.in_progress = Arc::new(AtomicBool::new(true));

        let in_progress = Arc::clone(&self.in_progress);
        let ctx_handle = ctx.clone();

        tracing::info!(path = %path.display(), "loading feed");
        thread::spawn(move || {
            let result = rcarousel::read_feed(&path);

            // The receiver is gone if a newer load replaced this one.
            let _ = sender.send(result);
            in_progress.store(false, Ordering::Release);
            ctx_handle.request_repaint();
        });
    }

    /// Generates a virtual feed synchronously.
    pub fn load_virtual_feed(&self, seed: u64) -> anyhow::Result<BannerFeed> {
        VirtualFeedSource::with_config(seed, 3, 8).load("")
    }

    /// Reads a feed file synchronously (used for reloads of small feeds).
    pub fn load_file_now(&self, path: &PathBuf) -> anyhow::Result<BannerFeed> {
        FeedReader::new().load(&path.to_string_lossy())
    }

    /// Returns the result of the background load once it is available.
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };
        let Ok(result) = receiver.try_recv() else {
            return LoadResult::None;
        };

        self.loading_receiver = None;
        let path = self.pending_load_path.take();
        match (result, path) {
            (Ok(feed), Some(path)) => LoadResult::Success { feed, path },
            (Ok(_), None) => LoadResult::Error("feed loaded without a source path".to_string()),
            (Err(e), _) => LoadResult::Error(format!("{:#}", e)),
        }
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}
