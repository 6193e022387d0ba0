use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use brotli::enc::BrotliEncoderParams;
use brotli::CompressorWriter;

use crate::feed::BannerFeed;

/// Writes banner feeds to disk.
///
/// Compression follows the file name: paths ending in `.br` are written
/// Brotli-compressed, everything else as pretty-printed JSON.
pub struct FeedWriter {
    writer: Box<dyn Write>,
    path: String,
}

impl FeedWriter {
    /// Creates the output file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use rcarousel::{FeedWriter, BannerFeed};
    /// # fn main() -> anyhow::Result<()> {
    /// let feed = BannerFeed::new("docs", Vec::new());
    /// FeedWriter::new("banners.json.br")?.write(&feed)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(file_path: &str) -> Result<Self> {
        let file = File::create(file_path)
            .with_context(|| format!("Failed to create file: {}", file_path))?;

        let writer: Box<dyn Write> = if file_path.ends_with(".br") {
            let params = BrotliEncoderParams {
                quality: 6,
                lgwin: 22,
                ..Default::default()
            };
            Box::new(CompressorWriter::with_params(BufWriter::new(file), 4096, &params))
        } else {
            Box::new(BufWriter::new(file))
        };

        Ok(Self {
            writer,
            path: file_path.to_string(),
        })
    }

    /// Validates and writes the whole feed, then flushes.
    pub fn write(mut self, feed: &BannerFeed) -> Result<()> {
        feed.validate()?;
        serde_json::to_writer_pretty(&mut self.writer, feed)
            .with_context(|| format!("Failed to serialize feed to {}", self.path))?;
        self.writer.write_all(b"\n")?;
        self.writer
            .flush()
            .with_context(|| format!("Failed to flush {}", self.path))?;
        tracing::info!(path = %self.path, banners = feed.len(), "feed written");
        Ok(())
    }
}
