//! Snapshot pipeline orchestration
//!
//! Runs the stages of a single snapshot in order: validate, create the
//! output directory, fetch, persist HTML and text, capture the
//! screenshot, then collect links. Every stage except link collection
//! is fatal on failure; files written before a failure stay on disk.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, warn};
use url::Url;

use crate::config::Config;
use crate::error::SnapshotError;
use crate::extract;
use crate::fetcher::Fetcher;
use crate::output::OutputDir;
use crate::screenshot::ScreenshotCapturer;
use crate::utils::validate_url;

/// Summary of a completed snapshot run
#[derive(Debug)]
pub struct SnapshotReport {
    pub url: Url,
    pub output_dir: PathBuf,
    pub html_bytes: usize,
    pub screenshot_bytes: usize,
    /// Number of links persisted; `None` when the best-effort link
    /// stage was skipped.
    pub link_count: Option<usize>,
    pub duration: Duration,
}

/// Single-run snapshot service
pub struct SnapshotService {
    config: Config,
    fetcher: Fetcher,
    capturer: ScreenshotCapturer,
}

impl SnapshotService {
    pub fn new(config: Config) -> Result<Self, SnapshotError> {
        let fetcher = Fetcher::new(&config)?;
        let capturer = ScreenshotCapturer::new(config.clone());

        Ok(Self {
            config,
            fetcher,
            capturer,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full pipeline for one target URL.
    ///
    /// `base_dir` is the directory under which the per-URL output
    /// folder is created.
    pub async fn run(&self, target: &str, base_dir: &Path) -> Result<SnapshotReport, SnapshotError> {
        let start = Instant::now();

        let url = validate_url(target)?;
        info!("Target URL: {}", url);

        let out = OutputDir::create(base_dir, &url).await?;
        info!("Output directory: {}", out.path().display());

        let body = self.fetcher.fetch(&url).await?;

        let html_path = out.save_html(&body).await?;
        info!("Saved raw HTML to {}", html_path.display());

        let html = String::from_utf8_lossy(&body);

        // Best-effort extraction: a parse failure downgrades the text
        // artifact to the raw HTML bytes instead of failing the stage.
        let text = match extract::text_content(&html) {
            Ok(text) => text.into_bytes(),
            Err(e) => {
                warn!("Text extraction failed, writing raw HTML instead: {}", e);
                body.clone()
            }
        };
        let text_path = out.save_text(&text).await?;
        info!("Saved page text to {}", text_path.display());

        let image = self.capturer.capture(&url).await?;
        let screenshot_bytes = image.len();
        let screenshot_path = out.save_screenshot(&image).await?;
        info!("Saved screenshot to {}", screenshot_path.display());

        let link_count = self.save_links(&html, &url, &out).await;

        Ok(SnapshotReport {
            url,
            output_dir: out.path().to_path_buf(),
            html_bytes: body.len(),
            screenshot_bytes,
            link_count,
            duration: start.elapsed(),
        })
    }

    /// Link collection is best-effort: any failure is logged and the
    /// stage is skipped without affecting the exit status.
    async fn save_links(&self, html: &str, url: &Url, out: &OutputDir) -> Option<usize> {
        let links = match extract::extract_links(html, url) {
            Ok(links) => links,
            Err(e) => {
                warn!("Link extraction failed: {}", e);
                return None;
            }
        };

        match out.save_urls(&links).await {
            Ok(path) => {
                info!("Saved {} links to {}", links.len(), path.display());
                Some(links.len())
            }
            Err(e) => {
                warn!("Failed to save link list: {}", e);
                None
            }
        }
    }
}
