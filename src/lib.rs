//! # Page Snapshot
//!
//! A single-run web page snapshot tool. Given one URL it downloads the
//! raw HTML, extracts the visible text of the document body, captures a
//! 1920x1080 rendered screenshot through a headless Chrome session, and
//! collects outbound links, writing each artifact into a per-URL output
//! folder.
//!
//! The pipeline is strictly sequential. Every stage except link
//! collection aborts the run on failure; link collection is best-effort
//! and only shows up as a missing `urls.txt` when it fails.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use page_snapshot::{Config, SnapshotService};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let service = SnapshotService::new(config)?;
//!
//!     let report = service.run("https://example.com", Path::new(".")).await?;
//!     println!("Snapshot written to {}", report.output_dir.display());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! page-snapshot --url https://example.com
//! ```
//!
//! Outputs, under a folder derived from the URL: `site_data.html` (raw
//! HTML), `output.txt` (extracted text), `screenshot.png` (viewport
//! capture) and `urls.txt` (absolute outbound links).

/// Configuration and settings for the snapshot tool
pub mod config;

/// Error types
pub mod error;

/// HTTP fetch of the raw page HTML
pub mod fetcher;

/// Text and link extraction from the fetched HTML
pub mod extract;

/// Per-URL output directory handling and artifact persistence
pub mod output;

/// Headless browser screenshot capture
pub mod screenshot;

/// Snapshot pipeline orchestration
pub mod snapshot;

/// Command-line interface implementation
pub mod cli;

/// Utility functions and helpers
pub mod utils;

#[cfg(test)]
mod tests;

pub use cli::*;
pub use config::*;
pub use error::*;
pub use extract::*;
pub use fetcher::*;
pub use output::*;
pub use screenshot::*;
pub use snapshot::*;
pub use utils::*;
