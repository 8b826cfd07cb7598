//! Configuration management with serde serialization/deserialization
//!
//! This module provides the configuration structures for the snapshot tool,
//! including stage timeouts, the browser viewport, and Chrome launch settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default desktop user-agent sent with the HTTP fetch.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Main configuration structure for the snapshot tool
///
/// Controls the timeouts of the network-bound stages, the settle delay
/// applied before the screenshot is captured, and the browser viewport.
///
/// # Examples
///
/// ```rust
/// use page_snapshot::Config;
///
/// // Use default configuration
/// let config = Config::default();
///
/// // Create custom configuration
/// let config = Config {
///     settle_delay: std::time::Duration::from_secs(5),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Timeout for the HTTP fetch of the raw HTML (default: 30 seconds)
    pub fetch_timeout: Duration,

    /// Overall timeout for the browser session, from launch through
    /// capture (default: 60 seconds)
    ///
    /// Exceeding it aborts the screenshot stage with a timeout error
    /// and no image file is written.
    pub screenshot_timeout: Duration,

    /// Fixed delay between the body element appearing and the capture
    /// (default: 20 seconds)
    ///
    /// A settle time for dynamically rendered content. It is not
    /// adaptive to page readiness; lower it for static pages.
    pub settle_delay: Duration,

    /// Browser viewport used when rendering the page
    pub viewport: Viewport,

    /// User-Agent string sent with the HTTP fetch
    pub user_agent: String,

    /// Path to Chrome/Chromium executable (default: auto-detect)
    pub chrome_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(30),
            screenshot_timeout: Duration::from_secs(60),
            settle_delay: Duration::from_secs(20),
            viewport: Viewport::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            chrome_path: None,
        }
    }
}

/// Browser viewport configuration for the screenshot
///
/// # Examples
///
/// ```rust
/// use page_snapshot::Viewport;
///
/// // Desktop viewport (default, 1920x1080)
/// let desktop = Viewport::default();
///
/// // Mobile viewport
/// let mobile = Viewport {
///     width: 375,
///     height: 667,
///     device_scale_factor: 2.0,
///     mobile: true,
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Viewport {
    /// Viewport width in pixels (default: 1920)
    pub width: u32,

    /// Viewport height in pixels (default: 1080)
    pub height: u32,

    /// Device pixel ratio for high-DPI displays (default: 1.0)
    pub device_scale_factor: f64,

    /// Whether to emulate a mobile device (default: false)
    pub mobile: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            device_scale_factor: 1.0,
            mobile: false,
        }
    }
}

/// Generate Chrome command-line arguments based on configuration
///
/// Each invocation gets a unique user data directory so the launched
/// browser is isolated from any other Chrome process on the host.
///
/// # Examples
///
/// ```rust
/// use page_snapshot::{Config, get_chrome_args};
///
/// let config = Config::default();
/// let args = get_chrome_args(&config);
/// assert!(args.contains(&"--headless".to_string()));
/// ```
pub fn get_chrome_args(config: &Config) -> Vec<String> {
    let unique_id = format!("{}-{}", std::process::id(), uuid::Uuid::new_v4());

    vec![
        "--headless".to_string(),
        "--no-sandbox".to_string(),
        "--disable-dev-shm-usage".to_string(),
        "--disable-gpu".to_string(),
        "--disable-extensions".to_string(),
        "--disable-default-apps".to_string(),
        "--disable-sync".to_string(),
        "--no-first-run".to_string(),
        "--ignore-certificate-errors".to_string(),
        format!(
            "--window-size={},{}",
            config.viewport.width, config.viewport.height
        ),
        format!("--user-data-dir=/tmp/page-snapshot-profile-{unique_id}"),
    ]
}

pub fn create_browser_config(
    config: &Config,
) -> Result<chromiumoxide::browser::BrowserConfig, crate::error::SnapshotError> {
    use chromiumoxide::browser::BrowserConfig;

    let mut builder = BrowserConfig::builder()
        .window_size(config.viewport.width, config.viewport.height)
        .args(get_chrome_args(config));

    if let Some(chrome_path) = &config.chrome_path {
        builder = builder.chrome_executable(chrome_path);
    }

    builder
        .build()
        .map_err(crate::error::SnapshotError::ConfigurationError)
}
