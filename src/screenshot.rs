//! Headless browser screenshot capture
//!
//! Launches a fresh, isolated Chrome process per run, renders the target
//! page at the configured viewport and captures a PNG of the visible
//! viewport. The whole session is bounded by a single timeout.

use chromiumoxide::browser::Browser;
use chromiumoxide::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::{Page, ScreenshotParams};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{debug, info};
use url::Url;

use crate::config::{create_browser_config, Config};
use crate::error::SnapshotError;

/// Interval between checks for the document body while waiting for the
/// page to render.
const BODY_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// One-shot screenshot capturer
///
/// Owns no long-lived browser state; every [`capture`](Self::capture)
/// call launches and tears down its own Chrome process.
pub struct ScreenshotCapturer {
    config: Config,
}

impl ScreenshotCapturer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Render `url` and return the PNG bytes of the visible viewport.
    ///
    /// Bounded by `Config::screenshot_timeout` from browser launch
    /// through capture; exceeding it yields [`SnapshotError::Timeout`].
    pub async fn capture(&self, url: &Url) -> Result<Vec<u8>, SnapshotError> {
        match timeout(self.config.screenshot_timeout, self.capture_session(url)).await {
            Ok(result) => result,
            Err(_) => Err(SnapshotError::Timeout(self.config.screenshot_timeout)),
        }
    }

    async fn capture_session(&self, url: &Url) -> Result<Vec<u8>, SnapshotError> {
        let browser_config = create_browser_config(&self.config)?;

        info!("Launching headless browser");
        let (mut browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| SnapshotError::BrowserLaunchFailed(e.to_string()))?;

        // The handler implements Stream and must be polled for the
        // lifetime of the browser to service CDP messages.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("Browser handler error: {}", e);
                }
            }
        });

        let result = self.capture_page(&browser, url).await;

        let _ = browser.close().await;
        handler_task.abort();

        result
    }

    async fn capture_page(&self, browser: &Browser, url: &Url) -> Result<Vec<u8>, SnapshotError> {
        let page = browser
            .new_page(url.as_str())
            .await
            .map_err(|e| SnapshotError::PageError(e.to_string()))?;

        let viewport = &self.config.viewport;
        let emulation_params = SetDeviceMetricsOverrideParams::builder()
            .width(viewport.width)
            .height(viewport.height)
            .device_scale_factor(viewport.device_scale_factor)
            .mobile(viewport.mobile)
            .build()
            .map_err(|e| SnapshotError::PageError(e.to_string()))?;

        page.execute(emulation_params)
            .await
            .map_err(|e| SnapshotError::PageError(e.to_string()))?;

        page.wait_for_navigation()
            .await
            .map_err(|e| SnapshotError::PageError(e.to_string()))?;

        self.wait_for_body(&page).await;

        // Fixed settle time for dynamically rendered content, not
        // adaptive to page readiness.
        debug!("Settling for {:?} before capture", self.config.settle_delay);
        sleep(self.config.settle_delay).await;

        let screenshot_params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .build();

        let image = page
            .screenshot(screenshot_params)
            .await
            .map_err(|e| SnapshotError::CaptureFailed(e.to_string()))?;

        let _ = page.close().await;

        Ok(image)
    }

    /// Poll until the document body exists in the DOM.
    ///
    /// Unbounded on its own; the session timeout in
    /// [`capture`](Self::capture) cuts it off.
    async fn wait_for_body(&self, page: &Page) {
        while page.find_element("body").await.is_err() {
            sleep(BODY_POLL_INTERVAL).await;
        }
    }
}
