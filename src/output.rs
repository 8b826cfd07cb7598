//! Per-URL output directory handling
//!
//! Derives the filesystem-safe folder for a target URL, creates it, and
//! persists the run's artifacts into it. Every writer overwrites any
//! file left behind by an earlier run against the same URL.

use std::path::{Path, PathBuf};
use tokio::fs;
use url::Url;

use crate::error::SnapshotError;
use crate::utils::sanitize_dir_name;

pub const HTML_FILE: &str = "site_data.html";
pub const TEXT_FILE: &str = "output.txt";
pub const SCREENSHOT_FILE: &str = "screenshot.png";
pub const URLS_FILE: &str = "urls.txt";

/// Fallback folder name when sanitization yields nothing usable.
const DEFAULT_DIR_NAME: &str = "downloaded_site";

/// Compute the output directory name for a target URL.
pub fn dir_name_for(url: &Url) -> String {
    let name = sanitize_dir_name(url);
    if name.is_empty() {
        DEFAULT_DIR_NAME.to_string()
    } else {
        name
    }
}

/// Handle to the created per-URL output directory
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    /// Create the output directory (and parents) for `url` under `base`.
    pub async fn create(base: &Path, url: &Url) -> Result<Self, SnapshotError> {
        let root = base.join(dir_name_for(url));
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Write the raw HTML body verbatim.
    pub async fn save_html(&self, body: &[u8]) -> Result<PathBuf, SnapshotError> {
        self.write(HTML_FILE, body).await
    }

    /// Write the extracted text (or the raw-HTML fallback).
    pub async fn save_text(&self, text: &[u8]) -> Result<PathBuf, SnapshotError> {
        self.write(TEXT_FILE, text).await
    }

    /// Write the captured PNG image.
    pub async fn save_screenshot(&self, image: &[u8]) -> Result<PathBuf, SnapshotError> {
        self.write(SCREENSHOT_FILE, image).await
    }

    /// Write the resolved link list, one URL per line.
    pub async fn save_urls(&self, urls: &[String]) -> Result<PathBuf, SnapshotError> {
        self.write(URLS_FILE, urls.join("\n").as_bytes()).await
    }

    async fn write(&self, name: &str, data: &[u8]) -> Result<PathBuf, SnapshotError> {
        let path = self.root.join(name);
        fs::write(&path, data).await?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("page-snapshot-test-{}-{}", tag, std::process::id()))
    }

    #[test]
    fn test_dir_name_for() {
        let url = Url::parse("https://www.example.com/page/one").unwrap();
        assert_eq!(dir_name_for(&url), "www_example_com_page_one");
    }

    #[test]
    fn test_dir_name_fallback() {
        // A host of only underscore characters sanitizes to nothing.
        let url = Url::parse("https://_/").unwrap();
        assert_eq!(dir_name_for(&url), "downloaded_site");
    }

    #[tokio::test]
    async fn test_create_and_overwrite() {
        let base = scratch_dir("overwrite");
        let url = Url::parse("https://example.com/a").unwrap();

        let out = OutputDir::create(&base, &url).await.unwrap();
        out.save_html(b"<html>first</html>").await.unwrap();
        out.save_html(b"<html>second</html>").await.unwrap();

        let written = fs::read_to_string(out.path().join(HTML_FILE)).await.unwrap();
        assert_eq!(written, "<html>second</html>");

        fs::remove_dir_all(&base).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_urls_joins_with_newlines() {
        let base = scratch_dir("urls");
        let url = Url::parse("https://example.com/b").unwrap();

        let out = OutputDir::create(&base, &url).await.unwrap();
        let urls = vec![
            "https://example.com/x".to_string(),
            "https://example.com/y".to_string(),
        ];
        out.save_urls(&urls).await.unwrap();

        let written = fs::read_to_string(out.path().join(URLS_FILE)).await.unwrap();
        assert_eq!(written, "https://example.com/x\nhttps://example.com/y");

        fs::remove_dir_all(&base).await.unwrap();
    }

    #[tokio::test]
    async fn test_html_written_verbatim() {
        let base = scratch_dir("verbatim");
        let url = Url::parse("https://example.com/c").unwrap();
        let body: &[u8] = b"<html>\r\n<body>\tmixed whitespace \xff</body>\r\n</html>";

        let out = OutputDir::create(&base, &url).await.unwrap();
        out.save_html(body).await.unwrap();

        let written = fs::read(out.path().join(HTML_FILE)).await.unwrap();
        assert_eq!(written, body);

        fs::remove_dir_all(&base).await.unwrap();
    }
}
