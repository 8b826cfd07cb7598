//! HTML content extraction
//!
//! Text and link extraction over the fetched HTML. Both functions parse
//! the document independently; neither touches the network.

use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::debug;
use url::Url;

use crate::error::SnapshotError;

/// Extract the visible text of the document body.
///
/// Concatenates the text nodes of each matched `body` element and
/// appends one newline per element. Markup never appears in the output.
pub fn text_content(html: &str) -> Result<String, SnapshotError> {
    let doc = Html::parse_document(html);
    let body_selector =
        Selector::parse("body").map_err(|e| SnapshotError::ParseFailed(e.to_string()))?;

    let mut text = String::new();
    for body in doc.select(&body_selector) {
        for chunk in body.text() {
            text.push_str(chunk);
        }
        text.push('\n');
    }

    Ok(text)
}

/// Extract outbound links from anchors and images.
///
/// Each `href`/`src` value is resolved against `base` per standard URL
/// resolution, so relative, protocol-relative and absolute forms all
/// work. Only `http(s)` results are kept, de-duplicated by exact string
/// match with first-seen order preserved.
pub fn extract_links(html: &str, base: &Url) -> Result<Vec<String>, SnapshotError> {
    let doc = Html::parse_document(html);
    let link_selector = Selector::parse("a[href], img[src]")
        .map_err(|e| SnapshotError::ParseFailed(e.to_string()))?;

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in doc.select(&link_selector) {
        let href = element.value().attr("href").unwrap_or("");
        let value = if href.is_empty() {
            element.value().attr("src").unwrap_or("")
        } else {
            href
        };

        if let Ok(resolved) = base.join(value) {
            let absolute = resolved.to_string();
            if absolute.starts_with("http") && seen.insert(absolute.clone()) {
                links.push(absolute);
            }
        }
    }

    debug!("Extracted {} links", links.len());
    Ok(links)
}
