use std::time::Duration;
use url::Url;

use crate::error::SnapshotError;

/// Validate the target URL supplied on the command line.
///
/// A target is accepted when it parses as an absolute URL with a host.
/// Scheme-relative or host-less forms (`mailto:`, bare paths) are
/// rejected before any filesystem effect takes place.
pub fn validate_url(input: &str) -> Result<Url, SnapshotError> {
    let parsed = Url::parse(input).map_err(|_| SnapshotError::InvalidUrl(input.to_string()))?;

    if !parsed.has_host() {
        return Err(SnapshotError::InvalidUrl(input.to_string()));
    }

    Ok(parsed)
}

/// Derive a filesystem-safe directory name from a URL.
///
/// Concatenates host and path, replaces `.`, `/` and `:` with `_`, and
/// trims leading/trailing underscores. Distinct URLs can collide on the
/// same name; the later run overwrites.
pub fn sanitize_dir_name(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    let raw = match url.port() {
        Some(port) => format!("{}:{}{}", host, port, url.path()),
        None => format!("{}{}", host, url.path()),
    };

    raw.chars()
        .map(|c| match c {
            '.' | '/' | ':' => '_',
            c => c,
        })
        .collect::<String>()
        .trim_matches('_')
        .to_string()
}

pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    let millis = duration.subsec_millis();

    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else if seconds > 0 {
        format!("{}.{}s", seconds, millis / 100)
    } else {
        format!("{millis}ms")
    }
}

pub fn format_bytes(bytes: usize) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("http://example.com/path?q=1").is_ok());
        assert!(validate_url("example.com").is_err());
        assert!(validate_url("/relative/path").is_err());
        assert!(validate_url("mailto:someone@example.com").is_err());
        assert!(validate_url("").is_err());
    }

    #[test]
    fn test_sanitize_dir_name() {
        let url = Url::parse("https://www.example.com/some/page").unwrap();
        assert_eq!(sanitize_dir_name(&url), "www_example_com_some_page");

        let url = Url::parse("https://example.com").unwrap();
        assert_eq!(sanitize_dir_name(&url), "example_com");
    }

    #[test]
    fn test_sanitize_dir_name_is_deterministic() {
        let url = Url::parse("https://example.com/a/b.html").unwrap();
        assert_eq!(sanitize_dir_name(&url), sanitize_dir_name(&url));
    }

    #[test]
    fn test_sanitize_dir_name_strips_separators() {
        let url = Url::parse("http://host.with.dots:8080/deep/path/").unwrap();
        let name = sanitize_dir_name(&url);
        assert_eq!(name, "host_with_dots_8080_deep_path");
        assert!(!name.contains('.'));
        assert!(!name.contains('/'));
        assert!(!name.contains(':'));
        assert!(!name.starts_with('_'));
        assert!(!name.ends_with('_'));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_secs(5)), "5.0s");
        assert_eq!(format_duration(Duration::from_secs(65)), "1m 5s");
        assert_eq!(format_duration(Duration::from_secs(3665)), "1h 1m 5s");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1048576), "1.00 MB");
    }
}
