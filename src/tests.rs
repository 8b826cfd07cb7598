#[cfg(test)]
mod integration_tests {
    use crate::{validate_config, Cli, Config, SnapshotError, Viewport, DEFAULT_USER_AGENT};
    use clap::Parser;
    use std::time::Duration;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.fetch_timeout, Duration::from_secs(30));
        assert_eq!(config.screenshot_timeout, Duration::from_secs(60));
        assert_eq!(config.settle_delay, Duration::from_secs(20));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert!(config.chrome_path.is_none());
    }

    #[test]
    fn test_viewport_default() {
        let viewport = Viewport::default();
        assert_eq!(viewport.width, 1920);
        assert_eq!(viewport.height, 1080);
        assert_eq!(viewport.device_scale_factor, 1.0);
        assert!(!viewport.mobile);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = Config {
            settle_delay: Duration::from_secs(3),
            chrome_path: Some("/usr/bin/chromium".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.settle_delay, Duration::from_secs(3));
        assert_eq!(parsed.chrome_path.as_deref(), Some("/usr/bin/chromium"));
        assert_eq!(parsed.viewport.width, config.viewport.width);
    }

    #[test]
    fn test_chrome_args_generation() {
        let config = Config::default();
        let args = crate::get_chrome_args(&config);

        assert!(args.contains(&"--headless".to_string()));
        assert!(args.contains(&"--no-sandbox".to_string()));
        assert!(args.contains(&"--disable-gpu".to_string()));
        assert!(args.contains(&format!(
            "--window-size={},{}",
            config.viewport.width, config.viewport.height
        )));
    }

    #[test]
    fn test_chrome_args_unique_profile() {
        let config = Config::default();

        let profile = |args: &[String]| {
            args.iter()
                .find(|a| a.starts_with("--user-data-dir="))
                .cloned()
                .unwrap()
        };

        let first = profile(&crate::get_chrome_args(&config));
        let second = profile(&crate::get_chrome_args(&config));
        assert_ne!(first, second);
    }

    #[test]
    fn test_validate_config() {
        assert!(validate_config(&Config::default()).is_ok());

        let mut config = Config::default();
        config.screenshot_timeout = Duration::from_secs(0);
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.viewport.width = 0;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.user_agent.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "page-snapshot",
            "--url",
            "https://example.com",
            "--settle",
            "5",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(cli.url, "https://example.com");
        assert_eq!(cli.settle, Some(5));
        assert!(cli.verbose);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_cli_requires_url() {
        assert!(Cli::try_parse_from(["page-snapshot"]).is_err());
    }

    #[test]
    fn test_error_conversions() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SnapshotError = io_err.into();
        assert!(matches!(err, SnapshotError::IoError(_)));

        let json_err = serde_json::from_str::<Config>("not json").unwrap_err();
        let err: SnapshotError = json_err.into();
        assert!(matches!(err, SnapshotError::SerializationError(_)));
    }

    #[test]
    fn test_error_display() {
        let err = SnapshotError::HttpStatus(404);
        assert_eq!(err.to_string(), "HTTP status 404");

        let err = SnapshotError::Timeout(Duration::from_secs(60));
        assert!(err.to_string().starts_with("Timeout after"));
    }
}
