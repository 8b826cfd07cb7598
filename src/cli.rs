use crate::Config;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::fs;
use tracing::info;

#[derive(Parser)]
#[command(name = "page-snapshot")]
#[command(about = "Single-run web page snapshot tool")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[arg(short, long, help = "Target web page URL")]
    pub url: String,

    #[arg(long, help = "Configuration file path")]
    pub config: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "Base directory for the per-URL output folder (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Screenshot session timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, help = "Settle delay before capture in seconds")]
    pub settle: Option<u64>,

    #[arg(long, help = "Chrome executable path")]
    pub chrome_path: Option<String>,

    #[arg(long, help = "User-Agent string for the HTTP fetch")]
    pub user_agent: Option<String>,

    #[arg(long, help = "Enable verbose logging")]
    pub verbose: bool,
}

pub async fn load_config(args: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if let Some(config_path) = &args.config {
        // Load from file
        let config_content = fs::read_to_string(config_path).await?;
        serde_json::from_str(&config_content)?
    } else {
        // Use default configuration
        Config::default()
    };

    // Override with CLI arguments
    if let Some(timeout) = args.timeout {
        config.screenshot_timeout = Duration::from_secs(timeout);
    }

    if let Some(settle) = args.settle {
        config.settle_delay = Duration::from_secs(settle);
    }

    if let Some(chrome_path) = &args.chrome_path {
        config.chrome_path = Some(chrome_path.clone());
    }

    if let Some(user_agent) = &args.user_agent {
        config.user_agent = user_agent.clone();
    }

    validate_config(&config)?;

    info!("Configuration loaded successfully");
    info!("Fetch timeout: {:?}", config.fetch_timeout);
    info!("Screenshot timeout: {:?}", config.screenshot_timeout);
    info!("Settle delay: {:?}", config.settle_delay);
    info!(
        "Viewport: {}x{}",
        config.viewport.width, config.viewport.height
    );

    Ok(config)
}

pub fn validate_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    if config.fetch_timeout.as_secs() == 0 {
        return Err("Fetch timeout must be greater than 0".into());
    }

    if config.screenshot_timeout.as_secs() == 0 {
        return Err("Screenshot timeout must be greater than 0".into());
    }

    if config.viewport.width == 0 || config.viewport.height == 0 {
        return Err("Viewport dimensions must be greater than 0".into());
    }

    if config.user_agent.is_empty() {
        return Err("User-Agent must not be empty".into());
    }

    Ok(())
}

pub fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    Ok(())
}
