use clap::Parser;
use page_snapshot::{format_bytes, format_duration, load_config, setup_logging, Cli, SnapshotService};
use std::path::PathBuf;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse CLI arguments
    let args = Cli::parse();

    if args.url.trim().is_empty() {
        println!("Error: no URL provided");
        println!("Usage: page-snapshot --url <URL>");
        std::process::exit(1);
    }

    // Setup logging
    setup_logging(args.verbose)?;

    info!("Starting page-snapshot v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = match load_config(&args).await {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let base_dir = args.output.clone().unwrap_or_else(|| PathBuf::from("."));

    let service = match SnapshotService::new(config) {
        Ok(service) => service,
        Err(e) => {
            error!("Failed to initialize: {}", e);
            std::process::exit(1);
        }
    };

    match service.run(&args.url, &base_dir).await {
        Ok(report) => {
            println!("Snapshot captured successfully:");
            println!("  URL: {}", report.url);
            println!("  Output: {}", report.output_dir.display());
            println!("  HTML: {}", format_bytes(report.html_bytes));
            println!("  Screenshot: {}", format_bytes(report.screenshot_bytes));
            if let Some(count) = report.link_count {
                println!("  Links: {count}");
            }
            println!("  Duration: {}", format_duration(report.duration));
        }
        Err(e) => {
            error!("Snapshot failed: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
