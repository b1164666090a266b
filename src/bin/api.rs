//! Socialify API Server
//!
//! Run with: cargo run --bin socialify-api
//!
//! # Configuration
//!
//! A TOML config file is read from `--config`, `~/.config/socialify/config.toml`
//! or `./config.toml` (first found). Environment variables override it:
//! - `SOCIALIFY_API_HOST` / `SOCIALIFY_API_PORT`: Bind address (default: 0.0.0.0:8080)
//! - `SOCIALIFY_SEED_FILE`: JSON seed file (default: built-in sample data)
//! - `SOCIALIFY_TOP_USERS_LIMIT` / `SOCIALIFY_LATEST_POSTS_LIMIT`: View sizes (default: 5)
//! - `SOCIALIFY_LOG_LEVEL` / `SOCIALIFY_LOG_FORMAT`: Logging (default: info, pretty)
//! - `RUST_LOG`: Full filter directive, takes precedence over the log level
//!
//! Command-line flags override both.

use anyhow::Context;
use clap::Parser;
use socialify::analytics::AnalyticsService;
use socialify::api::{serve, AppState};
use socialify::config::{Config, LoggingConfig};
use socialify::dataset::Dataset;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "socialify-api")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Social analytics API server")]
struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON seed file (overrides config)
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().or_else(Config::discover);
    let mut config = match &config_path {
        Some(path) => Config::load_with_env(path)?,
        None => Config::from_env(),
    };

    if let Some(seed) = &args.seed {
        config.dataset.seed_file = Some(seed.to_string_lossy().to_string());
    }
    if let Some(host) = args.host {
        config.api.host = host;
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }

    init_tracing(&config.logging);

    tracing::info!("Starting Socialify API server v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }

    // Load the dataset once; it is read-only from here on
    let dataset = match &config.dataset.seed_file {
        Some(path) => Dataset::load(Path::new(path))
            .with_context(|| format!("Failed to load seed file {}", path))?,
        None => {
            tracing::info!("No seed file configured, serving built-in sample data");
            Dataset::sample().context("Built-in sample data is invalid")?
        }
    };
    tracing::info!("Dataset loaded: {}", dataset.stats());

    let analytics = Arc::new(AnalyticsService::new(
        Arc::new(dataset),
        config.dataset.analytics(),
    ));
    tracing::info!(
        top_users_limit = config.dataset.top_users_limit,
        latest_posts_limit = config.dataset.latest_posts_limit,
        "Analytics ready"
    );

    let state = AppState::new(analytics, config.api.clone());

    // Run server
    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    tracing::info!("Socialify API server stopped");
    Ok(())
}

/// Install the tracing subscriber
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "socialify={level},socialify_api={level},tower_http=debug",
            level = logging.level
        ))
    });

    let json = logging.is_json();

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();
}
