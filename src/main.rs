//! Clinic API Server
//!
//! Run with: cargo run --bin clinic
//!
//! # Configuration
//!
//! Settings come from a TOML file (`--config`, or the first of
//! `~/.config/clinic/config.toml`, `/etc/clinic/config.toml`,
//! `./config.toml`) with `CLINIC_*` environment overrides. `RUST_LOG`
//! overrides the configured log level.

use clap::Parser;
use clinic::api::{serve, AppState};
use clinic::config::{Config, LoggingConfig};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "clinic")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Practice website API server")]
struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory with the built web UI
    #[arg(long)]
    static_dir: Option<String>,

    /// Log emails instead of sending them
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.static_dir.is_some() {
        config.server.static_dir = args.static_dir;
    }
    if args.dry_run {
        config.email.enabled = false;
    }
    config.validate()?;

    init_tracing(&config.logging)?;

    tracing::info!("Starting clinic API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        weekend_dates = config.booking.weekend_dates,
        confirmation_secs = config.booking.confirmation_display_secs,
        "Booking settings"
    );
    if let Some(dir) = &config.server.static_dir {
        tracing::info!("Serving web UI from {}", dir);
    }

    let state = AppState::from_config(config)?;
    tracing::info!("Email mode: {}", state.email_mode());

    serve(state).await?;

    tracing::info!("Clinic API server stopped");
    Ok(())
}

/// Pretty or JSON output, to stderr or an append-only file
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("clinic={},tower_http=info", logging.level))
    });

    let file = match &logging.file {
        Some(path) => Some(Arc::new(
            OpenOptions::new().create(true).append(true).open(path)?,
        )),
        None => None,
    };

    let registry = tracing_subscriber::registry().with(filter);
    match (logging.format.as_str(), file) {
        ("json", Some(file)) => registry.with(fmt::layer().json().with_writer(file)).init(),
        ("json", None) => registry.with(fmt::layer().json()).init(),
        (_, Some(file)) => registry
            .with(fmt::layer().with_ansi(false).with_writer(file))
            .init(),
        (_, None) => registry.with(fmt::layer()).init(),
    }

    Ok(())
}
