//! Request Inspector
//!
//! A small web service with three demo pages built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌────────────────────────────────────────────┐
//!                      │              REQUEST INSPECTOR              │
//!                      │                                             │
//!   Client Request     │  ┌─────────┐    ┌──────────────────────┐   │
//!   ──────────────────▶│  │  http   │───▶│       pages          │   │
//!                      │  │ server  │    │ /  /request-info     │   │
//!                      │  └─────────┘    │ /form-data           │   │
//!                      │                 │ /phone-validator ────┼───┼──▶ phone
//!   Client Response    │  ┌─────────┐    │ /health              │   │    normalizer
//!   ◀──────────────────┼──│ render  │◀───└──────────────────────┘   │
//!                      │  └─────────┘                               │
//!                      │                                             │
//!                      │  ┌───────────────────────────────────────┐ │
//!                      │  │         Cross-Cutting Concerns        │ │
//!                      │  │  ┌────────┐ ┌───────────┐ ┌─────────┐ │ │
//!                      │  │  │ config │ │observa-   │ │lifecycle│ │ │
//!                      │  │  │        │ │bility     │ │shutdown │ │ │
//!                      │  │  └────────┘ └───────────┘ └─────────┘ │ │
//!                      │  └───────────────────────────────────────┘ │
//!                      └────────────────────────────────────────────┘
//! ```
//!
//! The only decision logic lives in the phone normalizer; every other
//! route is a pass-through of request data into rendered HTML.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use request_inspector::config::{self, AppConfig};
use request_inspector::http::HttpServer;
use request_inspector::lifecycle::Shutdown;
use request_inspector::observability::metrics;

#[derive(Parser)]
#[command(name = "request-inspector")]
#[command(about = "HTTP request inspector and phone validator demo pages", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults apply when absent).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    // Environment filter wins over the configured level.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "request_inspector={},tower_http=info",
                    config.observability.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("request-inspector v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.security.max_body_size,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
