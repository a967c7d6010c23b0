//! HYDRAWATCH - Offshore Pipeline Hydrate Risk Intelligence
//!
//! HTTP service exposing the per-class hydrate risk model: profile lookup
//! and measurement evaluation.
//!
//! # Usage
//!
//! ```bash
//! # Run with built-in profiles
//! cargo run --release
//!
//! # Run with an operator field config
//! cargo run --release -- --config /etc/hydrawatch/petronius.toml
//! ```
//!
//! # Environment Variables
//!
//! - `HYDRAWATCH_CONFIG`: Path to a field config TOML (overridden by `--config`)
//! - `HYDRAWATCH_CORS_ORIGINS`: Comma-separated allowed CORS origins
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use hydrawatch::api::{self, ApiState};
use hydrawatch::config::FieldConfig;
use hydrawatch::registry::ProfileRegistry;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "hydrawatch")]
#[command(about = "Offshore Pipeline Hydrate Formation Risk Intelligence")]
#[command(version)]
struct CliArgs {
    /// Override the server address (default: "0.0.0.0:8080")
    #[arg(short, long)]
    addr: Option<String>,

    /// Path to a field config TOML file (takes precedence over the
    /// HYDRAWATCH_CONFIG search order)
    #[arg(long)]
    config: Option<String>,
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    // Load field configuration
    let config = match &args.config {
        Some(path) => FieldConfig::load_from_file(Path::new(path))
            .with_context(|| format!("loading field config from {path}"))?,
        None => FieldConfig::load(),
    };
    info!(
        "Field: {} | Platform: {}",
        config.field.name,
        if config.field.platform.is_empty() {
            "unset"
        } else {
            &config.field.platform
        },
    );

    // Build the immutable profile registry (built-ins + operator overrides)
    let registry = ProfileRegistry::from_config(&config)?;

    let server_addr = args.addr.unwrap_or_else(|| config.server.addr.clone());

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  HYDRAWATCH - Offshore Pipeline Hydrate Risk Intelligence");
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for profile in registry.iter() {
        info!(
            "  {} [{}]: P {:.0}-{:.0} bar, cuts {:.2}/{:.2}",
            profile.class,
            if profile.is_dry { "dry" } else { "wet" },
            profile.pressure_range_bar.min,
            profile.pressure_range_bar.max,
            profile.cutoffs.low,
            profile.cutoffs.high,
        );
    }

    let state = ApiState::new(Arc::new(registry), config.field.name.clone());
    let app = api::create_app(state);

    let listener = tokio::net::TcpListener::bind(&server_addr)
        .await
        .with_context(|| format!("binding server address {server_addr}"))?;
    info!("🌐 API listening on {}", server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP API")?;

    info!("✓ hydrawatch shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!("🛑 Received Ctrl+C, initiating shutdown...");
}
