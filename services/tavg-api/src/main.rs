//! Temperature API Server
//!
//! Serves monthly average temperature samples for a fixed region.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use climate_common::BoundingBox;
use tavg_api::config::{apply_overrides, load_sampler_config, ConfigOverrides};
use tavg_api::routes::{build_router, cors_layer};
use tavg_api::state::AppState;
use tavg_sampler::TemperatureSampler;

/// Temperature API Server
#[derive(Parser, Debug)]
#[command(name = "tavg-api")]
#[command(about = "Monthly average temperature samples from NOAA NClimGrid")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:5175", env = "TAVG_LISTEN_ADDR")]
    listen: String,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "TAVG_WORKER_THREADS")]
    worker_threads: Option<usize>,

    /// Optional YAML file overriding sampler defaults
    #[arg(short, long, env = "TAVG_CONFIG")]
    config: Option<PathBuf>,

    /// Frontend origin allowed by CORS
    #[arg(long, env = "FRONTEND_URL")]
    frontend_url: Option<String>,

    /// Deployment name reported by /health
    #[arg(long, default_value = "development", env = "APP_ENV")]
    app_env: String,

    /// Upstream request timeout in seconds
    #[arg(long, env = "TAVG_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: Option<u64>,

    /// Sample region as "west,south,east,north"
    #[arg(long, env = "TAVG_BBOX", allow_hyphen_values = true)]
    bbox: Option<BoundingBox>,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .expect("Failed to create Tokio runtime");

    runtime.block_on(run_server(args))
}

async fn run_server(args: Args) -> Result<()> {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    info!(env = %args.app_env, "Starting temperature API server");

    let config = load_sampler_config(args.config.as_deref())?;
    let overrides = ConfigOverrides {
        request_timeout_secs: args.request_timeout_secs,
        bbox: args.bbox,
    };
    let config = apply_overrides(config, &overrides);
    info!(
        collection = %config.collection,
        bbox = %config.bbox,
        max_points = config.max_points,
        asset = ?config.asset,
        "Sampler configured"
    );

    let sampler = TemperatureSampler::from_config(config).context("Failed to build sampler")?;
    let state = Arc::new(AppState::new(sampler, args.app_env).with_prometheus(prometheus_handle));

    let app = build_router(state, cors_layer(args.frontend_url.as_deref()));

    // Parse listen address
    let addr: SocketAddr = args
        .listen
        .parse()
        .with_context(|| format!("Invalid listen address: {}", args.listen))?;
    info!(address = %addr, "Listening");

    // Start server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
