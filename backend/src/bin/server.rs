//! Stargaze HTTP Server Binary
//!
//! Main entry point for the astro API server. Loads configuration, wires the
//! USNO almanac client and the analytic ephemeris, and starts serving.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin stargaze-server
//!
//! # Point at a different almanac mirror
//! ALMANAC_BASE_URL=http://localhost:9000 cargo run --bin stargaze-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `ALMANAC_BASE_URL`: USNO API base URL
//! - `ALMANAC_TIMEOUT_SECS`: Almanac request timeout (default: 20)
//! - `STARGAZE_CONFIG`: Path to a `stargaze.toml` file
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use stargaze::almanac::UsnoClient;
use stargaze::config::ServiceConfig;
use stargaze::ephemeris::AnalyticEphemeris;
use stargaze::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Stargaze HTTP Server");

    let config = ServiceConfig::load()?;
    info!("Almanac endpoint: {}", config.almanac.base_url);

    let almanac = UsnoClient::new(config.almanac.base_url.clone(), config.almanac.timeout())?;
    let ephemeris = AnalyticEphemeris::new();

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    let state = AppState::new(config, Arc::new(almanac), Arc::new(ephemeris));
    let app = create_router(state);

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
