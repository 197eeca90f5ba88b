//! Tzolk'in HTTP Server Binary
//!
//! This is the main entry point for the Tzolk'in REST API server.
//! It loads configuration and descriptions, sets up the interpretation
//! generator, builds the HTTP router and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Fallback interpretations only
//! cargo run --bin tzolkin-server
//!
//! # With generated interpretations
//! GEMINI_API_KEY=... cargo run --bin tzolkin-server
//! ```
//!
//! # Environment Variables
//!
//! - `TZOLKIN_CONFIG`: Path to a TOML config file (default: search for `tzolkin.toml`)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DESCRIPTIONS_PATH`: Descriptions JSON file
//! - `GEMINI_API_KEY`: API key for the interpretation generator
//! - `GENERATOR_ENABLED`, `GENERATOR_MODEL`, `GENERATOR_TIMEOUT_SECS`: generator overrides
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use tzolkin_rust::config::ServiceConfig;
use tzolkin_rust::http::{create_router, AppState};
use tzolkin_rust::services::{
    build_generator, DescriptionTable, InterpretationComposer, ReadingService,
};

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

    info!("Starting Tzolk'in HTTP Server");

    let config = ServiceConfig::load()?;

    // Static data is loaded once and shared read-only
    let descriptions = Arc::new(DescriptionTable::load_or_empty(&config.descriptions.path));
    let generator = build_generator(&config.generator);
    let composer = InterpretationComposer::new(generator, config.generator.timeout());
    info!(
        generator = composer.has_generator(),
        "Interpretation composer initialized"
    );

    let state = AppState::new(ReadingService::new(descriptions, composer));
    let app = create_router(state);

    let addr: SocketAddr = config.server.bind_address().parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
