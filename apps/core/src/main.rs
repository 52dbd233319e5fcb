// Sona Research Assistant backend entry point.
// Thin proxy between the browser extension and the external search providers.

mod api;
mod config;
mod error;
mod explain;
mod models;
mod search;
mod session;
mod telemetry;

#[cfg(test)]
mod tests;

use std::net::SocketAddr;

use anyhow::Result;
use tracing::{info, warn};

use crate::api::AppState;
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    telemetry::init(&config)?;

    if config.explain_api_key.is_none() {
        warn!("No explanation API key found. Set OPENAI_API_KEY or CLAUDE_API_KEY.");
    }
    if config.youtube_api_key.is_none() {
        info!("YOUTUBE_API_KEY not set; video search will return search links only.");
    }

    let state = AppState::new(&config);
    let app = api::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("{} listening on {}", api::SERVICE_NAME, addr);

    axum::serve(listener, app).await?;

    Ok(())
}
