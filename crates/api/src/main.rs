//! Cartevv - maps link resolver service
//!
//! Main entry point for the HTTP server.

use std::sync::Arc;

use anyhow::Context;
use cartevv_api::server::serve;
use cartevv_api::utils::logging::init_tracing;
use cartevv_api::AppContext;
use cartevv_domain::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading configuration
    let dotenv = dotenvy::dotenv();

    let (config, config_error) = match cartevv_infra::config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    init_tracing(&config.logging).context("failed to initialise tracing")?;

    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env"),
        Err(err) => tracing::debug!(error = %err, "no .env file loaded"),
    }
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "falling back to default configuration");
    }

    let context = AppContext::new(config).context("failed to build application context")?;
    serve(Arc::new(context)).await.context("server failed")?;

    Ok(())
}
