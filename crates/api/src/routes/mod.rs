//! HTTP routes - frontend to backend bridge

mod health;
mod localization;
mod maps;
mod metrics;

use std::sync::Arc;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

pub use health::get_health;
pub use localization::expand_url;
pub use maps::resolve_maps_link;
pub use metrics::get_metrics;

use crate::context::AppContext;

/// Build the application router with CORS applied.
pub fn build_router(context: Arc<AppContext>) -> Router {
    let cors = cors_layer(&context.config.server.allowed_origins);

    Router::new()
        .route("/maps/resolve", post(resolve_maps_link))
        .route("/localisations/expand-url", post(expand_url))
        .route("/metrics", get(get_metrics))
        .route("/health", get(get_health))
        .layer(cors)
        .with_state(context)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin, "skipping invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
}
