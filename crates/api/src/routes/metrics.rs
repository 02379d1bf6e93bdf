//! Resolver metrics route

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use cartevv_domain::ResolverStats;

use crate::context::AppContext;

/// Current resolver counters (`GET /metrics`).
pub async fn get_metrics(State(context): State<Arc<AppContext>>) -> Json<ResolverStats> {
    Json(context.resolver.stats())
}
