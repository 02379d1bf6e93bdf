//! Health check route for monitoring

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::context::AppContext;
use crate::utils::health::HealthStatus;

/// Get application health status
///
/// # Example Response
/// ```json
/// {
///   "is_healthy": true,
///   "score": 1.0,
///   "message": null,
///   "components": [
///     { "name": "config", "is_healthy": true, "message": null },
///     { "name": "resolver", "is_healthy": true, "message": null }
///   ],
///   "timestamp": 1698765432
/// }
/// ```
pub async fn get_health(State(context): State<Arc<AppContext>>) -> Json<HealthStatus> {
    Json(context.health_check())
}
