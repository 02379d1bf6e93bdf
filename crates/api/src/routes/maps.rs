//! Maps link resolution route

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use cartevv_domain::{CartevvError, LinkRequest, ResolvedLocation};

use crate::context::AppContext;
use crate::error::ApiError;
use crate::utils::route_helpers::execute_logged;

/// Resolve a maps link to coordinates
///
/// `POST /maps/resolve` with `{"url": "..."}`.
///
/// # Example Response
/// ```json
/// { "lat": 48.858, "lon": 2.294, "finalUrl": "https://www.google.com/maps/@48.858,2.294,15z" }
/// ```
///
/// Responds 400 when `url` is missing and 404 when no coordinates were found.
pub async fn resolve_maps_link(
    State(context): State<Arc<AppContext>>,
    Json(request): Json<LinkRequest>,
) -> Result<Json<ResolvedLocation>, ApiError> {
    execute_logged("maps::resolve", || async {
        let link = request.link()?;
        context
            .resolver
            .resolve(link)
            .await
            .ok_or_else(|| CartevvError::NotFound("Coordinates not found".into()))
    })
    .await
    .map(Json)
    .map_err(ApiError::from)
}
