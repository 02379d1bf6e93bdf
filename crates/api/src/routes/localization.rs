//! Localization editor routes

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use cartevv_domain::{ExpandedLink, LinkRequest};

use crate::context::AppContext;
use crate::error::ApiError;
use crate::utils::route_helpers::execute_logged;

/// Expand a shortened Google Maps link
///
/// `POST /localisations/expand-url` with `{"url": "https://maps.app.goo.gl/..."}`
/// responds `{"finalUrl": "..."}`.
pub async fn expand_url(
    State(context): State<Arc<AppContext>>,
    Json(request): Json<LinkRequest>,
) -> Result<Json<ExpandedLink>, ApiError> {
    execute_logged("localization::expand_url", || async {
        let link = request.link()?;
        let final_url = context.resolver.expand(link).await?;
        Ok(ExpandedLink { final_url })
    })
    .await
    .map(Json)
    .map_err(ApiError::from)
}
