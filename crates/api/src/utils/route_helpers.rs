//! Route execution helpers
//!
//! Provides utilities to reduce boilerplate when implementing handlers with
//! timing and logging.

use std::time::Instant;

use cartevv_domain::Result as DomainResult;

use crate::utils::logging::log_request_outcome;

/// Execute a route body with automatic timing and logging
///
/// # Example
///
/// ```rust,ignore
/// pub async fn my_route(State(ctx): State<Arc<AppContext>>) -> Result<Json<T>, ApiError> {
///     execute_logged("my_module::my_route", || async {
///         ctx.some_service.do_something().await
///     })
///     .await
///     .map(Json)
///     .map_err(ApiError::from)
/// }
/// ```
pub async fn execute_logged<F, Fut, T>(route: &str, route_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = route_fn().await;

    log_request_outcome(route, start.elapsed(), result.as_ref().err());

    result
}

#[cfg(test)]
mod tests {
    use cartevv_domain::CartevvError;

    use super::*;

    #[tokio::test]
    async fn passes_results_through() {
        let ok = execute_logged("test::ok", || async { Ok::<_, CartevvError>(7) }).await;
        assert_eq!(ok, Ok(7));

        let err = execute_logged("test::err", || async {
            Err::<(), _>(CartevvError::NotFound("gone".into()))
        })
        .await;
        assert_eq!(err, Err(CartevvError::NotFound("gone".into())));
    }
}
