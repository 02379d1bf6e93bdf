//! Tracing setup and structured request logging

use std::time::Duration;

use cartevv_domain::{CartevvError, LoggingConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Output is JSON
/// lines when `config.json` is set.
///
/// # Errors
/// Returns `CartevvError::Internal` if a global subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), CartevvError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    let result = if config.json { builder.json().try_init() } else { builder.try_init() };

    result.map_err(|err| CartevvError::Internal(format!("failed to install subscriber: {err}")))
}

/// Log the outcome of a route execution with structured fields.
///
/// `route` is a stable identifier (e.g. `"maps::resolve"`); callers must
/// avoid forwarding user-supplied values in it.
#[inline]
pub fn log_request_outcome(route: &str, elapsed: Duration, error: Option<&CartevvError>) {
    let duration_ms = elapsed.as_millis() as u64;

    match error {
        None => info!(route, duration_ms, "request_success"),
        Some(err) => {
            warn!(route, duration_ms, error_type = error_label(err), "request_failure")
        }
    }
}

/// Convert a `CartevvError` into a stable label suitable for metrics/logging.
#[inline]
pub fn error_label(error: &CartevvError) -> &'static str {
    match error {
        CartevvError::Config(_) => "config",
        CartevvError::Network(_) => "network",
        CartevvError::NotFound(_) => "not_found",
        CartevvError::InvalidInput(_) => "invalid_input",
        CartevvError::Internal(_) => "internal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(error_label(&CartevvError::Network("x".into())), "network");
        assert_eq!(error_label(&CartevvError::NotFound("x".into())), "not_found");
        assert_eq!(error_label(&CartevvError::InvalidInput("x".into())), "invalid_input");
    }
}
