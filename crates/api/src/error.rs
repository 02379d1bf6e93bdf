//! Mapping of domain errors onto HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cartevv_domain::CartevvError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Client-facing error message.
    pub message: String,
}

/// Domain error crossing the HTTP boundary.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub CartevvError);

impl ApiError {
    /// HTTP status for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match self.0 {
            CartevvError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            CartevvError::NotFound(_) => StatusCode::NOT_FOUND,
            CartevvError::Network(_) => StatusCode::BAD_GATEWAY,
            CartevvError::Config(_) | CartevvError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing message. Internal details are not exposed.
    pub fn message(&self) -> String {
        match &self.0 {
            CartevvError::InvalidInput(msg)
            | CartevvError::NotFound(msg)
            | CartevvError::Network(msg) => msg.clone(),
            CartevvError::Config(_) | CartevvError::Internal(_) => "Server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody { message: self.message() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let cases = [
            (CartevvError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (CartevvError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (CartevvError::Network("x".into()), StatusCode::BAD_GATEWAY),
            (CartevvError::Config("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (CartevvError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError(err).status(), expected);
        }
    }

    #[test]
    fn internal_details_are_hidden() {
        let err = ApiError(CartevvError::Internal("pool exhausted at 0x1f".into()));
        assert_eq!(err.message(), "Server error");

        let err = ApiError(CartevvError::NotFound("Coordinates not found".into()));
        assert_eq!(err.message(), "Coordinates not found");
    }
}
