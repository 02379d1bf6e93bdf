//! Conversions from external infrastructure errors into domain errors.

use cartevv_domain::CartevvError;
use reqwest::Error as HttpError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub CartevvError);

impl From<InfraError> for CartevvError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<CartevvError> for InfraError {
    fn from(value: CartevvError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoCartevvError {
    fn into_cartevv(self) -> CartevvError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → CartevvError */
/* -------------------------------------------------------------------------- */

impl IntoCartevvError for HttpError {
    fn into_cartevv(self) -> CartevvError {
        if self.is_timeout() {
            return CartevvError::Network("HTTP request timed out".into());
        }

        if self.is_redirect() {
            return CartevvError::Network("HTTP redirect limit exceeded".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return CartevvError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return CartevvError::InvalidInput(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                404 => CartevvError::NotFound(message),
                429 => CartevvError::Network(message),
                400..=499 => CartevvError::InvalidInput(message),
                _ => CartevvError::Network(message),
            };
        }

        CartevvError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_cartevv())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → CartevvError */
/* -------------------------------------------------------------------------- */

impl IntoCartevvError for UrlError {
    fn into_cartevv(self) -> CartevvError {
        CartevvError::InvalidInput(format!("invalid link: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_cartevv())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn status_error(status: StatusCode) -> HttpError {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(status)).mount(&server).await;

        let client = Client::builder().no_proxy().build().unwrap();
        client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err()
    }

    #[tokio::test]
    async fn http_status_404_maps_to_not_found() {
        let mapped: CartevvError = InfraError::from(status_error(StatusCode::NOT_FOUND).await).into();
        match mapped {
            CartevvError::NotFound(msg) => assert!(msg.contains("404")),
            other => panic!("expected not found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn http_status_400_maps_to_invalid_input() {
        let mapped: CartevvError =
            InfraError::from(status_error(StatusCode::BAD_REQUEST).await).into();
        assert!(matches!(mapped, CartevvError::InvalidInput(_)), "got {:?}", mapped);
    }

    #[tokio::test]
    async fn http_status_503_maps_to_network() {
        let mapped: CartevvError =
            InfraError::from(status_error(StatusCode::SERVICE_UNAVAILABLE).await).into();
        assert!(matches!(mapped, CartevvError::Network(_)), "got {:?}", mapped);
    }

    #[test]
    fn url_parse_error_maps_to_invalid_input() {
        let err = url::Url::parse("https://exa mple.com").unwrap_err();
        let mapped: CartevvError = InfraError::from(err).into();
        match mapped {
            CartevvError::InvalidInput(msg) => assert!(msg.starts_with("invalid link")),
            other => panic!("expected invalid input, got {:?}", other),
        }
    }
}
