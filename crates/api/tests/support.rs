#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use cartevv_api::{build_router, AppContext};
use cartevv_domain::Config;
use serde_json::Value;
use tower::ServiceExt;

/// Router wired with the production adapters and a default configuration.
pub fn test_router() -> Router {
    let context = AppContext::new(Config::default()).expect("failed to build application context");
    build_router(Arc::new(context))
}

/// Send a JSON request through the router and decode the JSON response.
pub async fn send_json(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");

    let response = router.clone().oneshot(request).await.expect("router call failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("failed to read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response is not JSON")
    };

    (status, json)
}
