//! Request middleware
//!
//! Request-id tracing and the method override that lets HTML forms issue
//! PUT and DELETE.

use axum::{
    extract::Request,
    http::Method,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Query parameter carrying the overriding method, e.g. `/contact?_method=PUT`
pub const METHOD_OVERRIDE_PARAM: &str = "_method";

/// Header carrying the overriding method
pub const METHOD_OVERRIDE_HEADER: &str = "x-http-method-override";

/// Request ID middleware - adds unique ID to each request for tracing
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    let duration = start.elapsed();
    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}

/// Rewrite a `POST` into the method named by the override header or the
/// `_method` query parameter
///
/// Runs before routing. Only PUT, PATCH and DELETE are accepted as targets.
pub fn override_method(mut request: Request) -> Request {
    if request.method() != Method::POST {
        return request;
    }

    let requested = request
        .headers()
        .get(METHOD_OVERRIDE_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .or_else(|| {
            request.uri().query().and_then(|query| {
                query
                    .split('&')
                    .filter_map(|pair| pair.split_once('='))
                    .find(|(key, _)| *key == METHOD_OVERRIDE_PARAM)
                    .map(|(_, value)| value.to_string())
            })
        });

    let target = match requested.map(|m| m.trim().to_ascii_uppercase()).as_deref() {
        Some("PUT") => Method::PUT,
        Some("PATCH") => Method::PATCH,
        Some("DELETE") => Method::DELETE,
        _ => return request,
    };

    tracing::debug!(method = %target, uri = %request.uri(), "Method override");
    *request.method_mut() = target;
    request
}
