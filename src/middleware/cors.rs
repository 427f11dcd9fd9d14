//! Cross-origin access for the browser front end.
//!
//! A single configured origin may call every endpoint with the methods and
//! headers below. Preflight `OPTIONS` requests are answered by the layer and
//! never reach a handler.

use axum::http::{HeaderValue, Method, header, header::InvalidHeaderValue};
use tower_http::cors::CorsLayer;

/// Build the CORS layer for `allowed_origin`, e.g. `http://localhost:3000`.
///
/// # Errors
///
/// Returns an error if the origin is not a valid header value.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(allowed_origin)?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}
