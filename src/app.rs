//! HTTP router assembly.
//!
//! Kept separate from `main` so integration tests can drive the exact same
//! routes against a test database.

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{db::DbPool, handlers};

/// Build the application router with every route and the tracing layer.
///
/// # Routes
///
/// - `GET /health`
/// - `GET|POST /keys`, `GET|PUT|DELETE /keys/{id}`
/// - `GET|POST /staff`, `GET|PUT|DELETE /staff/{id}`
/// - `GET|POST /key-copies`, `GET|PUT|DELETE /key-copies/{id}`
pub fn build_router(pool: DbPool) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        // Keys
        .route(
            "/keys",
            get(handlers::keys::list_keys).post(handlers::keys::create_key),
        )
        .route(
            "/keys/{id}",
            get(handlers::keys::get_key)
                .put(handlers::keys::update_key)
                .delete(handlers::keys::delete_key),
        )
        // Staff
        .route(
            "/staff",
            get(handlers::staff::list_staff).post(handlers::staff::create_staff),
        )
        .route(
            "/staff/{id}",
            get(handlers::staff::get_staff)
                .put(handlers::staff::update_staff)
                .delete(handlers::staff::delete_staff),
        )
        // Key copies
        .route(
            "/key-copies",
            get(handlers::key_copies::list_key_copies)
                .post(handlers::key_copies::create_key_copy),
        )
        .route(
            "/key-copies/{id}",
            get(handlers::key_copies::get_key_copy)
                .put(handlers::key_copies::update_key_copy)
                .delete(handlers::key_copies::delete_key_copy),
        )
        .layer(TraceLayer::new_for_http())
        // Share database pool with all handlers via State extraction
        .with_state(pool)
}
