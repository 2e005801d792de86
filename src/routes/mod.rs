//! HTTP route handlers.
//!
//! Every response is marked `Cache-Control: no-store`: predictions depend on
//! the request body and the health probe must always reach the process.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod predict;

use axum::{
    http::Uri,
    middleware,
    routing::{get, post},
    Router,
};
use axum::http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::error::AppError;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Fallback for unknown routes.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Creates the Axum router with all routes and response headers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(predict::predict))
        .route("/health", get(health::health))
        .fallback(not_found)
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Mobile and web clients call the API cross-origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
