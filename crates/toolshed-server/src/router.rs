use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::app_state::AppState;
use crate::handlers;

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        // Tool service: JSON-RPC over HTTP POST
        .route("/rpc", post(handlers::rpc_request))
        // CORS: allow any origin (orchestrators run in various contexts)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
