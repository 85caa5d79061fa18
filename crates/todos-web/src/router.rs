//! Axum router construction for the todo API.
//!
//! Assembles all routes into a single [`Router`] with request tracing and
//! CORS middleware.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- list view, `POST /` -- create
/// - `GET /health` -- liveness probe
/// - `GET|PUT|DELETE|POST /{target}` -- per-item and bulk (`/all`) actions
///
/// CORS allows any origin for development.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::list_todos).post(handlers::create_todo))
        .route("/health", get(handlers::health))
        .route(
            "/{target}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo)
                .post(handlers::override_todo),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
