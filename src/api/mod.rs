//! HTTP API server

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use handlers::ApiError;
pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/albums", get(handlers::list_albums))
        .route("/albums/:id", get(handlers::get_album))
        .route("/create", post(handlers::create_album))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper serving the startup catalogue
pub fn create_seeded_router() -> Router {
    create_router(AppState::seeded())
}
