pub mod config;
pub mod cors;
pub mod database;
pub mod entity;
pub mod error;
pub mod event;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    axum::Router::new()
        .nest("/api", routes::api_routes(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
