use axum::{Router, routing::any};

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

/// Every method is forwarded so that handlers answer OPTIONS and 405 themselves.
pub fn routes(config: &AppConfig) -> Router<AppState> {
    Router::new()
        .route("/about", any(handlers::about::serve))
        .route("/photos", any(handlers::photos::serve))
        .route("/reviews", any(handlers::reviews::serve))
        .route(
            "/upload-image",
            any(handlers::upload::serve)
                .layer(handlers::upload::upload_body_limit(config.upload.max_body_bytes)),
        )
}
