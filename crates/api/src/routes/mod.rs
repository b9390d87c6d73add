pub mod health;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /generate-outline                                outline step (POST)
/// /draft-section                                   drafting step (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/generate-outline",
            post(handlers::outline::generate_outline),
        )
        .route("/draft-section", post(handlers::draft::draft_section))
}
