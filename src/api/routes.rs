//! API route table.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{self, ApiState};

/// Build the /api/v1 router.
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route("/profiles", get(handlers::list_profiles))
        .route("/profiles/:class", get(handlers::get_profile))
        .route("/evaluate", post(handlers::evaluate))
        .with_state(state)
}

/// Top-level routes outside the versioned API prefix.
pub fn legacy_routes(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .with_state(state)
}
