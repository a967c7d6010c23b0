//! REST API module using Axum
//!
//! Provides HTTP endpoints for pipeline profile lookup and hydrate risk
//! evaluation:
//! - `GET  /health` — liveness
//! - `GET  /api/v1/profiles` — all class profiles
//! - `GET  /api/v1/profiles/:class` — single class profile
//! - `POST /api/v1/evaluate` — evaluate a measurement set

pub mod envelope;
pub mod handlers;
mod routes;

pub use handlers::{ApiState, EvaluateRequest, RiskAssessment};

use axum::http::{header, Method};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build a CORS layer that is restrictive by default (same-origin only).
///
/// Set `HYDRAWATCH_CORS_ORIGINS` to a comma-separated list of allowed
/// origins for development (e.g., `http://localhost:5173` for a local
/// dashboard dev server).
fn build_cors_layer() -> CorsLayer {
    match std::env::var("HYDRAWATCH_CORS_ORIGINS") {
        Ok(origins) => {
            let allowed: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!(origins = %origins, "CORS: allowing configured origins");
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
        }
        Err(_) => {
            // No cross-origin allowed — consumers are same-origin
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
        }
    }
}

/// Create the complete application router.
pub fn create_app(state: ApiState) -> Router {
    let cors = build_cors_layer();

    Router::new()
        .nest("/api/v1", routes::api_routes(state.clone()))
        .merge(routes::legacy_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
