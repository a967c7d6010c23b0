//! API route handlers
//!
//! Request handling logic for all API endpoints:
//! - Profile lookup (all classes / single class)
//! - Risk evaluation for a supplied measurement set
//! - Liveness health check

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::api::envelope::{ApiErrorResponse, ApiResponse};
use crate::registry::ProfileRegistry;
use crate::risk::{self, EvaluateError};
use crate::types::{MeasurementSet, PipelineClass, Zone};

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers.
///
/// The registry is immutable after startup, so handlers share it through a
/// plain `Arc` — no locking required.
#[derive(Clone)]
pub struct ApiState {
    pub registry: Arc<ProfileRegistry>,
    /// Field name reported by /health, from the field config.
    pub field_name: String,
}

impl ApiState {
    pub fn new(registry: Arc<ProfileRegistry>, field_name: impl Into<String>) -> Self {
        Self {
            registry,
            field_name: field_name.into(),
        }
    }
}

// ============================================================================
// Request / Response Bodies
// ============================================================================

/// Body for `POST /api/v1/evaluate`.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateRequest {
    /// Pipeline class name (case-insensitive).
    pub class: String,
    pub pressure_bar: f64,
    pub temperature_c: f64,
    #[serde(default)]
    pub inhibitor_meg_percent: f64,
    #[serde(default)]
    pub salinity_ppm: f64,
    #[serde(default)]
    pub water_cut_percent: f64,
    #[serde(default)]
    pub water_ingress_simulated: bool,
}

impl EvaluateRequest {
    fn measurements(&self) -> MeasurementSet {
        MeasurementSet {
            pressure_bar: self.pressure_bar,
            temperature_c: self.temperature_c,
            inhibitor_meg_percent: self.inhibitor_meg_percent,
            salinity_ppm: self.salinity_ppm,
            water_cut_percent: self.water_cut_percent,
            water_ingress_simulated: self.water_ingress_simulated,
        }
    }
}

/// Evaluation result as rendered to API consumers.
#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub class: PipelineClass,
    pub description: String,
    pub risk_index: f64,
    /// Index scaled to 0–100 for display.
    pub risk_percent: f64,
    pub zone: Zone,
    /// Zone label as shown to operators (SAFE / WARNING / DANGER).
    pub zone_label: String,
    /// True when the dry-class damping factor attenuated the index.
    pub damping_applied: bool,
}

/// Liveness response for `/health`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub field: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// `GET /health` — liveness check.
pub async fn health(State(state): State<ApiState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        service: "hydrawatch",
        version: env!("CARGO_PKG_VERSION"),
        field: state.field_name.clone(),
    })
}

/// `GET /api/v1/profiles` — all class profiles in registry order.
pub async fn list_profiles(State(state): State<ApiState>) -> Response {
    let profiles: Vec<_> = state.registry.iter().cloned().collect();
    ApiResponse::ok(profiles)
}

/// `GET /api/v1/profiles/:class` — single class profile.
pub async fn get_profile(State(state): State<ApiState>, Path(class): Path<String>) -> Response {
    match state.registry.resolve(&class) {
        Ok(profile) => ApiResponse::ok(profile.clone()),
        Err(e) => ApiErrorResponse::unknown_class(e.to_string()),
    }
}

/// `POST /api/v1/evaluate` — evaluate one measurement set.
pub async fn evaluate(
    State(state): State<ApiState>,
    Json(request): Json<EvaluateRequest>,
) -> Response {
    let profile = match state.registry.resolve(&request.class) {
        Ok(profile) => profile,
        Err(e) => return ApiErrorResponse::bad_request("UNKNOWN_CLASS", e.to_string()),
    };

    let measurements = request.measurements();
    match risk::evaluate(&measurements, profile) {
        Ok(result) => {
            debug!(
                class = %profile.class,
                risk_index = result.risk_index,
                zone = %result.zone,
                "Evaluated measurement set"
            );
            ApiResponse::ok(RiskAssessment {
                class: profile.class,
                description: profile.description.clone(),
                risk_index: result.risk_index,
                risk_percent: result.percent(),
                zone: result.zone,
                zone_label: result.zone.to_string(),
                damping_applied: profile.is_dry && !measurements.water_ingress_simulated,
            })
        }
        Err(e @ EvaluateError::NonFiniteInput { .. }) => {
            ApiErrorResponse::bad_request("INVALID_INPUT", e.to_string())
        }
    }
}
