//! HYDRAWATCH: Offshore Pipeline Hydrate Risk Intelligence
//!
//! Heuristic hydrate-formation risk scoring for offshore gas/oil pipeline
//! segments. A proxy model, not a hydrate-equilibrium solver.
//!
//! ## Architecture
//!
//! - **Profile Registry**: per-class operating ranges, risk weights, and
//!   zone cutoffs, with operator overrides from a TOML field config
//! - **Risk Evaluator**: pure normalization + weighted aggregation into a
//!   clamped [0,1] index, dry-class damping, zone classification
//! - **REST API**: Axum endpoints for profile lookup and evaluation

pub mod api;
pub mod config;
pub mod registry;
pub mod risk;
pub mod types;

// Re-export field configuration
pub use config::FieldConfig;

// Re-export commonly used types
pub use types::{
    MeasurementSet, ParamRange, PipelineClass, PipelineProfile, RiskResult, RiskWeights,
    UnknownClass, Zone, ZoneCutoffs,
};

// Re-export the registry and evaluator entry points
pub use registry::ProfileRegistry;
pub use risk::{evaluate, EvaluateError};
