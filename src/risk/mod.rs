//! Hydrate risk evaluator
//!
//! Transforms a [`MeasurementSet`] plus a [`PipelineProfile`] into a
//! [`RiskResult`]: per-profile normalization, weighted aggregation into a
//! clamped [0,1] index, dry-class damping, zone classification.
//!
//! The evaluator is a pure function of its inputs — no shared state, no
//! I/O, O(1), safe to call concurrently without coordination.

use thiserror::Error;

use crate::types::{MeasurementSet, ParamRange, PipelineProfile, RiskResult, Zone, ZoneCutoffs};

/// Documented operating envelope for meaningful (non-extrapolated) results.
///
/// The evaluator itself does not enforce these bounds; they are the shared
/// source of truth for callers collecting inputs (API consumers, the
/// scenario sweep).
pub mod envelope {
    /// Lowest line pressure across all class profiles (bar).
    pub const PRESSURE_MIN_BAR: f64 = 1.0;
    /// Highest line pressure across all class profiles (bar).
    pub const PRESSURE_MAX_BAR: f64 = 150.0;
    /// Lower temperature bound (°C).
    pub const TEMPERATURE_MIN_C: f64 = -5.0;
    /// Upper temperature bound (°C).
    pub const TEMPERATURE_MAX_C: f64 = 40.0;
    /// Maximum practical MEG inhibitor dose (%).
    pub const MEG_MAX_PERCENT: f64 = 60.0;
    /// Maximum produced-water salinity (ppm).
    pub const SALINITY_MAX_PPM: f64 = 35_000.0;
    /// Maximum water cut (%).
    pub const WATER_CUT_MAX_PERCENT: f64 = 80.0;
}

/// Guard against degenerate zero-width normalization ranges.
pub const RANGE_EPSILON: f64 = 1e-6;

/// Attenuation applied to dry classes when no water ingress is simulated.
pub const DRY_DAMPING_FACTOR: f64 = 0.1;

/// Evaluation failure. The model is total over finite inputs, so the only
/// failure mode is a non-finite measurement.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EvaluateError {
    #[error("invalid input: measurement '{field}' is not finite")]
    NonFiniteInput { field: &'static str },
}

/// Normalized pressure contribution.
///
/// Not clamped: over-pressure beyond the profile range keeps amplifying
/// risk until the final clamp on the aggregate.
pub fn normalize_pressure(pressure_bar: f64, range: &ParamRange) -> f64 {
    (pressure_bar - range.min) / RANGE_EPSILON.max(range.width())
}

/// Normalized temperature contribution, clamped to [0,1].
///
/// Colder than the range midpoint increases risk. Unlike pressure this
/// term is clamped: an arbitrarily cold excursion cannot drive the index
/// above 1 through this term alone.
pub fn normalize_temperature(temperature_c: f64, range: &ParamRange) -> f64 {
    let mid = range.midpoint();
    let raw = (mid - temperature_c) / RANGE_EPSILON.max(mid - range.min);
    raw.clamp(0.0, 1.0)
}

/// Map a clamped risk index to its zone band.
///
/// Boundaries are half-open on the low side: exactly `low` is WARNING,
/// exactly `high` is DANGER.
pub fn classify(risk_index: f64, cutoffs: &ZoneCutoffs) -> Zone {
    if risk_index < cutoffs.low {
        Zone::Safe
    } else if risk_index < cutoffs.high {
        Zone::Warning
    } else {
        Zone::Danger
    }
}

/// Evaluate hydrate formation risk for one measurement set against a profile.
///
/// Steps: normalize each parameter, aggregate with the profile weights
/// (inhibitor subtracts), clamp to [0,1], damp dry classes without ingress
/// by [`DRY_DAMPING_FACTOR`] after the clamp, then classify.
pub fn evaluate(
    measurements: &MeasurementSet,
    profile: &PipelineProfile,
) -> Result<RiskResult, EvaluateError> {
    if let Some(field) = measurements.non_finite_field() {
        return Err(EvaluateError::NonFiniteInput { field });
    }

    let pn = normalize_pressure(measurements.pressure_bar, &profile.pressure_range_bar);
    let tn = normalize_temperature(measurements.temperature_c, &profile.temperature_range_c);
    let meg_n = measurements.inhibitor_meg_percent / envelope::MEG_MAX_PERCENT;
    let sn = measurements.salinity_ppm / envelope::SALINITY_MAX_PPM;
    let wn = measurements.water_cut_percent / envelope::WATER_CUT_MAX_PERCENT;

    let w = &profile.weights;
    let raw = w.pressure * pn + w.temperature * tn + w.salinity * sn + w.water_cut * wn
        - w.inhibitor * meg_n;

    let mut risk_index = raw.clamp(0.0, 1.0);

    // Damping is applied after the clamp: full clamped risk first, then
    // attenuate. Not folded into the weighted sum.
    if profile.is_dry && !measurements.water_ingress_simulated {
        risk_index *= DRY_DAMPING_FACTOR;
    }

    Ok(RiskResult {
        risk_index,
        zone: classify(risk_index, &profile.cutoffs),
    })
}
