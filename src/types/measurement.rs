//! Transient measurement sets supplied per evaluation request.

use serde::{Deserialize, Serialize};

/// One set of raw operating measurements for a pipeline segment.
///
/// Created fresh per evaluation call and owned entirely by the caller.
/// The evaluator accepts any finite values — out-of-envelope inputs
/// extrapolate rather than error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MeasurementSet {
    /// Line pressure (bar).
    pub pressure_bar: f64,
    /// Fluid temperature (°C).
    pub temperature_c: f64,
    /// MEG inhibitor concentration (%, practical dose 0–60).
    pub inhibitor_meg_percent: f64,
    /// Produced water salinity (ppm, 0–35 000).
    pub salinity_ppm: f64,
    /// Water cut (%, 0–80).
    pub water_cut_percent: f64,
    /// Meaningful only for dry classes: suppresses the dry damping factor.
    pub water_ingress_simulated: bool,
}

impl MeasurementSet {
    /// Typical wet-class operating point: inhibited multiphase production.
    pub fn wet_preset(pressure_bar: f64, temperature_c: f64) -> Self {
        Self {
            pressure_bar,
            temperature_c,
            inhibitor_meg_percent: 10.0,
            salinity_ppm: 10_000.0,
            water_cut_percent: 25.0,
            water_ingress_simulated: false,
        }
    }

    /// Typical dry-class operating point.
    ///
    /// Dehydrated gas carries no inhibitor and no produced water; an
    /// ingress event introduces a small salinity / water-cut load.
    pub fn dry_preset(pressure_bar: f64, temperature_c: f64, ingress: bool) -> Self {
        let (salinity_ppm, water_cut_percent) = if ingress { (5_000.0, 5.0) } else { (0.0, 0.0) };
        Self {
            pressure_bar,
            temperature_c,
            inhibitor_meg_percent: 0.0,
            salinity_ppm,
            water_cut_percent,
            water_ingress_simulated: ingress,
        }
    }

    /// First non-finite numeric field, if any.
    pub fn non_finite_field(&self) -> Option<&'static str> {
        for (name, value) in [
            ("pressure_bar", self.pressure_bar),
            ("temperature_c", self.temperature_c),
            ("inhibitor_meg_percent", self.inhibitor_meg_percent),
            ("salinity_ppm", self.salinity_ppm),
            ("water_cut_percent", self.water_cut_percent),
        ] {
            if !value.is_finite() {
                return Some(name);
            }
        }
        None
    }
}
