//! Per-class operating profiles: parameter ranges, risk weights, zone cutoffs.
//!
//! Each struct implements a per-class constructor with values generalized
//! from published offshore flow assurance envelopes. Profiles are plain
//! immutable data — built once at startup and never mutated.

use serde::{Deserialize, Serialize};

use super::PipelineClass;

/// Operating range for a normalized parameter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
}

impl ParamRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range width (`max - min`).
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Range midpoint.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Non-negative weighting coefficients for the linear risk combination.
///
/// No sum-to-one constraint — each weight scales its normalized term
/// directly. The inhibitor weight is subtracted in the aggregate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskWeights {
    pub pressure: f64,
    pub temperature: f64,
    pub inhibitor: f64,
    pub salinity: f64,
    pub water_cut: f64,
}

/// Cutoffs partitioning the [0,1] risk index into SAFE/WARNING/DANGER bands.
///
/// Invariant: `0 <= low < high <= 1`. Exactly `low` classifies WARNING,
/// exactly `high` classifies DANGER.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ZoneCutoffs {
    pub low: f64,
    pub high: f64,
}

/// Operating profile for one pipeline class.
///
/// Invariant for the program lifetime once built by the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineProfile {
    pub class: PipelineClass,
    pub pressure_range_bar: ParamRange,
    pub temperature_range_c: ParamRange,
    pub weights: RiskWeights,
    pub cutoffs: ZoneCutoffs,
    /// Dry-gas segment: hydrate risk is damped unless water ingress occurs.
    pub is_dry: bool,
    /// Informational only — no computational role.
    pub description: String,
}

impl PipelineProfile {
    /// Raw multiphase fluids from wells to processing. Hydrate-prone.
    pub fn gathering() -> Self {
        Self {
            class: PipelineClass::Gathering,
            pressure_range_bar: ParamRange::new(10.0, 80.0),
            temperature_range_c: ParamRange::new(-5.0, 40.0),
            weights: RiskWeights {
                pressure: 0.34,
                temperature: 0.40,
                inhibitor: 0.36,
                salinity: 0.12,
                water_cut: 0.18,
            },
            cutoffs: ZoneCutoffs { low: 0.33, high: 0.66 },
            is_dry: false,
            description: "Brings raw multiphase fluids (oil/gas/water) from wells to processing."
                .to_string(),
        }
    }

    /// Product movement from processing facilities to transmission lines.
    pub fn feeder() -> Self {
        Self {
            class: PipelineClass::Feeder,
            pressure_range_bar: ParamRange::new(20.0, 100.0),
            temperature_range_c: ParamRange::new(-5.0, 40.0),
            weights: RiskWeights {
                pressure: 0.35,
                temperature: 0.40,
                inhibitor: 0.35,
                salinity: 0.14,
                water_cut: 0.16,
            },
            cutoffs: ZoneCutoffs { low: 0.33, high: 0.66 },
            is_dry: false,
            description:
                "Responsible for product movement from processing facilities to transmission pipelines."
                    .to_string(),
        }
    }

    /// Subsea production flowline. Hydrate-prone.
    pub fn flowline() -> Self {
        Self {
            class: PipelineClass::Flowline,
            pressure_range_bar: ParamRange::new(15.0, 100.0),
            temperature_range_c: ParamRange::new(-5.0, 40.0),
            weights: RiskWeights {
                pressure: 0.35,
                temperature: 0.40,
                inhibitor: 0.35,
                salinity: 0.14,
                water_cut: 0.16,
            },
            cutoffs: ZoneCutoffs { low: 0.33, high: 0.66 },
            is_dry: false,
            description: "Production flowline (subsea); hydrate-prone.".to_string(),
        }
    }

    /// Midstream dry gas. Hydrates negligible unless water ingress.
    pub fn transmission() -> Self {
        Self {
            class: PipelineClass::Transmission,
            pressure_range_bar: ParamRange::new(30.0, 150.0),
            temperature_range_c: ParamRange::new(-5.0, 40.0),
            weights: RiskWeights {
                pressure: 0.38,
                temperature: 0.42,
                inhibitor: 0.32,
                salinity: 0.12,
                water_cut: 0.12,
            },
            cutoffs: ZoneCutoffs { low: 0.35, high: 0.70 },
            is_dry: true,
            description: "Midstream dry gas; hydrates negligible unless water ingress.".to_string(),
        }
    }

    /// Local network delivering processed dry gas to end users.
    pub fn distribution() -> Self {
        Self {
            class: PipelineClass::Distribution,
            pressure_range_bar: ParamRange::new(1.0, 30.0),
            temperature_range_c: ParamRange::new(-5.0, 40.0),
            weights: RiskWeights {
                pressure: 0.28,
                temperature: 0.45,
                inhibitor: 0.35,
                salinity: 0.12,
                water_cut: 0.12,
            },
            cutoffs: ZoneCutoffs { low: 0.30, high: 0.60 },
            is_dry: true,
            description: "Local network delivering processed, dry natural gas to end users."
                .to_string(),
        }
    }

    /// Built-in profile for a class.
    pub fn for_class(class: PipelineClass) -> Self {
        match class {
            PipelineClass::Gathering => Self::gathering(),
            PipelineClass::Feeder => Self::feeder(),
            PipelineClass::Flowline => Self::flowline(),
            PipelineClass::Transmission => Self::transmission(),
            PipelineClass::Distribution => Self::distribution(),
        }
    }

    /// Check structural invariants: ranges ordered, cutoffs ordered inside
    /// [0,1], weights non-negative.
    ///
    /// Built-in profiles always pass; this guards operator overrides from
    /// the config file.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.pressure_range_bar.min < self.pressure_range_bar.max) {
            return Err(format!(
                "{}: pressure range min ({}) must be below max ({})",
                self.class, self.pressure_range_bar.min, self.pressure_range_bar.max
            ));
        }
        if !(self.temperature_range_c.min < self.temperature_range_c.max) {
            return Err(format!(
                "{}: temperature range min ({}) must be below max ({})",
                self.class, self.temperature_range_c.min, self.temperature_range_c.max
            ));
        }
        let w = &self.weights;
        for (name, value) in [
            ("pressure", w.pressure),
            ("temperature", w.temperature),
            ("inhibitor", w.inhibitor),
            ("salinity", w.salinity),
            ("water_cut", w.water_cut),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "{}: weight '{}' must be finite and non-negative (got {})",
                    self.class, name, value
                ));
            }
        }
        if !(0.0 <= self.cutoffs.low && self.cutoffs.low < self.cutoffs.high && self.cutoffs.high <= 1.0)
        {
            return Err(format!(
                "{}: zone cutoffs must satisfy 0 <= low < high <= 1 (got low={}, high={})",
                self.class, self.cutoffs.low, self.cutoffs.high
            ));
        }
        Ok(())
    }
}
