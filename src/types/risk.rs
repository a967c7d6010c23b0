//! Risk index and zone classification types.

use serde::{Deserialize, Serialize};

/// Discrete safety zone for a risk index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Zone {
    Safe = 0,
    Warning = 1,
    Danger = 2,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Safe => write!(f, "SAFE"),
            Zone::Warning => write!(f, "WARNING"),
            Zone::Danger => write!(f, "DANGER"),
        }
    }
}

impl Default for Zone {
    fn default() -> Self {
        Zone::Safe
    }
}

/// Result of one risk evaluation. Immutable once returned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RiskResult {
    /// Dimensionless hydrate-formation proxy, always clamped to [0,1].
    pub risk_index: f64,
    /// Zone band the index falls into per the profile's cutoffs.
    pub zone: Zone,
}

impl RiskResult {
    /// Risk index expressed as a percentage (0–100).
    pub fn percent(&self) -> f64 {
        self.risk_index * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zones_order_by_severity() {
        assert!(Zone::Safe < Zone::Warning);
        assert!(Zone::Warning < Zone::Danger);
    }

    #[test]
    fn display_matches_operator_labels() {
        assert_eq!(Zone::Safe.to_string(), "SAFE");
        assert_eq!(Zone::Warning.to_string(), "WARNING");
        assert_eq!(Zone::Danger.to_string(), "DANGER");
    }

    #[test]
    fn percent_scales_index() {
        let result = RiskResult { risk_index: 0.249, zone: Zone::Safe };
        assert!((result.percent() - 24.9).abs() < 1e-9);
    }
}
