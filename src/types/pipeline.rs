//! Pipeline class enumeration.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Requested pipeline class is not part of the fixed enumeration.
///
/// Only reachable from boundaries that accept free-form names (config files,
/// API path/body parameters) — the enum itself is closed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown pipeline class '{0}' (expected one of: gathering, feeder, flowline, transmission, distribution)")]
pub struct UnknownClass(pub String);

/// Fixed set of pipeline segment classes covered by the risk model.
///
/// Gathering, Feeder and Flowline carry multiphase (liquid-bearing) fluid and
/// are inherently hydrate-prone. Transmission and Distribution carry
/// dehydrated gas and are hydrate-prone only upon water ingress; that
/// distinction lives on the profile as `is_dry`, not on the class tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineClass {
    Gathering,
    Feeder,
    Flowline,
    Transmission,
    Distribution,
}

impl PipelineClass {
    /// All classes, in registry order.
    pub const ALL: [Self; 5] = [
        Self::Gathering,
        Self::Feeder,
        Self::Flowline,
        Self::Transmission,
        Self::Distribution,
    ];

    /// Canonical display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Gathering => "Gathering",
            Self::Feeder => "Feeder",
            Self::Flowline => "Flowline",
            Self::Transmission => "Transmission",
            Self::Distribution => "Distribution",
        }
    }
}

impl std::fmt::Display for PipelineClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PipelineClass {
    type Err = UnknownClass;

    /// Case-insensitive parse of a class name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gathering" => Ok(Self::Gathering),
            "feeder" => Ok(Self::Feeder),
            "flowline" => Ok(Self::Flowline),
            "transmission" => Ok(Self::Transmission),
            "distribution" => Ok(Self::Distribution),
            _ => Err(UnknownClass(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Flowline".parse::<PipelineClass>(), Ok(PipelineClass::Flowline));
        assert_eq!("TRANSMISSION".parse::<PipelineClass>(), Ok(PipelineClass::Transmission));
        assert_eq!(" gathering ".parse::<PipelineClass>(), Ok(PipelineClass::Gathering));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "riser".parse::<PipelineClass>().unwrap_err();
        assert_eq!(err, UnknownClass("riser".to_string()));
    }

    #[test]
    fn all_covers_the_enumeration() {
        assert_eq!(PipelineClass::ALL.len(), 5);
        for class in PipelineClass::ALL {
            assert_eq!(class.name().parse::<PipelineClass>(), Ok(class));
        }
    }
}
