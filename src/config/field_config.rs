//! Field Configuration - operator-tunable deployment values as TOML
//!
//! Profile overrides let an operator adjust the built-in per-class tables
//! (ranges, weights, zone cutoffs) for a specific field without rebuilding.
//! Every struct implements `Default` matching the built-in values, ensuring
//! zero-change behavior when no config file is present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::types::{PipelineClass, PipelineProfile};

/// Environment variable holding an explicit config file path.
pub const CONFIG_ENV_VAR: &str = "HYDRAWATCH_CONFIG";

/// Default config file name searched in the working directory.
pub const CONFIG_FILE_NAME: &str = "hydrate_config.toml";

/// Config loading/validation failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse config file {0}: {1}")]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("invalid profile configuration: {0}")]
    Validation(String),
}

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a field deployment.
///
/// Load with `FieldConfig::load()` which searches:
/// 1. `$HYDRAWATCH_CONFIG` env var
/// 2. `./hydrate_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Field / platform identification
    #[serde(default)]
    pub field: FieldInfo,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Per-class profile overrides
    #[serde(default)]
    pub profiles: ProfileOverrides,
}

/// Field identification block — informational, used in logs and /health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldInfo {
    #[serde(default = "default_field_name")]
    pub name: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub operator: String,
}

fn default_field_name() -> String {
    "UNNAMED-FIELD".to_string()
}

impl Default for FieldInfo {
    fn default() -> Self {
        Self {
            name: default_field_name(),
            platform: String::new(),
            operator: String::new(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_addr")]
    pub addr: String,
}

fn default_server_addr() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { addr: default_server_addr() }
    }
}

// ============================================================================
// Profile Overrides
// ============================================================================

/// One optional override block per pipeline class.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gathering: Option<ProfileOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feeder: Option<ProfileOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flowline: Option<ProfileOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission: Option<ProfileOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<ProfileOverride>,
}

impl ProfileOverrides {
    /// Override block for a class, if the operator supplied one.
    pub fn for_class(&self, class: PipelineClass) -> Option<&ProfileOverride> {
        match class {
            PipelineClass::Gathering => self.gathering.as_ref(),
            PipelineClass::Feeder => self.feeder.as_ref(),
            PipelineClass::Flowline => self.flowline.as_ref(),
            PipelineClass::Transmission => self.transmission.as_ref(),
            PipelineClass::Distribution => self.distribution.as_ref(),
        }
    }
}

/// Partial profile override — only fields present in the TOML are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure_min_bar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure_max_bar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_min_c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_max_c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_pressure: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_inhibitor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_salinity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_water_cut: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff_low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff_high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProfileOverride {
    /// Merge the set fields onto a built-in profile.
    pub fn apply(&self, profile: &mut PipelineProfile) {
        if let Some(v) = self.pressure_min_bar {
            profile.pressure_range_bar.min = v;
        }
        if let Some(v) = self.pressure_max_bar {
            profile.pressure_range_bar.max = v;
        }
        if let Some(v) = self.temperature_min_c {
            profile.temperature_range_c.min = v;
        }
        if let Some(v) = self.temperature_max_c {
            profile.temperature_range_c.max = v;
        }
        if let Some(v) = self.weight_pressure {
            profile.weights.pressure = v;
        }
        if let Some(v) = self.weight_temperature {
            profile.weights.temperature = v;
        }
        if let Some(v) = self.weight_inhibitor {
            profile.weights.inhibitor = v;
        }
        if let Some(v) = self.weight_salinity {
            profile.weights.salinity = v;
        }
        if let Some(v) = self.weight_water_cut {
            profile.weights.water_cut = v;
        }
        if let Some(v) = self.cutoff_low {
            profile.cutoffs.low = v;
        }
        if let Some(v) = self.cutoff_high {
            profile.cutoffs.high = v;
        }
        if let Some(ref v) = self.description {
            profile.description = v.clone();
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

impl FieldConfig {
    /// Load configuration using the standard search order:
    /// 1. `$HYDRAWATCH_CONFIG` environment variable
    /// 2. `./hydrate_config.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), field = %config.field.name, "Loaded field config from HYDRAWATCH_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from HYDRAWATCH_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "HYDRAWATCH_CONFIG points to non-existent file, falling back");
            }
        }

        // 2. Check ./hydrate_config.toml
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(field = %config.field.name, "Loaded field config from ./hydrate_config.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./hydrate_config.toml, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No hydrate_config.toml found — using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;

        // Two-pass: check for unknown keys first (warnings only)
        let typo_warnings = super::validation::validate_unknown_keys(&contents);
        for w in &typo_warnings {
            warn!("{}", w);
        }

        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_stable() {
        let config = FieldConfig::default();
        assert_eq!(config.field.name, "UNNAMED-FIELD");
        assert_eq!(config.server.addr, "0.0.0.0:8080");
        for class in PipelineClass::ALL {
            assert!(config.profiles.for_class(class).is_none());
        }
    }

    #[test]
    fn override_applies_only_set_fields() {
        let overrides = ProfileOverride {
            cutoff_high: Some(0.75),
            weight_inhibitor: Some(0.30),
            ..ProfileOverride::default()
        };
        let mut profile = PipelineProfile::transmission();
        overrides.apply(&mut profile);
        assert!((profile.cutoffs.high - 0.75).abs() < 1e-12);
        assert!((profile.weights.inhibitor - 0.30).abs() < 1e-12);
        // Untouched fields keep built-ins.
        assert!((profile.cutoffs.low - 0.35).abs() < 1e-12);
        assert!((profile.pressure_range_bar.max - 150.0).abs() < 1e-12);
    }

    #[test]
    fn round_trips_through_toml() {
        let mut config = FieldConfig::default();
        config.field.name = "PETRONIUS".to_string();
        config.profiles.flowline = Some(ProfileOverride {
            pressure_max_bar: Some(120.0),
            ..ProfileOverride::default()
        });

        let s = config.to_toml().unwrap();
        let parsed: FieldConfig = toml::from_str(&s).unwrap();
        assert_eq!(parsed.field.name, "PETRONIUS");
        let fl = parsed.profiles.flowline.unwrap();
        assert_eq!(fl.pressure_max_bar, Some(120.0));
    }
}
