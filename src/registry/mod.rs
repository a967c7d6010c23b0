//! Profile registry
//!
//! Canonical read-only mapping from [`PipelineClass`] to [`PipelineProfile`].
//! Built once at startup — either straight from the built-in tables or with
//! operator overrides from the field config applied — and never mutated,
//! so unsynchronized concurrent reads are safe.

use tracing::info;

use crate::config::{ConfigError, FieldConfig};
use crate::types::{PipelineClass, PipelineProfile, UnknownClass};

/// Immutable per-class profile table.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    /// Indexed by `PipelineClass` discriminant, in `PipelineClass::ALL` order.
    profiles: [PipelineProfile; 5],
}

impl ProfileRegistry {
    /// Registry with the built-in profile tables, no overrides.
    pub fn builtin() -> Self {
        Self {
            profiles: PipelineClass::ALL.map(PipelineProfile::for_class),
        }
    }

    /// Registry with operator overrides from the field config applied on
    /// top of the built-in tables.
    ///
    /// Every merged profile is re-validated; a broken override (inverted
    /// range, cutoffs outside [0,1], negative weight) is a fatal
    /// [`ConfigError::Validation`].
    pub fn from_config(config: &FieldConfig) -> Result<Self, ConfigError> {
        let mut registry = Self::builtin();
        for profile in &mut registry.profiles {
            if let Some(overrides) = config.profiles.for_class(profile.class) {
                overrides.apply(profile);
                info!(class = %profile.class, "Applied profile overrides from field config");
            }
            profile.validate().map_err(ConfigError::Validation)?;
        }
        Ok(registry)
    }

    /// Profile for a class. Total over the closed enumeration.
    pub fn get(&self, class: PipelineClass) -> &PipelineProfile {
        &self.profiles[class as usize]
    }

    /// Profile for a free-form class name (config/API boundary).
    pub fn resolve(&self, name: &str) -> Result<&PipelineProfile, UnknownClass> {
        let class: PipelineClass = name.parse()?;
        Ok(self.get(class))
    }

    /// All profiles, in `PipelineClass::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = &PipelineProfile> {
        self.profiles.iter()
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
