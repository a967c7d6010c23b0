//! Config Validation Tests
//!
//! Exercises the field-config validation layer independently from the rest
//! of the service: typo detection with suggestions, file loading, and the
//! structural profile checks applied when the registry is built.

use std::io::Write;

use hydrawatch::config::validation::{
    known_config_keys, suggest_correction, validate_unknown_keys,
};
use hydrawatch::config::{ConfigError, FieldConfig};
use hydrawatch::registry::ProfileRegistry;
use hydrawatch::types::PipelineClass;

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_override_field_warns_with_suggestion() {
    let toml_str = r#"
[profiles.flowline]
cutof_low = 0.25
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1, "Expected exactly 1 warning");
    assert!(warnings[0].field.contains("cutof_low"));
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("profiles.flowline.cutoff_low"),
        "Should suggest the correct spelling"
    );
}

#[test]
fn typo_in_field_section_warns() {
    let toml_str = r#"
[field]
naem = "Petronius"
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].field.contains("naem"));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("field.name"));
}

#[test]
fn valid_config_produces_zero_warnings() {
    let toml_str = r#"
[field]
name = "PETRONIUS"
platform = "Compliant Tower"
operator = "Chevron"

[server]
addr = "0.0.0.0:9090"

[profiles.gathering]
pressure_min_bar = 12.0
pressure_max_bar = 85.0
weight_pressure = 0.33

[profiles.transmission]
cutoff_low = 0.40
cutoff_high = 0.75
description = "Export trunkline to shore."
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert!(
        warnings.is_empty(),
        "Expected no warnings, got: {:?}",
        warnings
    );
}

#[test]
fn known_keys_cover_every_class_block() {
    let known = known_config_keys();
    for class in PipelineClass::ALL {
        let key = format!("profiles.{}", class.name().to_ascii_lowercase());
        assert!(known.contains(&key), "missing {key}");
        assert!(known.contains(&format!("{key}.cutoff_high")));
    }
}

#[test]
fn suggestion_is_none_for_distant_keys() {
    let known = known_config_keys();
    assert_eq!(suggest_correction("thresholds.mse.efficiency", &known), None);
}

// ============================================================================
// File Loading
// ============================================================================

#[test]
fn load_from_file_reads_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[field]
name = "PETRONIUS"

[profiles.feeder]
weight_salinity = 0.10
"#
    )
    .unwrap();

    let config = FieldConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.field.name, "PETRONIUS");
    let feeder = config.profiles.feeder.unwrap();
    assert_eq!(feeder.weight_salinity, Some(0.10));
    assert_eq!(feeder.weight_pressure, None);
}

#[test]
fn load_from_missing_file_is_an_io_error() {
    let err = FieldConfig::load_from_file(std::path::Path::new("/nonexistent/hydrate.toml"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Io(_, _)));
}

#[test]
fn load_from_malformed_file_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[profiles.feeder\nweight_salinity = ").unwrap();

    let err = FieldConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_, _)));
}

// ============================================================================
// Structural Profile Checks (registry build)
// ============================================================================

#[test]
fn registry_rejects_inverted_pressure_range() {
    let config: FieldConfig = toml::from_str(
        r#"
[profiles.distribution]
pressure_min_bar = 50.0
pressure_max_bar = 10.0
"#,
    )
    .unwrap();
    let err = ProfileRegistry::from_config(&config).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Distribution"), "unexpected error: {msg}");
}

#[test]
fn registry_rejects_negative_weight() {
    let config: FieldConfig = toml::from_str(
        r#"
[profiles.gathering]
weight_water_cut = -0.2
"#,
    )
    .unwrap();
    assert!(matches!(
        ProfileRegistry::from_config(&config).unwrap_err(),
        ConfigError::Validation(_)
    ));
}

#[test]
fn registry_accepts_valid_overrides() {
    let config: FieldConfig = toml::from_str(
        r#"
[profiles.flowline]
pressure_max_bar = 120.0
cutoff_low = 0.30
"#,
    )
    .unwrap();
    let registry = ProfileRegistry::from_config(&config).unwrap();
    let flowline = registry.get(PipelineClass::Flowline);
    assert!((flowline.pressure_range_bar.max - 120.0).abs() < 1e-12);
    assert!((flowline.cutoffs.low - 0.30).abs() < 1e-12);
}
