//! Config validation: unknown-key detection with Levenshtein suggestions.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Warnings never break existing configs — structural
//! profile checks (range ordering, cutoff bounds) are enforced separately
//! when the registry is built.

use std::collections::HashSet;

/// A non-fatal config warning (typo, unknown key).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " — did you mean '{s}'?")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Override fields accepted inside each `[profiles.<class>]` block.
///
/// Must match the `ProfileOverride` struct in field_config.rs.
const PROFILE_OVERRIDE_FIELDS: &[&str] = &[
    "pressure_min_bar",
    "pressure_max_bar",
    "temperature_min_c",
    "temperature_max_c",
    "weight_pressure",
    "weight_temperature",
    "weight_inhibitor",
    "weight_salinity",
    "weight_water_cut",
    "cutoff_low",
    "cutoff_high",
    "description",
];

const PROFILE_CLASSES: &[&str] =
    &["gathering", "feeder", "flowline", "transmission", "distribution"];

/// Returns the complete set of valid dotted key paths for `FieldConfig`.
///
/// The `[profiles.*]` blocks are identical per class, so the table is
/// generated rather than maintained by hand.
pub fn known_config_keys() -> HashSet<String> {
    let mut keys: HashSet<String> = [
        "field",
        "field.name",
        "field.platform",
        "field.operator",
        "server",
        "server.addr",
        "profiles",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect();

    for class in PROFILE_CLASSES {
        keys.insert(format!("profiles.{class}"));
        for field in PROFILE_OVERRIDE_FIELDS {
            keys.insert(format!("profiles.{class}.{field}"));
        }
    }
    keys
}

// ============================================================================
// Key Walking & Suggestion
// ============================================================================

/// Collect all dotted key paths present in a TOML value tree.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let toml::Value::Table(table) = value {
        for (name, child) in table {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}.{name}")
            };
            keys.push(path.clone());
            keys.extend(walk_toml_keys(child, &path));
        }
    }
    keys
}

/// Classic two-row Levenshtein edit distance.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Closest known key within edit distance 2 of an unknown key, if any.
pub fn suggest_correction(unknown: &str, known: &HashSet<String>) -> Option<String> {
    known
        .iter()
        .map(|k| (levenshtein(unknown, k), k))
        .filter(|(d, _)| *d <= 2)
        .min_by_key(|(d, _)| *d)
        .map(|(_, k)| k.clone())
}

// ============================================================================
// Unknown-Key Pass
// ============================================================================

/// Scan a raw TOML string for keys that `FieldConfig` does not recognize.
///
/// Returns one warning per unknown key. A string that fails to parse as
/// TOML yields no warnings here; the parse error surfaces from the normal
/// serde pass.
pub fn validate_unknown_keys(toml_str: &str) -> Vec<ValidationWarning> {
    let Ok(value) = toml_str.parse::<toml::Value>() else {
        return Vec::new();
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key))
        .map(|key| {
            let suggestion = suggest_correction(&key, &known);
            ValidationWarning {
                message: format!("Unknown config key '{key}'"),
                field: key,
                suggestion,
            }
        })
        .collect()
}
