//! Field Configuration Module
//!
//! Provides per-field configuration loaded from TOML files: server address,
//! field identification, and operator overrides for the built-in per-class
//! pipeline profiles.
//!
//! ## Loading Order
//!
//! 1. `HYDRAWATCH_CONFIG` environment variable (path to TOML file)
//! 2. `hydrate_config.toml` in the current working directory
//! 3. Built-in defaults
//!
//! The loaded config is plain data handed to `ProfileRegistry::from_config`
//! at startup — there is no process-global config singleton.

mod field_config;
pub mod validation;

pub use field_config::*;
