//! Configuration module for extgen
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (EXTGEN_*)
//! 3. Config file (extgen.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{parse_with_warnings, with_env_overrides, ConfigWarning};
pub use types::{
    ActivationKind, ActivationRule, AppConfig, BackgroundColor, Config, DeclaredExtension,
    ExtensionConfig, PathsConfig, HEIGHT_RANGE,
};

/// Default config file name
pub const DEFAULT_CONFIG_FILE: &str = "extgen.toml";
