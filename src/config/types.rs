//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_objects::{sanitized_name, GenerationWarning};
use crate::error::{ExtgenError, ExtgenResult};

use super::loader::{self, ConfigWarning};

/// Allowed range of the share sheet height, in points
pub const HEIGHT_RANGE: std::ops::RangeInclusive<u32> = 50..=1000;

/// Host app settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Display name; target names are derived from its letters and digits
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub bundle_identifier: Option<String>,

    /// Marketing version
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub build_number: Option<String>,

    /// The host app's own services-configuration file
    #[serde(default)]
    pub google_services_file: Option<String>,

    #[serde(default)]
    pub uses_apple_sign_in: bool,

    /// Font-registration plugin inputs; reserved for the shared resources directory
    #[serde(default)]
    pub fonts: Vec<String>,

    /// App extensions the app already declares
    #[serde(default)]
    pub extensions: Vec<DeclaredExtension>,
}

/// An app-extension entry already declared by the app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclaredExtension {
    pub target_name: String,

    #[serde(default)]
    pub bundle_identifier: Option<String>,

    #[serde(default)]
    pub entitlements: Map<String, Value>,
}

/// Kind of content an extension accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationKind {
    Text,
    Url,
    Image,
    Video,
    File,
}

/// One `NSExtensionActivationRule` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationRule {
    #[serde(rename = "type")]
    pub kind: ActivationKind,

    /// Maximum item count; ignored for text
    #[serde(default)]
    pub max: Option<u32>,
}

impl ActivationRule {
    pub fn new(kind: ActivationKind) -> Self {
        Self { kind, max: None }
    }
}

/// Share sheet background colour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackgroundColor {
    pub red: i64,
    pub green: i64,
    pub blue: i64,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

fn default_alpha() -> f64 {
    1.0
}

/// Settings of the generated extensions
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExtensionConfig {
    /// Services-configuration file for the extension, relative to the project root
    #[serde(default)]
    pub google_services_file: Option<PathBuf>,

    /// Preprocessing script, relative to the project root
    #[serde(default)]
    pub preprocessing_file: Option<PathBuf>,

    /// Replacement for the built-in view-controller template
    #[serde(default)]
    pub template: Option<PathBuf>,

    #[serde(default)]
    pub height: Option<u32>,

    #[serde(default)]
    pub background_color: Option<BackgroundColor>,

    #[serde(default)]
    pub activation_rules: Vec<ActivationRule>,
}

impl ExtensionConfig {
    /// Configured rules, or text + url when none are set
    pub fn effective_activation_rules(&self) -> Vec<ActivationRule> {
        if self.activation_rules.is_empty() {
            vec![
                ActivationRule::new(ActivationKind::Text),
                ActivationRule::new(ActivationKind::Url),
            ]
        } else {
            self.activation_rules.clone()
        }
    }
}

/// Filesystem locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_project_root")]
    pub project_root: PathBuf,

    /// Native project directory, relative to the project root
    #[serde(default = "default_platform_root")]
    pub platform_root: PathBuf,

    /// JSON project file; found under the platform root when unset
    #[serde(default)]
    pub project_file: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            project_root: default_project_root(),
            platform_root: default_platform_root(),
            project_file: None,
        }
    }
}

fn default_project_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_platform_root() -> PathBuf {
    PathBuf::from("ios")
}

impl PathsConfig {
    /// Platform root resolved against the project root
    pub fn resolved_platform_root(&self) -> PathBuf {
        self.project_root.join(&self.platform_root)
    }

    /// Path relative to the project root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.project_root.join(path)
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub extension: ExtensionConfig,

    #[serde(default)]
    pub paths: PathsConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ExtgenResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ExtgenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (EXTGEN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// The bundle identifier, which generation cannot do without
    pub fn bundle_identifier(&self) -> ExtgenResult<&str> {
        match self.app.bundle_identifier.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(ExtgenError::MissingBundleIdentifier),
        }
    }

    /// Reject configurations generation cannot proceed with
    pub fn validate(&self) -> ExtgenResult<()> {
        self.bundle_identifier()?;
        sanitized_name(&self.app.name)?;

        if let Some(height) = self.extension.height {
            if !HEIGHT_RANGE.contains(&height) {
                return Err(ExtgenError::InvalidConfig {
                    key: "extension.height".to_string(),
                    message: format!(
                        "{} is outside {}..={}",
                        height,
                        HEIGHT_RANGE.start(),
                        HEIGHT_RANGE.end()
                    ),
                });
            }
        }

        if let Some(color) = &self.extension.background_color {
            for (channel, value) in [
                ("red", color.red),
                ("green", color.green),
                ("blue", color.blue),
            ] {
                if !(0..=255).contains(&value) {
                    return Err(ExtgenError::InvalidConfig {
                        key: format!("extension.background_color.{}", channel),
                        message: format!("{} is outside 0..=255", value),
                    });
                }
            }
            if !(0.0..=1.0).contains(&color.alpha) {
                return Err(ExtgenError::InvalidConfig {
                    key: "extension.background_color.alpha".to_string(),
                    message: format!("{} is outside 0..=1", color.alpha),
                });
            }
        }
        Ok(())
    }

    /// Non-fatal findings about the configuration
    pub fn advisories(&self) -> Vec<GenerationWarning> {
        let mut warnings = Vec::new();
        if self.app.google_services_file.is_some() && self.extension.google_services_file.is_none()
        {
            warnings.push(GenerationWarning::new(
                "the app sets google_services_file but [extension] does not; \
                 the extensions are generated without it",
            ));
        }
        warnings
    }
}
