//! Configuration-list builder
//!
//! Produces the Debug/Release build configurations of an extension target
//! and the list that owns them.

use serde_json::Value;
use tracing::debug;

use crate::domain::entities::{Configuration, ConfigurationList, Fields, ProjectGraph};
use crate::domain::services::minter::{seed, IdMinter};
use crate::domain::value_objects::{entitlements_file_name, ObjectId};

/// Build number used when the app config has none
pub const DEFAULT_BUILD_NUMBER: &str = "1";

/// Configuration the build tool picks when none is requested
pub const DEFAULT_CONFIGURATION: &str = "Release";

const DEPLOYMENT_TARGET: &str = "13.4";
const SWIFT_VERSION: &str = "5.0";
const DEVICE_FAMILY: &str = "1,2";

/// Inputs of [`add_configuration_list`]
#[derive(Debug, Clone)]
pub struct ConfigurationListSpec<'a> {
    pub target_name: &'a str,
    pub bundle_identifier: &'a str,
    pub build_number: Option<&'a str>,
    pub marketing_version: Option<&'a str>,
}

/// Add both configurations and their list; returns the list id
pub fn add_configuration_list(
    graph: &mut ProjectGraph,
    ids: &mut IdMinter,
    spec: &ConfigurationListSpec<'_>,
) -> ObjectId {
    let mut configurations = Vec::with_capacity(2);
    for name in ["Debug", "Release"] {
        let id = ids.mint(graph, &seed(spec.target_name, &format!("configuration/{}", name)));
        graph.insert(
            id.clone(),
            Configuration {
                name: name.to_string(),
                build_settings: build_settings(spec, name == "Debug"),
                extra: Fields::new(),
            },
        );
        configurations.push(id);
    }

    let list_id = ids.mint(graph, &seed(spec.target_name, "configuration-list"));
    graph.insert(
        list_id.clone(),
        ConfigurationList {
            build_configurations: configurations,
            default_configuration_is_visible: "0".to_string(),
            default_configuration_name: Some(DEFAULT_CONFIGURATION.to_string()),
            extra: Fields::new(),
        },
    );
    debug!(target_name = spec.target_name, list = %list_id, "added configuration list");
    list_id
}

fn build_settings(spec: &ConfigurationListSpec<'_>, debug: bool) -> Fields {
    let target = spec.target_name;
    let build_number = spec.build_number.unwrap_or(DEFAULT_BUILD_NUMBER);

    let mut settings: Vec<(&str, String)> = vec![
        ("ASSETCATALOG_COMPILER_GLOBAL_ACCENT_COLOR_NAME", "AccentColor".into()),
        ("CLANG_ANALYZER_NONNULL", "YES".into()),
        ("CLANG_ANALYZER_NUMBER_OBJECT_CONVERSION", "YES_AGGRESSIVE".into()),
        ("CLANG_CXX_LANGUAGE_STANDARD", "gnu++20".into()),
        ("CLANG_ENABLE_OBJC_WEAK", "YES".into()),
        ("CLANG_WARN_DOCUMENTATION_COMMENTS", "YES".into()),
        ("CLANG_WARN_QUOTED_INCLUDE_IN_FRAMEWORK_HEADER", "YES".into()),
        ("CLANG_WARN_UNGUARDED_AVAILABILITY", "YES_AGGRESSIVE".into()),
        (
            "CODE_SIGN_ENTITLEMENTS",
            format!("{}/{}", target, entitlements_file_name(target)),
        ),
        ("CODE_SIGN_STYLE", "Automatic".into()),
        ("CURRENT_PROJECT_VERSION", build_number.to_string()),
        ("GCC_C_LANGUAGE_STANDARD", "gnu11".into()),
        ("GENERATE_INFOPLIST_FILE", "YES".into()),
        ("INFOPLIST_FILE", format!("{}/Info.plist", target)),
        ("INFOPLIST_KEY_CFBundleDisplayName", target.to_string()),
        ("IPHONEOS_DEPLOYMENT_TARGET", DEPLOYMENT_TARGET.into()),
        (
            "LD_RUNPATH_SEARCH_PATHS",
            "$(inherited) @executable_path/Frameworks @executable_path/../../Frameworks".into(),
        ),
        ("MTL_FAST_MATH", "YES".into()),
        ("PRODUCT_BUNDLE_IDENTIFIER", spec.bundle_identifier.to_string()),
        ("PRODUCT_NAME", "$(TARGET_NAME)".into()),
        ("SKIP_INSTALL", "YES".into()),
        ("SWIFT_EMIT_LOC_STRINGS", "YES".into()),
        ("SWIFT_VERSION", SWIFT_VERSION.into()),
        ("TARGETED_DEVICE_FAMILY", DEVICE_FAMILY.into()),
    ];
    if let Some(version) = spec.marketing_version {
        settings.push(("MARKETING_VERSION", version.to_string()));
    }

    if debug {
        settings.extend([
            ("DEBUG_INFORMATION_FORMAT", "dwarf".to_string()),
            ("MTL_ENABLE_DEBUG_INFO", "INCLUDE_SOURCE".to_string()),
            ("SWIFT_ACTIVE_COMPILATION_CONDITIONS", "DEBUG".to_string()),
            ("SWIFT_OPTIMIZATION_LEVEL", "-Onone".to_string()),
        ]);
    } else {
        settings.extend([
            ("DEBUG_INFORMATION_FORMAT", "dwarf-with-dsym".to_string()),
            ("MTL_ENABLE_DEBUG_INFO", "NO".to_string()),
            ("SWIFT_COMPILATION_MODE", "wholemodule".to_string()),
            ("SWIFT_OPTIMIZATION_LEVEL", "-O".to_string()),
        ]);
    }

    settings
        .into_iter()
        .map(|(key, value)| (key.to_string(), Value::String(value)))
        .collect()
}
