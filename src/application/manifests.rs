//! Extension manifests
//!
//! Builds the entitlements and Info.plist of an extension target and writes
//! them into the target directory before the target's group is created.

use std::path::Path;

use serde_json::{json, Map, Value};

use crate::config::{ActivationKind, ActivationRule, Config};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{
    app_group, entitlements_file_name, view_controller_type, ExtensionFlavor,
};
use crate::error::ExtgenResult;
use crate::infrastructure::plist;

use super::scaffold::INFO_PLIST;

pub const APP_GROUPS_KEY: &str = "com.apple.security.application-groups";
pub const APPLE_SIGN_IN_KEY: &str = "com.apple.developer.applesignin";

/// Entitlements of an extension target
///
/// Starts from the entitlements the app already declares for `target_name`;
/// the app group always wins, and so does Sign in with Apple when the app
/// uses it.
pub fn entitlements(
    config: &Config,
    bundle_identifier: &str,
    target_name: &str,
) -> Map<String, Value> {
    let mut entitlements = config
        .app
        .extensions
        .iter()
        .find(|declared| declared.target_name == target_name)
        .map(|declared| declared.entitlements.clone())
        .unwrap_or_default();

    entitlements.insert(
        APP_GROUPS_KEY.to_string(),
        json!([app_group(bundle_identifier)]),
    );
    if config.app.uses_apple_sign_in {
        entitlements.insert(APPLE_SIGN_IN_KEY.to_string(), json!(["Default"]));
    }
    entitlements
}

/// Info.plist of an extension target
pub fn info_plist(
    config: &Config,
    bundle_identifier: &str,
    target_name: &str,
    flavor: ExtensionFlavor,
) -> Value {
    let mut attributes = Map::new();
    attributes.insert(
        "NSExtensionActivationRule".to_string(),
        activation_rule(&config.extension.effective_activation_rules()),
    );
    if let Some(stem) = config
        .extension
        .preprocessing_file
        .as_deref()
        .and_then(Path::file_stem)
        .and_then(|s| s.to_str())
    {
        attributes.insert(
            "NSExtensionJavaScriptPreprocessingFile".to_string(),
            Value::String(stem.to_string()),
        );
    }

    let mut info = json!({
        "CFBundleDevelopmentRegion": "$(DEVELOPMENT_LANGUAGE)",
        "CFBundleDisplayName": "$(INFOPLIST_KEY_CFBundleDisplayName)",
        "CFBundleExecutable": "$(EXECUTABLE_NAME)",
        "CFBundleIdentifier": "$(PRODUCT_BUNDLE_IDENTIFIER)",
        "CFBundleInfoDictionaryVersion": "6.0",
        "CFBundleName": "$(PRODUCT_NAME)",
        "CFBundlePackageType": "$(PRODUCT_BUNDLE_PACKAGE_TYPE)",
        "CFBundleShortVersionString": "$(MARKETING_VERSION)",
        "CFBundleVersion": "$(CURRENT_PROJECT_VERSION)",
        "AppGroup": app_group(bundle_identifier),
        "NSExtension": {
            "NSExtensionAttributes": Value::Object(attributes),
            "NSExtensionPrincipalClass": format!(
                "$(PRODUCT_MODULE_NAME).{}",
                view_controller_type(target_name)
            ),
            "NSExtensionPointIdentifier": flavor.extension_point_identifier(),
        },
    });

    if let Value::Object(info) = &mut info {
        if let Some(color) = &config.extension.background_color {
            info.insert(
                "ShareExtensionBackgroundColor".to_string(),
                json!({
                    "red": color.red,
                    "green": color.green,
                    "blue": color.blue,
                    "alpha": color.alpha,
                }),
            );
        }
        if let Some(height) = config.extension.height {
            info.insert("ShareExtensionHeight".to_string(), json!(height));
        }
    }
    info
}

/// `NSExtensionActivationRule` dictionary for a rule list
pub fn activation_rule(rules: &[ActivationRule]) -> Value {
    let mut dict = Map::new();
    for rule in rules {
        let max = json!(rule.max.unwrap_or(1));
        let (key, value) = match rule.kind {
            ActivationKind::Text => ("NSExtensionActivationSupportsText", Value::Bool(true)),
            ActivationKind::Url => ("NSExtensionActivationSupportsWebURLWithMaxCount", max),
            ActivationKind::Image => ("NSExtensionActivationSupportsImageWithMaxCount", max),
            ActivationKind::Video => ("NSExtensionActivationSupportsMovieWithMaxCount", max),
            ActivationKind::File => ("NSExtensionActivationSupportsFileWithMaxCount", max),
        };
        dict.insert(key.to_string(), value);
    }
    Value::Object(dict)
}

/// Write `<target>.entitlements` and `Info.plist` into `target_dir`
pub fn write_manifests<F: FileSystem>(
    fs: &F,
    config: &Config,
    target_name: &str,
    flavor: ExtensionFlavor,
    target_dir: &Path,
) -> ExtgenResult<()> {
    let app_bundle = config.bundle_identifier()?;

    let entitlements = Value::Object(entitlements(config, app_bundle, target_name));
    fs.write(
        &target_dir.join(entitlements_file_name(target_name)),
        &plist::to_xml(&entitlements),
    )?;

    let info = info_plist(config, app_bundle, target_name, flavor);
    fs.write(&target_dir.join(INFO_PLIST), &plist::to_xml(&info))?;
    Ok(())
}
