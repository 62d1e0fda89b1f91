//! Extension flavor value object and the naming rules derived from it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ExtgenError, ExtgenResult};

/// The two kinds of app extension extgen can generate.
///
/// Passes always run in [`ExtensionFlavor::ALL`] order: share, then action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionFlavor {
    /// Share extension (`com.apple.share-services`)
    Share,
    /// Action extension (`com.apple.ui-services`)
    Action,
}

impl ExtensionFlavor {
    /// Both flavors in pass order
    pub const ALL: [ExtensionFlavor; 2] = [ExtensionFlavor::Share, ExtensionFlavor::Action];

    /// Short name used as a file-name prefix ("Share" / "Action")
    pub fn prefix(self) -> &'static str {
        match self {
            ExtensionFlavor::Share => "Share",
            ExtensionFlavor::Action => "Action",
        }
    }

    /// Suffix appended to target names and bundle identifiers
    pub fn suffix(self) -> &'static str {
        match self {
            ExtensionFlavor::Share => "ShareExtension",
            ExtensionFlavor::Action => "ActionExtension",
        }
    }

    /// File name of the view-controller source copied into the target directory
    pub fn view_controller_file(self) -> String {
        format!("{}ExtensionViewController.swift", self.prefix())
    }

    /// Display name of the host app's embed phase
    pub fn embed_phase_label(self) -> &'static str {
        match self {
            ExtensionFlavor::Share => "Embed Share Extensions",
            ExtensionFlavor::Action => "Embed Action Extensions",
        }
    }

    /// `NSExtensionPointIdentifier` for the extension's Info.plist
    pub fn extension_point_identifier(self) -> &'static str {
        match self {
            ExtensionFlavor::Share => "com.apple.share-services",
            ExtensionFlavor::Action => "com.apple.ui-services",
        }
    }
}

impl fmt::Display for ExtensionFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtensionFlavor::Share => write!(f, "share"),
            ExtensionFlavor::Action => write!(f, "action"),
        }
    }
}

/// Strip everything but ASCII letters and digits from an app name.
pub fn sanitized_name(name: &str) -> ExtgenResult<String> {
    let sanitized: String = name.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    if sanitized.is_empty() {
        return Err(ExtgenError::InvalidAppName {
            name: name.to_string(),
        });
    }
    Ok(sanitized)
}

/// Target name for a flavor, e.g. `MyAppShareExtension`
pub fn target_name(app_name: &str, flavor: ExtensionFlavor) -> ExtgenResult<String> {
    Ok(format!("{}{}", sanitized_name(app_name)?, flavor.suffix()))
}

/// Bundle identifier for a flavor, e.g. `com.acme.app.ShareExtension`
pub fn bundle_identifier(app_bundle_identifier: &str, flavor: ExtensionFlavor) -> String {
    format!("{}.{}", app_bundle_identifier, flavor.suffix())
}

/// Shared app group of the host app and its extensions
pub fn app_group(app_bundle_identifier: &str) -> String {
    format!("group.{}", app_bundle_identifier)
}

/// `<target>.entitlements`
pub fn entitlements_file_name(target_name: &str) -> String {
    format!("{}.entitlements", target_name)
}

/// `<target>.appex`
pub fn product_file_name(target_name: &str) -> String {
    format!("{}.appex", target_name)
}

/// `<target>ViewController`
pub fn view_controller_type(target_name: &str) -> String {
    format!("{}ViewController", target_name)
}
