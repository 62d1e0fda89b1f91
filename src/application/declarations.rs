//! App-extension declarations
//!
//! The list of extensions a cloud build service provisions signing for: the
//! two generated targets first, then whatever else the app already declares.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::Config;
use crate::domain::value_objects::{bundle_identifier, target_name, ExtensionFlavor};
use crate::error::ExtgenResult;

use super::manifests;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionDeclaration {
    pub target_name: String,
    pub bundle_identifier: String,
    pub entitlements: Map<String, Value>,
}

pub fn declarations(config: &Config) -> ExtgenResult<Vec<ExtensionDeclaration>> {
    let app_bundle = config.bundle_identifier()?;

    let mut declarations = Vec::with_capacity(config.app.extensions.len() + 2);
    let mut generated = Vec::with_capacity(2);
    for flavor in ExtensionFlavor::ALL {
        let name = target_name(&config.app.name, flavor)?;
        let declared = config
            .app
            .extensions
            .iter()
            .find(|declared| declared.target_name == name);
        let bundle = declared
            .and_then(|declared| declared.bundle_identifier.clone())
            .unwrap_or_else(|| bundle_identifier(app_bundle, flavor));

        declarations.push(ExtensionDeclaration {
            entitlements: manifests::entitlements(config, app_bundle, &name),
            target_name: name.clone(),
            bundle_identifier: bundle,
        });
        generated.push(name);
    }

    for declared in &config.app.extensions {
        if generated.contains(&declared.target_name) {
            continue;
        }
        declarations.push(ExtensionDeclaration {
            target_name: declared.target_name.clone(),
            bundle_identifier: declared.bundle_identifier.clone().unwrap_or_default(),
            entitlements: declared.entitlements.clone(),
        });
    }
    Ok(declarations)
}
