//! Project graph records
//!
//! One struct per record kind extgen edits. Each struct keeps the fields it
//! does not model in `extra`, so a load/save cycle never drops data.
//! Records of kinds extgen never touches stay as raw field maps
//! ([`Record::Opaque`]).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::value_objects::ObjectId;

/// Raw field map of a record
pub type Fields = serde_json::Map<String, Value>;

/// `buildActionMask` used by every phase extgen creates
pub const DEFAULT_BUILD_ACTION_MASK: &str = "2147483647";

/// `dstSubfolderSpec` value for the PlugIns folder of an app bundle
pub const PLUGINS_SUBFOLDER_SPEC: &str = "13";

/// `proxyType` of a container item proxy that points at a target
pub const TARGET_REFERENCE_PROXY_TYPE: &str = "1";

/// Product type of a native target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductType {
    Application,
    AppExtension,
    Other(String),
}

impl ProductType {
    pub fn as_str(&self) -> &str {
        match self {
            ProductType::Application => "com.apple.product-type.application",
            ProductType::AppExtension => "com.apple.product-type.app-extension",
            ProductType::Other(raw) => raw,
        }
    }
}

impl From<String> for ProductType {
    fn from(raw: String) -> Self {
        // The ASCII plist form quotes the value; the JSON form does not.
        match raw.trim_matches('"') {
            "com.apple.product-type.application" => ProductType::Application,
            "com.apple.product-type.app-extension" => ProductType::AppExtension,
            _ => ProductType::Other(raw),
        }
    }
}

impl From<ProductType> for String {
    fn from(product_type: ProductType) -> Self {
        match product_type {
            ProductType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// `PBXProject`, the singleton root record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub targets: Vec<ObjectId>,
    pub main_group: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_ref_group: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_configuration_list: Option<ObjectId>,
    #[serde(default)]
    pub attributes: Fields,
    #[serde(flatten)]
    pub extra: Fields,
}

impl Project {
    /// Key of the per-target attribute map inside `attributes`
    pub const TARGET_ATTRIBUTES: &'static str = "TargetAttributes";

    /// Ids of targets that have an entry in `attributes.TargetAttributes`
    pub fn target_attribute_ids(&self) -> Vec<ObjectId> {
        self.attributes
            .get(Self::TARGET_ATTRIBUTES)
            .and_then(Value::as_object)
            .map(|map| map.keys().map(|k| ObjectId::new(k.as_str())).collect())
            .unwrap_or_default()
    }
}

/// `XCConfigurationList`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationList {
    #[serde(default)]
    pub build_configurations: Vec<ObjectId>,
    #[serde(default = "default_zero")]
    pub default_configuration_is_visible: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_configuration_name: Option<String>,
    #[serde(flatten)]
    pub extra: Fields,
}

/// `XCBuildConfiguration`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub name: String,
    #[serde(default)]
    pub build_settings: Fields,
    #[serde(flatten)]
    pub extra: Fields,
}

impl Configuration {
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.build_settings.get(key).and_then(Value::as_str)
    }
}

/// `PBXFileReference`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "default_group_source_tree")]
    pub source_tree: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_known_file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_in_index: Option<String>,
    #[serde(flatten)]
    pub extra: Fields,
}

impl FileReference {
    /// File name shown for this reference (name, falling back to path)
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.path.as_deref())
    }
}

/// `PBXBuildFile`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildFile {
    /// Absent for package-product build files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_ref: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Fields>,
    #[serde(flatten)]
    pub extra: Fields,
}

/// `PBXGroup`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default)]
    pub children: Vec<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default = "default_group_source_tree")]
    pub source_tree: String,
    #[serde(flatten)]
    pub extra: Fields,
}

impl Group {
    /// A named group with no path, as the build tool creates for virtual folders
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            children: Vec::new(),
            name: Some(name.into()),
            path: None,
            source_tree: default_group_source_tree(),
            extra: Fields::new(),
        }
    }

    /// A group with neither name nor path is a top-level group
    pub fn is_top_level(&self) -> bool {
        self.name.is_none() && self.path.is_none()
    }
}

/// `PBXNativeTarget`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeTarget {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    pub product_type: ProductType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_reference: Option<ObjectId>,
    pub build_configuration_list: ObjectId,
    #[serde(default)]
    pub build_phases: Vec<ObjectId>,
    #[serde(default)]
    pub build_rules: Vec<ObjectId>,
    #[serde(default)]
    pub dependencies: Vec<ObjectId>,
    #[serde(flatten)]
    pub extra: Fields,
}

/// Kind of a build phase, one `isa` each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Sources,
    Frameworks,
    Resources,
    CopyFiles,
}

impl PhaseKind {
    pub fn isa(self) -> &'static str {
        match self {
            PhaseKind::Sources => "PBXSourcesBuildPhase",
            PhaseKind::Frameworks => "PBXFrameworksBuildPhase",
            PhaseKind::Resources => "PBXResourcesBuildPhase",
            PhaseKind::CopyFiles => "PBXCopyFilesBuildPhase",
        }
    }

    pub fn from_isa(isa: &str) -> Option<Self> {
        match isa {
            "PBXSourcesBuildPhase" => Some(PhaseKind::Sources),
            "PBXFrameworksBuildPhase" => Some(PhaseKind::Frameworks),
            "PBXResourcesBuildPhase" => Some(PhaseKind::Resources),
            "PBXCopyFilesBuildPhase" => Some(PhaseKind::CopyFiles),
            _ => None,
        }
    }
}

/// Sources, frameworks, resources or copy-files build phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildPhase {
    #[serde(skip, default = "default_phase_kind")]
    pub kind: PhaseKind,
    #[serde(default = "default_build_action_mask")]
    pub build_action_mask: String,
    #[serde(default)]
    pub files: Vec<ObjectId>,
    #[serde(default = "default_zero")]
    pub run_only_for_deployment_postprocessing: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dst_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dst_subfolder_spec: Option<String>,
    #[serde(flatten)]
    pub extra: Fields,
}

impl BuildPhase {
    /// An empty phase of the given kind with default flags
    pub fn new(kind: PhaseKind) -> Self {
        Self {
            kind,
            build_action_mask: default_build_action_mask(),
            files: Vec::new(),
            run_only_for_deployment_postprocessing: default_zero(),
            name: None,
            dst_path: None,
            dst_subfolder_spec: None,
            extra: Fields::new(),
        }
    }

    /// An empty copy-files phase that copies into the app's PlugIns folder
    pub fn embed_plugins(label: impl Into<String>) -> Self {
        Self {
            name: Some(label.into()),
            dst_path: Some(String::new()),
            dst_subfolder_spec: Some(PLUGINS_SUBFOLDER_SPEC.to_string()),
            ..Self::new(PhaseKind::CopyFiles)
        }
    }

    /// True for a copy-files phase targeting PlugIns with the given label
    pub fn is_embed_phase(&self, label: &str) -> bool {
        self.kind == PhaseKind::CopyFiles
            && self.dst_subfolder_spec.as_deref() == Some(PLUGINS_SUBFOLDER_SPEC)
            && self.name.as_deref() == Some(label)
    }
}

/// `PBXTargetDependency`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetDependency {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ObjectId>,
    pub target_proxy: ObjectId,
    #[serde(flatten)]
    pub extra: Fields,
}

/// `PBXContainerItemProxy`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerItemProxy {
    pub container_portal: ObjectId,
    pub proxy_type: String,
    #[serde(rename = "remoteGlobalIDString")]
    pub remote_global_id_string: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_info: Option<String>,
    #[serde(flatten)]
    pub extra: Fields,
}

/// Any record of the project graph
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Project(Project),
    ConfigurationList(ConfigurationList),
    Configuration(Configuration),
    FileReference(FileReference),
    BuildFile(BuildFile),
    Group(Group),
    NativeTarget(NativeTarget),
    BuildPhase(BuildPhase),
    TargetDependency(TargetDependency),
    ContainerItemProxy(ContainerItemProxy),
    /// A kind extgen does not edit; the map still holds its `isa`
    Opaque(Fields),
}

impl Record {
    /// Decode one entry of the `objects` map
    pub fn from_value(value: Value) -> Result<Self, String> {
        let Value::Object(fields) = value else {
            return Err("record is not an object".to_string());
        };
        let isa = match fields.get("isa").and_then(Value::as_str) {
            Some(isa) => isa.to_string(),
            None => return Err("record has no isa".to_string()),
        };

        if let Some(kind) = PhaseKind::from_isa(&isa) {
            let mut phase: BuildPhase = decode_without_isa(&isa, fields)?;
            phase.kind = kind;
            return Ok(Record::BuildPhase(phase));
        }

        let record = match isa.as_str() {
            "PBXProject" => Record::Project(decode_without_isa(&isa, fields)?),
            "XCConfigurationList" => Record::ConfigurationList(decode_without_isa(&isa, fields)?),
            "XCBuildConfiguration" => Record::Configuration(decode_without_isa(&isa, fields)?),
            "PBXFileReference" => Record::FileReference(decode_without_isa(&isa, fields)?),
            "PBXBuildFile" => Record::BuildFile(decode_without_isa(&isa, fields)?),
            "PBXGroup" => Record::Group(decode_without_isa(&isa, fields)?),
            "PBXNativeTarget" => Record::NativeTarget(decode_without_isa(&isa, fields)?),
            "PBXTargetDependency" => Record::TargetDependency(decode_without_isa(&isa, fields)?),
            "PBXContainerItemProxy" => {
                Record::ContainerItemProxy(decode_without_isa(&isa, fields)?)
            }
            _ => Record::Opaque(fields),
        };
        Ok(record)
    }

    /// Encode back into an `objects` map entry, `isa` included
    pub fn to_value(&self) -> Value {
        let encoded = match self {
            Record::Project(r) => serde_json::to_value(r),
            Record::ConfigurationList(r) => serde_json::to_value(r),
            Record::Configuration(r) => serde_json::to_value(r),
            Record::FileReference(r) => serde_json::to_value(r),
            Record::BuildFile(r) => serde_json::to_value(r),
            Record::Group(r) => serde_json::to_value(r),
            Record::NativeTarget(r) => serde_json::to_value(r),
            Record::BuildPhase(r) => serde_json::to_value(r),
            Record::TargetDependency(r) => serde_json::to_value(r),
            Record::ContainerItemProxy(r) => serde_json::to_value(r),
            Record::Opaque(fields) => return Value::Object(fields.clone()),
        };
        // Plain structs of strings, lists and maps always encode as objects.
        let mut fields = match encoded {
            Ok(Value::Object(fields)) => fields,
            _ => Fields::new(),
        };
        fields.insert("isa".to_string(), Value::String(self.isa().to_string()));
        Value::Object(fields)
    }

    /// The record's `isa` tag
    pub fn isa(&self) -> &str {
        match self {
            Record::Project(_) => "PBXProject",
            Record::ConfigurationList(_) => "XCConfigurationList",
            Record::Configuration(_) => "XCBuildConfiguration",
            Record::FileReference(_) => "PBXFileReference",
            Record::BuildFile(_) => "PBXBuildFile",
            Record::Group(_) => "PBXGroup",
            Record::NativeTarget(_) => "PBXNativeTarget",
            Record::BuildPhase(phase) => phase.kind.isa(),
            Record::TargetDependency(_) => "PBXTargetDependency",
            Record::ContainerItemProxy(_) => "PBXContainerItemProxy",
            Record::Opaque(fields) => fields.get("isa").and_then(Value::as_str).unwrap_or(""),
        }
    }
}

fn decode_without_isa<T: DeserializeOwned>(isa: &str, mut fields: Fields) -> Result<T, String> {
    fields.remove("isa");
    serde_json::from_value(Value::Object(fields)).map_err(|e| format!("{}: {}", isa, e))
}

fn default_zero() -> String {
    "0".to_string()
}

fn default_build_action_mask() -> String {
    DEFAULT_BUILD_ACTION_MASK.to_string()
}

fn default_group_source_tree() -> String {
    "<group>".to_string()
}

fn default_phase_kind() -> PhaseKind {
    PhaseKind::Sources
}
