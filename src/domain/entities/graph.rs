//! Project graph entity
//!
//! The in-memory form of a project file: one registry per record kind,
//! keyed by [`ObjectId`]. All cross-record links are ids; nothing is
//! embedded. It's a pure data structure - reading and writing files is
//! handled by `ProjectRepository`.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::entities::records::{
    BuildFile, BuildPhase, Configuration, ConfigurationList, ContainerItemProxy, Fields,
    FileReference, Group, NativeTarget, ProductType, Project, Record, TargetDependency,
    TARGET_REFERENCE_PROXY_TYPE,
};
use crate::domain::value_objects::ObjectId;
use crate::error::{ExtgenError, ExtgenResult};

/// A record kind with its own registry in [`ProjectGraph`]
pub trait SectionRecord: Sized {
    /// Section name used in diagnostics
    const SECTION: &'static str;

    fn registry(graph: &ProjectGraph) -> &BTreeMap<ObjectId, Self>;
    fn registry_mut(graph: &mut ProjectGraph) -> &mut BTreeMap<ObjectId, Self>;
}

macro_rules! section_record {
    ($ty:ty, $field:ident, $section:literal) => {
        impl SectionRecord for $ty {
            const SECTION: &'static str = $section;

            fn registry(graph: &ProjectGraph) -> &BTreeMap<ObjectId, Self> {
                &graph.$field
            }

            fn registry_mut(graph: &mut ProjectGraph) -> &mut BTreeMap<ObjectId, Self> {
                &mut graph.$field
            }
        }
    };
}

section_record!(Project, projects, "PBXProject");
section_record!(ConfigurationList, configuration_lists, "XCConfigurationList");
section_record!(Configuration, configurations, "XCBuildConfiguration");
section_record!(FileReference, file_references, "PBXFileReference");
section_record!(BuildFile, build_files, "PBXBuildFile");
section_record!(Group, groups, "PBXGroup");
section_record!(NativeTarget, native_targets, "PBXNativeTarget");
section_record!(BuildPhase, build_phases, "PBXBuildPhase");
section_record!(TargetDependency, target_dependencies, "PBXTargetDependency");
section_record!(ContainerItemProxy, container_item_proxies, "PBXContainerItemProxy");

/// A reference field whose id does not resolve in its declared section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingRef {
    /// Record holding the reference
    pub owner: ObjectId,
    /// Field of the owner the reference lives in
    pub field: &'static str,
    /// The unresolved id
    pub id: ObjectId,
    /// Section the id should have resolved in
    pub expected: &'static str,
}

/// The whole project graph
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectGraph {
    /// Top-level keys other than `objects` and `rootObject`
    header: Fields,
    root_object: ObjectId,
    projects: BTreeMap<ObjectId, Project>,
    configuration_lists: BTreeMap<ObjectId, ConfigurationList>,
    configurations: BTreeMap<ObjectId, Configuration>,
    file_references: BTreeMap<ObjectId, FileReference>,
    build_files: BTreeMap<ObjectId, BuildFile>,
    groups: BTreeMap<ObjectId, Group>,
    native_targets: BTreeMap<ObjectId, NativeTarget>,
    build_phases: BTreeMap<ObjectId, BuildPhase>,
    target_dependencies: BTreeMap<ObjectId, TargetDependency>,
    container_item_proxies: BTreeMap<ObjectId, ContainerItemProxy>,
    opaque: BTreeMap<ObjectId, Fields>,
}

impl ProjectGraph {
    /// A graph holding only the given root project record
    pub fn with_project(root: ObjectId, project: Project) -> Self {
        let mut graph = Self {
            root_object: root.clone(),
            ..Self::default()
        };
        graph.header.insert("archiveVersion".into(), Value::String("1".into()));
        graph.header.insert("classes".into(), Value::Object(Fields::new()));
        graph.header.insert("objectVersion".into(), Value::String("56".into()));
        graph.projects.insert(root, project);
        graph
    }

    /// Decode the JSON property-list form of a project file
    pub fn from_json(value: Value) -> Result<Self, String> {
        let Value::Object(mut top) = value else {
            return Err("project file is not an object".to_string());
        };
        let root_object = match top.remove("rootObject") {
            Some(Value::String(id)) => ObjectId::new(id),
            _ => return Err("missing rootObject".to_string()),
        };
        let objects = match top.remove("objects") {
            Some(Value::Object(objects)) => objects,
            _ => return Err("missing objects".to_string()),
        };

        let mut graph = Self {
            header: top,
            root_object,
            ..Self::default()
        };
        for (id, value) in objects {
            let record = Record::from_value(value).map_err(|e| format!("object {}: {}", id, e))?;
            graph.insert_record(ObjectId::new(id), record);
        }
        Ok(graph)
    }

    /// Encode back into the JSON property-list form
    pub fn to_json(&self) -> Value {
        let mut objects = Fields::new();
        for (id, record) in self.records() {
            objects.insert(id.to_string(), record.to_value());
        }
        let mut top = self.header.clone();
        top.insert("objects".to_string(), Value::Object(objects));
        top.insert(
            "rootObject".to_string(),
            Value::String(self.root_object.to_string()),
        );
        Value::Object(top)
    }

    /// Every record with its id, section by section
    pub fn records(&self) -> Vec<(ObjectId, Record)> {
        fn collect<T: Clone>(
            out: &mut Vec<(ObjectId, Record)>,
            registry: &BTreeMap<ObjectId, T>,
            wrap: fn(T) -> Record,
        ) {
            out.extend(registry.iter().map(|(id, r)| (id.clone(), wrap(r.clone()))));
        }

        let mut out = Vec::with_capacity(self.len());
        collect(&mut out, &self.projects, Record::Project);
        collect(&mut out, &self.configuration_lists, Record::ConfigurationList);
        collect(&mut out, &self.configurations, Record::Configuration);
        collect(&mut out, &self.file_references, Record::FileReference);
        collect(&mut out, &self.build_files, Record::BuildFile);
        collect(&mut out, &self.groups, Record::Group);
        collect(&mut out, &self.native_targets, Record::NativeTarget);
        collect(&mut out, &self.build_phases, Record::BuildPhase);
        collect(&mut out, &self.target_dependencies, Record::TargetDependency);
        collect(&mut out, &self.container_item_proxies, Record::ContainerItemProxy);
        collect(&mut out, &self.opaque, Record::Opaque);
        out
    }

    /// Insert any record into the registry for its kind
    pub fn insert_record(&mut self, id: ObjectId, record: Record) {
        match record {
            Record::Project(r) => self.insert(id, r),
            Record::ConfigurationList(r) => self.insert(id, r),
            Record::Configuration(r) => self.insert(id, r),
            Record::FileReference(r) => self.insert(id, r),
            Record::BuildFile(r) => self.insert(id, r),
            Record::Group(r) => self.insert(id, r),
            Record::NativeTarget(r) => self.insert(id, r),
            Record::BuildPhase(r) => self.insert(id, r),
            Record::TargetDependency(r) => self.insert(id, r),
            Record::ContainerItemProxy(r) => self.insert(id, r),
            Record::Opaque(fields) => {
                self.opaque.insert(id, fields);
            }
        }
    }

    /// Insert a typed record
    pub fn insert<T: SectionRecord>(&mut self, id: ObjectId, record: T) {
        T::registry_mut(self).insert(id, record);
    }

    pub fn get<T: SectionRecord>(&self, id: &ObjectId) -> Option<&T> {
        T::registry(self).get(id)
    }

    pub fn get_mut<T: SectionRecord>(&mut self, id: &ObjectId) -> Option<&mut T> {
        T::registry_mut(self).get_mut(id)
    }

    /// Look up a record that must exist; a miss is a graph integrity violation
    pub fn require<T: SectionRecord>(&self, id: &ObjectId) -> ExtgenResult<&T> {
        self.get(id).ok_or_else(|| ExtgenError::DanglingReference {
            id: id.clone(),
            expected: T::SECTION,
        })
    }

    pub fn require_mut<T: SectionRecord>(&mut self, id: &ObjectId) -> ExtgenResult<&mut T> {
        T::registry_mut(self)
            .get_mut(id)
            .ok_or_else(|| ExtgenError::DanglingReference {
                id: id.clone(),
                expected: T::SECTION,
            })
    }

    /// Iterate over one section in id order
    pub fn iter<T: SectionRecord + 'static>(&self) -> impl Iterator<Item = (&ObjectId, &T)> {
        T::registry(self).iter()
    }

    /// Number of records in one section
    pub fn count<T: SectionRecord>(&self) -> usize {
        T::registry(self).len()
    }

    /// Whether any section holds this id
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.projects.contains_key(id)
            || self.configuration_lists.contains_key(id)
            || self.configurations.contains_key(id)
            || self.file_references.contains_key(id)
            || self.build_files.contains_key(id)
            || self.groups.contains_key(id)
            || self.native_targets.contains_key(id)
            || self.build_phases.contains_key(id)
            || self.target_dependencies.contains_key(id)
            || self.container_item_proxies.contains_key(id)
            || self.opaque.contains_key(id)
    }

    /// Every id in the graph
    pub fn ids(&self) -> Vec<ObjectId> {
        self.records().into_iter().map(|(id, _)| id).collect()
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.projects.len()
            + self.configuration_lists.len()
            + self.configurations.len()
            + self.file_references.len()
            + self.build_files.len()
            + self.groups.len()
            + self.native_targets.len()
            + self.build_phases.len()
            + self.target_dependencies.len()
            + self.container_item_proxies.len()
            + self.opaque.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `isa` of an unmodelled record
    pub fn opaque_isa(&self, id: &ObjectId) -> Option<&str> {
        self.opaque
            .get(id)
            .and_then(|fields| fields.get("isa"))
            .and_then(Value::as_str)
    }

    pub fn root_id(&self) -> &ObjectId {
        &self.root_object
    }

    /// The singleton root project record
    pub fn project(&self) -> ExtgenResult<&Project> {
        self.projects
            .get(&self.root_object)
            .ok_or(ExtgenError::MissingProjectRecord)
    }

    pub fn project_mut(&mut self) -> ExtgenResult<&mut Project> {
        self.projects
            .get_mut(&self.root_object)
            .ok_or(ExtgenError::MissingProjectRecord)
    }

    /// Find a native target by name
    pub fn target_named(&self, name: &str) -> Option<ObjectId> {
        self.native_targets
            .iter()
            .find(|(_, target)| target.name == name)
            .map(|(id, _)| id.clone())
    }

    /// The host application target
    ///
    /// Targets listed by the project win, in list order; targets only
    /// present in the section are considered afterwards.
    pub fn host_application_target(&self) -> Option<ObjectId> {
        let is_app = |id: &ObjectId| {
            self.native_targets
                .get(id)
                .is_some_and(|t| t.product_type == ProductType::Application)
        };
        if let Ok(project) = self.project() {
            if let Some(id) = project.targets.iter().find(|id| is_app(*id)) {
                return Some(id.clone());
            }
        }
        self.native_targets.keys().find(|id| is_app(*id)).cloned()
    }

    /// Groups that list `child` among their children
    pub fn parents_of(&self, child: &ObjectId) -> Vec<ObjectId> {
        self.groups
            .iter()
            .filter(|(_, group)| group.children.contains(child))
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// The file reference among a group's children named `file_name`
    pub fn group_member(&self, group: &ObjectId, file_name: &str) -> Option<ObjectId> {
        let group = self.groups.get(group)?;
        group
            .children
            .iter()
            .find(|child| {
                self.file_references
                    .get(*child)
                    .is_some_and(|file| file.display_name() == Some(file_name))
            })
            .cloned()
    }

    /// Every modelled reference that does not resolve in its declared section
    pub fn dangling_references(&self) -> Vec<DanglingRef> {
        let mut out = Vec::new();
        let mut check = |owner: &ObjectId, field, id: &ObjectId, expected, ok: bool| {
            if !ok {
                out.push(DanglingRef {
                    owner: owner.clone(),
                    field,
                    id: id.clone(),
                    expected,
                });
            }
        };

        let root = &self.root_object;
        check(root, "rootObject", root, "PBXProject", self.projects.contains_key(root));

        for (owner, project) in &self.projects {
            for id in &project.targets {
                check(owner, "targets", id, "PBXNativeTarget", self.is_target(id));
            }
            let main = &project.main_group;
            check(owner, "mainGroup", main, "PBXGroup", self.groups.contains_key(main));
            if let Some(id) = &project.product_ref_group {
                check(owner, "productRefGroup", id, "PBXGroup", self.groups.contains_key(id));
            }
            if let Some(id) = &project.build_configuration_list {
                let ok = self.configuration_lists.contains_key(id);
                check(owner, "buildConfigurationList", id, "XCConfigurationList", ok);
            }
            for id in project.target_attribute_ids() {
                check(owner, "TargetAttributes", &id, "PBXNativeTarget", self.is_target(&id));
            }
        }

        for (owner, list) in &self.configuration_lists {
            for id in &list.build_configurations {
                let ok = self.configurations.contains_key(id);
                check(owner, "buildConfigurations", id, "XCBuildConfiguration", ok);
            }
        }

        for (owner, build_file) in &self.build_files {
            if let Some(id) = &build_file.file_ref {
                check(owner, "fileRef", id, "PBXFileReference", self.is_file_or_group(id));
            }
        }

        for (owner, group) in &self.groups {
            for id in &group.children {
                check(owner, "children", id, "PBXFileReference", self.is_file_or_group(id));
            }
        }

        for (owner, target) in &self.native_targets {
            let list = &target.build_configuration_list;
            let ok = self.configuration_lists.contains_key(list);
            check(owner, "buildConfigurationList", list, "XCConfigurationList", ok);
            if let Some(id) = &target.product_reference {
                let ok = self.file_references.contains_key(id);
                check(owner, "productReference", id, "PBXFileReference", ok);
            }
            for id in &target.build_phases {
                let ok = self.build_phases.contains_key(id)
                    || self
                        .opaque_isa(id)
                        .is_some_and(|isa| isa.ends_with("BuildPhase"));
                check(owner, "buildPhases", id, "PBXBuildPhase", ok);
            }
            for id in &target.dependencies {
                let ok = self.target_dependencies.contains_key(id);
                check(owner, "dependencies", id, "PBXTargetDependency", ok);
            }
        }

        for (owner, phase) in &self.build_phases {
            for id in &phase.files {
                check(owner, "files", id, "PBXBuildFile", self.build_files.contains_key(id));
            }
        }

        for (owner, dependency) in &self.target_dependencies {
            if let Some(id) = &dependency.target {
                check(owner, "target", id, "PBXNativeTarget", self.is_target(id));
            }
            let proxy = &dependency.target_proxy;
            let ok = self.container_item_proxies.contains_key(proxy);
            check(owner, "targetProxy", proxy, "PBXContainerItemProxy", ok);
        }

        for (owner, proxy) in &self.container_item_proxies {
            let portal = &proxy.container_portal;
            let ok = self.projects.contains_key(portal);
            check(owner, "containerPortal", portal, "PBXProject", ok);
            if proxy.proxy_type == TARGET_REFERENCE_PROXY_TYPE {
                let remote = &proxy.remote_global_id_string;
                let ok = self.is_target(remote);
                check(owner, "remoteGlobalIDString", remote, "PBXNativeTarget", ok);
            }
        }

        out
    }

    /// File references, groups, and unmodelled variant groups
    fn is_file_or_group(&self, id: &ObjectId) -> bool {
        self.file_references.contains_key(id)
            || self.groups.contains_key(id)
            || self.opaque.contains_key(id)
    }

    /// Native targets plus aggregate/legacy targets, which stay opaque
    fn is_target(&self, id: &ObjectId) -> bool {
        self.native_targets.contains_key(id)
            || self
                .opaque_isa(id)
                .is_some_and(|isa| isa.ends_with("Target"))
    }
}
