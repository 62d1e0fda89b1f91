//! Domain Entities
//!
//! - `ProjectGraph` - the project file as typed per-kind registries
//! - record kinds (`NativeTarget`, `Group`, `BuildPhase`, ...)

mod graph;
mod records;

pub use graph::{DanglingRef, ProjectGraph, SectionRecord};
pub use records::{
    BuildFile, BuildPhase, Configuration, ConfigurationList, ContainerItemProxy, Fields,
    FileReference, Group, NativeTarget, PhaseKind, ProductType, Project, Record,
    TargetDependency, DEFAULT_BUILD_ACTION_MASK, PLUGINS_SUBFOLDER_SPEC,
    TARGET_REFERENCE_PROXY_TYPE,
};

/// Fixture project shared by unit tests: one app target, one top-level group.
#[cfg(test)]
pub(crate) fn fixture_graph() -> ProjectGraph {
    let value: serde_json::Value =
        serde_json::from_str(include_str!("../../../tests/fixtures/project.pbxproj.json"))
            .expect("fixture is valid JSON");
    ProjectGraph::from_json(value).expect("fixture is a valid project")
}
