//! Project registrar
//!
//! Lists a new target on the root project record.

use serde_json::{json, Value};
use tracing::debug;

use crate::domain::entities::{Fields, Project, ProjectGraph};
use crate::domain::value_objects::ObjectId;
use crate::error::ExtgenResult;

/// Swift migration marker written for new targets
pub const LAST_SWIFT_MIGRATION: &str = "1250";

/// Append `target` to the project's target list and attribute map
///
/// Idempotent: a target already listed is not added twice, and an existing
/// attribute entry is left as it is.
pub fn register_target(graph: &mut ProjectGraph, target: &ObjectId) -> ExtgenResult<()> {
    let project = graph.project_mut()?;
    if !project.targets.contains(target) {
        project.targets.push(target.clone());
    }

    let attributes = project
        .attributes
        .entry(Project::TARGET_ATTRIBUTES)
        .or_insert_with(|| Value::Object(Fields::new()));
    if !attributes.is_object() {
        *attributes = Value::Object(Fields::new());
    }
    if let Value::Object(per_target) = attributes {
        per_target
            .entry(target.to_string())
            .or_insert_with(|| json!({ "LastSwiftMigration": LAST_SWIFT_MIGRATION }));
    }

    debug!(target = %target, "registered target on project");
    Ok(())
}
