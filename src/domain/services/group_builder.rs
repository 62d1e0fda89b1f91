//! Target group builder
//!
//! Files a target's scaffolded files into a group named after the target
//! and hangs that group under every top-level group of the project. The
//! files themselves are written by the scaffold step before this runs.

use tracing::debug;

use crate::domain::entities::{Fields, FileReference, Group, ProjectGraph};
use crate::domain::services::minter::{seed, IdMinter};
use crate::domain::value_objects::{last_known_file_type, ObjectId};
use crate::error::ExtgenResult;

/// Ids produced by [`add_target_group`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetGroup {
    pub group: ObjectId,
    /// `(file name, file reference)` in membership order
    pub files: Vec<(String, ObjectId)>,
    /// Groups the new group was attached to
    pub parents: Vec<ObjectId>,
}

impl TargetGroup {
    /// File reference of a member by file name
    pub fn file(&self, file_name: &str) -> Option<&ObjectId> {
        self.files
            .iter()
            .find(|(name, _)| name == file_name)
            .map(|(_, id)| id)
    }
}

/// Create the `<target>` group holding one file reference per member
pub fn add_target_group(
    graph: &mut ProjectGraph,
    ids: &mut IdMinter,
    target_name: &str,
    members: &[String],
) -> ExtgenResult<TargetGroup> {
    let mut files = Vec::with_capacity(members.len());
    for file_name in members {
        let id = ids.mint(graph, &seed(target_name, &format!("file/{}", file_name)));
        graph.insert(
            id.clone(),
            FileReference {
                path: Some(file_name.clone()),
                name: Some(file_name.clone()),
                source_tree: "<group>".to_string(),
                explicit_file_type: None,
                last_known_file_type: Some(last_known_file_type(file_name).to_string()),
                include_in_index: None,
                extra: Fields::new(),
            },
        );
        files.push((file_name.clone(), id));
    }

    let group = ids.mint(graph, &seed(target_name, "group"));
    graph.insert(
        group.clone(),
        Group {
            children: files.iter().map(|(_, id)| id.clone()).collect(),
            path: Some(target_name.to_string()),
            ..Group::named(target_name)
        },
    );

    let parents = attach_to_top_level_groups(graph, &group)?;
    debug!(
        target_name,
        group = %group,
        files = files.len(),
        parents = parents.len(),
        "added target group"
    );
    Ok(TargetGroup {
        group,
        files,
        parents,
    })
}

/// Add `child` to every top-level group that does not already list it
///
/// A project without any top-level group gets the child on its main group.
fn attach_to_top_level_groups(
    graph: &mut ProjectGraph,
    child: &ObjectId,
) -> ExtgenResult<Vec<ObjectId>> {
    let mut parents: Vec<ObjectId> = graph
        .iter::<Group>()
        .filter(|(id, group)| *id != child && group.is_top_level())
        .map(|(id, _)| id.clone())
        .collect();
    if parents.is_empty() {
        parents.push(graph.project()?.main_group.clone());
    }

    for parent in &parents {
        let group = graph.require_mut::<Group>(parent)?;
        if !group.children.contains(child) {
            group.children.push(child.clone());
        }
    }
    Ok(parents)
}
