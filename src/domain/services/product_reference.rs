//! Product-reference builder
//!
//! Adds the `.appex` file reference an extension target builds into, filed
//! under the project's Products group.

use tracing::debug;

use crate::domain::entities::{Fields, FileReference, Group, ProjectGraph};
use crate::domain::services::minter::{seed, IdMinter};
use crate::domain::value_objects::{product_file_name, ObjectId, APP_EXTENSION_FILE_TYPE};
use crate::error::ExtgenResult;

/// Conventional name of the group holding build products
pub const PRODUCTS_GROUP: &str = "Products";

/// Ids produced by [`add_product_reference`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductReference {
    /// The `.appex` file reference
    pub file_ref: ObjectId,
    /// The group it was filed under
    pub group: ObjectId,
}

/// Add `<target>.appex` to the Products group, creating the group if needed
pub fn add_product_reference(
    graph: &mut ProjectGraph,
    ids: &mut IdMinter,
    target_name: &str,
) -> ExtgenResult<ProductReference> {
    let group = ensure_products_group(graph, ids)?;

    let file_ref = ids.mint(graph, &seed(target_name, "product"));
    graph.insert(
        file_ref.clone(),
        FileReference {
            path: Some(product_file_name(target_name)),
            name: None,
            source_tree: "BUILT_PRODUCTS_DIR".to_string(),
            explicit_file_type: Some(APP_EXTENSION_FILE_TYPE.to_string()),
            last_known_file_type: None,
            include_in_index: Some("0".to_string()),
            extra: Fields::new(),
        },
    );
    graph.require_mut::<Group>(&group)?.children.push(file_ref.clone());

    debug!(target_name, product = %file_ref, group = %group, "added product reference");
    Ok(ProductReference { file_ref, group })
}

/// The Products group: the project's product group if it has one, else any
/// group named Products, else a new one attached to the main group
fn ensure_products_group(graph: &mut ProjectGraph, ids: &mut IdMinter) -> ExtgenResult<ObjectId> {
    let project = graph.project()?;
    if let Some(id) = &project.product_ref_group {
        if graph.get::<Group>(id).is_some() {
            return Ok(id.clone());
        }
    }
    let main_group = project.main_group.clone();

    let existing = graph
        .iter::<Group>()
        .find(|(_, group)| group.name.as_deref() == Some(PRODUCTS_GROUP))
        .map(|(id, _)| id.clone());
    if let Some(id) = existing {
        return Ok(id);
    }

    let id = ids.mint(graph, &seed(PRODUCTS_GROUP, "group"));
    graph.insert(id.clone(), Group::named(PRODUCTS_GROUP));
    graph.require_mut::<Group>(&main_group)?.children.push(id.clone());
    let project = graph.project_mut()?;
    if project.product_ref_group.is_none() {
        project.product_ref_group = Some(id.clone());
    }
    debug!(group = %id, "created Products group");
    Ok(id)
}
