//! Native-target builder

use tracing::debug;

use crate::domain::entities::{Fields, NativeTarget, ProductType, ProjectGraph};
use crate::domain::value_objects::ObjectId;

/// Register an app-extension target under a caller-minted id
///
/// The target starts with no build phases and no dependencies; later stages
/// of the pass fill them in.
pub fn add_native_target(
    graph: &mut ProjectGraph,
    target_id: &ObjectId,
    target_name: &str,
    product_ref: &ObjectId,
    configuration_list: &ObjectId,
) -> ObjectId {
    graph.insert(
        target_id.clone(),
        NativeTarget {
            name: target_name.to_string(),
            product_name: Some(target_name.to_string()),
            product_type: ProductType::AppExtension,
            product_reference: Some(product_ref.clone()),
            build_configuration_list: configuration_list.clone(),
            build_phases: Vec::new(),
            build_rules: Vec::new(),
            dependencies: Vec::new(),
            extra: Fields::new(),
        },
    );
    debug!(target_name, target = %target_id, "added native target");
    target_id.clone()
}
