//! Domain Services
//!
//! Graph builders that add one extension target to a project graph, stage
//! by stage. They mutate the graph they are handed and perform no I/O.

mod build_phases;
mod configuration_list;
mod dependency_wirer;
mod group_builder;
mod minter;
mod native_target;
mod product_reference;
mod project_registrar;

pub use build_phases::{assemble_build_phases, AssembledPhases, PhaseSpec};
pub use configuration_list::{
    add_configuration_list, ConfigurationListSpec, DEFAULT_BUILD_NUMBER, DEFAULT_CONFIGURATION,
};
pub use dependency_wirer::{wire_host_dependency, HostDependency};
pub use group_builder::{add_target_group, TargetGroup};
pub use minter::{seed, IdMinter};
pub use native_target::add_native_target;
pub use product_reference::{add_product_reference, ProductReference, PRODUCTS_GROUP};
pub use project_registrar::{register_target, LAST_SWIFT_MIGRATION};
