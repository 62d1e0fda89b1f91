//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain graph rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - Runs the share and action passes over a project graph
//! - `declarations` - Lists the app-extension declarations for a build service
//!
//! ## Services
//!
//! - `scaffold` - Target directories and the view-controller source
//! - `manifests` - Info.plist and entitlements of each target

pub mod declarations;
pub mod generate;
pub mod manifests;
pub mod scaffold;

pub use declarations::{declarations, ExtensionDeclaration};
pub use generate::{GenerateResult, GenerateUseCase, PassReport};
pub use manifests::{activation_rule, entitlements, info_plist, write_manifests};
pub use scaffold::{replace_identifier, scaffold_target, Scaffold, ScaffoldRequest};
