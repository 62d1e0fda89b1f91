//! extgen - iOS share and action extension generator
//!
//! extgen adds a share extension and an action extension to an Xcode
//! project: the native targets, their build settings and phases, the host
//! app's embed phases and dependencies, and the files each target needs on
//! disk.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{declarations, ExtensionDeclaration, GenerateResult, GenerateUseCase};
pub use config::Config;
pub use domain::entities::ProjectGraph;
pub use domain::value_objects::{ExtensionFlavor, GenerationWarning, ObjectId};
pub use error::{ExtgenError, ExtgenResult};
pub use infrastructure::{JsonProjectRepository, LocalFs};
