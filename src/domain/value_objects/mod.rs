//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod file_type;
mod flavor;
mod object_id;
mod warning;

pub use file_type::{is_source_file, last_known_file_type, APP_EXTENSION_FILE_TYPE};
pub use flavor::{
    app_group, bundle_identifier, entitlements_file_name, product_file_name, sanitized_name,
    target_name, view_controller_type, ExtensionFlavor,
};
pub use object_id::ObjectId;
pub use warning::GenerationWarning;
