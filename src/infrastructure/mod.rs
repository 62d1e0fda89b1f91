//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, DryRun)
//! - `repositories/` - Project file repository (JSON)
//! - `plist` - XML property-list writer

pub mod fs;
pub mod plist;
pub mod repositories;

// Re-export for convenience
pub use fs::{DryRunFs, LocalFs};
pub use repositories::JsonProjectRepository;
