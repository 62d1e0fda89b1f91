//! Domain Layer
//!
//! The project graph and every rule for changing it, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Record kinds and the `ProjectGraph` registries
//! - `value_objects/` - Immutable value types (ObjectId, ExtensionFlavor, naming)
//! - `services/` - Graph builders (minter, configuration list, target, phases, ...)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Deterministic** - Same graph and inputs produce the same records
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
