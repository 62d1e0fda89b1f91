//! Generate Module
//!
//! Adds the share and action extension targets to a project graph.
//!
//! ## Structure
//!
//! - `result` - Result types (`GenerateResult`, `PassReport`)
//! - `use_case` - Core use case logic (`GenerateUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use extgen::application::generate::GenerateUseCase;
//!
//! let use_case = GenerateUseCase::new(LocalFs::new());
//! let result = use_case.execute(&config, &mut graph)?;
//! ```

mod result;
mod use_case;

pub use result::{GenerateResult, PassReport};
pub use use_case::GenerateUseCase;
