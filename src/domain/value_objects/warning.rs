//! Generation warning value object.

use serde::Serialize;

/// Non-fatal problem noticed while generating an extension.
///
/// Warnings never stop a pass; they are collected into the report and
/// logged as they happen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationWarning {
    /// Target the warning is about, if it is target-specific
    pub target: Option<String>,
    /// Human readable message
    pub message: String,
}

impl GenerationWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            target: None,
            message: message.into(),
        }
    }

    pub fn for_target(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
            message: message.into(),
        }
    }
}
