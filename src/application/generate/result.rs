//! Generate Result
//!
//! Result types for generate operations.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::{ExtensionFlavor, GenerationWarning, ObjectId};

/// Outcome of one pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassReport {
    pub flavor: ExtensionFlavor,
    pub target_name: String,
    pub bundle_identifier: String,
    /// The extension's native target, new or pre-existing
    pub target: ObjectId,
    /// True when the target already existed and the graph was left alone
    pub skipped: bool,
    /// The host's embed phase, when this pass touched the graph
    pub embed_phase: Option<ObjectId>,
    pub target_dir: PathBuf,
    /// Files listed in the target's group
    pub files: Vec<String>,
    pub warnings: Vec<GenerationWarning>,
}

/// Result of a generate operation
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerateResult {
    /// Host application the extensions are embedded in
    pub host: Option<ObjectId>,
    pub passes: Vec<PassReport>,
    /// Warnings not tied to one pass
    pub warnings: Vec<GenerationWarning>,
    /// Number of records the run added to the graph
    pub records_added: usize,
}

impl GenerateResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_changes(&self) -> bool {
        self.passes.iter().any(|pass| !pass.skipped)
    }

    /// Every warning, global ones first
    pub fn all_warnings(&self) -> impl Iterator<Item = &GenerationWarning> {
        self.warnings
            .iter()
            .chain(self.passes.iter().flat_map(|pass| pass.warnings.iter()))
    }

    pub fn pass(&self, flavor: ExtensionFlavor) -> Option<&PassReport> {
        self.passes.iter().find(|pass| pass.flavor == flavor)
    }
}
