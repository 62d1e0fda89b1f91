//! JSON Project Repository
//!
//! Loads and saves the JSON property-list form of `project.pbxproj`.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::domain::entities::ProjectGraph;
use crate::domain::ports::file_system::FileSystem;
use crate::error::{ExtgenError, ExtgenResult};
use crate::infrastructure::fs::LocalFs;

/// Project file repository over a [`FileSystem`]
pub struct JsonProjectRepository<F: FileSystem = LocalFs> {
    fs: F,
}

impl JsonProjectRepository<LocalFs> {
    /// Create a new repository with the default file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl Default for JsonProjectRepository<LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> JsonProjectRepository<F> {
    /// Create with a custom file system (for testing)
    pub fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Read and decode a project file
    pub fn load(&self, path: &Path) -> ExtgenResult<ProjectGraph> {
        let content = self.fs.read(path)?;
        let graph = parse_project(&content).map_err(|message| ExtgenError::ProjectParse {
            path: path.to_path_buf(),
            message,
        })?;
        debug!(path = %path.display(), records = graph.len(), "loaded project");
        Ok(graph)
    }

    /// Encode and atomically write a project file
    pub fn save(&self, path: &Path, graph: &ProjectGraph) -> ExtgenResult<()> {
        self.fs.write(path, &render_project(graph)?)?;
        debug!(path = %path.display(), records = graph.len(), "saved project");
        Ok(())
    }
}

/// Project file name inside an `.xcodeproj` bundle
pub const PROJECT_FILE_NAME: &str = "project.pbxproj";

/// First `<name>.xcodeproj/project.pbxproj` under `platform_root`, by name
pub fn find_project_file(platform_root: &Path) -> ExtgenResult<PathBuf> {
    let entries =
        std::fs::read_dir(platform_root).map_err(|e| ExtgenError::io(platform_root, e))?;
    let mut candidates: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "xcodeproj"))
        .map(|bundle| bundle.join(PROJECT_FILE_NAME))
        .filter(|file| file.is_file())
        .collect();
    candidates.sort();
    candidates
        .into_iter()
        .next()
        .ok_or_else(|| ExtgenError::ProjectNotFound {
            dir: platform_root.to_path_buf(),
        })
}

/// Decode project file text
pub fn parse_project(content: &str) -> Result<ProjectGraph, String> {
    let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    ProjectGraph::from_json(value)
}

/// Encode a graph as pretty JSON with sorted keys and a trailing newline
pub fn render_project(graph: &ProjectGraph) -> ExtgenResult<String> {
    let mut text = serde_json::to_string_pretty(&graph.to_json())?;
    text.push('\n');
    Ok(text)
}
