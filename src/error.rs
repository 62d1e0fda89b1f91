//! Error types for extgen
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;
use crate::domain::value_objects::ObjectId;

/// Result type alias for extgen operations
pub type ExtgenResult<T> = Result<T, ExtgenError>;

/// Main error type for extgen operations
#[derive(Error, Debug)]
pub enum ExtgenError {
    /// The app configuration has no bundle identifier
    #[error("no bundle identifier: set [app].bundle_identifier in the config")]
    MissingBundleIdentifier,

    /// The app name has no characters left after sanitizing
    #[error("app name '{name}' contains no ASCII letters or digits")]
    InvalidAppName { name: String },

    /// A configuration value is out of range or malformed
    #[error("invalid config value for '{key}': {message}")]
    InvalidConfig { key: String, message: String },

    /// The configuration file could not be parsed
    #[error("invalid config file {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// No application target exists to embed the extension into
    #[error("no application target found in the project; an extension needs a host app")]
    MissingHostTarget,

    /// No project file was given and none was found
    #[error("no *.xcodeproj/project.pbxproj under {}; pass --project", dir.display())]
    ProjectNotFound { dir: PathBuf },

    /// The project file could not be parsed
    #[error("invalid project file {path}: {message}")]
    ProjectParse { path: PathBuf, message: String },

    /// The project has no root `PBXProject` record
    #[error("project graph has no root project record")]
    MissingProjectRecord,

    /// A reference points at an id that is absent from its section
    #[error("dangling reference {id}: expected a {expected} record")]
    DanglingReference { id: ObjectId, expected: &'static str },

    /// The view-controller template could not be found
    #[error("template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    /// IO error on a specific path
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File system port error (directory creation, copy, write)
    #[error("file system error: {0}")]
    Fs(#[from] FsError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExtgenError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by the user's configuration or project
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingBundleIdentifier
                | Self::InvalidAppName { .. }
                | Self::InvalidConfig { .. }
                | Self::ConfigParse { .. }
                | Self::MissingHostTarget
                | Self::ProjectNotFound { .. }
        )
    }
}
