//! Repository Implementations

mod project;

pub use project::{
    find_project_file, parse_project, render_project, JsonProjectRepository, PROJECT_FILE_NAME,
};
