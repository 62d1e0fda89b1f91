//! Reusable test content.

use extgen::config::Config;
use extgen::domain::entities::ProjectGraph;
use extgen::infrastructure::repositories::parse_project;

/// Base project: one app target, one top-level group, a Products group
pub const PROJECT_FIXTURE: &str = include_str!("../fixtures/project.pbxproj.json");

/// Id of the fixture's application target
pub const APP_TARGET: &str = "13B07F861A680F5B00A75B9A";

/// Id of the fixture's top-level group
pub const MAIN_GROUP: &str = "83CBB9F61A601CBA00E9B192";

/// Smallest config generation accepts
pub const MINIMAL_CONFIG: &str = r#"
[app]
name = "My App!!"
bundle_identifier = "com.acme.app"
version = "1.2.0"
build_number = "7"
"#;

pub fn fixture_graph() -> ProjectGraph {
    parse_project(PROJECT_FIXTURE).expect("fixture is a valid project")
}

pub fn minimal_config() -> Config {
    let mut config = Config::default();
    config.app.name = "My App!!".to_string();
    config.app.bundle_identifier = Some("com.acme.app".to_string());
    config.app.version = Some("1.2.0".to_string());
    config
}

/// Config whose platform root lives inside `root`
pub fn config_in(root: &std::path::Path) -> Config {
    let mut config = minimal_config();
    config.paths.project_root = root.to_path_buf();
    config
}
