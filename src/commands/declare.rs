use std::path::Path;

use anyhow::Result;

use super::{load_config, print_json};

pub fn cmd_declare(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let declarations = extgen::declarations(&config)?;
    print_json(&serde_json::to_value(declarations)?)
}
