//! Command handlers for the extgen binary

mod check;
mod declare;
mod generate;

pub use check::cmd_check;
pub use declare::cmd_declare;
pub use generate::{cmd_generate, GenerateArgs};

use std::path::Path;

use anyhow::{Context, Result};
use extgen::config::Config;
use tracing::warn;

/// Load a config file, surface unknown-key warnings, apply env overrides
fn load_config(path: &Path) -> Result<Config> {
    let (config, warnings) = Config::load_with_warnings(path)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    for warning in warnings {
        warn!("{}", warning);
    }
    Ok(config.with_env_overrides())
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
