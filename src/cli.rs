use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// extgen - iOS share and action extension generator
#[derive(Parser, Debug)]
#[command(name = "extgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add the share and action extension targets to the project
    Generate {
        /// Config file
        #[arg(short, long, default_value = "extgen.toml")]
        config: PathBuf,

        /// JSON project file (overrides [paths].project_file)
        #[arg(long)]
        project: Option<PathBuf>,

        /// Native project directory (overrides [paths].platform_root)
        #[arg(long)]
        platform_root: Option<PathBuf>,

        /// Directory config paths are relative to (overrides [paths].project_root)
        #[arg(long)]
        project_root: Option<PathBuf>,

        /// Dry run - print the project diff and write nothing
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the app-extension declarations as JSON
    Declare {
        /// Config file
        #[arg(short, long, default_value = "extgen.toml")]
        config: PathBuf,
    },

    /// Report references that do not resolve in a project file
    Check {
        /// JSON project file
        #[arg(long)]
        project: PathBuf,
    },
}
