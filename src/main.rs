//! extgen CLI - iOS share and action extension generator
//!
//! Usage: extgen [--json] [-v...] <COMMAND>
//!
//! Commands:
//!   generate  Add the share and action extension targets to the project
//!   declare   Print the app-extension declarations as JSON
//!   check     Report references that do not resolve in a project file

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

/// Environment variable holding a tracing filter; wins over `-v`
const LOG_ENV: &str = "EXTGEN_LOG";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            config,
            project,
            platform_root,
            project_root,
            dry_run,
        } => commands::cmd_generate(
            &commands::GenerateArgs {
                config,
                project,
                platform_root,
                project_root,
                dry_run,
            },
            cli.json,
        ),
        Commands::Declare { config } => commands::cmd_declare(&config),
        Commands::Check { project } => commands::cmd_check(&project, cli.json),
    }
}

fn init_logging(verbose: u8) {
    let filter = match std::env::var(LOG_ENV) {
        Ok(spec) if !spec.trim().is_empty() => EnvFilter::new(spec),
        _ => EnvFilter::new(level_for(verbose)),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
