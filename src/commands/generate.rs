use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use extgen::application::GenerateResult;
use extgen::domain::ports::FileSystem;
use extgen::infrastructure::repositories::{find_project_file, render_project};
use extgen::infrastructure::{DryRunFs, JsonProjectRepository, LocalFs};
use extgen::GenerateUseCase;
use serde_json::json;
use similar::TextDiff;
use tracing::info;

use super::{load_config, print_json};

#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub config: PathBuf,
    pub project: Option<PathBuf>,
    pub platform_root: Option<PathBuf>,
    pub project_root: Option<PathBuf>,
    pub dry_run: bool,
}

pub fn cmd_generate(args: &GenerateArgs, json: bool) -> Result<()> {
    let mut config = load_config(&args.config)?;
    if let Some(root) = &args.project_root {
        config.paths.project_root = root.clone();
    }
    if let Some(root) = &args.platform_root {
        config.paths.platform_root = root.clone();
    }

    let project_path = match (&args.project, &config.paths.project_file) {
        (Some(path), _) => path.clone(),
        (None, Some(path)) => config.paths.resolve(path),
        (None, None) => find_project_file(&config.paths.resolved_platform_root())?,
    };
    info!(project = %project_path.display(), "using project file");

    let repo = JsonProjectRepository::new();
    let original = LocalFs::new()
        .read(&project_path)
        .with_context(|| format!("failed to read {}", project_path.display()))?;
    let mut graph = repo.load(&project_path)?;

    if args.dry_run {
        let use_case = GenerateUseCase::new(DryRunFs::new(LocalFs::new()));
        let result = use_case.execute(&config, &mut graph)?;
        let rendered = render_project(&graph)?;
        let diff = unified_diff(&project_path, &original, &rendered);
        let fs = use_case.into_file_system();
        let files: Vec<PathBuf> = fs.pending_files().into_keys().collect();

        if json {
            print_json(&json!({
                "project": project_path,
                "dry_run": true,
                "result": result,
                "files": files,
                "diff": diff,
            }))?;
        } else {
            print!("{}", diff);
            for file in &files {
                println!("would write {}", file.display());
            }
            print_summary(&project_path, &result, true);
        }
        return Ok(());
    }

    let result = GenerateUseCase::new(LocalFs::new()).execute(&config, &mut graph)?;
    if result.has_changes() {
        repo.save(&project_path, &graph)?;
    }

    if json {
        print_json(&json!({
            "project": project_path,
            "dry_run": false,
            "result": result,
        }))?;
    } else {
        print_summary(&project_path, &result, false);
    }
    Ok(())
}

fn unified_diff(path: &Path, old: &str, new: &str) -> String {
    let path = path.display().to_string();
    TextDiff::from_lines(old, new)
        .unified_diff()
        .header(&format!("a/{}", path), &format!("b/{}", path))
        .to_string()
}

fn print_summary(project: &Path, result: &GenerateResult, dry_run: bool) {
    for pass in &result.passes {
        if pass.skipped {
            println!("= {} already present ({})", pass.target_name, pass.target);
        } else {
            println!(
                "+ {} ({}) {}",
                pass.target_name, pass.bundle_identifier, pass.target
            );
        }
    }
    for warning in result.all_warnings() {
        match &warning.target {
            Some(target) => println!("warning: {}: {}", target, warning.message),
            None => println!("warning: {}", warning.message),
        }
    }
    let verb = if dry_run { "would update" } else { "updated" };
    if result.has_changes() {
        println!(
            "{} {} ({} records added)",
            verb,
            project.display(),
            result.records_added
        );
    } else {
        println!("{} is up to date", project.display());
    }
}
