use std::path::Path;

use anyhow::Result;
use extgen::JsonProjectRepository;
use serde_json::json;

use super::print_json;

pub fn cmd_check(project: &Path, json: bool) -> Result<()> {
    let graph = JsonProjectRepository::new().load(project)?;
    let dangling = graph.dangling_references();

    if json {
        let items: Vec<_> = dangling
            .iter()
            .map(|r| {
                json!({
                    "owner": r.owner,
                    "field": r.field,
                    "id": r.id,
                    "expected": r.expected,
                })
            })
            .collect();
        print_json(&json!({
            "project": project,
            "records": graph.len(),
            "dangling": items,
        }))?;
    } else if dangling.is_empty() {
        println!(
            "{}: {} records, all references resolve",
            project.display(),
            graph.len()
        );
    } else {
        for r in &dangling {
            println!(
                "{}.{} -> {} (expected a {})",
                r.owner, r.field, r.id, r.expected
            );
        }
    }

    if !dangling.is_empty() {
        anyhow::bail!(
            "{} dangling reference(s) in {}",
            dangling.len(),
            project.display()
        );
    }
    Ok(())
}
