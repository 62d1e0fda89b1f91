//! Assertions over project graphs.

use std::path::Path;

use extgen::domain::entities::ProjectGraph;

/// Fail with every dangling reference listed
pub fn assert_no_dangling(graph: &ProjectGraph) {
    let dangling = graph.dangling_references();
    assert!(
        dangling.is_empty(),
        "dangling references:\n{}",
        dangling
            .iter()
            .map(|r| format!("  {}.{} -> {} ({})", r.owner, r.field, r.id, r.expected))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Relative paths of every file under `root`, sorted
pub fn list_all_files(root: &Path) -> Vec<String> {
    fn walk(dir: &Path, root: &Path, out: &mut Vec<String>) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                walk(&path, root, out);
            } else if let Ok(rel) = path.strip_prefix(root) {
                out.push(rel.display().to_string());
            }
        }
    }
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}
