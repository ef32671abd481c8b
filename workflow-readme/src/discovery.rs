use crate::workflow::{extract_workflow_info, WorkflowInfo};
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectory scanned in addition to the root.
pub const WORKFLOWS_DIR: &str = "workflows";

/// `*.json` files directly in `root` and directly in `root/workflows`.
pub fn discover_workflow_files(root: &Path) -> Vec<PathBuf> {
    let mut files = json_files_in(root);
    files.extend(json_files_in(&root.join(WORKFLOWS_DIR)));
    files
}

fn json_files_in(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "Skipping unreadable directory");
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// Parse every discovered file. Files that fail are logged and left out.
pub fn collect_workflows(root: &Path) -> Vec<WorkflowInfo> {
    discover_workflow_files(root)
        .into_iter()
        .filter_map(|path| match extract_workflow_info(&path) {
            Ok(info) => Some(info),
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Error processing workflow file");
                None
            }
        })
        .collect()
}
