//! Splicing the rendered catalog into README.md.

use crate::discovery::collect_workflows;
use crate::error::ReadmeError;
use crate::render::render_workflow_section;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const README_FILE: &str = "README.md";
pub const WORKFLOWS_START: &str = "<!-- WORKFLOWS_START -->";
pub const WORKFLOWS_END: &str = "<!-- WORKFLOWS_END -->";
pub const TIMESTAMP_PLACEHOLDER: &str = "*Last updated: [Auto-generated timestamp will go here]*";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

static WORKFLOWS_REGION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "(?s)({})(.*?)({})",
        regex::escape(WORKFLOWS_START),
        regex::escape(WORKFLOWS_END)
    ))
    .expect("workflow region pattern is valid")
});

static GENERATED_TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*Last updated: \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} UTC\*")
        .expect("timestamp pattern is valid")
});

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegenerateSummary {
    pub readme: PathBuf,
    pub workflows: usize,
}

/// Replace every marker-delimited region with `section`, keeping the markers.
///
/// Returns `None` when the README has no complete marker pair.
pub fn splice_workflow_section(content: &str, section: &str) -> Option<String> {
    if !WORKFLOWS_REGION.is_match(content) {
        return None;
    }

    let spliced = WORKFLOWS_REGION.replace_all(content, |caps: &Captures| {
        format!("{}\n{}{}", &caps[1], section, &caps[3])
    });
    Some(spliced.into_owned())
}

/// Fill in the timestamp placeholder, or refresh a previously generated stamp.
pub fn stamp_last_updated(content: &str, now: DateTime<Utc>) -> String {
    let stamp = format!("*Last updated: {}*", now.format(TIMESTAMP_FORMAT));
    let content = content.replace(TIMESTAMP_PLACEHOLDER, &stamp);
    GENERATED_TIMESTAMP
        .replace_all(&content, regex::NoExpand(&stamp))
        .into_owned()
}

/// Regenerate the workflow catalog in `root/README.md`.
///
/// Logs and returns `false` on failure; the README is then left untouched.
pub fn regenerate_readme(root: &Path) -> bool {
    match try_regenerate_readme(root, Utc::now()) {
        Ok(summary) => {
            tracing::info!(
                readme = %summary.readme.display(),
                workflows = summary.workflows,
                "README.md updated successfully"
            );
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "README.md was not updated");
            false
        }
    }
}

/// Fallible core of [`regenerate_readme`] with an injectable clock.
///
/// All extraction and rendering happens before the single write.
pub fn try_regenerate_readme(
    root: &Path,
    now: DateTime<Utc>,
) -> Result<RegenerateSummary, ReadmeError> {
    let readme_path = root.join(README_FILE);

    let workflows = collect_workflows(root);
    tracing::debug!(count = workflows.len(), "Collected workflows");

    let content = fs::read_to_string(&readme_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReadmeError::ReadmeNotFound(readme_path.clone()),
        _ => ReadmeError::Io {
            path: readme_path.clone(),
            source: e,
        },
    })?;

    // Stamp first so text inside the rendered catalog is never rewritten.
    let stamped = stamp_last_updated(&content, now);
    let section = render_workflow_section(&workflows);
    let updated = splice_workflow_section(&stamped, &section)
        .ok_or_else(|| ReadmeError::MissingMarkers(readme_path.clone()))?;

    fs::write(&readme_path, updated).map_err(|e| ReadmeError::Io {
        path: readme_path.clone(),
        source: e,
    })?;

    Ok(RegenerateSummary {
        readme: readme_path,
        workflows: workflows.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn splice_replaces_region_and_keeps_markers() {
        let content = "# Title\n\n<!-- WORKFLOWS_START -->\nold stuff\n<!-- WORKFLOWS_END -->\n\nFooter\n";

        let spliced = splice_workflow_section(content, "NEW\n").unwrap();
        assert_eq!(
            spliced,
            "# Title\n\n<!-- WORKFLOWS_START -->\nNEW\n<!-- WORKFLOWS_END -->\n\nFooter\n"
        );
    }

    #[test]
    fn splice_handles_every_region() {
        let content = "<!-- WORKFLOWS_START -->a<!-- WORKFLOWS_END -->\n\
                       <!-- WORKFLOWS_START -->b<!-- WORKFLOWS_END -->";

        let spliced = splice_workflow_section(content, "X").unwrap();
        assert_eq!(
            spliced,
            "<!-- WORKFLOWS_START -->\nX<!-- WORKFLOWS_END -->\n\
             <!-- WORKFLOWS_START -->\nX<!-- WORKFLOWS_END -->"
        );
    }

    #[test]
    fn splice_does_not_expand_dollar_signs() {
        let content = "<!-- WORKFLOWS_START --><!-- WORKFLOWS_END -->";

        let spliced = splice_workflow_section(content, "costs $1 and ${2}\n").unwrap();
        assert!(spliced.contains("costs $1 and ${2}"));
    }

    #[test]
    fn splice_without_markers_is_none() {
        assert!(splice_workflow_section("# Just a title\n", "X").is_none());
        assert!(splice_workflow_section("<!-- WORKFLOWS_START --> only", "X").is_none());
    }

    #[test]
    fn stamps_placeholder_and_refreshes_previous_stamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();

        let stamped = stamp_last_updated(&format!("intro\n{}\n", TIMESTAMP_PLACEHOLDER), now);
        assert_eq!(stamped, "intro\n*Last updated: 2024-03-09 07:05:01 UTC*\n");

        let later = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let restamped = stamp_last_updated(&stamped, later);
        assert_eq!(restamped, "intro\n*Last updated: 2025-01-01 00:00:00 UTC*\n");
    }
}
