//! Markdown rendering of the workflow catalog.

use crate::workflow::WorkflowInfo;
use std::fmt::Write;

pub const NO_WORKFLOWS_PLACEHOLDER: &str =
    "*No workflows have been added yet. Check back soon for automation workflows!*";

const NO_DESCRIPTION: &str = "*No description provided*";
const ACTIVE_STATUS: &str = "✅ Active";
const INACTIVE_STATUS: &str = "⏸️ Inactive";

/// Render the block placed between the README markers.
///
/// Workflows are ordered case-insensitively by name, then by filename, so the
/// output only changes when the inputs do.
pub fn render_workflow_section(workflows: &[WorkflowInfo]) -> String {
    if workflows.is_empty() {
        return format!("{}\n\n", NO_WORKFLOWS_PLACEHOLDER);
    }

    let mut sorted: Vec<&WorkflowInfo> = workflows.iter().collect();
    sorted.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.filename.cmp(&b.filename))
    });

    let mut section = String::new();
    for workflow in sorted {
        render_workflow(&mut section, workflow);
    }
    section
}

fn render_workflow(out: &mut String, workflow: &WorkflowInfo) {
    // Writing into a String cannot fail.
    let _ = write!(out, "### {}\n\n", workflow.name);
    let _ = write!(out, "**File:** `{}`\n\n", workflow.filename);
    let _ = write!(
        out,
        "**Description:** {}\n\n",
        workflow.description.as_deref().unwrap_or(NO_DESCRIPTION)
    );

    if !workflow.node_types.is_empty() {
        let _ = write!(
            out,
            "**Key Integrations:** {}\n\n",
            workflow.node_types.join(", ")
        );
    }

    let status = if workflow.active {
        ACTIVE_STATUS
    } else {
        INACTIVE_STATUS
    };
    let _ = write!(out, "**Status:** {}\n\n", status);
    out.push_str("---\n\n");
}
