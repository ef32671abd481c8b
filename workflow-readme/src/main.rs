use anyhow::Context;
use chrono::Utc;
use tracing_subscriber::EnvFilter;
use workflow_readme::try_regenerate_readme;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let root = std::env::current_dir().context("Failed to determine the current directory")?;

    let summary = try_regenerate_readme(&root, Utc::now())
        .with_context(|| format!("Failed to update README in {}", root.display()))?;

    tracing::info!(
        workflows = summary.workflows,
        "README.md updated successfully! Found {} workflows.",
        summary.workflows
    );

    Ok(())
}
