use crate::updater::tools::runner::ToolCommand;
use crate::updater::utils::config::ToolPaths;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// Targets with this prefix name a file on the local disk instead of a
/// build-server target. Only meant for testing the updater itself.
pub const LOCAL_PREFIX: &str = "local:";

pub fn local_source(target: &str) -> Option<&str> {
    target.strip_prefix(LOCAL_PREFIX)
}

pub fn fetch_command(
    tools: &ToolPaths,
    branch: &str,
    target: &str,
    build: &str,
    pattern: &str,
) -> ToolCommand {
    ToolCommand::new(&tools.fetch_artifact)
        .args(["--branch", branch, "--target", target, "--bid", build])
        .arg(pattern)
}

pub fn copy_local(source: &Path, dest: &Path) -> Result<()> {
    if !source.is_file() {
        bail!("Local artifact {} does not exist", source.display());
    }

    fs::copy(source, dest)
        .with_context(|| format!("Failed to copy {} to {}", source.display(), dest.display()))?;

    Ok(())
}
