use crate::updater::utils::config::ToolPaths;
use anyhow::{Result, bail};
use tracing::debug;
use which::which;

pub mod config;
pub mod writer;

/// Checks that every external program the run will invoke can be found,
/// before anything in the tree is touched.
///
/// * `tools`: where each program is expected to live.
/// * `create_branch`: whether `repo` will be needed.
pub fn check_for_dependencies(tools: &ToolPaths, create_branch: bool) -> Result<()> {
    let mut required = vec![
        &tools.fetch_artifact,
        &tools.git,
        &tools.rm,
        &tools.unzip,
        &tools.strip,
    ];
    if create_branch {
        required.insert(0, &tools.repo);
    }

    let mut missing = Vec::new();
    for tool in required {
        match which(tool) {
            Ok(path) => debug!("Found {} at {}", tool, path.display()),
            Err(_) => missing.push(tool.as_str()),
        }
    }

    if !missing.is_empty() {
        bail!("Missing required tools: {}", missing.join(", "));
    }

    Ok(())
}
