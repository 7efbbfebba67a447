use crate::updater::manifest::{InstallEntry, Manifest, REPO_PROP, REPO_PROP_TARGET};
use crate::updater::progress::create_spinner;
use crate::updater::tools::runner::{CommandRunner, ToolCommand};
use crate::updater::tools::{archive, fetch, vcs};
use crate::updater::utils::config::ToolPaths;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOptions {
    pub branch: String,
    pub build: String,
    pub use_current_branch: bool,
}

/// Replaces the prebuilts in `work_dir` with the ones from a given build.
///
/// Every step is a blocking call to an external tool through `R`, and each
/// depends on the previous one having finished: old files go before new ones
/// arrive, and a file is fetched before it is stripped, moved or unpacked.
pub struct Updater<R: CommandRunner> {
    runner: R,
    tools: ToolPaths,
    manifest: Manifest,
    work_dir: PathBuf,
}

impl<R: CommandRunner> Updater<R> {
    pub fn new(
        runner: R,
        tools: ToolPaths,
        manifest: Manifest,
        work_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            runner,
            tools,
            manifest,
            work_dir: work_dir.into(),
        }
    }

    #[cfg(test)]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn list_installed_files(&self) -> Vec<&'static str> {
        self.manifest.list_installed_files()
    }

    pub fn run(&mut self, options: &UpdateOptions) -> Result<()> {
        let UpdateOptions {
            branch,
            build,
            use_current_branch,
        } = options;

        if !use_current_branch {
            self.start_branch(Some(build.as_str()))?;
        }
        self.remove_old_files()?;
        self.install_new_files(branch, build)?;

        let paths = self.manifest.commit_paths();
        self.commit(branch, build, &paths)
    }

    pub fn start_branch(&mut self, build: Option<&str>) -> Result<()> {
        let branch_name = vcs::branch_name(build);
        info!("Creating branch {}", branch_name);

        let spinner = create_spinner(format!("Creating branch {branch_name}..."));
        self.call(&vcs::repo_start(&self.tools, &branch_name))
            .with_context(|| format!("Failed to create branch {branch_name}"))?;
        spinner.finish_with_message(format!("Created branch {branch_name}"));

        Ok(())
    }

    pub fn remove_old_files(&mut self) -> Result<()> {
        let old_files = self.list_installed_files();
        if old_files.is_empty() {
            return Ok(());
        }

        info!("Removing old files {:?}", old_files);
        let spinner = create_spinner("Removing old prebuilts...");

        self.call(&vcs::git_rm(&self.tools, old_files.iter().copied()))
            .context("Failed to remove old files from git")?;
        // git leaves directories behind when they hold untracked files.
        self.call(&vcs::rm_rf(&self.tools, old_files.iter().copied()))
            .context("Failed to delete old files")?;

        spinner.finish_with_message("Removed old prebuilts");
        Ok(())
    }

    pub fn fetch_artifact(
        &mut self,
        branch: &str,
        build: &str,
        target: &str,
        pattern: &str,
    ) -> Result<()> {
        info!(
            "Fetching {} from {} {} (artifacts matching {})",
            build, target, branch, pattern
        );

        if let Some(source) = fetch::local_source(target) {
            return fetch::copy_local(&self.work_dir.join(source), &self.work_dir.join(pattern));
        }

        self.call(&fetch::fetch_command(&self.tools, branch, target, build, pattern))
    }

    pub fn install_new_files(&mut self, branch: &str, build: &str) -> Result<()> {
        let manifest = self.manifest;

        for entry in manifest.install_list {
            self.install_entry(branch, build, entry)?;
        }
        self.install_repo_prop(branch, build)?;

        for entry in manifest.extracted_list {
            if !self.work_dir.join(entry.name).exists() {
                warn!("{} was not produced by any installed archive", entry.name);
            }
        }

        for entry in manifest.extracted_list.iter().filter(|entry| entry.need_strip) {
            self.strip(entry.name)?;
        }

        Ok(())
    }

    pub fn install_entry(&mut self, branch: &str, build: &str, entry: &InstallEntry) -> Result<()> {
        let spinner = create_spinner(format!("Installing {}...", entry.install_path));

        self.fetch_artifact(branch, build, entry.target, entry.name)
            .with_context(|| format!("Failed to fetch {} from {}", entry.name, entry.target))?;

        if entry.need_strip {
            self.strip(entry.name)?;
        }

        let install_path = Path::new(entry.install_path);
        if let Some(dir) = install_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            let dir = self.work_dir.join(dir);
            if !dir.is_dir() {
                fs::create_dir_all(&dir)
                    .with_context(|| format!("Failed to create directory {}", dir.display()))?;
            }
        }

        fs::rename(self.work_dir.join(entry.name), self.work_dir.join(install_path))
            .with_context(|| format!("Failed to move {} to {}", entry.name, entry.install_path))?;

        if entry.need_unzip {
            self.unzip(entry.install_path)?;
        }

        spinner.finish_with_message(format!("Installed {}", entry.install_path));
        Ok(())
    }

    /// Fetches the `repo.prop` recording the source revisions of the build.
    pub fn install_repo_prop(&mut self, branch: &str, build: &str) -> Result<()> {
        self.fetch_artifact(branch, build, REPO_PROP_TARGET, REPO_PROP)
            .with_context(|| format!("Failed to fetch {REPO_PROP}"))
    }

    pub fn commit(&mut self, branch: &str, build: &str, paths: &[&str]) -> Result<()> {
        info!("Making commit");
        let spinner = create_spinner("Committing prebuilts...");

        self.call(&vcs::git_add(&self.tools, paths.iter().copied()))
            .context("Failed to stage prebuilts")?;
        self.call(&vcs::git_commit(&self.tools, &vcs::commit_message(branch, build)))
            .context("Failed to commit prebuilts")?;

        spinner.finish_with_message(format!("Committed build {build}"));
        Ok(())
    }

    fn strip(&mut self, path: &str) -> Result<()> {
        self.call(&archive::strip_command(&self.tools, path))
            .with_context(|| format!("Failed to strip {path}"))
    }

    fn unzip(&mut self, zip_path: &str) -> Result<()> {
        match archive::archive_entries(&self.work_dir.join(zip_path)) {
            Ok(entries) => debug!("{} contains {:?}", zip_path, entries),
            Err(err) => warn!("Could not inspect {}: {:#}", zip_path, err),
        }

        self.call(&archive::unzip_command(&self.tools, zip_path))
            .with_context(|| format!("Failed to unzip {zip_path}"))
    }

    fn call(&mut self, command: &ToolCommand) -> Result<()> {
        self.runner.run(command, &self.work_dir)
    }
}
