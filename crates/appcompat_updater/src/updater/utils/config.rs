use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const FETCH_ARTIFACT_PATH: &str = "/google/data/ro/projects/android/fetch_artifact";

/// Locations of the external programs the updater drives. Bare names are
/// resolved through `PATH`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToolPaths {
    pub fetch_artifact: String,
    pub repo: String,
    pub git: String,
    pub rm: String,
    pub unzip: String,
    pub strip: String,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            fetch_artifact: FETCH_ARTIFACT_PATH.to_string(),
            repo: "repo".to_string(),
            git: "git".to_string(),
            rm: "rm".to_string(),
            unzip: "unzip".to_string(),
            strip: "strip".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdaterConfig {
    pub tools: ToolPaths,
}

impl UpdaterConfig {
    /// Built-in defaults unless a config file is given, which then must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_config_means_defaults() {
        let config = UpdaterConfig::load(None).unwrap();
        assert_eq!(config.tools, ToolPaths::default());
        assert_eq!(config.tools.fetch_artifact, FETCH_ARTIFACT_PATH);
    }

    #[test]
    fn partial_tools_table_overrides_named_keys() {
        let config = UpdaterConfig::from_toml(
            r#"
            [tools]
            strip = "/opt/toolchain/bin/llvm-strip"
            fetch_artifact = "fetch_artifact"
            "#,
        )
        .unwrap();

        assert_eq!(config.tools.strip, "/opt/toolchain/bin/llvm-strip");
        assert_eq!(config.tools.fetch_artifact, "fetch_artifact");
        assert_eq!(config.tools.git, "git");
        assert_eq!(config.tools.unzip, "unzip");
    }

    #[test]
    fn load_reads_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("updater.toml");
        fs::write(&path, "[tools]\nrepo = \"/usr/local/bin/repo\"\n").unwrap();

        let config = UpdaterConfig::load(Some(&path)).unwrap();

        assert_eq!(config.tools.repo, "/usr/local/bin/repo");
    }

    #[test]
    fn load_fails_on_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = UpdaterConfig::load(Some(&tmp.path().join("missing.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn unknown_value_types_are_rejected() {
        assert!(UpdaterConfig::from_toml("[tools]\ngit = 3\n").is_err());
    }
}
