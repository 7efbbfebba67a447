use crate::updater::update::UpdateOptions;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::Level;

pub const DEFAULT_BRANCH: &str = "aosp-master";

/// Downloads appcompat prebuilts from the build server.
#[derive(Parser, Debug)]
#[command(name = "appcompat-updater", version)]
pub struct Cli {
    /// Branch to pull build from.
    #[arg(short = 'b', long, default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// Build number to pull.
    #[arg(long)]
    pub build: String,

    /// Perform the update in the current branch. Do not repo start.
    #[arg(long)]
    pub use_current_branch: bool,

    /// Increase output verbosity.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Prebuilts directory to update.
    #[arg(short = 'C', long, default_value = ".")]
    pub directory: PathBuf,

    /// TOML file overriding where the external tools live.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }

    pub fn update_options(&self) -> UpdateOptions {
        UpdateOptions {
            branch: self.branch.clone(),
            build: self.build.clone(),
            use_current_branch: self.use_current_branch,
        }
    }
}
