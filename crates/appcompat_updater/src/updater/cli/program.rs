use crate::updater::cli::clap_cli::Cli;
use crate::updater::manifest::Manifest;
use crate::updater::progress::GLOBAL_MP;
use crate::updater::tools::runner::SystemRunner;
use crate::updater::update::Updater;
use crate::updater::utils::check_for_dependencies;
use crate::updater::utils::config::UpdaterConfig;
use crate::updater::utils::writer::MultiProgressWriter;
use anyhow::Context;
use std::io::{self, IsTerminal};
use tracing::{Level, Subscriber, info};
use tracing_subscriber::fmt::MakeWriter;

pub fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    // Escape codes only make sense when stderr is a terminal.
    let subscriber = log_subscriber(cli.log_level(), io::stderr().is_terminal(), || {
        MultiProgressWriter::new(GLOBAL_MP.clone())
    });

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")
}

fn log_subscriber<W>(level: Level, ansi: bool, make_writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(make_writer)
        .finish()
}

pub fn program(cli: Cli) -> anyhow::Result<()> {
    let work_dir = cli
        .directory
        .canonicalize()
        .with_context(|| {
            format!("Failed to open prebuilts directory {}", cli.directory.display())
        })?;
    let config = UpdaterConfig::load(cli.config.as_deref())?;

    check_for_dependencies(&config.tools, !cli.use_current_branch)?;

    info!("Updating prebuilts in {}", work_dir.display());
    let mut updater = Updater::new(SystemRunner, config.tools, Manifest::default(), work_dir);
    updater.run(&cli.update_options())?;

    info!("Updated to build {} from {}", cli.build, cli.branch);
    Ok(())
}
