mod updater;

use clap::Parser;
use updater::cli::clap_cli::Cli;
use updater::cli::program;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    program::init_logging(&cli)?;

    program::program(cli)
}
