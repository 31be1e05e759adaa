mod cli;
mod draw_file;
mod run;

use anyhow::Result;
use uivert::logging::init_logging;

fn main() -> Result<()> {
    let cli = cli::parse();
    init_logging(cli.logging_config());

    run::run(&cli)
}
