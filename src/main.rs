//! CLI entry point for the grid puzzle solver

use clap::Parser;
use hoopgrid::io::cli::{Cli, GridProcessor};

fn main() -> hoopgrid::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format_timestamp(None)
        .init();
    let mut processor = GridProcessor::new(cli);
    processor.process()
}
