//! CLI entry point for the MathMatix maintenance tools

use clap::Parser;
use mathmatix_tools::io::cli::{Cli, ToolRunner};
use mathmatix_tools::io::logging;

fn main() -> mathmatix_tools::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.quiet);
    ToolRunner::new(cli).run()
}
