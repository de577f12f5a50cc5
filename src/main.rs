//! CLI entry point for the segmentation quality-control review tool

use clap::Parser;
use visualqc::io::cli::{Cli, run};

fn main() -> visualqc::Result<()> {
    let cli = Cli::parse();
    run(cli)
}
