//! Command-line interface for slabikar Czech syllable segmentation

use clap::Parser;
use slabikar_cli::commands::Commands;

/// Czech syllable segmentation for reading practice
#[derive(Debug, Parser)]
#[command(name = "slabikar", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
