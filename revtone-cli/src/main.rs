//! revtone command-line entry point

use clap::Parser;
use revtone_cli::commands::Commands;

/// Score the sentiment of product reviews
#[derive(Debug, Parser)]
#[command(name = "revtone", version, about, long_about = None)]
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
