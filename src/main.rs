use anyhow::Result;
use clap::Parser;
use bankroll::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
