//! `wh`: manage a warehouse inventory from the terminal.

mod cli;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
