//! pitchdeck CLI — browse game pitch content from the terminal.
//!
//! Reads the game catalog and per-game markdown tree, then prints metadata,
//! parsed pitch sections, and design documents.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
