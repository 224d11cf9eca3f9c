//! megalist CLI: regenerate the API Mega List from a catalog export.
//!
//! Reads the JSON catalog, drops placeholder listings, and writes the
//! categorized Markdown index plus one document per category.

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
