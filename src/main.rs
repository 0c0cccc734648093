//! card-extractor CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the extraction and exit
//! with a non-zero status on failure. For programmatic use, prefer the library
//! API (`card_extractor::extract_cards`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
