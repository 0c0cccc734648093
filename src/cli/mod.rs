//! Command Line Interface (CLI) layer.
//!
//! `args` holds the clap definition and `runner` wires logging and the
//! extraction run together. Embedders should call `card_extractor::extract_cards`
//! directly instead.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
