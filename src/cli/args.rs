use clap::Parser;

/// Reads `UnoCards.png` and `Draw4.png` from the working directory and writes the
/// individual cards to `cards/`.
#[derive(Parser)]
#[command(name = "card-extractor", version, about = "Slice a card sprite sheet into PNG files")]
pub struct CliArgs {
    /// Enable logging to stderr (filter with RUST_LOG)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
