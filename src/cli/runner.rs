use tracing::info;
use tracing_subscriber::EnvFilter;

use card_extractor::{ExtractParams, extract_cards};

use super::args::CliArgs;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let params = ExtractParams::default();
    info!("Extracting {:?} into {:?}", params.sheet, params.output_dir);

    let mut stdout = std::io::stdout().lock();
    let report = extract_cards(&params, &mut stdout)?;
    report.write_summary(&mut stdout)?;

    info!("Wrote {} files to {:?}", report.total(), report.output_dir);
    Ok(())
}
