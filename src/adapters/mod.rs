#[cfg(feature = "cli")]
pub mod cli;
pub mod teos10;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
fn init_logging(verbose: u8) {
    use std::io::IsTerminal;
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // try_init: a subscriber may already be installed when embedded.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, CalculationOutput, parse_measurements, read_document};
    use crate::salinity::calculator::{calculate_salinity, summarize};

    let args = Args::parse();
    init_logging(args.verbose);

    let doc = read_document(&args)?;
    let set = parse_measurements(&doc)?;
    tracing::info!(count = set.len(), input = %args.input, "read measurements");

    let out = if args.summary {
        CalculationOutput::Summary(summarize(&set)?)
    } else {
        CalculationOutput::Values(calculate_salinity(&set)?)
    };

    crate::adapters::cli::print_output(&out, &args)?;

    Ok(())
}
