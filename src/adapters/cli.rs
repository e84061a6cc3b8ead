use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};

use crate::error::AppError;
use crate::models::{MeasurementSet, SalinityResult, SalinitySummary};

#[derive(Parser, Debug)]
#[command(author, version, about = "Practical salinity (PSS-78) from conductivity, temperature and pressure", long_about = None)]
pub struct Args {
    #[arg(
        long,
        value_name = "FILE",
        default_value = "-",
        help = "JSON document with a 'measurements' array; '-' reads from stdin"
    )]
    pub input: String,
    #[arg(long, help = "Pretty-print the JSON output")]
    pub pretty: bool,
    #[arg(
        long,
        help = "Emit {sp, sr, pressure_dbar} objects instead of bare salinity values"
    )]
    pub summary: bool,
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn read_document(args: &Args) -> Result<String, AppError> {
    if args.input == "-" {
        let mut s = String::new();
        io::stdin()
            .read_to_string(&mut s)
            .map_err(|source| AppError::ReadStdin { source })?;
        Ok(s)
    } else {
        fs::read_to_string(&args.input).map_err(|source| AppError::ReadFile {
            path: args.input.clone(),
            source,
        })
    }
}

pub fn parse_measurements(doc: &str) -> Result<MeasurementSet, AppError> {
    Ok(MeasurementSet::from_json_str(doc)?)
}

pub enum CalculationOutput {
    Values(SalinityResult),
    Summary(Vec<SalinitySummary>),
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, AppError> {
    let s = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    s.map_err(|source| AppError::SerializeOutput { source })
}

pub fn print_output(out: &CalculationOutput, args: &Args) -> Result<(), AppError> {
    let s = match out {
        CalculationOutput::Values(v) => to_json(v, args.pretty)?,
        CalculationOutput::Summary(v) => to_json(v, args.pretty)?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", s)
        .and_then(|_| stdout.flush())
        .map_err(|source| AppError::WriteOutput { source })
}
