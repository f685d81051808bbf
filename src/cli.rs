//! Command-line argument parsing.

use std::io;
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
#[derive(Debug, Default, PartialEq)]
pub struct CliArgs {
    pub request_path: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub json: bool,
    /// `Some(true)` forces the summary backend on, `Some(false)` off
    pub summary: Option<bool>,
    pub log_json: bool,
    pub verbose: bool,
}

pub enum CliAction {
    Run(CliArgs),
    Help,
    Version,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("studyplan - turn a study timeframe and topics into a day-by-day plan");
    eprintln!();
    eprintln!("Usage: studyplan [request-file] [OPTIONS]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [request-file]     TOML or JSON file with days, hours_per_day and topics");
    eprintln!("                     If omitted, prompts for everything interactively");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --json             Print the schedule as JSON instead of text");
    eprintln!("  --config <PATH>    Use this config file instead of studyplan.toml");
    eprintln!("  --summary          Ask the summary backend for narrative text");
    eprintln!("  --no-summary       Never call the summary backend");
    eprintln!("  --log-json         Emit logs as JSON");
    eprintln!("  -v, --verbose      Debug logging");
    eprintln!("  -h, --help         Show this help message");
    eprintln!("  -V, --version      Show version");
}

/// Parse arguments (without the program name)
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> io::Result<CliAction> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliAction::Help),
            "-V" | "--version" => return Ok(CliAction::Version),
            "--json" => parsed.json = true,
            "--summary" => parsed.summary = Some(true),
            "--no-summary" => parsed.summary = Some(false),
            "--log-json" => parsed.log_json = true,
            "-v" | "--verbose" => parsed.verbose = true,
            "--config" => {
                let value = args.next().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "Missing value for --config")
                })?;
                parsed.config_path = Some(PathBuf::from(value));
            }
            other if other.starts_with('-') => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Unknown option: {}", other),
                ));
            }
            other => {
                if parsed.request_path.is_some() {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("Unexpected extra argument: {}", other),
                    ));
                }
                parsed.request_path = Some(PathBuf::from(other));
            }
        }
    }

    Ok(CliAction::Run(parsed))
}
