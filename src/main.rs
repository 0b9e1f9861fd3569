//! workflow-helpers CLI Entry Point
//!
//! Runs one helper on an input document and prints the JSON result, so a
//! workflow step can call the helpers as an external command.
//!
//! # Usage
//!
//! ```bash
//! # Aggregate an input record
//! workflow-helpers workflow_helper input.json
//!
//! # Read the input from stdin
//! echo '{"user": "Sam"}' | workflow-helpers workflow_helper
//!
//! # Named processor
//! workflow-helpers process data.yaml --name ingest
//!
//! # Pretty-printed output
//! workflow-helpers process_data items.json --pretty
//! ```

use std::env;
use std::io::{self, Read};
use std::process::ExitCode;

use colored::Colorize;
use log::{debug, info};

use workflow_helpers::host::{invoke, load_input, parse_input, HelperFunction};
use workflow_helpers::{HelperError, APP_NAME, VERSION};

/// Input path meaning "read from stdin".
const STDIN_MARKER: &str = "-";

/// Command-line configuration parsed from arguments.
#[derive(Debug, Default)]
struct Config {
    function: Option<String>,
    input_path: Option<String>,
    processor_name: Option<String>,
    pretty: bool,
    verbose: bool,
}

/// Configures the logging system with appropriate formatting.
///
/// Logs go to stderr so stdout carries only the JSON result.
fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            use std::io::Write;

            match record.level() {
                log::Level::Warn | log::Level::Error => {
                    writeln!(buf, "[{}] {}", record.level(), record.args())
                }
                _ => writeln!(buf, "{}", record.args()),
            }
        })
        .init();
}

/// Prints usage information.
fn print_usage() {
    println!("Usage: workflow-helpers [OPTIONS] <FUNCTION> [INPUT_FILE]");
    println!();
    println!("Arguments:");
    println!("  <FUNCTION>     workflow_helper, greet, process_data, calculate_sum, process");
    println!("  [INPUT_FILE]   JSON or YAML input document (default: stdin, or '-')");
    println!();
    println!("Options:");
    println!("  --name NAME    Processor name (required for 'process')");
    println!("  --pretty       Pretty-print the JSON result");
    println!("  --verbose      Enable debug logging");
    println!("  --help         Show this help message");
    println!("  --version      Show version information");
    println!();
    println!("Examples:");
    println!("  workflow-helpers workflow_helper input.json");
    println!("  workflow-helpers process data.yaml --name ingest --pretty");
}

/// Parses command-line arguments into a Config struct.
fn parse_arguments(args: &[String]) -> Result<Config, String> {
    let mut config = Config::default();
    let mut positional_index = 0;
    let mut i = 1; // Skip program name

    while i < args.len() {
        let arg = &args[i];

        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            "--version" | "-V" => {
                println!("{} {}", APP_NAME, VERSION);
                std::process::exit(0);
            }
            "--pretty" => {
                config.pretty = true;
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--name" => {
                i += 1;
                if i >= args.len() {
                    return Err("--name requires a value".to_string());
                }
                config.processor_name = Some(args[i].clone());
            }
            arg if arg.starts_with('-') && arg != STDIN_MARKER => {
                return Err(format!("Unknown option: {}", arg));
            }
            _ => {
                match positional_index {
                    0 => config.function = Some(arg.clone()),
                    1 => config.input_path = Some(arg.clone()),
                    _ => return Err(format!("Unexpected argument: {}", arg)),
                }
                positional_index += 1;
            }
        }
        i += 1;
    }

    if config.function.is_none() {
        return Err("Missing helper function name".to_string());
    }

    Ok(config)
}

/// Reads the input document from a file or stdin.
fn read_input(path: Option<&str>) -> Result<serde_json::Value, HelperError> {
    match path {
        Some(path) if path != STDIN_MARKER => load_input(path),
        _ => {
            debug!("Reading input from stdin");
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .map_err(|source| HelperError::Io {
                    path: STDIN_MARKER.into(),
                    source,
                })?;
            parse_input(&content)
        }
    }
}

/// Runs the configured helper and prints its JSON result.
fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    debug!("{:?}", config);

    let function = HelperFunction::resolve(
        config.function.as_deref().unwrap_or_default(),
        config.processor_name.as_deref(),
    )?;

    let input = read_input(config.input_path.as_deref())?;
    let result = invoke(&function, &input)?;
    info!("Helper '{}' completed", function);

    let output = if config.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", output);

    Ok(())
}

fn print_error(message: &dyn std::fmt::Display) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let config = match parse_arguments(&args) {
        Ok(config) => config,
        Err(e) => {
            print_error(&e);
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    setup_logging(config.verbose);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}
