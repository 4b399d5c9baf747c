//! Command-line interface for geowkt
//! This binary parses WKT geometry text and renders tokens or shapes in different formats.
//!
//! Usage:
//!   wkt process `<path>` `<format>`      - Process a file and output to stdout
//!   wkt parse `<text>` [--format `<f>`]  - Parse WKT given on the command line (`-` reads stdin)
//!   wkt formats                       - List all available formats
//!
//! Global options: `--config <file>` layers a TOML file over the built-in defaults,
//! `--verbose` turns on debug logging (otherwise `RUST_LOG` or the configured filter).

use clap::{Arg, ArgAction, ArgMatches, Command};
use geowkt::wkt::config::{Loader, WktConfig};
use geowkt::wkt::processor::{
    available_formats, process_file, process_text, ProcessingError, ProcessingSpec,
};
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("wkt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and inspecting WKT geometry")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a TOML configuration file")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging on stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("process")
                .about("Process a WKT file and output to stdout")
                .arg(
                    Arg::new("path")
                        .help("Path to the WKT file to process")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .help("Output format (e.g., shape-wkt, token-json)")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse WKT text given as an argument")
                .arg(
                    Arg::new("text")
                        .help("WKT text to parse, or - to read stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (defaults to output.default_format)"),
                ),
        )
        .subcommand(Command::new("formats").about("List all available output formats"))
        .try_get_matches()
        .unwrap_or_else(|e| e.exit());

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    init_tracing(matches.get_flag("verbose"), &config);

    let result = match matches.subcommand() {
        Some(("process", process_matches)) => {
            let path = required(process_matches, "path");
            let format_str = required(process_matches, "format");
            handle_process_command(path, format_str, &config)
        }
        Some(("parse", parse_matches)) => {
            let text = required(parse_matches, "text");
            let format_str = parse_matches
                .get_one::<String>("format")
                .map(String::as_str)
                .unwrap_or(&config.output.default_format);
            handle_parse_command(text, format_str, &config)
        }
        Some(("formats", _)) => {
            handle_formats_command();
            Ok(())
        }
        _ => unreachable!("clap requires a subcommand"),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .unwrap_or_default()
}

fn load_config(matches: &ArgMatches) -> Result<WktConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader.build()
}

/// Log to stderr so stdout carries only command output
fn init_tracing(verbose: bool, config: &WktConfig) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.filter))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn emit(output: &str) {
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}

/// Handle the process command
fn handle_process_command(
    path: &str,
    format_str: &str,
    config: &WktConfig,
) -> Result<(), ProcessingError> {
    let spec = ProcessingSpec::from_string(format_str)?;
    let output = process_file(path, &spec, config)?;
    emit(&output);
    Ok(())
}

/// Handle the parse command
fn handle_parse_command(
    text: &str,
    format_str: &str,
    config: &WktConfig,
) -> Result<(), ProcessingError> {
    let spec = ProcessingSpec::from_string(format_str)?;
    let output = if text == "-" {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .map_err(|e| ProcessingError::IoError(e.to_string()))?;
        process_text(&input, &spec, config)?
    } else {
        process_text(text, &spec, config)?
    };
    emit(&output);
    Ok(())
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Available formats:");
    for format in available_formats() {
        println!("  {}", format);
    }
}
