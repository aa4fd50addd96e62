//! fileops - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use fileops::{
    cli::{execute, Args},
    config::{default_config_path, validate_config, Config},
    error::{exit_codes, Error, Result},
    output::{print_error, print_warning, set_color},
};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            let code = match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    exit_codes::CONFIG_ERROR
                }
                Error::InvalidName { .. } => exit_codes::INVALID_NAME,
                Error::DestinationExists(_) => exit_codes::DESTINATION_EXISTS,
                Error::NamesExhausted { .. } => exit_codes::NAMES_EXHAUSTED,
                Error::Io(_) | Error::NotFound(_) | Error::NotAFile(_) => exit_codes::IO_ERROR,
                _ => exit_codes::UNEXPECTED_ERROR,
            };
            ExitCode::from(code as u8)
        }
    }
}

fn run() -> Result<i32> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = load_config(&args)?;
    args.merge_into_config(&mut config);
    validate_config(&config)?;
    set_color(config.output.color);

    execute(args.command, &config)
}

/// Load the configuration file, creating a default one on first use.
fn load_config(args: &Args) -> Result<Config> {
    match &args.config {
        // An explicitly requested file must exist.
        Some(path) => Config::load(path),
        None => match default_config_path() {
            Some(path) if path.exists() => Config::load(&path),
            Some(path) => Config::load_or_create(&path).or_else(|e| {
                print_warning(&format!(
                    "Could not write default configuration to {}: {}",
                    path.display(),
                    e
                ));
                Ok(Config::default())
            }),
            None => {
                print_warning("Could not determine the configuration directory, using defaults");
                Ok(Config::default())
            }
        },
    }
}
