//! Datefield CLI - Command-line interface for the field transformer
//!
//! This is the main entry point for the Datefield CLI application, providing
//! commands for splitting instants into form fields, joining submitted
//! fields back into instants, and managing configuration.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands, OutputFormat};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Run the application
    let result = run(cli);

    // Handle the result
    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", error::format_error(&e, control::SHOULD_COLORIZE.should_colorize()));

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<()> {
    let config = Config::load_with_file(cli.config.as_deref())?;

    let use_color = cli.use_color() && config.output.color;
    control::set_override(use_color);

    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let format = output_format(&cli, &config);
    let mut output = OutputWriter::new(format, use_color, cli.quiet);

    execute(cli, &config, &mut output)
}

/// Dispatch the subcommand inside a timed span
#[instrument(skip_all, fields(command = ?cli.command))]
fn execute(cli: Cli, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let timer = Timer::with_details("cli_execution", cli.command.name());
    let _entered = timer.span().enter();

    tracing::info!(
        config_file = ?config.source,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    match cli.command {
        Commands::Split(args) => handlers::handle_split(args, config, output),
        Commands::Join(args) => handlers::handle_join(args, config, output),
        Commands::Config(args) => handlers::handle_config(args, config, output),
        Commands::Completions(args) => handlers::handle_completions(args, output),
    }
}

/// The -o flag wins over the configured output format
fn output_format(cli: &Cli, config: &Config) -> OutputFormat {
    cli.output.unwrap_or(config.output.format)
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let mut logging_config = LoggingConfig::resolve(cli.verbosity_level(), &config.logging);

    // Apply environment overrides
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
    }
    logging_config.color = !cli.no_color && config.output.color;

    logging::init_logging(logging_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["datefield", "-vv", "split", "--now"]);
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::parse_from(["datefield", "--quiet", "join", "year=2024"]);
        assert_eq!(cli.verbosity_level(), 0);
    }

    #[test]
    fn test_output_flag_overrides_config() {
        let mut config = Config::default();
        config.output.format = OutputFormat::Yaml;

        let cli = Cli::parse_from(["datefield", "split"]);
        assert_eq!(output_format(&cli, &config), OutputFormat::Yaml);

        let cli = Cli::parse_from(["datefield", "-o", "json", "split"]);
        assert_eq!(output_format(&cli, &config), OutputFormat::Json);
    }
}
