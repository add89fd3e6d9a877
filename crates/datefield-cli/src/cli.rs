//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Args, Parser, Subcommand, ValueEnum};
use datefield_core::{FieldName, TransformerConfig};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Datefield CLI - Split zoned datetimes into form fields and join them back
///
/// Renders an instant as the year/month/day/hour/minute/second fields a form
/// shows, converting into a display timezone, and validates submitted fields
/// back into an instant.
#[derive(Parser, Debug)]
#[command(
    name = "datefield",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "DATEFIELD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results (defaults to the configured format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split an instant into form fields
    Split(SplitArgs),

    /// Join submitted form fields into an instant
    Join(JoinArgs),

    /// Manage configuration files and settings
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Transformer options shared by split and join
#[derive(Args, Debug, Clone, Default)]
pub struct TransformerArgs {
    /// Timezone of the stored instant
    #[arg(long = "input-tz", value_name = "TZ")]
    pub input_timezone: Option<String>,

    /// Timezone the fields are shown in
    #[arg(long = "output-tz", value_name = "TZ")]
    pub output_timezone: Option<String>,

    /// Fields to project, in order (e.g. year,month,day)
    #[arg(long, value_delimiter = ',', value_name = "FIELDS")]
    pub fields: Option<Vec<FieldName>>,

    /// Zero-pad field values
    #[arg(long)]
    pub pad: bool,

    /// Do not zero-pad field values
    #[arg(long, conflicts_with = "pad")]
    pub no_pad: bool,

    /// Reject submissions with missing or empty fields
    #[arg(long)]
    pub strict: bool,

    /// Fill missing fields from defaults
    #[arg(long, conflicts_with = "strict")]
    pub partial: bool,

    /// Override the default for a field (repeatable)
    #[arg(long = "default", value_name = "FIELD=N", value_parser = parse_default)]
    pub defaults: Vec<(FieldName, i32)>,
}

/// Arguments for the split command
#[derive(Parser, Debug)]
pub struct SplitArgs {
    /// Instant to split, e.g. 2024-03-01T15:00:00+00:00[UTC]
    #[arg(value_name = "INSTANT", conflicts_with = "now")]
    pub instant: Option<String>,

    /// Split the current time in the input timezone
    #[arg(long)]
    pub now: bool,

    #[command(flatten)]
    pub transformer: TransformerArgs,
}

/// Arguments for the join command
#[derive(Parser, Debug)]
pub struct JoinArgs {
    /// Submitted fields, e.g. year=2024 month=3 day=1
    #[arg(value_name = "FIELD=VALUE", value_parser = parse_assignment)]
    pub assignments: Vec<(FieldName, String)>,

    /// Read the submitted fields from a JSON or YAML object
    #[arg(long = "from-file", value_name = "FILE", conflicts_with = "assignments")]
    pub from_file: Option<PathBuf>,

    #[command(flatten)]
    pub transformer: TransformerArgs,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a configuration file with default values
    Init(ConfigInitArgs),

    /// Show current configuration values
    Show(ConfigShowArgs),

    /// Print the configuration file in use
    Path,
}

/// Arguments for config init
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the file (defaults to the user config directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Force overwrite existing config files
    #[arg(long)]
    pub force: bool,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable formatted output
    #[default]
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl Commands {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Split(_) => "split",
            Commands::Join(_) => "join",
            Commands::Config(_) => "config",
            Commands::Completions(_) => "completions",
        }
    }
}

impl TransformerArgs {
    /// Layer these flags over configured transformer options
    pub fn apply(&self, base: &TransformerConfig) -> TransformerConfig {
        let mut config = base.clone();
        if let Some(tz) = &self.input_timezone {
            config.input_timezone = tz.clone();
        }
        if let Some(tz) = &self.output_timezone {
            config.output_timezone = Some(tz.clone());
        }
        if let Some(fields) = &self.fields {
            config.fields = fields.clone();
        }
        if self.pad {
            config.pad = true;
        }
        if self.no_pad {
            config.pad = false;
        }
        if self.strict {
            config.allow_partial = false;
        }
        if self.partial {
            config.allow_partial = true;
        }
        for &(field, value) in &self.defaults {
            config.defaults.insert(field, value);
        }
        config
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

/// Parse a `FIELD=N` default override
fn parse_default(s: &str) -> Result<(FieldName, i32), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=N, got '{}'", s))?;
    let field = field.parse::<FieldName>().map_err(|e| e.to_string())?;
    let value = value
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid default for '{}': {}", field, e))?;
    Ok((field, value))
}

/// Parse a `FIELD=VALUE` submitted field
fn parse_assignment(s: &str) -> Result<(FieldName, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", s))?;
    let field = field.parse::<FieldName>().map_err(|e| e.to_string())?;
    Ok((field, value.to_string()))
}
