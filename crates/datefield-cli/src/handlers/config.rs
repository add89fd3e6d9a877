//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigFormat, ConfigInitArgs, ConfigShowArgs, OutputFormat};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use serde_json::json;

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Init(init_args) => handle_config_init(init_args, output),
        ConfigAction::Show(show_args) => handle_config_show(show_args, config, output),
        ConfigAction::Path => handle_config_path(config, output),
    }
}

/// Handle config init subcommand
fn handle_config_init(args: ConfigInitArgs, output: &mut OutputWriter) -> Result<()> {
    let path = match args.path {
        Some(path) => path,
        None => Config::user_config_path()
            .ok_or_else(|| Error::config("Unable to determine user config directory"))?,
    };

    if path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        ))?;
        return Ok(());
    }

    Config::default().save(&path)?;
    tracing::info!(path = %path.display(), "Wrote default configuration");

    output.success(&format!("✓ Created config at {}", path.display()))?;
    output.info("Edit it to change the default timezones, fields and defaults.")?;
    Ok(())
}

/// Handle config show subcommand
fn handle_config_show(args: ConfigShowArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let content = match args.format {
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    };

    let title = match &config.source {
        Some(path) => format!("Configuration ({})", path.display()),
        None => "Configuration (defaults)".to_string(),
    };
    output.section(&title)?;
    output.writeln(content.trim_end())
}

/// Handle config path subcommand
fn handle_config_path(config: &Config, output: &mut OutputWriter) -> Result<()> {
    let path = config.source.as_ref().map(|p| p.display().to_string());

    if output.format() != OutputFormat::Human {
        return output.data(&json!({ "path": path }));
    }

    match path {
        Some(path) => output.writeln(&path),
        None => output.info("No configuration file found, using defaults"),
    }
}
