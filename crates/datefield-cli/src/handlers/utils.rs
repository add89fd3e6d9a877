//! Shared utilities for command handlers

use crate::cli::TransformerArgs;
use crate::config::Config;
use crate::error::{Error, ErrorContext, Result};
use datefield_core::FieldTransformer;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Build the transformer described by the config file with flags layered on top
pub fn build_transformer(args: &TransformerArgs, config: &Config) -> Result<FieldTransformer> {
    let transformer = args.apply(&config.transformer).build()?;

    tracing::debug!(
        input_timezone = transformer.input_timezone(),
        output_timezone = transformer.output_timezone(),
        pad = transformer.pad(),
        allow_partial = transformer.allow_partial(),
        "Built field transformer"
    );

    Ok(transformer)
}

/// Read a JSON or YAML document, chosen by extension
pub fn read_value_file(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false);

    if is_yaml {
        serde_yaml::from_str(&content).map_err(|_| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "YAML".to_string(),
        })
    } else {
        serde_json::from_str(&content).map_err(|_| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "JSON".to_string(),
        })
    }
}
