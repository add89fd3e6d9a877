//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), with dedicated
//! rendering for field maps and instants.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use datefield_core::FieldMap;
use jiff::Zoned;
use serde::Serialize;
use serde_json::json;
use std::io::{self, Write};
use tracing::trace;

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a field map, one field per line for humans
    fn format_fields(&self, fields: &FieldMap, use_color: bool) -> Result<String>;

    /// Format a joined instant, which is absent for blank submissions
    fn format_instant(&self, instant: Option<&Zoned>, use_color: bool) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_fields(&self, fields: &FieldMap, use_color: bool) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_fields_human(fields, use_color)),
            _ => self.format(fields),
        }
    }

    fn format_instant(&self, instant: Option<&Zoned>, use_color: bool) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_instant_human(instant, use_color)),
            _ => {
                let value = json!({ "instant": instant.map(|z| z.to_string()) });
                self.format(&value)
            }
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write formatted output, ending it with exactly one newline
    fn emit(&mut self, formatted: &str) -> Result<()> {
        if formatted.ends_with('\n') {
            self.write(formatted)
        } else {
            self.writeln(formatted)
        }
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), "Outputting data");
        self.emit(&formatted)
    }

    /// Write a field map
    pub fn fields(&mut self, fields: &FieldMap) -> Result<()> {
        let formatted = self.format.format_fields(fields, self.use_color)?;
        self.emit(&formatted)
    }

    /// Write a joined instant
    pub fn instant(&mut self, instant: Option<&Zoned>) -> Result<()> {
        let formatted = self.format.format_instant(instant, self.use_color)?;
        self.emit(&formatted)
    }
}

fn format_fields_human(fields: &FieldMap, use_color: bool) -> String {
    let width = fields
        .fields()
        .map(|f| f.as_str().len())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(fields.len());
    for (field, value) in fields.iter() {
        let label = format!("{:<width$}", field.as_str(), width = width);
        let label = if use_color {
            label.cyan().to_string()
        } else {
            label
        };
        let value = if value.is_empty() {
            if use_color {
                "(empty)".dimmed().to_string()
            } else {
                "(empty)".to_string()
            }
        } else {
            value.to_string()
        };
        lines.push(format!("{}  {}", label, value));
    }
    lines.join("\n")
}

fn format_instant_human(instant: Option<&Zoned>, use_color: bool) -> String {
    match instant {
        Some(zoned) => zoned.to_string(),
        None if use_color => "(no instant)".dimmed().to_string(),
        None => "(no instant)".to_string(),
    }
}
