//! Builder for creating field transformers
//!
//! This module provides a fluent builder API for constructing a
//! [`FieldTransformer`] with validated, immutable configuration.
//!
//! Copyright (c) 2025 Datefield Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::types::{FieldDefaults, FieldName};
use super::field::FieldTransformer;

/// Timezone used when none is configured
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Builder for creating field transformers
#[derive(Debug, Clone, Default)]
pub struct FieldTransformerBuilder {
    input_timezone: Option<String>,
    output_timezone: Option<String>,
    fields: Option<Vec<FieldName>>,
    pad: bool,
    allow_partial: Option<bool>,
    defaults: Vec<(FieldName, i32)>,
}

impl FieldTransformerBuilder {
    /// Create a new builder with every option at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timezone instants are expressed in
    pub fn input_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.input_timezone = Some(timezone.into());
        self
    }

    /// Set the timezone fields are expressed in (defaults to the input timezone)
    pub fn output_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.output_timezone = Some(timezone.into());
        self
    }

    /// Set the projected fields, in order
    pub fn fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = FieldName>,
    {
        self.fields = Some(fields.into_iter().collect());
        self
    }

    /// Zero-pad rendered values
    pub fn pad(mut self, pad: bool) -> Self {
        self.pad = pad;
        self
    }

    /// Tolerate missing fields and fill them from defaults
    pub fn allow_partial(mut self, allow_partial: bool) -> Self {
        self.allow_partial = Some(allow_partial);
        self
    }

    /// Override the default for one field
    pub fn field_default(mut self, field: FieldName, value: i32) -> Self {
        self.defaults.push((field, value));
        self
    }

    /// Override several defaults at once
    pub fn defaults<I>(mut self, defaults: I) -> Self
    where
        I: IntoIterator<Item = (FieldName, i32)>,
    {
        self.defaults.extend(defaults);
        self
    }

    /// Build the transformer
    pub fn build(self) -> Result<FieldTransformer> {
        let input_timezone = self
            .input_timezone
            .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
        let output_timezone = self
            .output_timezone
            .unwrap_or_else(|| input_timezone.clone());

        let fields = self.fields.unwrap_or_else(|| FieldName::ALL.to_vec());
        if fields.is_empty() {
            return Err(Error::configuration("At least one field must be selected"));
        }
        for (index, field) in fields.iter().enumerate() {
            if fields[..index].contains(field) {
                return Err(Error::configuration(format!(
                    "Field '{}' is selected more than once",
                    field
                )));
            }
        }

        let mut defaults = FieldDefaults::default();
        for (field, value) in self.defaults {
            defaults.set(field, value)?;
        }

        Ok(FieldTransformer::from_parts(
            input_timezone,
            output_timezone,
            fields,
            self.pad,
            self.allow_partial.unwrap_or(true),
            defaults,
        ))
    }
}
