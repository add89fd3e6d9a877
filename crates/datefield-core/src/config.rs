//! Serializable transformer configuration
//!
//! [`TransformerConfig`] is the on-disk shape of a [`FieldTransformer`]'s
//! options. Every key is optional; missing keys take the builder defaults.

use crate::error::Result;
use crate::transformer::{FieldTransformer, DEFAULT_TIMEZONE};
use crate::types::FieldName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Options for building a [`FieldTransformer`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformerConfig {
    /// Timezone of the model instant
    pub input_timezone: String,

    /// Timezone the fields are shown in (same as input when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_timezone: Option<String>,

    /// Projected fields, in order
    pub fields: Vec<FieldName>,

    /// Zero-pad rendered values
    pub pad: bool,

    /// Tolerate missing fields
    pub allow_partial: bool,

    /// Per-field overrides of the seed defaults
    pub defaults: BTreeMap<FieldName, i32>,
}

impl Default for TransformerConfig {
    fn default() -> Self {
        Self {
            input_timezone: DEFAULT_TIMEZONE.to_string(),
            output_timezone: None,
            fields: FieldName::ALL.to_vec(),
            pad: false,
            allow_partial: true,
            defaults: BTreeMap::new(),
        }
    }
}

impl TransformerConfig {
    /// Build a transformer from these options
    pub fn build(&self) -> Result<FieldTransformer> {
        let mut builder = FieldTransformer::builder()
            .input_timezone(self.input_timezone.clone())
            .fields(self.fields.iter().copied())
            .pad(self.pad)
            .allow_partial(self.allow_partial)
            .defaults(self.defaults.iter().map(|(&field, &value)| (field, value)));
        if let Some(output) = &self.output_timezone {
            builder = builder.output_timezone(output.clone());
        }
        builder.build()
    }
}

impl From<&FieldTransformer> for TransformerConfig {
    fn from(transformer: &FieldTransformer) -> Self {
        let seed = crate::types::FieldDefaults::default();
        let defaults = transformer
            .defaults()
            .iter()
            .filter(|&(field, value)| seed.get(field) != value)
            .map(|(field, value)| (field, i32::from(value)))
            .collect();

        Self {
            input_timezone: transformer.input_timezone().to_string(),
            output_timezone: (transformer.output_timezone() != transformer.input_timezone())
                .then(|| transformer.output_timezone().to_string()),
            fields: transformer.fields().to_vec(),
            pad: transformer.pad(),
            allow_partial: transformer.allow_partial(),
            defaults,
        }
    }
}
