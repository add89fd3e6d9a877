//! Split command handler

use super::utils::build_transformer;
use crate::cli::SplitArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;
use datefield_core::{FieldMap, ValueTransformer};
use jiff::Zoned;
use serde_json::Value;

/// Handle the split command
///
/// An instant given on the command line goes through the JSON seam, so a
/// malformed instant is reported as a type mismatch.
pub fn handle_split(args: SplitArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let transformer = build_transformer(&args.transformer, config)?;

    let fields = if args.now {
        let now = Zoned::now()
            .in_tz(transformer.input_timezone())
            .map_err(|e| {
                datefield_core::Error::conversion(
                    format!("Cannot use timezone '{}'", transformer.input_timezone()),
                    e,
                )
            })?;
        tracing::debug!(instant = %now, "Splitting current time");
        transformer.transform(Some(&now))?
    } else {
        let input = args.instant.map_or(Value::Null, Value::String);
        let value = transformer.transform_value(&input)?;
        serde_json::from_value::<FieldMap>(value)?
    };

    output.fields(&fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{OutputFormat, TransformerArgs};
    use crate::output::capture::writer;
    use datefield_core::FieldName;
    use pretty_assertions::assert_eq;

    fn split(instant: Option<&str>, transformer: TransformerArgs, format: OutputFormat) -> Result<String> {
        let (mut out, buffer) = writer(format, false);
        let args = SplitArgs {
            instant: instant.map(str::to_string),
            now: false,
            transformer,
        };
        handle_split(args, &Config::default(), &mut out)?;
        Ok(buffer.contents())
    }

    #[test]
    fn test_split_converts_to_output_timezone() {
        let transformer = TransformerArgs {
            output_timezone: Some("Asia/Tokyo".to_string()),
            fields: Some(vec![FieldName::Day, FieldName::Hour]),
            ..TransformerArgs::default()
        };
        let output = split(Some("2024-03-01T15:00:00+00:00[UTC]"), transformer, OutputFormat::Json).unwrap();
        assert_eq!(output, "{\"day\":\"2\",\"hour\":\"0\"}\n");
    }

    #[test]
    fn test_split_prints_fields_in_selected_order() {
        let transformer = TransformerArgs {
            fields: Some(vec![FieldName::Year, FieldName::Month, FieldName::Day, FieldName::Hour]),
            pad: true,
            ..TransformerArgs::default()
        };
        let output = split(Some("2024-03-01T15:00:00+00:00[UTC]"), transformer.clone(), OutputFormat::Json).unwrap();
        assert_eq!(output, "{\"year\":\"2024\",\"month\":\"03\",\"day\":\"01\",\"hour\":\"15\"}\n");

        let output = split(Some("2024-03-01T15:00:00+00:00[UTC]"), transformer, OutputFormat::Human).unwrap();
        assert_eq!(output, "year   2024\nmonth  03\nday    01\nhour   15\n");
    }

    #[test]
    fn test_split_without_instant_gives_empty_fields() {
        let transformer = TransformerArgs {
            fields: Some(vec![FieldName::Year, FieldName::Month]),
            ..TransformerArgs::default()
        };
        let output = split(None, transformer, OutputFormat::Human).unwrap();
        assert_eq!(output, "year   (empty)\nmonth  (empty)\n");
    }

    #[test]
    fn test_split_rejects_malformed_instant() {
        let err = split(Some("yesterday"), TransformerArgs::default(), OutputFormat::Json).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_split_now_renders_every_field() {
        let (mut out, buffer) = writer(OutputFormat::Json, false);
        let args = SplitArgs {
            instant: None,
            now: true,
            transformer: TransformerArgs {
                pad: true,
                ..TransformerArgs::default()
            },
        };
        handle_split(args, &Config::default(), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 6);
        assert_eq!(object["year"].as_str().unwrap().len(), 4);
        assert_eq!(object["second"].as_str().unwrap().len(), 2);
    }
}
