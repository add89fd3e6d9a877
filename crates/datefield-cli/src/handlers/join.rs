//! Join command handler

use super::utils::{build_transformer, read_value_file};
use crate::cli::JoinArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use datefield_core::{FieldMap, ValueTransformer};
use jiff::Zoned;
use serde_json::Value;

/// Handle the join command
///
/// Fields come either from `FIELD=VALUE` arguments or from a JSON/YAML
/// object. The file path goes through the JSON seam so that keys the
/// transformer does not know still count toward blankness.
pub fn handle_join(args: JoinArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let transformer = build_transformer(&args.transformer, config)?;

    let instant = if let Some(path) = &args.from_file {
        let submitted = read_value_file(path)?;
        match transformer.reverse_transform_value(&submitted)? {
            Value::String(text) => Some(text.parse::<Zoned>().map_err(|e| {
                Error::other(format!("Joined instant '{}' did not parse: {}", text, e))
            })?),
            _ => None,
        }
    } else if args.assignments.is_empty() {
        transformer.reverse_transform(None)?
    } else {
        let fields: FieldMap = args.assignments.into_iter().collect();
        transformer.reverse_transform(Some(&fields))?
    };

    if instant.is_none() {
        tracing::debug!("Submission was blank");
    }
    output.instant(instant.as_ref())
}
