//! Loosely typed transformer seam
//!
//! Form pipelines hand values around as JSON. This module accepts whatever
//! such a pipeline submits, rejects values of the wrong shape with a type
//! mismatch, and delegates the rest to the typed [`FieldTransformer`].
//!
//! Copyright (c) 2025 Datefield Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::types::{FieldMap, FieldName};
use super::field::FieldTransformer;
use jiff::Zoned;
use serde_json::{Map, Value};

const EXPECTED_INSTANT: &str = "zoned datetime";
const EXPECTED_FIELD_MAP: &str = "field map";

/// A bidirectional transformer over JSON values
pub trait ValueTransformer {
    /// Model value to view value
    fn transform_value(&self, value: &Value) -> Result<Value>;

    /// View value to model value
    fn reverse_transform_value(&self, value: &Value) -> Result<Value>;
}

impl ValueTransformer for FieldTransformer {
    /// Accepts `null` or an RFC 9557 zoned datetime string
    fn transform_value(&self, value: &Value) -> Result<Value> {
        let instant = match value {
            Value::Null => None,
            Value::String(text) => Some(text.parse::<Zoned>().map_err(|_| {
                Error::type_mismatch(EXPECTED_INSTANT, format!("string '{}'", text))
            })?),
            other => return Err(Error::type_mismatch(EXPECTED_INSTANT, value_type_name(other))),
        };

        let map = self.transform(instant.as_ref())?;
        Ok(field_map_to_value(map))
    }

    /// Accepts `null` or an object of strings and integers
    fn reverse_transform_value(&self, value: &Value) -> Result<Value> {
        let object = match value {
            Value::Null => return Ok(Value::Null),
            Value::Object(object) => object,
            other => return Err(Error::type_mismatch(EXPECTED_FIELD_MAP, value_type_name(other))),
        };

        let mut blank = true;
        let mut map = FieldMap::new();
        for (key, raw) in object {
            let text = match raw {
                Value::Null => continue,
                Value::String(text) => text.clone(),
                Value::Number(number) => number.to_string(),
                other => {
                    return Err(Error::type_mismatch(
                        format!("string or number for '{}'", key),
                        value_type_name(other),
                    ))
                }
            };
            // Every entry counts toward blankness, recognised field or not.
            blank &= text.is_empty();
            if let Some(field) = field_for_key(key) {
                map.insert(field, text);
            }
        }

        let instant = self.reverse_with_blank(&map, blank)?;
        Ok(instant.map_or(Value::Null, |zoned| Value::String(zoned.to_string())))
    }
}

fn field_for_key(key: &str) -> Option<FieldName> {
    FieldName::ALL.into_iter().find(|field| field.as_str() == key)
}

fn field_map_to_value(map: FieldMap) -> Value {
    let object: Map<String, Value> = map
        .into_iter()
        .map(|(field, value)| (field.as_str().to_string(), Value::String(value)))
        .collect();
    Value::Object(object)
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
