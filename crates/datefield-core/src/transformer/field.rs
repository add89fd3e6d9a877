//! Field transformer implementation
//!
//! This module contains the conversion between a zoned datetime and the
//! ordered field map a form presents, in both directions.
//!
//! Copyright (c) 2025 Datefield Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::types::{FieldDefaults, FieldMap, FieldName};
use super::builder::FieldTransformerBuilder;
use jiff::civil::{Date, DateTime, Time};
use jiff::Zoned;
use std::str::FromStr;
use tracing::{debug, trace};

/// Converts zoned datetimes to form fields and back
///
/// Configuration is fixed at construction; every call is independent.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldTransformer {
    input_timezone: String,
    output_timezone: String,
    fields: Vec<FieldName>,
    pad: bool,
    allow_partial: bool,
    defaults: FieldDefaults,
}

impl Default for FieldTransformer {
    fn default() -> Self {
        Self::from_parts(
            super::builder::DEFAULT_TIMEZONE.to_string(),
            super::builder::DEFAULT_TIMEZONE.to_string(),
            FieldName::ALL.to_vec(),
            false,
            true,
            FieldDefaults::default(),
        )
    }
}

impl FieldTransformer {
    /// Start building a transformer
    pub fn builder() -> FieldTransformerBuilder {
        FieldTransformerBuilder::new()
    }

    pub(crate) fn from_parts(
        input_timezone: String,
        output_timezone: String,
        fields: Vec<FieldName>,
        pad: bool,
        allow_partial: bool,
        defaults: FieldDefaults,
    ) -> Self {
        Self {
            input_timezone,
            output_timezone,
            fields,
            pad,
            allow_partial,
            defaults,
        }
    }

    pub fn input_timezone(&self) -> &str {
        &self.input_timezone
    }

    pub fn output_timezone(&self) -> &str {
        &self.output_timezone
    }

    pub fn fields(&self) -> &[FieldName] {
        &self.fields
    }

    pub fn pad(&self) -> bool {
        self.pad
    }

    pub fn allow_partial(&self) -> bool {
        self.allow_partial
    }

    pub fn defaults(&self) -> &FieldDefaults {
        &self.defaults
    }

    fn converts_timezone(&self) -> bool {
        self.input_timezone != self.output_timezone
    }

    /// Split an instant into the configured fields
    ///
    /// `None` yields every configured field mapped to an empty string.
    pub fn transform(&self, instant: Option<&Zoned>) -> Result<FieldMap> {
        let Some(instant) = instant else {
            return Ok(self.fields.iter().map(|&field| (field, "")).collect());
        };

        let zoned = if self.converts_timezone() {
            debug!(from = %self.input_timezone, to = %self.output_timezone, "Converting instant for display");
            instant.in_tz(&self.output_timezone).map_err(|e| {
                Error::conversion(
                    format!("Cannot express {} in timezone '{}'", instant, self.output_timezone),
                    e,
                )
            })?
        } else {
            instant.clone()
        };

        let map: FieldMap = self
            .fields
            .iter()
            .map(|&field| (field, self.render(field, component(&zoned, field))))
            .collect();

        trace!(fields = ?map, "Projected instant onto fields");
        Ok(map)
    }

    /// Join submitted fields back into an instant
    ///
    /// `None` and a map whose values are all empty both yield `Ok(None)`.
    pub fn reverse_transform(&self, fields: Option<&FieldMap>) -> Result<Option<Zoned>> {
        let Some(map) = fields else {
            return Ok(None);
        };
        self.reverse_with_blank(map, map.is_blank())
    }

    /// Reverse transform with the blank check decided by the caller
    ///
    /// The loose value seam sees entries that never make it into a
    /// `FieldMap`, so it computes blankness itself.
    pub(crate) fn reverse_with_blank(&self, map: &FieldMap, blank: bool) -> Result<Option<Zoned>> {
        if blank {
            debug!("All submitted fields are blank, no instant produced");
            return Ok(None);
        }

        let empty: Vec<FieldName> = self
            .fields
            .iter()
            .copied()
            .filter(|&field| match map.get(field) {
                None => true,
                Some(value) => !self.allow_partial && is_falsy(value),
            })
            .collect();
        if !empty.is_empty() {
            let names = empty
                .iter()
                .map(|field| format!("\"{}\"", field))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(Error::validation_fields(
                format!("The fields {} should not be empty", names),
                empty,
            ));
        }

        let year: Option<i16> = parse_component(map, FieldName::Year)?;
        let month: Option<i8> = parse_component(map, FieldName::Month)?;
        let day: Option<i8> = parse_component(map, FieldName::Day)?;
        let hour: Option<i8> = parse_component(map, FieldName::Hour)?;
        let minute: Option<i8> = parse_component(map, FieldName::Minute)?;
        let second: Option<i8> = parse_component(map, FieldName::Second)?;

        if let (Some(year), Some(month), Some(day)) = (year, month, day) {
            if Date::new(year, month, day).is_err() {
                return Err(Error::validation("This is an invalid date"));
            }
        }

        let year = year.unwrap_or(self.defaults.year);
        let month = month.unwrap_or(self.defaults.month);
        let day = day.unwrap_or(self.defaults.day);
        let hour = hour.unwrap_or(self.defaults.hour);
        let minute = minute.unwrap_or(self.defaults.minute);
        let second = second.unwrap_or(self.defaults.second);

        let date = Date::new(year, month, day).map_err(|e| {
            Error::conversion(format!("Cannot build date {:04}-{:02}-{:02}", year, month, day), e)
        })?;
        let time = Time::new(hour, minute, second, 0).map_err(|e| {
            Error::conversion(format!("Cannot build time {:02}:{:02}:{:02}", hour, minute, second), e)
        })?;
        let datetime = DateTime::from_parts(date, time);

        let zoned = datetime.in_tz(&self.output_timezone).map_err(|e| {
            Error::conversion(
                format!("Cannot interpret {} in timezone '{}'", datetime, self.output_timezone),
                e,
            )
        })?;

        if !self.converts_timezone() {
            return Ok(Some(zoned));
        }

        debug!(from = %self.output_timezone, to = %self.input_timezone, "Converting submitted instant");
        let zoned = zoned.in_tz(&self.input_timezone).map_err(|e| {
            Error::conversion(
                format!("Cannot express {} in timezone '{}'", zoned, self.input_timezone),
                e,
            )
        })?;
        Ok(Some(zoned))
    }

    fn render(&self, field: FieldName, value: i16) -> String {
        if self.pad {
            format!("{:0width$}", value, width = field.width())
        } else {
            value.to_string()
        }
    }
}

fn component(zoned: &Zoned, field: FieldName) -> i16 {
    match field {
        FieldName::Year => zoned.year(),
        FieldName::Month => i16::from(zoned.month()),
        FieldName::Day => i16::from(zoned.day()),
        FieldName::Hour => i16::from(zoned.hour()),
        FieldName::Minute => i16::from(zoned.minute()),
        FieldName::Second => i16::from(zoned.second()),
    }
}

/// Form-style emptiness: the empty string and a bare zero both count
fn is_falsy(value: &str) -> bool {
    value.is_empty() || value == "0"
}

/// Parse a submitted component, treating absent or falsy text as unset
fn parse_component<T: FromStr>(map: &FieldMap, field: FieldName) -> Result<Option<T>> {
    let Some(value) = map.get(field).filter(|value| !is_falsy(value)) else {
        return Ok(None);
    };
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::validation_fields(format!("This {} is invalid", field), vec![field]));
    }
    value
        .parse::<T>()
        .map(Some)
        .map_err(|_| Error::validation_fields(format!("This {} is invalid", field), vec![field]))
}
