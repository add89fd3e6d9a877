//! Core data types for Datefield
//!
//! This module contains the closed set of calendar/clock field names, the
//! ordered field map exchanged with a form layer, and the per-field defaults
//! used to fill partial input.

use crate::error::{Error, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A single calendar or clock component
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl FieldName {
    /// Every field, in canonical order
    pub const ALL: [FieldName; 6] = [
        FieldName::Year,
        FieldName::Month,
        FieldName::Day,
        FieldName::Hour,
        FieldName::Minute,
        FieldName::Second,
    ];

    /// Lowercase name used in maps and messages
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Year => "year",
            FieldName::Month => "month",
            FieldName::Day => "day",
            FieldName::Hour => "hour",
            FieldName::Minute => "minute",
            FieldName::Second => "second",
        }
    }

    /// Zero-padded width of the rendered value
    pub fn width(self) -> usize {
        match self {
            FieldName::Year => 4,
            _ => 2,
        }
    }

    /// Inclusive range of values a default for this field may take
    pub fn range(self) -> (i16, i16) {
        match self {
            FieldName::Year => (-9999, 9999),
            FieldName::Month => (1, 12),
            FieldName::Day => (1, 31),
            FieldName::Hour => (0, 23),
            FieldName::Minute | FieldName::Second => (0, 59),
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::configuration(format!("Unknown field name '{}'", s)))
    }
}

/// Ordered mapping from field names to their textual values
///
/// Keys are unique. Re-inserting a key replaces its value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(FieldName, String)>,
}

impl FieldMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(&mut self, field: FieldName, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((field, value));
                None
            }
        }
    }

    /// Builder-style insert
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    /// Value for a field, if present
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Remove a field, returning its value
    pub fn remove(&mut self, field: FieldName) -> Option<String> {
        let index = self.entries.iter().position(|(name, _)| *name == field)?;
        Some(self.entries.remove(index).1)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.get(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.entries.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// Field names in insertion order
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// True when every present value is the empty string
    ///
    /// An empty map is blank.
    pub fn is_blank(&self) -> bool {
        self.entries.iter().all(|(_, value)| value.is_empty())
    }
}

impl<S: Into<String>> FromIterator<(FieldName, S)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (FieldName, S)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (field, value) in iter {
            map.insert(field, value);
        }
        map
    }
}

impl IntoIterator for FieldMap {
    type Item = (FieldName, String);
    type IntoIter = std::vec::IntoIter<(FieldName, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, value) in &self.entries {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct FieldMapVisitor;

        impl<'de> Visitor<'de> for FieldMapVisitor {
            type Value = FieldMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<FieldMap, A::Error> {
                let mut map = FieldMap::new();
                while let Some((field, value)) = access.next_entry::<FieldName, String>()? {
                    map.insert(field, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(FieldMapVisitor)
    }
}

/// Per-field fallback values used when partial input omits a field
///
/// Always carries a value for every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefaults {
    pub year: i16,
    pub month: i8,
    pub day: i8,
    pub hour: i8,
    pub minute: i8,
    pub second: i8,
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            year: 1970,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }
}

impl FieldDefaults {
    /// Default for a field, widened for display
    pub fn get(&self, field: FieldName) -> i16 {
        match field {
            FieldName::Year => self.year,
            FieldName::Month => i16::from(self.month),
            FieldName::Day => i16::from(self.day),
            FieldName::Hour => i16::from(self.hour),
            FieldName::Minute => i16::from(self.minute),
            FieldName::Second => i16::from(self.second),
        }
    }

    /// Override one field, rejecting values outside the field's range
    pub fn set(&mut self, field: FieldName, value: i32) -> Result<()> {
        let (min, max) = field.range();
        if value < i32::from(min) || value > i32::from(max) {
            return Err(Error::configuration(format!(
                "Default for '{}' must be between {} and {}, got {}",
                field, min, max, value
            )));
        }
        let narrow = |v: i32| i8::try_from(v).map_err(|_| {
            Error::configuration(format!("Default for '{}' out of range: {}", field, v))
        });
        match field {
            FieldName::Year => {
                self.year = i16::try_from(value).map_err(|_| {
                    Error::configuration(format!("Default for 'year' out of range: {}", value))
                })?
            }
            FieldName::Month => self.month = narrow(value)?,
            FieldName::Day => self.day = narrow(value)?,
            FieldName::Hour => self.hour = narrow(value)?,
            FieldName::Minute => self.minute = narrow(value)?,
            FieldName::Second => self.second = narrow(value)?,
        }
        Ok(())
    }

    /// Iterate all six defaults in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, i16)> + '_ {
        FieldName::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}
