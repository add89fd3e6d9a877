//! Property-based testing strategies for generating test data
//!
//! This module provides proptest strategies for generating random
//! but valid instants and transformer configurations.

#![cfg(test)]

use crate::types::FieldName;
use jiff::civil::{Date, DateTime, Time};
use jiff::Zoned;
use proptest::prelude::*;
use proptest::sample::subsequence;

/// Timezones exercised by property tests
pub const TIMEZONES: &[&str] = &[
    "UTC",
    "America/New_York",
    "Europe/Berlin",
    "Asia/Kolkata",
    "Australia/Lord_Howe",
];

/// Strategy for generating timezone names
pub fn timezone_strategy() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(TIMEZONES)
}

/// Strategy for generating valid civil datetimes
pub fn datetime_strategy() -> impl Strategy<Value = DateTime> {
    (
        1900i16..=2100,  // year
        1i8..=12,        // month
        1i8..=28,        // day, valid in every month
        0i8..=23,        // hour
        0i8..=59,        // minute
        0i8..=59,        // second
    ).prop_filter_map("valid datetime", |(year, month, day, hour, minute, second)| {
        let date = Date::new(year, month, day).ok()?;
        let time = Time::new(hour, minute, second, 0).ok()?;
        Some(DateTime::from_parts(date, time))
    })
}

/// Strategy for generating zoned instants
pub fn zoned_strategy() -> impl Strategy<Value = Zoned> {
    (datetime_strategy(), timezone_strategy())
        .prop_filter_map("resolvable in zone", |(datetime, tz)| datetime.in_tz(tz).ok())
}

/// Strategy for generating non-empty ordered field selections
pub fn fields_strategy() -> impl Strategy<Value = Vec<FieldName>> {
    subsequence(FieldName::ALL.to_vec(), 1..=FieldName::ALL.len())
}

mod tests {
    use super::*;
    use crate::transformer::FieldTransformer;

    proptest! {
        #[test]
        fn prop_unpadded_values_have_no_leading_zero(
            zoned in zoned_strategy(),
            fields in fields_strategy(),
        ) {
            let tz = zoned.time_zone().iana_name().unwrap_or("UTC").to_string();
            let transformer = FieldTransformer::builder()
                .input_timezone(tz)
                .fields(fields.clone())
                .build()
                .unwrap();
            let map = transformer.transform(Some(&zoned)).unwrap();

            prop_assert_eq!(map.fields().collect::<Vec<_>>(), fields);
            for (_, value) in map.iter() {
                prop_assert!(value == "0" || !value.starts_with('0'));
            }
        }

        #[test]
        fn prop_padded_values_have_fixed_width(
            zoned in zoned_strategy(),
            fields in fields_strategy(),
        ) {
            let transformer = FieldTransformer::builder()
                .fields(fields)
                .pad(true)
                .build()
                .unwrap();
            let map = transformer.transform(Some(&zoned)).unwrap();

            for (field, value) in map.iter() {
                prop_assert_eq!(value.len(), field.width());
            }
        }
    }
}
