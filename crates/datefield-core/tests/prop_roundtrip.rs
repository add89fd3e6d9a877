//! Property-based tests for the field transformer
//!
//! These tests verify invariants that should hold for every instant and
//! every timezone pairing.

use datefield_core::{FieldMap, FieldName, FieldTransformer};
use jiff::civil::{Date, DateTime, Time};
use jiff::Zoned;
use proptest::prelude::*;

const TIMEZONES: &[&str] = &[
    "UTC",
    "America/Sao_Paulo",
    "Europe/Dublin",
    "Asia/Kathmandu",
    "Pacific/Chatham",
];

/// Strategy for generating instants in a random zone
fn zoned_strategy() -> impl Strategy<Value = Zoned> {
    (
        1950i16..=2080,
        1i8..=12,
        1i8..=31,
        0i8..=23,
        0i8..=59,
        0i8..=59,
        proptest::sample::select(TIMEZONES),
    ).prop_filter_map("valid instant", |(year, month, day, hour, minute, second, tz)| {
        let date = Date::new(year, month, day).ok()?;
        let time = Time::new(hour, minute, second, 0).ok()?;
        DateTime::from_parts(date, time).in_tz(tz).ok()
    })
}

fn components(zoned: &Zoned) -> [i16; 6] {
    [
        zoned.year(),
        i16::from(zoned.month()),
        i16::from(zoned.day()),
        i16::from(zoned.hour()),
        i16::from(zoned.minute()),
        i16::from(zoned.second()),
    ]
}

proptest! {
    #[test]
    fn prop_padded_round_trip_preserves_components(
        zoned in zoned_strategy(),
        display in proptest::sample::select(TIMEZONES),
    ) {
        let model_tz = zoned.time_zone().iana_name().unwrap_or("UTC").to_string();
        let transformer = FieldTransformer::builder()
            .input_timezone(model_tz)
            .output_timezone(display)
            .pad(true)
            .build()
            .unwrap();

        let map = transformer.transform(Some(&zoned)).unwrap();
        let back = transformer.reverse_transform(Some(&map)).unwrap().unwrap();

        // Ambiguous wall clock times may resolve to the other offset, but the
        // displayed components always survive.
        let redisplayed = transformer.transform(Some(&back)).unwrap();
        prop_assert_eq!(redisplayed, map);
    }

    #[test]
    fn prop_same_zone_round_trip_is_exact(zoned in zoned_strategy()) {
        let model_tz = zoned.time_zone().iana_name().unwrap_or("UTC").to_string();
        let transformer = FieldTransformer::builder()
            .input_timezone(model_tz)
            .pad(true)
            .allow_partial(false)
            .build()
            .unwrap();

        let map = transformer.transform(Some(&zoned)).unwrap();
        let back = transformer.reverse_transform(Some(&map)).unwrap().unwrap();
        prop_assert_eq!(components(&back), components(&zoned));
    }

    #[test]
    fn prop_empty_transform_has_configured_shape(
        fields in proptest::sample::subsequence(FieldName::ALL.to_vec(), 1..=6),
    ) {
        let transformer = FieldTransformer::builder().fields(fields.clone()).build().unwrap();
        let map = transformer.transform(None).unwrap();
        prop_assert_eq!(map.fields().collect::<Vec<_>>(), fields);
        prop_assert!(map.is_blank());
    }

    #[test]
    fn prop_blank_submissions_yield_nothing(
        fields in proptest::sample::subsequence(FieldName::ALL.to_vec(), 0..=6),
        allow_partial in any::<bool>(),
    ) {
        let transformer = FieldTransformer::builder()
            .allow_partial(allow_partial)
            .build()
            .unwrap();
        let map: FieldMap = fields.into_iter().map(|field| (field, "")).collect();
        prop_assert_eq!(transformer.reverse_transform(Some(&map)).unwrap(), None);
    }
}
