//! Field transformation between zoned datetimes and form fields
//!
//! This module splits a timezone-aware instant into the calendar and clock
//! components a form renders (year, month, day, hour, minute, second) and
//! joins submitted components back into an instant, converting between the
//! model timezone and the display timezone on the way.
//!
//! # Module Organization
//!
//! - [`field`] - The [`FieldTransformer`] and both conversion directions
//! - [`builder`] - Fluent builder API with validated configuration
//! - [`value`] - The loosely typed JSON seam a form pipeline talks to
//! - `tests` - Unit test suite
//!
//! # Examples
//!
//! ```
//! use datefield_core::{FieldMap, FieldName, FieldTransformer};
//!
//! let transformer = FieldTransformer::builder()
//!     .input_timezone("UTC")
//!     .output_timezone("America/New_York")
//!     .fields([FieldName::Year, FieldName::Month, FieldName::Day, FieldName::Hour])
//!     .pad(true)
//!     .build()
//!     .unwrap();
//!
//! let instant: jiff::Zoned = "2024-03-01T15:00:00+00:00[UTC]".parse().unwrap();
//! let fields = transformer.transform(Some(&instant)).unwrap();
//! assert_eq!(fields.get(FieldName::Hour), Some("10"));
//!
//! let submitted = FieldMap::new()
//!     .with(FieldName::Year, "2024")
//!     .with(FieldName::Month, "03")
//!     .with(FieldName::Day, "01")
//!     .with(FieldName::Hour, "10");
//! let joined = transformer.reverse_transform(Some(&submitted)).unwrap().unwrap();
//! assert_eq!(joined.timestamp(), instant.timestamp());
//! ```
//!
//! Copyright (c) 2025 Datefield Team
//! Licensed under the Apache-2.0 license

// Transformer and conversions
pub mod field;

// Builder API
pub mod builder;

// JSON seam
pub mod value;


pub use builder::{FieldTransformerBuilder, DEFAULT_TIMEZONE};
pub use field::FieldTransformer;
pub use value::ValueTransformer;
