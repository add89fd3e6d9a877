//! Datefield Core - Zoned datetime to form field transformation
//!
//! This crate converts a timezone-aware instant into the separate calendar
//! and clock fields a form shows (year, month, day, hour, minute, second) and
//! converts submitted fields back into an instant.
//!
//! # Main Components
//!
//! - **Error Handling**: One error type built with `thiserror`, classified by [`ErrorKind`]
//! - **Core Types**: [`FieldName`], the ordered [`FieldMap`], and [`FieldDefaults`]
//! - **Transformer**: [`FieldTransformer`] with its builder and JSON seam
//! - **Configuration**: [`TransformerConfig`] for loading options with serde
//!
//! # Example
//!
//! ```
//! use datefield_core::{FieldName, FieldTransformer, Result};
//!
//! fn example() -> Result<()> {
//!     let transformer = FieldTransformer::builder().pad(true).build()?;
//!     let instant: jiff::Zoned = "2023-01-05T00:00:00+00:00[UTC]".parse().unwrap();
//!     let fields = transformer.transform(Some(&instant))?;
//!     assert_eq!(fields.get(FieldName::Month), Some("01"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod config;
pub mod error;
pub mod transformer;
pub mod types;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use config::TransformerConfig;
pub use error::{Error, ErrorKind, Result};
pub use transformer::{FieldTransformer, FieldTransformerBuilder, ValueTransformer};
pub use types::{FieldDefaults, FieldMap, FieldName};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
