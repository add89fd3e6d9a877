//! Error types for the Datefield core library
//!
//! This module defines the error handling system for the field transformer,
//! using thiserror for ergonomic error definitions. Every failure a transform
//! can produce falls into one of the kinds listed by [`ErrorKind`].

use crate::types::FieldName;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main error type for Datefield operations
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The input was present but not of the type the operation accepts
    #[error("Expected a {expected}, found {found}")]
    TypeMismatch {
        expected: String,
        found: String,
    },

    /// Submitted fields failed validation
    #[error("{message}")]
    ValidationFailed {
        message: String,
        /// Offending fields, in configured order (empty for whole-value failures)
        fields: Vec<FieldName>,
    },

    /// Timezone resolution or instant construction failed
    #[error("Conversion failed: {message}")]
    ConversionFailed {
        message: String,
        #[source]
        source: jiff::Error,
    },

    /// Invalid transformer configuration
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    TypeMismatch,
    ValidationFailed,
    ConversionFailed,
    Configuration,
}

impl Error {
    /// Create a type mismatch error
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a validation error that is not tied to specific fields
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Create a validation error naming the offending fields
    pub fn validation_fields(message: impl Into<String>, fields: Vec<FieldName>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
            fields,
        }
    }

    /// Create a conversion error wrapping the underlying jiff failure
    pub fn conversion(message: impl Into<String>, source: jiff::Error) -> Self {
        Self::ConversionFailed {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::ValidationFailed { .. } => ErrorKind::ValidationFailed,
            Self::ConversionFailed { .. } => ErrorKind::ConversionFailed,
            Self::Configuration { .. } => ErrorKind::Configuration,
        }
    }

    /// Fields named by a validation failure, if any
    pub fn fields(&self) -> &[FieldName] {
        match self {
            Self::ValidationFailed { fields, .. } => fields,
            _ => &[],
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::TypeMismatch => write!(f, "type mismatch"),
            ErrorKind::ValidationFailed => write!(f, "validation failed"),
            ErrorKind::ConversionFailed => write!(f, "conversion failed"),
            ErrorKind::Configuration => write!(f, "configuration"),
        }
    }
}
