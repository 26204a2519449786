use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the pricegrid workspace.
///
/// The denormalization itself cannot fail; every variant here describes a
/// problem at a boundary: parsing dates, reading a price source, validating
/// configuration, or loading input.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PricegridError {
    /// A date string could not be parsed as a `YYYY-MM-DD` calendar date.
    #[error("cannot parse date {value:?}: {reason}")]
    Parse {
        /// The offending input, verbatim.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A price source failed to produce its records.
    #[error("{source_name} failed: {msg}")]
    Source {
        /// Name of the source that failed.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Configuration or builder validation failed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Input could not be read.
    #[error("io error: {0}")]
    Io(String),

    /// Input could not be decoded as JSON.
    #[error("json error: {0}")]
    Json(String),
}

impl PricegridError {
    /// Helper: build a `Parse` error for the offending value.
    pub fn parse(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source_failed(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `InvalidConfig` error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Returns true if the error was caused by malformed input data rather
    /// than by the environment (files, sources) or by configuration.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::Json(_))
    }
}
