//! Error types for `jsonsieve`.
//!
//! This module provides a unified error type for every filtering operation,
//! with stable error codes suitable for API exposure.

use thiserror::Error;

use crate::condition::Operator;

/// Result type alias for `jsonsieve` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or applying a filter.
///
/// Each variant includes a descriptive message suitable for end-users.
/// Error codes follow the pattern `SIEVE-XXX` for easy debugging.
#[derive(Error, Debug)]
pub enum Error {
    /// No operator/value part found in a filter fragment (SIEVE-001).
    #[error("[SIEVE-001] no value defined for filter fragment '{0}'")]
    MissingValue(String),

    /// Empty key part in a filter fragment (SIEVE-002).
    #[error("[SIEVE-002] no filter key in fragment '{0}'")]
    MissingKey(String),

    /// Composed key deeper than the configured limit (SIEVE-003).
    #[error("[SIEVE-003] filter key '{key}' exceeds the maximum depth of {max_depth}")]
    DepthExceeded {
        /// The offending composed key.
        key: String,
        /// The configured depth limit.
        max_depth: usize,
    },

    /// Same (key, operator) pair given twice (SIEVE-004).
    #[error("[SIEVE-004] filter key '{key}' already defined for operator '{operator}'")]
    DuplicateKey {
        /// The repeated key.
        key: String,
        /// The repeated operator.
        operator: Operator,
    },

    /// Ordering operator given a value list instead of a single value (SIEVE-005).
    #[error("[SIEVE-005] operator '{0}' accepts exactly one value")]
    SingleValueExpected(Operator),

    /// Ordering operator given a non-numeric value (SIEVE-006).
    #[error("[SIEVE-006] operator '{operator}' requires a numeric value, got '{value}'")]
    NumericValueExpected {
        /// The offending operator.
        operator: Operator,
        /// The value that failed to parse.
        value: String,
    },

    /// Key segment not present in the record shape (SIEVE-007).
    #[error("[SIEVE-007] filter key segment '{segment}' does not exist in the record type (path so far: '{path}')")]
    UnknownKey {
        /// The segment that failed to resolve.
        segment: String,
        /// The canonical path resolved before the failure.
        path: String,
    },

    /// Filter input is not an ordered collection (SIEVE-008).
    #[error("[SIEVE-008] internal error: filter input is not an array")]
    NotACollection,

    /// Record serialization failed (SIEVE-009).
    #[error("[SIEVE-009] record serialization failed: {0}")]
    Serialization(String),

    /// Invalid filter options (SIEVE-010).
    #[error("[SIEVE-010] invalid filter options: {0}")]
    Config(String),
}

impl Error {
    /// Returns the error code (e.g., "SIEVE-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingValue(_) => "SIEVE-001",
            Self::MissingKey(_) => "SIEVE-002",
            Self::DepthExceeded { .. } => "SIEVE-003",
            Self::DuplicateKey { .. } => "SIEVE-004",
            Self::SingleValueExpected(_) => "SIEVE-005",
            Self::NumericValueExpected { .. } => "SIEVE-006",
            Self::UnknownKey { .. } => "SIEVE-007",
            Self::NotACollection => "SIEVE-008",
            Self::Serialization(_) => "SIEVE-009",
            Self::Config(_) => "SIEVE-010",
        }
    }

    /// Returns true if the error stems from the filter text itself
    /// (as opposed to the record type, the input collection, or the options).
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::MissingValue(_)
                | Self::MissingKey(_)
                | Self::DepthExceeded { .. }
                | Self::DuplicateKey { .. }
                | Self::SingleValueExpected(_)
                | Self::NumericValueExpected { .. }
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
