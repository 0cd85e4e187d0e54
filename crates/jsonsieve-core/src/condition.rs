//! The compiled predicate model.
//!
//! A filter string compiles to an ordered list of [`ConditionEntry`] values:
//! one key, one operator, and the values the key is compared against.
//! Entries are AND'ed across the list; values are OR'ed within one entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operator of a filter condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// At least one value must match (`IN` semantics).
    Equal,
    /// No value may match (`NOT IN` semantics).
    NotEqual,
    /// Strictly greater than a single numeric value.
    GreaterThan,
    /// Strictly lower than a single numeric value.
    LowerThan,
}

impl Operator {
    /// True for the operators that compare numerically and accept exactly
    /// one value.
    #[must_use]
    pub const fn is_ordering(&self) -> bool {
        matches!(self, Self::GreaterThan | Self::LowerThan)
    }
}

impl fmt::Display for Operator {
    /// Renders the operator with its default token.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::GreaterThan => ">",
            Self::LowerThan => "<",
        };
        write!(f, "{token}")
    }
}

/// One predicate of a compiled filter: key, operator, values.
///
/// The key is the dotted path as written by the caller until compilation,
/// and the canonical wire-name path afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionEntry {
    /// Dotted path into the record type.
    pub key: String,
    /// Comparison operator.
    pub operator: Operator,
    /// Values to compare against; never empty. Ordering operators carry
    /// exactly one value, guaranteed numeric by the parser.
    pub values: Vec<String>,
}
