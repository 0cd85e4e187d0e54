//! Post-query filtering of record collections.
//!
//! This module provides the [`Filter`] entry point: compile a compact filter
//! expression once, then apply it to as many record collections as needed.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jsonsieve_core::Filter;
//!
//! let mut filter = Filter::new();
//! filter.init::<Order>("state=open,held:total>10.5")?;
//!
//! let kept = filter.apply(&orders)?;
//! ```

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::error;

use crate::compile;
use crate::condition::{ConditionEntry, Operator};
use crate::error::{Error, Result};
use crate::options::FilterOptions;
use crate::parse;
use crate::resolve;
use crate::schema::{Filterable, Shape};

/// A compiled post-query filter.
///
/// Owns its separator configuration and compiled predicate list, and is
/// stateless with respect to the records it filters: one compiled filter can
/// be applied to any number of collections of the same record type, including
/// concurrently (shared references only).
#[derive(Debug, Clone, Default)]
pub struct Filter {
    options: FilterOptions,
    conditions: Vec<ConditionEntry>,
}

impl Filter {
    /// Creates a filter with default options and no conditions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs separator options, sanitizing invalid fields to their
    /// defaults (with a warning per substitution).
    ///
    /// Must be called before [`init`](Self::init) to take effect on parsing.
    pub fn set_options(&mut self, options: FilterOptions) {
        self.options = options.sanitized();
    }

    /// The active separator options.
    #[must_use]
    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// The compiled predicate list. Empty until a successful
    /// [`init`](Self::init).
    #[must_use]
    pub fn conditions(&self) -> &[ConditionEntry] {
        &self.conditions
    }

    /// Parses and compiles a filter string against the shape of `T`.
    ///
    /// # Errors
    ///
    /// Returns any parse or compile error; the predicate list is left empty
    /// on failure, never partially compiled.
    pub fn init<T: Filterable>(&mut self, filter_text: &str) -> Result<()> {
        self.init_with_shape(filter_text, &T::shape())
    }

    /// Parses and compiles a filter string against an explicit record shape.
    ///
    /// # Errors
    ///
    /// Returns any parse or compile error; the predicate list is left empty
    /// on failure, never partially compiled.
    pub fn init_with_shape(&mut self, filter_text: &str, shape: &Shape) -> Result<()> {
        self.conditions.clear();
        let entries = parse::parse(filter_text, &self.options)?;
        self.conditions = compile::compile(entries, shape, &self.options)?;
        Ok(())
    }

    /// Applies the filter to a slice of records, returning the matching ones
    /// in their original relative order.
    ///
    /// The output is a fresh collection (input is never mutated or aliased);
    /// records are compared in their serialized form, so `T`'s serialization
    /// must agree with the shape given to [`init`](Self::init).
    ///
    /// # Errors
    ///
    /// Returns an error if a record fails to serialize.
    pub fn apply<T>(&self, records: &[T]) -> Result<Vec<T>>
    where
        T: Serialize + Clone,
    {
        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            let value = serde_json::to_value(record)?;
            if self.matches_value(&value) {
                kept.push(record.clone());
            }
        }
        Ok(kept)
    }

    /// Applies the filter to a JSON array of records.
    ///
    /// Dynamic counterpart of [`apply`](Self::apply) for callers holding raw
    /// JSON rather than typed records.
    ///
    /// # Errors
    ///
    /// Returns an error if `records` is not an array.
    pub fn apply_value(&self, records: &Value) -> Result<Value> {
        let Value::Array(items) = records else {
            error!("filter input is not an array, filters only apply to collections");
            return Err(Error::NotACollection);
        };

        let mut kept = Vec::with_capacity(items.len());
        for item in items {
            if self.matches_value(item) {
                kept.push(item.clone());
            }
        }
        Ok(Value::Array(kept))
    }

    /// Evaluates all compiled conditions against one serialized record.
    ///
    /// Conditions are AND'ed; evaluation stops at the first failing one.
    #[must_use]
    pub fn matches_value(&self, record: &Value) -> bool {
        self.conditions
            .iter()
            .all(|entry| self.entry_matches(entry, record))
    }

    fn entry_matches(&self, entry: &ConditionEntry, record: &Value) -> bool {
        let leaves = resolve::resolve(&entry.key, &self.options.composed_key_separator, record);

        match entry.operator {
            Operator::Equal => leaves.iter().any(|leaf| {
                let text = render(leaf);
                entry.values.iter().any(|value| *value == text)
            }),
            Operator::NotEqual => leaves.iter().all(|leaf| {
                let text = render(leaf);
                entry.values.iter().all(|value| *value != text)
            }),
            Operator::GreaterThan => ordering_matches(&leaves, &entry.values[0], f64::gt),
            Operator::LowerThan => ordering_matches(&leaves, &entry.values[0], f64::lt),
        }
    }
}

impl fmt::Display for Filter {
    /// Renders the compiled filter back to filter-text form with the
    /// configured tokens.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.conditions.iter().enumerate() {
            if index != 0 {
                write!(f, "{}", self.options.keys_separator)?;
            }
            let token = match entry.operator {
                Operator::Equal => &self.options.equal_separator,
                Operator::NotEqual => &self.options.not_equal_separator,
                Operator::GreaterThan => &self.options.greater_than_separator,
                Operator::LowerThan => &self.options.lower_than_separator,
            };
            write!(
                f,
                "{}{}{}",
                entry.key,
                token,
                entry.values.join(&self.options.value_separator)
            )?;
        }
        Ok(())
    }
}

/// Strict numeric comparison of leaves against the single threshold value.
///
/// Leaves that do not read as numbers are skipped, not errors: on
/// heterogeneous leaf sets only the numeric members compare.
fn ordering_matches(leaves: &[&Value], threshold: &str, keep: fn(&f64, &f64) -> bool) -> bool {
    // The parser guarantees the threshold is numeric.
    let Ok(threshold) = threshold.parse::<f64>() else {
        return false;
    };
    leaves
        .iter()
        .filter_map(|leaf| numeric(leaf))
        .any(|value| keep(&value, &threshold))
}

/// Textual rendering used for equality: strings render bare, everything else
/// through its JSON form (`10` -> "10", `10.5` -> "10.5", `true` -> "true").
fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Numeric reading used by the ordering operators: JSON numbers directly,
/// strings via `f64` parsing, everything else non-numeric.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.parse().ok(),
        _ => None,
    }
}
