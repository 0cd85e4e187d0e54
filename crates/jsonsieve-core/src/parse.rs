//! Filter-text parser.
//!
//! Turns the raw filter string into an ordered list of condition entries.
//! The grammar is entirely token-driven: every separator comes from the
//! active [`FilterOptions`], so the same parser serves custom grammars
//! (e.g. `->` for composed keys) without change.

use crate::condition::{ConditionEntry, Operator};
use crate::error::{Error, Result};
use crate::options::FilterOptions;

/// Parses a filter string into condition entries.
///
/// Conditions are separated by `keys_separator`; each fragment is split on
/// the operator token it contains, with the longest structurally-matching
/// token winning (so `!=` beats `=` in `k!=v`).
///
/// # Errors
///
/// Returns an error for fragments with no recognizable operator, empty keys,
/// keys deeper than `max_depth`, duplicate (key, operator) pairs, or ordering
/// operators given more than one value or a non-numeric one.
pub(crate) fn parse(input: &str, options: &FilterOptions) -> Result<Vec<ConditionEntry>> {
    let mut entries: Vec<ConditionEntry> = Vec::new();

    for fragment in input.split(options.keys_separator.as_str()) {
        let Some((operator, key, value_part)) = split_operator(fragment, options) else {
            return Err(Error::MissingValue(fragment.to_string()));
        };

        if key.is_empty() {
            return Err(Error::MissingKey(fragment.to_string()));
        }

        if options.max_depth > 0 {
            let depth = key.split(options.composed_key_separator.as_str()).count();
            if depth > options.max_depth {
                return Err(Error::DepthExceeded {
                    key: key.to_string(),
                    max_depth: options.max_depth,
                });
            }
        }

        if entries
            .iter()
            .any(|entry| entry.key == key && entry.operator == operator)
        {
            return Err(Error::DuplicateKey {
                key: key.to_string(),
                operator,
            });
        }

        // Splitting a (possibly empty) value part always yields at least one
        // element; an empty value part is a single empty-string literal.
        let values: Vec<String> = value_part
            .split(options.value_separator.as_str())
            .map(str::to_string)
            .collect();

        if operator.is_ordering() {
            if values.len() > 1 {
                return Err(Error::SingleValueExpected(operator));
            }
            if values[0].parse::<f64>().is_err() {
                return Err(Error::NumericValueExpected {
                    operator,
                    value: values[0].clone(),
                });
            }
        }

        entries.push(ConditionEntry {
            key: key.to_string(),
            operator,
            values,
        });
    }

    Ok(entries)
}

/// Finds the operator of a fragment and splits it into (key, value part).
///
/// A token structurally matches when splitting on it yields exactly two
/// parts. When several tokens match (one being a substring of another), the
/// longest token wins.
fn split_operator<'a>(
    fragment: &'a str,
    options: &FilterOptions,
) -> Option<(Operator, &'a str, &'a str)> {
    let candidates = [
        (Operator::Equal, options.equal_separator.as_str()),
        (Operator::NotEqual, options.not_equal_separator.as_str()),
        (Operator::GreaterThan, options.greater_than_separator.as_str()),
        (Operator::LowerThan, options.lower_than_separator.as_str()),
    ];

    let mut found: Option<(Operator, &'a str, &'a str)> = None;
    let mut found_len = 0usize;

    for (operator, token) in candidates {
        let parts: Vec<&str> = fragment.split(token).collect();
        if parts.len() == 2 && token.len() > found_len {
            found = Some((operator, parts[0], parts[1]));
            found_len = token.len();
        }
    }

    found
}
