//! Schema resolver.
//!
//! Rewrites each parsed condition key into its canonical form, validated
//! against the record shape. Sequences and optionals are transparent, map
//! segments pass through verbatim, and record segments resolve by alias
//! first, declared name second.

use tracing::debug;

use crate::condition::ConditionEntry;
use crate::error::{Error, Result};
use crate::options::FilterOptions;
use crate::schema::Shape;

/// Canonicalizes parsed entries against a record shape.
///
/// Every entry key is rewritten to its wire-name path; the full list
/// compiles or the whole call fails.
///
/// # Errors
///
/// Returns an error when a key segment resolves to no field, or when two
/// spellings of the same key collapse onto one (canonical key, operator)
/// pair.
pub(crate) fn compile(
    entries: Vec<ConditionEntry>,
    shape: &Shape,
    options: &FilterOptions,
) -> Result<Vec<ConditionEntry>> {
    let separator = options.composed_key_separator.as_str();
    let mut compiled: Vec<ConditionEntry> = Vec::with_capacity(entries.len());

    for mut entry in entries {
        let canonical = canonicalize(&entry.key, shape, separator)?;

        if compiled
            .iter()
            .any(|done| done.key == canonical && done.operator == entry.operator)
        {
            return Err(Error::DuplicateKey {
                key: canonical,
                operator: entry.operator,
            });
        }

        entry.key = canonical;
        compiled.push(entry);
    }

    Ok(compiled)
}

/// Walks a composed key through the shape, accumulating wire names.
fn canonicalize(key: &str, root: &Shape, separator: &str) -> Result<String> {
    let mut canonical = String::new();
    let mut cursor = root;

    for (index, segment) in key.split(separator).enumerate() {
        let part = match unwrap_containers(cursor) {
            // Map entries are not schema-resolved: the segment is the key.
            Shape::Map(value) => {
                cursor = value.as_ref();
                segment
            }
            Shape::Record(fields) => {
                let field = fields
                    .iter()
                    .find(|field| field.rename() == Some(segment))
                    .or_else(|| fields.iter().find(|field| field.name() == segment))
                    .ok_or_else(|| {
                        debug!(segment, path = %canonical, "filter key segment not found in record shape");
                        Error::UnknownKey {
                            segment: segment.to_string(),
                            path: canonical.clone(),
                        }
                    })?;
                cursor = field.shape();
                field.wire_name()
            }
            _ => {
                debug!(segment, path = %canonical, "filter key descends below a scalar");
                return Err(Error::UnknownKey {
                    segment: segment.to_string(),
                    path: canonical.clone(),
                });
            }
        };

        if index != 0 {
            canonical.push_str(separator);
        }
        canonical.push_str(part);
    }

    Ok(canonical)
}

/// Strips optional and sequence wrappers, in any interleaving. Sequence
/// positions are not addressable by key, so tensors of any rank collapse to
/// their innermost element shape.
fn unwrap_containers(shape: &Shape) -> &Shape {
    let mut current = shape;
    loop {
        match current {
            Shape::Optional(inner) | Shape::Sequence(inner) => current = inner.as_ref(),
            other => return other,
        }
    }
}
