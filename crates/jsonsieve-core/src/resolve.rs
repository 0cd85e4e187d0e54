//! Path evaluator.
//!
//! Given a canonical key and one record in serialized form, produces every
//! leaf value the key denotes. Walking never fails: absent branches simply
//! contribute no values.

use serde_json::Value;

/// Resolves a canonical key against one record, fanning out across nested
/// collections.
///
/// The record is scanned in its serialized form, where structs and maps are
/// both objects keyed by wire names. Per segment, every value under scan is
/// replaced by what the segment denotes inside it: nothing for missing keys
/// and null branches, every flattened element for arrays (including nested
/// arrays), the value itself otherwise.
pub(crate) fn resolve<'a>(key: &str, separator: &str, record: &'a Value) -> Vec<&'a Value> {
    let mut scan: Vec<&'a Value> = vec![record];

    for segment in key.split(separator) {
        let mut next: Vec<&'a Value> = Vec::new();
        for value in scan {
            let Some(found) = value.as_object().and_then(|entries| entries.get(segment)) else {
                continue;
            };
            collect(found, &mut next);
        }
        scan = next;
    }

    scan
}

/// Appends the leaves of `value`: arrays flatten depth-first in element
/// order, nulls drop, everything else is one leaf.
fn collect<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
    match value {
        Value::Null => {}
        Value::Array(items) => {
            for item in items {
                collect(item, out);
            }
        }
        other => out.push(other),
    }
}
