//! Tests for the path evaluator.

#[cfg(test)]
mod tests {
    use crate::resolve::resolve;
    use serde_json::{json, Value};

    fn leaves(key: &str, record: &Value) -> Vec<Value> {
        resolve(key, ".", record).into_iter().cloned().collect()
    }

    // ========================================================================
    // Scalars and nesting
    // ========================================================================

    #[test]
    fn test_resolve_root_scalar() {
        let record = json!({"name": "Alice", "age": 30});

        assert_eq!(leaves("name", &record), vec![json!("Alice")]);
        assert_eq!(leaves("age", &record), vec![json!(30)]);
    }

    #[test]
    fn test_resolve_nested_scalar() {
        let record = json!({"profile": {"address": {"city": "Paris"}}});

        assert_eq!(leaves("profile.address.city", &record), vec![json!("Paris")]);
    }

    #[test]
    fn test_resolve_missing_key_yields_nothing() {
        let record = json!({"name": "Alice"});

        assert!(leaves("missing", &record).is_empty());
        assert!(leaves("name.deeper", &record).is_empty());
    }

    #[test]
    fn test_resolve_null_branch_yields_nothing() {
        let record = json!({"maybe": null});

        assert!(leaves("maybe", &record).is_empty());
        assert!(leaves("maybe.inner", &record).is_empty());
    }

    // ========================================================================
    // Fan-out
    // ========================================================================

    #[test]
    fn test_resolve_array_of_structs_fans_out() {
        let record = json!({"items": [{"sku": "A1"}, {"sku": "B2"}, {"sku": "C3"}]});

        assert_eq!(
            leaves("items.sku", &record),
            vec![json!("A1"), json!("B2"), json!("C3")]
        );
    }

    #[test]
    fn test_resolve_array_leaf_flattens_elements() {
        let record = json!({"tags": ["a", "b"]});

        assert_eq!(leaves("tags", &record), vec![json!("a"), json!("b")]);
    }

    #[test]
    fn test_resolve_matrix_flattens_depth_first() {
        let record = json!({"matrix": [["AA", "AB"], ["BA", "BB"], ["CA"]]});

        assert_eq!(
            leaves("matrix", &record),
            vec![
                json!("AA"),
                json!("AB"),
                json!("BA"),
                json!("BB"),
                json!("CA")
            ]
        );
    }

    #[test]
    fn test_resolve_array_drops_null_elements() {
        // Nulls are absent optionals and contribute nothing.
        let record = json!({"items": [{"sku": "A1"}, null, {"sku": "C3"}]});

        assert_eq!(
            leaves("items.sku", &record),
            vec![json!("A1"), json!("C3")]
        );
    }

    #[test]
    fn test_resolve_fan_out_skips_branches_without_key() {
        let record = json!({"items": [{"sku": "A1"}, {"qty": 2}]});

        assert_eq!(leaves("items.sku", &record), vec![json!("A1")]);
    }

    // ========================================================================
    // Maps
    // ========================================================================

    #[test]
    fn test_resolve_map_entry() {
        let record = json!({"maps": {"entry1": {"key1": "val5"}}});

        assert_eq!(leaves("maps.entry1.key1", &record), vec![json!("val5")]);
    }

    #[test]
    fn test_resolve_map_missing_entry_yields_nothing() {
        let record = json!({"maps": {"entry1": {"key1": "val5"}}});

        assert!(leaves("maps.entry2.key1", &record).is_empty());
    }

    #[test]
    fn test_resolve_map_of_array_of_structs() {
        let record = json!({
            "maps": {
                "entry1": [{"sub": "s3"}, {"sub": "s4"}],
                "entry2": [{"sub": "s5"}]
            }
        });

        assert_eq!(
            leaves("maps.entry1.sub", &record),
            vec![json!("s3"), json!("s4")]
        );
    }

    // ========================================================================
    // Degenerate inputs
    // ========================================================================

    #[test]
    fn test_resolve_non_object_root_yields_nothing() {
        assert!(leaves("key", &json!(42)).is_empty());
        assert!(leaves("key", &json!(null)).is_empty());
    }

    #[test]
    fn test_resolve_object_leaf_is_returned_whole() {
        let record = json!({"nested": {"a": 1}});

        assert_eq!(leaves("nested", &record), vec![json!({"a": 1})]);
    }
}
