//! Tests for the filter-text parser.

#[cfg(test)]
mod tests {
    use crate::condition::Operator;
    use crate::error::Error;
    use crate::options::FilterOptions;
    use crate::parse::parse;

    fn options() -> FilterOptions {
        FilterOptions::default()
    }

    // ========================================================================
    // Operator detection
    // ========================================================================

    #[test]
    fn test_parse_minimal_equal() {
        let entries = parse("key1=val1", &options()).expect("parse");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, "key1");
        assert_eq!(entries[0].operator, Operator::Equal);
        assert_eq!(entries[0].values, vec!["val1"]);
    }

    #[test]
    fn test_parse_multi_values() {
        let entries = parse("key1=val1,val2,val3", &options()).expect("parse");

        assert_eq!(entries[0].values, vec!["val1", "val2", "val3"]);
    }

    #[test]
    fn test_parse_not_equal_wins_over_equal() {
        // '=' also splits "key1!=val1" into two parts; the longer token wins.
        let entries = parse("key1!=val1", &options()).expect("parse");

        assert_eq!(entries[0].key, "key1");
        assert_eq!(entries[0].operator, Operator::NotEqual);
    }

    #[test]
    fn test_parse_ordering_operators() {
        let entries = parse("key1>4.5:key2<-5", &options()).expect("parse");

        assert_eq!(entries[0].operator, Operator::GreaterThan);
        assert_eq!(entries[0].values, vec!["4.5"]);
        assert_eq!(entries[1].operator, Operator::LowerThan);
        assert_eq!(entries[1].values, vec!["-5"]);
    }

    #[test]
    fn test_parse_complex_filter() {
        let entries = parse("key1!=val1,val2,val3:key2<4.5:key3>-5", &options()).expect("parse");

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].operator, Operator::NotEqual);
        assert_eq!(entries[0].values.len(), 3);
        assert_eq!(entries[1].operator, Operator::LowerThan);
        assert_eq!(entries[2].operator, Operator::GreaterThan);
    }

    // ========================================================================
    // Value handling
    // ========================================================================

    #[test]
    fn test_parse_empty_value_part_is_one_empty_literal() {
        let entries = parse("key1=", &options()).expect("parse");

        assert_eq!(entries[0].values, vec![String::new()]);
    }

    #[test]
    fn test_parse_same_key_different_operators_accepted() {
        let entries = parse("key1=val1:key1!=val2", &options()).expect("parse");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operator, Operator::Equal);
        assert_eq!(entries[1].operator, Operator::NotEqual);
    }

    // ========================================================================
    // Errors
    // ========================================================================

    #[test]
    fn test_parse_fragment_without_operator_fails() {
        let err = parse("key1", &options()).unwrap_err();

        assert!(matches!(err, Error::MissingValue(_)));
        assert_eq!(err.code(), "SIEVE-001");
    }

    #[test]
    fn test_parse_empty_input_fails() {
        assert!(matches!(parse("", &options()), Err(Error::MissingValue(_))));
    }

    #[test]
    fn test_parse_empty_key_fails() {
        let err = parse("=val1", &options()).unwrap_err();

        assert!(matches!(err, Error::MissingKey(_)));
    }

    #[test]
    fn test_parse_lone_operator_fails() {
        assert!(matches!(parse("=", &options()), Err(Error::MissingKey(_))));
    }

    #[test]
    fn test_parse_three_way_split_fails() {
        // "a=b=c" splits into three parts on '=', so no operator matches.
        let err = parse("a=b=c", &options()).unwrap_err();

        assert!(matches!(err, Error::MissingValue(_)));
    }

    #[test]
    fn test_parse_duplicate_key_same_operator_fails() {
        let err = parse("key1=val1:key1=val2", &options()).unwrap_err();

        assert!(matches!(err, Error::DuplicateKey { .. }));
        assert_eq!(err.code(), "SIEVE-004");
    }

    #[test]
    fn test_parse_greater_than_multiple_values_fails() {
        let err = parse("key1>1,2", &options()).unwrap_err();

        assert!(matches!(
            err,
            Error::SingleValueExpected(Operator::GreaterThan)
        ));
    }

    #[test]
    fn test_parse_lower_than_multiple_values_fails() {
        assert!(matches!(
            parse("key1<1,2", &options()),
            Err(Error::SingleValueExpected(Operator::LowerThan))
        ));
    }

    #[test]
    fn test_parse_greater_than_non_numeric_fails() {
        let err = parse("key1>val1", &options()).unwrap_err();

        assert!(matches!(err, Error::NumericValueExpected { .. }));
        assert_eq!(err.code(), "SIEVE-006");
    }

    #[test]
    fn test_parse_lower_than_non_numeric_fails() {
        assert!(matches!(
            parse("key1<val1", &options()),
            Err(Error::NumericValueExpected { .. })
        ));
    }

    // ========================================================================
    // Depth limit
    // ========================================================================

    #[test]
    fn test_parse_depth_within_limit() {
        let mut opts = options();
        opts.max_depth = 2;

        assert!(parse("key1.sub=val1", &opts).is_ok());
    }

    #[test]
    fn test_parse_depth_exceeded_fails() {
        let mut opts = options();
        opts.max_depth = 1;

        let err = parse("key1.tooDeep=val1", &opts).unwrap_err();

        assert!(matches!(err, Error::DepthExceeded { max_depth: 1, .. }));
    }

    #[test]
    fn test_parse_zero_depth_is_unbounded() {
        let opts = options();

        assert!(parse("a.b.c.d.e.f=val1", &opts).is_ok());
    }

    // ========================================================================
    // Custom separators
    // ========================================================================

    #[test]
    fn test_parse_custom_separators() {
        let opts = FilterOptions {
            keys_separator: ";".to_string(),
            value_separator: "|".to_string(),
            composed_key_separator: "->".to_string(),
            ..FilterOptions::default()
        };

        let entries = parse("a->b=v1|v2;c!=v3", &opts).expect("parse");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, "a->b");
        assert_eq!(entries[0].values, vec!["v1", "v2"]);
        assert_eq!(entries[1].operator, Operator::NotEqual);
    }

    #[test]
    fn test_parse_custom_depth_counts_custom_separator() {
        let opts = FilterOptions {
            composed_key_separator: "->".to_string(),
            max_depth: 1,
            ..FilterOptions::default()
        };

        assert!(matches!(
            parse("a->b=v1", &opts),
            Err(Error::DepthExceeded { .. })
        ));
        // A dot is an ordinary key character under this configuration.
        assert!(parse("a.b=v1", &opts).is_ok());
    }
}
