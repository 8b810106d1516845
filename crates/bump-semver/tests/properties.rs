//! Property-based tests for parsing round trips and precedence laws

use bump_semver::{compare, parse, Version};
use proptest::prelude::*;
use std::cmp::Ordering;

fn identifier() -> impl Strategy<Value = String> {
    prop_oneof![
        "[1-9][0-9]{0,5}",
        Just("0".to_string()),
        "[a-zA-Z-][0-9a-zA-Z-]{0,7}",
    ]
}

fn version() -> impl Strategy<Value = Version> {
    (
        0u64..50,
        0u64..50,
        0u64..50,
        prop::collection::vec(identifier(), 0..4),
        prop::collection::vec("[0-9a-zA-Z-]{1,8}", 0..3),
    )
        .prop_map(|(major, minor, patch, prerelease, metadata)| {
            Version::new(major, minor, patch)
                .with_prerelease(prerelease)
                .and_then(|v| v.with_metadata(metadata))
                .unwrap()
        })
}

proptest! {
    #[test]
    fn test_render_parse_round_trip(v in version()) {
        prop_assert_eq!(parse(&v.to_string(), false).unwrap(), v.clone());
        prop_assert_eq!(parse(&v.to_prefixed_string('v'), true).unwrap(), v);
    }

    #[test]
    fn test_compare_is_antisymmetric(a in version(), b in version()) {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
    }

    #[test]
    fn test_compare_is_transitive(a in version(), b in version(), c in version()) {
        if compare(&a, &b) != Ordering::Greater && compare(&b, &c) != Ordering::Greater {
            prop_assert_ne!(compare(&a, &c), Ordering::Greater);
        }
        if a.less_than(&b) && b.less_than(&c) {
            prop_assert!(a.less_than(&c));
        }
    }

    #[test]
    fn test_exactly_one_relation(a in version(), b in version()) {
        let relations = [a.less_than(&b), a.equal_to(&b), a.greater_than(&b)];
        prop_assert_eq!(relations.iter().filter(|r| **r).count(), 1);
    }

    #[test]
    fn test_metadata_has_no_weight(a in version(), meta in prop::collection::vec("[0-9a-zA-Z-]{1,8}", 1..3)) {
        let b = a.with_metadata(meta).unwrap();
        prop_assert_eq!(compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_increments_are_greater(a in version()) {
        prop_assert!(a.increment_patch().unwrap().greater_than(&a));
        prop_assert!(a.increment_minor().unwrap().greater_than(&a));
        prop_assert!(a.increment_major().unwrap().greater_than(&a));
    }
}
