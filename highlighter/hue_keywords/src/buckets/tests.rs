use pretty_assertions::assert_eq;
use rustc_hash::FxHashMap;

use super::*;

#[test]
fn one_bucket_per_category_in_declaration_order() {
    let order: Vec<Category> = BUCKETS.iter().map(|(category, _)| *category).collect();
    assert_eq!(order, Category::ALL.to_vec());
}

#[test]
fn no_bucket_is_empty() {
    for (category, literals) in BUCKETS {
        assert!(!literals.is_empty(), "{category} has no literals");
    }
}

#[test]
fn literals_are_sorted_within_buckets() {
    for (category, literals) in BUCKETS {
        for pair in literals.windows(2) {
            assert!(
                pair[0] < pair[1],
                "{category}: `{}` should come after `{}`",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn no_literal_appears_in_two_buckets() {
    let mut seen: FxHashMap<&str, Category> = FxHashMap::default();
    for (category, literals) in BUCKETS {
        for literal in *literals {
            if let Some(first) = seen.insert(*literal, *category) {
                panic!("`{literal}` is in both {first} and {category}");
            }
        }
    }
}

// Copy-pasted documentation names once smuggled U+200B into literals.
#[test]
fn literals_are_plain_php_identifiers() {
    for (category, literals) in BUCKETS {
        for literal in *literals {
            let mut bytes = literal.bytes();
            let first_ok = bytes
                .next()
                .is_some_and(|b| b.is_ascii_alphabetic() || b == b'_');
            let rest_ok = bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_');
            assert!(first_ok && rest_ok, "{category}: `{literal:?}` is not an identifier");
        }
    }
}
