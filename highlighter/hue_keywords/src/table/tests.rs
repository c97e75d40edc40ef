use pretty_assertions::assert_eq;

use super::*;

#[test]
fn standard_table_is_built_from_disjoint_buckets() {
    let checked = CategoryTable::from_buckets(BUCKETS);
    assert!(checked.is_ok(), "{checked:?}");
    let total: usize = BUCKETS.iter().map(|(_, literals)| literals.len()).sum();
    assert_eq!(CategoryTable::standard().len(), total);
}

#[test]
fn counts_match_buckets() {
    let table = CategoryTable::standard();
    for (category, literals) in BUCKETS {
        assert_eq!(table.count_of(*category), literals.len(), "{category}");
    }
}

#[test]
fn duplicate_literal_is_rejected() {
    const OVERLAPPING: &[(Category, &[&str])] = &[
        (Category::SuccessKeyword, &["success", "true"]),
        (Category::TrueLiteral, &["true"]),
    ];
    let err = CategoryTable::from_buckets(OVERLAPPING).err();
    assert_eq!(
        err,
        Some(TableError::DuplicateLiteral {
            literal: "true",
            first: Category::SuccessKeyword,
            second: Category::TrueLiteral,
        })
    );
    assert_eq!(
        err.map(|e| e.to_string()).as_deref(),
        Some("literal `true` is assigned to both SuccessKeyword and TrueLiteral")
    );
}

#[test]
fn reassign_replaces_instead_of_adding() {
    // The sentinel buckets as they looked before literals got their own categories
    const LEGACY: &[(Category, &[&str])] = &[
        (Category::SuccessKeyword, &["success", "true"]),
        (Category::ErrorKeyword, &["error", "false", "null"]),
    ];
    let mut table = CategoryTable::from_buckets(LEGACY).unwrap_or_else(|err| panic!("{err}"));

    assert_eq!(table.reassign("true", Category::TrueLiteral), Some(Category::SuccessKeyword));
    assert_eq!(table.reassign("null", Category::NullLiteral), Some(Category::ErrorKeyword));
    assert_eq!(table.reassign("return", Category::ReturnKeyword), None);

    assert_eq!(table.len(), 6);
    assert_eq!(table.lookup("true"), Some(Category::TrueLiteral));
    assert_eq!(table.count_of(Category::SuccessKeyword), 1);
    assert_eq!(table.count_of(Category::ErrorKeyword), 2);
    assert_eq!(table.literals_of(Category::ErrorKeyword), vec!["error", "false"]);
    assert_eq!(table.lookup("return"), Some(Category::ReturnKeyword));
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    let table = CategoryTable::standard();
    assert_eq!(table.lookup("isset"), Some(Category::HandlingFunction));
    assert_eq!(table.lookup("Isset"), None);
    assert_eq!(table.lookup("ISSET"), None);
    assert_eq!(table.lookup("isset "), None);
    assert_eq!(table.lookup("isse"), None);
    assert_eq!(table.lookup("issetx"), None);
    assert_eq!(table.lookup("onSuccess"), Some(Category::SuccessKeyword));
    assert_eq!(table.lookup("onsuccess"), None);
}

#[test]
fn lookup_rejects_non_identifiers() {
    let table = CategoryTable::standard();
    for text in ["", "(", "::", "->", "$this", "1", "\u{200b}isset", "is_\u{200b}array"] {
        assert_eq!(table.lookup(text), None, "{text:?}");
    }
}

#[test]
fn lookup_rejects_overlong_text() {
    let table = CategoryTable::standard();
    let long = "sapi_windows_generate_ctrl_event_and_then_some";
    assert_eq!(table.lookup(long), None);
    assert_eq!(
        table.lookup("sapi_windows_generate_ctrl_event"),
        Some(Category::MiscFunction)
    );
}

#[test]
fn iter_covers_every_entry() {
    let table = CategoryTable::standard();
    let mut from_iter = 0;
    for (literal, category) in table.iter() {
        assert_eq!(table.lookup(literal), Some(category));
        from_iter += 1;
    }
    assert_eq!(from_iter, table.len());
    assert!(!table.is_empty());
    assert!(table.contains("array_merge"));
}
