use pretty_assertions::assert_eq;

use super::*;

#[test]
fn all_is_in_discriminant_order() {
    for (i, category) in Category::ALL.iter().enumerate() {
        assert_eq!(category.index(), i, "{category} is out of order");
    }
}

#[test]
fn names_are_unique() {
    let mut names: Vec<_> = Category::ALL.iter().map(|c| c.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), Category::COUNT);
}

#[test]
fn display_uses_name() {
    assert_eq!(Category::TrueLiteral.to_string(), "TrueLiteral");
    assert_eq!(Category::HandlingFunction.to_string(), "HandlingFunction");
}
