//! The packaged settings-page demo must agree with the classifier.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use hue::{
    demo_document, validate, Category, DemoError, DescriptorRegistry, ValidationReport,
    DEMO_TEXT,
};
use pretty_assertions::assert_eq;

#[test]
fn demo_document_reproduces_its_markup() {
    let document = demo_document().expect("demo markup parses");
    let report: ValidationReport = validate(&document).expect("demo is self-consistent");
    assert_eq!(report.annotations, report.category_spans);
}

#[test]
fn every_category_tag_appears_in_demo_text() {
    let registry = DescriptorRegistry::standard();
    for category in registry.all_categories() {
        let marker = format!("<{}>", registry.tag_of(category));
        assert!(DEMO_TEXT.contains(&marker), "{category} missing from demo");
    }
}

#[test]
fn every_baseline_tag_appears_in_demo_text() {
    let registry = DescriptorRegistry::standard();
    for baseline in registry.baselines() {
        let marker = format!("<{}>", baseline.tag());
        assert!(DEMO_TEXT.contains(&marker), "{marker} missing from demo");
    }
}

#[test]
fn editing_the_demo_breaks_validation() {
    let broken = DEMO_TEXT.replacen("<null>null</null>", "<true>null</true>", 1);
    let document = hue::DemoDocument::parse(&broken).unwrap();
    let err = validate(&document).unwrap_err();
    assert!(
        matches!(
            err,
            DemoError::AnnotationMismatch {
                expected: Category::TrueLiteral,
                actual: Some(Category::NullLiteral),
                ..
            }
        ),
        "{err}"
    );
}

#[test]
fn untagging_a_keyword_breaks_validation() {
    let broken = DEMO_TEXT.replacen("<return>return</return>", "return", 1);
    let document = hue::DemoDocument::parse(&broken).unwrap();
    let err = validate(&document).unwrap_err();
    assert!(matches!(
        err,
        DemoError::UntaggedAnnotation {
            category: Category::ReturnKeyword,
            ..
        }
    ));
}
