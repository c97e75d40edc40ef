use hue_highlight::{Annotator, CategoryTable, Classifier, DescriptorRegistry};
use hue_ir::{Category, Span};
use pretty_assertions::assert_eq;

use super::*;

fn check(markup: &str) -> Result<ValidationReport, DemoError> {
    validate(&DemoDocument::parse(markup).unwrap())
}

#[test]
fn agreeing_markup_passes() {
    let report = check("<modifier>public</modifier> <function>function</function> <fn>f</fn>() {}")
        .unwrap();
    assert_eq!(
        report,
        ValidationReport {
            category_spans: 2,
            baseline_spans: 1,
            annotations: 2,
        }
    );
}

#[test]
fn empty_document_passes() {
    assert_eq!(check("").unwrap(), ValidationReport::default());
}

#[test]
fn unknown_tag_fails_before_anything_else() {
    let err = check("<modifier>null</modifier> <bogus>x</bogus>").unwrap_err();
    assert_eq!(
        err,
        DemoError::UnknownTag {
            tag: "bogus".to_owned(),
            literal: "x".to_owned(),
            span: Span::new(5, 6),
        }
    );
}

#[test]
fn wrong_category_is_a_mismatch() {
    let err = check("<modifier>null</modifier>;").unwrap_err();
    assert_eq!(
        err,
        DemoError::AnnotationMismatch {
            literal: "null".to_owned(),
            span: Span::new(0, 4),
            expected: Category::Modifier,
            actual: Some(Category::NullLiteral),
        }
    );
}

#[test]
fn unknown_word_under_category_tag_is_a_mismatch() {
    let err = check("<null>nil</null>").unwrap_err();
    assert!(matches!(
        err,
        DemoError::AnnotationMismatch { actual: None, expected: Category::NullLiteral, .. }
    ));
}

#[test]
fn partial_span_is_a_mismatch() {
    // `is` alone is not a token; `is_array` is.
    let err = check("<php_function>is</php_function>_array($a)").unwrap_err();
    assert!(matches!(err, DemoError::AnnotationMismatch { actual: None, .. }));
}

#[test]
fn commented_keyword_under_category_tag_is_a_mismatch() {
    let err = check("// <null>null</null>").unwrap_err();
    assert!(matches!(err, DemoError::AnnotationMismatch { actual: None, .. }));
}

#[test]
fn baseline_tag_over_keyword_fails() {
    let err = check("<keyword>return</keyword> 1;").unwrap_err();
    assert_eq!(
        err,
        DemoError::BaselineAnnotated {
            literal: "return".to_owned(),
            span: Span::new(0, 6),
            tag: "keyword".to_owned(),
            actual: Category::ReturnKeyword,
        }
    );
}

#[test]
fn baseline_tag_around_plain_words_passes() {
    let report = check("<keyword>class</keyword> <class>Foo</class> {}").unwrap();
    assert_eq!(report.baseline_spans, 2);
    assert_eq!(report.annotations, 0);
}

#[test]
fn untagged_keyword_fails() {
    let err = check("<modifier>public</modifier> static $x;").unwrap_err();
    assert_eq!(
        err,
        DemoError::UntaggedAnnotation {
            literal: "static".to_owned(),
            span: Span::new(7, 13),
            category: Category::StaticFinal,
        }
    );
}

#[test]
fn earlier_untagged_keyword_wins_over_later_mismatch() {
    let err = check("return; <null>true</null>;").unwrap_err();
    assert_eq!(
        err,
        DemoError::UntaggedAnnotation {
            literal: "return".to_owned(),
            span: Span::new(0, 6),
            category: Category::ReturnKeyword,
        }
    );
}

#[test]
fn earlier_mismatch_wins_over_later_untagged_keyword() {
    let err = check("<null>true</null>; return;").unwrap_err();
    assert!(matches!(
        err,
        DemoError::AnnotationMismatch {
            expected: Category::NullLiteral,
            actual: Some(Category::TrueLiteral),
            ..
        }
    ));
}

#[test]
fn untagged_keyword_between_tagged_spans() {
    let err = check("<modifier>public</modifier> static <function>function</function>")
        .unwrap_err();
    assert!(matches!(
        err,
        DemoError::UntaggedAnnotation { category: Category::StaticFinal, .. }
    ));
}

#[test]
fn untagged_keyword_in_comment_passes() {
    let report = check("// static public null\n<null>null</null>;").unwrap();
    assert_eq!(report.annotations, 1);
}

#[test]
fn custom_table_changes_the_verdict() {
    const LITERALS: &[&str] = &["nil"];
    let table = CategoryTable::from_buckets(&[(Category::NullLiteral, LITERALS)]).unwrap();
    let annotator = Annotator::new(Classifier::new(&table));
    let document = DemoDocument::parse("<null>nil</null> null").unwrap();
    let report = validate_with(&document, &annotator, DescriptorRegistry::standard()).unwrap();
    assert_eq!(report.category_spans, 1);
}

#[test]
fn error_message_reports_missing_classification() {
    let err = check("<null>nil</null>").unwrap_err();
    assert_eq!(
        err.to_string(),
        "`nil` at 0..3: markup expects NullLiteral, classifier gives none"
    );
}
