use hue_ir::Span;
use pretty_assertions::assert_eq;

use super::*;

fn tagged(tag: &str, start: u32, end: u32, literal: &str) -> TaggedSpan {
    TaggedSpan {
        tag: tag.to_owned(),
        span: Span::new(start, end),
        literal: literal.to_owned(),
    }
}

#[test]
fn strips_markers_and_records_ranges() {
    let document = DemoDocument::parse("<use>namespace</use> Foo;").unwrap();
    assert_eq!(document.plain(), "namespace Foo;");
    assert_eq!(document.spans(), &[tagged("use", 0, 9, "namespace")]);
}

#[test]
fn untagged_text_passes_through() {
    let document = DemoDocument::parse("<?php $a <= $b; $c < 3;").unwrap();
    assert_eq!(document.plain(), "<?php $a <= $b; $c < 3;");
    assert!(document.spans().is_empty());
}

#[test]
fn angle_bracket_without_closing_is_plain() {
    let document = DemoDocument::parse("$a <b $c").unwrap();
    assert_eq!(document.plain(), "$a <b $c");
}

#[test]
fn adjacent_spans_stay_in_document_order() {
    let document =
        DemoDocument::parse("<modifier>public</modifier> <function>function</function>").unwrap();
    assert_eq!(document.plain(), "public function");
    assert_eq!(
        document.spans(),
        &[
            tagged("modifier", 0, 6, "public"),
            tagged("function", 7, 15, "function"),
        ]
    );
}

#[test]
fn nested_spans_list_outer_first() {
    let document = DemoDocument::parse("<fn><static>static</static>()</fn>").unwrap();
    assert_eq!(document.plain(), "static()");
    assert_eq!(
        document.spans(),
        &[tagged("fn", 0, 8, "static()"), tagged("static", 0, 6, "static")]
    );
}

#[test]
fn empty_pair_gives_empty_span() {
    let document = DemoDocument::parse("a<var></var>b").unwrap();
    assert_eq!(document.plain(), "ab");
    assert_eq!(document.spans(), &[tagged("var", 1, 1, "")]);
}

#[test]
fn unclosed_tag_is_reported_at_its_marker() {
    let err = DemoDocument::parse("x <use>namespace").unwrap_err();
    assert_eq!(
        err,
        DemoError::UnclosedTag {
            tag: "use".to_owned(),
            span: Span::new(2, 7),
        }
    );
}

#[test]
fn stray_closing_tag() {
    let err = DemoDocument::parse("namespace</use>").unwrap_err();
    assert_eq!(
        err,
        DemoError::UnexpectedClosingTag {
            tag: "use".to_owned(),
            span: Span::new(9, 15),
        }
    );
}

#[test]
fn crossed_tags() {
    let err = DemoDocument::parse("<a><b>x</a></b>").unwrap_err();
    assert_eq!(
        err,
        DemoError::MismatchedClosingTag {
            expected: "b".to_owned(),
            found: "a".to_owned(),
            span: Span::new(7, 11),
        }
    );
}

#[test]
fn error_messages_name_the_tag() {
    let err = DemoDocument::parse("<use>namespace").unwrap_err();
    assert_eq!(err.to_string(), "unclosed tag `<use>` at 0..5");
}
