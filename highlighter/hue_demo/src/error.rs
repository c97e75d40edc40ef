//! Demo validation errors.
//!
//! Markup errors carry spans into the markup text. Every other variant
//! carries spans into the plain (tag-stripped) document.

use hue_ir::{Category, Span, SpanError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DemoError {
    #[error("unclosed tag `<{tag}>` at {span}")]
    UnclosedTag { tag: String, span: Span },

    #[error("closing tag `</{tag}>` at {span} has no opening tag")]
    UnexpectedClosingTag { tag: String, span: Span },

    #[error("closing tag `</{found}>` at {span} does not close `<{expected}>`")]
    MismatchedClosingTag {
        expected: String,
        found: String,
        span: Span,
    },

    /// The tag names neither a category nor a host baseline style.
    #[error("unknown tag `<{tag}>` around `{literal}` at {span}")]
    UnknownTag {
        tag: String,
        literal: String,
        span: Span,
    },

    /// The classifier disagrees with the markup.
    #[error("`{literal}` at {span}: markup expects {expected}, classifier gives {}", or_none(.actual))]
    AnnotationMismatch {
        literal: String,
        span: Span,
        expected: Category,
        actual: Option<Category>,
    },

    /// A span left to the host's baseline styling got a category anyway.
    #[error("`{literal}` at {span} is tagged `<{tag}>` for the host but classifies as {actual}")]
    BaselineAnnotated {
        literal: String,
        span: Span,
        tag: String,
        actual: Category,
    },

    /// The classifier highlights a token the markup leaves untagged.
    #[error("`{literal}` at {span} classifies as {category} but is not tagged")]
    UntaggedAnnotation {
        literal: String,
        span: Span,
        category: Category,
    },

    #[error("demo document does not fit 32-bit offsets: {0}")]
    TooLarge(#[from] SpanError),
}

fn or_none(category: &Option<Category>) -> &'static str {
    category.map_or("none", Category::name)
}
