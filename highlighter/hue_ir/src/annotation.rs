//! Highlight annotations produced for the host renderer.

use std::fmt;

use crate::{Category, Span};

/// How the host should surface an annotation.
///
/// Annotations are presentation hints only: they never show up in problem
/// views or gutter markers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    #[default]
    Information,
}

/// A categorized document range.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    pub category: Category,
    pub span: Span,
    pub severity: Severity,
}

impl Annotation {
    pub const fn new(category: Category, span: Span) -> Self {
        Annotation {
            category,
            span,
            severity: Severity::Information,
        }
    }
}

impl fmt::Debug for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:?}", self.category, self.span)
    }
}
