//! Leaf tokens handed over by the host lexer.

use std::fmt;

use crate::Span;

/// A leaf token of the host's syntax tree.
///
/// `text` is the exact source text (case preserved). `in_comment` records
/// whether the token sits lexically inside a comment; the host derives it
/// from its tree, the core never recomputes it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub text: String,
    pub span: Span,
    pub in_comment: bool,
}

impl Token {
    /// A code token, outside any comment.
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Token {
            text: text.into(),
            span,
            in_comment: false,
        }
    }

    /// A token inside a comment.
    pub fn commented(text: impl Into<String>, span: Span) -> Self {
        Token {
            text: text.into(),
            span,
            in_comment: true,
        }
    }

    #[inline]
    pub fn start(&self) -> u32 {
        self.span.start
    }

    #[inline]
    pub fn end(&self) -> u32 {
        self.span.end
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?}", self.text, self.span)?;
        if self.in_comment {
            f.write_str(" (comment)")?;
        }
        Ok(())
    }
}
