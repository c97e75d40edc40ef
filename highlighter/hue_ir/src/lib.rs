//! Shared data model of the PHP keyword highlighter.
//!
//! - [`Token`]: a leaf token supplied by the host lexer
//! - [`Category`]: the closed set of highlight categories
//! - [`Annotation`]: a categorized range handed back to the host
//!
//! Tokens and annotations are per-document values; nothing here holds state.

mod annotation;
mod category;
mod span;
mod token;

pub use annotation::{Annotation, Severity};
pub use category::Category;
pub use span::{Span, SpanError};
pub use token::Token;
