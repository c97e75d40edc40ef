//! Demo documents for the color settings page, and the check that keeps
//! them honest.
//!
//! [`DEMO_TEXT`] is tagged markup. [`DemoDocument::parse`] strips the tags,
//! and [`validate`] runs the plain text through [`scan_leaves`] and the
//! annotator, failing on the first word the markup and the classifier
//! disagree about.

mod demo_text;
mod error;
mod markup;
mod scan;
mod validate;

pub use demo_text::{demo_document, DEMO_TEXT};
pub use error::DemoError;
pub use markup::{DemoDocument, TaggedSpan};
pub use scan::scan_leaves;
pub use validate::{validate, validate_with, ValidationReport};

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
