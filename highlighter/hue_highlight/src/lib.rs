//! Highlighting pipeline for PHP leaf tokens.
//!
//! ```text
//! tokens ──▶ Annotator ──▶ annotations ──▶ host renderer
//!               │                              │
//!           Classifier                 DescriptorRegistry
//!                                      (category → style key)
//! ```
//!
//! Everything here is immutable after construction and safe to share across
//! threads; annotating two documents concurrently needs no coordination.

mod annotator;
mod registry;

pub use annotator::{annotate, Annotations, Annotator};
pub use hue_ir::{Annotation, Category, Severity, Span, Token};
pub use hue_keywords::{CategoryTable, Classifier};
pub use registry::{
    BaselineStyle, Descriptor, DescriptorRegistry, DISPLAY_NAME, FALLBACK_STYLE_KEY,
};
