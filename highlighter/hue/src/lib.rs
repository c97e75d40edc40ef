//! Semantic keyword highlighting for PHP.
//!
//! The host editor parses PHP and hands leaf tokens to an [`Annotator`],
//! which classifies each one against the shipped [`CategoryTable`] and
//! returns information-level annotations. The [`DescriptorRegistry`] maps
//! each [`Category`] to the style key the host renders it with, and the
//! color settings page shows [`DEMO_TEXT`], kept in sync with the table by
//! [`validate`].
//!
//! ```
//! use hue::{annotate, Category, Span, Token};
//!
//! let tokens = [
//!     Token::new("public", Span::new(0, 6)),
//!     Token::new("function", Span::new(7, 15)),
//!     Token::new("run", Span::new(16, 19)),
//! ];
//! let categories: Vec<_> = annotate(&tokens).iter().map(|a| a.category).collect();
//! assert_eq!(categories, [Category::Modifier, Category::FunctionKeyword]);
//! ```

use std::sync::Once;

pub use hue_demo::{
    demo_document, scan_leaves, validate, validate_with, DemoDocument, DemoError, TaggedSpan,
    ValidationReport, DEMO_TEXT,
};
pub use hue_highlight::{
    annotate, Annotations, Annotator, BaselineStyle, Descriptor, DescriptorRegistry,
    DISPLAY_NAME, FALLBACK_STYLE_KEY,
};
pub use hue_ir::{Annotation, Category, Severity, Span, SpanError, Token};
pub use hue_keywords::{lookup, CategoryTable, Classifier, TableError};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times, and a no-op when
/// the host already installed a global subscriber.
/// Enable with `RUST_LOG=hue_highlight=debug` or `RUST_LOG=hue_demo=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            if let Err(err) = installed {
                tracing::debug!(%err, "global subscriber already installed");
            }
        }
    });
}
