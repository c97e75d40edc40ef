//! Keyword tables and classifier for the PHP highlighter.
//!
//! # Table
//!
//! [`CategoryTable`] maps exact literal text to a [`Category`]. The shipped
//! table is assembled from hand-curated buckets, one per category, grouped by
//! theme: declaration keywords, literals, and standard-library functions
//! split into string, array, object, math, date, regex and similar families.
//! Buckets only exist so each theme can get its own style; the classifier
//! cares about the final category alone.
//!
//! # Classifier
//!
//! [`Classifier`] is a thin, context-free wrapper over the table. Anything
//! the table does not hold (identifiers, punctuation, numbers) classifies as
//! `None`, which is the common case and not an error.
//!
//! Both are immutable after construction and safe to share across threads.

mod buckets;
mod classifier;
mod table;

pub use classifier::Classifier;
pub use hue_ir::Category;
pub use table::{CategoryTable, TableError};

/// Classify literal text against the shipped table.
#[inline]
pub fn lookup(text: &str) -> Option<Category> {
    CategoryTable::standard().lookup(text)
}
