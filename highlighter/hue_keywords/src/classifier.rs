//! Token classification.
//!
//! Context-free by construction: a token is classified from its text alone.
//! Neighboring tokens, the enclosing syntax node and declaration scope are
//! never consulted, so an identifier spelled like a keyword (a method named
//! `error`) classifies exactly like the keyword.

use hue_ir::{Category, Token};

use crate::CategoryTable;

/// Resolves the [`Category`] of a token against a [`CategoryTable`].
#[derive(Clone, Copy, Debug)]
pub struct Classifier<'t> {
    table: &'t CategoryTable,
}

impl Classifier<'static> {
    /// Classifier over the shipped table.
    pub fn standard() -> Self {
        Classifier {
            table: CategoryTable::standard(),
        }
    }
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'t> Classifier<'t> {
    /// Classifier over a caller-built table.
    pub fn new(table: &'t CategoryTable) -> Self {
        Classifier { table }
    }

    pub fn table(&self) -> &'t CategoryTable {
        self.table
    }

    /// Category of `token`, or `None` for identifiers, punctuation and
    /// literals the table does not know.
    ///
    /// Comment containment is not looked at here; skipping comments is the
    /// annotator's job.
    #[inline]
    pub fn classify(&self, token: &Token) -> Option<Category> {
        self.classify_text(&token.text)
    }

    #[inline]
    pub fn classify_text(&self, text: &str) -> Option<Category> {
        self.table.lookup(text)
    }
}
