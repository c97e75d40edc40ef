//! Literal → category table.
//!
//! Built once from the curated [`BUCKETS`](crate::buckets) and shared
//! read-only for the rest of the process. Lookup is exact: no case folding,
//! no prefix or substring matching.

use std::collections::hash_map::Entry;
use std::sync::OnceLock;

use hue_ir::Category;
use rustc_hash::FxHashMap;

use crate::buckets::BUCKETS;

/// Curated data that breaks the one-literal-one-category rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("literal `{literal}` is assigned to both {first} and {second}")]
    DuplicateLiteral {
        literal: &'static str,
        first: Category,
        second: Category,
    },
}

/// Immutable mapping from literal token text to its [`Category`].
#[derive(Debug, Clone)]
pub struct CategoryTable {
    entries: FxHashMap<&'static str, Category>,
    counts: [usize; Category::COUNT],
    /// Longest literal, for rejecting long identifiers without hashing.
    max_len: usize,
}

static STANDARD: OnceLock<CategoryTable> = OnceLock::new();

impl CategoryTable {
    fn with_capacity(capacity: usize) -> Self {
        CategoryTable {
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            counts: [0; Category::COUNT],
            max_len: 0,
        }
    }

    /// Build a table from `(category, literals)` buckets.
    ///
    /// Fails on the first literal that shows up in two buckets.
    pub fn from_buckets(
        buckets: &[(Category, &'static [&'static str])],
    ) -> Result<Self, TableError> {
        let capacity = buckets.iter().map(|(_, literals)| literals.len()).sum();
        let mut table = Self::with_capacity(capacity);
        for &(category, literals) in buckets {
            for &literal in literals {
                table.insert(literal, category)?;
            }
        }
        Ok(table)
    }

    /// The shipped table, built on first use.
    pub fn standard() -> &'static CategoryTable {
        STANDARD.get_or_init(Self::build_standard)
    }

    fn build_standard() -> Self {
        let capacity = BUCKETS.iter().map(|(_, literals)| literals.len()).sum();
        let mut table = Self::with_capacity(capacity);
        for &(category, literals) in BUCKETS {
            for &literal in literals {
                // First assignment wins in release builds.
                let inserted = table.insert(literal, category);
                debug_assert!(inserted.is_ok(), "curated buckets overlap: {inserted:?}");
            }
        }
        table
    }

    fn insert(&mut self, literal: &'static str, category: Category) -> Result<(), TableError> {
        match self.entries.entry(literal) {
            Entry::Occupied(entry) => Err(TableError::DuplicateLiteral {
                literal,
                first: *entry.get(),
                second: category,
            }),
            Entry::Vacant(entry) => {
                entry.insert(category);
                self.counts[category.index()] += 1;
                self.max_len = self.max_len.max(literal.len());
                Ok(())
            }
        }
    }

    /// Move `literal` to `category`, replacing whatever it mapped to before.
    ///
    /// Returns the previous category. The entry is replaced in place, so a
    /// literal can never end up in two categories.
    ///
    /// Curation tooling for tables built with [`CategoryTable::from_buckets`].
    /// The shared [`CategoryTable::standard`] table is immutable and never
    /// reassigned.
    pub fn reassign(&mut self, literal: &'static str, category: Category) -> Option<Category> {
        let previous = self.entries.insert(literal, category);
        if let Some(previous) = previous {
            self.counts[previous.index()] -= 1;
        }
        self.counts[category.index()] += 1;
        self.max_len = self.max_len.max(literal.len());
        previous
    }

    /// Resolve the category of an exact literal.
    #[inline]
    pub fn lookup(&self, text: &str) -> Option<Category> {
        // Guard: every literal is a PHP identifier of bounded length
        let first = *text.as_bytes().first()?;
        if text.len() > self.max_len || !(first.is_ascii_alphabetic() || first == b'_') {
            return None;
        }
        self.entries.get(text).copied()
    }

    /// Whether `text` is a literal of any category.
    pub fn contains(&self, text: &str) -> bool {
        self.lookup(text).is_some()
    }

    /// Number of literals across all categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of literals mapped to `category`.
    pub fn count_of(&self, category: Category) -> usize {
        self.counts[category.index()]
    }

    /// Literals mapped to `category`, sorted.
    pub fn literals_of(&self, category: Category) -> Vec<&'static str> {
        let mut literals: Vec<_> = self
            .entries
            .iter()
            .filter(|(_, c)| **c == category)
            .map(|(literal, _)| *literal)
            .collect();
        literals.sort_unstable();
        literals
    }

    /// All `(literal, category)` entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Category)> + '_ {
        self.entries.iter().map(|(literal, category)| (*literal, *category))
    }
}

#[cfg(test)]
mod tests;
