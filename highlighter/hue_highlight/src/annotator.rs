//! Token sequence → annotation sequence.
//!
//! Walks leaf tokens in document order and emits one [`Annotation`] per
//! categorized token. Comments are never classified, even when a word in
//! them matches a keyword. Tokens the classifier does not know produce
//! nothing, leaving them to the host's baseline styling.
//!
//! The output is sorted by start offset and free of overlaps for every
//! input, including malformed ones: a token with an empty range, or one that
//! starts before the previous annotation ends, is dropped.

use hue_ir::{Annotation, Token};
use hue_keywords::Classifier;

/// Produces highlight annotations from leaf tokens.
#[derive(Clone, Copy, Debug)]
pub struct Annotator<'t> {
    classifier: Classifier<'t>,
}

impl Annotator<'static> {
    /// Annotator over the shipped keyword table.
    pub fn standard() -> Self {
        Annotator {
            classifier: Classifier::standard(),
        }
    }
}

impl Default for Annotator<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'t> Annotator<'t> {
    /// Annotator over a specific classifier, e.g. one built on a custom table.
    pub fn new(classifier: Classifier<'t>) -> Self {
        Annotator { classifier }
    }

    pub fn classifier(&self) -> Classifier<'t> {
        self.classifier
    }

    /// Annotation for a single leaf token, ignoring document order.
    pub fn annotate_token(&self, token: &Token) -> Option<Annotation> {
        if token.in_comment {
            tracing::trace!(?token, "skipping comment token");
            return None;
        }
        if token.span.is_empty() {
            tracing::trace!(?token, "skipping empty token");
            return None;
        }
        let category = self.classifier.classify(token)?;
        Some(Annotation::new(category, token.span))
    }

    /// Lazily annotate `tokens` in document order.
    pub fn annotations<'a>(&self, tokens: &'a [Token]) -> Annotations<'a, 't> {
        Annotations {
            annotator: *self,
            tokens: tokens.iter(),
            last_end: 0,
        }
    }

    /// Annotate a whole document.
    #[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
    pub fn annotate(&self, tokens: &[Token]) -> Vec<Annotation> {
        let annotations: Vec<_> = self.annotations(tokens).collect();
        tracing::debug!(annotations = annotations.len(), "document annotated");
        annotations
    }
}

/// Iterator returned by [`Annotator::annotations`].
#[derive(Clone, Debug)]
pub struct Annotations<'a, 't> {
    annotator: Annotator<'t>,
    tokens: std::slice::Iter<'a, Token>,
    /// End of the last emitted annotation.
    last_end: u32,
}

impl Iterator for Annotations<'_, '_> {
    type Item = Annotation;

    fn next(&mut self) -> Option<Annotation> {
        for token in self.tokens.by_ref() {
            let Some(annotation) = self.annotator.annotate_token(token) else {
                continue;
            };
            if annotation.span.start < self.last_end {
                tracing::trace!(?token, last_end = self.last_end, "skipping out-of-order token");
                continue;
            }
            self.last_end = annotation.span.end;
            return Some(annotation);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.tokens.size_hint().1)
    }
}

/// Annotate `tokens` with the shipped keyword table.
pub fn annotate(tokens: &[Token]) -> Vec<Annotation> {
    Annotator::standard().annotate(tokens)
}
