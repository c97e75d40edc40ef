//! Self-consistency check between demo markup and the annotator.
//!
//! Every tag must name a category or a host baseline style. The plain
//! document is scanned and annotated, then compared against the markup:
//!
//! - a category-tagged span must carry an annotation of that category over
//!   exactly that range
//! - a baseline-tagged span must carry no annotation at all
//! - every annotation must sit on a category-tagged span
//!
//! Unknown tags are reported before anything else. Otherwise the
//! disagreement with the lowest start offset is returned.

use hue_highlight::{Annotation, Annotator, BaselineStyle, DescriptorRegistry};
use hue_ir::{Category, Span};

use crate::error::DemoError;
use crate::markup::{DemoDocument, TaggedSpan};
use crate::scan::scan_leaves;

/// Counts gathered by a successful validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Spans tagged with a category.
    pub category_spans: usize,
    /// Spans tagged with a host baseline style.
    pub baseline_spans: usize,
    /// Annotations produced for the plain document.
    pub annotations: usize,
}

enum Expectation {
    Category(Category),
    Baseline(BaselineStyle),
}

fn resolve(registry: &DescriptorRegistry, tagged: &TaggedSpan) -> Result<Expectation, DemoError> {
    if let Some(category) = registry.category_of_tag(&tagged.tag) {
        return Ok(Expectation::Category(category));
    }
    if let Some(baseline) = registry.baseline_of_tag(&tagged.tag) {
        return Ok(Expectation::Baseline(baseline));
    }
    Err(DemoError::UnknownTag {
        tag: tagged.tag.clone(),
        literal: tagged.literal.clone(),
        span: tagged.span,
    })
}

/// Index of the annotation starting at `start`. Annotations are sorted and
/// disjoint, so starts are unique.
fn annotation_at(annotations: &[Annotation], start: u32) -> Option<usize> {
    annotations
        .binary_search_by_key(&start, |annotation| annotation.span.start)
        .ok()
}

fn first_overlapping(annotations: &[Annotation], span: Span) -> Option<&Annotation> {
    let from = annotations.partition_point(|annotation| annotation.span.end <= span.start);
    annotations[from..]
        .iter()
        .take_while(|annotation| annotation.span.start < span.end)
        .find(|annotation| annotation.span.overlaps(span))
}

/// Fail on the first annotation from `*next` on that starts before `until`
/// and is not covered by a category span.
fn first_uncovered(
    document: &DemoDocument,
    annotations: &[Annotation],
    covered: &[bool],
    next: &mut usize,
    until: u32,
) -> Result<(), DemoError> {
    while let Some(annotation) = annotations.get(*next) {
        if annotation.span.start >= until {
            break;
        }
        if !covered[*next] {
            let literal = annotation
                .span
                .slice(document.plain())
                .unwrap_or_default()
                .to_owned();
            return Err(DemoError::UntaggedAnnotation {
                literal,
                span: annotation.span,
                category: annotation.category,
            });
        }
        *next += 1;
    }
    Ok(())
}

/// Validate `document` against the shipped annotator and registry.
pub fn validate(document: &DemoDocument) -> Result<ValidationReport, DemoError> {
    validate_with(document, &Annotator::standard(), DescriptorRegistry::standard())
}

/// Validate `document` against a specific annotator and registry.
#[tracing::instrument(level = "debug", skip_all, fields(spans = document.spans().len()))]
pub fn validate_with(
    document: &DemoDocument,
    annotator: &Annotator<'_>,
    registry: &DescriptorRegistry,
) -> Result<ValidationReport, DemoError> {
    let expectations = document
        .spans()
        .iter()
        .map(|tagged| resolve(registry, tagged))
        .collect::<Result<Vec<_>, _>>()?;

    let tokens = scan_leaves(document.plain())?;
    let annotations = annotator.annotate(&tokens);
    let mut covered = vec![false; annotations.len()];
    let mut report = ValidationReport {
        annotations: annotations.len(),
        ..ValidationReport::default()
    };

    // Annotations before `next` have been checked for coverage. Tagged spans
    // are sorted by start, so an annotation starting before the current span
    // can no longer be covered.
    let mut next = 0;
    for (tagged, expectation) in document.spans().iter().zip(&expectations) {
        first_uncovered(document, &annotations, &covered, &mut next, tagged.span.start)?;
        match *expectation {
            Expectation::Category(expected) => {
                let index = annotation_at(&annotations, tagged.span.start)
                    .filter(|&index| annotations[index].span == tagged.span);
                let actual = index.map(|index| annotations[index].category);
                if actual != Some(expected) {
                    return Err(DemoError::AnnotationMismatch {
                        literal: tagged.literal.clone(),
                        span: tagged.span,
                        expected,
                        actual,
                    });
                }
                if let Some(index) = index {
                    covered[index] = true;
                }
                report.category_spans += 1;
            }
            Expectation::Baseline(baseline) => {
                if let Some(annotation) = first_overlapping(&annotations, tagged.span) {
                    return Err(DemoError::BaselineAnnotated {
                        literal: tagged.literal.clone(),
                        span: tagged.span,
                        tag: baseline.tag().to_owned(),
                        actual: annotation.category,
                    });
                }
                report.baseline_spans += 1;
            }
        }
    }

    first_uncovered(document, &annotations, &covered, &mut next, u32::MAX)?;

    tracing::debug!(?report, "demo document is consistent");
    Ok(report)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
