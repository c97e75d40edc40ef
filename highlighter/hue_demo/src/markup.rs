//! Tag markup for demo documents.
//!
//! A demo document is PHP source in which highlighted words are wrapped in
//! `<tag>…</tag>` markers. A `<` starts a marker only when it is followed by
//! an optional `/`, an identifier and `>`; anything else (`<?php`, `<=`,
//! `$a < $b`) is plain text. Markers nest, and each closing marker must match
//! the innermost open one.

use hue_ir::Span;

use crate::error::DemoError;

/// One tagged range of the plain document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedSpan {
    pub tag: String,
    /// Range in the plain document.
    pub span: Span,
    /// The plain text the markers enclose.
    pub literal: String,
}

/// A demo document with its markers stripped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoDocument {
    plain: String,
    spans: Vec<TaggedSpan>,
}

/// A marker recognized at some `<`.
struct Marker<'m> {
    name: &'m str,
    closing: bool,
    /// Length of the whole marker, `<` through `>`.
    len: usize,
}

/// Recognize a marker at the start of `rest`, which begins with `<`.
fn marker_at(rest: &str) -> Option<Marker<'_>> {
    let bytes = rest.as_bytes();
    let closing = bytes.get(1) == Some(&b'/');
    let name_start = if closing { 2 } else { 1 };
    let first = *bytes.get(name_start)?;
    if !(first.is_ascii_alphabetic() || first == b'_') {
        return None;
    }
    let name_len = bytes[name_start..]
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
        .count();
    let name_end = name_start + name_len;
    if bytes.get(name_end) != Some(&b'>') {
        return None;
    }
    Some(Marker {
        name: &rest[name_start..name_end],
        closing,
        len: name_end + 1,
    })
}

/// Offset conversion after the markup length has been checked.
fn offset(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl DemoDocument {
    /// Strip the markers from `markup`, recording the range each pair encloses.
    ///
    /// Tagged spans come out in document order: by start offset, outer spans
    /// before the spans nested in them.
    #[tracing::instrument(level = "debug", skip_all, fields(len = markup.len()))]
    pub fn parse(markup: &str) -> Result<Self, DemoError> {
        Span::try_from_range(0..markup.len())?;

        let mut plain = String::with_capacity(markup.len());
        let mut spans = Vec::new();
        // (tag, plain offset, markup span of the opening marker)
        let mut open: Vec<(&str, usize, Span)> = Vec::new();
        let mut pos = 0;

        while let Some(found) = memchr::memchr(b'<', &markup.as_bytes()[pos..]) {
            let at = pos + found;
            let Some(marker) = marker_at(&markup[at..]) else {
                plain.push_str(&markup[pos..=at]);
                pos = at + 1;
                continue;
            };
            plain.push_str(&markup[pos..at]);
            pos = at + marker.len;
            let marker_span = Span::new(offset(at), offset(pos));

            if !marker.closing {
                open.push((marker.name, plain.len(), marker_span));
                continue;
            }
            let Some((tag, start, _)) = open.pop() else {
                return Err(DemoError::UnexpectedClosingTag {
                    tag: marker.name.to_owned(),
                    span: marker_span,
                });
            };
            if tag != marker.name {
                return Err(DemoError::MismatchedClosingTag {
                    expected: tag.to_owned(),
                    found: marker.name.to_owned(),
                    span: marker_span,
                });
            }
            spans.push(TaggedSpan {
                tag: tag.to_owned(),
                span: Span::new(offset(start), offset(plain.len())),
                literal: plain[start..].to_owned(),
            });
        }
        plain.push_str(&markup[pos..]);

        if let Some((tag, _, span)) = open.pop() {
            return Err(DemoError::UnclosedTag {
                tag: tag.to_owned(),
                span,
            });
        }

        // Pairs close innermost first; restore document order.
        spans.sort_by_key(|tagged| (tagged.span.start, std::cmp::Reverse(tagged.span.end)));
        tracing::debug!(spans = spans.len(), "demo markup parsed");
        Ok(DemoDocument { plain, spans })
    }

    /// The document without markers, as a host would see it.
    pub fn plain(&self) -> &str {
        &self.plain
    }

    pub fn spans(&self) -> &[TaggedSpan] {
        &self.spans
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
