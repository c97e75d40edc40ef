//! Leaf scanner for demo and fixture documents.
//!
//! Splits PHP source into the leaf tokens a host parser would hand to the
//! annotator. This is not a PHP lexer: it only needs token boundaries that
//! agree with the host on identifiers, variables, strings and comments.
//!
//! - identifiers: `[A-Za-z_\x80-\xff][A-Za-z0-9_\x80-\xff]*`
//! - variables: `$` followed by an identifier, kept as one token
//! - strings: `'…'` and `"…"` with backslash escapes, one token each
//! - comments: `//`, `#` and `/* */`; every word inside becomes its own
//!   token flagged `in_comment`
//! - open and close tags (`<?php`, `<?=`, `<?`, `?>`), numbers, and
//!   punctuation (two-byte operators where PHP has them)
//!
//! Past EOF the cursor reads a `0x00` sentinel, so lookahead never needs a
//! bounds check.

use hue_ir::{Span, SpanError, Token};

/// Operators kept as one token.
const TWO_BYTE_OPERATORS: &[&[u8; 2]] = &[
    b"::", b"->", b"=>", b"&&", b"||", b"??", b"==", b"!=", b"<=", b">=", b"++", b"--", b".=",
    b"+=", b"-=", b"*=", b"/=",
];

#[inline]
fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_' || byte >= 0x80
}

#[inline]
fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte >= 0x80
}

struct Cursor<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Cursor {
            source,
            bytes: source.as_bytes(),
            pos: 0,
        }
    }

    #[inline]
    fn peek_at(&self, offset: usize) -> u8 {
        self.bytes.get(self.pos + offset).copied().unwrap_or(0)
    }

    #[inline]
    fn current(&self) -> u8 {
        self.peek_at(0)
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    #[inline]
    fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos.min(self.bytes.len())..]
    }

    #[inline]
    fn starts_with(&self, prefix: &[u8]) -> bool {
        self.remaining().starts_with(prefix)
    }

    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` (not consumed) or EOF.
    fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.remaining()) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.bytes.len(),
        }
    }

    /// Advance past the next `*/`, or to EOF when the comment is unterminated.
    fn eat_block_comment_body(&mut self) {
        match memchr::memmem::find(self.remaining(), b"*/") {
            Some(offset) => self.pos += offset + 2,
            None => self.pos = self.bytes.len(),
        }
    }

    /// Advance past the closing `quote`, honoring backslash escapes.
    fn eat_string_body(&mut self, quote: u8) {
        loop {
            match memchr::memchr2(quote, b'\\', self.remaining()) {
                Some(offset) if self.remaining()[offset] == b'\\' => {
                    self.pos = (self.pos + offset + 2).min(self.bytes.len());
                }
                Some(offset) => {
                    self.pos += offset + 1;
                    return;
                }
                None => {
                    self.pos = self.bytes.len();
                    return;
                }
            }
        }
    }
}

struct Scanner<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
}

impl Scanner<'_> {
    fn push(&mut self, start: usize, in_comment: bool) -> Result<(), SpanError> {
        let end = self.cursor.pos;
        let span = Span::try_from_range(start..end)?;
        let text = &self.cursor.source[start..end];
        self.tokens.push(Token {
            text: text.to_owned(),
            span,
            in_comment,
        });
        Ok(())
    }

    fn run(mut self) -> Result<Vec<Token>, SpanError> {
        while !self.cursor.is_eof() {
            let start = self.cursor.pos;
            let byte = self.cursor.current();
            match byte {
                b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c => {
                    self.cursor.eat_while(|b| b.is_ascii_whitespace() || b == 0x0b);
                }
                b'/' if self.cursor.peek_at(1) == b'/' => {
                    self.cursor.eat_until_newline_or_eof();
                    self.comment_words(start)?;
                }
                b'#' if self.cursor.peek_at(1) != b'[' => {
                    self.cursor.eat_until_newline_or_eof();
                    self.comment_words(start)?;
                }
                b'/' if self.cursor.peek_at(1) == b'*' => {
                    self.cursor.pos += 2;
                    self.cursor.eat_block_comment_body();
                    self.comment_words(start)?;
                }
                b'<' if self.cursor.starts_with(b"<?php") => {
                    self.cursor.pos += 5;
                    self.push(start, false)?;
                }
                b'<' if self.cursor.starts_with(b"<?=") => {
                    self.cursor.pos += 3;
                    self.push(start, false)?;
                }
                b'<' if self.cursor.peek_at(1) == b'?' => {
                    self.cursor.pos += 2;
                    self.push(start, false)?;
                }
                b'?' if self.cursor.peek_at(1) == b'>' => {
                    self.cursor.pos += 2;
                    self.push(start, false)?;
                }
                b'$' if is_ident_start(self.cursor.peek_at(1)) => {
                    self.cursor.pos += 1;
                    self.cursor.eat_while(is_ident_continue);
                    self.push(start, false)?;
                }
                b'\'' | b'"' => {
                    self.cursor.pos += 1;
                    self.cursor.eat_string_body(byte);
                    self.push(start, false)?;
                }
                b'0'..=b'9' => {
                    self.cursor
                        .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'.');
                    self.push(start, false)?;
                }
                b if is_ident_start(b) => {
                    self.cursor.eat_while(is_ident_continue);
                    self.push(start, false)?;
                }
                _ => {
                    let two = TWO_BYTE_OPERATORS
                        .iter()
                        .any(|op| self.cursor.starts_with(&op[..]));
                    self.cursor.pos += if two { 2 } else { 1 };
                    self.push(start, false)?;
                }
            }
        }
        Ok(self.tokens)
    }

    /// Emit every word of the comment spanning `start..cursor.pos`.
    fn comment_words(&mut self, start: usize) -> Result<(), SpanError> {
        let end = self.cursor.pos;
        let bytes = self.cursor.bytes;
        let mut pos = start;
        while pos < end {
            if is_ident_continue(bytes[pos]) {
                let word_start = pos;
                while pos < end && is_ident_continue(bytes[pos]) {
                    pos += 1;
                }
                let span = Span::try_from_range(word_start..pos)?;
                self.tokens.push(Token::commented(
                    &self.cursor.source[word_start..pos],
                    span,
                ));
            } else {
                pos += 1;
            }
        }
        Ok(())
    }
}

/// Split `source` into leaf tokens in document order.
///
/// Fails only when `source` is too large for 32-bit offsets.
pub fn scan_leaves(source: &str) -> Result<Vec<Token>, SpanError> {
    Span::try_from_range(0..source.len())?;
    let scanner = Scanner {
        cursor: Cursor::new(source),
        tokens: Vec::new(),
    };
    let tokens = scanner.run()?;
    tracing::trace!(tokens = tokens.len(), "scanned leaves");
    Ok(tokens)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
