//! Low-level input cursor for the tokenizer primitives.
//!
//! [`ParserInput`] wraps the input string as a byte cursor and provides
//! peeking, advancing, lookahead, and checkpoint/rewind. Every tokenizer
//! primitive built on top either consumes input and yields a value or
//! rewinds to where it started, so alternatives can be tried in order.
//!
//! The cursor only ever rests on UTF-8 character boundaries: single-byte
//! advances are used for ASCII grammar characters, and arbitrary text is
//! consumed per-character or in whole validated chunks.

use crate::entities;

/// A snapshot of the cursor position, restored with
/// [`ParserInput::rewind`]. Used by primitives that need to back out of a
/// speculative parse without consuming input.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Checkpoint {
    pos: usize,
}

/// Shared low-level input state for the parser.
pub(crate) struct ParserInput<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> ParserInput<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Returns `true` if all input has been consumed.
    pub fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Returns the unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Saves the current position so it can be restored with [`rewind`].
    ///
    /// [`rewind`]: ParserInput::rewind
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint { pos: self.pos }
    }

    /// Restores a previously saved position, discarding all progress since
    /// the [`checkpoint`] call.
    ///
    /// [`checkpoint`]: ParserInput::checkpoint
    pub fn rewind(&mut self, saved: Checkpoint) {
        self.pos = saved.pos;
    }

    // -- Peek operations --

    /// Returns the byte at the cursor without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// Returns the byte at `cursor + offset` without consuming.
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.text.as_bytes().get(self.pos + offset).copied()
    }

    // -- Advance operations --

    /// Advances the cursor by `count` bytes, saturating at end of input.
    ///
    /// Callers must only use byte advances across ASCII runs; multi-byte
    /// characters are consumed via [`next_char`].
    ///
    /// [`next_char`]: ParserInput::next_char
    pub fn advance(&mut self, count: usize) {
        self.pos = (self.pos + count).min(self.text.len());
    }

    /// Consumes and returns the next character.
    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.rest().chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    // -- Lookahead --

    /// Returns `true` if the remaining input starts with `s`.
    pub fn looking_at(&self, s: &[u8]) -> bool {
        self.text.as_bytes()[self.pos..].starts_with(s)
    }

    /// Case-insensitive (ASCII) variant of [`looking_at`].
    ///
    /// [`looking_at`]: ParserInput::looking_at
    pub fn looking_at_ci(&self, expected: &[u8]) -> bool {
        let bytes = self.text.as_bytes();
        if self.pos + expected.len() > bytes.len() {
            return false;
        }
        bytes[self.pos..self.pos + expected.len()].eq_ignore_ascii_case(expected)
    }

    // -- Whitespace --

    /// Skips zero or more of space, tab, CR, LF.
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek() {
            self.advance(1);
        }
    }

    // -- Take while --

    /// Consumes bytes while `pred` holds and returns them as a slice of the
    /// input. The predicate must only accept ASCII bytes so the cursor stays
    /// on a character boundary.
    pub fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            debug_assert!(!pred(b) || b.is_ascii());
            if pred(b) {
                self.advance(1);
            } else {
                break;
            }
        }
        &self.text[start..self.pos]
    }

    // -- Character references --

    /// Decodes one character reference at the cursor (which must sit on a
    /// `&`) and appends the result to `out`.
    ///
    /// Recognizes `&name;` (case-sensitive table lookup), `&#1234;`, and
    /// `&#x1F4A9;`. A reference that is malformed, unknown, or outside the
    /// Unicode scalar range is passed through verbatim: the `&` alone is
    /// consumed and emitted, and the cursor resumes right after it, so the
    /// rest of the would-be reference flows through as ordinary text. The
    /// method always consumes at least one byte.
    pub fn read_reference(&mut self, out: &mut String) {
        debug_assert_eq!(self.peek(), Some(b'&'));
        let start = self.checkpoint();
        self.advance(1);

        if self.peek() == Some(b'#') {
            self.advance(1);
            let hex = matches!(self.peek(), Some(b'x' | b'X'));
            if hex {
                self.advance(1);
            }
            let digits = if hex {
                self.take_while(|b| b.is_ascii_hexdigit())
            } else {
                self.take_while(|b| b.is_ascii_digit())
            };
            if !digits.is_empty() && self.peek() == Some(b';') {
                let radix = if hex { 16 } else { 10 };
                if let Some(ch) = u32::from_str_radix(digits, radix)
                    .ok()
                    .and_then(char::from_u32)
                {
                    self.advance(1);
                    out.push(ch);
                    return;
                }
            }
        } else {
            let name = self.take_while(|b| b.is_ascii_alphanumeric());
            if !name.is_empty() && self.peek() == Some(b';') {
                self.advance(1);
                match entities::lookup_entity(name) {
                    Some(expansion) => out.push_str(expansion),
                    // Unknown reference: keep it verbatim, delimiters and all.
                    None => {
                        out.push('&');
                        out.push_str(name);
                        out.push(';');
                    }
                }
                return;
            }
        }

        // Not a reference after all. Emit the bare `&` and rescan the rest
        // as ordinary text.
        self.rewind(start);
        self.advance(1);
        out.push('&');
    }
}
