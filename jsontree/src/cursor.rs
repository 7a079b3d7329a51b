// SPDX-License-Identifier: Apache-2.0

/// Shared scan state for one top-level parse: the input bytes and the
/// current position. The input is never modified.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the first byte of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total length of the input.
    pub fn data_len(&self) -> usize {
        self.data.len()
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// The byte under the cursor, or `None` at end of input.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Moves one byte forward. Never moves past the end.
    pub fn advance(&mut self) {
        if self.pos < self.data.len() {
            self.pos += 1;
        }
    }

    /// Consumes `byte` if it is next, reporting whether it did.
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes `literal` if the input continues with exactly those bytes.
    /// A partial match consumes nothing.
    pub fn eat_literal(&mut self, literal: &[u8]) -> bool {
        let matches = self
            .data
            .get(self.pos..)
            .is_some_and(|rest| rest.starts_with(literal));
        if matches {
            self.pos += literal.len();
        }
        matches
    }

    /// Skips space, tab, line feed and carriage return.
    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    /// Skips a run of ASCII digits.
    pub fn skip_digits(&mut self) {
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
    }

    /// The bytes from `start` up to (not including) the current position.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        self.data.get(start..self.pos).unwrap_or_default()
    }
}
