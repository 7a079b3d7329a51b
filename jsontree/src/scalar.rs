// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;
use alloc::vec::Vec;

use crate::escape_processor::EscapeProcessor;
use crate::node::{Node, Value};
use crate::parse_error::ParseError;
use crate::parser::Parser;

impl Parser<'_> {
    /// String parser, used for string values and object keys.
    ///
    /// Two passes over the literal: the first finds the closing quote and
    /// counts the decoded length without allocating, the second copies into
    /// a buffer of exactly that size while translating escapes.
    pub(crate) fn parse_string(&mut self) -> Result<String, ParseError> {
        self.expect(b'"')?;
        let start = self.cursor.position();
        let decoded_len = self.measure_string()?;
        let raw = self.cursor.slice_from(start);
        // Step over the closing quote
        self.cursor.advance();

        let mut text = Vec::with_capacity(decoded_len);
        let mut bytes = raw.iter();
        while let Some(&byte) = bytes.next() {
            if byte == b'\\' {
                // measure_string guarantees a byte after every backslash
                if let Some(&escaped) = bytes.next() {
                    text.push(EscapeProcessor::process_simple_escape(escaped));
                }
            } else {
                text.push(byte);
            }
        }

        String::from_utf8(text).map_err(|err| ParseError::InvalidUtf8(err.utf8_error()))
    }

    /// Advances to the closing quote (without consuming it) and returns the
    /// decoded length. An escape counts as one byte.
    fn measure_string(&mut self) -> Result<usize, ParseError> {
        let mut len = 0;
        loop {
            match self.cursor.peek() {
                None => return Err(ParseError::UnterminatedString),
                Some(b'"') => return Ok(len),
                Some(b'\\') => {
                    self.cursor.advance();
                    if self.cursor.is_at_end() {
                        return Err(ParseError::UnterminatedString);
                    }
                }
                Some(_) => {}
            }
            self.cursor.advance();
            len += 1;
        }
    }

    pub(crate) fn parse_string_value(&mut self) -> Result<Node, ParseError> {
        let text = self.parse_string()?;
        Ok(Node::new(Value::String(text)))
    }

    /// Matches `true` or `false` exactly at the cursor.
    pub(crate) fn parse_bool(&mut self) -> Result<Node, ParseError> {
        let value = if self.cursor.eat_literal(b"true") {
            true
        } else if self.cursor.eat_literal(b"false") {
            false
        } else {
            return Err(ParseError::InvalidLiteral);
        };
        Ok(Node::new(Value::Bool(value)))
    }

    /// Matches `null` exactly at the cursor.
    pub(crate) fn parse_null(&mut self) -> Result<Node, ParseError> {
        if self.cursor.eat_literal(b"null") {
            Ok(Node::new(Value::Null))
        } else {
            Err(ParseError::InvalidLiteral)
        }
    }
}
