// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

use crate::node::{Node, Value};
use crate::parse_error::ParseError;
use crate::parser::Parser;

impl Parser<'_> {
    /// Array parser. Elements are appended in input order; on any failure the
    /// elements collected so far are dropped with the partial vector.
    pub(crate) fn parse_array(&mut self) -> Result<Node, ParseError> {
        self.expect(b'[')?;
        self.enter_container()?;
        let elements = self.parse_elements();
        self.leave_container();

        let elements = elements?;
        log::trace!("array closed with {} elements", elements.len());
        Ok(Node::new(Value::Array(elements)))
    }

    fn parse_elements(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut elements = Vec::new();

        self.cursor.skip_whitespace();
        if self.cursor.eat(b']') {
            return Ok(elements);
        }

        loop {
            elements.push(self.parse_value()?);

            self.cursor.skip_whitespace();
            if !self.expect_separator(b']')? {
                return Ok(elements);
            }
        }
    }

    /// Object parser. Each member is its value node with the key attached;
    /// a pending key is dropped together with the members if anything fails.
    pub(crate) fn parse_object(&mut self) -> Result<Node, ParseError> {
        self.expect(b'{')?;
        self.enter_container()?;
        let members = self.parse_members();
        self.leave_container();

        let members = members?;
        log::trace!("object closed with {} members", members.len());
        Ok(Node::new(Value::Object(members)))
    }

    fn parse_members(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut members = Vec::new();

        self.cursor.skip_whitespace();
        if self.cursor.eat(b'}') {
            return Ok(members);
        }

        loop {
            self.cursor.skip_whitespace();
            let key = self.parse_string()?;

            self.cursor.skip_whitespace();
            self.expect(b':')?;

            let value = self.parse_value()?;
            members.push(value.with_key(key));

            self.cursor.skip_whitespace();
            if !self.expect_separator(b'}')? {
                return Ok(members);
            }
        }
    }

    /// After an element: `,` means another element follows (`true`), the
    /// closing delimiter ends the container (`false`), anything else fails.
    fn expect_separator(&mut self, close: u8) -> Result<bool, ParseError> {
        match self.cursor.peek() {
            Some(b',') => {
                self.cursor.advance();
                Ok(true)
            }
            Some(byte) if byte == close => {
                self.cursor.advance();
                Ok(false)
            }
            Some(_) => Err(ParseError::UnexpectedToken),
            None => Err(ParseError::EndOfData),
        }
    }
}
