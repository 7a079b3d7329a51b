// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::int_parser::parse_int;
use crate::node::{Node, Number, Value};
use crate::parser::Parser;

impl Parser<'_> {
    /// Number parser: greedily consumes `-? digits (. digits)? ([eE] [+-]? digits)?`.
    ///
    /// Never fails. Digit runs may be empty, so a lone `-` is accepted and
    /// reads as zero; overflow wraps instead of being reported.
    pub(crate) fn parse_number(&mut self) -> Node {
        let start = self.cursor.position();
        let mut is_float = false;

        self.cursor.eat(b'-');
        self.cursor.skip_digits();

        if self.cursor.eat(b'.') {
            is_float = true;
            self.cursor.skip_digits();
        }

        if matches!(self.cursor.peek(), Some(b'e' | b'E')) {
            is_float = true;
            self.cursor.advance();
            if matches!(self.cursor.peek(), Some(b'+' | b'-')) {
                self.cursor.advance();
            }
            self.cursor.skip_digits();
        }

        let literal = self.cursor.slice_from(start);
        log::trace!("number literal {:?} (float: {})", literal, is_float);
        Node::new(Value::Number(number_from_literal(literal, is_float)))
    }
}

/// Builds both representations of a consumed number literal.
pub(crate) fn number_from_literal(literal: &[u8], is_float: bool) -> Number {
    Number::new(parse_int(literal), parse_double(literal), is_float)
}

/// strtod-style conversion: the longest prefix that reads as a decimal float
/// wins, and a literal with no usable prefix is 0.0. Keeps `1e` (1.0) and
/// `-` (0.0) working the way a C parser would read them.
pub(crate) fn parse_double(literal: &[u8]) -> f64 {
    let mut end = literal.len();
    while end > 0 {
        let prefix = literal
            .get(..end)
            .and_then(|bytes| core::str::from_utf8(bytes).ok())
            .and_then(|text| f64::from_str(text).ok());
        if let Some(value) = prefix {
            return value;
        }
        end -= 1;
    }
    0.0
}
