// SPDX-License-Identifier: Apache-2.0

use crate::config::ParseConfig;
use crate::cursor::Cursor;
use crate::node::Node;
use crate::parse_error::ParseError;

/// Recursive-descent parser state for one top-level parse.
///
/// The value parsers live in `scalar`, `number_parser` and `container` as
/// further `impl` blocks; they all advance the one shared cursor.
pub(crate) struct Parser<'a> {
    pub(crate) cursor: Cursor<'a>,
    config: ParseConfig,
    pub(crate) depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a [u8], config: ParseConfig) -> Self {
        Self {
            cursor: Cursor::new(input),
            config,
            depth: 0,
        }
    }

    /// Parses the root value and applies the trailing-content policy.
    pub(crate) fn parse_document(&mut self) -> Result<Node, ParseError> {
        let root = self.parse_value()?;
        if !self.config.allows_trailing() {
            self.cursor.skip_whitespace();
            if !self.cursor.is_at_end() {
                return Err(ParseError::TrailingContent);
            }
        }
        Ok(root)
    }

    /// Value dispatcher: skips whitespace and routes on the next byte.
    ///
    /// This is the recursive entry point the container parsers call for
    /// every element and member value.
    pub(crate) fn parse_value(&mut self) -> Result<Node, ParseError> {
        self.cursor.skip_whitespace();
        let Some(byte) = self.cursor.peek() else {
            return Err(ParseError::EndOfData);
        };
        log::trace!(
            "dispatch {:?} at {}/{}",
            byte as char,
            self.cursor.position(),
            self.cursor.data_len()
        );

        match byte {
            b'"' => self.parse_string_value(),
            b'{' => self.parse_object(),
            b'[' => self.parse_array(),
            b't' | b'f' => self.parse_bool(),
            b'n' => self.parse_null(),
            b'-' | b'0'..=b'9' => Ok(self.parse_number()),
            _ => Err(ParseError::UnexpectedToken),
        }
    }

    /// Consumes `byte` or fails without consuming anything.
    pub(crate) fn expect(&mut self, byte: u8) -> Result<(), ParseError> {
        match self.cursor.peek() {
            Some(found) if found == byte => {
                self.cursor.advance();
                Ok(())
            }
            Some(_) => Err(ParseError::UnexpectedToken),
            None => Err(ParseError::EndOfData),
        }
    }

    pub(crate) fn enter_container(&mut self) -> Result<(), ParseError> {
        let depth = self.depth + 1;
        if self.config.max_depth().is_some_and(|max| depth > max) {
            return Err(ParseError::DepthLimitExceeded);
        }
        self.depth = depth;
        Ok(())
    }

    pub(crate) fn leave_container(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Parses a JSON document into a tree.
///
/// Anything after the root value is ignored and nesting is unbounded; use
/// [`parse_with_config`] to change either.
///
/// # Example
/// ```
/// let root = jsontree::parse(r#"{"name": "pico", "sizes": [1, 2, 3]}"#)?;
/// assert_eq!(root.get("name").map_or("", |n| n.as_str()), "pico");
/// assert_eq!(root.get("sizes").and_then(|s| s.at(2)).map_or(0, |n| n.as_int()), 3);
/// # Ok::<(), jsontree::ParseError>(())
/// ```
pub fn parse(input: &str) -> Result<Node, ParseError> {
    parse_slice_with_config(input.as_bytes(), &ParseConfig::new())
}

/// Parses a JSON document from bytes.
///
/// Strings must decode to valid UTF-8, otherwise the parse fails with
/// [`ParseError::InvalidUtf8`].
pub fn parse_slice(input: &[u8]) -> Result<Node, ParseError> {
    parse_slice_with_config(input, &ParseConfig::new())
}

/// Parses a JSON document with explicit [`ParseConfig`] options.
pub fn parse_with_config(input: &str, config: &ParseConfig) -> Result<Node, ParseError> {
    parse_slice_with_config(input.as_bytes(), config)
}

/// Parses a JSON document from bytes with explicit [`ParseConfig`] options.
///
/// This is the core entry point that all other entry points delegate to.
pub fn parse_slice_with_config(input: &[u8], config: &ParseConfig) -> Result<Node, ParseError> {
    let mut parser = Parser::new(input, *config);
    let result = parser.parse_document();
    if let Err(err) = &result {
        log::debug!(
            "parse failed at byte {} of {}: {}",
            parser.cursor.position(),
            input.len(),
            err
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kind;

    #[test_log::test]
    fn test_dispatch_routes_by_first_byte() {
        let cases = [
            ("\"s\"", Kind::String),
            ("{}", Kind::Object),
            ("[]", Kind::Array),
            ("true", Kind::Bool),
            ("false", Kind::Bool),
            ("null", Kind::Null),
            ("-1", Kind::Number),
            ("0", Kind::Number),
            ("9.5", Kind::Number),
        ];
        for (input, kind) in cases {
            let node = parse(input).unwrap();
            assert_eq!(node.kind(), kind, "input {:?}", input);
            assert!(node.key().is_none());
        }
    }

    #[test_log::test]
    fn test_dispatch_rejects_other_bytes() {
        for input in ["+1", ".5", "]", "}", ",", ":", "'a'", "True", "x"] {
            assert_eq!(parse(input), Err(ParseError::UnexpectedToken), "input {:?}", input);
        }
    }

    #[test_log::test]
    fn test_empty_input_is_end_of_data() {
        assert_eq!(parse(""), Err(ParseError::EndOfData));
        assert_eq!(parse(" \t\r\n"), Err(ParseError::EndOfData));
    }

    #[test_log::test]
    fn test_surrounding_whitespace() {
        let node = parse("  \n[1]\n  ").unwrap();
        assert_eq!(node.count(), 1);
    }

    #[test_log::test]
    fn test_trailing_content_ignored_by_default() {
        assert_eq!(parse("1 2").map(|n| n.as_int()), Ok(1));
        assert_eq!(parse("{}garbage").map(|n| n.count()), Ok(0));
        assert_eq!(parse("12abc").map(|n| n.as_int()), Ok(12));
    }

    #[test_log::test]
    fn test_trailing_content_rejected_when_configured() {
        let strict = ParseConfig::new().allow_trailing(false);
        assert_eq!(
            parse_with_config("1 2", &strict),
            Err(ParseError::TrailingContent)
        );
        assert_eq!(
            parse_with_config("[]]", &strict),
            Err(ParseError::TrailingContent)
        );
        assert!(parse_with_config(" [1] \n", &strict).is_ok());
    }

    #[test_log::test]
    fn test_max_depth() {
        let config = ParseConfig::new().with_max_depth(2);
        assert!(parse_with_config("[{\"a\":1}]", &config).is_ok());
        assert_eq!(
            parse_with_config("[{\"a\":[1]}]", &config),
            Err(ParseError::DepthLimitExceeded)
        );
        // Scalars never count towards the depth
        let flat = ParseConfig::new().with_max_depth(0);
        assert!(parse_with_config("42", &flat).is_ok());
        assert_eq!(
            parse_with_config("[]", &flat),
            Err(ParseError::DepthLimitExceeded)
        );
    }

    #[test_log::test]
    fn test_parse_slice_rejects_invalid_utf8_strings() {
        let input = [b'"', 0xFF, b'"'];
        assert!(matches!(
            parse_slice(&input),
            Err(ParseError::InvalidUtf8(_))
        ));
        assert_eq!(parse_slice(b"[true]").map(|n| n.count()), Ok(1));
    }

    #[test_log::test]
    fn test_expect_does_not_consume_on_mismatch() {
        let mut parser = Parser::new(b"x", ParseConfig::new());
        assert_eq!(parser.expect(b'['), Err(ParseError::UnexpectedToken));
        assert_eq!(parser.cursor.position(), 0);
    }
}
