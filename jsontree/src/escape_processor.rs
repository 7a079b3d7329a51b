// SPDX-License-Identifier: Apache-2.0

/// Translation of backslash escapes inside string literals.
pub(crate) struct EscapeProcessor;

impl EscapeProcessor {
    /// Process the byte following a backslash and return the unescaped byte.
    ///
    /// The eight simple JSON escapes are translated. Any other byte is passed
    /// through as-is, so `\x` yields `x` and `\u0041` yields `u0041`.
    ///
    /// # Examples
    /// ```ignore
    /// // Internal API - see unit tests for usage examples
    /// assert_eq!(EscapeProcessor::process_simple_escape(b'n'), b'\n');
    /// ```
    pub fn process_simple_escape(escape_char: u8) -> u8 {
        match escape_char {
            b'n' => b'\n',
            b't' => b'\t',
            b'r' => b'\r',
            b'\\' => b'\\',
            b'"' => b'"',
            b'/' => b'/',
            b'b' => 0x08, // Backspace
            b'f' => 0x0C, // Form feed
            other => other,
        }
    }
}
