// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur during JSON parsing.
///
/// A failed parse never hands back a partial tree: everything built before
/// the error has already been released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A byte that cannot start or continue the current construct.
    UnexpectedToken,
    /// End of input was reached inside a string.
    UnterminatedString,
    /// Input ended where a value or delimiter was required.
    EndOfData,
    /// `t`, `f` or `n` not followed by the exact `true`, `false` or `null` literal.
    InvalidLiteral,
    /// Non-whitespace content after the root value (only when trailing content is disallowed).
    TrailingContent,
    /// Arrays and objects nested deeper than the configured limit.
    DepthLimitExceeded,
    /// A decoded string was not valid UTF-8.
    InvalidUtf8(core::str::Utf8Error),
}

impl From<core::str::Utf8Error> for ParseError {
    fn from(err: core::str::Utf8Error) -> Self {
        ParseError::InvalidUtf8(err)
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::InvalidUtf8(e) => write!(f, "Invalid UTF-8: {e}"),
            _ => write!(f, "{self:?}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
