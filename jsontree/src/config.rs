// SPDX-License-Identifier: Apache-2.0

/// Run-time parser options.
///
/// The default reproduces the classic behaviour: unlimited nesting (bounded
/// only by the call stack) and anything after the root value ignored.
///
/// # Example
/// ```
/// use jsontree::{parse_with_config, ParseConfig, ParseError};
///
/// let strict = ParseConfig::new().with_max_depth(2).allow_trailing(false);
/// assert!(parse_with_config("[[1]]", &strict).is_ok());
/// assert_eq!(
///     parse_with_config("[[[1]]]", &strict),
///     Err(ParseError::DepthLimitExceeded)
/// );
/// assert_eq!(
///     parse_with_config("[1] x", &strict),
///     Err(ParseError::TrailingContent)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    max_depth: Option<usize>,
    allow_trailing: bool,
}

impl ParseConfig {
    pub const fn new() -> Self {
        Self {
            max_depth: None,
            allow_trailing: true,
        }
    }

    /// Fail with `DepthLimitExceeded` once arrays and objects nest deeper
    /// than `depth`. The root container is depth 1.
    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Whether bytes after the root value are ignored (`true`) or rejected
    /// with `TrailingContent` (`false`). Trailing whitespace is always fine.
    pub const fn allow_trailing(mut self, allow: bool) -> Self {
        self.allow_trailing = allow;
        self
    }

    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub const fn allows_trailing(&self) -> bool {
        self.allow_trailing
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        let config = ParseConfig::default();
        assert_eq!(config.max_depth(), None);
        assert!(config.allows_trailing());
        assert_eq!(config, ParseConfig::new());
    }

    #[test]
    fn test_builder_sets_options() {
        let config = ParseConfig::new().with_max_depth(4).allow_trailing(false);
        assert_eq!(config.max_depth(), Some(4));
        assert!(!config.allows_trailing());
    }
}
