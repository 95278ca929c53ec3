use std::str::FromStr;

use crate::{Error, Result};

/// The exact leading whitespace of a block's closing line.
///
/// Always non-empty and made only of spaces and tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentPrefix(String);

impl IndentPrefix {
    /// Validate a literal indent prefix.
    ///
    /// # Errors
    /// Returns `Error::InvalidIndent` if the prefix is empty or contains
    /// anything other than spaces and tabs.
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(Error::InvalidIndent {
                indent: prefix,
                reason: "indent prefix must not be empty",
            });
        }
        if !prefix.chars().all(|c| c == ' ' || c == '\t') {
            return Err(Error::InvalidIndent {
                indent: prefix,
                reason: "indent prefix may only contain spaces and tabs",
            });
        }
        Ok(Self(prefix))
    }

    /// An indent prefix of `width` spaces.
    pub fn spaces(width: usize) -> Result<Self> {
        Self::new(" ".repeat(width))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for IndentPrefix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Leading run of spaces and tabs of `line`.
pub(crate) fn leading_whitespace(line: &str) -> &str {
    let rest = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - rest.len()]
}
