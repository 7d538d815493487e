//! Reader options.
//!
//! [`ReaderOptions`] controls how strictly input is interpreted and how long
//! stored text may grow. It deserialises with serde so applications can embed
//! it in their own configuration; every field has a default.

use serde::{Deserialize, Serialize};

/// Default byte bound for names, keys, values and error details.
///
/// Matches the 256-byte buffers of earlier readers of this format, less the
/// terminating NUL.
pub const DEFAULT_MAX_TEXT_LEN: usize = 255;

/// Options applied to a single parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderOptions {
    /// Byte bound for section names, keys, values and error details.
    ///
    /// Longer text is cut at the last character boundary within the bound.
    /// Zero disables the bound.
    #[serde(default = "default_max_text_len")]
    pub max_text_len: usize,
    /// Reject non-blank lines that are neither headers nor properties.
    ///
    /// Such lines are skipped silently when `false`.
    #[serde(default)]
    pub strict: bool,
}

fn default_max_text_len() -> usize {
    DEFAULT_MAX_TEXT_LEN
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            max_text_len: DEFAULT_MAX_TEXT_LEN,
            strict: false,
        }
    }
}

impl ReaderOptions {
    /// Options with no length bound.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            max_text_len: 0,
            ..Self::default()
        }
    }

    /// Enable or disable strict line checking.
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set the text length bound in bytes.
    #[must_use]
    pub const fn with_max_text_len(mut self, max_text_len: usize) -> Self {
        self.max_text_len = max_text_len;
        self
    }
}

/// Truncate `text` to at most `limit` bytes on a character boundary.
///
/// Returns `true` when text was removed. A zero `limit` never truncates.
pub(crate) fn truncate_to(text: &mut String, limit: usize) -> bool {
    if limit == 0 || text.len() <= limit {
        return false;
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
    true
}
