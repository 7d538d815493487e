//! Per-parse error state.
//!
//! A [`Session`] keeps the latest [`ErrorCode`] and a bounded detail message.
//! The parser overwrites it once when a fatal error stops the parse; the
//! accessors overwrite it on every lookup and append a note when they fall
//! back to a default.

use std::fmt;

use crate::options::truncate_to;

/// Outcome codes recorded in a [`Session`].
///
/// The discriminants are stable and may be exchanged with other tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    /// The last operation succeeded.
    Success = 0,
    /// The input could not be opened for reading.
    SourceNotFound = -1,
    /// A line starting with an alphanumeric character has no `=`.
    MalformedPropertyLine = -10,
    /// A section header repeats an earlier section name.
    DuplicateSection = -11,
    /// A property key repeats within one section.
    DuplicateProperty = -12,
    /// An accessor asked for a section that does not exist.
    SectionNotFound = -21,
    /// An accessor asked for a key missing from its section.
    PropertyNotFound = -22,
}

impl ErrorCode {
    /// Numeric value of the code.
    ///
    /// ```
    /// use ini_reader::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::DuplicateSection.code(), -11);
    /// ```
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Look up the code with the given numeric value.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            -1 => Some(Self::SourceNotFound),
            -10 => Some(Self::MalformedPropertyLine),
            -11 => Some(Self::DuplicateSection),
            -12 => Some(Self::DuplicateProperty),
            -21 => Some(Self::SectionNotFound),
            -22 => Some(Self::PropertyNotFound),
            _ => None,
        }
    }

    /// Short human-readable description of the code.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::SourceNotFound => "configuration source could not be opened",
            Self::MalformedPropertyLine => "line is not a 'key = value' expression",
            Self::DuplicateSection => "section defined more than once",
            Self::DuplicateProperty => "property key defined more than once in a section",
            Self::SectionNotFound => "section not found",
            Self::PropertyNotFound => "property not found",
        }
    }

    /// Whether the code stops a parse.
    ///
    /// Lookup misses are informational and never fatal.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(
            self,
            Self::SourceNotFound
                | Self::MalformedPropertyLine
                | Self::DuplicateSection
                | Self::DuplicateProperty
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Latest error code and detail text of one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    code: ErrorCode,
    details: String,
    limit: usize,
}

impl Session {
    /// Create a clean session whose details are bounded to `limit` bytes.
    ///
    /// A `limit` of zero leaves the details unbounded.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self {
            code: ErrorCode::Success,
            details: String::new(),
            limit,
        }
    }

    /// Latest recorded code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Latest detail text.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Replace the code and detail text.
    pub fn set(&mut self, code: ErrorCode, details: impl Into<String>) {
        self.code = code;
        self.details = details.into();
        truncate_to(&mut self.details, self.limit);
    }

    /// Append `note` to the detail text, keeping the code.
    pub fn append(&mut self, note: &str) {
        self.details.push_str(note);
        truncate_to(&mut self.details, self.limit);
    }

    /// Return to [`ErrorCode::Success`] with empty details.
    pub fn reset(&mut self) {
        self.code = ErrorCode::Success;
        self.details.clear();
    }
}
