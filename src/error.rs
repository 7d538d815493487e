//! Fatal parse errors.

use thiserror::Error;

use crate::session::ErrorCode;

/// Errors that stop a parse.
///
/// The `Display` text of each variant is the detail message stored in the
/// configuration's session when the error latches.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source could not be opened for reading.
    #[error("failed to open: {source_name}")]
    SourceNotFound {
        /// Identifier of the source as given by the caller.
        source_name: String,
        /// Error reported when opening the source.
        #[source]
        source: std::io::Error,
    },
    /// A property line has no `=` separator, or a strict parse met an
    /// unrecognised line.
    #[error("{source_name}, line {line}: Not a 'key = value' expression.")]
    MalformedPropertyLine {
        /// Identifier of the source.
        source_name: String,
        /// 1-based line number.
        line: usize,
    },
    /// A section header repeats an earlier name.
    #[error("{source_name}, line {line}: Duplicate section defined.")]
    DuplicateSection {
        /// Identifier of the source.
        source_name: String,
        /// 1-based line number.
        line: usize,
        /// Repeated section name.
        name: String,
    },
    /// A key repeats within the current section.
    #[error("{source_name}, line {line}: Duplicate property key defined.")]
    DuplicateProperty {
        /// Identifier of the source.
        source_name: String,
        /// 1-based line number.
        line: usize,
        /// Section holding the earlier definition.
        section: String,
        /// Repeated key.
        key: String,
    },
}

impl ParseError {
    /// Session code recorded for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::SourceNotFound { .. } => ErrorCode::SourceNotFound,
            Self::MalformedPropertyLine { .. } => ErrorCode::MalformedPropertyLine,
            Self::DuplicateSection { .. } => ErrorCode::DuplicateSection,
            Self::DuplicateProperty { .. } => ErrorCode::DuplicateProperty,
        }
    }

    /// Line the error was found on, if it came from a line.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::SourceNotFound { .. } => None,
            Self::MalformedPropertyLine { line, .. }
            | Self::DuplicateSection { line, .. }
            | Self::DuplicateProperty { line, .. } => Some(*line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ParseError;
    use crate::ErrorCode;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn messages_name_source_and_line() {
        let err = ParseError::DuplicateSection {
            source_name: "test_repeat.ini".into(),
            line: 2,
            name: "repeat section".into(),
        };
        assert_eq!(err.to_string(), "test_repeat.ini, line 2: Duplicate section defined.");
        assert_eq!(err.code(), ErrorCode::DuplicateSection);
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn open_failure_keeps_io_source() {
        let err = ParseError::SourceNotFound {
            source_name: "missing.ini".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to open: missing.ini");
        assert_eq!(err.line(), None);
        assert!(err.source().is_some());
    }
}
