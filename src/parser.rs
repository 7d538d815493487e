//! Line-by-line parser.
//!
//! Each line is normalised and classified as blank, a `[section]` header, a
//! `key = value` property, a property line missing its `=`, or something
//! else. Headers and properties are stored; a repeated section name, a
//! repeated key within a section, or a missing `=` stops the parse. Other
//! lines are skipped unless [`ReaderOptions::strict`] is set.
//!
//! The entry points come in two shapes. [`parse`] and friends always return a
//! [`Configuration`] whose session records the outcome, so callers inspect
//! [`Configuration::last_error_code`]. [`try_parse`] and [`try_parse_str`]
//! return a `Result` and drop the partially built data on failure.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::config::Configuration;
use crate::error::ParseError;
use crate::normalize::{normalize, trimmed};
use crate::options::{ReaderOptions, truncate_to};
use crate::session::Session;
use crate::store::Store;

/// Shape of a normalised line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Nothing left after trimming.
    Blank,
    /// `[name]`, with the delimiters removed.
    Header(&'a str),
    /// `key = value`, both sides trimmed.
    Property {
        /// Text before the first `=`.
        key: &'a str,
        /// Text after the first `=`.
        value: &'a str,
    },
    /// Starts like a property but has no `=`.
    MissingSeparator,
    /// Any other line.
    Unrecognised,
}

/// Classify a line that has already been normalised.
///
/// # Examples
///
/// ```
/// use ini_reader::parser::{LineKind, classify};
///
/// assert_eq!(classify("[types]"), LineKind::Header("types"));
/// assert_eq!(
///     classify("double value  = 3.5"),
///     LineKind::Property { key: "double value", value: "3.5" },
/// );
/// assert_eq!(classify("; note"), LineKind::Unrecognised);
/// ```
#[must_use]
pub fn classify(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if let Some(name) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        return LineKind::Header(name);
    }
    if line.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        return match line.split_once('=') {
            Some((key, value)) => LineKind::Property {
                key: trimmed(key),
                value: trimmed(value),
            },
            None => LineKind::MissingSeparator,
        };
    }
    LineKind::Unrecognised
}

/// Progress of a [`Parser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// No input consumed yet.
    BeforeOpen,
    /// Consuming lines.
    Reading,
    /// Input ended without a fatal error.
    DoneOk,
    /// A fatal error stopped the parse.
    DoneError,
}

/// Incremental parser producing a [`Configuration`].
///
/// The global section exists from the start, so properties before the first
/// header attach to it. After a fatal error further lines are ignored.
///
/// ```
/// use ini_reader::{ErrorCode, Parser, ReaderOptions};
///
/// let mut parser = Parser::new("inline", ReaderOptions::default());
/// for line in ["[server]", "port = 8080"] {
///     parser.feed_line(line)?;
/// }
/// let config = parser.finish();
/// assert_eq!(config.last_error_code(), ErrorCode::Success);
/// assert_eq!(config.get_int("server", "port", 0), 8080);
/// # Ok::<(), ini_reader::ParseError>(())
/// ```
#[derive(Debug)]
pub struct Parser {
    source_name: String,
    options: ReaderOptions,
    store: Store,
    session: Session,
    line: usize,
    state: ParserState,
}

impl Parser {
    /// Start a parse of the source identified by `source_name`.
    ///
    /// The name only appears in error details.
    #[must_use]
    pub fn new(source_name: impl Into<String>, options: ReaderOptions) -> Self {
        let mut store = Store::new();
        store.insert_section("");
        Self {
            source_name: source_name.into(),
            session: Session::new(options.max_text_len),
            options,
            store,
            line: 0,
            state: ParserState::BeforeOpen,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> ParserState {
        self.state
    }

    /// Number of lines consumed so far.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line
    }

    /// Consume one line of input.
    ///
    /// The line may still carry its newline. Lines fed after a fatal error
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns the error that stopped the parse. It is also recorded in the
    /// session of the finished configuration.
    pub fn feed_line(&mut self, line: &str) -> Result<(), ParseError> {
        let mut line = line.to_owned();
        self.consume(&mut line)
    }

    /// Consume every line from `reader`.
    ///
    /// A read error after some input was consumed ends the input early and
    /// keeps what was read.
    ///
    /// # Errors
    ///
    /// Returns the fatal error that stopped the parse.
    pub fn read_from<R: BufRead>(&mut self, mut reader: R) -> Result<(), ParseError> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => return Ok(()),
                Ok(_) => {
                    let mut line = String::from_utf8_lossy(&buf).into_owned();
                    self.consume(&mut line)?;
                }
                Err(e) => {
                    warn!(
                        source = %self.source_name,
                        line = self.line,
                        error = %e,
                        "Read failed; treating as end of input"
                    );
                    return Ok(());
                }
            }
        }
    }

    /// Record that the source could not be opened.
    ///
    /// # Errors
    ///
    /// Always returns [`ParseError::SourceNotFound`].
    pub fn fail_open(&mut self, source: io::Error) -> Result<(), ParseError> {
        let err = ParseError::SourceNotFound {
            source_name: self.source_name.clone(),
            source,
        };
        Err(self.latch(err))
    }

    /// End the parse and hand over the data and session.
    #[must_use]
    pub fn finish(mut self) -> Configuration {
        if self.state != ParserState::DoneError {
            self.state = ParserState::DoneOk;
        }
        debug!(
            source = %self.source_name,
            lines = self.line,
            sections = self.store.len(),
            state = ?self.state,
            "Parse finished"
        );
        Configuration::new(self.store, self.session)
    }

    fn consume(&mut self, line: &mut String) -> Result<(), ParseError> {
        match self.state {
            ParserState::DoneOk | ParserState::DoneError => return Ok(()),
            ParserState::BeforeOpen => self.state = ParserState::Reading,
            ParserState::Reading => {}
        }
        self.line += 1;
        normalize(line);

        match classify(line) {
            LineKind::Blank => Ok(()),
            LineKind::Header(name) => {
                let name = self.bounded(name, "section name");
                self.add_section(name)
            }
            LineKind::Property { key, value } => {
                let key = self.bounded(key, "key");
                let value = self.bounded(value, "value");
                self.add_property(key, value)
            }
            LineKind::MissingSeparator => Err(self.malformed()),
            LineKind::Unrecognised if self.options.strict => Err(self.malformed()),
            LineKind::Unrecognised => {
                trace!(source = %self.source_name, line = self.line, "Skipping unrecognised line");
                Ok(())
            }
        }
    }

    fn add_section(&mut self, name: String) -> Result<(), ParseError> {
        if self.store.find_section(&name).is_some() {
            let err = ParseError::DuplicateSection {
                source_name: self.source_name.clone(),
                line: self.line,
                name,
            };
            return Err(self.latch(err));
        }
        debug!(section = %name, line = self.line, "Section added");
        self.store.insert_section(name);
        Ok(())
    }

    fn add_property(&mut self, key: String, value: String) -> Result<(), ParseError> {
        let section = self.store.current_mut();
        if section.find_property(&key).is_some() {
            let err = ParseError::DuplicateProperty {
                source_name: self.source_name.clone(),
                line: self.line,
                section: section.name().to_owned(),
                key,
            };
            return Err(self.latch(err));
        }
        trace!(section = %section.name(), key = %key, line = self.line, "Property added");
        section.insert_property(key, value);
        Ok(())
    }

    fn malformed(&mut self) -> ParseError {
        let err = ParseError::MalformedPropertyLine {
            source_name: self.source_name.clone(),
            line: self.line,
        };
        self.latch(err)
    }

    /// Copy `text` into an owned field, applying the length bound.
    fn bounded(&self, text: &str, field: &'static str) -> String {
        let mut owned = text.to_owned();
        if truncate_to(&mut owned, self.options.max_text_len) {
            warn!(
                source = %self.source_name,
                line = self.line,
                field,
                limit = self.options.max_text_len,
                "Text truncated to length bound"
            );
        }
        owned
    }

    fn latch(&mut self, err: ParseError) -> ParseError {
        warn!(source = %self.source_name, error = %err, "Parse stopped");
        self.session.set(err.code(), err.to_string());
        self.state = ParserState::DoneError;
        err
    }
}

/// Parse the file at `path` with default options.
///
/// Always returns a configuration. When the file cannot be opened or a fatal
/// error is found, [`Configuration::last_error_code`] reports it and the data
/// holds whatever was read before the error.
///
/// ```no_run
/// use ini_reader::{ErrorCode, parse};
///
/// let config = parse("settings.ini");
/// if config.last_error_code() != ErrorCode::Success {
///     eprintln!("{}", config.last_error_details());
/// }
/// ```
pub fn parse(path: impl AsRef<Path>) -> Configuration {
    parse_with(path, &ReaderOptions::default())
}

/// Parse the file at `path` with the given options.
pub fn parse_with(path: impl AsRef<Path>, options: &ReaderOptions) -> Configuration {
    let path = path.as_ref();
    let mut parser = Parser::new(path.display().to_string(), options.clone());
    // The error is recorded in the session.
    let _ = drive(&mut parser, File::open(path).map(BufReader::new));
    parser.finish()
}

/// Parse in-memory text with default options.
///
/// `source_name` identifies the text in error details.
///
/// ```
/// use ini_reader::parse_str;
///
/// let config = parse_str("inline", "[types]\nstring value = accelerate\n");
/// assert_eq!(config.get_string("types", "string value", "x"), "accelerate");
/// ```
pub fn parse_str(source_name: &str, text: &str) -> Configuration {
    parse_reader(source_name, text.as_bytes(), &ReaderOptions::default())
}

/// Parse everything readable from `reader`.
pub fn parse_reader<R: BufRead>(
    source_name: &str,
    reader: R,
    options: &ReaderOptions,
) -> Configuration {
    let mut parser = Parser::new(source_name, options.clone());
    // The error is recorded in the session.
    let _ = drive(&mut parser, Ok(reader));
    parser.finish()
}

/// Parse the file at `path`, failing on the first fatal error.
///
/// # Errors
///
/// Returns the [`ParseError`] that stopped the parse.
pub fn try_parse(path: impl AsRef<Path>) -> Result<Configuration, ParseError> {
    let path = path.as_ref();
    let mut parser = Parser::new(path.display().to_string(), ReaderOptions::default());
    drive(&mut parser, File::open(path).map(BufReader::new))?;
    Ok(parser.finish())
}

/// Parse in-memory text, failing on the first fatal error.
///
/// # Errors
///
/// Returns the [`ParseError`] that stopped the parse.
pub fn try_parse_str(source_name: &str, text: &str) -> Result<Configuration, ParseError> {
    let mut parser = Parser::new(source_name, ReaderOptions::default());
    drive(&mut parser, Ok(text.as_bytes()))?;
    Ok(parser.finish())
}

fn drive<R: BufRead>(parser: &mut Parser, opened: io::Result<R>) -> Result<(), ParseError> {
    match opened {
        Ok(reader) => parser.read_from(reader),
        Err(source) => parser.fail_open(source),
    }
}
