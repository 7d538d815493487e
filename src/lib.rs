//! Reader for sectioned `key = value` configuration files.
//!
//! A file is read line by line into named sections of text properties:
//!
//! ```text
//! key in global section = -255
//! [types]
//! integer value = 42
//! string value  = accelerate
//! ```
//!
//! Properties before the first header belong to the global section, named
//! `""`. Leading and trailing whitespace is insignificant on every line and
//! around keys and values. The format has no comments, quoting, escapes,
//! lists or nesting.
//!
//! Parsing stops at the first fatal error: a repeated section, a repeated key
//! within a section, or an alphanumeric line without `=`. The returned
//! [`Configuration`] keeps the data read so far and records the error, which
//! callers check before using the data. Typed getters fall back to a caller
//! supplied default and note the fallback in the same error state.
//!
//! # Examples
//!
//! ```
//! use ini_reader::{ErrorCode, parse_str};
//!
//! let config = parse_str("inline", "[types]\ninteger value = 42\n");
//! assert_eq!(config.last_error_code(), ErrorCode::Success);
//! assert_eq!(config.get_int("types", "integer value", -1), 42);
//! assert_eq!(config.get_int("types", "absent", -1), -1);
//! assert_eq!(config.last_error_code(), ErrorCode::PropertyNotFound);
//! ```

mod accessor;
pub mod config;
pub mod error;
pub mod normalize;
pub mod numeric;
pub mod options;
pub mod parser;
pub mod session;
pub mod store;

pub use config::Configuration;
pub use error::ParseError;
pub use options::{DEFAULT_MAX_TEXT_LEN, ReaderOptions};
pub use parser::{
    Parser, ParserState, parse, parse_reader, parse_str, parse_with, try_parse, try_parse_str,
};
pub use session::{ErrorCode, Session};
pub use store::{Property, Section, Store};
