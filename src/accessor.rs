//! Typed getters with defaults.
//!
//! Each getter looks up a section and a key. On a hit the session is reset to
//! success and the stored text is converted. On a miss the session records
//! which lookup failed, a note naming the assumed default is appended, and the
//! caller's default is returned. Getters never fail.

use std::fmt;

use tracing::debug;

use crate::config::Configuration;
use crate::numeric::{leading_double, leading_int};
use crate::session::ErrorCode;

impl Configuration {
    /// Text value of `key` in `section`, or `default` when it is missing.
    ///
    /// ```
    /// use ini_reader::{ErrorCode, parse_str};
    ///
    /// let config = parse_str("inline", "[types]\nstring value = accelerate\n");
    /// assert_eq!(config.get_string("types", "string value", "break"), "accelerate");
    /// assert_eq!(config.get_string("types", "missing", "break"), "break");
    /// assert_eq!(config.last_error_code(), ErrorCode::PropertyNotFound);
    /// assert_eq!(
    ///     config.last_error_details(),
    ///     "property 'missing' in section [types] not found: assuming [types] missing = break",
    /// );
    /// ```
    #[must_use]
    pub fn get_string<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        match self.lookup(section, key) {
            Some(value) => value,
            None => {
                self.assume_default(section, key, default);
                default
            }
        }
    }

    /// Leading integer of the value of `key` in `section`, or `default`.
    ///
    /// Text without a numeric prefix converts to `0`.
    #[must_use]
    pub fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        match self.lookup(section, key) {
            Some(value) => leading_int(value),
            None => {
                self.assume_default(section, key, default);
                default
            }
        }
    }

    /// Leading floating-point number of the value of `key` in `section`, or
    /// `default`.
    ///
    /// Text without a numeric prefix converts to `0.0`.
    #[must_use]
    pub fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        match self.lookup(section, key) {
            Some(value) => leading_double(value),
            None => {
                self.assume_default(section, key, format_args!("{default:.6}"));
                default
            }
        }
    }

    /// Raw value of `key` in `section`, leaving the session untouched.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)
            .and_then(|s| s.find_property(key))
            .map(|p| p.value())
    }

    /// Whether `section` holds `key`, leaving the session untouched.
    #[must_use]
    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    /// Look up a value and record the outcome in the session.
    fn lookup(&self, section: &str, key: &str) -> Option<&str> {
        let mut session = self.session_mut();
        let Some(found) = self.section(section) else {
            session.set(
                ErrorCode::SectionNotFound,
                format!("section [{section}] not found"),
            );
            return None;
        };
        let Some(property) = found.find_property(key) else {
            session.set(
                ErrorCode::PropertyNotFound,
                format!("property '{key}' in section [{section}] not found"),
            );
            return None;
        };
        session.reset();
        Some(property.value())
    }

    fn assume_default(&self, section: &str, key: &str, default: impl fmt::Display) {
        let note = format!(": assuming [{section}] {key} = {default}");
        debug!(section, key, default = %default, "Using default value");
        self.session_mut().append(&note);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Configuration, ErrorCode, parse_str};
    use rstest::{fixture, rstest};

    #[fixture]
    fn config() -> Configuration {
        parse_str(
            "test.ini",
            "key in global section = -255\n\
             [section]\n\
             key in named section = 255\n\
             [types]\n\
             integer value = 42\n\
             double value  = 2.5\n\
             string value  = accelerate\n\
             empty int     =\n",
        )
    }

    #[rstest]
    fn reads_typed_values(config: Configuration) {
        assert_eq!(config.get_int("types", "integer value", -1), 42);
        assert_eq!(config.get_double("types", "double value", -1.0).to_bits(), 2.5_f64.to_bits());
        assert_eq!(config.get_string("types", "string value", "break"), "accelerate");
        assert_eq!(config.get_int("", "key in global section", -1), -255);
        assert_eq!(config.last_error_code(), ErrorCode::Success);
        assert_eq!(config.last_error_details(), "");
    }

    #[rstest]
    fn non_numeric_text_converts_to_zero(config: Configuration) {
        assert_eq!(config.get_int("types", "string value", -1), 0);
        assert_eq!(config.get_int("types", "empty int", -1), 0);
        assert_eq!(config.get_double("types", "string value", -1.0).to_bits(), 0.0_f64.to_bits());
    }

    #[rstest]
    fn missing_section_returns_default(config: Configuration) {
        assert_eq!(config.get_int("missing section", "key in named section", -1), -1);
        assert_eq!(config.last_error_code(), ErrorCode::SectionNotFound);
        assert_eq!(
            config.last_error_details(),
            "section [missing section] not found: assuming [missing section] key in named section = -1"
        );
    }

    #[rstest]
    fn missing_key_returns_default(config: Configuration) {
        assert_eq!(config.get_double("section", "missing key", 1.5).to_bits(), 1.5_f64.to_bits());
        assert_eq!(config.last_error_code(), ErrorCode::PropertyNotFound);
        assert_eq!(
            config.last_error_details(),
            "property 'missing key' in section [section] not found: assuming [section] missing key = 1.500000"
        );
    }

    #[rstest]
    fn hit_after_miss_resets_session(config: Configuration) {
        assert_eq!(config.get_string("nowhere", "k", "d"), "d");
        assert_eq!(config.get_int("section", "key in named section", -1), 255);
        assert_eq!(config.last_error_code(), ErrorCode::Success);
        assert_eq!(config.last_error_details(), "");
    }

    #[rstest]
    fn plain_get_leaves_session_alone(config: Configuration) {
        assert_eq!(config.get_string("nowhere", "k", "d"), "d");
        assert_eq!(config.get("types", "integer value"), Some("42"));
        assert!(!config.contains("types", "absent"));
        assert_eq!(config.last_error_code(), ErrorCode::SectionNotFound);
    }

    #[test]
    fn fallback_note_respects_detail_bound() {
        let config = parse_str("t", "");
        let long_key = "k".repeat(300);
        assert_eq!(config.get_int("", &long_key, 7), 7);
        assert_eq!(config.last_error_details().len(), crate::options::DEFAULT_MAX_TEXT_LEN);
    }
}
