//! Line normalisation.
//!
//! Lines are trimmed of the C-locale whitespace set before they are
//! classified, and keys and values are trimmed again after splitting.

/// Returns whether `c` belongs to the whitespace set stripped from line edges.
///
/// The set is space, tab, line feed, vertical tab, form feed and carriage
/// return. Other Unicode whitespace is treated as content.
#[must_use]
pub const fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Borrow `text` without its leading and trailing whitespace.
///
/// # Examples
///
/// ```
/// use ini_reader::normalize::trimmed;
///
/// assert_eq!(trimmed(" \tkey left=8\r\n"), "key left=8");
/// assert_eq!(trimmed(" \t "), "");
/// ```
#[must_use]
pub fn trimmed(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Remove leading and trailing whitespace from `line` in place.
///
/// Internal content is left untouched. A blank line becomes empty.
///
/// # Examples
///
/// ```
/// use ini_reader::normalize::normalize;
///
/// let mut line = String::from("  value both  \t");
/// normalize(&mut line);
/// assert_eq!(line, "value both");
/// ```
pub fn normalize(line: &mut String) {
    let end = line.trim_end_matches(is_space).len();
    line.truncate(end);
    let start = end - line.trim_start_matches(is_space).len();
    line.replace_range(..start, "");
}

#[cfg(test)]
mod tests {
    use super::{normalize, trimmed};
    use rstest::rstest;

    #[rstest]
    #[case::untouched("key=value", "key=value")]
    #[case::leading("  \t  \tkey left=8", "key left=8")]
    #[case::trailing("value right=12  \t  \t\n", "value right=12")]
    #[case::both("\r\n [section] \r\n", "[section]")]
    #[case::vertical_tab_and_form_feed("\x0B\x0Ckey\x0C\x0B", "key")]
    #[case::inner_whitespace_kept("a  \t b", "a  \t b")]
    #[case::blank(" \t \n", "")]
    #[case::empty("", "")]
    fn normalizes_edges(#[case] input: &str, #[case] expected: &str) {
        let mut line = input.to_owned();
        normalize(&mut line);
        assert_eq!(line, expected);
        assert_eq!(trimmed(input), expected);
    }

    #[test]
    fn unicode_spaces_are_content() {
        assert_eq!(trimmed("\u{a0}key\u{a0}"), "\u{a0}key\u{a0}");
    }
}
