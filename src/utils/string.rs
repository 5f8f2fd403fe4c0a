//! String utility functions for line processing

/// Characters removed from both ends of every line
const LINE_WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

/// Strip spaces, tabs, carriage returns and line feeds from both ends of a line
///
/// Other Unicode whitespace is kept, so only the line boundaries of the
/// classic ASCII layout are affected.
///
/// # Arguments
///
/// * `s` - The line to strip
///
/// # Returns
///
/// The stripped slice, possibly empty
pub fn strip(s: &str) -> &str {
    s.trim_matches(&LINE_WHITESPACE[..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip() {
        assert_eq!(strip("  hello  "), "hello");
        assert_eq!(strip("\t\nhello\r\n"), "hello");
        assert_eq!(strip("a b"), "a b");
        assert_eq!(strip(" \t\r\n"), "");
    }

    #[test]
    fn test_strip_keeps_other_whitespace() {
        assert_eq!(strip("\u{a0}x\u{a0}"), "\u{a0}x\u{a0}");
        assert_eq!(strip("\x0bx"), "\x0bx");
    }
}
