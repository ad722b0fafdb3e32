/// Remove all ANSI escape sequences from a string. Used for visible-width
/// measurement and for asserting on styled output in tests.
pub fn strip_ansi(s: &str) -> String {
    strip_ansi_escapes::strip(s)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_else(|| s.to_string())
}

/// Number of characters the terminal will actually display.
pub fn visible_len(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use k9::assert_equal;

    #[test]
    fn strips_escape_sequences() {
        assert_equal!(strip_ansi("\u{1b}[31mred\u{1b}[0m"), "red".to_string());
        assert_equal!(visible_len("\u{1b}[1m [ x ] \u{1b}[0m"), 7);
    }
}
