use crate::constants::STRIPPED_CHARS;

/// Returns true for characters removed from the text before counting.
///
/// Whitespace covers the Unicode `White_Space` set plus the ASCII
/// information separators (U+001C..U+001F), which line-oriented text
/// tooling also treats as whitespace.
pub fn is_stripped_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c) || STRIPPED_CHARS.contains(&c)
}

/// Removes all whitespace and period characters from the text.
///
/// # Example
/// ```
/// use char_freq::clean_text;
///
/// assert_eq!(clean_text("a b.\tc\n"), "abc");
/// ```
pub fn clean_text(text: &str) -> String {
    text.chars().filter(|&c| !is_stripped_char(c)).collect()
}
