use crate::models::FrequencyTable;

/// Counts the frequency of every character in the given text.
///
/// No character class filtering is applied; clean the text first.
///
/// # Arguments
/// * `clean_text` - The text to tally.
///
/// # Returns
/// * A `FrequencyTable` whose entries are in first-seen order.
///
/// # Example
/// ```
/// use char_freq::count_char_frequencies;
///
/// let table = count_char_frequencies("aabbbcc");
/// assert_eq!(table.get('a'), Some(2));
/// assert_eq!(table.get('b'), Some(3));
/// assert_eq!(table.entries(), &[('a', 2), ('b', 3), ('c', 2)]);
/// ```
pub fn count_char_frequencies(clean_text: &str) -> FrequencyTable {
    let mut frequencies = FrequencyTable::new();

    for ch in clean_text.chars() {
        frequencies.upsert_char(ch);
    }

    frequencies
}
