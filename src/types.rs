// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents the total number of occurrences of a character within the cleaned text.
pub type CharFrequency = usize;

/// A `(character, count)` pair as it appears in ranked output.
pub type CharFrequencyEntry = (char, CharFrequency);

/// Frequency entries sorted by descending count, ties kept in first-seen order.
///
/// Both the console report and the chart read from this ordering.
pub type RankedFrequencyList = Vec<CharFrequencyEntry>;

/// Index of a character within a `FrequencyTable`, assigned in first-seen order.
pub type CharSlotIndex = usize;
