use crate::models::FrequencyTable;
use crate::types::RankedFrequencyList;

/// Ranks the entries of a `FrequencyTable`.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by count in descending order (higher count first).
/// - **Secondary:** Characters with the same count keep the order in which
///   they first appeared in the text. `sort_by` is stable, and the table
///   iterates in first-seen order, so no explicit tiebreak key is needed.
///
/// ### Example:
/// ```rust
/// use char_freq::{count_char_frequencies, sort_results};
///
/// let table = count_char_frequencies("aabbbcc");
/// assert_eq!(sort_results(&table), vec![('b', 3), ('a', 2), ('c', 2)]);
/// ```
pub fn sort_results(frequency_table: &FrequencyTable) -> RankedFrequencyList {
    let mut sorted_results: RankedFrequencyList = frequency_table.entries().to_vec();

    sorted_results.sort_by(|a, b| b.1.cmp(&a.1));

    sorted_results
}
