use crate::models::FrequencyTable;
use crate::types::{CharFrequency, CharFrequencyEntry, RankedFrequencyList};
use crate::utils::{clean_text, count_char_frequencies, sort_results};
use log::debug;

/// Result of cleaning, tallying and ranking one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyAnalysis {
    clean_text: String,
    frequency_table: FrequencyTable,
    ranked: RankedFrequencyList,
}

impl FrequencyAnalysis {
    pub fn from_text(raw_text: &str) -> Self {
        let clean_text = clean_text(raw_text);
        let frequency_table = count_char_frequencies(&clean_text);
        let ranked = sort_results(&frequency_table);

        debug!(
            "Cleaned {} chars down to {}; {} distinct",
            raw_text.chars().count(),
            clean_text.chars().count(),
            frequency_table.len()
        );

        FrequencyAnalysis {
            clean_text,
            frequency_table,
            ranked,
        }
    }

    pub fn clean_text(&self) -> &str {
        &self.clean_text
    }

    pub fn frequency_table(&self) -> &FrequencyTable {
        &self.frequency_table
    }

    pub fn ranked(&self) -> &[CharFrequencyEntry] {
        &self.ranked
    }

    /// The first `n` ranked entries, or all of them if there are fewer.
    pub fn top(&self, n: usize) -> &[CharFrequencyEntry] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    pub fn total_count(&self) -> CharFrequency {
        self.frequency_table.total_count()
    }

    pub fn distinct_count(&self) -> usize {
        self.frequency_table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}
