use crate::types::{CharFrequency, CharFrequencyEntry, CharSlotIndex};
use std::collections::HashMap;

/// Character occurrence counts that remember first-seen order.
///
/// Each new character is assigned the next slot; `entries()` iterates in
/// slot order, which is what the stable ranking sort relies on for ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    slot_map: HashMap<char, CharSlotIndex>,
    entries: Vec<CharFrequencyEntry>,
}

impl FrequencyTable {
    /// Creates a new, empty FrequencyTable
    pub fn new() -> Self {
        FrequencyTable {
            slot_map: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Adds one occurrence of `ch`, inserting it if unseen, and returns its slot
    pub fn upsert_char(&mut self, ch: char) -> CharSlotIndex {
        if let Some(&slot) = self.slot_map.get(&ch) {
            self.entries[slot].1 += 1;
            slot
        } else {
            let slot = self.entries.len();
            self.slot_map.insert(ch, slot);
            self.entries.push((ch, 1));
            slot
        }
    }

    /// Gets the count for a character, or None if it was never seen
    pub fn get(&self, ch: char) -> Option<CharFrequency> {
        self.slot_map.get(&ch).map(|&slot| self.entries[slot].1)
    }

    /// Entries in first-seen order
    pub fn entries(&self) -> &[CharFrequencyEntry] {
        &self.entries
    }

    /// Gets the total number of distinct characters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total_count(&self) -> CharFrequency {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}
