use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Rank returned for words the table does not know. Never a real rank.
pub const UNRANKED: u32 = 0;

/// reading -> frequency rank
pub type Readings = BTreeMap<String, u32>;

/// word -> reading -> frequency rank, lower rank = more common.
///
/// Serialized as a plain JSON object. Keys are kept sorted so that the
/// same table always serializes to the same bytes.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FrequencyTable {
    words: BTreeMap<String, Readings>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Records `rank` for `word` read as `reading`, replacing any previous rank.
    pub fn insert(&mut self, word: &str, reading: &str, rank: u32) {
        self.words
            .entry(word.to_string())
            .or_default()
            .insert(reading.to_string(), rank);
    }

    /// Records `rank` only if `word` has no rank yet under `reading`.
    /// Returns whether the rank was stored.
    pub fn insert_if_absent(&mut self, word: &str, reading: &str, rank: u32) -> bool {
        let readings = self.words.entry(word.to_string()).or_default();
        if readings.contains_key(reading) {
            return false;
        }
        readings.insert(reading.to_string(), rank);
        true
    }

    pub fn readings(&self, word: &str) -> Option<&Readings> {
        self.words.get(word)
    }

    /// Lowest rank across all readings of `word`, or [`UNRANKED`] when the
    /// word is unknown.
    pub fn min_frequency(&self, word: &str) -> u32 {
        self.words
            .get(word)
            .and_then(|readings| readings.values().min().copied())
            .unwrap_or(UNRANKED)
    }
}
