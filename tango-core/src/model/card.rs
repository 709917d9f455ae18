use serde::{Deserialize, Serialize};

/// One flashcard candidate: a distinct surface form and everything
/// gathered about it while reading the corpus.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CardRecord {
    pub word: String,

    /// Rank of the most common reading.
    pub frequency: u32,

    #[serde(default)]
    pub readings: Vec<String>,

    /// Sentences in order of appearance. Append-only while aggregating.
    #[serde(default)]
    pub sentences: Vec<String>,
}

impl CardRecord {
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }
}
