use std::collections::{HashMap, HashSet};

use log::{debug, info};

use crate::model::card::CardRecord;
use crate::model::frequency::FrequencyTable;
use crate::parsers::sentences::SentenceSplitter;
use crate::services::ranking::{self, RankOptions};
use crate::services::segmenter::Segmenter;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardOptions {
    /// Words ranked below this are skipped. Must be positive: rank 0 means unranked.
    pub lower_freq_bound: u32,
    pub min_number_sentences: usize,
    pub reverse_order: bool,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            lower_freq_bound: 500,
            min_number_sentences: 1,
            reverse_order: false,
        }
    }
}

/// Splits `text` into sentences, segments them and returns the ranked cards.
///
/// # Panics
///
/// If `opts.lower_freq_bound` is 0.
pub fn build_cards(
    text: &str,
    table: &FrequencyTable,
    segmenter: &dyn Segmenter,
    sentence_separator: &str,
    opts: &CardOptions,
) -> Result<Vec<CardRecord>> {
    // 0 is the unranked sentinel, it can never be a pass threshold
    assert!(
        opts.lower_freq_bound > 0,
        "lower_freq_bound must be positive, got {}",
        opts.lower_freq_bound
    );

    let splitter = SentenceSplitter::new(sentence_separator)?;
    let sentences = splitter.split(text);

    let cards = aggregate(&sentences, table, segmenter, opts.lower_freq_bound);
    info!(
        "{} sentences, {} candidate words",
        sentences.len(),
        cards.len()
    );

    Ok(ranking::rank(
        cards,
        &RankOptions {
            min_number_sentences: opts.min_number_sentences,
            reverse_order: opts.reverse_order,
        },
    ))
}

/// One record per distinct word ranked at or above `lower_freq_bound`, in
/// first-occurrence order.
pub fn aggregate(
    sentences: &[&str],
    table: &FrequencyTable,
    segmenter: &dyn Segmenter,
    lower_freq_bound: u32,
) -> Vec<CardRecord> {
    let mut cards: Vec<CardRecord> = Vec::new();
    let mut index_by_word: HashMap<String, usize> = HashMap::new();

    for sentence in sentences {
        let tokens = segmenter.segment(sentence);

        for word in unique_words(&tokens) {
            let frequency = table.min_frequency(word);
            if frequency < lower_freq_bound {
                continue;
            }

            match index_by_word.get(word) {
                Some(&i) => cards[i].sentences.push(sentence.to_string()),
                None => {
                    let readings = table
                        .readings(word)
                        .map(|r| r.keys().cloned().collect())
                        .unwrap_or_default();

                    index_by_word.insert(word.to_string(), cards.len());
                    cards.push(CardRecord {
                        word: word.to_string(),
                        frequency,
                        readings,
                        sentences: vec![sentence.to_string()],
                    });
                }
            }
        }
    }

    debug!("aggregated {} cards", cards.len());

    cards
}

/// Distinct non-blank tokens of one sentence, first occurrence first.
fn unique_words(tokens: &[String]) -> Vec<&str> {
    let mut seen: HashSet<&str> = HashSet::new();

    tokens
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(*t))
        .collect()
}
