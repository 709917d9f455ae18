use log::debug;

use crate::model::card::CardRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOptions {
    pub min_number_sentences: usize,
    pub reverse_order: bool,
}

/// Orders cards by ascending frequency rank, then applies the sentence
/// count filter and the optional reversal.
///
/// Sorting is stable: equal ranks keep first-occurrence order.
pub fn rank(mut cards: Vec<CardRecord>, opts: &RankOptions) -> Vec<CardRecord> {
    cards.sort_by_key(|c| c.frequency);

    let cards = filter_min_sentences(cards, opts.min_number_sentences);

    if opts.reverse_order {
        cards.into_iter().rev().collect()
    } else {
        cards
    }
}

/// With a bound above 1, keeps only cards with strictly more sentences than
/// the bound: a bound of 2 requires 3 sentences. A bound of 0 or 1 keeps
/// everything.
pub fn filter_min_sentences(cards: Vec<CardRecord>, min_number_sentences: usize) -> Vec<CardRecord> {
    if min_number_sentences <= 1 {
        return cards;
    }

    let before = cards.len();
    let kept: Vec<CardRecord> = cards
        .into_iter()
        .filter(|c| c.sentence_count() > min_number_sentences)
        .collect();

    debug!(
        "dropped {} cards with {} sentences or fewer",
        before - kept.len(),
        min_number_sentences
    );

    kept
}
