use std::path::{Path, PathBuf};

use log::info;
use crate::model::card::CardRecord;
use crate::model::config::BuildConfig;
use crate::services::cards::{self, CardOptions};
use crate::services::deck::DeckExporter;
use crate::services::segmenter::Segmenter;
use crate::services::{frequency, input, summary};
use crate::{Result, TangoError};

#[derive(Debug)]
pub struct PipelineReport {
    pub cards: Vec<CardRecord>,
    pub summary: String,
    pub deck_path: PathBuf,
}

fn validate(cfg: &BuildConfig) -> Result<()> {
    if cfg.lower_freq_bound == 0 {
        return Err(TangoError::Config(
            "lower_freq_bound must be at least 1 (0 marks unranked words)".into(),
        ));
    }
    if cfg.deck.name.trim().is_empty() {
        return Err(TangoError::Config("deck name is required".into()));
    }
    Ok(())
}

/// Dictionary -> input text -> ranked cards.
///
/// The configuration is checked and the frequency dictionary loaded before
/// `make_segmenter` is called, so a bad config or a missing dictionary is
/// reported without loading the segmenter.
pub fn build<F>(cfg: &BuildConfig, input_path: &Path, make_segmenter: F) -> Result<Vec<CardRecord>>
where
    F: FnOnce(&BuildConfig) -> Result<Box<dyn Segmenter>>,
{
    validate(cfg)?;

    let table = frequency::load(&cfg.dictionary_path)?;
    let text = input::read_text_or_folder(input_path, cfg.clean_subtitles)?;
    let segmenter = make_segmenter(cfg)?;

    let opts = CardOptions {
        lower_freq_bound: cfg.lower_freq_bound,
        min_number_sentences: cfg.min_number_sentences,
        reverse_order: cfg.reverse_order,
    };
    let cards = cards::build_cards(&text, &table, segmenter.as_ref(), &cfg.sentence_separator, &opts)?;
    info!("{} cards after filtering", cards.len());

    Ok(cards)
}

/// [`build`], hand the summary to `on_summary`, then export the cards as one deck.
pub fn run<F, S>(
    cfg: &BuildConfig,
    input_path: &Path,
    make_segmenter: F,
    exporter: &dyn DeckExporter,
    on_summary: S,
) -> Result<PipelineReport>
where
    F: FnOnce(&BuildConfig) -> Result<Box<dyn Segmenter>>,
    S: FnOnce(&str),
{
    let cards = build(cfg, input_path, make_segmenter)?;

    let summary = summary::format_summary(&cards);
    on_summary(&summary);

    let deck_path = exporter.export(&cfg.deck, &cards)?;

    Ok(PipelineReport {
        cards,
        summary,
        deck_path,
    })
}
