use std::fs;
use std::path::PathBuf;

use genanki_rs::{Deck, Field, Model, Note, Template};
use log::info;
use sha2::{Digest, Sha256};

use crate::model::card::CardRecord;
use crate::model::config::DeckConfig;
use crate::{Result, TangoError};

pub const EXPORT_EXTENSION: &str = "apkg";

const MODEL_NAME: &str = "Simple Model";

const FRONT_TEMPLATE: &str = concat!(
    r#"<div style="text-align:center; font-size:40; font-weight:bold;">{{Word}}</div>"#,
    r#"<div style="text-align:center; font-size:16px; color:gray;">Frequency: {{Frequency}}</div>"#,
    r#"<div style="text-align:left; margin-top:24px; font-size:20px; padding-left:30px;">{{Sentences}}</div>"#,
);

const BACK_TEMPLATE: &str = concat!(
    r#"{{FrontSide}}<hr id="answer">"#,
    r#"<div style="text-align:center; font-size:30px; color:blue;">{{Readings}}</div>"#,
);

/// Writes finished cards somewhere a learner can use them.
pub trait DeckExporter {
    /// Returns the path of the written artifact.
    fn export(&self, deck: &DeckConfig, cards: &[CardRecord]) -> Result<PathBuf>;
}

/// Field values of one note: word, readings, sentences, frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFields {
    pub word: String,
    pub readings: String,
    pub sentences: String,
    pub frequency: String,
}

pub fn render_fields(card: &CardRecord) -> NoteFields {
    let emphasized = format!("<strong>{}</strong>", card.word);

    let sentences = card
        .sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| {
            format!(
                r#"<a href="https://jisho.org/search/{}" target="_blank">{}.</a> {}"#,
                urlencoding::encode(sentence),
                i + 1,
                sentence.replace(&card.word, &emphasized)
            )
        })
        .collect::<Vec<_>>()
        .join("<br>");

    NoteFields {
        word: card.word.clone(),
        readings: card.readings.join(", "),
        sentences,
        frequency: card.frequency.to_string(),
    }
}

/// Configured deck id, or one derived from the deck name in `[2^30, 2^31)`.
pub fn deck_id(deck: &DeckConfig) -> i64 {
    if let Some(id) = deck.deck_id {
        return id;
    }

    let digest = Sha256::digest(deck.name.as_bytes());
    let n = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);

    (1i64 << 30) + i64::from(n % (1u32 << 30))
}

pub fn deck_path(deck: &DeckConfig) -> PathBuf {
    deck.output_dir
        .join(format!("{}.{EXPORT_EXTENSION}", deck.name))
}

/// Anki package export, one note per card.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnkiExporter;

impl AnkiExporter {
    fn model(model_id: i64) -> Model {
        Model::new(
            model_id,
            MODEL_NAME,
            vec![
                Field::new("Word"),
                Field::new("Readings"),
                Field::new("Sentences"),
                Field::new("Frequency"),
            ],
            vec![Template::new("Card Template")
                .qfmt(FRONT_TEMPLATE)
                .afmt(BACK_TEMPLATE)],
        )
    }
}

impl DeckExporter for AnkiExporter {
    fn export(&self, deck: &DeckConfig, cards: &[CardRecord]) -> Result<PathBuf> {
        let model = Self::model(deck.model_id);
        let mut anki_deck = Deck::new(deck_id(deck), &deck.name, "");

        for card in cards {
            let f = render_fields(card);
            let note = Note::new(
                model.clone(),
                vec![
                    f.word.as_str(),
                    f.readings.as_str(),
                    f.sentences.as_str(),
                    f.frequency.as_str(),
                ],
            )
            .map_err(|e| TangoError::Export(e.to_string()))?;
            anki_deck.add_note(note);
        }

        if !deck.output_dir.as_os_str().is_empty() {
            fs::create_dir_all(&deck.output_dir)?;
        }

        let path = deck_path(deck);
        let path_str = path
            .to_str()
            .ok_or_else(|| TangoError::Export(format!("non UTF-8 path {}", path.display())))?;

        anki_deck
            .write_to_file(path_str)
            .map_err(|e| TangoError::Export(e.to_string()))?;

        info!("wrote deck to destination: {}", path.display());

        Ok(path)
    }
}
