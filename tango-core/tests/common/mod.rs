#![allow(dead_code)]

use std::cell::RefCell;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tango_core::model::card::CardRecord;
use tango_core::model::config::DeckConfig;
use tango_core::services::deck::{self, DeckExporter};
use tango_core::services::segmenter::Segmenter;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Greedy longest match over a fixed vocabulary; anything else is cut
/// into single characters.
pub struct VocabSegmenter {
    vocab: Vec<String>,
}

impl VocabSegmenter {
    pub fn new(words: &[&str]) -> Self {
        let mut vocab: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        vocab.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
        Self { vocab }
    }
}

impl Segmenter for VocabSegmenter {
    fn segment(&self, sentence: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut rest = sentence.trim();

        while !rest.is_empty() {
            let len = self
                .vocab
                .iter()
                .find(|w| rest.starts_with(w.as_str()))
                .map(|w| w.len())
                .unwrap_or_else(|| rest.chars().next().map_or(1, char::len_utf8));

            let token = rest[..len].trim();
            if !token.is_empty() {
                tokens.push(token.to_string());
            }
            rest = &rest[len..];
        }

        tokens
    }
}

/// Keeps exported cards in memory instead of writing a package.
#[derive(Default)]
pub struct RecordingExporter {
    pub exported: RefCell<Vec<CardRecord>>,
}

impl DeckExporter for RecordingExporter {
    fn export(&self, deck: &DeckConfig, cards: &[CardRecord]) -> tango_core::Result<PathBuf> {
        *self.exported.borrow_mut() = cards.to_vec();
        Ok(deck::deck_path(deck))
    }
}

pub fn write_archive(path: &Path, meta_bank: &str) {
    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    zip.start_file("index.json", SimpleFileOptions::default()).unwrap();
    zip.write_all(br#"{"title": "JPDB", "format": 3}"#).unwrap();
    zip.start_file("term_meta_bank_1.json", SimpleFileOptions::default())
        .unwrap();
    zip.write_all(meta_bank.as_bytes()).unwrap();
    zip.finish().unwrap();
}
