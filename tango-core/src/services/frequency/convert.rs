use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info};
use serde::de::IgnoredAny;
use serde::Deserialize;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::model::frequency::FrequencyTable;
use crate::{Result, TangoError};

/// Term frequency bank inside a yomitan-style dictionary archive.
pub const META_BANK: &str = "term_meta_bank_1.json";

#[derive(Debug, Deserialize)]
pub struct FrequencyValue {
    pub value: u32,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FrequencyMeta {
    /// Kanji compound with an explicit reading.
    WithReading {
        reading: String,
        frequency: FrequencyValue,
    },
    /// Word already written in kana; it is its own reading.
    Plain { value: u32 },
}

/// `[word, kind, metadata]`
pub type MetaEntry = (String, IgnoredAny, FrequencyMeta);

pub fn convert_archive(archive_path: &Path) -> Result<FrequencyTable> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;

    let mut data = String::new();
    match archive.by_name(META_BANK) {
        Ok(mut bank) => {
            bank.read_to_string(&mut data)?;
        }
        Err(ZipError::FileNotFound) => {
            return Err(TangoError::ArchiveEntryMissing(META_BANK.to_string()));
        }
        Err(e) => return Err(e.into()),
    }

    let entries: Vec<MetaEntry> = serde_json::from_str(&data)?;
    let table = convert_entries(entries);

    info!(
        "converted {} ({} words)",
        archive_path.display(),
        table.len()
    );

    Ok(table)
}

/// Builds the table from meta bank entries, in bank order.
///
/// The bank is ordered most frequent first. Kana words such as は can
/// appear several times; only the first rank is kept for them.
pub fn convert_entries(entries: impl IntoIterator<Item = MetaEntry>) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    let mut dropped = 0usize;

    for (word, _, meta) in entries {
        match meta {
            FrequencyMeta::WithReading { reading, frequency } => {
                table.insert(&word, &reading, frequency.value);
            }
            FrequencyMeta::Plain { value } => {
                if !table.insert_if_absent(&word, &word, value) {
                    dropped += 1;
                }
            }
        }
    }

    debug!("dropped {dropped} repeated kana entries");

    table
}
