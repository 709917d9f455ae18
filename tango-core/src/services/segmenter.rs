use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use vibrato::{Dictionary, Tokenizer};

use crate::model::config::{BuildConfig, SegmenterKind};
use crate::{Result, TangoError};

/// Splits one sentence into word tokens.
///
/// Implementations never return empty or whitespace-only tokens, and an
/// empty sentence yields no tokens.
pub trait Segmenter {
    fn segment(&self, sentence: &str) -> Vec<String>;
}

/// Morphological segmentation backed by a vibrato system dictionary.
pub struct VibratoSegmenter {
    tokenizer: Tokenizer,
}

impl VibratoSegmenter {
    /// Loads a compiled dictionary. Files ending in `.zst` are decompressed on the fly.
    pub fn from_dictionary(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TangoError::Config(format!(
                "segmenter dictionary not found at {}",
                path.display()
            )));
        }

        let file = File::open(path)?;
        let is_zstd = path.extension().map_or(false, |e| e == "zst");

        let dict = if is_zstd {
            Dictionary::read(zstd::Decoder::new(file)?)
        } else {
            Dictionary::read(BufReader::new(file))
        }
        .map_err(|e| TangoError::Segmenter(e.to_string()))?;

        let tokenizer = Tokenizer::new(dict)
            .ignore_space(true)
            .map_err(|e| TangoError::Segmenter(e.to_string()))?;

        info!("loaded segmenter dictionary {}", path.display());

        Ok(Self { tokenizer })
    }
}

impl Segmenter for VibratoSegmenter {
    fn segment(&self, sentence: &str) -> Vec<String> {
        if sentence.trim().is_empty() {
            return Vec::new();
        }

        let mut worker = self.tokenizer.new_worker();
        worker.reset_sentence(sentence);
        worker.tokenize();

        worker
            .token_iter()
            .map(|t| t.surface().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// For wakati-gaki input, where words are already separated by spaces.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn segment(&self, sentence: &str) -> Vec<String> {
        sentence.split_whitespace().map(str::to_string).collect()
    }
}

pub fn from_config(cfg: &BuildConfig) -> Result<Box<dyn Segmenter>> {
    match cfg.segmenter {
        SegmenterKind::Vibrato => Ok(Box::new(VibratoSegmenter::from_dictionary(
            &cfg.segmenter_dictionary,
        )?)),
        SegmenterKind::Whitespace => Ok(Box::new(WhitespaceSegmenter)),
    }
}
