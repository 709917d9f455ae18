use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_dictionary_path() -> PathBuf {
    PathBuf::from("fdict").join("JPDB_v2.2_Frequency_Kana_2024-10-13.json")
}

fn default_segmenter_dictionary() -> PathBuf {
    PathBuf::from("fdict")
        .join("ipadic-mecab-2_7_0")
        .join("system.dic.zst")
}

fn default_sentence_separator() -> String {
    r"\n".to_string()
}

fn default_lower_freq_bound() -> u32 {
    1
}

fn default_min_number_sentences() -> usize {
    1
}

fn default_deck_name() -> String {
    "dict".to_string()
}

fn default_model_id() -> i64 {
    1098333037
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SegmenterKind {
    /// Morphological analysis with a vibrato system dictionary.
    #[default]
    Vibrato,
    /// Text that is already split by spaces.
    Whitespace,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    #[serde(default = "default_deck_name")]
    pub name: String,

    /// Stable deck id. Derived from `name` when absent.
    #[serde(default)]
    pub deck_id: Option<i64>,

    #[serde(default = "default_model_id")]
    pub model_id: i64,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            name: default_deck_name(),
            deck_id: None,
            model_id: default_model_id(),
            output_dir: default_output_dir(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Converted frequency dictionary. The archive lives next to it with a `.zip` suffix.
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: PathBuf,

    #[serde(default)]
    pub segmenter: SegmenterKind,

    #[serde(default = "default_segmenter_dictionary")]
    pub segmenter_dictionary: PathBuf,

    /// Regex the input text is split on.
    #[serde(default = "default_sentence_separator")]
    pub sentence_separator: String,

    #[serde(default = "default_lower_freq_bound")]
    pub lower_freq_bound: u32,

    #[serde(default = "default_min_number_sentences")]
    pub min_number_sentences: usize,

    #[serde(default)]
    pub reverse_order: bool,

    /// Strip cue numbers, timings and tags from .srt input.
    #[serde(default)]
    pub clean_subtitles: bool,

    #[serde(default)]
    pub deck: DeckConfig,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            dictionary_path: default_dictionary_path(),
            segmenter: SegmenterKind::default(),
            segmenter_dictionary: default_segmenter_dictionary(),
            sentence_separator: default_sentence_separator(),
            lower_freq_bound: default_lower_freq_bound(),
            min_number_sentences: default_min_number_sentences(),
            reverse_order: false,
            clean_subtitles: false,
            deck: DeckConfig::default(),
        }
    }
}
