//! Error types for tango-core.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TangoError {
    /// Input path or extension the tool cannot read.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Neither the converted dictionary nor its zip archive exists.
    #[error("could not find the frequency dictionary at {} nor the zipped dictionary at {}", json.display(), archive.display())]
    MissingDictionary { json: PathBuf, archive: PathBuf },

    #[error("archive does not contain {0}")]
    ArchiveEntryMissing(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("segmenter error: {0}")]
    Segmenter(String),

    #[error("export error: {0}")]
    Export(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("invalid sentence separator: {0}")]
    Separator(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, TangoError>;
