use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::parsers::srt;
use crate::services::encoding;
use crate::{Result, TangoError};

/// Extensions read as text. Others may work but are untested.
pub const VALID_EXTENSIONS: [&str; 2] = ["txt", "srt"];

fn has_valid_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| VALID_EXTENSIONS.contains(&e))
}

fn is_subtitle(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "srt")
}

fn read_one(path: &Path, clean_subtitles: bool) -> Result<String> {
    let text = encoding::read_file(path)?;
    if clean_subtitles && is_subtitle(path) {
        return Ok(srt::clean(&text));
    }
    Ok(text)
}

/// Reads a text file, or every text file directly inside a directory.
///
/// Directory contents are merged in file name order, separated by a line
/// break. Subdirectories and files with other extensions are skipped.
pub fn read_text_or_folder(path: &Path, clean_subtitles: bool) -> Result<String> {
    if path.is_file() {
        if !has_valid_extension(path) {
            return Err(TangoError::InvalidInput(format!(
                "file {} does not have a valid text extension",
                path.display()
            )));
        }
        return read_one(path, clean_subtitles);
    }

    if path.is_dir() {
        let mut files: Vec<PathBuf> = fs::read_dir(path)?
            .flatten()
            .map(|entry| entry.path())
            .filter(|p| p.is_file())
            .collect();
        files.sort();

        let mut merged: Vec<String> = Vec::with_capacity(files.len());
        for file in &files {
            if !has_valid_extension(file) {
                debug!("skipping {}", file.display());
                continue;
            }
            merged.push(read_one(file, clean_subtitles)?);
        }

        info!("merged {} files from {}", merged.len(), path.display());
        return Ok(merged.join("\n"));
    }

    Err(TangoError::InvalidInput(format!(
        "path {} is neither a valid file nor a directory",
        path.display()
    )))
}
