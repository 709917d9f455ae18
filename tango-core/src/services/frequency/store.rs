use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::frequency::FrequencyTable;
use crate::Result;

pub fn archive_path(json_path: &Path) -> PathBuf {
    json_path.with_extension("zip")
}

pub fn load(path: &Path) -> Result<FrequencyTable> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Writes the table as compact JSON. Key order is sorted and non-ASCII is
/// left unescaped, so the same table always produces the same bytes.
pub fn save(path: &Path, table: &FrequencyTable) -> Result<()> {
    let json = serde_json::to_string(table)?;
    write_atomic(path, json.as_bytes())
}

/// Writes to a temporary file in the destination directory, then renames it
/// over `path`. Readers never see a half-written dictionary.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
