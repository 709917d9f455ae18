pub mod convert;
pub mod store;

use std::path::Path;

use log::info;

use crate::model::frequency::FrequencyTable;
use crate::{Result, TangoError};

/// Loads the converted dictionary at `json_path`.
///
/// When it does not exist yet, converts the zip archive next to it
/// (same stem, `.zip` suffix) and caches the result at `json_path`.
pub fn load(json_path: &Path) -> Result<FrequencyTable> {
    if !json_path.exists() {
        let archive = store::archive_path(json_path);
        if !archive.exists() {
            return Err(TangoError::MissingDictionary {
                json: json_path.to_path_buf(),
                archive,
            });
        }

        let table = convert::convert_archive(&archive)?;
        store::save(json_path, &table)?;
        info!("cached frequency dict at {}", json_path.display());
        return Ok(table);
    }

    let table = store::load(json_path)?;
    info!(
        "loaded frequency dict {} ({} words)",
        json_path.display(),
        table.len()
    );
    Ok(table)
}
