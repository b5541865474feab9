//! On-disk encoding: bincode with a size limit, written via a temp file.

use std::fs;
use std::path::Path;

use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::PersistError;

/// Upper bound on a record; a full game snapshot is a few kilobytes.
const MAX_RECORD_BYTES: u64 = 1 << 20;

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(MAX_RECORD_BYTES)
}

/// Encode a record to bytes.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, PersistError> {
    options().serialize(value).map_err(PersistError::Encode)
}

/// Decode a record read from `path`.
pub fn decode<T: DeserializeOwned>(path: &Path, bytes: &[u8]) -> Result<T, PersistError> {
    options().deserialize(bytes).map_err(|source| PersistError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and decode the record stored at `path`.
pub fn read_record<T: DeserializeOwned>(path: &Path) -> Result<T, PersistError> {
    let bytes = fs::read(path).map_err(|e| PersistError::io(path, e))?;
    decode(path, &bytes)
}

/// Encode `value` and replace the file at `path` with it.
///
/// Parent directories are created. The bytes go to a sibling `.tmp` file
/// first, so a failed write never truncates the previous record.
pub fn write_record<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistError> {
    let bytes = encode(value)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PersistError::io(parent, e))?;
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, &bytes).map_err(|e| PersistError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| PersistError::io(path, e))
}
