//! Cache store - serialize, read and write the cache file
//!
//! The on-disk form is pretty-printed JSON, parsed back with a plain
//! structured parser; the file can never carry executable content. Writes
//! land in a process-unique sibling file and rename into place, so a
//! concurrent reader only ever observes a complete cache.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use crate::cache::model::Cache;
use crate::error::Error;
use crate::Result;

/// Render a cache to its on-disk textual form
pub fn serialize(cache: &Cache) -> Result<String> {
    let mut text = serde_json::to_string_pretty(cache).map_err(Error::Serialize)?;
    text.push('\n');
    Ok(text)
}

/// Parse the on-disk textual form back into a cache
pub fn deserialize(text: &str) -> serde_json::Result<Cache> {
    serde_json::from_str(text)
}

/// Read and parse the cache file
pub fn read_cache(path: &Path) -> Result<Cache> {
    let text = fs::read_to_string(path).map_err(|err| Error::Read {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    deserialize(&text).map_err(|err| Error::Read {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

/// Serialize and write the cache, creating parent directories as needed
pub fn write_cache(cache: &Cache, path: &Path) -> Result<()> {
    let text = serialize(cache)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    let tmp = temp_path(path);
    fs::write(&tmp, text).map_err(|source| Error::Write {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Sibling temp file, unique per process
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("cache.json");
    path.with_file_name(format!(".{}.{}.tmp", name, process::id()))
}
