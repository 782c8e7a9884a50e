//! JSON persistence helpers
//!
//! Writes go through a temp file and a rename, so a crash leaves either the
//! old or the new contents on disk.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{PouparError, PouparResult};

/// Wrap an I/O or serde failure on `path` as a storage error
fn storage_err(action: &str, path: &Path, err: impl std::fmt::Display) -> PouparError {
    PouparError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Read JSON from a file; a missing file yields `T::default()`
pub fn read_json<T, P>(path: P) -> PouparResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(storage_err("open", path, e)),
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_err("parse", path, e))
}

/// Write JSON next to `path` under a `.tmp` name, sync, then rename over it
pub fn write_json_atomic<T, P>(path: P, data: &T) -> PouparResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_err("create directory", parent, e))?;
    }

    let temp_path = path.with_extension("json.tmp");
    let result = write_synced(&temp_path, data).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| storage_err("replace", path, e))
    });
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_synced<T: Serialize>(path: &Path, data: &T) -> PouparResult<()> {
    let file = File::create(path).map_err(|e| storage_err("create", path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data).map_err(|e| storage_err("serialize", path, e))?;
    writer.flush().map_err(|e| storage_err("flush", path, e))?;
    writer.get_ref().sync_all().map_err(|e| storage_err("sync", path, e))
}
