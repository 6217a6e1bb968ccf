pub mod history;
pub mod rates;

pub use history::{ConversionRecord, HistoryLog};
pub use rates::RateStore;

use crate::error::Error;
use serde::Serialize;
use std::path::Path;
use std::{fs, io};

/// Persists a value as pretty JSON via a sibling temp file and rename, so a
/// reader never observes a half-written file in the common case.
pub(crate) fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), Error> {
    let write = || -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(value).map_err(io::Error::from)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)
    };
    write().map_err(|source| Error::persistence(path, source))
}
