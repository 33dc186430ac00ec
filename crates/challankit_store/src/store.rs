//! JSON-backed key-value store for one named record collection.

use std::collections::BTreeMap;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::spec::StoreError;

/// File-backed mapping from record name to record attributes.
///
/// One instance owns one backing file. There is no locking; the last
/// writer wins (single-user, single-process tool).
#[derive(Debug)]
pub struct RecordStore<T> {
    path_file: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> RecordStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create a store bound to `path_file`. The file is not touched until
    /// the first [`Self::load`] or [`Self::save`].
    pub fn new(path_file: PathBuf) -> Self {
        Self {
            path_file,
            _marker: PhantomData,
        }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path_file
    }

    /// Load the full collection.
    ///
    /// A missing or empty backing file is initialized to `{}` and yields an
    /// empty mapping. A malformed backing file is logged and yields an empty
    /// mapping rather than failing the caller.
    pub fn load(&self) -> Result<BTreeMap<String, T>, StoreError> {
        if !self.path_file.exists() {
            self.write_text("{}")?;
            return Ok(BTreeMap::new());
        }

        let text_backing = fs::read_to_string(&self.path_file).map_err(|err| StoreError::Io {
            path: self.path_file.clone(),
            message: err.to_string(),
        })?;

        if text_backing.trim().is_empty() {
            self.write_text("{}")?;
            return Ok(BTreeMap::new());
        }

        match serde_json::from_str::<BTreeMap<String, T>>(&text_backing) {
            Ok(dict_records) => Ok(dict_records),
            Err(err) => {
                log::warn!(
                    "Invalid JSON in {}: {err}. Substituting empty collection.",
                    self.path_file.display()
                );
                Ok(BTreeMap::new())
            }
        }
    }

    /// Persist the full collection, replacing the backing file content.
    pub fn save(&self, dict_records: &BTreeMap<String, T>) -> Result<(), StoreError> {
        let text_json =
            serde_json::to_string_pretty(dict_records).map_err(|err| StoreError::Encode {
                path: self.path_file.clone(),
                message: err.to_string(),
            })?;
        self.write_text(&text_json)
    }

    fn write_text(&self, text: &str) -> Result<(), StoreError> {
        fs::write(&self.path_file, text).map_err(|err| StoreError::Io {
            path: self.path_file.clone(),
            message: err.to_string(),
        })
    }
}
