//! File-backed sequence counter for generated challan numbering.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::spec::StoreError;

#[derive(Debug, Serialize, Deserialize)]
struct SpecCounterState {
    counter: u64,
}

/// Monotonic counter persisted as `{"counter": <int>}`.
///
/// Each [`Self::next`] call returns the current value and persists
/// current + 1. There is no atomic read-modify-write guarantee; acceptable
/// for a single-process tool.
#[derive(Debug)]
pub struct SequenceCounter {
    path_file: PathBuf,
}

impl SequenceCounter {
    /// Create a counter bound to `path_file`.
    pub fn new(path_file: PathBuf) -> Self {
        Self { path_file }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path_file
    }

    /// Return the current counter value and persist its successor.
    ///
    /// A missing backing file initializes the value to 1. A malformed
    /// backing file is logged and reset to 1.
    pub fn next(&self) -> Result<u64, StoreError> {
        let n_current = self.read_current()?;
        self.write_state(n_current + 1)?;
        Ok(n_current)
    }

    fn read_current(&self) -> Result<u64, StoreError> {
        if !self.path_file.exists() {
            return Ok(1);
        }

        let text_backing = fs::read_to_string(&self.path_file).map_err(|err| StoreError::Io {
            path: self.path_file.clone(),
            message: err.to_string(),
        })?;

        match serde_json::from_str::<SpecCounterState>(&text_backing) {
            Ok(state) => Ok(state.counter),
            Err(err) => {
                log::warn!(
                    "Invalid counter file {}: {err}. Resetting to 1.",
                    self.path_file.display()
                );
                Ok(1)
            }
        }
    }

    fn write_state(&self, n_counter: u64) -> Result<(), StoreError> {
        let text_json = serde_json::to_string(&SpecCounterState { counter: n_counter }).map_err(
            |err| StoreError::Encode {
                path: self.path_file.clone(),
                message: err.to_string(),
            },
        )?;
        fs::write(&self.path_file, text_json).map_err(|err| StoreError::Io {
            path: self.path_file.clone(),
            message: err.to_string(),
        })
    }
}
