//! Record models, data-directory paths, and store error types.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::conf::{NAME_FILE_COMPANY_DATA, NAME_FILE_COUNTER, NAME_FILE_TRANSPORT_DATA};

////////////////////////////////////////////////////////////////////////////////
// #region RecordModels

/// Supplier/company master record, keyed externally by uppercase company name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpecCompanyRecord {
    /// First address line.
    pub address1: String,
    /// Second address line.
    pub address2: String,
    /// GST identification number.
    pub gst: String,
}

/// Transport master record, keyed externally by uppercase transport name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpecTransportRecord {
    /// Destination station.
    pub station: String,
    /// GST identification number.
    pub gst: String,
    /// Dispatch way/route description.
    pub way: String,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region DataPaths

/// Resolved backing-file paths under one data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecDataPaths {
    /// Company master data file.
    pub path_file_company: PathBuf,
    /// Transport master data file.
    pub path_file_transport: PathBuf,
    /// Sequence counter file.
    pub path_file_counter: PathBuf,
}

impl SpecDataPaths {
    /// Derive backing-file paths under `dir_data`, creating the directory
    /// when it does not exist yet.
    pub fn derive<P: AsRef<Path>>(dir_data: P) -> Result<Self, StoreError> {
        let path_dir_data = dir_data.as_ref().to_path_buf();
        fs::create_dir_all(&path_dir_data).map_err(|err| StoreError::Io {
            path: path_dir_data.clone(),
            message: err.to_string(),
        })?;

        Ok(Self {
            path_file_company: path_dir_data.join(NAME_FILE_COMPANY_DATA),
            path_file_transport: path_dir_data.join(NAME_FILE_TRANSPORT_DATA),
            path_file_counter: path_dir_data.join(NAME_FILE_COUNTER),
        })
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Store-level failures (IO and serialization only; a malformed backing
/// file is logged and treated as empty, never returned as an error).
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing a backing file failed.
    Io {
        /// Backing file or directory path.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Serializing records for persistence failed.
    Encode {
        /// Backing file path.
        path: PathBuf,
        /// Underlying serialization error text.
        message: String,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "Store IO failure at {}: {message}", path.display())
            }
            Self::Encode { path, message } => {
                write!(f, "Store encode failure at {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
