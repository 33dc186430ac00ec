//! `challankit_store` v1:
//! Flat-file persistence kernel for challan master data.
//!
//! Architecture:
//! - `conf`    : backing-file name constants
//! - `spec`    : record models, data paths, error types
//! - `store`   : JSON-backed key-value record store
//! - `counter` : monotonic file-name sequence counter

pub mod conf;
pub mod counter;
pub mod spec;
pub mod store;

pub use conf::{NAME_FILE_COMPANY_DATA, NAME_FILE_COUNTER, NAME_FILE_TRANSPORT_DATA};
pub use counter::SequenceCounter;
pub use spec::{SpecCompanyRecord, SpecDataPaths, SpecTransportRecord, StoreError};
pub use store::RecordStore;
