//! Backing-file name constants.

/// Company master data file name inside the data directory.
pub const NAME_FILE_COMPANY_DATA: &str = "company_data.json";
/// Transport master data file name inside the data directory.
pub const NAME_FILE_TRANSPORT_DATA: &str = "transport_data.json";
/// Sequence counter file name inside the data directory.
pub const NAME_FILE_COUNTER: &str = "file_counter.json";
