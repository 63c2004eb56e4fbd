//! Error types for loading reference data.
//!
//! Segmentation itself never fails; these errors only come from reading word
//! lists and suffix tables or from fetching dictionary pages.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or fetching reference data
#[derive(Debug, Error)]
pub enum Error {
    /// The dictionary service could not be reached or returned an error status
    #[error("Network error: {0}")]
    Network(String),

    /// A file could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON file did not contain a list of strings
    #[error("Malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The dictionary service answered with something other than a headword list
    #[error("Unexpected dictionary response: {0}")]
    Response(String),

    /// A letter is missing from the cache and downloading is not compiled in
    #[error("'{0}' words are not cached and download support is disabled")]
    DownloadDisabled(char),
}

/// A specialized `Result` type for reference-data operations.
pub type Result<T> = std::result::Result<T, Error>;
