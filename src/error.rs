use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an indexing run
#[derive(Debug, Error)]
pub enum IndexError {
    /// The root directory could not be listed
    #[error("failed to list pages in {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be read
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration was not valid JSON for `IndexerConfig`
    #[error("invalid configuration: {0}")]
    ConfigParse(#[source] serde_json::Error),

    /// An include/exclude pattern failed to compile
    #[error("invalid file pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The page records could not be serialized
    #[error("failed to serialize index: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The output artifact could not be written
    #[error("failed to write index to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
