//! Builds a client-side search index for a directory of static HTML pages.
//!
//! Each page contributes a [`PageRecord`] with its title, file name and
//! keywords; the records are written as a script that assigns them to a
//! global variable read by the browser-side search widget.

// Re-export modules
pub mod config;
pub mod crawlers;
pub mod emitter;
pub mod error;
pub mod filter;
pub mod keywords;
pub mod pages;
pub mod parsers;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::IndexerConfig;
pub use error::IndexError;
pub use pages::Pages;
pub use results::PageRecord;

use std::path::PathBuf;

/// Outcome of a completed indexing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    /// Where the index was written
    pub output: PathBuf,
    /// Number of page records written
    pub pages: usize,
}

/// Build the index for the configured directory and write it out
///
/// The records are fully built in memory before the output file is touched.
pub fn run(config: &IndexerConfig) -> Result<IndexSummary, IndexError> {
    let records = Pages::from_config(config)?.generate()?;

    let output = config.output_path();
    emitter::write(&output, &records, &config.global_var)?;

    Ok(IndexSummary {
        output,
        pages: records.len(),
    })
}
