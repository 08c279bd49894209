use std::path::PathBuf;
use thiserror::Error;

use crate::repair::RepairFailure;

/// The main error type for scrycsv operations.
#[derive(Debug, Error)]
pub enum ScrycsvError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid search endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to decode search response from {url}: {message}")]
    ResponseDecode { url: String, message: String },

    #[error("Response from {url} reports more pages but carries no next_page")]
    MissingNextPage { url: String },

    #[error("Cannot repair image_uris for record {index} ('{name}'): {reason}")]
    RepairFailed {
        index: usize,
        name: String,
        reason: RepairFailure,
    },

    #[error("Failed to write CSV to {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid separator: {0}")]
    InvalidSeparator(String),
}
