// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Marker not found: {marker:?}")]
    MarkerNotFound { marker: String },

    #[error(
        "Block starting at line {start_line} for marker {marker:?} never closes \
         (balance {balance} at end of input)"
    )]
    UnbalancedBlock {
        marker: String,
        start_line: usize,
        balance: i64,
    },

    #[error(
        "End marker {end:?} (byte {end_offset}) comes before \
         start marker {start:?} (byte {start_offset})"
    )]
    InvertedSpan {
        start: String,
        end: String,
        start_offset: usize,
        end_offset: usize,
    },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not read source stylesheet {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Extraction failed for {rule}: {source}")]
    Extraction {
        rule: String,
        #[source]
        source: ExtractError,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ExtractError {
    pub fn marker_not_found(marker: &str) -> Self {
        ExtractError::MarkerNotFound {
            marker: marker.to_string(),
        }
    }
}
