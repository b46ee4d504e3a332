//! Error types for catalog-core

use crate::model::Stage;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in catalog-core
#[derive(Debug, Error)]
pub enum Error {
    /// A row has the wrong number of fields or an empty required field
    #[error("invalid {stage} data at row {index}")]
    MalformedRow { stage: Stage, index: usize },

    /// A barcode row names a supplier id that is not in the supplier set
    #[error("supplier {id} not found")]
    UnresolvedSupplier { id: String },

    /// A catalog row names a sku that has no barcodes
    #[error("no barcodes for SKU {sku} found")]
    OrphanSku { sku: String },

    /// Refusing to overwrite an existing output file
    #[error("destination file '{path}' already exists")]
    DestinationExists { path: PathBuf },

    /// Input file is missing or cannot be opened
    #[error("given file cannot be read '{path}': {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error from the csv crate
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV error while writing output
    #[error("CSV write error: {0}")]
    CsvWrite(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
