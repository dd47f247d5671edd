use thiserror::Error;

/// Errors that can occur while loading a job dataset.
///
/// The filter engine itself has no recoverable error conditions — missing
/// fields degrade to non-matches — so the error surface is confined to
/// getting the dataset off disk and into memory.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate job identifier: {0}")]
    DuplicateJobId(String),
}
