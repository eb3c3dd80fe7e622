use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a movie collection can be rejected before any query runs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Polars(#[from] PolarsError),

    #[error("null value in column `{column}` at row {row}")]
    NullValue { column: &'static str, row: usize },
}
