use std::path::PathBuf;
use thiserror::Error;

/// Library error, one variant per failure kind. None of these are
/// recovered internally; callers surface them and terminate.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited content: unterminated quote, ragged row widths.
    #[error("malformed csv: {0}")]
    Parse(#[from] csv::Error),

    /// Malformed column-mapping descriptor text.
    #[error("malformed descriptor: {0}")]
    Descriptor(#[from] serde_json::Error),

    /// Inconsistent descriptor lists, unknown column names, out-of-range
    /// column positions.
    #[error("{0}")]
    Config(String),

    /// A transform applied to a cell it cannot handle.
    #[error("column '{column}' row {row}: expected {expected}, found {found}")]
    ValueType {
        column: String,
        row: usize,
        expected: &'static str,
        found: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, FrameError>;
