use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FrameError, Result};

/// External column-mapping descriptor.
///
/// `usecols` lists the zero-based source positions to keep and `columns`
/// the destination names for those positions, in the same order. The
/// `version` and `last_updated` fields are provenance only; loading never
/// consumes them. Keeping the mapping in a file means a schema change is a
/// descriptor edit, not a code change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnMap {
    pub usecols: Vec<usize>,
    pub columns: Vec<String>,
    pub version: String,
    pub last_updated: String,
}

impl ColumnMap {
    /// Read and validate a descriptor from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ColumnMap> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FrameError::NotFound {
                path: path.to_path_buf(),
            },
            _ => FrameError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        let map: ColumnMap = serde_json::from_str(&text)?;
        map.validate()?;
        debug!(
            path = %path.display(),
            version = %map.version,
            columns = map.columns.len(),
            "loaded column map"
        );
        Ok(map)
    }

    /// Mismatched list lengths are rejected outright rather than
    /// truncated; a descriptor that disagrees with itself is a bad edit,
    /// not a request to keep fewer columns.
    pub fn validate(&self) -> Result<()> {
        if self.usecols.len() != self.columns.len() {
            return Err(FrameError::Config(format!(
                "descriptor lists disagree: {} source positions but {} destination names",
                self.usecols.len(),
                self.columns.len()
            )));
        }
        Ok(())
    }
}

impl fmt::Display for ColumnMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "usecols:      {:?}", self.usecols)?;
        writeln!(f, "columns:      {:?}", self.columns)?;
        writeln!(f, "version:      {}", self.version)?;
        write!(f, "last_updated: {}", self.last_updated)
    }
}
