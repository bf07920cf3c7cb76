use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{FrameError, Result};
use crate::frame::{Table, Value};
use crate::load::mapping::ColumnMap;

/// Where column names come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    /// Row 0 is a label row supplying column names.
    FirstRow,
    /// Every row is data; columns are named by position, "0".."M-1".
    None,
}

/// Load a CSV file into a `Table`.
///
/// The whole file is materialized; the handle is released as soon as the
/// records are in memory. Cell types are inferred per cell, see
/// [`Value::infer`].
pub fn read_csv<P: AsRef<Path>>(path: P, header: Header) -> Result<Table> {
    let path = path.as_ref();
    let mut records = read_records(path)?;

    let (columns, rows) = match header {
        Header::FirstRow => {
            if records.is_empty() {
                (Vec::new(), records)
            } else {
                let label_row = records.remove(0);
                let raw: Vec<String> = label_row.iter().map(|s| s.trim().to_string()).collect();
                (dedupe_headers(raw), records)
            }
        }
        Header::None => {
            let width = records.first().map_or(0, |r| r.len());
            ((0..width).map(|i| i.to_string()).collect(), records)
        }
    };

    let rows: Vec<Vec<Value>> = rows
        .iter()
        .map(|record| record.iter().map(Value::infer).collect())
        .collect();

    debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = columns.len(),
        "loaded csv"
    );
    Table::new(columns, rows)
}

/// Load a headerless CSV file keeping only the source positions the
/// descriptor lists, named by the descriptor's destination names. Row 0 is
/// data, never a label row.
pub fn read_csv_with_map<P: AsRef<Path>>(path: P, map: &ColumnMap) -> Result<Table> {
    map.validate()?;
    let path = path.as_ref();
    let records = read_records(path)?;

    if let Some(first) = records.first() {
        if let Some(&bad) = map.usecols.iter().find(|&&c| c >= first.len()) {
            return Err(FrameError::Config(format!(
                "descriptor references column position {} but the file has {} columns",
                bad,
                first.len()
            )));
        }
    }

    let rows: Vec<Vec<Value>> = records
        .iter()
        .map(|record| {
            map.usecols
                .iter()
                .map(|&c| Value::infer(&record[c]))
                .collect()
        })
        .collect();

    debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = map.columns.len(),
        "loaded csv with column map"
    );
    Table::new(map.columns.clone(), rows)
}

/// Read every record, surfacing a missing file as not-found and ragged or
/// misquoted content as a parse error (the reader runs strict, not
/// flexible, so inconsistent field counts fail).
fn read_records(path: &Path) -> Result<Vec<csv::StringRecord>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FrameError::NotFound {
            path: path.to_path_buf(),
        },
        _ => FrameError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(file);

    let mut records = Vec::new();
    for result in reader.records() {
        records.push(result?);
    }
    Ok(records)
}

/// Column names must be unique within a table; the second and later
/// occurrence of a duplicate gets a ".1", ".2", … suffix.
fn dedupe_headers(raw: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<String> = Vec::with_capacity(raw.len());
    for name in raw {
        let seen = counts.entry(name.clone()).or_insert(0);
        // a raw header can also collide with a name an earlier dedupe
        // generated (e.g. "a,a,a.1"), so check what is already out too
        if *seen == 0 && !out.contains(&name) {
            *seen = 1;
            out.push(name);
            continue;
        }
        let mut suffix = (*seen).max(1);
        let mut candidate = format!("{}.{}", name, suffix);
        while out.contains(&candidate) {
            suffix += 1;
            candidate = format!("{}.{}", name, suffix);
        }
        *seen = suffix + 1;
        out.push(candidate);
    }
    out
}
