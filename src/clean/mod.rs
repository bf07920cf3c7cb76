use std::collections::HashMap;

use tracing::debug;

use crate::error::{FrameError, Result};
use crate::frame::{Table, Value};

/// Whether one missing cell is enough to drop a row/column, or every cell
/// must be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropMode {
    Any,
    All,
}

/// Which axis drop-missing removes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Columns,
}

/// Named-field configuration for [`drop_missing`]. Defaults match the
/// broadest cleaning pass: drop any row with at least one missing cell,
/// inspecting every column.
#[derive(Debug, Clone)]
pub struct DropConfig {
    pub mode: DropMode,
    pub axis: Axis,
    /// Columns inspected when deciding whether a row qualifies for
    /// removal. `None` inspects all columns. Only meaningful when
    /// dropping rows.
    pub subset: Option<Vec<String>>,
}

impl Default for DropConfig {
    fn default() -> Self {
        DropConfig {
            mode: DropMode::Any,
            axis: Axis::Rows,
            subset: None,
        }
    }
}

/// Remove rows (or columns) containing missing cells, returning a new
/// table. Relative order of what survives is preserved.
pub fn drop_missing(table: &Table, cfg: &DropConfig) -> Result<Table> {
    match cfg.axis {
        Axis::Rows => drop_rows(table, cfg),
        Axis::Columns => {
            if cfg.subset.is_some() {
                return Err(FrameError::Config(
                    "subset is only valid when dropping rows".to_string(),
                ));
            }
            drop_columns(table, cfg.mode)
        }
    }
}

fn drop_rows(table: &Table, cfg: &DropConfig) -> Result<Table> {
    let inspect: Vec<usize> = match &cfg.subset {
        Some(names) => names
            .iter()
            .map(|n| table.column_index(n))
            .collect::<Result<_>>()?,
        None => (0..table.num_columns()).collect(),
    };

    let rows: Vec<Vec<Value>> = table
        .rows()
        .iter()
        .filter(|row| {
            let qualifies = match cfg.mode {
                DropMode::Any => inspect.iter().any(|&i| row[i].is_missing()),
                DropMode::All => {
                    !inspect.is_empty() && inspect.iter().all(|&i| row[i].is_missing())
                }
            };
            !qualifies
        })
        .cloned()
        .collect();

    debug!(
        dropped = table.num_rows() - rows.len(),
        kept = rows.len(),
        "dropped rows with missing cells"
    );
    Table::new(table.columns().to_vec(), rows)
}

fn drop_columns(table: &Table, mode: DropMode) -> Result<Table> {
    let keep: Vec<usize> = (0..table.num_columns())
        .filter(|&i| {
            let qualifies = match mode {
                DropMode::Any => table.rows().iter().any(|row| row[i].is_missing()),
                DropMode::All => {
                    !table.rows().is_empty()
                        && table.rows().iter().all(|row| row[i].is_missing())
                }
            };
            !qualifies
        })
        .collect();

    let columns: Vec<String> = keep.iter().map(|&i| table.columns()[i].clone()).collect();
    let rows: Vec<Vec<Value>> = table
        .rows()
        .iter()
        .map(|row| keep.iter().map(|&i| row[i].clone()).collect())
        .collect();

    debug!(
        dropped = table.num_columns() - columns.len(),
        kept = columns.len(),
        "dropped columns with missing cells"
    );
    Table::new(columns, rows)
}

/// Replace every missing cell with `fill`, uniformly. Non-missing cells
/// are untouched, so the operation is idempotent.
pub fn fill_missing(table: &Table, fill: &Value) -> Table {
    let rows: Vec<Vec<Value>> = table
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    if cell.is_missing() {
                        fill.clone()
                    } else {
                        cell.clone()
                    }
                })
                .collect()
        })
        .collect();
    // same schema, same widths, cannot fail
    Table::new(table.columns().to_vec(), rows).unwrap_or_else(|_| table.clone())
}

/// Replace missing cells using a per-column default; columns without an
/// entry keep their missing cells. Naming an absent column is a
/// configuration error.
pub fn fill_missing_per_column(
    table: &Table,
    defaults: &HashMap<String, Value>,
) -> Result<Table> {
    let mut by_index: HashMap<usize, &Value> = HashMap::with_capacity(defaults.len());
    for (name, value) in defaults {
        by_index.insert(table.column_index(name)?, value);
    }

    let rows: Vec<Vec<Value>> = table
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(i, cell)| match by_index.get(&i) {
                    Some(fill) if cell.is_missing() => (*fill).clone(),
                    _ => cell.clone(),
                })
                .collect()
        })
        .collect();
    Table::new(table.columns().to_vec(), rows)
}

/// Mean of a numeric column over its non-missing cells, for mean-filling.
/// Returns `None` when every cell is missing. A text or boolean cell in
/// the column is a value-type error.
pub fn column_mean(table: &Table, column: &str) -> Result<Option<f64>> {
    let idx = table.column_index(column)?;
    let mut sum = 0.0;
    let mut count = 0usize;
    for (row_idx, row) in table.rows().iter().enumerate() {
        match &row[idx] {
            Value::Int(i) => {
                sum += *i as f64;
                count += 1;
            }
            Value::Float(f) => {
                sum += f;
                count += 1;
            }
            Value::Missing => {}
            other => {
                return Err(FrameError::ValueType {
                    column: column.to_string(),
                    row: row_idx,
                    expected: "integer or float",
                    found: other.kind(),
                })
            }
        }
    }
    if count == 0 {
        Ok(None)
    } else {
        Ok(Some(sum / count as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_missing() -> Table {
        Table::new(
            vec!["name".into(), "age".into()],
            vec![
                vec![Value::Text("ann".into()), Value::Int(5)],
                vec![Value::Missing, Value::Int(7)],
                vec![Value::Missing, Value::Missing],
            ],
        )
        .unwrap()
    }

    #[test]
    fn drop_any_removes_rows_with_any_missing_cell() {
        let t = with_missing();
        let out = drop_missing(&t, &DropConfig::default()).unwrap();
        assert_eq!(out.num_rows(), 1);
        assert_eq!(out.rows()[0][0], Value::Text("ann".into()));
        // original untouched
        assert_eq!(t.num_rows(), 3);
        // idempotent
        let again = drop_missing(&out, &DropConfig::default()).unwrap();
        assert_eq!(again, out);
    }

    #[test]
    fn drop_all_keeps_partially_missing_rows() {
        let t = with_missing();
        let cfg = DropConfig {
            mode: DropMode::All,
            ..DropConfig::default()
        };
        let out = drop_missing(&t, &cfg).unwrap();
        assert_eq!(out.num_rows(), 2);
        assert!(out.rows()[1][0].is_missing());
    }

    #[test]
    fn drop_with_subset_inspects_only_named_columns() {
        let t = with_missing();
        let cfg = DropConfig {
            subset: Some(vec!["age".into()]),
            ..DropConfig::default()
        };
        let out = drop_missing(&t, &cfg).unwrap();
        // only the all-missing row has a missing age
        assert_eq!(out.num_rows(), 2);
    }

    #[test]
    fn drop_with_unknown_subset_column_errors() {
        let t = with_missing();
        let cfg = DropConfig {
            subset: Some(vec!["salary".into()]),
            ..DropConfig::default()
        };
        assert!(matches!(
            drop_missing(&t, &cfg),
            Err(FrameError::Config(_))
        ));
    }

    #[test]
    fn drop_columns_axis() {
        let t = with_missing();
        let cfg = DropConfig {
            axis: Axis::Columns,
            ..DropConfig::default()
        };
        let out = drop_missing(&t, &cfg).unwrap();
        // both columns contain a missing cell somewhere
        assert_eq!(out.num_columns(), 0);

        let partial = Table::new(
            vec!["a".into(), "b".into()],
            vec![
                vec![Value::Int(1), Value::Missing],
                vec![Value::Int(2), Value::Int(3)],
            ],
        )
        .unwrap();
        let out = drop_missing(&partial, &cfg).unwrap();
        assert_eq!(out.columns(), &["a".to_string()]);
        assert_eq!(out.rows()[1], vec![Value::Int(2)]);
    }

    #[test]
    fn subset_with_column_axis_is_rejected() {
        let t = with_missing();
        let cfg = DropConfig {
            axis: Axis::Columns,
            subset: Some(vec!["name".into()]),
            ..DropConfig::default()
        };
        assert!(matches!(
            drop_missing(&t, &cfg),
            Err(FrameError::Config(_))
        ));
    }

    #[test]
    fn fill_replaces_only_missing_cells() {
        let t = with_missing();
        let out = fill_missing(&t, &Value::Text(String::new()));
        assert_eq!(out.rows()[1][0], Value::Text(String::new()));
        assert_eq!(out.rows()[1][1], Value::Int(7));
        assert_eq!(out.rows()[0][0], Value::Text("ann".into()));
        // fill(fill(t, v), v) == fill(t, v)
        assert_eq!(fill_missing(&out, &Value::Text(String::new())), out);
    }

    #[test]
    fn fill_per_column_uses_named_defaults() {
        let t = with_missing();
        let mut defaults = HashMap::new();
        defaults.insert("age".to_string(), Value::Int(0));
        let out = fill_missing_per_column(&t, &defaults).unwrap();
        assert_eq!(out.rows()[2][1], Value::Int(0));
        // name column had no default, stays missing
        assert!(out.rows()[2][0].is_missing());
    }

    #[test]
    fn mean_skips_missing_and_rejects_text() {
        let t = with_missing();
        assert_eq!(column_mean(&t, "age").unwrap(), Some(6.0));
        assert!(matches!(
            column_mean(&t, "name"),
            Err(FrameError::ValueType { .. })
        ));
    }

    #[test]
    fn mean_of_all_missing_column_is_none() {
        let t = Table::new(
            vec!["x".into()],
            vec![vec![Value::Missing], vec![Value::Missing]],
        )
        .unwrap();
        assert_eq!(column_mean(&t, "x").unwrap(), None);
    }
}
