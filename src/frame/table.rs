use crate::error::{FrameError, Result};
use crate::frame::value::{TypeMismatch, Value};

/// Row-major table over a fixed, named column schema.
///
/// Row order is insertion order from the source file and is preserved by
/// every operation except explicit row dropping. Operations never mutate
/// in place; they return a new `Table`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Build a table, checking that every row has exactly one cell per
    /// column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Table> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(FrameError::Config(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    columns.len()
                )));
            }
        }
        Ok(Table { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Position of a named column, or a configuration error naming the
    /// missing column.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| FrameError::Config(format!("no column named '{}'", name)))
    }

    /// All cells of a named column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<&Value>> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| &row[idx]).collect())
    }

    /// Apply a pure per-value function to every cell of a named column,
    /// returning a new table. A failure on any cell aborts the whole
    /// operation with a value-type error; no partially transformed table
    /// is ever produced.
    pub fn apply<F>(&self, column: &str, f: F) -> Result<Table>
    where
        F: Fn(&Value) -> std::result::Result<Value, TypeMismatch>,
    {
        let idx = self.column_index(column)?;
        let mut rows = Vec::with_capacity(self.rows.len());
        for (row_idx, row) in self.rows.iter().enumerate() {
            let mut out = row.clone();
            out[idx] = f(&row[idx]).map_err(|m| FrameError::ValueType {
                column: column.to_string(),
                row: row_idx,
                expected: m.expected,
                found: m.found,
            })?;
            rows.push(out);
        }
        Ok(Table {
            columns: self.columns.clone(),
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::value::capitalize;

    fn sample() -> Table {
        Table::new(
            vec!["name".into(), "age".into()],
            vec![
                vec![Value::Text("ab".into()), Value::Int(5)],
                vec![Value::Text("cd".into()), Value::Int(7)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn new_rejects_ragged_rows() {
        let err = Table::new(
            vec!["a".into(), "b".into()],
            vec![vec![Value::Int(1)]],
        )
        .unwrap_err();
        assert!(matches!(err, FrameError::Config(_)));
    }

    #[test]
    fn column_lookup() {
        let t = sample();
        assert_eq!(t.column_index("age").unwrap(), 1);
        assert!(t.column_index("missing").is_err());
        let ages = t.column("age").unwrap();
        assert_eq!(ages, vec![&Value::Int(5), &Value::Int(7)]);
    }

    #[test]
    fn apply_transforms_one_column_only() {
        let t = sample();
        let out = t.apply("name", capitalize).unwrap();
        assert_eq!(out.rows()[0][0], Value::Text("Ab".into()));
        assert_eq!(out.rows()[1][0], Value::Text("Cd".into()));
        // other column and row count untouched
        assert_eq!(out.rows()[0][1], Value::Int(5));
        assert_eq!(out.num_rows(), 2);
        // original unchanged
        assert_eq!(t.rows()[0][0], Value::Text("ab".into()));
        // idempotent on already-capitalized input
        assert_eq!(out.apply("name", capitalize).unwrap(), out);
    }

    #[test]
    fn apply_fails_whole_operation_on_bad_cell() {
        let t = sample();
        let err = t.apply("age", capitalize).unwrap_err();
        match err {
            FrameError::ValueType {
                column,
                row,
                expected,
                found,
            } => {
                assert_eq!(column, "age");
                assert_eq!(row, 0);
                assert_eq!(expected, "text");
                assert_eq!(found, "integer");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
