use crate::stmt::Value;

/// Rows returned by a query, column labels first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rows {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// Outcome of a statement returning no rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecResult {
    pub rows_affected: u64,
    pub last_insert_id: Option<u64>,
}

impl Rows {
    pub fn new(columns: impl IntoIterator<Item = impl Into<String>>) -> Rows {
        Rows {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: vec![],
        }
    }

    pub fn with_row(mut self, row: impl IntoIterator<Item = impl Into<Value>>) -> Rows {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(label, value)` pairs of the row at `index`.
    pub fn row(&self, index: usize) -> Option<impl Iterator<Item = (&str, &Value)>> {
        let row = self.rows.get(index)?;
        Some(self.columns.iter().map(String::as_str).zip(row))
    }
}

impl ExecResult {
    pub fn new(rows_affected: u64) -> ExecResult {
        ExecResult {
            rows_affected,
            last_insert_id: None,
        }
    }

    pub fn with_last_insert_id(mut self, id: u64) -> ExecResult {
        self.last_insert_id = Some(id);
        self
    }
}
