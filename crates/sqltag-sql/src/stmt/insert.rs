use super::{Arg, Expr};

/// An INSERT statement with one or more rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Insert {
    /// Keywords between `INSERT` and `INTO`, e.g. `IGNORE`
    pub options: Vec<String>,
    pub into: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Arg>>,

    /// Fragments appended after the VALUES list
    pub suffix: Vec<Expr>,
}

impl Insert {
    pub fn new(table: impl Into<String>) -> Insert {
        Insert {
            into: table.into(),
            ..Insert::default()
        }
    }

    pub fn options(mut self, option: impl Into<String>) -> Insert {
        self.options.push(option.into());
        self
    }

    pub fn columns<C: Into<String>>(mut self, columns: impl IntoIterator<Item = C>) -> Insert {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn values<A: Into<Arg>>(mut self, row: impl IntoIterator<Item = A>) -> Insert {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    pub fn suffix(mut self, expr: impl Into<Expr>) -> Insert {
        self.suffix.push(expr.into());
        self
    }
}
