use super::{Arg, Expr};

/// A single-table UPDATE statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Update {
    pub table: String,
    pub assignments: Vec<(String, Arg)>,
    pub filters: Vec<Expr>,
    pub order_by: Vec<String>,
    pub limit: Option<u64>,
}

impl Update {
    pub fn new(table: impl Into<String>) -> Update {
        Update {
            table: table.into(),
            ..Update::default()
        }
    }

    pub fn set(mut self, column: impl Into<String>, value: impl Into<Arg>) -> Update {
        self.assignments.push((column.into(), value.into()));
        self
    }

    pub fn filter(mut self, expr: impl Into<Expr>) -> Update {
        self.filters.push(expr.into());
        self
    }

    pub fn order_by(mut self, expr: impl Into<String>) -> Update {
        self.order_by.push(expr.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Update {
        self.limit = Some(limit);
        self
    }
}
