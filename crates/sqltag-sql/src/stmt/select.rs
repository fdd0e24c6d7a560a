use super::Expr;

/// A SELECT statement.
///
/// Filters are joined with `AND`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    pub columns: Vec<String>,
    pub from: Option<String>,
    pub joins: Vec<Join>,
    pub filters: Vec<Expr>,
    pub group_by: Vec<String>,
    pub having: Vec<Expr>,
    pub order_by: Vec<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Join {
    /// A complete clause, rendered as given
    Clause(Expr),

    /// `JOIN <table>`
    Inner(String),
}

impl Select {
    pub fn new<C: Into<String>>(columns: impl IntoIterator<Item = C>) -> Select {
        Select {
            columns: columns.into_iter().map(Into::into).collect(),
            ..Select::default()
        }
    }

    pub fn column(mut self, column: impl Into<String>) -> Select {
        self.columns.push(column.into());
        self
    }

    pub fn from(mut self, table: impl Into<String>) -> Select {
        self.from = Some(table.into());
        self
    }

    /// Adds a complete join clause such as `LEFT JOIN s ON s.id = a.sid`.
    pub fn join_clause(mut self, clause: impl Into<Expr>) -> Select {
        self.joins.push(Join::Clause(clause.into()));
        self
    }

    /// Adds `JOIN <table>`.
    pub fn join(mut self, table: impl Into<String>) -> Select {
        self.joins.push(Join::Inner(table.into()));
        self
    }

    pub fn filter(mut self, expr: impl Into<Expr>) -> Select {
        self.filters.push(expr.into());
        self
    }

    pub fn group_by(mut self, expr: impl Into<String>) -> Select {
        self.group_by.push(expr.into());
        self
    }

    pub fn having(mut self, expr: impl Into<Expr>) -> Select {
        self.having.push(expr.into());
        self
    }

    pub fn order_by(mut self, expr: impl Into<String>) -> Select {
        self.order_by.push(expr.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Select {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Select {
        self.offset = Some(offset);
        self
    }
}
