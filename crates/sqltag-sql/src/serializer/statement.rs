use super::{Comma, Delimited, Formatter, Params, ToSql};

use crate::stmt::{Arg, Insert, Join, Select, Statement, Update};

use sqltag_core::{Error, Result};

impl Statement {
    /// Checks the statement can be rendered.
    pub(super) fn verify(&self) -> Result<()> {
        match self {
            Statement::Select(stmt) => {
                if stmt.columns.is_empty() {
                    return Err(Error::invalid_statement(
                        "select statements must have at least one result column",
                    ));
                }
            }
            Statement::Insert(stmt) => {
                if stmt.into.is_empty() {
                    return Err(Error::invalid_statement(
                        "insert statements must specify a table",
                    ));
                }
                if stmt.rows.is_empty() {
                    return Err(Error::invalid_statement(
                        "insert statements must have at least one set of values",
                    ));
                }
                if !stmt.columns.is_empty() {
                    for (index, row) in stmt.rows.iter().enumerate() {
                        if row.len() != stmt.columns.len() {
                            return Err(Error::invalid_statement(format!(
                                "insert row {index} has {} values for {} columns",
                                row.len(),
                                stmt.columns.len()
                            )));
                        }
                    }
                }
            }
            Statement::Update(stmt) => {
                if stmt.table.is_empty() {
                    return Err(Error::invalid_statement(
                        "update statements must specify a table",
                    ));
                }
                if stmt.assignments.is_empty() {
                    return Err(Error::invalid_statement(
                        "update statements must have at least one SET clause",
                    ));
                }
            }
        }

        Ok(())
    }
}

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            // Fully qualified: the statements also have an inherent `to_sql`
            Statement::Select(stmt) => ToSql::to_sql(stmt, f),
            Statement::Insert(stmt) => ToSql::to_sql(stmt, f),
            Statement::Update(stmt) => ToSql::to_sql(stmt, f),
        }
    }
}

impl ToSql for &Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let columns = Comma(&self.columns);
        fmt!(f, "SELECT " columns);

        if let Some(from) = &self.from {
            fmt!(f, " FROM " from);
        }

        for join in &self.joins {
            fmt!(f, " " join);
        }

        if !self.filters.is_empty() {
            let filters = Delimited(&self.filters, " AND ");
            fmt!(f, " WHERE " filters);
        }

        if !self.group_by.is_empty() {
            let group_by = Comma(&self.group_by);
            fmt!(f, " GROUP BY " group_by);
        }

        if !self.having.is_empty() {
            let having = Delimited(&self.having, " AND ");
            fmt!(f, " HAVING " having);
        }

        OrderLimit {
            order_by: &self.order_by,
            limit: self.limit,
        }
        .to_sql(f);

        if let Some(offset) = self.offset {
            fmt!(f, " OFFSET " (&offset.to_string()));
        }
    }
}

impl ToSql for &Join {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Join::Clause(clause) => clause.to_sql(f),
            Join::Inner(table) => fmt!(f, "JOIN " table),
        }
    }
}

impl ToSql for &Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "INSERT ");

        for option in &self.options {
            fmt!(f, option " ");
        }

        fmt!(f, "INTO " (&self.into));

        if !self.columns.is_empty() {
            let columns = Delimited(&self.columns, ",");
            fmt!(f, " (" columns ")");
        }

        let rows = Delimited(self.rows.iter().map(|row| Row(row)), ",");
        fmt!(f, " VALUES " rows);

        for suffix in &self.suffix {
            fmt!(f, " " suffix);
        }
    }
}

/// One parenthesized VALUES row
struct Row<'a>(&'a [Arg]);

impl ToSql for Row<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let values = Delimited(self.0, ",");
        fmt!(f, "(" values ")");
    }
}

impl ToSql for &Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let assignments = Comma(self.assignments.iter().map(|(column, value)| Assignment {
            column,
            value,
        }));
        fmt!(f, "UPDATE " (&self.table) " SET " assignments);

        if !self.filters.is_empty() {
            let filters = Delimited(&self.filters, " AND ");
            fmt!(f, " WHERE " filters);
        }

        OrderLimit {
            order_by: &self.order_by,
            limit: self.limit,
        }
        .to_sql(f);
    }
}

struct Assignment<'a> {
    column: &'a String,
    value: &'a Arg,
}

impl ToSql for Assignment<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, (self.column) " = " (self.value));
    }
}

struct OrderLimit<'a> {
    order_by: &'a [String],
    limit: Option<u64>,
}

impl ToSql for OrderLimit<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if !self.order_by.is_empty() {
            let order_by = Comma(self.order_by);
            fmt!(f, " ORDER BY " order_by);
        }

        if let Some(limit) = self.limit {
            fmt!(f, " LIMIT " (&limit.to_string()));
        }
    }
}
