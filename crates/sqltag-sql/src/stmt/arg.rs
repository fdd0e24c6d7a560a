use super::Expr;

use sqltag_core::{resolve::Resolved, stmt::Value};

/// A value slot in an INSERT row or an UPDATE assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Bound as a `?` placeholder
    Value(Value),

    /// Rendered inline
    Expr(Expr),
}

impl Arg {
    pub fn value(value: impl Into<Value>) -> Arg {
        Arg::Value(value.into())
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

impl From<Expr> for Arg {
    fn from(expr: Expr) -> Self {
        Arg::Expr(expr)
    }
}

impl From<Resolved> for Arg {
    fn from(resolved: Resolved) -> Self {
        match resolved {
            Resolved::Value(value) => Arg::Value(value),
            Resolved::Raw(sql) => Arg::Expr(Expr::raw(sql)),
        }
    }
}
