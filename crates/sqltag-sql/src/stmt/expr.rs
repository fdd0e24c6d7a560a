use sqltag_core::stmt::Value;

/// A raw SQL fragment with `?` placeholders and the arguments bound to
/// them, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expr {
    pub sql: String,
    pub args: Vec<Value>,
}

impl Expr {
    pub fn new<A>(sql: impl Into<String>, args: impl IntoIterator<Item = A>) -> Expr
    where
        A: Into<Value>,
    {
        Expr {
            sql: sql.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// A fragment without arguments.
    pub fn raw(sql: impl Into<String>) -> Expr {
        Expr {
            sql: sql.into(),
            args: vec![],
        }
    }

    /// `column = ?`
    pub fn eq(column: &str, value: impl Into<Value>) -> Expr {
        Expr::new(format!("{column} = ?"), [value])
    }

    pub fn is_empty(&self) -> bool {
        self.sql.trim().is_empty()
    }
}

impl From<&str> for Expr {
    fn from(sql: &str) -> Self {
        Expr::raw(sql)
    }
}

impl From<String> for Expr {
    fn from(sql: String) -> Self {
        Expr::raw(sql)
    }
}
