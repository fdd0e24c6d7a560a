use super::{Formatter, Params, ToSql};

use crate::stmt::{Arg, Expr};

impl ToSql for &Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(&self.sql);
        for arg in &self.args {
            f.params.push(arg);
        }
    }
}

impl ToSql for &Arg {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Arg::Value(value) => {
                let placeholder = f.params.push(value);
                fmt!(f, placeholder);
            }
            Arg::Expr(expr) => expr.to_sql(f),
        }
    }
}
