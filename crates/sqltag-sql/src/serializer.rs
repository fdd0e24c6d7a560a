#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod statement;

use crate::stmt::Statement;

use sqltag_core::Result;

/// Serialize a statement to a SQL string.
///
/// Only the MySQL/MariaDB flavor is supported: placeholders render as `?`.
#[derive(Debug, Default)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a, T> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn mysql() -> Serializer {
        Serializer { _priv: () }
    }

    /// Serializes `stmt`, pushing its arguments onto `params` in placeholder
    /// order.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> Result<String> {
        stmt.verify()?;

        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params,
        };

        ToSql::to_sql(stmt, &mut fmt);

        Ok(ret)
    }
}
