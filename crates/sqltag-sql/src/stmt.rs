mod arg;
pub use arg::Arg;

mod expr;
pub use expr::Expr;

mod insert;
pub use insert::Insert;

mod select;
pub use select::{Join, Select};

mod update;
pub use update::Update;

use crate::Serializer;

use sqltag_core::{stmt::Value, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
}

impl Statement {
    /// Renders the statement into SQL text and its positional arguments.
    pub fn to_sql(&self) -> Result<(String, Vec<Value>)> {
        let mut params = vec![];
        let sql = Serializer::mysql().serialize(self, &mut params)?;
        Ok((sql, params))
    }
}

macro_rules! impl_statement {
    ( $( $variant:ident ),* ) => {
        $(
            impl From<$variant> for Statement {
                fn from(value: $variant) -> Self {
                    Statement::$variant(value)
                }
            }

            impl $variant {
                /// Renders the statement into SQL text and its positional
                /// arguments.
                pub fn to_sql(&self) -> Result<(String, Vec<Value>)> {
                    Statement::from(self.clone()).to_sql()
                }
            }
        )*
    };
}

impl_statement!(Select, Insert, Update);
