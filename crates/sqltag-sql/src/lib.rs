pub mod serializer;
pub use serializer::{Params, Serializer};

pub mod stmt;
pub use stmt::{Arg, Expr, Insert, Join, Select, Statement, Update};
