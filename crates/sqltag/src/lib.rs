pub mod build;
pub use build::{build_insert, build_json_select, build_select, build_update, build_upsert};

pub mod db;
pub use db::Db;

mod row;

pub use sqltag_core::{
    async_trait, bail,
    cond::{ConditionalKey, Context},
    driver::{ExecResult, Executor, Rows},
    err,
    extract::{ColumnSet, FieldDescriptor, FieldValue, Operation, Separators, Transforms},
    projection::JSON_OUTPUT,
    schema::{self, BoolValue, Int32Value, Int64Value, Reflect, Record, StringValue, Timestamp},
    stmt::{OptionalScalar, ScalarKind, Value},
    Config, Error, Result,
};
pub use sqltag_sql::{Arg, Expr, Insert, Select, Statement, Update};

pub use sqltag_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use sqltag_core::schema::{FieldDef, Model, Record, Reflect, Reflected, Shape};
    pub use std::{any::Any, option::Option, vec::Vec};
}
