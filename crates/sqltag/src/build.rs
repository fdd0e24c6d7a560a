//! Statement assembly.
//!
//! Each function walks the record type (or value) with the tags of its
//! operation and returns the statement before execution. `modify` lets
//! the caller add filters and other clauses.

mod insert;
pub use insert::build_insert;

mod select;
pub(crate) use select::{assemble, scan as scan_select};
pub use select::{build_json_select, build_select};

mod update;
pub use update::build_update;

mod upsert;
pub use upsert::build_upsert;

use crate::{Error, Result};

use sqltag_core::schema::{Model, Record, Reflect, Reflected};

/// Record type behind `T`, seen through `Option`, `Box` and collections.
fn model_of<T: Reflect + ?Sized>() -> Result<&'static Model> {
    T::model().ok_or_else(|| invalid_source::<T>())
}

/// The single live record `item` holds.
fn live_record<T: Reflect + ?Sized>(item: &T) -> Result<&dyn Record> {
    match item.reflect() {
        Reflected::Record(record) => Ok(record),
        Reflected::Nil => Err(sqltag_core::err!("item is nil")),
        Reflected::Scalar(_) | Reflected::Collection => Err(invalid_source::<T>()),
    }
}

fn invalid_source<T: Reflect + ?Sized>() -> Error {
    Error::invalid_shape(format!("invalid source kind {}", T::SHAPE))
}
