use super::live_record;
use crate::{Config, Context, Error, Operation, Result, Update};

use sqltag_core::{
    bail,
    resolve::{resolve_value, skip_update},
    schema::Reflect,
};

/// Builds the UPDATE writing `item`.
///
/// Every column of the update walk is assigned, except the ones listed
/// in `skip_columns` and the fields the write rules skip.
pub fn build_update<T: Reflect + ?Sized>(
    config: &Config,
    cx: &Context,
    item: &T,
    modify: impl FnOnce(Update) -> Update,
    skip_columns: &[&str],
) -> Result<Update> {
    if T::SHAPE.is_slice() {
        bail!("cannot update a collection; update each record on its own");
    }

    let record = live_record(item)?;
    let set = config.scan_model(Operation::Update, record.model(), Some(record), &[])?;

    let table = set
        .table_name(cx)
        .ok_or_else(|| Error::missing_table(Operation::Update.as_str()))?;

    let mut update = Update::new(table);

    for field in &set {
        if !field.has_column()
            || skip_columns.contains(&field.name.as_str())
            || skip_update(field)
        {
            continue;
        }

        update = update.set(field.name.as_str(), resolve_value(field));
    }

    if update.assignments.is_empty() {
        return Err(Error::empty_columns(Operation::Update.as_str()));
    }

    Ok(modify(update))
}
