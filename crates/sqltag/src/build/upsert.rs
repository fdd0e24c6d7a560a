use super::{insert::insert_rows, model_of};
use crate::{Config, Context, Insert, Operation, Result};

use sqltag_core::{resolve::update_column_names, schema::Reflect};

/// Builds an INSERT of `items` that updates the existing row on a key
/// conflict.
///
/// Rows are resolved as in [`build_insert`](super::build_insert). The
/// columns updated on conflict are `update_columns`, or every column of
/// the update walk when empty. The `ON DUPLICATE KEY UPDATE` clause is
/// appended after `modify` runs and left out when there is no column to
/// update.
pub fn build_upsert<T: Reflect + ?Sized>(
    config: &Config,
    cx: &Context,
    items: &T,
    modify: impl FnOnce(Insert) -> Insert,
    update_columns: &[&str],
) -> Result<Insert> {
    let insert = insert_rows(config, cx, items)?;

    let update_columns = if update_columns.is_empty() {
        let set = config.scan_model(Operation::Update, model_of::<T>()?, None, &[])?;
        update_column_names(&set)
    } else {
        update_columns.iter().map(|column| column.to_string()).collect()
    };

    let mut insert = modify(insert);

    if let Some(suffix) = on_duplicate_key_update(&update_columns) {
        insert = insert.suffix(suffix);
    }

    Ok(insert)
}

fn on_duplicate_key_update(columns: &[String]) -> Option<String> {
    if columns.is_empty() {
        return None;
    }

    let assignments = columns
        .iter()
        .map(|column| format!("{column} = VALUES({column})"))
        .collect::<Vec<_>>()
        .join(", ");

    Some(format!("ON DUPLICATE KEY UPDATE {assignments}"))
}
