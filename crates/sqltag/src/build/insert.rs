use super::live_record;
use crate::{Arg, ColumnSet, Config, Context, Error, Insert, Operation, Result};

use sqltag_core::{
    bail,
    resolve::{resolve_value, resolve_value_multi_row, skip_insert},
    schema::{Record, Reflect},
};

/// Builds the INSERT writing `items`.
///
/// `items` is a record or a collection of records. A single record
/// leaves skipped columns out of the statement. A collection takes its
/// column list from the first element and writes `DEFAULT(<column>)` for
/// the fields a row skips.
pub fn build_insert<T: Reflect + ?Sized>(
    config: &Config,
    cx: &Context,
    items: &T,
    modify: impl FnOnce(Insert) -> Insert,
) -> Result<Insert> {
    Ok(modify(insert_rows(config, cx, items)?))
}

pub(super) fn insert_rows<T: Reflect + ?Sized>(
    config: &Config,
    cx: &Context,
    items: &T,
) -> Result<Insert> {
    if T::SHAPE.is_slice() {
        multi_row(config, cx, &items.records())
    } else {
        single_row(config, cx, live_record(items)?)
    }
}

fn single_row(config: &Config, cx: &Context, record: &dyn Record) -> Result<Insert> {
    let set = scan(config, record)?;

    let (columns, values): (Vec<_>, Vec<_>) = set
        .iter()
        .filter(|field| field.has_column() && !skip_insert(field))
        .map(|field| (field.name.as_str(), resolve_value(field)))
        .unzip();

    Ok(Insert::new(table(&set, cx)?).columns(columns).values(values))
}

fn multi_row(config: &Config, cx: &Context, records: &[&dyn Record]) -> Result<Insert> {
    let Some(first) = records.first() else {
        bail!("needs at least one row to insert");
    };

    let set = scan(config, *first)?;
    let fields: Vec<_> = set.iter().filter(|field| field.has_column()).collect();

    let mut insert = Insert::new(table(&set, cx)?)
        .columns(fields.iter().map(|field| field.name.as_str()));

    for record in records {
        let row: Vec<Arg> = fields
            .iter()
            .map(|field| {
                let mut field = (*field).clone();
                field.value = field.relocate(*record);
                resolve_value_multi_row(&field).into()
            })
            .collect();

        insert = insert.values(row);
    }

    Ok(insert)
}

fn scan(config: &Config, record: &dyn Record) -> Result<ColumnSet> {
    config.scan_model(Operation::Insert, record.model(), Some(record), &[])
}

fn table<'a>(set: &'a ColumnSet, cx: &'a Context) -> Result<&'a str> {
    set.table_name(cx)
        .ok_or_else(|| Error::missing_table(Operation::Insert.as_str()))
}
