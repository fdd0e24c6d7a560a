use super::model_of;
use crate::{ColumnSet, Config, Context, Error, Operation, Result, Select};

use sqltag_core::{projection::Join, schema::Reflect};

/// Builds the SELECT reading rows of `T`.
///
/// The select list is the walked column list. Table, joins and group-by
/// come from the tag options, with the context gating them.
pub fn build_select<T: Reflect + ?Sized>(
    config: &Config,
    cx: &Context,
    modify: impl FnOnce(Select) -> Select,
) -> Result<Select> {
    let set = scan::<T>(config)?;
    assemble(&set, cx, set.select_columns(cx), modify)
}

/// Builds the SELECT reading rows of `T` as a single JSON document per
/// row, in a column named `json_output`.
pub fn build_json_select<T: Reflect + ?Sized>(
    config: &Config,
    cx: &Context,
    modify: impl FnOnce(Select) -> Select,
) -> Result<Select> {
    let set = scan::<T>(config)?;
    assemble(&set, cx, [set.select_json(cx)], modify)
}

/// Walks the record type of `T` with the select tags.
pub(crate) fn scan<T: Reflect + ?Sized>(config: &Config) -> Result<ColumnSet> {
    config.scan_model(Operation::Select, model_of::<T>()?, None, &[])
}

pub(crate) fn assemble<C: Into<String>>(
    set: &ColumnSet,
    cx: &Context,
    projection: impl IntoIterator<Item = C>,
    modify: impl FnOnce(Select) -> Select,
) -> Result<Select> {
    let table = set
        .table_name(cx)
        .ok_or_else(|| Error::missing_table(Operation::Select.as_str()))?;

    let mut select = Select::new(projection).from(table);

    for join in set.resolve_joins(cx) {
        select = match join {
            Join::Clause(clause) => select.join_clause(clause),
            Join::Implicit(table) => select.join(table),
        };
    }

    if let Some(group_by) = set.group_by(cx) {
        select = select.group_by(group_by);
    }

    Ok(modify(select))
}
