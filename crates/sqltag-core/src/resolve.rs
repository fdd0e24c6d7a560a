//! Write-path value rules.
//!
//! Per field, decides whether an INSERT or UPDATE writes the value, a
//! fallback, or nothing. Options read from the tag:
//!
//! * `skipnil`: leave the column out when the value is nil
//! * `skipzero` (or `skipzerovalue`, `skipzeroval`): leave the column out
//!   when the value is the zero value of its type
//! * `zeronil`: write NULL in place of a zero value
//! * `nilval`: literal written in place of a nil value

use crate::{
    extract::{ColumnSet, FieldDescriptor, FieldValue},
    stmt::Value,
};

/// Value slot of one row in a multi-row INSERT.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// A bound argument
    Value(Value),

    /// Raw SQL rendered in place of a placeholder
    Raw(String),
}

/// What a field value amounts to for the write rules.
enum State<'a> {
    /// No value to write: a type description or a nested record
    Invalid,
    Nil,
    Zero(&'a Value),
    Set(Value),
}

fn state(field: &FieldDescriptor) -> State<'_> {
    match &field.value {
        FieldValue::Absent | FieldValue::Nested => State::Invalid,
        FieldValue::Nil => State::Nil,
        FieldValue::Value(scalar) if scalar.value.is_null() => State::Nil,
        FieldValue::Value(scalar) if scalar.value.is_zero() => State::Zero(&scalar.value),
        FieldValue::Value(scalar) => State::Set(scalar.value.clone()),
        // An explicitly set wrapper is written even when zero
        FieldValue::Optional(optional) => match optional.value() {
            Some(value) => State::Set(value),
            None => State::Nil,
        },
    }
}

fn nil_value(field: &FieldDescriptor) -> Value {
    match field.meta_str("nilval") {
        Some(nilval) => Value::String(nilval.to_string()),
        None => Value::Null,
    }
}

/// Value written for `field`.
///
/// Nil values, including empty optional wrappers and fields without a
/// value, resolve to `nilval` or NULL. Zero values resolve to NULL when
/// `zeronil` is set.
pub fn resolve_value(field: &FieldDescriptor) -> Value {
    match state(field) {
        State::Invalid | State::Nil => nil_value(field),
        State::Zero(_) if field.meta_bool("zeronil", false) => Value::Null,
        State::Zero(value) => value.clone(),
        State::Set(value) => value,
    }
}

/// Returns `true` when a single-row INSERT leaves `field` out.
pub fn skip_insert(field: &FieldDescriptor) -> bool {
    skip(field, false)
}

/// Returns `true` when an UPDATE leaves `field` out of its SET list.
pub fn skip_update(field: &FieldDescriptor) -> bool {
    skip(field, true)
}

fn skip(field: &FieldDescriptor, update: bool) -> bool {
    match state(field) {
        State::Invalid => return true,
        State::Nil => return field.meta_bool("skipnil", false),
        State::Zero(_) if skip_zero(field) => return true,
        State::Zero(_) | State::Set(_) => {}
    }

    match &field.value {
        FieldValue::Value(scalar) => scalar.skip || (update && !scalar.valid_for_update),
        _ => false,
    }
}

fn skip_zero(field: &FieldDescriptor) -> bool {
    ["skipzero", "skipzerovalue", "skipzeroval"]
        .iter()
        .any(|option| field.meta_bool(option, false))
}

/// Value slot of `field` in one row of a multi-row INSERT.
///
/// The column list of a multi-row INSERT is fixed, so a field the row
/// would skip renders as `DEFAULT(<column>)` instead of being left out.
/// Skip rules are checked before nil handling: an unset field marked
/// `skipnil` also falls back to `DEFAULT(<column>)` rather than to its
/// `nilval` or NULL. `DEFAULT(col)` is MySQL and MariaDB syntax.
pub fn resolve_value_multi_row(field: &FieldDescriptor) -> Resolved {
    if skip_insert(field) {
        Resolved::Raw(format!("DEFAULT({})", field.name))
    } else {
        Resolved::Value(resolve_value(field))
    }
}

/// Columns an upsert updates on conflict: every column name of the
/// update walk, leaving out `-` and empty names.
pub fn update_column_names(set: &ColumnSet) -> Vec<String> {
    set.column_names().into_iter().map(str::to_string).collect()
}
