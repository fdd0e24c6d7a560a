use crate::{ColumnSet, FieldDescriptor, Result, Rows, Value, JSON_OUTPUT};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value as Json};

/// Decodes the row at `index` into `T`.
///
/// `fields` are the fields of `set` the select list was built from.
/// Result columns map onto them by position when the counts agree, by
/// label otherwise.
/// Each value is placed at its field's JSON path and the assembled object
/// is decoded with serde. Fields under a collection cannot be filled from
/// a flat row and are left out.
pub(crate) fn decode<T: DeserializeOwned>(
    set: &ColumnSet,
    fields: &[&FieldDescriptor],
    rows: &Rows,
    index: usize,
) -> Result<T> {
    let by_position = rows.columns.len() == fields.len();
    let mut object = Map::new();

    let collections: Vec<&str> = set
        .iter()
        .filter(|field| field.is_slice)
        .map(|field| field.json.full_path.as_str())
        .collect();

    for (position, (label, value)) in rows.row(index).into_iter().flatten().enumerate() {
        let field = if by_position {
            fields.get(position)
        } else {
            fields.iter().find(|field| matches_label(field, label))
        };

        let Some(field) = field else {
            tracing::trace!(column = label, "result column matches no field");
            continue;
        };

        let path = field.json.full_path.as_str();
        if path.is_empty() || under_collection(&collections, path) {
            continue;
        }

        insert_at(&mut object, path, value.to_json());
    }

    Ok(serde_json::from_value(Json::Object(object))?)
}

fn under_collection(collections: &[&str], path: &str) -> bool {
    collections.iter().any(|collection| {
        path.strip_prefix(collection)
            .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Decodes the `json_output` document of the row at `index` into `T`.
pub(crate) fn decode_json<T: DeserializeOwned>(rows: &Rows, index: usize) -> Result<T> {
    let document = rows
        .row(index)
        .into_iter()
        .flatten()
        .find(|(label, _)| *label == JSON_OUTPUT)
        .or_else(|| rows.row(index).into_iter().flatten().next())
        .map(|(_, value)| value);

    match document {
        Some(Value::String(text)) => Ok(serde_json::from_str(text)?),
        Some(value) => Err(sqltag_core::err!(
            "{JSON_OUTPUT} must be a JSON string, got {}",
            value.kind_name()
        )),
        None => Err(sqltag_core::err!("row {index} has no {JSON_OUTPUT} column")),
    }
}

/// Returns `true` when the result column `label` was selected from
/// `field`.
fn matches_label(field: &FieldDescriptor, label: &str) -> bool {
    let expression = field
        .meta_str("select")
        .filter(|select| !select.is_empty())
        .unwrap_or(&field.name);

    expression == label
        || column_label(expression) == label
        || field.field_name.eq_ignore_ascii_case(label)
}

/// Label a database gives the column selected by `expression`: the alias
/// after `AS`, else the part after the last `.`.
fn column_label(expression: &str) -> &str {
    let trimmed = expression.trim();

    if let Some(at) = trimmed.to_ascii_uppercase().rfind(" AS ") {
        return trimmed[at + 4..].trim().trim_matches('`');
    }

    match trimmed.rfind('.') {
        Some(at) => trimmed[at + 1..].trim_matches('`'),
        None => trimmed.trim_matches('`'),
    }
}

/// Sets `value` at the slash-delimited `path`, creating the intermediate
/// objects.
fn insert_at(object: &mut Map<String, Json>, path: &str, value: Json) {
    let mut segments = path.trim_start_matches('/').split('/').peekable();
    let mut current = object;

    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            current.insert(segment.to_string(), value);
            return;
        }

        let entry = current
            .entry(segment.to_string())
            .or_insert_with(|| Json::Object(Map::new()));
        if !entry.is_object() {
            *entry = Json::Object(Map::new());
        }
        let Json::Object(next) = entry else {
            return;
        };
        current = next;
    }
}
