use crate::{
    cond::{ConditionalKey, Context},
    schema::{FieldDef, Record, Reflected, Scalar, Shape},
    stmt::OptionalScalar,
};

use indexmap::IndexMap;

/// One tagged field discovered during a walk.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Column name or SQL expression (primary tag segment), `-` when the
    /// field is left out of the default projection
    pub name: String,

    /// Tag the field was read from
    pub tag: &'static str,

    /// Table set on this field or inherited from an earlier field of the
    /// same record
    pub table: Option<String>,

    /// `key=value` options in tag order
    pub meta: IndexMap<String, String>,

    /// Options given without a value
    pub flags: Vec<String>,

    /// Identifier of the originating field
    pub field_name: &'static str,

    /// Field indices from the walk root to this field
    pub path: Vec<usize>,

    /// Runtime value, absent when walking a type description
    pub value: FieldValue,

    /// Flag gating this field and everything discovered below it
    pub recursive_if: Option<ConditionalKey>,

    /// Placement in the JSON projection
    pub json: JsonPath,

    /// The field is a collection, or an optional collection
    pub is_slice: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonPath {
    /// JSON key of the field
    pub name: String,

    /// Slash-delimited path from the walk root, e.g. `/store/address/city`
    pub full_path: String,

    /// JSON key of the parent field, empty at the root
    pub parent: String,
}

/// Runtime value attached to a field descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// No value: the walk ran over a type description
    Absent,

    /// A column value; `Value::Null` for an empty `Option` scalar
    Value(Scalar),

    /// An optional scalar normalized from a wrapper record
    Optional(OptionalScalar),

    /// An empty optional record or collection
    Nil,

    /// A live nested record or collection
    Nested,
}

impl FieldValue {
    pub(crate) fn from_reflected(reflected: Option<Reflected<'_>>) -> FieldValue {
        match reflected {
            None => FieldValue::Absent,
            Some(Reflected::Scalar(scalar)) => FieldValue::Value(scalar),
            Some(Reflected::Nil) => FieldValue::Nil,
            Some(Reflected::Record(_) | Reflected::Collection) => FieldValue::Nested,
        }
    }

    /// Same as [`FieldValue::from_reflected`], additionally turning wrapper
    /// records into [`FieldValue::Optional`].
    pub(crate) fn normalized(def: &FieldDef, reflected: Option<Reflected<'_>>) -> FieldValue {
        if def.shape == Shape::Pointer && reflected.is_some() {
            if let Some(kind) = (def.model)().and_then(|model| model.nullable) {
                let record = match &reflected {
                    Some(Reflected::Record(record)) => Some(*record),
                    _ => None,
                };
                return FieldValue::Optional(
                    record
                        .and_then(|record| record.optional_scalar())
                        .unwrap_or(OptionalScalar::none(kind)),
                );
            }
        }

        FieldValue::from_reflected(reflected)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

impl FieldDescriptor {
    /// Parses the option `name` as a boolean, like `true`, `0` or `F`.
    pub fn meta_bool(&self, name: &str, default: bool) -> bool {
        self.meta
            .get(name)
            .and_then(|value| parse_bool(value))
            .unwrap_or(default)
    }

    pub fn meta_str(&self, name: &str) -> Option<&str> {
        self.meta.get(name).map(String::as_str)
    }

    pub fn meta_string<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.meta_str(name).unwrap_or(default)
    }

    /// Non-empty value of the option `name`.
    pub(crate) fn meta_non_empty(&self, name: &str) -> Option<&str> {
        self.meta_str(name).filter(|value| !value.is_empty())
    }

    /// Returns `true` when the field takes part in the default projection.
    pub fn has_column(&self) -> bool {
        !self.name.is_empty() && self.name != "-"
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }

    /// Evaluates the field's gates: its `recursive_if` flag, then the
    /// per-purpose flag named by the option `if_key` (e.g. `joinif`).
    /// Both default to enabled when absent from `cx`.
    pub fn is_enabled(&self, cx: &Context, if_key: Option<&str>) -> bool {
        if let Some(key) = &self.recursive_if {
            if !cx.resolve(key, true) {
                return false;
            }
        }

        match if_key.and_then(|if_key| self.meta_non_empty(if_key)) {
            Some(flag) => cx.resolve(&ConditionalKey::new(flag), true),
            None => true,
        }
    }

    /// Reads this field's value from another record of the walked type.
    pub fn relocate(&self, record: &dyn Record) -> FieldValue {
        let Some((&last, parents)) = self.path.split_last() else {
            return FieldValue::Absent;
        };

        let mut current = record;
        for &index in parents {
            match current.field(index) {
                Reflected::Record(nested) => current = nested,
                _ => return FieldValue::Absent,
            }
        }

        let Some(def) = current.model().fields.get(last) else {
            return FieldValue::Absent;
        };
        FieldValue::normalized(def, Some(current.field(last)))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
