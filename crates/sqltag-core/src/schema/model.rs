use super::Shape;
use crate::stmt::ScalarKind;

/// Static description of a record type: its fields in declaration order.
///
/// Emitted once per type by `#[derive(Record)]` and stored in a `static`.
#[derive(Debug)]
pub struct Model {
    /// Rust type name
    pub name: &'static str,

    /// Fields in declaration order
    pub fields: &'static [FieldDef],

    /// Set when the record is a wrapper exposing one optional scalar
    pub nullable: Option<ScalarKind>,
}

/// Static description of one record field.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier
    pub ident: &'static str,

    /// Last path segment of the field's type, without generics
    pub ty: &'static str,

    /// `(tag name, tag value)` pairs, in attribute order
    pub tags: &'static [(&'static str, &'static str)],

    /// Declared shape of the field
    pub shape: Shape,

    /// Description of the nested record type for composite shapes
    pub model: fn() -> Option<&'static Model>,
}

impl Model {
    pub fn field(&self, ident: &str) -> Option<(usize, &'static FieldDef)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, field)| field.ident == ident)
    }
}

impl FieldDef {
    /// Value of the tag `name`, if the field carries it.
    pub fn tag(&self, name: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(tag, _)| *tag == name)
            .map(|(_, value)| *value)
    }

    /// Identifiers starting with `_` mark bookkeeping members that never
    /// hold row data.
    pub fn is_exported(&self) -> bool {
        !self.ident.starts_with('_')
    }
}
