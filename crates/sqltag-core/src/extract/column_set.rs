use super::FieldDescriptor;
use crate::Error;

/// Ordered result of one walk.
///
/// Walk order is significant: option lookups such as the table name or
/// the group-by clause return the first match.
#[derive(Debug, Clone, Default)]
pub struct ColumnSet {
    pub columns: Vec<FieldDescriptor>,

    /// Errors raised while descending into nested fields. They do not
    /// invalidate the fields collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

/// A nested field the walker could not descend into.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// `Type.field` of the field being descended into
    pub field: String,
    pub error: Error,
}

impl ColumnSet {
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Descriptor produced for the field `field_name`, first in walk order.
    pub fn get(&self, field_name: &str) -> Option<&FieldDescriptor> {
        self.columns.iter().find(|field| field.field_name == field_name)
    }

    /// Column names in walk order, leaving out `-` and empty names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|field| field.has_column())
            .map(|field| field.name.as_str())
            .collect()
    }
}

impl<'a> IntoIterator for &'a ColumnSet {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
