mod json;
pub use json::JSON_OUTPUT;

use crate::{
    cond::Context,
    extract::{ColumnSet, FieldDescriptor},
};

/// A join clause collected from the walked fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Join {
    /// A complete clause such as `LEFT JOIN stores s ON s.id = a.store_id`
    Clause(String),

    /// A bare table reference; the statement decides the join type
    Implicit(String),
}

impl Join {
    fn classify(join: String) -> Join {
        if join.to_ascii_uppercase().contains("JOIN ") {
            Join::Clause(join)
        } else {
            Join::Implicit(join)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Join::Clause(join) | Join::Implicit(join) => join,
        }
    }
}

impl ColumnSet {
    /// Fields passing their `recursive_if` gate and the flag named by the
    /// option `if_key`.
    fn enabled<'a>(
        &'a self,
        cx: &'a Context,
        if_key: Option<&'a str>,
    ) -> impl Iterator<Item = &'a FieldDescriptor> + 'a {
        self.iter().filter(move |field| field.is_enabled(cx, if_key))
    }

    /// Select list: the `select` option when set, the column name
    /// otherwise. Fields named `-` or empty are left out. Gated by `joinif`.
    pub fn select_columns<'a>(&'a self, cx: &'a Context) -> Vec<&'a str> {
        self.select_fields(cx)
            .into_iter()
            .map(|field| field.meta_non_empty("select").unwrap_or(&field.name))
            .collect()
    }

    /// Fields producing the entries of [`ColumnSet::select_columns`], in
    /// the same order.
    pub fn select_fields<'a>(&'a self, cx: &'a Context) -> Vec<&'a FieldDescriptor> {
        self.enabled(cx, Some("joinif"))
            .filter(|field| field.meta_non_empty("select").is_some() || field.has_column())
            .collect()
    }

    /// Same as [`ColumnSet::select_columns`], prefixing bare column names
    /// with `qualifier`.
    pub fn select_columns_qualified(&self, cx: &Context, qualifier: &str) -> Vec<String> {
        self.select_columns(cx)
            .into_iter()
            .map(|column| {
                let bare = !column.contains(['.', '(']) && !column.contains(char::is_whitespace);
                if bare && !qualifier.is_empty() {
                    format!("{qualifier}.{column}")
                } else {
                    column.to_string()
                }
            })
            .collect()
    }

    /// Joins in walk order: `select_join`, else `join`. Gated by `joinif`.
    pub fn select_joins<'a>(&'a self, cx: &'a Context) -> Vec<&'a str> {
        self.enabled(cx, Some("joinif"))
            .filter_map(|field| {
                field
                    .meta_non_empty("select_join")
                    .or_else(|| field.meta_non_empty("join"))
            })
            .collect()
    }

    /// [`ColumnSet::select_joins`] with the context's join substitutions
    /// applied.
    pub fn resolve_joins(&self, cx: &Context) -> Vec<Join> {
        self.select_joins(cx)
            .into_iter()
            .map(|join| Join::classify(cx.replace_joins(join)))
            .collect()
    }

    /// First non-empty `groupby`, gated by `groupif`.
    pub fn group_by<'a>(&'a self, cx: &'a Context) -> Option<&'a str> {
        self.enabled(cx, Some("groupif"))
            .find_map(|field| field.meta_non_empty("groupby"))
    }

    /// Table the statement targets: the first `select_table`, else the
    /// first `table` (or `tablename`).
    pub fn table_name<'a>(&'a self, cx: &'a Context) -> Option<&'a str> {
        self.enabled(cx, None)
            .find_map(|field| field.meta_non_empty("select_table"))
            .or_else(|| {
                self.enabled(cx, None).find_map(|field| {
                    field
                        .meta_non_empty("table")
                        .or_else(|| field.meta_non_empty("tablename"))
                })
            })
    }
}
