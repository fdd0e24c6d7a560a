use super::{
    tag::{json_name, ParsedTag, TagOption},
    ColumnSet, Diagnostic, FieldDescriptor, FieldValue, JsonPath, Separators,
};
use crate::{
    cond::ConditionalKey,
    schema::{FieldDef, Model, Record, Reflect, Reflected, Shape},
    Error, Result,
};

use indexmap::IndexMap;

/// Nesting depth at which the walker gives up on a branch. Keeps
/// self-referential records from recursing forever.
const MAX_DEPTH: usize = 32;

/// Bookkeeping types injected by code generators. They never hold row
/// data and are not descended into.
const DENIED_TYPES: &[&str] = &[
    "MessageState",
    "SpecialFields",
    "UnknownFields",
    "CachedSize",
    "PhantomData",
];

/// Walks `value` and collects one descriptor per tagged field.
///
/// `value` must resolve, through `Option` and `Box`, to a record or to a
/// collection of records. Collections and empty options are walked as
/// type descriptions only: the descriptors carry no values.
///
/// For each field the first tag of `tags` present on it wins.
pub fn walk<T: Reflect + ?Sized>(
    value: &T,
    tags: &[&str],
    separators: &Separators,
) -> Result<ColumnSet> {
    let Some(model) = T::model() else {
        return Err(invalid_source(T::SHAPE));
    };

    let live = match value.reflect() {
        Reflected::Record(record) => Some(record),
        Reflected::Nil | Reflected::Collection => None,
        Reflected::Scalar(_) => return Err(invalid_source(T::SHAPE)),
    };

    walk_model(model, live, tags, separators)
}

/// Walks `model`, reading values from `live` when given.
pub fn walk_model(
    model: &'static Model,
    live: Option<&dyn Record>,
    tags: &[&str],
    separators: &Separators,
) -> Result<ColumnSet> {
    let mut walker = Walker {
        tags,
        separators,
        set: ColumnSet::default(),
    };

    walker.step(model, live, &Frame::root())?;

    Ok(walker.set)
}

struct Walker<'a> {
    tags: &'a [&'a str],
    separators: &'a Separators,
    set: ColumnSet,
}

/// Position of a record within the walk.
struct Frame {
    path: Vec<usize>,
    recursive_if: Option<ConditionalKey>,
    parent: Option<JsonPath>,
    depth: usize,
}

impl Frame {
    fn root() -> Frame {
        Frame {
            path: vec![],
            recursive_if: None,
            parent: None,
            depth: 0,
        }
    }
}

impl Walker<'_> {
    fn step(&mut self, model: &'static Model, live: Option<&dyn Record>, frame: &Frame) -> Result<()> {
        if frame.depth > MAX_DEPTH {
            return Err(Error::invalid_shape(format!(
                "{} is nested more than {MAX_DEPTH} levels deep",
                model.name
            )));
        }

        // Running table, inherited by the following fields of this record
        let mut table: Option<String> = None;

        for (index, def) in model.fields.iter().enumerate() {
            let mut path = frame.path.clone();
            path.push(index);

            let reflected = live.map(|record| record.field(index));
            let mut own_recursive_if = None;
            let mut skip_recursive = false;

            let produced = match self.tag_of(def) {
                Some((tag, raw)) => {
                    let parsed = ParsedTag::parse(raw, self.separators.for_tag(tag));
                    let mut field = self.describe(def, tag, &parsed, frame, path.clone());
                    field.value = FieldValue::from_reflected(reflected);

                    for option in &parsed.options {
                        match *option {
                            TagOption::Pair("recursiveif", key) => {
                                own_recursive_if = Some(ConditionalKey::new(key));
                            }
                            TagOption::Pair(key @ ("table" | "tablename"), value) => {
                                field.table = Some(value.to_string());
                                table = Some(value.to_string());
                                field.meta.insert(key.to_string(), value.to_string());
                            }
                            TagOption::Pair(key, value) => {
                                field.meta.insert(key.to_string(), value.to_string());
                            }
                            TagOption::Flag(flag) => {
                                if matches!(flag, "norecursive" | "skiprecursive") {
                                    skip_recursive = true;
                                }
                                field.flags.push(flag.to_string());
                            }
                        }
                    }

                    if field.table.is_none() {
                        field.table = table.clone();
                    }
                    if own_recursive_if.is_some() {
                        field.recursive_if = own_recursive_if.clone();
                    }

                    self.set.columns.push(field);
                    Some(self.set.columns.len() - 1)
                }
                None => None,
            };

            if skip_recursive || !descends_into(def) {
                continue;
            }

            let Some(nested) = (def.model)() else {
                self.swallow(model, def, Error::invalid_shape(format!(
                    "invalid source kind {}: {} has no record description",
                    def.shape, def.ty
                )));
                continue;
            };

            let nested_live = match live.map(|record| record.field(index)) {
                Some(Reflected::Record(record)) => Some(record),
                Some(Reflected::Scalar(_)) => {
                    self.swallow(model, def, invalid_source(Shape::Scalar));
                    continue;
                }
                Some(Reflected::Nil | Reflected::Collection) | None => None,
            };

            // Optional scalar wrappers replace the value of the descriptor
            // already produced for the field.
            if let (Some(position), Some(record)) = (produced, live) {
                let value = FieldValue::normalized(def, Some(record.field(index)));
                if matches!(value, FieldValue::Optional(_)) {
                    self.set.columns[position].value = value;
                }
            }

            let child = Frame {
                path,
                recursive_if: own_recursive_if.or_else(|| frame.recursive_if.clone()),
                parent: produced.map(|position| self.set.columns[position].json.clone()),
                depth: frame.depth + 1,
            };

            if let Err(err) = self.step(nested, nested_live, &child) {
                self.swallow(model, def, err);
            }
        }

        Ok(())
    }

    /// First tag of the priority list carried by `def`.
    fn tag_of(&self, def: &FieldDef) -> Option<(&'static str, &'static str)> {
        self.tags.iter().find_map(|name| {
            def.tags
                .iter()
                .find(|(tag, _)| tag == name)
                .map(|(tag, value)| (*tag, *value))
        })
    }

    fn describe(
        &self,
        def: &'static FieldDef,
        tag: &'static str,
        parsed: &ParsedTag<'_>,
        frame: &Frame,
        path: Vec<usize>,
    ) -> FieldDescriptor {
        let name = match def.tag("json").map(json_name) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => def.ident.to_string(),
        };

        let json = match &frame.parent {
            Some(parent) => JsonPath {
                full_path: format!("{}/{name}", parent.full_path),
                parent: parent.name.clone(),
                name,
            },
            None => JsonPath {
                full_path: format!("/{name}"),
                parent: String::new(),
                name,
            },
        };

        FieldDescriptor {
            name: parsed.primary.to_string(),
            tag,
            table: None,
            meta: IndexMap::new(),
            flags: vec![],
            field_name: def.ident,
            path,
            value: FieldValue::Absent,
            recursive_if: frame.recursive_if.clone(),
            json,
            is_slice: def.shape.is_slice(),
        }
    }

    fn swallow(&mut self, model: &Model, def: &FieldDef, error: Error) {
        let field = format!("{}.{}", model.name, def.ident);
        tracing::debug!(%field, %error, "skipping nested field");
        self.set.diagnostics.push(Diagnostic { field, error });
    }
}

/// Returns `true` when the walker descends into `def`.
fn descends_into(def: &FieldDef) -> bool {
    def.shape.is_composite() && !DENIED_TYPES.contains(&def.ty) && def.is_exported()
}

fn invalid_source(shape: Shape) -> Error {
    Error::invalid_shape(format!("invalid source kind {shape}"))
}
