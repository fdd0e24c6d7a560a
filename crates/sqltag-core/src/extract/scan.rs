use super::{walk, walk_model, ColumnSet};
use crate::{
    schema::{Model, Record, Reflect},
    Config, Result,
};

/// The statement a walk prepares for. Selects the tag priority list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Select,
    Insert,
    Update,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Select => "select",
            Operation::Insert => "insert",
            Operation::Update => "update",
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Config {
    /// Tag priority list for `op`, with `extra` tags taking precedence over
    /// the configured ones.
    pub fn tags<'a>(&'a self, op: Operation, extra: &[&'a str]) -> Vec<&'a str> {
        let configured = match op {
            Operation::Select => &self.select_tags,
            Operation::Insert => &self.insert_tags,
            Operation::Update => &self.update_tags,
        };

        extra
            .iter()
            .copied()
            .chain(configured.iter().map(String::as_str))
            .collect()
    }

    /// Walks `value` with the tags of `op`.
    pub fn scan<T: Reflect + ?Sized>(
        &self,
        op: Operation,
        value: &T,
        extra: &[&str],
    ) -> Result<ColumnSet> {
        walk(value, &self.tags(op, extra), &self.separators)
    }

    /// Walks `model` with the tags of `op`, reading values from `live`.
    pub fn scan_model(
        &self,
        op: Operation,
        model: &'static Model,
        live: Option<&dyn Record>,
        extra: &[&str],
    ) -> Result<ColumnSet> {
        walk_model(model, live, &self.tags(op, extra), &self.separators)
    }
}
