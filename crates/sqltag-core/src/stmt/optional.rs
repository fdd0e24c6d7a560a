use super::Value;

use chrono::{DateTime, Utc};

/// The scalar types an optional wrapper can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Bool,
    Int32,
    Int64,
    Time,
}

/// A scalar that may be absent, normalized from the different wrapper
/// records into one shape.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionalScalar {
    String(Option<String>),
    Bool(Option<bool>),
    Int32(Option<i32>),
    Int64(Option<i64>),
    Time(Option<DateTime<Utc>>),
}

impl OptionalScalar {
    /// An empty optional of the given kind.
    pub fn none(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::String => Self::String(None),
            ScalarKind::Bool => Self::Bool(None),
            ScalarKind::Int32 => Self::Int32(None),
            ScalarKind::Int64 => Self::Int64(None),
            ScalarKind::Time => Self::Time(None),
        }
    }

    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::String(_) => ScalarKind::String,
            Self::Bool(_) => ScalarKind::Bool,
            Self::Int32(_) => ScalarKind::Int32,
            Self::Int64(_) => ScalarKind::Int64,
            Self::Time(_) => ScalarKind::Time,
        }
    }

    /// The dereferenced scalar, or `None` when the wrapper holds nothing.
    pub fn value(&self) -> Option<Value> {
        match self {
            Self::String(v) => v.clone().map(Value::String),
            Self::Bool(v) => v.map(Value::Bool),
            Self::Int32(v) => v.map(Value::I32),
            Self::Int64(v) => v.map(Value::I64),
            Self::Time(v) => v.map(Value::DateTime),
        }
    }

    pub fn is_none(&self) -> bool {
        self.value().is_none()
    }
}
