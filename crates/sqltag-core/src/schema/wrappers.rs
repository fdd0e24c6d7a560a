//! Wrapper records carrying a single optional scalar.
//!
//! Declared as `Option<StringValue>` and friends on a record, they let a
//! column be explicitly absent (`None`) or explicitly set, including to
//! the zero value. The walker normalizes them into `OptionalScalar`.

use super::{Model, Record, Reflect, Reflected, Shape};
use crate::stmt::{OptionalScalar, ScalarKind};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! wrapper {
    ( $( $(#[$meta:meta])* $name:ident($ty:ty) => $kind:ident, )* ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name {
                pub value: $ty,
            }

            impl $name {
                pub fn new(value: impl Into<$ty>) -> Self {
                    Self { value: value.into() }
                }

                pub fn val(&self) -> Option<&$ty> {
                    Some(&self.value)
                }
            }

            impl From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    Self { value }
                }
            }

            const _: () = {
                static MODEL: Model = Model {
                    name: stringify!($name),
                    fields: &[],
                    nullable: Some(ScalarKind::$kind),
                };

                impl Record for $name {
                    fn model(&self) -> &'static Model {
                        &MODEL
                    }

                    fn field(&self, _index: usize) -> Reflected<'_> {
                        Reflected::Nil
                    }

                    fn optional_scalar(&self) -> Option<OptionalScalar> {
                        Some(OptionalScalar::$kind(self.val().cloned()))
                    }
                }

                impl Reflect for $name {
                    const SHAPE: Shape = Shape::Struct;

                    fn model() -> Option<&'static Model> {
                        Some(&MODEL)
                    }

                    fn reflect(&self) -> Reflected<'_> {
                        Reflected::Record(self)
                    }
                }
            };
        )*
    };
}

wrapper! {
    /// Optional string column.
    StringValue(String) => String,
    /// Optional boolean column.
    BoolValue(bool) => Bool,
    /// Optional 32-bit integer column.
    Int32Value(i32) => Int32,
    /// Optional 64-bit integer column.
    Int64Value(i64) => Int64,
    /// Optional timestamp column.
    Timestamp(DateTime<Utc>) => Time,
}
