use super::{Model, Shape};
use crate::stmt::{OptionalScalar, Value};

use chrono::{DateTime, Utc};

use std::any::Any;

/// Compile-time shape and runtime view of a field type.
///
/// Implemented for the supported scalars, `Option<T>`, `Box<T>`,
/// `Vec<T>` of records, and every type deriving `Record`. Custom column
/// types implement it by hand, usually reporting `Shape::Scalar`.
pub trait Reflect {
    /// Declared shape of the type.
    const SHAPE: Shape;

    /// Description of the record type behind a composite shape.
    fn model() -> Option<&'static Model> {
        None
    }

    /// Runtime view of the value.
    fn reflect(&self) -> Reflected<'_>;

    /// The live records behind the value: the record itself, or the
    /// elements of a collection.
    fn records(&self) -> Vec<&dyn Record> {
        match self.reflect() {
            Reflected::Record(record) => vec![record],
            _ => vec![],
        }
    }

    /// Mutable access to the live records behind the value.
    fn records_mut(&mut self) -> Vec<&mut dyn Record> {
        vec![]
    }
}

/// A record whose fields can be walked.
///
/// Object safe so nested records can be visited through `&dyn Record`.
pub trait Record {
    /// Description of the record's type.
    fn model(&self) -> &'static Model;

    /// Runtime view of the field at `index` in `model().fields`.
    fn field(&self, index: usize) -> Reflected<'_>;

    /// The optional scalar this record wraps, for wrapper records.
    fn optional_scalar(&self) -> Option<OptionalScalar> {
        None
    }

    /// The field at `index`, for in-place rewrites. `None` when the record
    /// does not expose its fields mutably.
    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Any> {
        let _ = index;
        None
    }
}

/// Runtime view of a value.
pub enum Reflected<'a> {
    /// A column value
    Scalar(Scalar),

    /// A live nested record
    Record(&'a dyn Record),

    /// An empty optional record or collection
    Nil,

    /// A collection of records; never iterated by the walker
    Collection,
}

impl core::fmt::Debug for Reflected<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Reflected::Scalar(scalar) => f.debug_tuple("Scalar").field(scalar).finish(),
            Reflected::Record(record) => f.debug_tuple("Record").field(&record.model().name).finish(),
            Reflected::Nil => f.write_str("Nil"),
            Reflected::Collection => f.write_str("Collection"),
        }
    }
}

/// A column value plus the write capabilities its type reports.
#[derive(Debug, Clone, PartialEq)]
pub struct Scalar {
    pub value: Value,

    /// The type asks to be left out of INSERT and UPDATE statements.
    pub skip: bool,

    /// The type accepts being written by an UPDATE.
    pub valid_for_update: bool,
}

impl Scalar {
    pub fn new(value: impl Into<Value>) -> Scalar {
        Scalar {
            value: value.into(),
            skip: false,
            valid_for_update: true,
        }
    }

    pub fn with_skip(mut self, skip: bool) -> Scalar {
        self.skip = skip;
        self
    }

    pub fn with_valid_for_update(mut self, valid: bool) -> Scalar {
        self.valid_for_update = valid;
        self
    }
}

macro_rules! impl_scalar {
    ( $( $ty:ty ),* ) => {
        $(
            impl Reflect for $ty {
                const SHAPE: Shape = Shape::Scalar;

                fn reflect(&self) -> Reflected<'_> {
                    Reflected::Scalar(Scalar::new(self.clone()))
                }
            }
        )*
    };
}

impl_scalar!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, String, DateTime<Utc>);

impl<T: Reflect> Reflect for Option<T> {
    const SHAPE: Shape = T::SHAPE.optional();

    fn model() -> Option<&'static Model> {
        T::model()
    }

    fn reflect(&self) -> Reflected<'_> {
        match self {
            Some(value) => value.reflect(),
            None if T::SHAPE.is_composite() => Reflected::Nil,
            None => Reflected::Scalar(Scalar::new(Value::Null)),
        }
    }

    fn records(&self) -> Vec<&dyn Record> {
        match self {
            Some(value) => value.records(),
            None => vec![],
        }
    }

    fn records_mut(&mut self) -> Vec<&mut dyn Record> {
        match self {
            Some(value) => value.records_mut(),
            None => vec![],
        }
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    const SHAPE: Shape = T::SHAPE;

    fn model() -> Option<&'static Model> {
        T::model()
    }

    fn reflect(&self) -> Reflected<'_> {
        (**self).reflect()
    }

    fn records(&self) -> Vec<&dyn Record> {
        (**self).records()
    }

    fn records_mut(&mut self) -> Vec<&mut dyn Record> {
        (**self).records_mut()
    }
}

impl<T: Reflect + Record> Reflect for Vec<T> {
    const SHAPE: Shape = Shape::Slice;

    fn model() -> Option<&'static Model> {
        <T as Reflect>::model()
    }

    fn reflect(&self) -> Reflected<'_> {
        Reflected::Collection
    }

    fn records(&self) -> Vec<&dyn Record> {
        self.iter().map(|item| item as &dyn Record).collect()
    }

    fn records_mut(&mut self) -> Vec<&mut dyn Record> {
        self.iter_mut().map(|item| item as &mut dyn Record).collect()
    }
}

impl<T: Reflect + Record> Reflect for [T] {
    const SHAPE: Shape = Shape::Slice;

    fn model() -> Option<&'static Model> {
        <T as Reflect>::model()
    }

    fn reflect(&self) -> Reflected<'_> {
        Reflected::Collection
    }

    fn records(&self) -> Vec<&dyn Record> {
        self.iter().map(|item| item as &dyn Record).collect()
    }

    fn records_mut(&mut self) -> Vec<&mut dyn Record> {
        self.iter_mut().map(|item| item as &mut dyn Record).collect()
    }
}

impl<T: Record + ?Sized> Record for Box<T> {
    fn model(&self) -> &'static Model {
        (**self).model()
    }

    fn field(&self, index: usize) -> Reflected<'_> {
        (**self).field(index)
    }

    fn optional_scalar(&self) -> Option<OptionalScalar> {
        (**self).optional_scalar()
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Any> {
        (**self).field_mut(index)
    }
}

/// Markers carry no row data; the walker never descends into them.
impl<T: ?Sized> Reflect for core::marker::PhantomData<T> {
    const SHAPE: Shape = Shape::Struct;

    fn reflect(&self) -> Reflected<'_> {
        Reflected::Nil
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    const SHAPE: Shape = T::SHAPE;

    fn model() -> Option<&'static Model> {
        T::model()
    }

    fn reflect(&self) -> Reflected<'_> {
        (**self).reflect()
    }

    fn records(&self) -> Vec<&dyn Record> {
        (**self).records()
    }
}
