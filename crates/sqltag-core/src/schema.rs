mod model;
pub use model::{FieldDef, Model};

mod reflect;
pub use reflect::{Record, Reflect, Reflected, Scalar};

mod shape;
pub use shape::Shape;

mod wrappers;
pub use wrappers::{BoolValue, Int32Value, Int64Value, StringValue, Timestamp};
