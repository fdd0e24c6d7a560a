mod optional;
pub use optional::{OptionalScalar, ScalarKind};

mod value;
pub use value::Value;
