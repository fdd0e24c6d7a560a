mod column_set;
pub use column_set::{ColumnSet, Diagnostic};

mod field;
pub use field::{FieldDescriptor, FieldValue, JsonPath};

mod scan;
pub use scan::Operation;

mod tag;
pub use tag::Separators;

mod transform;
pub use transform::Transforms;

mod walk;
pub use walk::{walk, walk_model};
