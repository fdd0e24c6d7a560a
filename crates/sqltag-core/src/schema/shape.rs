/// The declared shape of a record field, as far as the walker cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A single column value, including `Option` of a scalar.
    Scalar,

    /// A nested record.
    Struct,

    /// An optional nested record.
    Pointer,

    /// A collection of records.
    Slice,

    /// An optional collection of records.
    PointerSlice,
}

impl Shape {
    /// Shape of `Option<T>` given the shape of `T`.
    pub const fn optional(self) -> Shape {
        match self {
            Shape::Scalar => Shape::Scalar,
            Shape::Struct | Shape::Pointer => Shape::Pointer,
            Shape::Slice | Shape::PointerSlice => Shape::PointerSlice,
        }
    }

    pub const fn is_slice(self) -> bool {
        matches!(self, Shape::Slice | Shape::PointerSlice)
    }

    /// Returns `true` for shapes the walker descends into.
    pub const fn is_composite(self) -> bool {
        !matches!(self, Shape::Scalar)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Shape::Scalar => "scalar",
            Shape::Struct => "struct",
            Shape::Pointer => "pointer",
            Shape::Slice => "slice",
            Shape::PointerSlice => "pointer to slice",
        }
    }
}

impl core::fmt::Display for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
