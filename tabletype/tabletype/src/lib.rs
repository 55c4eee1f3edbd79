//! Table-format type model with descriptor parsing.
//!
//! Re-exports the type model from `tabletype-core` and the descriptor
//! grammar from `tabletype-descriptor`.

pub use tabletype_core as core;
pub use tabletype_core::{
    EdgeAlgorithm, ListType, Literal, MapType, NestedField, NestedFieldBuilder, NestedType,
    PrimitiveType, StructType, Type, TypeError, TypeId,
};
pub use tabletype_descriptor as descriptor;
pub use tabletype_descriptor::{DescriptorError, parse_primitive, parse_type};
