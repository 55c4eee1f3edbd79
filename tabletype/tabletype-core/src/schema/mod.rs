//! Logical type model for table schemas.

mod field;
mod format;
mod nested;
mod primitive;
mod types;

pub use field::{NestedField, NestedFieldBuilder};
pub use format::format_fields;
pub use nested::{ListType, MapType, NestedType, StructType};
pub use primitive::{DEFAULT_CRS, DecimalType, GeographyType, GeometryType, PrimitiveType};
pub use types::{Type, TypeId};
