//! Logical type model for table-format schemas.
//!
//! This crate provides the closed set of column types ([`Type`],
//! [`PrimitiveType`]), schema fields with identity and typed defaults
//! ([`NestedField`]), and the composite types that resolve their members
//! ([`StructType`], [`ListType`], [`MapType`]).
//!
//! Textual type descriptors are parsed by `tabletype-descriptor`; every
//! primitive's `Display` output is accepted by that parser.

mod edge_algorithm;
mod error;
mod literal;
mod schema;

pub use edge_algorithm::EdgeAlgorithm;
pub use error::{LiteralTypeError, TypeError};
pub use literal::{Decimal, Literal, MAX_DECIMAL_PRECISION};
pub use schema::{
    DEFAULT_CRS, DecimalType, GeographyType, GeometryType, ListType, MapType, NestedField,
    NestedFieldBuilder, NestedType, PrimitiveType, StructType, Type, TypeId, format_fields,
};
