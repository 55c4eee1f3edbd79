//! Textual type descriptors for `tabletype`.
//!
//! A descriptor is the canonical rendering of a primitive type, such as
//! `long`, `fixed[16]`, `decimal(9, 2)` or `geography(OGC:CRS84, karney)`.
//! [`parse_type`] accepts every string produced by `Display` on
//! [`PrimitiveType`](tabletype_core::PrimitiveType), plus `variant`.
//!
//! ```text
//! descriptor
//!   └─ vocabulary lookup     – stateless names, lowercased
//!       └─ geometry(<crs>)   – keyword case-insensitive, CRS case kept
//!           └─ geography(<crs>[, <algorithm>])
//!               └─ fixed[<N>] / decimal(<P>, <S>) on the lowercased text
//! ```

mod error;
mod parser;

pub use error::DescriptorError;
pub use parser::{parse_primitive, parse_type};
