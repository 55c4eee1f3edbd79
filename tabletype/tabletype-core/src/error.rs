//! Error types for type construction and field validation.

/// Error returned when a type or field cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// A CRS was empty, or a geometry CRS carried a second argument.
    #[error("invalid CRS: {crs}")]
    InvalidCrs { crs: String },

    /// A geography edge algorithm name did not match any known algorithm.
    #[error("unknown edge algorithm: '{name}'")]
    UnknownEdgeAlgorithm { name: String },

    /// Decimal precision outside `1..=38`.
    #[error("unsupported decimal precision {precision}: must be between 1 and 38")]
    UnsupportedPrecision { precision: u32 },

    /// Decimal scale larger than its precision.
    #[error("invalid decimal scale {scale} for precision {precision}")]
    InvalidScale { precision: u32, scale: u32 },

    /// A field builder was finished without one of id, name or type.
    #[error("missing required attribute: {attribute} cannot be unset")]
    MissingAttribute { attribute: &'static str },

    /// A required field was declared with the unknown type.
    #[error("cannot create required field with unknown type: {name}")]
    RequiredUnknown { name: String },

    /// A default value was given for a nested type or could not be cast.
    #[error("invalid default value for {field_type}: {value} ({reason})")]
    InvalidDefault {
        field_type: String,
        value: String,
        reason: &'static str,
    },
}

/// Error returned when a [`Literal`](crate::Literal) is unwrapped as the wrong native type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("literal type mismatch: expected {expected}, found {actual}")]
pub struct LiteralTypeError {
    pub expected: &'static str,
    pub actual: &'static str,
}

impl LiteralTypeError {
    pub fn new(expected: &'static str, actual: &'static str) -> Self {
        Self { expected, actual }
    }
}
