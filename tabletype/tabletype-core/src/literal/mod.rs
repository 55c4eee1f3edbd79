//! Typed literal values used for field defaults.

mod cast;
mod decimal;

use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use uuid::Uuid;

pub use decimal::{Decimal, MAX_DECIMAL_PRECISION};

use crate::error::LiteralTypeError;

/// A typed scalar value.
///
/// Temporal variants carry their physical encoding: `Date` is days from the
/// Unix epoch, `Time` is microseconds from midnight, `Timestamp` is
/// microseconds from the epoch and `TimestampNanos` nanoseconds from the epoch.
///
/// Floating point variants compare and hash by bit pattern, so `NaN` equals
/// itself and `0.0` differs from `-0.0`.
#[derive(Debug, Clone)]
pub enum Literal {
    Boolean(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Date(i32),
    Time(i64),
    Timestamp(i64),
    TimestampNanos(i64),
    String(Arc<str>),
    Uuid(Uuid),
    Fixed(Arc<[u8]>),
    Binary(Arc<[u8]>),
    Decimal(Decimal),
}

impl Literal {
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(Arc::from(s.as_ref()))
    }

    pub fn binary(bytes: impl AsRef<[u8]>) -> Self {
        Self::Binary(Arc::from(bytes.as_ref()))
    }

    pub fn fixed(bytes: impl AsRef<[u8]>) -> Self {
        Self::Fixed(Arc::from(bytes.as_ref()))
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Literal::Boolean(_) => "Boolean",
            Literal::Int(_) => "Int",
            Literal::Long(_) => "Long",
            Literal::Float(_) => "Float",
            Literal::Double(_) => "Double",
            Literal::Date(_) => "Date",
            Literal::Time(_) => "Time",
            Literal::Timestamp(_) => "Timestamp",
            Literal::TimestampNanos(_) => "TimestampNanos",
            Literal::String(_) => "String",
            Literal::Uuid(_) => "Uuid",
            Literal::Fixed(_) => "Fixed",
            Literal::Binary(_) => "Binary",
            Literal::Decimal(_) => "Decimal",
        }
    }

    pub fn type_mismatch(&self, expected: &'static str) -> LiteralTypeError {
        LiteralTypeError::new(expected, self.variant_name())
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Literal::Boolean(a), Literal::Boolean(b)) => a == b,
            (Literal::Int(a), Literal::Int(b)) => a == b,
            (Literal::Long(a), Literal::Long(b)) => a == b,
            (Literal::Float(a), Literal::Float(b)) => a.to_bits() == b.to_bits(),
            (Literal::Double(a), Literal::Double(b)) => a.to_bits() == b.to_bits(),
            (Literal::Date(a), Literal::Date(b)) => a == b,
            (Literal::Time(a), Literal::Time(b)) => a == b,
            (Literal::Timestamp(a), Literal::Timestamp(b)) => a == b,
            (Literal::TimestampNanos(a), Literal::TimestampNanos(b)) => a == b,
            (Literal::String(a), Literal::String(b)) => a == b,
            (Literal::Uuid(a), Literal::Uuid(b)) => a == b,
            (Literal::Fixed(a), Literal::Fixed(b)) => a == b,
            (Literal::Binary(a), Literal::Binary(b)) => a == b,
            (Literal::Decimal(a), Literal::Decimal(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Literal::Boolean(v) => v.hash(state),
            Literal::Int(v) | Literal::Date(v) => v.hash(state),
            Literal::Long(v)
            | Literal::Time(v)
            | Literal::Timestamp(v)
            | Literal::TimestampNanos(v) => v.hash(state),
            Literal::Float(v) => v.to_bits().hash(state),
            Literal::Double(v) => v.to_bits().hash(state),
            Literal::String(v) => v.hash(state),
            Literal::Uuid(v) => v.hash(state),
            Literal::Fixed(v) | Literal::Binary(v) => v.hash(state),
            Literal::Decimal(v) => v.hash(state),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Boolean(v) => write!(f, "{v}"),
            Literal::Int(v) => write!(f, "{v}"),
            Literal::Long(v) => write!(f, "{v}L"),
            Literal::Float(v) => write!(f, "{v}F"),
            Literal::Double(v) => write!(f, "{v}D"),
            Literal::Date(days) => match cast::date_from_days(*days) {
                Some(date) => write!(f, "{}", date.format("%Y-%m-%d")),
                None => write!(f, "date({days})"),
            },
            Literal::Time(micros) => match cast::time_from_micros(*micros) {
                Some(time) => write!(f, "{}", time.format("%H:%M:%S%.6f")),
                None => write!(f, "time({micros})"),
            },
            Literal::Timestamp(micros) => {
                match chrono::DateTime::from_timestamp_micros(*micros) {
                    Some(ts) => write!(f, "{}", ts.naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f")),
                    None => write!(f, "timestamp({micros})"),
                }
            }
            Literal::TimestampNanos(nanos) => {
                let ts = chrono::DateTime::from_timestamp_nanos(*nanos);
                write!(f, "{}", ts.naive_utc().format("%Y-%m-%dT%H:%M:%S%.9f"))
            }
            Literal::String(v) => write!(f, "\"{v}\""),
            Literal::Uuid(v) => write!(f, "{v}"),
            Literal::Fixed(bytes) | Literal::Binary(bytes) => {
                f.write_str("X'")?;
                for b in bytes.iter() {
                    write!(f, "{b:02X}")?;
                }
                f.write_str("'")
            }
            Literal::Decimal(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_from_native {
    ($($native:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$native> for Literal {
                fn from(value: $native) -> Self {
                    Literal::$variant(value)
                }
            }
        )*
    };
}

impl_from_native! {
    bool => Boolean,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Uuid => Uuid,
    Decimal => Decimal,
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::string(value)
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(Arc::from(value))
    }
}

impl From<Vec<u8>> for Literal {
    fn from(value: Vec<u8>) -> Self {
        Literal::Binary(Arc::from(value))
    }
}

impl From<&[u8]> for Literal {
    fn from(value: &[u8]) -> Self {
        Literal::binary(value)
    }
}

impl TryFrom<&Literal> for bool {
    type Error = LiteralTypeError;

    fn try_from(lit: &Literal) -> Result<Self, Self::Error> {
        match lit {
            Literal::Boolean(v) => Ok(*v),
            _ => Err(lit.type_mismatch("Boolean")),
        }
    }
}

/// Unwraps `Int` and `Date` (days from epoch).
impl TryFrom<&Literal> for i32 {
    type Error = LiteralTypeError;

    fn try_from(lit: &Literal) -> Result<Self, Self::Error> {
        match lit {
            Literal::Int(v) | Literal::Date(v) => Ok(*v),
            _ => Err(lit.type_mismatch("Int")),
        }
    }
}

/// Unwraps `Long` and the time/timestamp encodings.
impl TryFrom<&Literal> for i64 {
    type Error = LiteralTypeError;

    fn try_from(lit: &Literal) -> Result<Self, Self::Error> {
        match lit {
            Literal::Long(v)
            | Literal::Time(v)
            | Literal::Timestamp(v)
            | Literal::TimestampNanos(v) => Ok(*v),
            _ => Err(lit.type_mismatch("Long")),
        }
    }
}

impl TryFrom<&Literal> for f32 {
    type Error = LiteralTypeError;

    fn try_from(lit: &Literal) -> Result<Self, Self::Error> {
        match lit {
            Literal::Float(v) => Ok(*v),
            _ => Err(lit.type_mismatch("Float")),
        }
    }
}

impl TryFrom<&Literal> for f64 {
    type Error = LiteralTypeError;

    fn try_from(lit: &Literal) -> Result<Self, Self::Error> {
        match lit {
            Literal::Double(v) => Ok(*v),
            _ => Err(lit.type_mismatch("Double")),
        }
    }
}

impl<'a> TryFrom<&'a Literal> for &'a str {
    type Error = LiteralTypeError;

    fn try_from(lit: &'a Literal) -> Result<Self, Self::Error> {
        match lit {
            Literal::String(v) => Ok(v.as_ref()),
            _ => Err(lit.type_mismatch("String")),
        }
    }
}

impl TryFrom<&Literal> for String {
    type Error = LiteralTypeError;

    fn try_from(lit: &Literal) -> Result<Self, Self::Error> {
        <&str>::try_from(lit).map(str::to_string)
    }
}

impl TryFrom<&Literal> for Uuid {
    type Error = LiteralTypeError;

    fn try_from(lit: &Literal) -> Result<Self, Self::Error> {
        match lit {
            Literal::Uuid(v) => Ok(*v),
            _ => Err(lit.type_mismatch("Uuid")),
        }
    }
}

/// Unwraps `Fixed` and `Binary`.
impl<'a> TryFrom<&'a Literal> for &'a [u8] {
    type Error = LiteralTypeError;

    fn try_from(lit: &'a Literal) -> Result<Self, Self::Error> {
        match lit {
            Literal::Fixed(v) | Literal::Binary(v) => Ok(v.as_ref()),
            _ => Err(lit.type_mismatch("Binary")),
        }
    }
}

impl TryFrom<&Literal> for Decimal {
    type Error = LiteralTypeError;

    fn try_from(lit: &Literal) -> Result<Self, Self::Error> {
        match lit {
            Literal::Decimal(v) => Ok(*v),
            _ => Err(lit.type_mismatch("Decimal")),
        }
    }
}
