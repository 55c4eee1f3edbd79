use std::fmt::{self, Display, Formatter};

use super::TypeId;
use crate::{edge_algorithm::EdgeAlgorithm, error::TypeError, literal::MAX_DECIMAL_PRECISION};

/// CRS assumed when a geometry or geography type does not name one.
pub const DEFAULT_CRS: &str = "OGC:CRS84";

/// Scalar column types.
///
/// Stateless types are unit variants; parameterized types carry their
/// parameters. Use the constructors for validated parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Date,
    /// Time of day, microsecond precision, no zone.
    Time,
    /// Microsecond timestamp; `adjust_to_utc` marks a zone-adjusted instant.
    Timestamp { adjust_to_utc: bool },
    /// Nanosecond timestamp; `adjust_to_utc` marks a zone-adjusted instant.
    TimestampNs { adjust_to_utc: bool },
    String,
    Uuid,
    /// Fixed-length byte array of the given length.
    Fixed(u32),
    Binary,
    Decimal(DecimalType),
    /// Placeholder for a column whose type is not known yet; only valid as optional.
    Unknown,
    Geometry(GeometryType),
    Geography(GeographyType),
}

impl PrimitiveType {
    pub fn timestamp() -> Self {
        Self::Timestamp {
            adjust_to_utc: false,
        }
    }

    pub fn timestamptz() -> Self {
        Self::Timestamp {
            adjust_to_utc: true,
        }
    }

    pub fn timestamp_ns() -> Self {
        Self::TimestampNs {
            adjust_to_utc: false,
        }
    }

    pub fn timestamptz_ns() -> Self {
        Self::TimestampNs {
            adjust_to_utc: true,
        }
    }

    pub fn fixed(length: u32) -> Self {
        Self::Fixed(length)
    }

    pub fn decimal(precision: u32, scale: u32) -> Result<Self, TypeError> {
        DecimalType::new(precision, scale).map(Self::Decimal)
    }

    pub fn geometry() -> Self {
        Self::Geometry(GeometryType::crs84())
    }

    pub fn geography() -> Self {
        Self::Geography(GeographyType::crs84())
    }

    pub fn type_id(&self) -> TypeId {
        match self {
            PrimitiveType::Boolean => TypeId::Boolean,
            PrimitiveType::Int => TypeId::Integer,
            PrimitiveType::Long => TypeId::Long,
            PrimitiveType::Float => TypeId::Float,
            PrimitiveType::Double => TypeId::Double,
            PrimitiveType::Date => TypeId::Date,
            PrimitiveType::Time => TypeId::Time,
            PrimitiveType::Timestamp { .. } => TypeId::Timestamp,
            PrimitiveType::TimestampNs { .. } => TypeId::TimestampNano,
            PrimitiveType::String => TypeId::String,
            PrimitiveType::Uuid => TypeId::Uuid,
            PrimitiveType::Fixed(_) => TypeId::Fixed,
            PrimitiveType::Binary => TypeId::Binary,
            PrimitiveType::Decimal(_) => TypeId::Decimal,
            PrimitiveType::Unknown => TypeId::Unknown,
            PrimitiveType::Geometry(_) => TypeId::Geometry,
            PrimitiveType::Geography(_) => TypeId::Geography,
        }
    }

    /// Whether a timestamp type is zone-adjusted; `None` for non-timestamp types.
    pub fn adjust_to_utc(&self) -> Option<bool> {
        match self {
            PrimitiveType::Timestamp { adjust_to_utc }
            | PrimitiveType::TimestampNs { adjust_to_utc } => Some(*adjust_to_utc),
            _ => None,
        }
    }
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveType::Boolean => f.write_str("boolean"),
            PrimitiveType::Int => f.write_str("int"),
            PrimitiveType::Long => f.write_str("long"),
            PrimitiveType::Float => f.write_str("float"),
            PrimitiveType::Double => f.write_str("double"),
            PrimitiveType::Date => f.write_str("date"),
            PrimitiveType::Time => f.write_str("time"),
            PrimitiveType::Timestamp { adjust_to_utc } => {
                f.write_str(if *adjust_to_utc { "timestamptz" } else { "timestamp" })
            }
            PrimitiveType::TimestampNs { adjust_to_utc } => f.write_str(if *adjust_to_utc {
                "timestamptz_ns"
            } else {
                "timestamp_ns"
            }),
            PrimitiveType::String => f.write_str("string"),
            PrimitiveType::Uuid => f.write_str("uuid"),
            PrimitiveType::Fixed(length) => write!(f, "fixed[{length}]"),
            PrimitiveType::Binary => f.write_str("binary"),
            PrimitiveType::Decimal(d) => Display::fmt(d, f),
            PrimitiveType::Unknown => f.write_str("unknown"),
            PrimitiveType::Geometry(g) => Display::fmt(g, f),
            PrimitiveType::Geography(g) => Display::fmt(g, f),
        }
    }
}

/// Decimal parameters: `precision` in `1..=38`, `scale <= precision`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalType {
    precision: u32,
    scale: u32,
}

impl DecimalType {
    pub fn new(precision: u32, scale: u32) -> Result<Self, TypeError> {
        if precision == 0 || precision > MAX_DECIMAL_PRECISION {
            return Err(TypeError::UnsupportedPrecision { precision });
        }
        if scale > precision {
            return Err(TypeError::InvalidScale { precision, scale });
        }
        Ok(Self { precision, scale })
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }
}

impl Display for DecimalType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "decimal({}, {})", self.precision, self.scale)
    }
}

/// Collapse the default CRS (any case) to `None`.
///
/// A CRS must render back to the same descriptor: it may not be empty, carry
/// surrounding whitespace, or contain the `,` and `)` delimiters.
fn normalize_crs(crs: Option<&str>) -> Result<Option<String>, TypeError> {
    match crs {
        None => Ok(None),
        Some("") => Err(TypeError::InvalidCrs {
            crs: "(empty string)".to_string(),
        }),
        Some(crs) if crs.trim() != crs || crs.contains([',', ')']) => {
            Err(TypeError::InvalidCrs {
                crs: crs.to_string(),
            })
        }
        Some(crs) if crs.eq_ignore_ascii_case(DEFAULT_CRS) => Ok(None),
        Some(crs) => Ok(Some(crs.to_string())),
    }
}

/// Geometry parameters. A `None` CRS means [`DEFAULT_CRS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GeometryType {
    crs: Option<String>,
}

impl GeometryType {
    pub const fn crs84() -> Self {
        Self { crs: None }
    }

    pub fn new(crs: Option<&str>) -> Result<Self, TypeError> {
        Ok(Self {
            crs: normalize_crs(crs)?,
        })
    }

    pub fn of(crs: &str) -> Result<Self, TypeError> {
        Self::new(Some(crs))
    }

    /// The explicit CRS, or `None` for the default.
    pub fn crs(&self) -> Option<&str> {
        self.crs.as_deref()
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.crs {
            Some(crs) => write!(f, "geometry({crs})"),
            None => f.write_str("geometry"),
        }
    }
}

/// Geography parameters. A `None` CRS means [`DEFAULT_CRS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GeographyType {
    crs: Option<String>,
    algorithm: Option<EdgeAlgorithm>,
}

impl GeographyType {
    pub const fn crs84() -> Self {
        Self {
            crs: None,
            algorithm: None,
        }
    }

    pub fn new(crs: Option<&str>, algorithm: Option<EdgeAlgorithm>) -> Result<Self, TypeError> {
        Ok(Self {
            crs: normalize_crs(crs)?,
            algorithm,
        })
    }

    pub fn of(crs: &str) -> Result<Self, TypeError> {
        Self::new(Some(crs), None)
    }

    /// Build a geography type resolving the algorithm by name.
    pub fn with_algorithm_name(
        crs: Option<&str>,
        algorithm: Option<&str>,
    ) -> Result<Self, TypeError> {
        let algorithm = algorithm.map(EdgeAlgorithm::from_name).transpose()?;
        Self::new(crs, algorithm)
    }

    pub fn crs(&self) -> Option<&str> {
        self.crs.as_deref()
    }

    pub fn algorithm(&self) -> Option<EdgeAlgorithm> {
        self.algorithm
    }
}

impl Display for GeographyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match (&self.crs, self.algorithm) {
            (crs, Some(algorithm)) => write!(
                f,
                "geography({}, {algorithm})",
                crs.as_deref().unwrap_or(DEFAULT_CRS)
            ),
            (Some(crs), None) => write!(f, "geography({crs})"),
            (None, None) => f.write_str("geography"),
        }
    }
}
