use std::fmt::{self, Display, Formatter};

use super::{ListType, MapType, NestedType, PrimitiveType, StructType};

/// Tag identifying every concrete type a column can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeId {
    Boolean,
    Integer,
    Long,
    Float,
    Double,
    Date,
    Time,
    Timestamp,
    TimestampNano,
    String,
    Uuid,
    Fixed,
    Binary,
    Decimal,
    Variant,
    Unknown,
    Geometry,
    Geography,
    Struct,
    List,
    Map,
}

impl TypeId {
    pub fn is_primitive(&self) -> bool {
        !matches!(
            self,
            TypeId::Variant | TypeId::Struct | TypeId::List | TypeId::Map
        )
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, TypeId::Struct | TypeId::List | TypeId::Map)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeId::Boolean => "boolean",
            TypeId::Integer => "integer",
            TypeId::Long => "long",
            TypeId::Float => "float",
            TypeId::Double => "double",
            TypeId::Date => "date",
            TypeId::Time => "time",
            TypeId::Timestamp => "timestamp",
            TypeId::TimestampNano => "timestamp_nano",
            TypeId::String => "string",
            TypeId::Uuid => "uuid",
            TypeId::Fixed => "fixed",
            TypeId::Binary => "binary",
            TypeId::Decimal => "decimal",
            TypeId::Variant => "variant",
            TypeId::Unknown => "unknown",
            TypeId::Geometry => "geometry",
            TypeId::Geography => "geography",
            TypeId::Struct => "struct",
            TypeId::List => "list",
            TypeId::Map => "map",
        }
    }
}

impl Display for TypeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logical column type.
///
/// `Variant` is a semi-structured type that is neither primitive nor nested.
/// Composite types own their fields; equality is structural throughout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Primitive(PrimitiveType),
    Variant,
    Struct(StructType),
    List(ListType),
    Map(MapType),
}

impl Type {
    pub fn type_id(&self) -> TypeId {
        match self {
            Type::Primitive(p) => p.type_id(),
            Type::Variant => TypeId::Variant,
            Type::Struct(_) => TypeId::Struct,
            Type::List(_) => TypeId::List,
            Type::Map(_) => TypeId::Map,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Primitive(_))
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, Type::Struct(_) | Type::List(_) | Type::Map(_))
    }

    pub fn is_variant(&self) -> bool {
        matches!(self, Type::Variant)
    }

    pub fn is_struct(&self) -> bool {
        matches!(self, Type::Struct(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Type::List(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Type::Map(_))
    }

    pub fn as_primitive(&self) -> Option<&PrimitiveType> {
        match self {
            Type::Primitive(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&StructType> {
        match self {
            Type::Struct(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListType> {
        match self {
            Type::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&MapType> {
        match self {
            Type::Map(m) => Some(m),
            _ => None,
        }
    }

    /// View a struct, list or map through the common field-lookup interface.
    pub fn as_nested(&self) -> Option<&dyn NestedType> {
        match self {
            Type::Struct(s) => Some(s),
            Type::List(l) => Some(l),
            Type::Map(m) => Some(m),
            Type::Primitive(_) | Type::Variant => None,
        }
    }
}

impl From<PrimitiveType> for Type {
    fn from(value: PrimitiveType) -> Self {
        Type::Primitive(value)
    }
}

impl From<StructType> for Type {
    fn from(value: StructType) -> Self {
        Type::Struct(value)
    }
}

impl From<ListType> for Type {
    fn from(value: ListType) -> Self {
        Type::List(value)
    }
}

impl From<MapType> for Type {
    fn from(value: MapType) -> Self {
        Type::Map(value)
    }
}

impl PartialEq<PrimitiveType> for Type {
    fn eq(&self, other: &PrimitiveType) -> bool {
        self.as_primitive() == Some(other)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Type::Primitive(p) => Display::fmt(p, f),
            Type::Variant => f.write_str("variant"),
            Type::Struct(s) => Display::fmt(s, f),
            Type::List(l) => Display::fmt(l, f),
            Type::Map(m) => Display::fmt(m, f),
        }
    }
}
