use std::{
    collections::HashMap,
    fmt::{self, Debug, Display, Formatter},
    hash::{Hash, Hasher},
    sync::OnceLock,
};

use tracing::trace;

use super::{NestedField, Type, format_fields};
use crate::error::TypeError;

const ELEMENT: &str = "element";
const KEY: &str = "key";
const VALUE: &str = "value";

/// Field lookup shared by struct, list and map types.
pub trait NestedType {
    /// Member fields in declaration order.
    fn fields(&self) -> &[NestedField];

    /// Look up a direct member by field id.
    fn field(&self, id: i32) -> Option<&NestedField>;

    /// Look up a direct member by its exact name.
    fn field_by_name(&self, name: &str) -> Option<&NestedField>;

    /// Type of the direct member named `name`.
    fn field_type(&self, name: &str) -> Option<&Type> {
        self.field_by_name(name).map(NestedField::field_type)
    }
}

/// An ordered sequence of fields.
///
/// Field order is the column order and takes part in equality. Name and id
/// indices are built on first use and shared by all later lookups.
#[derive(Clone, Default)]
pub struct StructType {
    fields: Box<[NestedField]>,
    by_name: OnceLock<HashMap<String, usize>>,
    by_lowercase_name: OnceLock<HashMap<String, usize>>,
    by_id: OnceLock<HashMap<i32, usize>>,
}

impl StructType {
    pub fn new(fields: impl IntoIterator<Item = NestedField>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
            by_name: OnceLock::new(),
            by_lowercase_name: OnceLock::new(),
            by_id: OnceLock::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NestedField> {
        self.fields.iter()
    }

    /// Exact, case-sensitive lookup by name.
    pub fn field_by_name(&self, name: &str) -> Option<&NestedField> {
        self.index_by_name()
            .get(name)
            .map(|&pos| &self.fields[pos])
    }

    /// Lookup by lowercased name. When several fields share a lowercased
    /// name, the last one in declaration order wins.
    pub fn case_insensitive_field(&self, name: &str) -> Option<&NestedField> {
        self.index_by_lowercase_name()
            .get(&name.to_lowercase())
            .map(|&pos| &self.fields[pos])
    }

    fn index_by_name(&self) -> &HashMap<String, usize> {
        self.by_name.get_or_init(|| {
            trace!(fields = self.fields.len(), "building struct name index");
            self.fields
                .iter()
                .enumerate()
                .map(|(pos, field)| (field.name().to_string(), pos))
                .collect()
        })
    }

    fn index_by_lowercase_name(&self) -> &HashMap<String, usize> {
        self.by_lowercase_name.get_or_init(|| {
            trace!(fields = self.fields.len(), "building struct lowercase name index");
            self.fields
                .iter()
                .enumerate()
                .map(|(pos, field)| (field.name().to_lowercase(), pos))
                .collect()
        })
    }

    fn index_by_id(&self) -> &HashMap<i32, usize> {
        self.by_id.get_or_init(|| {
            trace!(fields = self.fields.len(), "building struct id index");
            self.fields
                .iter()
                .enumerate()
                .map(|(pos, field)| (field.id(), pos))
                .collect()
        })
    }
}

impl NestedType for StructType {
    fn fields(&self) -> &[NestedField] {
        &self.fields
    }

    fn field(&self, id: i32) -> Option<&NestedField> {
        self.index_by_id().get(&id).map(|&pos| &self.fields[pos])
    }

    fn field_by_name(&self, name: &str) -> Option<&NestedField> {
        StructType::field_by_name(self, name)
    }
}

impl From<Vec<NestedField>> for StructType {
    fn from(value: Vec<NestedField>) -> Self {
        Self::new(value)
    }
}

impl FromIterator<NestedField> for StructType {
    fn from_iter<I: IntoIterator<Item = NestedField>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl AsRef<[NestedField]> for StructType {
    fn as_ref(&self) -> &[NestedField] {
        &self.fields
    }
}

impl PartialEq for StructType {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Eq for StructType {}

impl Hash for StructType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fields.hash(state);
    }
}

impl Debug for StructType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructType")
            .field("fields", &self.fields)
            .finish()
    }
}

/// `struct<...>` on one line; the alternate form (`{:#}`) pretty-prints the field tree.
impl Display for StructType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            let text = format_fields(self)?;
            return f.write_str(&text);
        }
        f.write_str("struct<")?;
        for (pos, field) in self.fields.iter().enumerate() {
            if pos > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}")?;
        }
        f.write_str(">")
    }
}

/// A list whose elements are described by a single field named `element`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListType {
    element: Box<NestedField>,
}

impl ListType {
    pub fn of_optional(element_id: i32, element_type: impl Into<Type>) -> Self {
        Self {
            element: Box::new(NestedField::optional(element_id, ELEMENT, element_type)),
        }
    }

    /// Fails if `element_type` is the unknown type.
    pub fn of_required(element_id: i32, element_type: impl Into<Type>) -> Result<Self, TypeError> {
        Ok(Self {
            element: Box::new(NestedField::required(element_id, ELEMENT, element_type)?),
        })
    }

    pub fn element_field(&self) -> &NestedField {
        &self.element
    }

    pub fn element_id(&self) -> i32 {
        self.element.id()
    }

    pub fn element_type(&self) -> &Type {
        self.element.field_type()
    }

    pub fn is_element_optional(&self) -> bool {
        self.element.is_optional()
    }

    pub fn is_element_required(&self) -> bool {
        self.element.is_required()
    }
}

impl NestedType for ListType {
    fn fields(&self) -> &[NestedField] {
        std::slice::from_ref(&*self.element)
    }

    fn field(&self, id: i32) -> Option<&NestedField> {
        (self.element.id() == id).then_some(&*self.element)
    }

    fn field_by_name(&self, name: &str) -> Option<&NestedField> {
        (name == ELEMENT).then_some(&*self.element)
    }
}

impl Display for ListType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "list<{}>", self.element_type())
    }
}

/// A map described by a required `key` field and a `value` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapType {
    entries: Box<[NestedField; 2]>,
}

impl MapType {
    /// Map with an optional value. The key is always required.
    pub fn of_optional(
        key_id: i32,
        value_id: i32,
        key_type: impl Into<Type>,
        value_type: impl Into<Type>,
    ) -> Result<Self, TypeError> {
        Ok(Self::from_entries(
            NestedField::required(key_id, KEY, key_type)?,
            NestedField::optional(value_id, VALUE, value_type),
        ))
    }

    /// Map with a required value.
    pub fn of_required(
        key_id: i32,
        value_id: i32,
        key_type: impl Into<Type>,
        value_type: impl Into<Type>,
    ) -> Result<Self, TypeError> {
        Ok(Self::from_entries(
            NestedField::required(key_id, KEY, key_type)?,
            NestedField::required(value_id, VALUE, value_type)?,
        ))
    }

    fn from_entries(key: NestedField, value: NestedField) -> Self {
        Self {
            entries: Box::new([key, value]),
        }
    }

    pub fn key_field(&self) -> &NestedField {
        &self.entries[0]
    }

    pub fn value_field(&self) -> &NestedField {
        &self.entries[1]
    }

    pub fn key_id(&self) -> i32 {
        self.key_field().id()
    }

    pub fn value_id(&self) -> i32 {
        self.value_field().id()
    }

    pub fn key_type(&self) -> &Type {
        self.key_field().field_type()
    }

    pub fn value_type(&self) -> &Type {
        self.value_field().field_type()
    }

    pub fn is_value_optional(&self) -> bool {
        self.value_field().is_optional()
    }

    pub fn is_value_required(&self) -> bool {
        self.value_field().is_required()
    }
}

impl NestedType for MapType {
    fn fields(&self) -> &[NestedField] {
        &self.entries[..]
    }

    fn field(&self, id: i32) -> Option<&NestedField> {
        self.entries.iter().find(|field| field.id() == id)
    }

    fn field_by_name(&self, name: &str) -> Option<&NestedField> {
        match name {
            KEY => Some(self.key_field()),
            VALUE => Some(self.value_field()),
            _ => None,
        }
    }
}

impl Display for MapType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "map<{}, {}>", self.key_type(), self.value_type())
    }
}
