use std::{
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
};

use tracing::debug;

use super::{PrimitiveType, Type};
use crate::{
    error::{LiteralTypeError, TypeError},
    literal::Literal,
};

/// A named, identified and typed slot inside a struct, list or map.
///
/// Field ids are expected to be unique within a schema, but that is checked by
/// the schema, not here. Default literals are cast to the field type when the
/// field is constructed, and are only allowed on non-nested types.
///
/// Equality compares every attribute. Hashing covers only id, optionality,
/// name and type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedField {
    id: i32,
    name: String,
    field_type: Type,
    optional: bool,
    doc: Option<String>,
    initial_default: Option<Literal>,
    write_default: Option<Literal>,
}

impl NestedField {
    pub fn optional(id: i32, name: impl Into<String>, field_type: impl Into<Type>) -> Self {
        Self {
            id,
            name: name.into(),
            field_type: field_type.into(),
            optional: true,
            doc: None,
            initial_default: None,
            write_default: None,
        }
    }

    pub fn optional_with_doc(
        id: i32,
        name: impl Into<String>,
        field_type: impl Into<Type>,
        doc: impl Into<String>,
    ) -> Self {
        Self {
            doc: Some(doc.into()),
            ..Self::optional(id, name, field_type)
        }
    }

    /// Create a required field. Fails if `field_type` is the unknown type.
    pub fn required(
        id: i32,
        name: impl Into<String>,
        field_type: impl Into<Type>,
    ) -> Result<Self, TypeError> {
        Self::optional(id, name, field_type).as_required()
    }

    pub fn required_with_doc(
        id: i32,
        name: impl Into<String>,
        field_type: impl Into<Type>,
        doc: impl Into<String>,
    ) -> Result<Self, TypeError> {
        Self::optional_with_doc(id, name, field_type, doc).as_required()
    }

    pub fn builder() -> NestedFieldBuilder {
        NestedFieldBuilder::default()
    }

    /// Start a builder pre-populated with every attribute of this field.
    pub fn to_builder(&self) -> NestedFieldBuilder {
        NestedFieldBuilder::from(self)
    }

    fn try_new(
        optional: bool,
        id: i32,
        name: String,
        field_type: Type,
        doc: Option<String>,
        initial_default: Option<Literal>,
        write_default: Option<Literal>,
    ) -> Result<Self, TypeError> {
        if !optional && field_type == PrimitiveType::Unknown {
            return Err(TypeError::RequiredUnknown { name });
        }
        let initial_default = cast_default(initial_default, &field_type)?;
        let write_default = cast_default(write_default, &field_type)?;
        Ok(Self {
            id,
            name,
            field_type,
            optional,
            doc,
            initial_default,
            write_default,
        })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> &Type {
        &self.field_type
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_required(&self) -> bool {
        !self.optional
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Return this field marked optional.
    pub fn as_optional(self) -> Self {
        Self {
            optional: true,
            ..self
        }
    }

    /// Return this field marked required. Fails for the unknown type.
    pub fn as_required(self) -> Result<Self, TypeError> {
        if self.field_type == PrimitiveType::Unknown {
            return Err(TypeError::RequiredUnknown { name: self.name });
        }
        Ok(Self {
            optional: false,
            ..self
        })
    }

    pub fn initial_default_literal(&self) -> Option<&Literal> {
        self.initial_default.as_ref()
    }

    pub fn write_default_literal(&self) -> Option<&Literal> {
        self.write_default.as_ref()
    }

    /// The initial default unwrapped as a native value.
    ///
    /// `Ok(None)` when no default is set; an error when `T` does not match the
    /// literal's representation.
    pub fn initial_default<'a, T>(&'a self) -> Result<Option<T>, LiteralTypeError>
    where
        T: TryFrom<&'a Literal, Error = LiteralTypeError>,
    {
        self.initial_default.as_ref().map(T::try_from).transpose()
    }

    /// The write default unwrapped as a native value.
    pub fn write_default<'a, T>(&'a self) -> Result<Option<T>, LiteralTypeError>
    where
        T: TryFrom<&'a Literal, Error = LiteralTypeError>,
    {
        self.write_default.as_ref().map(T::try_from).transpose()
    }
}

fn cast_default(default: Option<Literal>, field_type: &Type) -> Result<Option<Literal>, TypeError> {
    let Some(value) = default else {
        return Ok(None);
    };
    if field_type.is_nested() {
        return Err(TypeError::InvalidDefault {
            field_type: field_type.to_string(),
            value: value.to_string(),
            reason: "must be null",
        });
    }
    match value.to(field_type) {
        Some(typed) => Ok(Some(typed)),
        None => {
            debug!(%field_type, %value, "default value is not representable in field type");
            Err(TypeError::InvalidDefault {
                field_type: field_type.to_string(),
                value: value.to_string(),
                reason: "cannot cast",
            })
        }
    }
}

impl Hash for NestedField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.optional.hash(state);
        self.name.hash(state);
        self.field_type.hash(state);
    }
}

impl Display for NestedField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let optionality = if self.optional { "optional" } else { "required" };
        write!(
            f,
            "{}: {}: {optionality} {}",
            self.id, self.name, self.field_type
        )?;
        if let Some(doc) = &self.doc {
            write!(f, " ({doc})")?;
        }
        Ok(())
    }
}

/// Builder for [`NestedField`]. Fields are optional unless marked otherwise.
#[derive(Debug, Clone)]
pub struct NestedFieldBuilder {
    optional: bool,
    name: Option<String>,
    id: Option<i32>,
    field_type: Option<Type>,
    doc: Option<String>,
    initial_default: Option<Literal>,
    write_default: Option<Literal>,
}

impl Default for NestedFieldBuilder {
    fn default() -> Self {
        Self {
            optional: true,
            name: None,
            id: None,
            field_type: None,
            doc: None,
            initial_default: None,
            write_default: None,
        }
    }
}

impl NestedFieldBuilder {
    pub fn optional(name: impl Into<String>) -> Self {
        Self::default().with_name(name)
    }

    pub fn required(name: impl Into<String>) -> Self {
        Self::optional(name).as_required()
    }

    pub fn as_required(self) -> Self {
        self.is_optional(false)
    }

    pub fn as_optional(self) -> Self {
        self.is_optional(true)
    }

    pub fn is_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn of_type(mut self, field_type: impl Into<Type>) -> Self {
        self.field_type = Some(field_type.into());
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Set the initial default. The value is cast to the field type by [`build`](Self::build).
    pub fn with_initial_default(mut self, value: impl Into<Literal>) -> Self {
        self.initial_default = Some(value.into());
        self
    }

    /// Set the write default. The value is cast to the field type by [`build`](Self::build).
    pub fn with_write_default(mut self, value: impl Into<Literal>) -> Self {
        self.write_default = Some(value.into());
        self
    }

    pub fn build(self) -> Result<NestedField, TypeError> {
        let id = self
            .id
            .ok_or(TypeError::MissingAttribute { attribute: "id" })?;
        let name = self
            .name
            .ok_or(TypeError::MissingAttribute { attribute: "name" })?;
        let field_type = self
            .field_type
            .ok_or(TypeError::MissingAttribute { attribute: "type" })?;
        NestedField::try_new(
            self.optional,
            id,
            name,
            field_type,
            self.doc,
            self.initial_default,
            self.write_default,
        )
    }
}

impl From<&NestedField> for NestedFieldBuilder {
    fn from(field: &NestedField) -> Self {
        Self {
            optional: field.optional,
            name: Some(field.name.clone()),
            id: Some(field.id),
            field_type: Some(field.field_type.clone()),
            doc: field.doc.clone(),
            initial_default: field.initial_default.clone(),
            write_default: field.write_default.clone(),
        }
    }
}
