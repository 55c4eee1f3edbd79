use std::fmt::{Error, Result, Write as _};

use super::{NestedField, NestedType, Type};

/// Format fields in a readable style:
/// primitive fields are rendered in one line, nested fields are pretty-printed.
/// Nested fields follow the same rule.
pub fn format_fields(fields: impl AsRef<[NestedField]>) -> std::result::Result<String, Error> {
    let fields = fields.as_ref();
    let mut out = String::new();

    for field in fields.iter() {
        format_field(field, 0, &mut out)?;
    }

    Ok(out)
}

fn format_field(field: &NestedField, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    let label = field.name();
    let field_type = field.field_type();
    if !field_type.is_nested() {
        write!(
            out,
            "{pad}{label}: {{ id: {}, type: {field_type}, optional: {}",
            field.id(),
            field.is_optional()
        )?;
        if let Some(doc) = field.doc() {
            write!(out, ", doc: {doc:?}")?;
        }
        writeln!(out, " }}")?;
        return Ok(());
    }

    writeln!(out, "{pad}{label}:")?;
    format_nested_type(field, indent + 4, out)
}

fn format_nested_type(field: &NestedField, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    let field_type = field.field_type();
    writeln!(out, "{pad}id: {}", field.id())?;
    writeln!(out, "{pad}type: {}", field_type.type_id())?;
    writeln!(out, "{pad}optional: {}", field.is_optional())?;
    if let Some(doc) = field.doc() {
        writeln!(out, "{pad}doc: {doc:?}")?;
    }

    match field_type {
        Type::Struct(s) => {
            writeln!(out, "{pad}fields:")?;
            for child in s.fields() {
                format_field(child, indent + 4, out)?;
            }
        }
        Type::List(l) => {
            format_field(l.element_field(), indent, out)?;
        }
        Type::Map(m) => {
            format_field(m.key_field(), indent, out)?;
            format_field(m.value_field(), indent, out)?;
        }
        Type::Primitive(_) | Type::Variant => unreachable!("{field_type} is not a nested type"),
    }

    Ok(())
}
