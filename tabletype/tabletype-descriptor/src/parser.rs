//! Type descriptor parser built from `nom` combinators.
//!
//! Descriptor forms are tried in a fixed order: the stateless vocabulary
//! first, then `geometry`, `geography`, `fixed` and `decimal`. Each form must
//! consume the whole input to match.

use nom::{
    IResult,
    bytes::complete::{tag, tag_no_case, take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::{all_consuming, map, opt, value},
    sequence::{preceded, tuple},
};
use tabletype_core::{GeographyType, GeometryType, PrimitiveType, Type};
use tracing::debug;

use crate::error::DescriptorError;

/// Parse a type descriptor into a [`Type`].
pub fn parse_type(text: &str) -> Result<Type, DescriptorError> {
    let lower = text.to_lowercase();
    if let Some(ty) = vocabulary(&lower) {
        return Ok(ty);
    }

    if let Some(crs) = parse_geometry(text) {
        let geometry = GeometryType::new(crs)?;
        return Ok(PrimitiveType::Geometry(geometry).into());
    }

    if let Some((crs, algorithm)) = parse_geography(text) {
        let geography = GeographyType::with_algorithm_name(crs, algorithm)?;
        return Ok(PrimitiveType::Geography(geography).into());
    }

    if let Some(length) = parse_fixed(&lower) {
        let length = integer(length, text)?;
        return Ok(PrimitiveType::fixed(length).into());
    }

    if let Some((precision, scale)) = parse_decimal(&lower) {
        let precision = integer(precision, text)?;
        let scale = integer(scale, text)?;
        return Ok(PrimitiveType::decimal(precision, scale)?.into());
    }

    debug!(descriptor = text, "unparseable type descriptor");
    Err(unparseable(text))
}

/// Parse a type descriptor that must name a primitive type.
pub fn parse_primitive(text: &str) -> Result<PrimitiveType, DescriptorError> {
    match parse_type(text)? {
        Type::Primitive(primitive) => Ok(primitive),
        _ => Err(DescriptorError::NotPrimitive {
            text: text.to_string(),
        }),
    }
}

fn vocabulary(name: &str) -> Option<Type> {
    let primitive = match name {
        "boolean" => PrimitiveType::Boolean,
        "int" => PrimitiveType::Int,
        "long" => PrimitiveType::Long,
        "float" => PrimitiveType::Float,
        "double" => PrimitiveType::Double,
        "date" => PrimitiveType::Date,
        "time" => PrimitiveType::Time,
        "timestamp" => PrimitiveType::timestamp(),
        "timestamptz" => PrimitiveType::timestamptz(),
        "timestamp_ns" => PrimitiveType::timestamp_ns(),
        "timestamptz_ns" => PrimitiveType::timestamptz_ns(),
        "string" => PrimitiveType::String,
        "uuid" => PrimitiveType::Uuid,
        "binary" => PrimitiveType::Binary,
        "unknown" => PrimitiveType::Unknown,
        "geometry" => PrimitiveType::geometry(),
        "geography" => PrimitiveType::geography(),
        "variant" => return Some(Type::Variant),
        _ => return None,
    };
    Some(Type::Primitive(primitive))
}

fn integer(digits: &str, text: &str) -> Result<u32, DescriptorError> {
    digits.parse().map_err(|_| unparseable(text))
}

fn unparseable(text: &str) -> DescriptorError {
    DescriptorError::Unparseable {
        text: text.to_string(),
    }
}

fn parse_geometry(text: &str) -> Option<Option<&str>> {
    all_consuming(geometry)(text).ok().map(|(_, crs)| crs)
}

fn parse_geography(text: &str) -> Option<(Option<&str>, Option<&str>)> {
    all_consuming(geography)(text)
        .ok()
        .map(|(_, args)| match args {
            Some((crs, algorithm)) => (Some(crs), algorithm),
            None => (None, None),
        })
}

fn parse_fixed(text: &str) -> Option<&str> {
    all_consuming(fixed)(text).ok().map(|(_, length)| length)
}

fn parse_decimal(text: &str) -> Option<(&str, &str)> {
    all_consuming(decimal)(text).ok().map(|(_, params)| params)
}

/// Parse geometry or geometry(<crs>)
fn geometry(input: &str) -> IResult<&str, Option<&str>> {
    preceded(
        tuple((tag_no_case("geometry"), ws)),
        opt(map(
            tuple((char('('), ws, take_while(|c: char| c != ')'), char(')'))),
            |(_, _, crs, _)| crs.trim_end(),
        )),
    )(input)
}

/// Parse geography, geography(<crs>) or geography(<crs>, <algorithm>)
fn geography(input: &str) -> IResult<&str, Option<(&str, Option<&str>)>> {
    preceded(
        tuple((tag_no_case("geography"), ws)),
        opt(map(
            tuple((
                char('('),
                ws,
                take_while(|c: char| c != ',' && c != ')'),
                opt(preceded(tuple((char(','), ws)), word)),
                ws,
                char(')'),
            )),
            |(_, _, crs, algorithm, _, _)| (crs.trim_end(), algorithm),
        )),
    )(input)
}

/// Parse fixed[N]
fn fixed(input: &str) -> IResult<&str, &str> {
    map(
        tuple((tag("fixed["), ws, digits, ws, char(']'))),
        |(_, _, length, _, _)| length,
    )(input)
}

/// Parse decimal(P, S)
fn decimal(input: &str) -> IResult<&str, (&str, &str)> {
    map(
        tuple((
            tag("decimal("),
            ws,
            digits,
            ws,
            char(','),
            ws,
            digits,
            ws,
            char(')'),
        )),
        |(_, _, precision, _, _, _, scale, _, _)| (precision, scale),
    )(input)
}

/// Parse an algorithm name; may be empty so that `geography(crs, )` reaches name resolution.
fn word(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)
}

fn digits(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_digit())(input)
}

fn ws(input: &str) -> IResult<&str, ()> {
    value((), multispace0)(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_forms() {
        assert_eq!(geometry("geometry"), Ok(("", None)));
        assert_eq!(
            geometry("GEOMETRY ( srid:3857 )"),
            Ok(("", Some("srid:3857")))
        );
        assert_eq!(geometry("geometry()"), Ok(("", Some(""))));
        assert_eq!(parse_geometry("geometry(a)x"), None);
    }

    #[test]
    fn geography_forms() {
        assert_eq!(geography("geography"), Ok(("", None)));
        assert_eq!(
            geography("geography(srid:4269 , karney )"),
            Ok(("", Some(("srid:4269", Some("karney")))))
        );
        assert_eq!(
            geography("geography(srid:4269, )"),
            Ok(("", Some(("srid:4269", Some("")))))
        );
        assert_eq!(parse_geography("geography(a, b c)"), None);
    }

    #[test]
    fn fixed_and_decimal_forms() {
        assert_eq!(parse_fixed("fixed[ 16 ]"), Some("16"));
        assert_eq!(parse_fixed("fixed [16]"), None);
        assert_eq!(parse_fixed("fixed[-1]"), None);
        assert_eq!(parse_decimal("decimal( 9 ,2 )"), Some(("9", "2")));
        assert_eq!(parse_decimal("decimal(9)"), None);
    }

    #[test]
    fn vocabulary_is_exact() {
        assert_eq!(vocabulary("variant"), Some(Type::Variant));
        assert_eq!(
            vocabulary("timestamptz_ns"),
            Some(Type::Primitive(PrimitiveType::timestamptz_ns()))
        );
        assert_eq!(vocabulary(" int"), None);
    }
}
