use tabletype_core::{
    Literal, LiteralTypeError, NestedField, NestedFieldBuilder, PrimitiveType, StructType, Type,
    TypeError,
};

#[test]
fn required_unknown_is_rejected_but_optional_unknown_is_allowed() {
    let err = NestedField::required(1, "mystery", PrimitiveType::Unknown).unwrap_err();
    assert_eq!(
        err,
        TypeError::RequiredUnknown {
            name: "mystery".to_string()
        }
    );

    let field = NestedField::optional(1, "mystery", PrimitiveType::Unknown);
    assert!(field.is_optional());
    assert_eq!(field.field_type(), &Type::Primitive(PrimitiveType::Unknown));

    let err = NestedFieldBuilder::required("mystery")
        .with_id(1)
        .of_type(PrimitiveType::Unknown)
        .build()
        .unwrap_err();
    assert!(matches!(err, TypeError::RequiredUnknown { .. }));
}

#[test]
fn builder_requires_id_name_and_type() {
    let err = NestedField::builder()
        .with_name("a")
        .of_type(PrimitiveType::Int)
        .build()
        .unwrap_err();
    assert_eq!(err, TypeError::MissingAttribute { attribute: "id" });

    let err = NestedField::builder()
        .with_id(1)
        .of_type(PrimitiveType::Int)
        .build()
        .unwrap_err();
    assert_eq!(err, TypeError::MissingAttribute { attribute: "name" });

    let err = NestedField::builder()
        .with_id(1)
        .with_name("a")
        .build()
        .unwrap_err();
    assert_eq!(err, TypeError::MissingAttribute { attribute: "type" });
}

#[test]
fn builder_defaults_to_optional() {
    let field = NestedField::builder()
        .with_id(7)
        .with_name("x")
        .of_type(PrimitiveType::Long)
        .with_doc("a number")
        .build()
        .unwrap();
    assert!(field.is_optional());
    assert_eq!(field.id(), 7);
    assert_eq!(field.name(), "x");
    assert_eq!(field.doc(), Some("a number"));
    assert_eq!(
        field,
        NestedField::optional_with_doc(7, "x", PrimitiveType::Long, "a number")
    );
}

#[test]
fn int_initial_default_reads_back_equal() {
    let field = NestedFieldBuilder::optional("count")
        .with_id(1)
        .of_type(PrimitiveType::Int)
        .with_initial_default(34)
        .build()
        .unwrap();

    assert_eq!(field.initial_default::<i32>(), Ok(Some(34)));
    assert_eq!(field.initial_default_literal(), Some(&Literal::Int(34)));
    assert_eq!(field.write_default::<i32>(), Ok(None));
    assert_eq!(field.write_default_literal(), None);
}

#[test]
fn default_read_as_wrong_native_type_is_an_error() {
    let field = NestedFieldBuilder::optional("count")
        .with_id(1)
        .of_type(PrimitiveType::Int)
        .with_write_default(7)
        .build()
        .unwrap();
    assert_eq!(
        field.write_default::<bool>(),
        Err(LiteralTypeError::new("Boolean", "Int"))
    );
    assert_eq!(field.initial_default::<bool>(), Ok(None));
}

#[test]
fn tiny_double_default_on_decimal_field_rounds_to_zero() {
    let field = NestedFieldBuilder::optional("price")
        .with_id(1)
        .of_type(PrimitiveType::decimal(9, 2).unwrap())
        .with_initial_default(1.2345678901234567e-25_f64)
        .build()
        .unwrap();
    assert_eq!(
        field.initial_default_literal().map(ToString::to_string),
        Some("0.00".to_string())
    );
}

#[test]
fn defaults_are_cast_to_the_field_type() {
    let field = NestedFieldBuilder::required("total")
        .with_id(2)
        .of_type(PrimitiveType::Long)
        .with_initial_default(5)
        .with_write_default(6)
        .build()
        .unwrap();
    assert_eq!(field.initial_default_literal(), Some(&Literal::Long(5)));
    assert_eq!(field.write_default::<i64>(), Ok(Some(6)));

    let field = NestedFieldBuilder::optional("day")
        .with_id(3)
        .of_type(PrimitiveType::Date)
        .with_initial_default("2017-11-16")
        .build()
        .unwrap();
    assert_eq!(field.initial_default_literal(), Some(&Literal::Date(17486)));

    let field = NestedFieldBuilder::optional("price")
        .with_id(4)
        .of_type(PrimitiveType::decimal(9, 2).unwrap())
        .with_write_default(3.14159_f64)
        .build()
        .unwrap();
    assert_eq!(
        field.write_default_literal().map(ToString::to_string),
        Some("3.14".to_string())
    );
}

#[test]
fn uncastable_default_is_rejected() {
    let err = NestedFieldBuilder::optional("flag")
        .with_id(1)
        .of_type(PrimitiveType::Boolean)
        .with_initial_default("yes")
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        TypeError::InvalidDefault {
            reason: "cannot cast",
            ..
        }
    ));

    let err = NestedFieldBuilder::optional("small")
        .with_id(1)
        .of_type(PrimitiveType::Int)
        .with_write_default(i64::MAX)
        .build()
        .unwrap_err();
    assert!(matches!(err, TypeError::InvalidDefault { .. }));
}

#[test]
fn default_on_nested_type_is_rejected() {
    let inner = StructType::new(vec![NestedField::optional(2, "x", PrimitiveType::Int)]);
    let err = NestedFieldBuilder::optional("s")
        .with_id(1)
        .of_type(inner)
        .with_initial_default(1)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        TypeError::InvalidDefault {
            reason: "must be null",
            ..
        }
    ));
}

#[test]
fn optionality_toggles_keep_other_attributes() {
    let field = NestedFieldBuilder::optional("name")
        .with_id(3)
        .of_type(PrimitiveType::String)
        .with_doc("display name")
        .with_initial_default("anonymous")
        .build()
        .unwrap();

    let required = field.clone().as_required().unwrap();
    assert!(required.is_required());
    assert_eq!(required.doc(), Some("display name"));
    assert_eq!(required.initial_default::<&str>(), Ok(Some("anonymous")));

    let back = required.clone().as_required().unwrap();
    assert_eq!(back, required);
    assert_eq!(required.as_optional(), field);

    let unknown = NestedField::optional(9, "u", PrimitiveType::Unknown);
    assert!(unknown.as_required().is_err());
}

#[test]
fn to_builder_copies_every_attribute() {
    let field = NestedFieldBuilder::required("id")
        .with_id(1)
        .of_type(PrimitiveType::Int)
        .with_doc("primary key")
        .with_write_default(0)
        .build()
        .unwrap();
    assert_eq!(field.to_builder().build().unwrap(), field);

    let renamed = field.to_builder().with_name("key").with_id(5).build().unwrap();
    assert_eq!(renamed.name(), "key");
    assert_eq!(renamed.id(), 5);
    assert_eq!(renamed.write_default::<i32>(), Ok(Some(0)));
}

#[test]
fn equality_covers_doc_and_defaults() {
    let plain = NestedField::optional(1, "a", PrimitiveType::Int);
    let documented = NestedField::optional_with_doc(1, "a", PrimitiveType::Int, "doc");
    assert_ne!(plain, documented);

    let with_default = plain.to_builder().with_initial_default(1).build().unwrap();
    assert_ne!(plain, with_default);
    assert_ne!(
        plain,
        NestedField::required(1, "a", PrimitiveType::Int).unwrap()
    );
}

#[test]
fn display_includes_optionality_and_doc() {
    let field = NestedField::required_with_doc(1, "id", PrimitiveType::Long, "row id").unwrap();
    assert_eq!(field.to_string(), "1: id: required long (row id)");
    let field = NestedField::optional(2, "data", PrimitiveType::fixed(16));
    assert_eq!(field.to_string(), "2: data: optional fixed[16]");
}
