use tabletype_core::{ListType, NestedField, PrimitiveType, StructType, format_fields};

fn sample() -> StructType {
    let point = StructType::new(vec![
        NestedField::required(5, "x", PrimitiveType::Double).unwrap(),
    ]);
    StructType::new(vec![
        NestedField::required(1, "id", PrimitiveType::Long).unwrap(),
        NestedField::optional(2, "tags", ListType::of_optional(3, PrimitiveType::String)),
        NestedField::required_with_doc(4, "point", point, "location").unwrap(),
    ])
}

#[test]
fn format_fields_prints_tree() {
    let expected = "\
id: { id: 1, type: long, optional: false }
tags:
    id: 2
    type: list
    optional: true
    element: { id: 3, type: string, optional: true }
point:
    id: 4
    type: struct
    optional: false
    doc: \"location\"
    fields:
        x: { id: 5, type: double, optional: false }
";
    assert_eq!(format_fields(sample()).unwrap(), expected);
}

#[test]
fn alternate_display_uses_tree_format() {
    let s = sample();
    assert_eq!(format!("{s:#}"), format_fields(&s).unwrap());
    assert!(format!("{s}").starts_with("struct<1: id: required long"));
}

#[test]
fn primitive_doc_is_quoted() {
    let fields = vec![NestedField::optional_with_doc(
        1,
        "name",
        PrimitiveType::String,
        "display name",
    )];
    assert_eq!(
        format_fields(&fields).unwrap(),
        "name: { id: 1, type: string, optional: true, doc: \"display name\" }\n"
    );
}
