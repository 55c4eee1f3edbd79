use tabletype_core::{
    EdgeAlgorithm, GeographyType, GeometryType, ListType, MapType, NestedField, PrimitiveType,
    StructType, Type, TypeError, TypeId,
};

#[test]
fn primitives_render_canonical_descriptors() {
    let cases = [
        (PrimitiveType::Boolean, "boolean"),
        (PrimitiveType::Int, "int"),
        (PrimitiveType::Long, "long"),
        (PrimitiveType::Float, "float"),
        (PrimitiveType::Double, "double"),
        (PrimitiveType::Date, "date"),
        (PrimitiveType::Time, "time"),
        (PrimitiveType::timestamp(), "timestamp"),
        (PrimitiveType::timestamptz(), "timestamptz"),
        (PrimitiveType::timestamp_ns(), "timestamp_ns"),
        (PrimitiveType::timestamptz_ns(), "timestamptz_ns"),
        (PrimitiveType::String, "string"),
        (PrimitiveType::Uuid, "uuid"),
        (PrimitiveType::fixed(16), "fixed[16]"),
        (PrimitiveType::Binary, "binary"),
        (PrimitiveType::decimal(9, 2).unwrap(), "decimal(9, 2)"),
        (PrimitiveType::Unknown, "unknown"),
        (PrimitiveType::geometry(), "geometry"),
        (PrimitiveType::geography(), "geography"),
    ];
    for (ty, expected) in cases {
        assert_eq!(ty.to_string(), expected);
    }
}

#[test]
fn type_ids_and_classification() {
    assert_eq!(PrimitiveType::Int.type_id(), TypeId::Integer);
    assert_eq!(
        PrimitiveType::timestamptz_ns().type_id(),
        TypeId::TimestampNano
    );
    assert_eq!(PrimitiveType::timestamptz().type_id(), TypeId::Timestamp);
    assert_eq!(
        PrimitiveType::decimal(3, 0).unwrap().type_id(),
        TypeId::Decimal
    );

    let int = Type::Primitive(PrimitiveType::Int);
    assert!(int.is_primitive());
    assert!(!int.is_nested());
    assert!(TypeId::Integer.is_primitive());

    assert_eq!(Type::Variant.type_id(), TypeId::Variant);
    assert!(!Type::Variant.is_primitive());
    assert!(!Type::Variant.is_nested());
    assert!(!TypeId::Variant.is_primitive());
    assert!(!TypeId::Variant.is_nested());
    assert_eq!(Type::Variant.to_string(), "variant");

    let list: Type = ListType::of_optional(1, PrimitiveType::Int).into();
    assert!(list.is_list());
    assert!(list.is_nested());
    assert!(TypeId::Map.is_nested());
    assert!(!TypeId::Struct.is_primitive());
    assert_eq!(TypeId::TimestampNano.to_string(), "timestamp_nano");
}

#[test]
fn timestamp_zone_flags() {
    assert_eq!(PrimitiveType::timestamp().adjust_to_utc(), Some(false));
    assert_eq!(PrimitiveType::timestamptz_ns().adjust_to_utc(), Some(true));
    assert_eq!(PrimitiveType::Date.adjust_to_utc(), None);
    assert_ne!(PrimitiveType::timestamp(), PrimitiveType::timestamptz());
    assert_ne!(PrimitiveType::timestamp(), PrimitiveType::timestamp_ns());
}

#[test]
fn parameterized_equality() {
    assert_eq!(PrimitiveType::fixed(4), PrimitiveType::fixed(4));
    assert_ne!(PrimitiveType::fixed(4), PrimitiveType::fixed(5));
    assert_ne!(
        PrimitiveType::decimal(9, 2).unwrap(),
        PrimitiveType::decimal(9, 3).unwrap()
    );
    assert_eq!(Type::Primitive(PrimitiveType::Long), PrimitiveType::Long);
}

#[test]
fn geometry_rendering() {
    assert_eq!(
        GeometryType::of("srid:3857").unwrap().to_string(),
        "geometry(srid:3857)"
    );
    assert_eq!(
        GeometryType::of("OGC:CRS84").unwrap().to_string(),
        "geometry"
    );
    assert_eq!(
        GeometryType::of(""),
        Err(TypeError::InvalidCrs {
            crs: "(empty string)".to_string()
        })
    );
}

#[test]
fn geography_rendering() {
    let with_alg = GeographyType::new(None, Some(EdgeAlgorithm::Spherical)).unwrap();
    assert_eq!(with_alg.to_string(), "geography(OGC:CRS84, spherical)");

    let custom = GeographyType::new(Some("srid:4269"), Some(EdgeAlgorithm::Karney)).unwrap();
    assert_eq!(custom.to_string(), "geography(srid:4269, karney)");
    assert_eq!(custom.crs(), Some("srid:4269"));
    assert_eq!(custom.algorithm(), Some(EdgeAlgorithm::Karney));

    assert_eq!(
        GeographyType::of("srid:4269").unwrap().to_string(),
        "geography(srid:4269)"
    );
    assert_eq!(GeographyType::crs84().to_string(), "geography");
    assert_ne!(with_alg, GeographyType::crs84());
}

#[test]
fn edge_algorithm_names() {
    assert_eq!(
        EdgeAlgorithm::from_name("VINCENTY"),
        Ok(EdgeAlgorithm::Vincenty)
    );
    assert_eq!(
        "andoyer".parse::<EdgeAlgorithm>(),
        Ok(EdgeAlgorithm::Andoyer)
    );
    assert_eq!(
        EdgeAlgorithm::from_name("flat"),
        Err(TypeError::UnknownEdgeAlgorithm {
            name: "flat".to_string()
        })
    );
    for alg in EdgeAlgorithm::ALL {
        assert_eq!(EdgeAlgorithm::from_name(alg.as_str()), Ok(alg));
    }

    let err = GeographyType::with_algorithm_name(None, Some("flat")).unwrap_err();
    assert!(matches!(err, TypeError::UnknownEdgeAlgorithm { .. }));
}

#[test]
fn nested_types_render_members() {
    let map: Type = MapType::of_optional(2, 3, PrimitiveType::String, PrimitiveType::Long)
        .unwrap()
        .into();
    let s = StructType::new(vec![
        NestedField::optional(1, "props", map.clone()),
        NestedField::optional(4, "v", Type::Variant),
    ]);
    assert_eq!(
        s.to_string(),
        "struct<1: props: optional map<string, long>, 4: v: optional variant>"
    );
    assert_eq!(map.type_id(), TypeId::Map);
    assert!(map.as_map().is_some());
    assert!(map.as_struct().is_none());
}
