use dispname::{
    DescribedEnum, DescribedType, DisplayNameResolver, LookupOptions, ObjectModel, Satellite,
    SatelliteCatalog, TypeDescriptor, locale::parse_locale,
};

struct Dimension;

impl DescribedType for Dimension {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::new("Acme.Cad", "Acme.Cad.Annotations.Dimension")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrowHead {
    ClosedFilled = 0,
    Dot = 1,
    Oblique = 2,
}

impl DescribedType for ArrowHead {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::new("Acme.Cad", "Acme.Cad.Annotations.ArrowHead")
    }
}

impl DescribedEnum for ArrowHead {
    fn member_name(&self) -> &'static str {
        match self {
            ArrowHead::ClosedFilled => "ClosedFilled",
            ArrowHead::Dot => "Dot",
            ArrowHead::Oblique => "Oblique",
        }
    }

    fn member_value(&self) -> i64 {
        *self as i64
    }
}

#[derive(Debug, Clone, Copy)]
enum Units {
    Inches = 1,
}

impl DescribedType for Units {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::new("Acme.Cad", "Acme.Cad.Units")
    }
}

impl DescribedEnum for Units {
    fn member_name(&self) -> &'static str {
        "Inches"
    }

    fn member_value(&self) -> i64 {
        *self as i64
    }
}

fn resolver() -> DisplayNameResolver {
    let model = ObjectModel::builder()
        .annotated_property(&Dimension::type_descriptor(), "TextHeight", "Text height")
        .property(&Dimension::type_descriptor(), "Measurement")
        .annotated_enum_member(&ArrowHead::type_descriptor(), "Oblique", 2, "Oblique tick")
        .build();
    let catalog = SatelliteCatalog::new(
        LookupOptions::new().with_locale(Some(parse_locale("es").unwrap())),
    )
    .with_satellite(
        Satellite::new("Acme.Cad", "es")
            .with_entry("Class.Acme.Cad.Annotations.Dimension", "Cota")
            .with_entry("Enum.Acme.Cad.Annotations.ArrowHead.Dot", "Punto")
            .with_entry("Enum.Acme.Cad.Units.Inches", "Pulgadas"),
    );
    DisplayNameResolver::new(model, catalog)
}

#[test]
fn test_described_type_names() {
    let resolver = resolver();
    assert_eq!(Dimension::type_display_name(&resolver).unwrap(), "Cota");
    assert_eq!(
        Dimension::property_display_name(&resolver, "TextHeight").unwrap(),
        "Text height"
    );
    assert_eq!(
        Dimension::property_display_name(&resolver, "Measurement").unwrap(),
        "Measurement"
    );
    assert!(Dimension::property_display_name(&resolver, "Scale").is_err());
}

#[test]
fn test_described_enum_names() {
    let resolver = resolver();
    assert_eq!(ArrowHead::Dot.display_name(&resolver).unwrap(), "Punto");
    assert_eq!(
        ArrowHead::Oblique.display_name(&resolver).unwrap(),
        "Oblique tick"
    );
    assert_eq!(
        ArrowHead::ClosedFilled.display_name(&resolver).unwrap(),
        "ClosedFilled"
    );
}

#[test]
fn test_enums_sharing_a_value_stay_apart() {
    let resolver = resolver();
    assert_eq!(ArrowHead::Dot.member_value(), Units::Inches.member_value());
    assert_eq!(ArrowHead::Dot.display_name(&resolver).unwrap(), "Punto");
    assert_eq!(Units::Inches.display_name(&resolver).unwrap(), "Pulgadas");
}
