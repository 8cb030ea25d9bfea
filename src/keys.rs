//! Resource key templates.
//!
//! Keys are `Class.<TypeFullName>`, `Property.<TypeFullName>.<PropertyName>`
//! and `Enum.<EnumFullName>.<MemberName>`.

use crate::types::{EnumValueDescriptor, PropertyDescriptor, TypeDescriptor};

pub const CLASS_PREFIX: &str = "Class";
pub const PROPERTY_PREFIX: &str = "Property";
pub const ENUM_PREFIX: &str = "Enum";

pub fn class_key(ty: &TypeDescriptor) -> String {
    format!("{CLASS_PREFIX}.{}", ty.full_name)
}

pub fn property_key(property: &PropertyDescriptor) -> String {
    format!(
        "{PROPERTY_PREFIX}.{}.{}",
        property.declaring_type.full_name, property.name
    )
}

pub fn enum_key(value: &EnumValueDescriptor) -> String {
    format!("{ENUM_PREFIX}.{}.{}", value.enum_type.full_name, value.member)
}
