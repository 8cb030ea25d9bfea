//! In-memory host object model.
//!
//! Hosts that do not expose their own reflection layer describe their types,
//! properties and enum members here, together with any display-name
//! annotations attached to them.

use std::collections::{BTreeMap, HashMap};

use crate::{
    traits::{HasDisplayNameAnnotation, HostModel},
    types::{EnumValueDescriptor, PropertyDescriptor, TypeDescriptor},
};

#[derive(Debug, Clone, Default)]
struct TypeInfo {
    annotation: Option<String>,
    properties: BTreeMap<String, Option<String>>,
    members: Vec<MemberInfo>,
}

#[derive(Debug, Clone)]
struct MemberInfo {
    name: String,
    value: i64,
    annotation: Option<String>,
}

/// Blank annotations carry no name.
fn annotation(text: Option<String>) -> Option<String> {
    text.filter(|text| !text.trim().is_empty())
}

/// A host object model held in memory.
///
/// ```rust
/// use dispname::{ObjectModel, TypeDescriptor};
/// use dispname::traits::{HasDisplayNameAnnotation, HostModel};
///
/// let circle = TypeDescriptor::new("Acme.Cad", "Acme.Cad.Circle");
/// let model = ObjectModel::builder()
///     .type_annotation(&circle, "Circle")
///     .annotated_property(&circle, "Radius", "Radius (mm)")
///     .build();
///
/// let radius = model.find_property(&circle, "Radius").unwrap();
/// assert_eq!(model.try_get_annotation(&radius).as_deref(), Some("Radius (mm)"));
/// assert!(model.find_property(&circle, "radius").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectModel {
    types: HashMap<TypeDescriptor, TypeInfo>,
}

impl ObjectModel {
    pub fn builder() -> ObjectModelBuilder {
        ObjectModelBuilder::new()
    }

    /// Whether `ty` has been described.
    pub fn contains_type(&self, ty: &TypeDescriptor) -> bool {
        self.types.contains_key(ty)
    }

    /// Declared members of an enum type, in declaration order.
    pub fn enum_members(&self, enum_type: &TypeDescriptor) -> Vec<EnumValueDescriptor> {
        self.types
            .get(enum_type)
            .map(|info| {
                info.members
                    .iter()
                    .map(|member| {
                        EnumValueDescriptor::new(enum_type.clone(), &member.name, member.value)
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn member(&self, value: &EnumValueDescriptor) -> Option<&MemberInfo> {
        self.types
            .get(&value.enum_type)?
            .members
            .iter()
            .find(|member| member.name == value.member)
    }
}

impl HasDisplayNameAnnotation<TypeDescriptor> for ObjectModel {
    fn try_get_annotation(&self, ty: &TypeDescriptor) -> Option<String> {
        self.types.get(ty)?.annotation.clone()
    }
}

impl HasDisplayNameAnnotation<PropertyDescriptor> for ObjectModel {
    fn try_get_annotation(&self, property: &PropertyDescriptor) -> Option<String> {
        self.types
            .get(&property.declaring_type)?
            .properties
            .get(&property.name)?
            .clone()
    }
}

impl HasDisplayNameAnnotation<EnumValueDescriptor> for ObjectModel {
    fn try_get_annotation(&self, value: &EnumValueDescriptor) -> Option<String> {
        self.member(value)?.annotation.clone()
    }
}

impl HostModel for ObjectModel {
    fn find_property(
        &self,
        declaring_type: &TypeDescriptor,
        name: &str,
    ) -> Option<PropertyDescriptor> {
        self.types
            .get(declaring_type)?
            .properties
            .contains_key(name)
            .then(|| PropertyDescriptor::new(declaring_type.clone(), name))
    }

    fn find_enum_member(
        &self,
        enum_type: &TypeDescriptor,
        value: i64,
    ) -> Option<EnumValueDescriptor> {
        self.types
            .get(enum_type)?
            .members
            .iter()
            .find(|member| member.value == value)
            .map(|member| EnumValueDescriptor::new(enum_type.clone(), &member.name, member.value))
    }
}

/// Fluent builder for [`ObjectModel`].
#[derive(Debug, Default)]
pub struct ObjectModelBuilder {
    model: ObjectModel,
}

impl ObjectModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn info(&mut self, ty: &TypeDescriptor) -> &mut TypeInfo {
        self.model.types.entry(ty.clone()).or_default()
    }

    /// Attaches a type-level display-name annotation.
    pub fn type_annotation(mut self, ty: &TypeDescriptor, text: impl Into<String>) -> Self {
        self.info(ty).annotation = annotation(Some(text.into()));
        self
    }

    /// Declares a property without annotation.
    pub fn property(mut self, ty: &TypeDescriptor, name: impl Into<String>) -> Self {
        self.info(ty).properties.insert(name.into(), None);
        self
    }

    /// Declares a property carrying a display-name annotation.
    pub fn annotated_property(
        mut self,
        ty: &TypeDescriptor,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.info(ty)
            .properties
            .insert(name.into(), annotation(Some(text.into())));
        self
    }

    /// Declares an enum member without annotation.
    pub fn enum_member(
        self,
        enum_type: &TypeDescriptor,
        name: impl Into<String>,
        value: i64,
    ) -> Self {
        self.push_member(enum_type, name.into(), value, None)
    }

    /// Declares an enum member carrying a member-level display-name annotation.
    pub fn annotated_enum_member(
        self,
        enum_type: &TypeDescriptor,
        name: impl Into<String>,
        value: i64,
        text: impl Into<String>,
    ) -> Self {
        self.push_member(enum_type, name.into(), value, annotation(Some(text.into())))
    }

    fn push_member(
        mut self,
        enum_type: &TypeDescriptor,
        name: String,
        value: i64,
        annotation: Option<String>,
    ) -> Self {
        let members = &mut self.info(enum_type).members;
        match members.iter_mut().find(|member| member.name == name) {
            Some(existing) => {
                existing.value = value;
                existing.annotation = annotation;
            }
            None => members.push(MemberInfo {
                name,
                value,
                annotation,
            }),
        }
        self
    }

    pub fn build(self) -> ObjectModel {
        self.model
    }
}
