//! Display-name resolution for types, properties and enum members.
//!
//! Every descriptor kind resolves through the same three tiers:
//!
//! 1. the module's resource store, under the kind's key template;
//! 2. the display-name annotation the host attached to the descriptor;
//! 3. the descriptor's own bare name.
//!
//! The first tier that yields a non-blank string wins. Results are cached per
//! descriptor for the lifetime of the resolver and never invalidated, so a
//! locale or satellite swapped at runtime is not observed by descriptors that
//! were already resolved.

use std::{
    collections::HashMap,
    fmt,
    hash::Hash,
    sync::{Arc, PoisonError, RwLock},
};

use crate::{
    accessor::{ResourceAccessor, get_string},
    error::{Error, require_non_blank},
    keys::{class_key, enum_key, property_key},
    traits::{AccessorFactory, DisplayName, HasDisplayNameAnnotation, HostModel},
    types::{EnumValueDescriptor, ModuleId, PropertyDescriptor, TypeDescriptor},
};

/// Append-only map guarded for concurrent get-or-create.
///
/// Values are computed outside the lock; when two callers race on the same
/// key the first insert wins and both observe it.
struct Cache<K, V> {
    entries: RwLock<HashMap<K, V>>,
}

impl<K: Eq + Hash + Clone + fmt::Debug, V: Clone> Cache<K, V> {
    fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    fn get(&self, key: &K) -> Option<V> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn get_or_try_insert_with<F>(&self, key: &K, create: F) -> Result<V, Error>
    where
        F: FnOnce() -> Result<V, Error>,
    {
        if let Some(value) = self.get(key) {
            tracing::trace!(?key, "cache hit");
            return Ok(value);
        }
        let value = create()?;
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.entry(key.clone()).or_insert(value).clone())
    }

    fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Number of entries held by each of the resolver's caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheCounts {
    pub accessors: usize,
    pub types: usize,
    pub properties: usize,
    pub enums: usize,
}

/// Resolves localized display names against a host object model.
///
/// ```rust
/// use dispname::{DisplayNameResolver, LookupOptions, ObjectModel, Satellite, SatelliteCatalog};
/// use dispname::{TypeDescriptor, locale::parse_locale};
///
/// let circle = TypeDescriptor::new("Acme.Cad", "Acme.Cad.Circle");
/// let model = ObjectModel::builder()
///     .annotated_property(&circle, "Radius", "Radius")
///     .property(&circle, "Center")
///     .build();
/// let satellites = SatelliteCatalog::new(
///     LookupOptions::new().with_locale(Some(parse_locale("de")?)),
/// )
/// .with_satellite(Satellite::new("Acme.Cad", "de").with_entry("Class.Acme.Cad.Circle", "Kreis"));
///
/// let resolver = DisplayNameResolver::new(model, satellites);
/// assert_eq!(resolver.type_display_name(&circle)?, "Kreis");
/// assert_eq!(resolver.property_display_name_by_name(&circle, "Radius")?, "Radius");
/// assert_eq!(resolver.property_display_name_by_name(&circle, "Center")?, "Center");
/// assert!(resolver.property_display_name_by_name(&circle, "Area").is_err());
/// # Ok::<(), dispname::Error>(())
/// ```
pub struct DisplayNameResolver {
    host: Arc<dyn HostModel>,
    factory: Arc<dyn AccessorFactory>,
    accessors: Cache<ModuleId, ResourceAccessor>,
    types: Cache<TypeDescriptor, String>,
    properties: Cache<PropertyDescriptor, String>,
    enums: Cache<EnumValueDescriptor, String>,
}

impl DisplayNameResolver {
    pub fn new<H, F>(host: H, factory: F) -> Self
    where
        H: HostModel + 'static,
        F: AccessorFactory + 'static,
    {
        Self::from_shared(Arc::new(host), Arc::new(factory))
    }

    /// Creates a resolver over collaborators shared with other owners.
    pub fn from_shared(host: Arc<dyn HostModel>, factory: Arc<dyn AccessorFactory>) -> Self {
        Self {
            host,
            factory,
            accessors: Cache::new(),
            types: Cache::new(),
            properties: Cache::new(),
            enums: Cache::new(),
        }
    }

    /// The accessor for the module defining `ty`, created on first use.
    pub fn accessor_for(&self, ty: &TypeDescriptor) -> Result<ResourceAccessor, Error> {
        ty.validate()?;
        let module = &ty.module;
        self.accessors.get_or_try_insert_with(module, || {
            tracing::debug!(%module, "creating resource accessor");
            Ok(ResourceAccessor::new(
                module.clone(),
                self.factory.create(module),
            ))
        })
    }

    pub fn type_display_name(&self, ty: &TypeDescriptor) -> Result<String, Error> {
        ty.validate()?;
        self.types.get_or_try_insert_with(ty, || {
            self.resolve(
                &class_key(ty),
                ty,
                || self.annotation(ty),
                || ty.name().to_string(),
            )
        })
    }

    pub fn property_display_name(&self, property: &PropertyDescriptor) -> Result<String, Error> {
        property.validate()?;
        self.properties.get_or_try_insert_with(property, || {
            self.resolve(
                &property_key(property),
                &property.declaring_type,
                || self.annotation(property),
                || property.name.clone(),
            )
        })
    }

    /// Resolves a property given by exact, case-sensitive name.
    ///
    /// Fails with `MissingMember` when the host knows no such property.
    pub fn property_display_name_by_name(
        &self,
        declaring_type: &TypeDescriptor,
        property_name: &str,
    ) -> Result<String, Error> {
        declaring_type.validate()?;
        require_non_blank(property_name, "property_name")?;
        let property = self
            .host
            .find_property(declaring_type, property_name)
            .ok_or_else(|| Error::missing_member(&declaring_type.full_name, property_name))?;
        self.property_display_name(&property)
    }

    pub fn enum_display_name(&self, value: &EnumValueDescriptor) -> Result<String, Error> {
        value.validate()?;
        self.enums.get_or_try_insert_with(value, || {
            self.resolve(
                &enum_key(value),
                &value.enum_type,
                || self.annotation(value),
                || value.member.clone(),
            )
        })
    }

    /// Resolves the member of `enum_type` whose underlying value is `value`.
    ///
    /// Fails with `MissingMember` when the host knows no member with that value.
    pub fn enum_display_name_by_value(
        &self,
        enum_type: &TypeDescriptor,
        value: i64,
    ) -> Result<String, Error> {
        enum_type.validate()?;
        let member = self
            .host
            .find_enum_member(enum_type, value)
            .ok_or_else(|| Error::missing_member(&enum_type.full_name, value.to_string()))?;
        self.enum_display_name(&member)
    }

    pub fn cached_counts(&self) -> CacheCounts {
        CacheCounts {
            accessors: self.accessors.len(),
            types: self.types.len(),
            properties: self.properties.len(),
            enums: self.enums.len(),
        }
    }

    fn annotation<D>(&self, descriptor: &D) -> Option<String>
    where
        dyn HostModel: HasDisplayNameAnnotation<D>,
    {
        <dyn HostModel as HasDisplayNameAnnotation<D>>::try_get_annotation(
            self.host.as_ref(),
            descriptor,
        )
        .filter(|text| !text.trim().is_empty())
    }

    fn resolve(
        &self,
        key: &str,
        defining_type: &TypeDescriptor,
        annotation: impl FnOnce() -> Option<String>,
        identity: impl FnOnce() -> String,
    ) -> Result<String, Error> {
        let accessor = self.accessor_for(defining_type)?;
        if let Some(text) = get_string(key, &accessor)? {
            return Ok(text);
        }
        if let Some(text) = annotation() {
            tracing::debug!(key, "no resource, using display-name annotation");
            return Ok(text);
        }
        tracing::debug!(key, "no resource or annotation, using identifier");
        Ok(identity())
    }
}

impl fmt::Debug for DisplayNameResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayNameResolver")
            .field("cached", &self.cached_counts())
            .finish_non_exhaustive()
    }
}

impl DisplayName for TypeDescriptor {
    fn display_name(&self, resolver: &DisplayNameResolver) -> Result<String, Error> {
        resolver.type_display_name(self)
    }
}

impl DisplayName for PropertyDescriptor {
    fn display_name(&self, resolver: &DisplayNameResolver) -> Result<String, Error> {
        resolver.property_display_name(self)
    }
}

impl DisplayName for EnumValueDescriptor {
    fn display_name(&self, resolver: &DisplayNameResolver) -> Result<String, Error> {
        resolver.enum_display_name(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::ObjectModel, types::Satellite};

    fn circle() -> TypeDescriptor {
        TypeDescriptor::new("Acme.Cad", "Acme.Cad.Circle")
    }

    fn resolver(satellite: Satellite, model: ObjectModel) -> DisplayNameResolver {
        let satellite = Arc::new(satellite);
        DisplayNameResolver::new(model, move |_: &ModuleId| {
            satellite.clone() as Arc<dyn crate::traits::ResourceStore>
        })
    }

    #[test]
    fn test_resource_tier_beats_annotation() {
        let resolver = resolver(
            Satellite::new("Acme.Cad", "").with_entry("Class.Acme.Cad.Circle", "Kreis"),
            ObjectModel::builder().type_annotation(&circle(), "Round thing").build(),
        );
        assert_eq!(resolver.type_display_name(&circle()).unwrap(), "Kreis");
    }

    #[test]
    fn test_annotation_tier() {
        let resolver = resolver(
            Satellite::new("Acme.Cad", "").with_entry("Class.Acme.Cad.Circle", " "),
            ObjectModel::builder().type_annotation(&circle(), "Round thing").build(),
        );
        assert_eq!(resolver.type_display_name(&circle()).unwrap(), "Round thing");
    }

    #[test]
    fn test_identity_tier() {
        let resolver = resolver(Satellite::new("Acme.Cad", ""), ObjectModel::default());
        assert_eq!(resolver.type_display_name(&circle()).unwrap(), "Circle");
        let radius = PropertyDescriptor::new(circle(), "Radius");
        assert_eq!(resolver.property_display_name(&radius).unwrap(), "Radius");
    }

    #[test]
    fn test_caches_fill_once() {
        let resolver = resolver(Satellite::new("Acme.Cad", ""), ObjectModel::default());
        resolver.type_display_name(&circle()).unwrap();
        resolver.type_display_name(&circle()).unwrap();
        resolver
            .property_display_name(&PropertyDescriptor::new(circle(), "Radius"))
            .unwrap();
        assert_eq!(
            resolver.cached_counts(),
            CacheCounts {
                accessors: 1,
                types: 1,
                properties: 1,
                enums: 0,
            }
        );
    }

    #[test]
    fn test_invalid_descriptor_is_not_cached() {
        let resolver = resolver(Satellite::new("Acme.Cad", ""), ObjectModel::default());
        let blank = TypeDescriptor::new("Acme.Cad", "");
        assert!(matches!(
            resolver.type_display_name(&blank),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(resolver.cached_counts(), CacheCounts::default());
    }

    #[test]
    fn test_debug_reports_counts() {
        let resolver = resolver(Satellite::new("Acme.Cad", ""), ObjectModel::default());
        assert!(format!("{resolver:?}").contains("cached"));
    }
}
