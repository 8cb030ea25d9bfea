//! Seams between the resolver and its collaborators.
//!
//! The host supplies its object model through [`HostModel`] and its resources
//! through [`AccessorFactory`]; satellite files are read and written with
//! [`Parser`].

use std::sync::Arc;

use crate::{
    error::Error,
    resolver::DisplayNameResolver,
    types::{EnumValueDescriptor, ModuleId, PropertyDescriptor, TypeDescriptor},
};

pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path.
    fn read_from<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = std::fs::File::open(path).map_err(Error::Io)?;
        let reader = std::io::BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: std::io::Write>(&self, writer: W) -> Result<(), Error>;

    /// Write to file path.
    fn write_to<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Error> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        self.to_writer(writer)
    }
}

/// A per-module, locale-resolved string store.
///
/// `query` answers `None` when the key is unknown or no satellite exists for
/// the locale; a missing satellite is never an error.
pub trait ResourceStore: Send + Sync {
    fn query(&self, key: &str) -> Option<String>;
}

/// Creates the resource store backing a module's accessor.
pub trait AccessorFactory: Send + Sync {
    fn create(&self, module: &ModuleId) -> Arc<dyn ResourceStore>;
}

impl<F> AccessorFactory for F
where
    F: Fn(&ModuleId) -> Arc<dyn ResourceStore> + Send + Sync,
{
    fn create(&self, module: &ModuleId) -> Arc<dyn ResourceStore> {
        self(module)
    }
}

/// Display-name metadata attached by the host to a descriptor of kind `D`.
pub trait HasDisplayNameAnnotation<D> {
    fn try_get_annotation(&self, descriptor: &D) -> Option<String>;
}

/// The host's reflective object model, as far as name resolution needs it.
///
/// Enum members carry their own annotation kind: an annotation on the enum
/// type says nothing about its members.
pub trait HostModel:
    HasDisplayNameAnnotation<TypeDescriptor>
    + HasDisplayNameAnnotation<PropertyDescriptor>
    + HasDisplayNameAnnotation<EnumValueDescriptor>
    + Send
    + Sync
{
    /// Exact, case-sensitive property lookup on `declaring_type`.
    fn find_property(&self, declaring_type: &TypeDescriptor, name: &str)
    -> Option<PropertyDescriptor>;

    /// Member of `enum_type` with the given underlying value.
    fn find_enum_member(&self, enum_type: &TypeDescriptor, value: i64)
    -> Option<EnumValueDescriptor>;
}

/// Anything whose display name the resolver can produce.
pub trait DisplayName {
    fn display_name(&self, resolver: &DisplayNameResolver) -> Result<String, Error>;
}

/// A Rust type mirrored by a type of the host object model.
pub trait DescribedType {
    fn type_descriptor() -> TypeDescriptor;

    fn type_display_name(resolver: &DisplayNameResolver) -> Result<String, Error> {
        resolver.type_display_name(&Self::type_descriptor())
    }

    fn property_display_name(
        resolver: &DisplayNameResolver,
        property_name: &str,
    ) -> Result<String, Error> {
        resolver.property_display_name_by_name(&Self::type_descriptor(), property_name)
    }
}

/// A Rust enum mirrored by an enumeration of the host object model.
///
/// ```rust
/// use dispname::{DescribedEnum, DescribedType, TypeDescriptor};
///
/// #[derive(Clone, Copy)]
/// enum LineWeight {
///     Thin = 1,
///     Heavy = 2,
/// }
///
/// impl DescribedType for LineWeight {
///     fn type_descriptor() -> TypeDescriptor {
///         TypeDescriptor::new("Acme.Cad", "Acme.Cad.LineWeight")
///     }
/// }
///
/// impl DescribedEnum for LineWeight {
///     fn member_name(&self) -> &'static str {
///         match self {
///             LineWeight::Thin => "Thin",
///             LineWeight::Heavy => "Heavy",
///         }
///     }
///
///     fn member_value(&self) -> i64 {
///         *self as i64
///     }
/// }
///
/// let value = LineWeight::Heavy.enum_value();
/// assert_eq!(value.member, "Heavy");
/// assert_eq!(value.value, 2);
/// ```
pub trait DescribedEnum: DescribedType {
    fn member_name(&self) -> &'static str;

    fn member_value(&self) -> i64;

    fn enum_value(&self) -> EnumValueDescriptor {
        EnumValueDescriptor::new(
            Self::type_descriptor(),
            self.member_name(),
            self.member_value(),
        )
    }

    fn display_name(&self, resolver: &DisplayNameResolver) -> Result<String, Error> {
        resolver.enum_display_name(&self.enum_value())
    }
}
