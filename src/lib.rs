#![forbid(unsafe_code)]
//! Localized display names for the object model of a host application.
//!
//! Given a type, property or enum member of the host's object model, the
//! resolver produces a human-readable name by consulting, in order:
//!
//! - the defining module's resource satellites, under the keys
//!   `Class.<TypeFullName>`, `Property.<TypeFullName>.<PropertyName>` and
//!   `Enum.<EnumFullName>.<MemberName>`;
//! - the display-name annotation attached to the descriptor;
//! - the descriptor's own bare name.
//!
//! Well-formed calls always produce a name. Malformed calls (blank names, a
//! property name the type does not declare) fail with [`Error`].
//!
//! # Quick Start
//!
//! ```rust
//! use dispname::{DisplayName, DisplayNameResolver, LookupOptions, ObjectModel};
//! use dispname::{Satellite, SatelliteCatalog, TypeDescriptor, locale::parse_locale};
//!
//! let weight = TypeDescriptor::new("Acme.Cad", "Acme.Cad.LineWeight");
//! let model = ObjectModel::builder()
//!     .annotated_enum_member(&weight, "ByLayer", -1, "By layer")
//!     .enum_member(&weight, "Thin", 13)
//!     .build();
//! let satellites = SatelliteCatalog::new(
//!     LookupOptions::new().with_locale(Some(parse_locale("fr")?)),
//! )
//! .with_satellite(
//!     Satellite::new("Acme.Cad", "fr").with_entry("Enum.Acme.Cad.LineWeight.Thin", "Fin"),
//! );
//!
//! let resolver = DisplayNameResolver::new(model, satellites);
//! assert_eq!(resolver.enum_display_name_by_value(&weight, 13)?, "Fin");
//! assert_eq!(resolver.enum_display_name_by_value(&weight, -1)?, "By layer");
//! assert_eq!(weight.display_name(&resolver)?, "LineWeight");
//! # Ok::<(), dispname::Error>(())
//! ```

pub mod accessor;
pub mod error;
pub mod keys;
pub mod locale;
pub mod model;
pub mod options;
pub mod resolver;
pub mod satellite;
pub mod text;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    accessor::{ResourceAccessor, get_localized_name, get_string, try_lookup},
    error::Error,
    model::{ObjectModel, ObjectModelBuilder},
    options::LookupOptions,
    resolver::{CacheCounts, DisplayNameResolver},
    satellite::{SatelliteCatalog, SatelliteDirectory, SatelliteStore},
    text::{format_identifier, split_pascal_case},
    traits::{
        AccessorFactory, DescribedEnum, DescribedType, DisplayName, HasDisplayNameAnnotation,
        HostModel, Parser, ResourceStore,
    },
    types::{EnumValueDescriptor, ModuleId, PropertyDescriptor, Satellite, TypeDescriptor},
};
