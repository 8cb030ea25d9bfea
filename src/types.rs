//! Descriptor value types standing in for a host's reflective handles, and the
//! satellite model the bundled resource stores are loaded from.

use std::{collections::BTreeMap, fmt::Display};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, require_non_blank},
    traits::Parser,
};

/// Name of the module (assembly) that defines a type.
///
/// Resource accessors are created and cached per module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ModuleId(pub String);

impl ModuleId {
    pub fn new(name: impl Into<String>) -> Self {
        ModuleId(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ModuleId {
    fn from(name: &str) -> Self {
        ModuleId(name.to_string())
    }
}

impl From<String> for ModuleId {
    fn from(name: String) -> Self {
        ModuleId(name)
    }
}

/// Identifies a class/type of the host object model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct TypeDescriptor {
    /// Defining module.
    pub module: ModuleId,

    /// Fully-qualified name, e.g. `Acme.Cad.Entities.Circle`.
    pub full_name: String,
}

impl TypeDescriptor {
    pub fn new(module: impl Into<ModuleId>, full_name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            full_name: full_name.into(),
        }
    }

    /// Short name: the last segment of the full name.
    ///
    /// Both `.` (namespace) and `+` (nested type) separate segments. Generic
    /// arguments (everything from the first `[`) and trailing separators are
    /// ignored; a name without any segment left is returned whole.
    pub fn name(&self) -> &str {
        let base = self
            .full_name
            .split('[')
            .next()
            .unwrap_or_default()
            .trim_end_matches(['.', '+']);
        match base.rsplit(['.', '+']).next() {
            Some(segment) if !segment.trim().is_empty() => segment,
            _ => &self.full_name,
        }
    }

    /// Fails with `InvalidArgument` when this descriptor does not name a type.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        require_non_blank(self.module.as_str(), "type.module")?;
        require_non_blank(&self.full_name, "type.full_name")
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_name)
    }
}

/// Identifies a named property on a declaring type.
///
/// Property names are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct PropertyDescriptor {
    pub declaring_type: TypeDescriptor,
    pub name: String,
}

impl PropertyDescriptor {
    pub fn new(declaring_type: TypeDescriptor, name: impl Into<String>) -> Self {
        Self {
            declaring_type,
            name: name.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        self.declaring_type.validate()?;
        require_non_blank(&self.name, "property.name")
    }
}

impl Display for PropertyDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.declaring_type.full_name, self.name)
    }
}

/// Identifies one member of an enumeration type.
///
/// The enum type is part of the identity, so members of different enums that
/// share an underlying value never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct EnumValueDescriptor {
    pub enum_type: TypeDescriptor,

    /// Declared member name.
    pub member: String,

    /// Underlying integral value.
    pub value: i64,
}

impl EnumValueDescriptor {
    pub fn new(enum_type: TypeDescriptor, member: impl Into<String>, value: i64) -> Self {
        Self {
            enum_type,
            member: member.into(),
            value,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        self.enum_type.validate()?;
        require_non_blank(&self.member, "enum_value.member")
    }
}

impl Display for EnumValueDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.enum_type.full_name, self.member)
    }
}

/// One locale-specific resource satellite of a module.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Satellite {
    pub metadata: SatelliteMetadata,

    /// Resource key to localized string.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

/// Header of a satellite: which module it belongs to and which locale it serves.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SatelliteMetadata {
    /// Module the satellite supplies strings for.
    pub module: ModuleId,

    /// Locale tag (e.g. "de", "de-DE"). Empty for the neutral satellite.
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(default)]
    pub language: String,
}

impl Satellite {
    pub fn new(module: impl Into<ModuleId>, language: impl Into<String>) -> Self {
        Self {
            metadata: SatelliteMetadata {
                module: module.into(),
                language: language.into(),
            },
            entries: BTreeMap::new(),
        }
    }

    /// Adds an entry, returning `self` for chaining.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn is_neutral(&self) -> bool {
        self.metadata.language.trim().is_empty()
    }
}

impl Parser for Satellite {
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(Error::Parse)
    }

    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut writer, self).map_err(Error::Parse)
    }
}
