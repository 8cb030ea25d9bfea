//! Satellite-backed resource stores.
//!
//! A module's strings live in one satellite per locale. A store built for a
//! module holds the satellites of its locale fallback chain, most specific
//! first, and answers a key from the first satellite that defines it.
//! Locales without a satellite are skipped; that is never an error.

use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    error::Error,
    options::LookupOptions,
    traits::{AccessorFactory, Parser, ResourceStore},
    types::{ModuleId, Satellite},
};

const SATELLITE_EXTENSION: &str = "json";

impl ResourceStore for Satellite {
    fn query(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }
}

/// The satellites of one module along its locale fallback chain.
#[derive(Debug, Clone, Default)]
pub struct SatelliteStore {
    satellites: Vec<Satellite>,
}

impl SatelliteStore {
    pub fn new(satellites: Vec<Satellite>) -> Self {
        Self { satellites }
    }

    /// Languages of the loaded satellites, in lookup order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.satellites
            .iter()
            .map(|satellite| satellite.metadata.language.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.satellites.is_empty()
    }
}

impl ResourceStore for SatelliteStore {
    fn query(&self, key: &str) -> Option<String> {
        self.satellites
            .iter()
            .find_map(|satellite| satellite.get(key))
            .map(str::to_string)
    }
}

/// Canonical form of a satellite language tag; empty for neutral.
fn canonical_language(language: &str) -> String {
    let language = language.trim();
    if language.is_empty() {
        return String::new();
    }
    crate::locale::parse_locale(language)
        .map(|locale| locale.to_string())
        .unwrap_or_else(|_| language.to_string())
}

/// In-memory satellites for any number of modules.
///
/// ```rust
/// use dispname::{LookupOptions, ModuleId, Satellite, SatelliteCatalog, locale::parse_locale};
/// use dispname::traits::{AccessorFactory, ResourceStore};
///
/// let catalog = SatelliteCatalog::new(
///     LookupOptions::new().with_locale(Some(parse_locale("de-AT")?)),
/// )
/// .with_satellite(Satellite::new("Acme.Cad", "de").with_entry("Class.Acme.Cad.Circle", "Kreis"))
/// .with_satellite(Satellite::new("Acme.Cad", "").with_entry("Class.Acme.Cad.Circle", "Circle"));
///
/// let store = catalog.create(&ModuleId::from("Acme.Cad"));
/// assert_eq!(store.query("Class.Acme.Cad.Circle").as_deref(), Some("Kreis"));
/// # Ok::<(), dispname::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SatelliteCatalog {
    options: LookupOptions,
    satellites: HashMap<ModuleId, HashMap<String, Satellite>>,
}

impl SatelliteCatalog {
    pub fn new(options: LookupOptions) -> Self {
        Self {
            options,
            satellites: HashMap::new(),
        }
    }

    /// Adds a satellite. Entries of a satellite already registered for the same
    /// module and language are merged, later values winning.
    pub fn add_satellite(&mut self, satellite: Satellite) {
        let language = canonical_language(&satellite.metadata.language);
        let by_language = self
            .satellites
            .entry(satellite.metadata.module.clone())
            .or_default();
        match by_language.get_mut(&language) {
            Some(existing) => existing.entries.extend(satellite.entries),
            None => {
                by_language.insert(language, satellite);
            }
        }
    }

    pub fn with_satellite(mut self, satellite: Satellite) -> Self {
        self.add_satellite(satellite);
        self
    }

    /// Reads a satellite file and adds it.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let satellite = Satellite::read_from(path)?;
        self.add_satellite(satellite);
        Ok(())
    }

    /// Builds the store for `module` along the configured fallback chain.
    pub fn store_for(&self, module: &ModuleId) -> SatelliteStore {
        let Some(by_language) = self.satellites.get(module) else {
            tracing::trace!(%module, "no satellites registered");
            return SatelliteStore::default();
        };
        let satellites = self
            .options
            .chain()
            .iter()
            .filter_map(|language| by_language.get(language).cloned())
            .collect();
        SatelliteStore::new(satellites)
    }
}

impl AccessorFactory for SatelliteCatalog {
    fn create(&self, module: &ModuleId) -> Arc<dyn ResourceStore> {
        Arc::new(self.store_for(module))
    }
}

/// Satellites read from disk when a module's store is created.
///
/// Layout: `<root>/<language>/<module>.json` for each locale and
/// `<root>/<module>.json` for the neutral satellite.
#[derive(Debug, Clone)]
pub struct SatelliteDirectory {
    root: PathBuf,
    options: LookupOptions,
}

impl SatelliteDirectory {
    pub fn new<P: AsRef<Path>>(root: P, options: LookupOptions) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            options,
        }
    }

    /// Path of the satellite for `module` in `language` (empty for neutral).
    pub fn satellite_path(&self, module: &ModuleId, language: &str) -> PathBuf {
        let file_name = format!("{}.{SATELLITE_EXTENSION}", module.as_str());
        if language.is_empty() {
            self.root.join(file_name)
        } else {
            self.root.join(language).join(file_name)
        }
    }

    /// Loads whatever satellites of the chain exist for `module`.
    pub fn store_for(&self, module: &ModuleId) -> SatelliteStore {
        let satellites = self
            .options
            .chain()
            .iter()
            .filter_map(|language| self.load(module, language))
            .collect();
        SatelliteStore::new(satellites)
    }

    fn load(&self, module: &ModuleId, language: &str) -> Option<Satellite> {
        let path = self.satellite_path(module, language);
        match Satellite::read_from(&path) {
            Ok(satellite) if satellite.metadata.module == *module => Some(satellite),
            Ok(satellite) => {
                tracing::warn!(
                    path = %path.display(),
                    expected = %module,
                    found = %satellite.metadata.module,
                    "satellite belongs to another module, skipped"
                );
                None
            }
            Err(Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                tracing::trace!(path = %path.display(), "no satellite");
                None
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "unreadable satellite skipped"
                );
                None
            }
        }
    }
}

impl AccessorFactory for SatelliteDirectory {
    fn create(&self, module: &ModuleId) -> Arc<dyn ResourceStore> {
        Arc::new(self.store_for(module))
    }
}
