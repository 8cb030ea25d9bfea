//! Resource accessors and the string lookup primitives built on them.

use std::{fmt, sync::Arc};

use crate::{
    error::{Error, require_non_blank},
    traits::ResourceStore,
    types::ModuleId,
};

/// Handle on one module's resource store.
///
/// Clones share the underlying store.
#[derive(Clone)]
pub struct ResourceAccessor {
    module: ModuleId,
    store: Arc<dyn ResourceStore>,
}

impl ResourceAccessor {
    pub fn new(module: ModuleId, store: Arc<dyn ResourceStore>) -> Self {
        Self { module, store }
    }

    pub fn module(&self) -> &ModuleId {
        &self.module
    }

    /// Raw store answer for `key`, without normalisation.
    pub fn query(&self, key: &str) -> Option<String> {
        self.store.query(key)
    }
}

impl fmt::Debug for ResourceAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceAccessor")
            .field("module", &self.module)
            .finish_non_exhaustive()
    }
}

/// Looks up `key`, treating empty and whitespace-only answers as absent.
pub fn get_string(key: &str, accessor: &ResourceAccessor) -> Result<Option<String>, Error> {
    require_non_blank(key, "key")?;
    Ok(accessor
        .query(key)
        .filter(|value| !value.trim().is_empty()))
}

/// Looks up `key`, returning the key itself when no string is found.
pub fn get_localized_name(key: &str, accessor: &ResourceAccessor) -> Result<String, Error> {
    Ok(get_string(key, accessor)?.unwrap_or_else(|| key.to_string()))
}

/// Looks up `key` as a `(found, value)` pair; `value` is empty when not found.
pub fn try_lookup(key: &str, accessor: &ResourceAccessor) -> Result<(bool, String), Error> {
    Ok(match get_string(key, accessor)? {
        Some(value) => (true, value),
        None => (false, String::new()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Satellite;

    fn accessor() -> ResourceAccessor {
        let satellite = Satellite::new("Acme.Cad", "")
            .with_entry("Class.Acme.Cad.Circle", "Circle (2D)")
            .with_entry("Class.Acme.Cad.Blank", "   ")
            .with_entry("Class.Acme.Cad.Empty", "");
        ResourceAccessor::new(ModuleId::from("Acme.Cad"), Arc::new(satellite))
    }

    #[test]
    fn test_get_string_found() {
        assert_eq!(
            get_string("Class.Acme.Cad.Circle", &accessor()).unwrap(),
            Some("Circle (2D)".to_string())
        );
    }

    #[test]
    fn test_get_string_blank_is_absent() {
        let accessor = accessor();
        assert_eq!(get_string("Class.Acme.Cad.Blank", &accessor).unwrap(), None);
        assert_eq!(get_string("Class.Acme.Cad.Empty", &accessor).unwrap(), None);
        assert_eq!(get_string("Class.Acme.Cad.Nope", &accessor).unwrap(), None);
    }

    #[test]
    fn test_blank_key_is_invalid() {
        for key in ["", "  "] {
            assert!(matches!(
                get_string(key, &accessor()),
                Err(Error::InvalidArgument(_))
            ));
            assert!(matches!(
                try_lookup(key, &accessor()),
                Err(Error::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_get_localized_name_falls_back_to_key() {
        let accessor = accessor();
        assert_eq!(
            get_localized_name("Class.Acme.Cad.Circle", &accessor).unwrap(),
            "Circle (2D)"
        );
        assert_eq!(
            get_localized_name("Class.Acme.Cad.Blank", &accessor).unwrap(),
            "Class.Acme.Cad.Blank"
        );
    }

    #[test]
    fn test_try_lookup() {
        let accessor = accessor();
        assert_eq!(
            try_lookup("Class.Acme.Cad.Circle", &accessor).unwrap(),
            (true, "Circle (2D)".to_string())
        );
        assert_eq!(
            try_lookup("Class.Acme.Cad.Blank", &accessor).unwrap(),
            (false, String::new())
        );
    }

    #[test]
    fn test_debug_names_module() {
        assert!(format!("{:?}", accessor()).contains("Acme.Cad"));
    }
}
