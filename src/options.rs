//! Options controlling which satellites a resource store consults.

use unic_langid::LanguageIdentifier;

use crate::locale::{fallback_chain, host_default_locale};

/// Lookup behavior for [`crate::SatelliteCatalog`] and [`crate::SatelliteDirectory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOptions {
    /// Locale to resolve for. `None` uses the host default locale.
    pub locale: Option<LanguageIdentifier>,
    /// Whether the neutral satellite ends the fallback chain.
    pub include_neutral: bool,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            locale: None,
            include_neutral: true,
        }
    }
}

impl LookupOptions {
    /// Creates default lookup options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit locale.
    pub fn with_locale(mut self, locale: Option<LanguageIdentifier>) -> Self {
        self.locale = locale;
        self
    }

    /// Enables/disables the neutral satellite.
    pub fn with_neutral(mut self, include_neutral: bool) -> Self {
        self.include_neutral = include_neutral;
        self
    }

    /// The effective locale.
    pub fn resolved_locale(&self) -> LanguageIdentifier {
        self.locale.clone().unwrap_or_else(host_default_locale)
    }

    /// Satellite languages to consult, most specific first.
    pub fn chain(&self) -> Vec<String> {
        fallback_chain(&self.resolved_locale(), self.include_neutral)
    }
}
