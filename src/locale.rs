//! Locale selection and parent-locale fallback.

use unic_langid::LanguageIdentifier;

use crate::error::Error;

/// Environment variables consulted for the host default locale, in order.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

const DEFAULT_LOCALE: &str = "en";

/// Parses a BCP-47 style tag such as `de-DE`.
pub fn parse_locale(tag: &str) -> Result<LanguageIdentifier, Error> {
    tag.trim()
        .parse()
        .map_err(|_| Error::InvalidLocale(tag.to_string()))
}

/// Normalises a POSIX locale value (`de_DE.UTF-8@euro`) into a language identifier.
///
/// `C` and `POSIX` stand for the default locale. Returns `None` for values
/// that do not name a locale.
pub fn locale_from_posix(value: &str) -> Option<LanguageIdentifier> {
    let value = value.trim();
    let tag = value
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('_', "-");
    match tag.as_str() {
        "" => None,
        "C" | "POSIX" => Some(default_locale()),
        _ => tag.parse().ok(),
    }
}

/// The locale the host process runs in.
pub fn host_default_locale() -> LanguageIdentifier {
    LOCALE_ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find_map(|value| locale_from_posix(&value))
        .unwrap_or_else(|| {
            tracing::trace!("no locale in environment, using `{DEFAULT_LOCALE}`");
            default_locale()
        })
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

/// Locales to try for `locale`, most specific first.
///
/// Variants, region and script are dropped one at a time; the neutral
/// satellite is represented by an empty tag.
pub fn fallback_chain(locale: &LanguageIdentifier, include_neutral: bool) -> Vec<String> {
    let mut chain: Vec<String> = Vec::new();
    let mut push = |tag: String| {
        if !chain.contains(&tag) {
            chain.push(tag);
        }
    };

    let mut current = locale.clone();
    push(current.to_string());
    if current.variants().len() > 0 {
        current.clear_variants();
        push(current.to_string());
    }
    if current.region.take().is_some() {
        push(current.to_string());
    }
    if current.script.take().is_some() {
        push(current.to_string());
    }
    if include_neutral {
        push(String::new());
    }
    chain
}
