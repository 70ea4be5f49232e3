//! Locale type: validated locale representation.
//!
//! A `Locale` can only be built from a code that the registry knows and has
//! enabled, so holding one is proof that the site can serve it.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};
use serde::Serialize;
use std::fmt;

/// A validated locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { code: "en" };
    pub const GERMAN: Locale = Locale { code: "de" };
    pub const FRENCH: Locale = Locale { code: "fr" };
    pub const ITALIAN: Locale = Locale { code: "it" };

    /// Create a Locale from a language code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is registered and enabled
    /// * `Err` if the code is unknown or the locale is disabled
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale { code: config.code }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Resolve a possibly unsupported code, falling back instead of failing.
    ///
    /// Codes are compared case-insensitively on their primary subtag, so
    /// `"DE"` and `"de-CH"` both resolve to German.
    pub fn resolve(code: &str, fallback: Locale) -> Locale {
        let primary = code.split(['-', '_']).next().unwrap_or(code).trim();
        Locale::from_code(&primary.to_ascii_lowercase()).unwrap_or(fallback)
    }

    /// The registry's default locale.
    pub fn default_locale() -> Locale {
        Locale {
            code: LocaleRegistry::get().default_locale().code,
        }
    }

    /// All enabled locales, in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry, which cannot happen for a
    /// Locale built through `from_code` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// English name of the language (e.g., "German").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (e.g., "Deutsch").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
