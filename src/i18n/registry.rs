//! Locale registry: Single source of truth for all supported locales.
//!
//! The registry is built once on first access through a `OnceLock` and is
//! immutable thereafter, so it can be shared freely between requests.

use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code (e.g., "en", "de")
    pub code: &'static str,

    /// English name of the language (e.g., "German")
    pub name: &'static str,

    /// Native name of the language (e.g., "Deutsch")
    pub native_name: &'static str,

    /// Whether this is the default locale (exactly one must be true)
    pub is_default: bool,

    /// Whether this locale is served
    pub enabled: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales, in registry order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Codes of all enabled locales, in registry order.
    pub fn enabled_codes(&self) -> Vec<&'static str> {
        self.locales
            .iter()
            .filter(|locale| locale.enabled)
            .map(|locale| locale.code)
            .collect()
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if zero or several locales are flagged as default. This is a
    /// configuration error in `default_locales`.
    pub fn default_locale(&self) -> &LocaleConfig {
        single_default(&self.locales)
    }

    /// Check if a locale code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

fn single_default(locales: &[LocaleConfig]) -> &LocaleConfig {
    let defaults: Vec<_> = locales.iter().filter(|locale| locale.is_default).collect();

    match defaults.len() {
        0 => panic!("No default locale found in registry"),
        1 => defaults[0],
        _ => panic!("Multiple default locales found in registry"),
    }
}

/// Locales served by the site. English is the default.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
            enabled: true,
        },
        LocaleConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            is_default: false,
            enabled: true,
        },
        LocaleConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_default: false,
            enabled: true,
        },
        LocaleConfig {
            code: "it",
            name: "Italian",
            native_name: "Italiano",
            is_default: false,
            enabled: true,
        },
    ]
}
