//! Internationalization (i18n) module.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales
//! - `locale`: Validated `Locale` type backed by the registry
//! - `strings`: Localized page strings and key lookup
//! - `negotiate`: Per-request locale context (subpath, query, cookie, header)
//! - `selector`: Language picker options and selection handling
//!
//! # Example
//!
//! ```rust,ignore
//! use dinosaur_encyclopedia::i18n::{Locale, LocaleStrings};
//!
//! let german = Locale::from_code("de")?;
//! let strings = LocaleStrings::for_locale(german);
//! assert_eq!(strings.t("dinosaur:weight"), "Gewicht");
//! ```

mod locale;
mod negotiate;
mod registry;
mod selector;
mod strings;

pub use locale::Locale;
pub use negotiate::{
    cookie_value, split_locale_subpath, LocaleNegotiator, LocaleSource, RequestLocale,
};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use selector::{LanguageOption, LanguageSelector, Selection};
pub use strings::{interpolate, LocaleStrings};
