//! Language selector.
//!
//! Lists the supported locales for the picker and turns a pick into a new
//! preference plus the localized address of the page the user was on.

use axum::http::HeaderValue;
use tracing::warn;

use crate::i18n::{split_locale_subpath, Locale};
use crate::routes::RouteTable;

/// One entry of the language picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Result of picking a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The new preference (the default locale if the pick was unsupported)
    pub locale: Locale,
    /// Where to navigate next
    pub location: String,
}

#[derive(Debug, Clone, Copy)]
pub struct LanguageSelector<'a> {
    table: &'a RouteTable,
    default_locale: Locale,
}

impl<'a> LanguageSelector<'a> {
    pub fn new(table: &'a RouteTable, default_locale: Locale) -> Self {
        Self {
            table,
            default_locale,
        }
    }

    /// Picker entries in registry order, with `current` marked selected.
    pub fn options(&self, current: Locale) -> Vec<LanguageOption> {
        Locale::all()
            .into_iter()
            .map(|locale| LanguageOption {
                code: locale.code(),
                label: locale.native_name(),
                selected: locale == current,
            })
            .collect()
    }

    /// Apply a pick of `code` while the user is on `current_path`.
    ///
    /// The page keeps its identity across languages: a dinosaur page leads to
    /// the same dinosaur in the new locale. Paths that are not routes keep
    /// their remainder under the new locale subpath. A target that cannot be
    /// sent as a `Location` header falls back to the locale's home.
    pub fn select(&self, code: &str, current_path: &str) -> Selection {
        let locale = Locale::resolve(code, self.default_locale);
        let home = format!("/{}", locale);

        if !current_path.starts_with('/') {
            return Selection {
                locale,
                location: home,
            };
        }

        let (_, rest) = split_locale_subpath(current_path);
        if rest == "/" {
            return Selection {
                locale,
                location: home,
            };
        }

        let location = match self.table.resolve(rest) {
            Some((descriptor, params)) => {
                match self.table.build_path(descriptor.page, locale.code(), &params) {
                    Ok(path) => format!("{}{}", home, path),
                    Err(e) => {
                        warn!("Cannot localize {} for {}: {}", rest, locale, e);
                        home.clone()
                    }
                }
            }
            None => format!("{}{}", home, rest),
        };

        if HeaderValue::from_str(&location).is_err() {
            warn!("Discarding unusable target {:?} for {}", location, locale);
            return Selection {
                locale,
                location: home,
            };
        }

        Selection { locale, location }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::builtin().expect("builtin table")
    }

    // ==================== options Tests ====================

    #[test]
    fn test_options_lists_all_locales() {
        let table = table();
        let options = LanguageSelector::new(&table, Locale::ENGLISH).options(Locale::FRENCH);

        let codes: Vec<_> = options.iter().map(|o| o.code).collect();
        assert_eq!(codes, vec!["en", "de", "fr", "it"]);

        let selected: Vec<_> = options.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].code, "fr");
        assert_eq!(selected[0].label, "Français");
    }

    // ==================== select Tests ====================

    #[test]
    fn test_select_localizes_current_page() {
        let table = table();
        let selection = LanguageSelector::new(&table, Locale::ENGLISH)
            .select("de", "/en/dinosaur/Tyrannosaurus");
        assert_eq!(selection.locale, Locale::GERMAN);
        assert_eq!(selection.location, "/de/dinosaurier/Tyrannosaurus");
    }

    #[test]
    fn test_select_without_subpath() {
        let table = table();
        let selection =
            LanguageSelector::new(&table, Locale::ENGLISH).select("it", "/dinosaure/Brachiosaurus");
        assert_eq!(selection.location, "/it/dinosauro/Brachiosaurus");
    }

    #[test]
    fn test_select_from_home() {
        let table = table();
        let selector = LanguageSelector::new(&table, Locale::ENGLISH);
        assert_eq!(selector.select("fr", "/").location, "/fr");
        assert_eq!(selector.select("fr", "/de").location, "/fr");
        assert_eq!(selector.select("fr", "").location, "/fr");
    }

    #[test]
    fn test_select_unknown_path_keeps_remainder() {
        let table = table();
        let selection =
            LanguageSelector::new(&table, Locale::ENGLISH).select("de", "/it/about");
        assert_eq!(selection.location, "/de/about");
    }

    #[test]
    fn test_select_unsupported_code_uses_default() {
        let table = table();
        let selection = LanguageSelector::new(&table, Locale::ITALIAN)
            .select("es", "/dinosaur/Tyrannosaurus");
        assert_eq!(selection.locale, Locale::ITALIAN);
        assert_eq!(selection.location, "/it/dinosauro/Tyrannosaurus");
    }

    #[test]
    fn test_select_never_leaves_the_site() {
        let table = table();
        let selection =
            LanguageSelector::new(&table, Locale::ENGLISH).select("de", "//evil.example");
        assert!(selection.location.starts_with("/de/"));
    }

    #[test]
    fn test_select_control_characters_go_home() {
        let table = table();
        let selector = LanguageSelector::new(&table, Locale::ENGLISH);
        assert_eq!(selector.select("de", "/about\nx").location, "/de");
        assert_eq!(selector.select("fr", "/it/a\rb").location, "/fr");
    }
}
