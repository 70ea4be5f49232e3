//! Locale redirector.
//!
//! Decides whether a request path already belongs to the preferred locale or
//! should be redirected to the same page in that locale. Errors while
//! computing the target never escape: the request is served as-is instead.

use tracing::{debug, warn};

use crate::routes::RouteTable;

/// Outcome of [`Redirector::decide`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
    /// Serve the request unchanged.
    PassThrough,
    /// Answer with a permanent redirect to `location`.
    Redirect { location: String },
}

impl RedirectDecision {
    pub fn location(&self) -> Option<&str> {
        match self {
            RedirectDecision::PassThrough => None,
            RedirectDecision::Redirect { location } => Some(location),
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, RedirectDecision::Redirect { .. })
    }
}

/// Enforces that served paths match the preferred locale.
#[derive(Debug, Clone, Copy)]
pub struct Redirector<'a> {
    table: &'a RouteTable,
    default_locale: &'a str,
}

impl<'a> Redirector<'a> {
    pub fn new(table: &'a RouteTable, default_locale: &'a str) -> Self {
        Self {
            table,
            default_locale,
        }
    }

    /// Decide how to answer `raw_path` for a user preferring `preferred`.
    ///
    /// `raw_path` is the path without its locale subpath. The redirect target
    /// carries the preferred locale as subpath: `/{locale}{localized path}`.
    pub fn decide(&self, raw_path: &str, preferred: &str) -> RedirectDecision {
        if is_home(raw_path) {
            return RedirectDecision::PassThrough;
        }

        let preferred = if self.table.contains_locale(preferred) {
            preferred
        } else {
            debug!(
                "Preferred locale '{}' is not supported, using '{}'",
                preferred, self.default_locale
            );
            self.default_locale
        };

        let Some(descriptor) = self.table.match_path(raw_path) else {
            return RedirectDecision::PassThrough;
        };

        if descriptor.locale == preferred {
            return RedirectDecision::PassThrough;
        }

        let params = match self.table.extract_params(descriptor, raw_path) {
            Ok(params) => params,
            Err(e) => {
                warn!("Skipping locale redirect for {}: {}", raw_path, e);
                return RedirectDecision::PassThrough;
            }
        };

        match self.table.build_path(descriptor.page, preferred, &params) {
            Ok(path) => {
                let location = format!("/{}{}", preferred, path);
                debug!(
                    "Redirecting {} ({}) to {}",
                    raw_path, descriptor.locale, location
                );
                RedirectDecision::Redirect { location }
            }
            Err(e) => {
                warn!("Skipping locale redirect for {}: {}", raw_path, e);
                RedirectDecision::PassThrough
            }
        }
    }
}

fn is_home(raw_path: &str) -> bool {
    raw_path.is_empty() || raw_path == "/"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::RouteDescriptor;

    fn table() -> RouteTable {
        RouteTable::builtin().expect("builtin table")
    }

    /// Remove the `/{locale}` prefix a redirect target starts with.
    fn strip_subpath<'p>(location: &'p str, locale: &str) -> &'p str {
        location
            .strip_prefix('/')
            .and_then(|rest| rest.strip_prefix(locale))
            .expect("location starts with the locale")
    }

    // ==================== Scenarios ====================

    #[test]
    fn test_redirects_english_path_to_german() {
        let table = table();
        let decision = Redirector::new(&table, "en").decide("/dinosaur/Tyrannosaurus", "de");
        assert_eq!(
            decision,
            RedirectDecision::Redirect {
                location: "/de/dinosaurier/Tyrannosaurus".to_string()
            }
        );
    }

    #[test]
    fn test_matching_locale_passes_through() {
        let table = table();
        let decision = Redirector::new(&table, "en").decide("/dinosaurier/Tyrannosaurus", "de");
        assert_eq!(decision, RedirectDecision::PassThrough);
    }

    #[test]
    fn test_unknown_path_passes_through() {
        let table = table();
        let redirector = Redirector::new(&table, "en");
        for locale in ["en", "de", "fr", "it", "es"] {
            assert_eq!(
                redirector.decide("/unknown/path", locale),
                RedirectDecision::PassThrough
            );
        }
    }

    #[test]
    fn test_home_never_redirects() {
        let table = table();
        let redirector = Redirector::new(&table, "en");
        for locale in ["en", "de", "fr", "it", "es", ""] {
            assert!(!redirector.decide("/", locale).is_redirect());
            assert!(!redirector.decide("", locale).is_redirect());
        }
    }

    #[test]
    fn test_unsupported_preference_uses_default() {
        let table = table();
        let decision = Redirector::new(&table, "en").decide("/dinosauro/Brachiosaurus", "es");
        assert_eq!(decision.location(), Some("/en/dinosaur/Brachiosaurus"));
    }

    #[test]
    fn test_unsupported_preference_with_default_locale_path_passes() {
        let table = table();
        let decision = Redirector::new(&table, "en").decide("/dinosaur/Brachiosaurus", "xx");
        assert_eq!(decision, RedirectDecision::PassThrough);
    }

    #[test]
    fn test_failed_extraction_passes_through() {
        // A static-only pattern for one locale and a parameterized one for the
        // other: redirecting from the static page cannot bind `:name`.
        let table = RouteTable::new(
            vec![
                RouteDescriptor {
                    page: "gallery",
                    locale: "en",
                    pattern: "/gallery",
                    name: "gallery",
                },
                RouteDescriptor {
                    page: "gallery",
                    locale: "de",
                    pattern: "/galerie/:name",
                    name: "galerie",
                },
            ],
            &["en", "de"],
        )
        .unwrap();

        let decision = Redirector::new(&table, "en").decide("/gallery", "de");
        assert_eq!(decision, RedirectDecision::PassThrough);
    }

    // ==================== Idempotence ====================

    #[test]
    fn test_redirect_target_does_not_redirect_again() {
        let table = table();
        let redirector = Redirector::new(&table, "en");
        let sources = [
            "/dinosaur/Tyrannosaurus",
            "/dinosaurier/Tyrannosaurus",
            "/dinosaure/Brachiosaurus",
            "/dinosauro/Brachiosaurus",
        ];

        for source in sources {
            for preferred in table.locales() {
                let first = redirector.decide(source, preferred);
                if let Some(location) = first.location() {
                    let target = strip_subpath(location, preferred);
                    assert_eq!(
                        redirector.decide(target, preferred),
                        RedirectDecision::PassThrough,
                        "{} -> {} redirected twice",
                        source,
                        location
                    );
                }
            }
        }
    }

    #[test]
    fn test_decision_accessors() {
        let redirect = RedirectDecision::Redirect {
            location: "/de".to_string(),
        };
        assert!(redirect.is_redirect());
        assert_eq!(redirect.location(), Some("/de"));
        assert_eq!(RedirectDecision::PassThrough.location(), None);
    }
}
