//! Route table: every localized page pattern, validated once at startup.
//!
//! Each logical page must have exactly one descriptor per supported locale.
//! A gap is a configuration error and makes [`RouteTable::new`] fail, so the
//! resolver never has to discover a missing translation at request time.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;

use crate::i18n::LocaleRegistry;
use crate::routes::TableError;

/// Path parameters bound to placeholder names.
pub type Params = BTreeMap<String, String>;

/// Static record mapping a logical page and locale to a URL pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Logical page identifier (e.g. "dinosaur")
    pub page: &'static str,

    /// Locale code this pattern belongs to
    pub locale: &'static str,

    /// Path template with `:name` placeholders (e.g. "/dinosaurier/:name")
    pub pattern: &'static str,

    /// Unique key of this (page, locale) combination
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Segment {
    Static(&'static str),
    Param(&'static str),
}

/// The validated, immutable route table.
#[derive(Debug)]
pub struct RouteTable {
    pub(super) routes: Vec<RouteDescriptor>,
    /// Parsed patterns, parallel to `routes`
    pub(super) segments: Vec<Vec<Segment>>,
    /// page -> locale -> position in `routes`
    pub(super) index: HashMap<&'static str, HashMap<&'static str, usize>>,
    pub(super) locales: Vec<&'static str>,
}

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl RouteTable {
    /// Validate `routes` against `locales` and build the lookup index.
    ///
    /// All problems are collected before failing so one startup run reports
    /// every broken entry.
    pub fn new(
        routes: Vec<RouteDescriptor>,
        locales: &[&'static str],
    ) -> Result<RouteTable, TableError> {
        let mut errors = Vec::new();
        let mut segments = Vec::with_capacity(routes.len());
        let mut index: HashMap<&'static str, HashMap<&'static str, usize>> = HashMap::new();
        let mut names = HashSet::new();
        let mut pages = Vec::new();

        for (position, route) in routes.iter().enumerate() {
            match parse_pattern(route.pattern) {
                Ok(parsed) => segments.push(parsed),
                Err(e) => {
                    errors.push(format!("route '{}': {}", route.name, e));
                    segments.push(Vec::new());
                }
            }

            if !names.insert(route.name) {
                errors.push(format!("duplicate route name '{}'", route.name));
            }

            if !locales.contains(&route.locale) {
                errors.push(format!(
                    "route '{}' uses unsupported locale '{}'",
                    route.name, route.locale
                ));
            }

            if !pages.contains(&route.page) {
                pages.push(route.page);
            }

            let by_locale = index.entry(route.page).or_default();
            if by_locale.insert(route.locale, position).is_some() {
                errors.push(format!(
                    "page '{}' has more than one route for locale '{}'",
                    route.page, route.locale
                ));
            }
        }

        for page in &pages {
            for locale in locales {
                let present = index
                    .get(page)
                    .map(|by_locale| by_locale.contains_key(locale))
                    .unwrap_or(false);
                if !present {
                    errors.push(format!(
                        "page '{}' has no route for locale '{}'",
                        page, locale
                    ));
                }
            }
        }

        if !errors.is_empty() {
            return Err(TableError::Invalid(errors));
        }

        Ok(RouteTable {
            routes,
            segments,
            index,
            locales: locales.to_vec(),
        })
    }

    /// The site's routes, validated against every enabled locale.
    pub fn builtin() -> Result<RouteTable, TableError> {
        RouteTable::new(default_routes(), &LocaleRegistry::get().enabled_codes())
    }

    /// All descriptors, in table order.
    pub fn all_routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Locale codes the table was validated against.
    pub fn locales(&self) -> &[&'static str] {
        &self.locales
    }

    pub fn contains_locale(&self, code: &str) -> bool {
        self.locales.iter().any(|locale| *locale == code)
    }

    /// Distinct page identifiers, in order of first appearance.
    pub fn pages(&self) -> Vec<&'static str> {
        let mut pages = Vec::new();
        for route in &self.routes {
            if !pages.contains(&route.page) {
                pages.push(route.page);
            }
        }
        pages
    }

    /// The descriptor registered for an explicit (page, locale) pair.
    pub fn lookup(&self, page: &str, locale: &str) -> Option<&RouteDescriptor> {
        self.position(page, locale).map(|position| &self.routes[position])
    }

    pub(super) fn position(&self, page: &str, locale: &str) -> Option<usize> {
        self.index
            .get(page)
            .and_then(|by_locale| by_locale.get(locale))
            .copied()
    }
}

/// Parse a pattern like `/dinosaur/:name` into segments.
///
/// One trailing slash is accepted; empty segments elsewhere are rejected.
pub(super) fn parse_pattern(pattern: &'static str) -> Result<Vec<Segment>, String> {
    let body = pattern
        .strip_prefix('/')
        .ok_or_else(|| format!("pattern '{}' must start with '/'", pattern))?;
    let body = body.strip_suffix('/').unwrap_or(body);
    if body.is_empty() {
        return Ok(Vec::new());
    }

    let regex = PLACEHOLDER_REGEX
        .get_or_init(|| Regex::new(r"^:[A-Za-z_][A-Za-z0-9_]*$").unwrap());

    let mut segments = Vec::new();
    let mut seen = HashSet::new();
    for raw in body.split('/') {
        if raw.is_empty() {
            return Err(format!("pattern '{}' has an empty segment", pattern));
        }
        if raw.starts_with(':') {
            if !regex.is_match(raw) {
                return Err(format!(
                    "pattern '{}' has an invalid placeholder '{}'",
                    pattern, raw
                ));
            }
            let name = &raw[1..];
            if !seen.insert(name) {
                return Err(format!(
                    "pattern '{}' repeats placeholder ':{}'",
                    pattern, name
                ));
            }
            segments.push(Segment::Param(name));
        } else {
            segments.push(Segment::Static(raw));
        }
    }
    Ok(segments)
}

/// Routes of the encyclopedia. Only the dinosaur page is localized; the home
/// page lives at the locale root and has no entry here.
fn default_routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor {
            page: "dinosaur",
            locale: "en",
            pattern: "/dinosaur/:name",
            name: "dinosaur",
        },
        RouteDescriptor {
            page: "dinosaur",
            locale: "de",
            pattern: "/dinosaurier/:name",
            name: "dinosaurier",
        },
        RouteDescriptor {
            page: "dinosaur",
            locale: "fr",
            pattern: "/dinosaure/:name",
            name: "dinosaure",
        },
        RouteDescriptor {
            page: "dinosaur",
            locale: "it",
            pattern: "/dinosauro/:name",
            name: "dinosauro",
        },
    ]
}
