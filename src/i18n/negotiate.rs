//! Per-request locale negotiation.
//!
//! The locale of a request is decided once, from the request alone, and
//! carried as a [`RequestLocale`] value. Sources are consulted in order:
//! URL subpath, `lng` query parameter, locale cookie, `Accept-Language`,
//! then the configured default.

use axum::http::header::{ACCEPT_LANGUAGE, COOKIE};
use axum::http::HeaderMap;

use crate::i18n::Locale;

/// Where the locale of a request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    Subpath,
    Query,
    Cookie,
    AcceptLanguage,
    Default,
}

/// The locale a single request is served in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLocale {
    pub locale: Locale,
    pub source: LocaleSource,
}

/// Split a leading `/{locale}` segment off `path`.
///
/// `/de/dinosaurier/x` gives `(Some(de), "/dinosaurier/x")`; `/de` and `/de/`
/// give `(Some(de), "/")`. Paths whose first segment is not an enabled locale
/// are returned unchanged.
pub fn split_locale_subpath(path: &str) -> (Option<Locale>, &str) {
    let Some(body) = path.strip_prefix('/') else {
        return (None, path);
    };
    let (first, rest) = match body.find('/') {
        Some(slash) => (&body[..slash], &body[slash..]),
        None => (body, ""),
    };

    match Locale::from_code(first) {
        Ok(locale) if rest.is_empty() => (Some(locale), "/"),
        Ok(locale) => (Some(locale), rest),
        Err(_) => (None, path),
    }
}

/// Decides the locale of a request.
#[derive(Debug, Clone, Copy)]
pub struct LocaleNegotiator<'a> {
    default_locale: Locale,
    cookie_name: &'a str,
}

impl<'a> LocaleNegotiator<'a> {
    pub fn new(default_locale: Locale, cookie_name: &'a str) -> Self {
        Self {
            default_locale,
            cookie_name,
        }
    }

    /// `query_locale` is the already decoded `lng` query value, if any.
    pub fn negotiate(
        &self,
        subpath: Option<Locale>,
        query_locale: Option<&str>,
        headers: &HeaderMap,
    ) -> RequestLocale {
        if let Some(locale) = subpath {
            return RequestLocale {
                locale,
                source: LocaleSource::Subpath,
            };
        }

        let from_query = query_locale.and_then(|code| Locale::from_code(code).ok());
        if let Some(locale) = from_query {
            return RequestLocale {
                locale,
                source: LocaleSource::Query,
            };
        }

        let from_cookie =
            cookie_value(headers, self.cookie_name).and_then(|code| Locale::from_code(code).ok());
        if let Some(locale) = from_cookie {
            return RequestLocale {
                locale,
                source: LocaleSource::Cookie,
            };
        }

        let from_header = headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_accept_language);
        if let Some(locale) = from_header {
            return RequestLocale {
                locale,
                source: LocaleSource::AcceptLanguage,
            };
        }

        RequestLocale {
            locale: self.default_locale,
            source: LocaleSource::Default,
        }
    }
}

/// Value of cookie `name` across all `Cookie` headers.
pub fn cookie_value<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.trim())
}

/// Pick the supported locale with the highest quality value.
///
/// Ties keep header order. Wildcards, `q=0` entries and qualities outside
/// `0..=1` (including `NaN`) are ignored.
fn parse_accept_language(value: &str) -> Option<Locale> {
    let mut best: Option<(Locale, f32)> = None;

    for part in value.split(',') {
        let mut components = part.trim().split(';');
        let tag = components.next().unwrap_or("").trim();
        if tag.is_empty() || tag == "*" {
            continue;
        }

        let quality = match components.find_map(|param| param.trim().strip_prefix("q=")) {
            Some(q) => match q.trim().parse::<f32>() {
                Ok(q) if (0.0..=1.0).contains(&q) => q,
                _ => continue,
            },
            None => 1.0,
        };
        if quality == 0.0 {
            continue;
        }

        let primary = tag.split('-').next().unwrap_or(tag).to_ascii_lowercase();
        let Ok(locale) = Locale::from_code(&primary) else {
            continue;
        };

        match best {
            Some((_, best_quality)) if best_quality >= quality => {}
            _ => best = Some((locale, quality)),
        }
    }

    best.map(|(locale, _)| locale)
}
