//! Conversion between navigation intents and concrete paths.

use crate::routes::table::Segment;
use crate::routes::{Params, RouteDescriptor, RouteError, RouteTable};

impl RouteTable {
    /// Produce the concrete path of `page` in `locale`.
    ///
    /// Each `:placeholder` in the pattern is replaced by the value bound to
    /// the same name in `params`. Extra params are ignored.
    pub fn build_path(
        &self,
        page: &str,
        locale: &str,
        params: &Params,
    ) -> Result<String, RouteError> {
        let position = self
            .position(page, locale)
            .ok_or_else(|| RouteError::UnknownRoute {
                page: page.to_string(),
                locale: locale.to_string(),
            })?;

        let segments = &self.segments[position];
        if segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for segment in segments {
            path.push('/');
            match segment {
                Segment::Static(text) => path.push_str(text),
                Segment::Param(name) => {
                    let value = params
                        .get(*name)
                        .filter(|value| !value.is_empty())
                        .ok_or_else(|| RouteError::MissingParameter {
                            pattern: self.routes[position].pattern.to_string(),
                            name: name.to_string(),
                        })?;
                    path.push_str(value);
                }
            }
        }
        Ok(path)
    }

    /// Find the descriptor whose pattern matches `raw_path` exactly.
    ///
    /// Placeholders match any single non-empty segment. If a malformed table
    /// lets several patterns match, the first in table order wins.
    pub fn match_path(&self, raw_path: &str) -> Option<&RouteDescriptor> {
        let parts = split_path(raw_path)?;
        self.segments
            .iter()
            .position(|segments| segments_match(segments, &parts))
            .map(|position| &self.routes[position])
    }

    /// Bind the placeholder values of `descriptor` from `raw_path`.
    pub fn extract_params(
        &self,
        descriptor: &RouteDescriptor,
        raw_path: &str,
    ) -> Result<Params, RouteError> {
        let position = self
            .position(descriptor.page, descriptor.locale)
            .ok_or_else(|| RouteError::UnknownRoute {
                page: descriptor.page.to_string(),
                locale: descriptor.locale.to_string(),
            })?;
        let parts = split_path(raw_path).unwrap_or_default();

        let mut params = Params::new();
        for (i, segment) in self.segments[position].iter().enumerate() {
            if let Segment::Param(name) = segment {
                match parts.get(i) {
                    Some(value) if !value.is_empty() => {
                        params.insert(name.to_string(), value.to_string());
                    }
                    _ => {
                        return Err(RouteError::MissingParameter {
                            pattern: descriptor.pattern.to_string(),
                            name: name.to_string(),
                        })
                    }
                }
            }
        }
        Ok(params)
    }

    /// Match `raw_path` and extract its parameters in one step.
    pub fn resolve(&self, raw_path: &str) -> Option<(&RouteDescriptor, Params)> {
        let descriptor = self.match_path(raw_path)?;
        let params = self.extract_params(descriptor, raw_path).ok()?;
        Some((descriptor, params))
    }
}

/// Split an absolute path into segments, ignoring one trailing slash.
///
/// Returns `None` for relative paths. The root path yields no segments.
fn split_path(raw_path: &str) -> Option<Vec<&str>> {
    let body = raw_path.strip_prefix('/')?;
    let body = body.strip_suffix('/').unwrap_or(body);
    if body.is_empty() {
        return Some(Vec::new());
    }
    Some(body.split('/').collect())
}

fn segments_match(segments: &[Segment], parts: &[&str]) -> bool {
    segments.len() == parts.len()
        && segments.iter().zip(parts).all(|(segment, part)| match segment {
            Segment::Static(text) => text == part,
            Segment::Param(_) => !part.is_empty(),
        })
}
