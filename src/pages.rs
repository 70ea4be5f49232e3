//! HTML pages.
//!
//! Markup is assembled with `format!`; every dynamic value goes through
//! [`escape_html`]. Links to localized pages come from the route table so
//! they never need a redirect round trip.

use crate::data::{self, Dinosaur};
use crate::i18n::{interpolate, LanguageSelector, Locale, LocaleStrings};
use crate::routes::{Params, RouteError, RouteTable};

/// Everything a page needs to know about the request it answers.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub locale: Locale,
    pub table: &'a RouteTable,
    pub default_locale: Locale,
    /// Path as requested, used to return here after a language change
    pub current_path: &'a str,
}

impl<'a> PageContext<'a> {
    fn strings(&self) -> &'static LocaleStrings {
        LocaleStrings::for_locale(self.locale)
    }

    /// Href of a localized page, with the locale subpath.
    pub fn href(&self, page: &str, params: &Params) -> Result<String, RouteError> {
        let path = self.table.build_path(page, self.locale.code(), params)?;
        Ok(format!("/{}{}", self.locale, path))
    }

    fn home_href(&self) -> String {
        format!("/{}", self.locale)
    }
}

/// The dinosaur list.
pub fn render_home(ctx: &PageContext<'_>) -> Result<String, RouteError> {
    let strings = ctx.strings();

    let mut cards = String::new();
    for dinosaur in data::all() {
        cards.push_str(&render_card(ctx, dinosaur)?);
    }

    let body = format!(
        "<div class=\"banner\"><h1>{}</h1></div>\n<div class=\"dinosaur-list\">\n{}</div>",
        escape_html(strings.t("homePage:banner")),
        cards
    );
    Ok(layout(ctx, strings.banner, &body))
}

fn render_card(ctx: &PageContext<'_>, dinosaur: &Dinosaur) -> Result<String, RouteError> {
    let strings = ctx.strings();
    let mut params = Params::new();
    params.insert("name".to_string(), dinosaur.name.to_string());
    let href = ctx.href("dinosaur", &params)?;

    Ok(format!(
        "<a href=\"{}\"><div class=\"dinosaur-card\"><h2>{}</h2><h3>{}</h3></div></a>\n",
        escape_html(&href),
        escape_html(&interpolate(strings.t("dinosaurCard:name"), &[("name", dinosaur.name)])),
        escape_html(&interpolate(strings.t("dinosaurCard:diet"), &[("diet", dinosaur.diet)])),
    ))
}

/// The detail page of one dinosaur.
pub fn render_dinosaur(ctx: &PageContext<'_>, dinosaur: &Dinosaur) -> String {
    let strings = ctx.strings();

    let mut facts = format!(
        "<p><span>{}:</span> {}</p>\n<p><span>{}:</span> {}</p>\n",
        escape_html(strings.t("dinosaur:diet")),
        escape_html(dinosaur.diet),
        escape_html(strings.t("dinosaur:length")),
        escape_html(dinosaur.length),
    );
    if let Some(weight) = dinosaur.weight {
        facts.push_str(&format!(
            "<p><span>{}:</span> {}</p>\n",
            escape_html(strings.t("dinosaur:weight")),
            escape_html(weight)
        ));
    }

    let body = format!(
        "<div class=\"dinosaur-content\">\n<h1>{}</h1>\n<div>\n{}</div>\n<p>{}</p>\n</div>",
        escape_html(&interpolate(
            strings.t("dinosaur:myNameIs"),
            &[("dinosaur", dinosaur.name)]
        )),
        facts,
        escape_html(dinosaur.info),
    );
    layout(ctx, dinosaur.name, &body)
}

/// Localized 404 page.
pub fn render_not_found(ctx: &PageContext<'_>) -> String {
    let message = ctx.strings().t("error:notFound");
    let body = format!("<h1>404</h1>\n<p>{}</p>", escape_html(message));
    layout(ctx, message, &body)
}

/// Localized 500 page.
pub fn render_error(ctx: &PageContext<'_>) -> String {
    let message = ctx.strings().t("error:internal");
    let body = format!("<h1>500</h1>\n<p>{}</p>", escape_html(message));
    layout(ctx, message, &body)
}

fn layout(ctx: &PageContext<'_>, title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
<body>\n{header}\n<main>\n{body}\n</main>\n<footer>Footer</footer>\n</body>\n</html>\n",
        lang = ctx.locale,
        title = escape_html(title),
        header = render_header(ctx),
        body = body,
    )
}

fn render_header(ctx: &PageContext<'_>) -> String {
    let strings = ctx.strings();
    let selector = LanguageSelector::new(ctx.table, ctx.default_locale);

    let options: String = selector
        .options(ctx.locale)
        .iter()
        .map(|option| {
            format!(
                "<option value=\"{}\"{}>{}</option>",
                option.code,
                if option.selected { " selected" } else { "" },
                escape_html(option.label)
            )
        })
        .collect();

    format!(
        "<header>\n<a href=\"{home}\"><h1>Logo</h1></a>\n\
<form action=\"/language\" method=\"get\">\
<label>{label} <select name=\"lng\">{options}</select></label>\
<input type=\"hidden\" name=\"path\" value=\"{path}\">\
<button type=\"submit\">{change}</button></form>\n</header>",
        home = escape_html(&ctx.home_href()),
        label = escape_html(strings.t("common:language")),
        options = options,
        path = escape_html(ctx.current_path),
        change = escape_html(strings.t("common:change")),
    )
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
