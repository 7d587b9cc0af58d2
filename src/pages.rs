//! Server-rendered HTML for the public site and the admin placeholder.

use html_escape::{encode_double_quoted_attribute, encode_text};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::i18n::Language;
use crate::routing::{alternates, LocalizedLink, Route, RouteTable};

/// Everything a page needs to render.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub site_name: &'a str,
    pub public_base_url: &'a str,
    pub language: Language,
    /// The prefixed path being shown, without query string.
    pub current_path: &'a str,
}

/// Link target of the language switcher entry for `language`.
pub fn switch_href(language: Language, next: &str) -> String {
    format!(
        "/language/{}?next={}",
        language.code(),
        utf8_percent_encode(next, NON_ALPHANUMERIC)
    )
}

pub fn render_page(ctx: &PageContext<'_>, route: &Route) -> String {
    let strings = ctx.language.strings();
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>",
        encode_text(route.label(strings)),
        encode_text(strings.site_tagline),
    );
    layout(ctx, route.label(strings), &body)
}

pub fn render_not_found(ctx: &PageContext<'_>) -> String {
    let strings = ctx.language.strings();
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>",
        encode_text(strings.not_found_title),
        encode_text(strings.not_found_body),
    );
    layout(ctx, strings.not_found_title, &body)
}

/// Back office placeholder. Its links are never language-prefixed.
pub fn render_admin(site_name: &str, current_path: &str) -> String {
    let links = ["/admin", "/admin/posts", "/admin/settings"]
        .iter()
        .map(|to| {
            LocalizedLink::new(*to, *to).render(Language::default_language(), current_path)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{} admin</title></head>\n\
<body>\n<nav>\n{}\n</nav>\n</body>\n</html>\n",
        encode_text(site_name),
        links
    )
}

fn layout(ctx: &PageContext<'_>, title: &str, body: &str) -> String {
    let strings = ctx.language.strings();

    let nav = RouteTable::site()
        .iter()
        .map(|route| {
            LocalizedLink::new(route.path, route.label(strings))
                .class("nav-link")
                .render(ctx.language, ctx.current_path)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let switcher = Language::all()
        .into_iter()
        .map(|language| {
            let current = if language == ctx.language {
                " aria-current=\"true\""
            } else {
                ""
            };
            format!(
                "<a href=\"{}\" hreflang=\"{}\"{}>{}</a>",
                encode_double_quoted_attribute(&switch_href(language, ctx.current_path)),
                language.code(),
                current,
                encode_text(language.native_name()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let hreflang = alternates(ctx.current_path)
        .into_iter()
        .map(|(language, path)| {
            format!(
                "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\">",
                language.code(),
                encode_double_quoted_attribute(&format!("{}{}", ctx.public_base_url, path)),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n\
<title>{title} | {site}</title>\n{hreflang}\n</head>\n<body>\n\
<nav>\n{nav}\n</nav>\n<div class=\"language-switcher\" aria-label=\"{label}\">\n{switcher}\n</div>\n\
<main>\n{body}\n</main>\n</body>\n</html>\n",
        lang = ctx.language.code(),
        title = encode_text(title),
        site = encode_text(ctx.site_name),
        label = encode_double_quoted_attribute(strings.language_label),
    )
}
