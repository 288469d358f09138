//! HTML rendering
//!
//! Pages are plain strings assembled from small helpers. Data-dependent
//! regions go through [`suspense`], which streams the page chrome and a
//! spinner first and the region itself once its fetch resolves.

pub mod users;

use std::convert::Infallible;
use std::future::Future;

use axum::{
    body::Body,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use futures_util::{StreamExt, future, stream};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use roster_core::i18n::{Locale, Messages};

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; color: #111827; }
.site-header { display: flex; gap: 1.5rem; align-items: center; padding: .75rem 1.5rem; border-bottom: 1px solid #e5e7eb; }
.site-header a { color: inherit; text-decoration: none; }
.site-header .brand { font-weight: bold; }
.page { display: flex; flex-direction: column; gap: 1rem; max-width: 40rem; margin: 0 auto; padding: 1.5rem; }
.page > .heading { order: 0; margin: 0; }
.page > .pending, .page > .resolved { order: 1; }
.page > .after { order: 2; }
.page:has(> .resolved) > .pending { display: none; }
.spinner { width: 2rem; height: 2rem; margin: 4rem auto 0; border: 3px solid #e5e7eb; border-top-color: #6b7280; border-radius: 50%; animation: spin .8s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.sr-only { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0 0 0 0); }
.alert { color: #dc2626; }
.muted { color: #6b7280; }
.cards { display: grid; gap: 1rem; }
.card { display: block; padding: .75rem 1rem; border: 1px solid #e5e7eb; border-radius: .5rem; color: inherit; text-decoration: none; }
.card p { margin: 0; font-size: .875rem; }
.card .name { font-weight: bold; }
.detail p { margin: .25rem 0; }
"#;

const CLOSE: &str = "</main></body></html>";

/// Document chrome shared by every page
#[derive(Debug, Clone)]
pub struct Page {
    locale: Locale,
    title: String,
}

impl Page {
    pub fn new(locale: Locale, title: impl Into<String>) -> Self {
        Self {
            locale,
            title: title.into(),
        }
    }

    pub fn messages(&self) -> &'static Messages {
        self.locale.messages()
    }

    /// Everything up to and including the opening `<main>`
    fn open(&self) -> String {
        let messages = self.messages();
        format!(
            concat!(
                r#"<!DOCTYPE html><html lang="{lang}"><head><meta charset="utf-8">"#,
                r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
                r#"<title>{title} | {site}</title><style>{style}</style></head><body>"#,
                r#"<header class="site-header"><a class="brand" href="/">{site}</a>"#,
                r#"<nav><a href="/users">{users}</a></nav></header><main class="page">"#,
            ),
            lang = self.locale.lang(),
            title = escape(&self.title),
            site = escape(messages.site_title),
            style = STYLE,
            users = escape(messages.user_list_link),
        )
    }

    /// A page whose content is known up front
    pub fn render(&self, content: &str) -> Html<String> {
        Html(format!(
            r#"{open}<h1 class="heading">{title}</h1>{content}{close}"#,
            open = self.open(),
            title = escape(&self.title),
            close = CLOSE,
        ))
    }
}

/// Stream a page whose main region depends on a pending fetch
///
/// The chrome, heading, spinner and `after` markup are sent immediately.
/// `region` is awaited only after that first chunk is out, and its markup is
/// sent as a second chunk. The styles keep the region above `after` and hide
/// the spinner once the region has arrived.
pub fn suspense<F>(page: &Page, after: &str, region: F) -> Response
where
    F: Future<Output = String> + Send + 'static,
{
    let shell = format!(
        r#"{open}<h1 class="heading">{title}</h1>{pending}<div class="after">{after}</div>"#,
        open = page.open(),
        title = escape(&page.title),
        pending = spinner(page.messages()),
    );

    let chunks = stream::once(future::ready(Ok::<_, Infallible>(shell))).chain(stream::once(
        async move {
            Ok::<_, Infallible>(format!(r#"<div class="resolved">{}</div>{}"#, region.await, CLOSE))
        },
    ));

    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        Body::from_stream(chunks),
    )
        .into_response()
}

/// A full page with a non-200 status
pub fn page_with_status(status: StatusCode, page: &Page, content: &str) -> Response {
    (status, page.render(content)).into_response()
}

fn spinner(messages: &Messages) -> String {
    format!(
        r#"<div class="pending" role="status"><div class="spinner"></div><span class="sr-only">{}</span></div>"#,
        escape(messages.loading)
    )
}

/// Error text shown in place of content
pub fn alert(message: &str) -> String {
    format!(r#"<p class="alert" role="alert">{}</p>"#, escape(message))
}

pub fn link(href: &str, text: &str) -> String {
    format!(r#"<a href="{}">{}</a>"#, escape(href), escape(text))
}

/// Escape text for use in element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Characters escaped in a path segment, matching what `url` does for
/// http(s) URLs so hrefs and outbound requests encode ids the same way
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%')
    .add(b'\\');

/// Percent-encode a value for use as one URL path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}
