//! Markdown rendering for free-text content fields.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

/// Render a markdown source string as HTML inside a styled container.
#[component]
pub fn Markdown(
    #[prop(into)] source: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let rendered = render_markdown_html(&source);
    view! { <div class=format!("markdown {class}") inner_html=rendered></div> }
}

/// Convert markdown to HTML with tables, strikethrough, and task lists
/// enabled.
#[must_use]
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    // Safety: drop inline/block raw HTML so content stays markup-only.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
