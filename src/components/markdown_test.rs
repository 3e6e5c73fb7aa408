use super::*;

#[test]
fn renders_paragraphs() {
    let out = render_markdown_html("Hello **world**.");
    assert!(out.contains("<p>"));
    assert!(out.contains("<strong>world</strong>"));
}

#[test]
fn strips_raw_html_events() {
    let out = render_markdown_html("before <script>alert(1)</script> after");
    assert!(!out.contains("<script>"));
    assert!(out.contains("before"));
    assert!(out.contains("after"));
}

#[test]
fn tables_are_enabled() {
    let out = render_markdown_html("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(out.contains("<table>"));
}

#[test]
fn empty_source_renders_empty() {
    assert_eq!(render_markdown_html(""), "");
}
