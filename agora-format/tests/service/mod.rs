//! FormatService facade tests: resolution, delegation, visible length

use crate::common::default_service;
use agora_format::{FormatRegistry, FormatService};
use std::sync::Arc;

#[test]
fn test_same_content_renders_per_declared_format() {
    let service = default_service();
    let content = "# Heading";

    assert!(service.render_html(content, "markdown").contains("<h1>"));
    // As plain text the hash is literal content, not syntax.
    assert!(service.render_html(content, "text").contains("# Heading"));
}

#[test]
fn test_unknown_format_renders_via_fallback() {
    let service = default_service();
    let html = service.render_html("<b>legacy</b>", "long-retired-dialect");
    assert_eq!(html, "&lt;b&gt;legacy&lt;/b&gt;");
}

#[test]
fn test_format_identifier_case_insensitive() {
    let service = default_service();
    assert_eq!(
        service.render_html("**x**", "Markdown"),
        service.render_html("**x**", "markdown")
    );
}

#[test]
fn test_visible_text_length_markdown() {
    let service = default_service();
    // "Title" + newline + "body" = 10 displayed characters.
    assert_eq!(service.visible_text_length("# Title\n\nbody", "markdown"), 10);
}

#[test]
fn test_visible_text_length_html() {
    let service = default_service();
    assert_eq!(
        service.visible_text_length("<p>ab</p><p>cd</p>", "html"),
        5 // "ab\ncd"
    );
}

#[test]
fn test_visible_text_length_never_exceeds_raw_length() {
    let service = default_service();
    let samples = [
        ("**bold** and *italic*", "markdown"),
        ("<p>hello <strong>world</strong></p>", "html"),
        ("plain text", "text"),
    ];
    for (content, format) in samples {
        assert!(
            service.visible_text_length(content, format) <= content.chars().count(),
            "{format}: {content:?}"
        );
    }
}

#[test]
fn test_visible_text_length_counts_displayed_units() {
    let service = default_service();
    // "née 🇫🇷" as markdown emphasis: 5 displayed units.
    assert_eq!(service.visible_text_length("*née 🇫🇷*", "markdown"), 5);
}

#[test]
fn test_excerpt_delegates_with_query() {
    let service = default_service();
    let mut content = String::from("start ");
    content.push_str(&"pad ".repeat(200));
    content.push_str("target end");

    let excerpt = service.render_excerpt(&content, "text", Some("target"));
    assert!(excerpt.contains("target"));
}

#[test]
fn test_service_shares_across_threads() {
    let service = default_service();
    let mut handles = Vec::new();

    for i in 0..4 {
        let service = Arc::clone(&service);
        handles.push(std::thread::spawn(move || {
            let content = format!("**post {i}**");
            let html = service.render_html(&content, "markdown");
            assert!(html.contains(&format!("post {i}")));
            service.visible_text_length(&content, "markdown")
        }));
    }
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 6);
    }
}

#[test]
fn test_custom_registry_fallback() {
    let markdown = Arc::new(agora_format::formats::MarkdownFormat::default());
    let registry = FormatRegistry::new(markdown);
    // Nothing registered: every identifier resolves to the fallback.
    let service = FormatService::new(registry);

    assert!(service.render_html("*x*", "anything").contains("<em>x</em>"));
}
