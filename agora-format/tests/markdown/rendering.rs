//! Rendering tests for the Markdown dialect

use agora_format::format::FormatRenderer;
use agora_format::formats::MarkdownFormat;
use insta::assert_snapshot;

#[test]
fn test_render_html_basic_document() {
    let md = "# Title\n\nSome **bold** and a [link](https://example.com/).";
    let html = MarkdownFormat::default().render_html(md);

    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("<strong>bold</strong>"));
    assert!(html.contains("<a href=\"https://example.com/\">link</a>"));
}

#[test]
fn test_render_html_gfm_extensions() {
    let md = "~~gone~~\n\n| a | b |\n| - | - |\n| 1 | 2 |";
    let html = MarkdownFormat::default().render_html(md);

    assert!(html.contains("<del>gone</del>"));
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>1</td>"));
}

#[test]
fn test_render_html_never_passes_raw_html_through() {
    let cases = [
        ("<script>alert(1)</script>", "<script"),
        ("text <img src=x onerror=alert(1)> more", "<img"),
        ("<iframe src=\"https://evil.example\"></iframe>", "<iframe"),
        ("<div onmouseover=\"steal()\">hover</div>", "<div"),
    ];
    for (case, forbidden) in cases {
        let html = MarkdownFormat::default().render_html(case);
        assert!(!html.contains(forbidden), "{forbidden:?} survived in {html:?}");
    }
}

#[test]
fn test_render_html_code_block_is_escaped() {
    let md = "```\n<script>alert(1)</script>\n```";
    let html = MarkdownFormat::default().render_html(md);

    assert!(html.contains("<pre><code>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_render_plain_text_kitchen_sink() {
    let md = "\
# Heading

Some *emphasis* and `inline code`.

- first
- second

```
let x = 1;
```

> quoted text
";
    let text = MarkdownFormat::default().render_plain_text(md);
    assert_snapshot!(text, @r"
    Heading
    Some emphasis and inline code.
    first
    second
    let x = 1;
    quoted text
    ");
}

#[test]
fn test_render_plain_text_empty_input() {
    assert_eq!(MarkdownFormat::default().render_plain_text(""), "");
}

#[test]
fn test_render_excerpt_strips_markup() {
    let excerpt = MarkdownFormat::default().render_excerpt("**bold** text", None);
    assert_eq!(excerpt, "bold text");
}

#[test]
fn test_filter_round_trips_markup() {
    let format = MarkdownFormat::default();
    let filtered = format.filter("# Title\n\n**bold**\n").unwrap();
    assert_eq!(filtered, "# Title\n\n**bold**\n");

    // Second pass is a fixed point.
    assert_eq!(format.filter(&filtered).unwrap(), filtered);
}

#[test]
fn test_filter_rejects_control_characters() {
    assert!(MarkdownFormat::default().filter("text\u{1b}[0m").is_err());
}
