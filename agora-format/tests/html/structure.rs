//! Plain text and structure extraction tests for the HTML dialect

use agora_format::format::{AttachmentKind, FormatRenderer};
use agora_format::formats::HtmlFormat;
use insta::assert_snapshot;

#[test]
fn test_plain_text_kitchen_sink() {
    let content = "\
<h1>Minutes</h1>\
<p>We discussed <strong>three</strong> items.</p>\
<ul><li>budget</li><li>roadmap</li></ul>\
<table><tr><td>Q1</td><td>done</td></tr></table>\
<p>See the <a href=\"/wiki\">wiki</a>.</p>";
    let text = HtmlFormat::default().render_plain_text(content);
    assert_snapshot!(text, @r"
    Minutes
    We discussed three items.
    budget
    roadmap
    Q1 done
    See the wiki.
    ");
}

#[test]
fn test_plain_text_entities_decoded() {
    let text = HtmlFormat::default().render_plain_text("<p>Fish &amp; chips &mdash; &pound;5</p>");
    assert_eq!(text, "Fish & chips — £5");
}

#[test]
fn test_plain_text_hidden_subtrees_ignored() {
    let text = HtmlFormat::default()
        .render_plain_text("<p>visible</p><script>var x;</script><style>p{}</style>");
    assert_eq!(text, "visible");
}

#[test]
fn test_plain_text_br_becomes_newline() {
    let text = HtmlFormat::default().render_plain_text("<p>line one<br>line two</p>");
    assert_eq!(text, "line one\nline two");
}

#[test]
fn test_headings_with_nested_markup() {
    let headings =
        HtmlFormat::default().parse_headings("<h1>Top <em>level</em></h1><h2>Next</h2>");
    assert_eq!(headings.len(), 2);
    assert_eq!(headings[0].text, "Top level");
    assert_eq!(headings[0].slug, "top-level");
    assert_eq!(headings[1].level, 2);
}

#[test]
fn test_headings_empty_sequence() {
    assert!(HtmlFormat::default()
        .parse_headings("<p>no headings at all</p>")
        .is_empty());
}

#[test]
fn test_attachments_document_order() {
    let content = "\
<p><img src=\"/a.png\" alt=\"first\"></p>\
<p><a href=\"/files/spec.pdf\" download=\"spec.pdf\">the spec</a></p>\
<p><img src=\"/b.png\"></p>";
    let attachments = HtmlFormat::default().parse_attachments(content);

    assert_eq!(attachments.len(), 3);
    assert_eq!(attachments[0].kind, AttachmentKind::Image);
    assert_eq!(attachments[0].name, "first");
    assert_eq!(attachments[1].kind, AttachmentKind::File);
    assert_eq!(attachments[1].name, "spec.pdf");
    // Unlabeled image falls back to its file name.
    assert_eq!(attachments[2].name, "b.png");
}

#[test]
fn test_plain_links_are_not_attachments() {
    let attachments =
        HtmlFormat::default().parse_attachments("<a href=\"https://example.com\">just a link</a>");
    assert!(attachments.is_empty());
}

#[test]
fn test_excerpt_is_query_aware() {
    let mut content = String::from("<p>");
    content.push_str(&"filler sentence goes here. ".repeat(40));
    content.push_str("the important keyword appears late.</p>");

    let excerpt = HtmlFormat::default().render_excerpt(&content, Some("keyword"));
    assert!(excerpt.contains("keyword"), "excerpt was {excerpt:?}");
    assert!(excerpt.starts_with('…'));

    let plain = HtmlFormat::default().render_excerpt(&content, None);
    assert!(plain.starts_with("filler sentence"));
}
