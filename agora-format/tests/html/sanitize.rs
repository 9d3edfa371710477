//! Sanitization tests for the HTML dialect
//!
//! The payload list leans on classic filter-evasion shapes: mixed case,
//! nested tags split across text, event handlers, and URL schemes.

use agora_format::format::FormatRenderer;
use agora_format::formats::html::MAX_NESTING_DEPTH;
use agora_format::formats::HtmlFormat;
use once_cell::sync::Lazy;
use regex::Regex;

static SCRIPT_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new("(?i)<script").expect("valid regex for script tags"));

static EVENT_HANDLER_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<[^>]*\son\w+\s*="#).expect("valid regex for event handler attributes")
});

#[test]
fn test_script_payloads_never_survive() {
    let payloads = [
        "<script>alert(1)</script>",
        "<SCRIPT SRC=https://evil.example/x.js></SCRIPT>",
        "<scr<script>ipt>alert(1)</scr</script>ipt>",
        "<p>fine</p><script>document.cookie</script>",
        "<svg><script>alert(1)</script></svg>",
    ];
    for payload in payloads {
        let html = HtmlFormat::default().render_html(payload);
        assert!(
            !SCRIPT_TAG.is_match(&html),
            "script survived: {payload:?} -> {html:?}"
        );
    }
}

#[test]
fn test_event_handlers_never_survive() {
    let payloads = [
        "<p onclick=\"alert(1)\">x</p>",
        "<img src=\"/a.png\" onerror=\"alert(1)\">",
        "<a href=\"/ok\" onmouseover=\"alert(1)\">x</a>",
        "<div ONFOCUS=\"alert(1)\" tabindex=\"1\">x</div>",
    ];
    for payload in payloads {
        let html = HtmlFormat::default().render_html(payload);
        assert!(
            !EVENT_HANDLER_ATTR.is_match(&html),
            "handler survived: {payload:?} -> {html:?}"
        );
    }
}

#[test]
fn test_url_scheme_policy() {
    let format = HtmlFormat::default();

    let kept = format.render_html("<a href=\"https://example.com/page\">x</a>");
    assert!(kept.contains("href=\"https://example.com/page\""));

    let kept = format.render_html("<a href=\"mailto:user@example.com\">x</a>");
    assert!(kept.contains("href=\"mailto:user@example.com\""));

    let kept = format.render_html("<a href=\"/relative/path\">x</a>");
    assert!(kept.contains("href=\"/relative/path\""));

    for bad in [
        "<a href=\"javascript:alert(1)\">x</a>",
        "<a href=\"jAvAsCrIpT:alert(1)\">x</a>",
        "<a href=\"vbscript:msgbox(1)\">x</a>",
        "<img src=\"data:image/svg+xml,<svg onload=alert(1)>\">",
    ] {
        let html = format.render_html(bad);
        assert!(
            !html.contains("href=\"j") && !html.contains("script:") && !html.contains("data:"),
            "unsafe url survived: {bad:?} -> {html:?}"
        );
    }
}

#[test]
fn test_style_and_iframe_dropped_with_content() {
    let html = HtmlFormat::default()
        .render_html("<style>p{display:none}</style><iframe src=\"/x\">fallback</iframe><p>ok</p>");
    assert_eq!(html, "<p>ok</p>");
}

#[test]
fn test_unknown_tags_unwrap_but_keep_text() {
    let html = HtmlFormat::default().render_html("<center><font size=\"7\">big news</font></center>");
    assert_eq!(html, "big news");
}

#[test]
fn test_allowed_structure_preserved() {
    let content = "<h2>Minutes</h2><ul><li>one</li><li>two</li></ul><blockquote><p>said</p></blockquote>";
    let html = HtmlFormat::default().render_html(content);
    assert_eq!(html, content);
}

#[test]
fn test_render_html_is_idempotent() {
    let format = HtmlFormat::default();
    let inputs = [
        "<p>plain</p>",
        "<p>1 < 2 & 2 > 1</p>",
        "<table><tr><td>cell</td></tr></table>",
        "<pre class=\"language-rust\">let x;</pre>",
        "<p><em>unclosed",
    ];
    for input in inputs {
        let once = format.render_html(input);
        let twice = format.render_html(&once);
        assert_eq!(once, twice, "render_html not idempotent for {input:?}");
    }
}

#[test]
fn test_filter_matches_render_for_storable_content() {
    let format = HtmlFormat::default();
    let content = "<p>hello <strong>world</strong></p>";
    assert_eq!(format.filter(content).unwrap(), format.render_html(content));
}

#[test]
fn test_filter_depth_bound_is_exact() {
    let format = HtmlFormat::default();

    let at_limit = format!(
        "{}x{}",
        "<div>".repeat(MAX_NESTING_DEPTH - 1),
        "</div>".repeat(MAX_NESTING_DEPTH - 1)
    );
    assert!(format.filter(&at_limit).is_ok());

    let over_limit = "<div>".repeat(MAX_NESTING_DEPTH + 1);
    assert!(format.filter(&over_limit).is_err());
}
