//! Text and structure extraction from parsed HTML
//!
//! All walks are iterative: input nesting depth is attacker-controlled and
//! must not dictate stack depth. Traversal is preorder, so results come
//! back in document order.

use super::sanitizer::DROPPED_ELEMENTS;
use crate::common::{embed_file_name, SlugCounter};
use crate::format::{Attachment, AttachmentKind, Heading};
use html5ever::Attribute;
use markup5ever_rcdom::{Handle, NodeData};

/// Elements that start and end a display line.
const BLOCK_ELEMENTS: &[&str] = &[
    "blockquote", "caption", "dd", "div", "dl", "dt", "h1", "h2", "h3", "h4", "h5", "h6", "hr",
    "li", "ol", "p", "pre", "table", "tbody", "tfoot", "thead", "tr", "ul",
];

enum Work {
    Node(Handle),
    LineBreak,
    PreEnd,
}

/// Collect the text a reader would see, with block boundaries as newlines.
///
/// Whitespace is collapsed the way a browser lays it out, except inside
/// `pre` where it is preserved verbatim.
pub fn plain_text(root: &Handle) -> String {
    let mut out = String::new();
    collect_text(root, &mut out);
    out.trim().to_string()
}

/// Collect all headings (`h1`–`h6`), in document order, with unique slugs.
pub fn headings(root: &Handle) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut slugs = SlugCounter::new();

    visit_elements(root, |tag, node, _attrs| {
        if let Some(level) = heading_level(tag) {
            let mut text = String::new();
            collect_text(node, &mut text);
            let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
            headings.push(Heading {
                slug: slugs.slug_for(&text),
                level,
                text,
            });
        }
    });
    headings
}

/// Collect embeds: `img` elements and explicitly downloadable links.
pub fn attachments(root: &Handle) -> Vec<Attachment> {
    let mut attachments = Vec::new();

    visit_elements(root, |tag, node, attrs| match tag {
        "img" => {
            if let Some(src) = attr_value(attrs, "src") {
                let name = attr_value(attrs, "alt")
                    .filter(|alt| !alt.trim().is_empty())
                    .map(|alt| alt.trim().to_string())
                    .unwrap_or_else(|| embed_file_name(&src));
                attachments.push(Attachment {
                    kind: AttachmentKind::Image,
                    url: src,
                    name,
                });
            }
        }
        "a" => {
            let Some(download) = attr_value(attrs, "download") else {
                return;
            };
            let Some(href) = attr_value(attrs, "href") else {
                return;
            };
            let mut label = String::new();
            collect_text(node, &mut label);
            let label = label.trim();
            let name = if !download.trim().is_empty() {
                download.trim().to_string()
            } else if !label.is_empty() {
                label.to_string()
            } else {
                embed_file_name(&href)
            };
            attachments.push(Attachment {
                kind: AttachmentKind::File,
                url: href,
                name,
            });
        }
        _ => {}
    });
    attachments
}

fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Preorder element visit over the whole subtree.
fn visit_elements(root: &Handle, mut visit: impl FnMut(&str, &Handle, &[Attribute])) {
    let mut stack: Vec<Handle> = vec![root.clone()];

    while let Some(node) = stack.pop() {
        if let NodeData::Element { name, attrs, .. } = &node.data {
            visit(name.local.as_ref(), &node, &attrs.borrow());
        }
        for child in node.children.borrow().iter().rev() {
            stack.push(child.clone());
        }
    }
}

fn attr_value(attrs: &[Attribute], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|attr| attr.name.local.as_ref() == name)
        .map(|attr| attr.value.to_string())
}

fn collect_text(root: &Handle, out: &mut String) {
    let mut stack: Vec<Work> = vec![Work::Node(root.clone())];
    let mut pre_depth = 0usize;

    while let Some(work) = stack.pop() {
        match work {
            Work::LineBreak => line_break(out),
            Work::PreEnd => pre_depth = pre_depth.saturating_sub(1),
            Work::Node(node) => match &node.data {
                NodeData::Text { contents } => {
                    let text = contents.borrow();
                    if pre_depth > 0 {
                        out.push_str(&text);
                    } else {
                        push_collapsed(out, &text);
                    }
                }
                NodeData::Element { name, .. } => {
                    let tag = name.local.as_ref();
                    if DROPPED_ELEMENTS.contains(&tag) {
                        continue;
                    }
                    if tag == "br" {
                        out.push('\n');
                        continue;
                    }
                    if BLOCK_ELEMENTS.contains(&tag) {
                        line_break(out);
                        stack.push(Work::LineBreak);
                        if tag == "pre" {
                            pre_depth += 1;
                            stack.push(Work::PreEnd);
                        }
                    } else if matches!(tag, "td" | "th")
                        && !out.is_empty()
                        && !out.ends_with(char::is_whitespace)
                    {
                        // Cells on one row stay on one line, separated.
                        out.push(' ');
                    }
                    for child in node.children.borrow().iter().rev() {
                        stack.push(Work::Node(child.clone()));
                    }
                }
                _ => {}
            },
        }
    }
}

fn line_break(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

/// Append text with browser-style whitespace collapsing.
fn push_collapsed(out: &mut String, text: &str) {
    let mut last_was_space = out.is_empty() || out.ends_with(char::is_whitespace);
    for c in text.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
        } else {
            out.push(c);
            last_was_space = false;
        }
    }
}
