//! Structure and text extraction from the comrak AST
//!
//! The plain-text walk is the basis of excerpts and of the visible-length
//! measurement: it keeps exactly what a reader would see and drops the
//! syntax. Block boundaries become single newlines.

use crate::common::{embed_file_name, SlugCounter};
use crate::format::{Attachment, AttachmentKind, Heading};
use comrak::nodes::{AstNode, NodeValue};

/// Collect the displayed text of a whole document.
pub fn plain_text<'a>(root: &'a AstNode<'a>) -> String {
    let mut out = String::new();
    collect_text(root, &mut out);
    out.trim().to_string()
}

/// Collect all headings, in document order, with unique slugs.
pub fn headings<'a>(root: &'a AstNode<'a>) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut slugs = SlugCounter::new();

    for node in root.descendants() {
        if let NodeValue::Heading(heading) = &node.data.borrow().value {
            let mut text = String::new();
            for child in node.children() {
                collect_text(child, &mut text);
            }
            let text = text.trim().to_string();
            headings.push(Heading {
                slug: slugs.slug_for(&text),
                level: heading.level,
                text,
            });
        }
    }
    headings
}

/// Collect image embeds, in document order.
pub fn attachments<'a>(root: &'a AstNode<'a>) -> Vec<Attachment> {
    let mut attachments = Vec::new();

    for node in root.descendants() {
        if let NodeValue::Image(link) = &node.data.borrow().value {
            let mut alt = String::new();
            for child in node.children() {
                collect_text(child, &mut alt);
            }
            let alt = alt.trim().to_string();
            let name = if alt.is_empty() {
                embed_file_name(&link.url)
            } else {
                alt
            };
            attachments.push(Attachment {
                kind: AttachmentKind::Image,
                url: link.url.clone(),
                name,
            });
        }
    }
    attachments
}

fn is_block(value: &NodeValue) -> bool {
    matches!(
        value,
        NodeValue::Paragraph
            | NodeValue::Heading(_)
            | NodeValue::CodeBlock(_)
            | NodeValue::HtmlBlock(_)
            | NodeValue::BlockQuote
            | NodeValue::List(_)
            | NodeValue::Item(_)
            | NodeValue::TaskItem(_)
            | NodeValue::Table(_)
            | NodeValue::TableRow(_)
            | NodeValue::ThematicBreak
    )
}

/// Recursively collect displayed text from a node.
fn collect_text<'a>(node: &'a AstNode<'a>, out: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => out.push_str(text),
        NodeValue::Code(code) => out.push_str(&code.literal),
        NodeValue::SoftBreak => out.push(' '),
        NodeValue::LineBreak => out.push('\n'),
        NodeValue::CodeBlock(block) => out.push_str(block.literal.trim_end_matches('\n')),
        NodeValue::HtmlBlock(block) => out.push_str(block.literal.trim_end_matches('\n')),
        // Raw HTML renders as escaped literal text, so it is displayed.
        NodeValue::HtmlInline(raw) => out.push_str(raw),
        NodeValue::TableRow(_) => {
            let mut cells = Vec::new();
            for cell in node.children() {
                let mut text = String::new();
                for inline in cell.children() {
                    collect_text(inline, &mut text);
                }
                cells.push(text.trim().to_string());
            }
            out.push_str(&cells.join(" "));
        }
        NodeValue::ThematicBreak => {}
        _ => {
            for child in node.children() {
                if is_block(&child.data.borrow().value) && !out.is_empty() && !out.ends_with('\n')
                {
                    out.push('\n');
                }
                collect_text(child, out);
            }
        }
    }
}
