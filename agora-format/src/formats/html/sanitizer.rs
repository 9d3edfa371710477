//! HTML sanitization over an RcDom tree
//!
//! Pipeline: HTML string → RcDom → sanitized RcDom subtree → HTML string.
//! The sanitizer rebuilds an allowlisted copy of the parsed body rather
//! than mutating in place: every element, attribute, and URL in the output
//! has been explicitly admitted.
//!
//! Policy:
//! - allowlisted elements are kept, with an element-specific attribute
//!   allowlist;
//! - script-capable and interactive elements are dropped with their whole
//!   subtree;
//! - any other element is unwrapped: the tag goes, its children survive;
//! - comments, doctypes, and processing instructions are dropped;
//! - `href`/`src` must be relative or carry an `http`, `https`, or
//!   `mailto` scheme.

use crate::error::FormattingError;
use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, Attribute, ParseOpts};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use url::Url;

/// Elements admitted to sanitized output.
const ALLOWED_ELEMENTS: &[&str] = &[
    "a", "abbr", "b", "blockquote", "br", "caption", "code", "col", "colgroup", "dd", "del",
    "div", "dl", "dt", "em", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "i", "img", "li", "ol",
    "p", "pre", "q", "s", "span", "strong", "sub", "sup", "table", "tbody", "td", "tfoot", "th",
    "thead", "tr", "u", "ul",
];

/// Elements whose entire subtree is discarded. Extraction skips the same
/// set, so measured text always matches what rendering would show.
pub(super) const DROPPED_ELEMENTS: &[&str] = &[
    "applet", "base", "button", "embed", "form", "frame", "frameset", "head", "iframe", "input",
    "link", "math", "meta", "noscript", "object", "script", "select", "style", "svg", "template",
    "textarea", "title",
];

/// Nesting bound for stored content. Render paths clamp at this depth;
/// `filter` refuses content beyond it.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parse an untrusted HTML string into a DOM.
///
/// html5ever recovers from arbitrary malformed input, so this never fails.
pub fn parse_dom(content: &str) -> RcDom {
    parse_document(RcDom::default(), ParseOpts::default()).one(content)
}

/// The `<body>` of a parsed document.
///
/// The parser synthesizes `html` and `body` even for empty input; `None`
/// only occurs for exotic DOMs built by hand.
pub fn body(dom: &RcDom) -> Option<Handle> {
    let html = dom
        .document
        .children
        .borrow()
        .iter()
        .find(|node| element_name(node).as_deref() == Some("html"))
        .cloned()?;
    let body = html
        .children
        .borrow()
        .iter()
        .find(|node| element_name(node).as_deref() == Some("body"))
        .cloned();
    body
}

/// Sanitize a fragment of untrusted HTML. Total: content nested beyond
/// [`MAX_NESTING_DEPTH`] is silently dropped instead of failing.
pub fn sanitize(content: &str) -> String {
    match sanitize_inner(content, false) {
        Ok(html) => html,
        // Unreachable in the lenient mode; keep the page safe regardless.
        Err(_) => crate::formats::text::escape_html(content),
    }
}

/// Sanitize for storage: same policy, but content nested beyond
/// [`MAX_NESTING_DEPTH`] is rejected rather than truncated.
pub fn sanitize_checked(content: &str) -> Result<String, FormattingError> {
    sanitize_inner(content, true)
}

fn sanitize_inner(content: &str, strict: bool) -> Result<String, FormattingError> {
    let dom = parse_dom(content);
    let Some(body) = body(&dom) else {
        return Ok(String::new());
    };

    if strict {
        let depth = max_depth(&body);
        if depth > MAX_NESTING_DEPTH {
            return Err(FormattingError::NestingTooDeep(depth));
        }
    }

    let sanitized = sanitize_children(&body, 0);
    Ok(serialize_nodes(&sanitized))
}

/// Sanitize the children of a node, returning the admitted copies.
fn sanitize_children(node: &Handle, depth: usize) -> Vec<Handle> {
    if depth > MAX_NESTING_DEPTH {
        return Vec::new();
    }

    let mut out = Vec::new();
    for child in node.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => {
                out.push(create_text(&clean_text(&contents.borrow())));
            }
            NodeData::Element { name, attrs, .. } => {
                let tag = name.local.as_ref();
                if DROPPED_ELEMENTS.contains(&tag) {
                    continue;
                }
                if ALLOWED_ELEMENTS.contains(&tag) {
                    let kept = filter_attributes(tag, &attrs.borrow());
                    let element = create_element(name.clone(), kept);
                    element
                        .children
                        .borrow_mut()
                        .extend(sanitize_children(child, depth + 1));
                    if tag == "pre" {
                        reinstate_pre_newline(&element);
                    }
                    out.push(element);
                } else {
                    // Unknown tag: unwrap it, keep what it displayed.
                    out.extend(sanitize_children(child, depth + 1));
                }
            }
            // Comments, doctypes, and PIs never reach the output.
            _ => {}
        }
    }
    out
}

fn filter_attributes(tag: &str, attrs: &[Attribute]) -> Vec<Attribute> {
    attrs
        .iter()
        .filter(|attr| {
            let attr_name = attr.name.local.as_ref();
            if !allowed_attribute(tag, attr_name) {
                return false;
            }
            if is_url_attribute(tag, attr_name) {
                return safe_url(&attr.value);
            }
            true
        })
        .map(|attr| Attribute {
            name: attr.name.clone(),
            value: clean_text(&attr.value).into(),
        })
        .collect()
}

/// Entity references can decode into raw control characters; storage and
/// rendering both exclude them, so scrub everything the storable check
/// would reject.
fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

fn allowed_attribute(tag: &str, attr: &str) -> bool {
    matches!(
        (tag, attr),
        ("a", "href" | "title" | "rel" | "download")
            | ("img", "src" | "alt" | "title")
            | ("td" | "th", "colspan" | "rowspan")
            | ("pre" | "code", "class")
    )
}

fn is_url_attribute(tag: &str, attr: &str) -> bool {
    matches!((tag, attr), ("a", "href") | ("img", "src"))
}

/// The parser swallows one newline right after `<pre>`. If the kept text
/// still starts with one, put the swallowed newline back so serializing
/// and reparsing reproduces the same tree.
fn reinstate_pre_newline(element: &Handle) {
    let children = element.children.borrow();
    let Some(first) = children.first() else {
        return;
    };
    if let NodeData::Text { contents } = &first.data {
        let mut text = contents.borrow_mut();
        if text.starts_with('\n') {
            let restored = format!("\n{}", &**text);
            *text = restored.into();
        }
    }
}

/// Accept relative references and http/https/mailto absolutes; everything
/// else (javascript:, data:, vbscript:, ...) is removed with its attribute.
fn safe_url(value: &str) -> bool {
    match Url::parse(value.trim()) {
        Ok(url) => matches!(url.scheme(), "http" | "https" | "mailto"),
        Err(url::ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}

/// Deepest element nesting under the given node.
///
/// Iterative: the input is adversarial and must not dictate stack depth.
fn max_depth(root: &Handle) -> usize {
    let mut deepest = 0;
    let mut stack: Vec<(Handle, usize)> = vec![(root.clone(), 0)];

    while let Some((node, depth)) = stack.pop() {
        for child in node.children.borrow().iter() {
            if matches!(child.data, NodeData::Element { .. }) {
                let child_depth = depth + 1;
                deepest = deepest.max(child_depth);
                stack.push((child.clone(), child_depth));
            }
        }
    }
    deepest
}

fn serialize_nodes(nodes: &[Handle]) -> String {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for node in nodes {
        let serializable = SerializableHandle::from(node.clone());
        if serialize(&mut output, &serializable, opts.clone()).is_err() {
            return String::new();
        }
    }

    String::from_utf8(output).unwrap_or_default()
}

fn element_name(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref().to_string()),
        _ => None,
    }
}

fn create_element(name: html5ever::QualName, attrs: Vec<Attribute>) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name,
            attrs: RefCell::new(attrs),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}
